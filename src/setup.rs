//! Setup form state: name, date and optional message typed in the terminal.

use crate::core::config::{parse_birthday_date, validate_name, BirthdayConfig, ConfigLayer};
use chrono::{DateTime, SecondsFormat, Timelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Name,
    Date,
    Message,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Name => SetupField::Date,
            SetupField::Date => SetupField::Message,
            SetupField::Message => SetupField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Name => SetupField::Message,
            SetupField::Date => SetupField::Name,
            SetupField::Message => SetupField::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SetupField::Name => "Birthday Person's Name",
            SetupField::Date => "Birthday Date (YYYY-MM-DD)",
            SetupField::Message => "Special Message (Optional)",
        }
    }
}

/// Setup form actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupInput {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub name: String,
    pub date: String,
    pub message: String,
    pub focus: SetupField,
    pub validation_error: Option<String>,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            message: String::new(),
            focus: SetupField::Name,
            validation_error: None,
        }
    }

    /// Prefill from whatever partial configuration is known.
    pub fn from_layer(layer: &ConfigLayer) -> Self {
        let date = layer
            .date
            .as_deref()
            .and_then(|d| parse_birthday_date(d).ok())
            .map(display_date)
            .or_else(|| layer.date.clone())
            .unwrap_or_default();
        Self {
            name: layer.name.clone().unwrap_or_default(),
            date,
            message: layer.message.clone().unwrap_or_default(),
            ..Self::new()
        }
    }

    pub fn value(&self, field: SetupField) -> &str {
        match field {
            SetupField::Name => &self.name,
            SetupField::Date => &self.date,
            SetupField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            SetupField::Name => &mut self.name,
            SetupField::Date => &mut self.date,
            SetupField::Message => &mut self.message,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.focused_mut().push(c);
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        self.focused_mut().pop();
        self.validation_error = None;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Check the form, moving focus to the first bad field on failure.
    pub fn validate(&mut self) -> Option<BirthdayConfig> {
        if let Err(e) = validate_name(&self.name) {
            self.focus = SetupField::Name;
            self.validation_error = Some(e.to_string());
            return None;
        }
        let message = Some(self.message.as_str());
        match BirthdayConfig::new(&self.name, &self.date, message) {
            Ok(config) => {
                self.validation_error = None;
                Some(config)
            }
            Err(e) => {
                self.focus = SetupField::Date;
                self.validation_error = Some(e.to_string());
                None
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.clone().validate().is_some()
    }
}

/// Midnight UTC shows as a bare day; any other instant keeps its time.
fn display_date(date: DateTime<Utc>) -> String {
    if date.num_seconds_from_midnight() == 0 && date.nanosecond() == 0 {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut SetupForm, s: &str) {
        for c in s.chars() {
            form.handle_char_input(c);
        }
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = SetupForm::new();
        assert_eq!(form.focus, SetupField::Name);
        form.next_field();
        form.next_field();
        assert_eq!(form.focus, SetupField::Message);
        form.next_field();
        assert_eq!(form.focus, SetupField::Name);
        form.prev_field();
        assert_eq!(form.focus, SetupField::Message);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = SetupForm::new();
        type_str(&mut form, "Mei");
        form.next_field();
        type_str(&mut form, "2025-07-01");
        form.handle_backspace();
        assert_eq!(form.name, "Mei");
        assert_eq!(form.date, "2025-07-0");
    }

    #[test]
    fn test_validate_builds_config() {
        let mut form = SetupForm::new();
        type_str(&mut form, " Mei ");
        form.next_field();
        type_str(&mut form, "2025-07-01");
        let config = form.validate().unwrap();
        assert_eq!(config.name, "Mei");
        assert_eq!(config.message, None);
        assert_eq!(config.date.to_rfc3339(), "2025-07-01T00:00:00+00:00");
    }

    #[test]
    fn test_bad_date_focuses_date_field() {
        let mut form = SetupForm::new();
        type_str(&mut form, "Mei");
        form.next_field();
        form.next_field();
        type_str(&mut form, "hello");
        form.focus = SetupField::Message;
        form.date = "07/01/2025".into();
        assert!(form.validate().is_none());
        assert_eq!(form.focus, SetupField::Date);
        assert!(form.validation_error.is_some());
    }

    #[test]
    fn test_missing_name_reported_first() {
        let mut form = SetupForm::new();
        form.date = "bogus".into();
        form.focus = SetupField::Date;
        assert!(form.validate().is_none());
        assert_eq!(form.focus, SetupField::Name);
        assert_eq!(form.validation_error.as_deref(), Some("a name is required"));
    }

    #[test]
    fn test_from_layer_prefills() {
        let layer = ConfigLayer {
            name: Some("Mei".into()),
            date: Some("2025-07-01T00:00:00+00:00".into()),
            message: None,
        };
        let form = SetupForm::from_layer(&layer);
        assert_eq!(form.name, "Mei");
        assert_eq!(form.date, "2025-07-01");
        assert!(form.message.is_empty());
        assert!(form.is_valid());
    }

    #[test]
    fn test_from_layer_keeps_time_of_day() {
        let layer = ConfigLayer {
            name: Some("Mei".into()),
            date: Some("2025-06-01T20:30:00+02:00".into()),
            message: None,
        };
        let mut form = SetupForm::from_layer(&layer);
        assert_eq!(form.date, "2025-06-01T18:30:00Z");
        let config = form.validate().unwrap();
        assert_eq!(config.date.to_rfc3339(), "2025-06-01T18:30:00+00:00");
    }
}
