use crate::setup::{SetupField, SetupForm};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS: [SetupField; 3] = [SetupField::Name, SetupField::Date, SetupField::Message];

pub fn draw_setup(f: &mut Frame, area: Rect, form: &SetupForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Name
            Constraint::Length(4), // Date
            Constraint::Length(4), // Message
            Constraint::Length(2), // Validation
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Setup Birthday Celebration")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    for (field, chunk) in FIELDS.iter().zip(&chunks[1..4]) {
        draw_field(f, *chunk, form, *field);
    }

    let validation_text = if let Some(error) = &form.validation_error {
        Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if form.is_valid() {
        Line::from(Span::styled(
            "✓ Ready to party",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(validation_text), chunks[4]);

    let controls = Paragraph::new("[Tab] Next Field    [Enter] Save & Continue    [Esc] Cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[6]);
}

fn draw_field(f: &mut Frame, area: Rect, form: &SetupForm, field: SetupField) {
    let focused = form.focus == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    f.render_widget(
        Paragraph::new(Span::styled(field.label(), label_style)),
        Rect { height: 1, ..area },
    );

    let value = form.value(field);
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(
        input,
        Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1).min(3),
            ..area
        },
    );
}
