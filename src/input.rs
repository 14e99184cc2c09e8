//! Key handling.
//!
//! Maps a crossterm key event to an [`AppAction`] for the current stage and
//! section. Text fields swallow printable keys, so quitting from them goes
//! through Esc or Ctrl+C.

use crate::app::{App, AppAction, Section, Stage};
use crate::bamboo::{BambooInput, MoveDirection};
use crate::quiz::QuizInput;
use crate::setup::SetupInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn map_key(app: &App, key: KeyEvent) -> AppAction {
    if key.kind == KeyEventKind::Release {
        return AppAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppAction::Quit;
    }

    match &app.stage {
        Stage::Setup(_) => map_setup(key),
        Stage::Party(party) => {
            // 1. Keys shared by every section
            match key.code {
                KeyCode::Esc => return AppAction::Quit,
                KeyCode::F(2) => return AppAction::OpenSetup,
                _ => {}
            }
            // 2. Section-specific keys
            match party.section {
                Section::Game => map_game(key),
                Section::Quiz => AppAction::Quiz(map_quiz(key)),
                Section::Message => map_message(key),
            }
        }
    }
}

fn map_setup(key: KeyEvent) -> AppAction {
    let input = match key.code {
        KeyCode::Char(c) => SetupInput::Char(c),
        KeyCode::Backspace => SetupInput::Backspace,
        KeyCode::Tab | KeyCode::Down => SetupInput::NextField,
        KeyCode::BackTab | KeyCode::Up => SetupInput::PrevField,
        KeyCode::Enter => SetupInput::Submit,
        KeyCode::Esc => SetupInput::Cancel,
        _ => return AppAction::None,
    };
    AppAction::Setup(input)
}

fn map_game(key: KeyEvent) -> AppAction {
    let input = match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => BambooInput::Start,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            BambooInput::Move(MoveDirection::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            BambooInput::Move(MoveDirection::Right)
        }
        KeyCode::Char(' ') | KeyCode::Up => BambooInput::Collect,
        KeyCode::Char('q') | KeyCode::Char('Q') => return AppAction::Quit,
        _ => BambooInput::Other,
    };
    AppAction::Game(input)
}

fn map_quiz(key: KeyEvent) -> QuizInput {
    match key.code {
        KeyCode::Char(c) => QuizInput::Char(c),
        KeyCode::Backspace => QuizInput::Backspace,
        KeyCode::Up => QuizInput::Up,
        KeyCode::Down => QuizInput::Down,
        KeyCode::Enter => QuizInput::Confirm,
        _ => QuizInput::Other,
    }
}

fn map_message(key: KeyEvent) -> AppAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => AppAction::Reveal,
        KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
        _ => AppAction::None,
    }
}
