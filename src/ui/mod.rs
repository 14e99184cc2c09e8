//! Terminal rendering.

mod bamboo_scene;
mod confetti;
mod game_common;
mod header;
mod message_scene;
mod quiz_scene;
mod setup_screen;

use crate::app::{App, Party, Section, Stage};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole screen for the current stage.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match &app.stage {
        Stage::Setup(form) => setup_screen::draw_setup(frame, area, form),
        Stage::Party(party) => draw_party(frame, area, party),
    }
}

fn draw_party(frame: &mut Frame, area: Rect, party: &Party) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, chunks[0], party);

    match party.section {
        Section::Game => bamboo_scene::render_bamboo(frame, chunks[1], &party.game),
        Section::Quiz => quiz_scene::render_quiz(frame, chunks[1], &party.quiz),
        Section::Message => message_scene::render_message(frame, chunks[1], &party.reveal),
    }

    let footer = Paragraph::new(format!("Made with ❤️ for {}", party.config.name))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
