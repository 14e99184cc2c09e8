//! Party header: greeting and countdown.

use crate::app::Party;
use crate::countdown::CountdownState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 7;

pub fn render_header(frame: &mut Frame, area: Rect, party: &Party) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let greeting = Paragraph::new(vec![Line::from(Span::styled(
        format!("ʕ•ᴥ•ʔ  Happy Birthday {}!  ʕ•ᴥ•ʔ", party.config.name),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    ))])
    .alignment(Alignment::Center);
    frame.render_widget(greeting, chunks[0]);

    render_countdown(frame, chunks[1], party.arrived, &party.countdown.state);
}

fn render_countdown(frame: &mut Frame, area: Rect, arrived: bool, state: &CountdownState) {
    if arrived {
        let text = Paragraph::new(Span::styled(
            "It's Birthday Time! 🎉",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (i, (label, value)) in state.units().iter().enumerate() {
        if i > 0 {
            values.push(Span::raw("   "));
            labels.push(Span::raw("   "));
        }
        values.push(Span::styled(
            format!("{:^7}", value),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        labels.push(Span::styled(
            format!("{:^7}", label),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            "Countdown to the Big Day!",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(values),
        Line::from(labels),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
