//! The special birthday message.

use crate::celebration::MessageReveal;
use crate::ui::confetti::render_confetti;
use crate::ui::game_common::{centered_rect, render_status_bar};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_message(frame: &mut Frame, area: Rect, reveal: &MessageReveal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Special Message for {} ", reveal.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    if reveal.revealed {
        let width = chunks[0].width.saturating_sub(4).min(70);
        let body = centered_rect(width, chunks[0].height, chunks[0]);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                reveal.message.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "🐼 💕 🎂",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
        render_status_bar(
            frame,
            chunks[1],
            &format!("Happy Birthday {}!", reveal.name),
            Color::LightRed,
            &[("[F2]", "Setup"), ("[Esc]", "Quit")],
        );
    } else {
        let button = centered_rect(28, 3, chunks[0]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(button);
        frame.render_widget(block, button);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "🐼 Press to Reveal 🐼",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        render_status_bar(
            frame,
            chunks[1],
            "Something special is waiting...",
            Color::Yellow,
            &[("[Enter]", "Reveal"), ("[Esc]", "Quit")],
        );
    }

    render_confetti(frame, area, &reveal.confetti);
}
