//! UI rendering for the Bamboo Birthday Harvest.

use crate::bamboo::{BambooGame, GamePhase};
use crate::core::constants::PLAY_AREA_HEIGHT;
use crate::ui::game_common::{
    create_section_layout, info_line, render_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PANDA: &str = "ʕ•ᴥ•ʔ";
const WIN_TEXT: &str = "Woo-hoo! You collected enough bamboo! Unlocking surprise...";

/// Render the bamboo game section.
pub fn render_bamboo(frame: &mut Frame, area: Rect, game: &BambooGame) {
    let layout = create_section_layout(
        frame,
        area,
        " Bamboo Birthday Harvest ",
        Color::Green,
        8,
        24,
    );

    if game.phase == GamePhase::Idle {
        render_intro(frame, layout.content, game);
    } else {
        render_play_area(frame, layout.content, game);
    }
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if game.has_won() {
        render_banner(frame, layout.content, Color::Yellow, "🎉 Woo-hoo!", WIN_TEXT);
    }
}

fn render_intro(frame: &mut Frame, area: Rect, game: &BambooGame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            PANDA,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Help the panda collect {} bamboos to unlock a special birthday surprise!",
            game.win_threshold
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Map a logical x position to a display column.
fn to_col(x: i32, area_width: i32, width: usize) -> usize {
    if area_width <= 0 || width == 0 {
        return 0;
    }
    let col = (x.max(0) as f64 * width as f64 / area_width as f64).round() as usize;
    col.min(width - 1)
}

/// Render stalks growing up from the ground and the panda walking along it.
fn render_play_area(frame: &mut Frame, area: Rect, game: &BambooGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height < 2 {
        return;
    }

    let ground = height - 1;
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default()); width]; height];
    for cell in grid[ground].iter_mut() {
        *cell = ('▁', Style::default().fg(Color::DarkGray));
    }

    for bamboo in &game.bamboos {
        let col = to_col(bamboo.x, game.area_width, width);
        let rows = ((bamboo.height.max(0) as f64 / PLAY_AREA_HEIGHT as f64) * ground as f64)
            .round() as usize;
        let color = if bamboo.collected {
            Color::DarkGray
        } else {
            Color::Green
        };
        for i in 0..rows.min(ground) {
            let row = ground - 1 - i;
            let glyph = if i % 3 == 2 { '╫' } else { '┃' };
            grid[row][col] = (glyph, Style::default().fg(color));
        }
    }

    let panda_col = to_col(game.player.x, game.area_width, width);
    let panda_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    for (i, c) in PANDA.chars().enumerate() {
        if let Some(cell) = grid[ground - 1].get_mut(panda_col + i) {
            *cell = (c, panda_style);
        }
    }

    if let Some(effect) = game.effect {
        let col = to_col(effect.x, game.area_width, width);
        let row = ground.saturating_sub(
            ((effect.y.max(0) as f64 / PLAY_AREA_HEIGHT as f64) * ground as f64).round() as usize,
        );
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        for (i, c) in "+1".chars().enumerate() {
            if let Some(cell) = grid[row].get_mut(col + i) {
                *cell = (c, style);
            }
        }
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(c, style)| Span::styled(c.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &BambooGame) {
    let controls: &[(&str, &str)] = &[
        ("[←/→]", "Move"),
        ("[Space]", "Collect"),
        ("[Esc]", "Quit"),
    ];
    match game.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Press Enter to start!",
            Color::Yellow,
            &[("[Enter]", "Start"), ("[F2]", "Setup"), ("[Esc]", "Quit")],
        ),
        GamePhase::Playing => {
            let near = game.in_reach().count();
            let status = if near > 0 {
                format!("Bamboo within reach! ({})", near)
            } else {
                format!(
                    "Bamboo Collected: {} / {}",
                    game.player.collected, game.win_threshold
                )
            };
            render_status_bar(frame, area, &status, Color::Green, controls)
        }
        GamePhase::Celebrating | GamePhase::Won => {
            render_status_bar(frame, area, "Unlocking surprise...", Color::Yellow, &[])
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &BambooGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        info_line(
            "Collected",
            format!("{} / {}", game.player.collected, game.win_threshold),
            Color::White,
        ),
        info_line("Growing", game.bamboos.len().to_string(), Color::Green),
        Line::from(""),
    ];

    let progress = if game.win_threshold > 0 {
        (game.player.collected as f64 / game.win_threshold as f64).min(1.0)
    } else {
        1.0
    };
    let bar_width = (inner.width as usize).saturating_sub(2);
    let filled = (progress * bar_width as f64) as usize;
    lines.push(Line::from(Span::styled(
        " Progress:",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
