//! Confetti overlay.

use crate::celebration::Confetti;
use crate::core::constants::{CONFETTI_FIELD_HEIGHT, CONFETTI_FIELD_WIDTH};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget, Frame};

const PALETTE: [Color; 6] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
    Color::White,
];

/// Draws particles over whatever is already in the area.
struct ConfettiLayer<'a> {
    confetti: &'a Confetti,
}

impl Widget for ConfettiLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let x_scale = area.width as f64 / CONFETTI_FIELD_WIDTH;
        let y_scale = area.height as f64 / CONFETTI_FIELD_HEIGHT;
        for p in &self.confetti.particles {
            if p.y < 0.0 {
                continue;
            }
            let col = (p.x * x_scale) as u16;
            let row = (p.y * y_scale) as u16;
            if col >= area.width || row >= area.height {
                continue;
            }
            let color = PALETTE[p.color as usize % PALETTE.len()];
            buf.get_mut(area.x + col, area.y + row)
                .set_char(p.glyph)
                .set_fg(color);
        }
    }
}

pub fn render_confetti(frame: &mut Frame, area: Rect, confetti: &Confetti) {
    if confetti.is_empty() {
        return;
    }
    frame.render_widget(ConfettiLayer { confetti }, area);
}
