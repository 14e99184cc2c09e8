//! Confetti physics and the message reveal.

use super::types::{Confetti, MessageReveal, Particle, RevealTask, CONFETTI_GLYPHS};
use crate::core::constants::{
    CONFETTI_FIELD_HEIGHT, CONFETTI_FIELD_WIDTH, CONFETTI_GRAVITY, CONFETTI_MAX_DRIFT,
    CONFETTI_MAX_FALL_SPEED, MESSAGE_CONFETTI_MS, MESSAGE_CONFETTI_PIECES,
};
use rand::Rng;

pub const PALETTE_SIZE: u8 = 6;

/// Add `count` pieces spread across the field, staggered above its top edge
/// so they rain in over a few seconds instead of all at once.
pub fn burst<R: Rng>(confetti: &mut Confetti, count: usize, rng: &mut R) {
    confetti.particles.reserve(count);
    for _ in 0..count {
        confetti.particles.push(Particle {
            x: rng.gen_range(0.0..CONFETTI_FIELD_WIDTH),
            y: -rng.gen_range(0.0..CONFETTI_FIELD_HEIGHT),
            vx: rng.gen_range(-CONFETTI_MAX_DRIFT..CONFETTI_MAX_DRIFT),
            vy: rng.gen_range(0.0..2.0),
            glyph: CONFETTI_GLYPHS[rng.gen_range(0..CONFETTI_GLYPHS.len())],
            color: rng.gen_range(0..PALETTE_SIZE),
        });
    }
}

/// Move every piece forward by `elapsed_ms`; pieces below the field are gone.
pub fn step(confetti: &mut Confetti, elapsed_ms: u64) {
    if confetti.is_empty() {
        return;
    }
    let dt = elapsed_ms as f64 / 1000.0;
    for p in &mut confetti.particles {
        p.vy = (p.vy + CONFETTI_GRAVITY * dt).min(CONFETTI_MAX_FALL_SPEED);
        p.x += p.vx * dt;
        p.y += p.vy * dt;
        // Wrap sideways so drift never empties a column.
        p.x = p.x.rem_euclid(CONFETTI_FIELD_WIDTH);
    }
    confetti.particles.retain(|p| p.y < CONFETTI_FIELD_HEIGHT);
}

/// Reveal the message and start the confetti. Only the first call counts.
pub fn reveal<R: Rng>(state: &mut MessageReveal, rng: &mut R) -> bool {
    if state.revealed {
        return false;
    }
    state.revealed = true;
    burst(&mut state.confetti, MESSAGE_CONFETTI_PIECES, rng);
    state.confetti_timer = Some(
        state
            .timers
            .schedule_once(MESSAGE_CONFETTI_MS, RevealTask::StopConfetti),
    );
    tracing::info!(name = %state.name, "birthday message revealed");
    true
}

pub fn advance_reveal(state: &mut MessageReveal, elapsed_ms: u64) {
    for task in state.timers.drain(elapsed_ms) {
        match task {
            RevealTask::StopConfetti => {
                state.confetti.clear();
                state.confetti_timer = None;
            }
        }
    }
    step(&mut state.confetti, elapsed_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_burst_adds_pieces_inside_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut confetti = Confetti::new();
        burst(&mut confetti, 50, &mut rng);
        assert_eq!(confetti.particles.len(), 50);
        for p in &confetti.particles {
            assert!(p.x >= 0.0 && p.x < CONFETTI_FIELD_WIDTH);
            assert!(p.y <= 0.0);
            assert!(p.color < PALETTE_SIZE);
        }
    }

    #[test]
    fn test_step_moves_pieces_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let mut confetti = Confetti::new();
        burst(&mut confetti, 10, &mut rng);
        let before: Vec<f64> = confetti.particles.iter().map(|p| p.y).collect();
        step(&mut confetti, 100);
        for (p, y0) in confetti.particles.iter().zip(before) {
            assert!(p.y > y0);
        }
    }

    #[test]
    fn test_pieces_fall_out_without_recycling() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut confetti = Confetti::new();
        burst(&mut confetti, 100, &mut rng);
        for _ in 0..200 {
            step(&mut confetti, 100);
        }
        assert!(confetti.is_empty());
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let mut state = MessageReveal::new("Trish", None);
        assert!(reveal(&mut state, &mut rng));
        assert_eq!(state.confetti.particles.len(), MESSAGE_CONFETTI_PIECES);
        assert!(!reveal(&mut state, &mut rng));
        assert_eq!(state.confetti.particles.len(), MESSAGE_CONFETTI_PIECES);
        assert_eq!(state.timers.pending(), 1);
    }

    #[test]
    fn test_confetti_stops_after_ten_seconds() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let mut state = MessageReveal::new("Trish", None);
        reveal(&mut state, &mut rng);
        advance_reveal(&mut state, 9_999);
        assert!(state.confetti_active());
        advance_reveal(&mut state, 1);
        assert!(!state.confetti_active());
        assert!(state.confetti.is_empty());
        assert!(state.revealed);
    }
}
