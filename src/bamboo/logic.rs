//! Game logic for the Bamboo Birthday Harvest.

use super::types::{
    is_collectable, Bamboo, BambooGame, BambooNotice, BambooTask, CollectEffect, GamePhase,
    MoveDirection, Player,
};
use crate::core::constants::{
    BAMBOO_BITE, BAMBOO_CLEANUP_INTERVAL_MS, BAMBOO_HEIGHT_RANGE, BAMBOO_MIN_HEIGHT,
    BAMBOO_RETENTION_CAP, BAMBOO_SPAWN_INTERVAL_MS, BAMBOO_SPAWN_MARGIN, COLLECT_EFFECT_MS,
    PLAYER_MIN_X, PLAYER_RIGHT_MARGIN, PLAYER_STEP, WIN_EXIT_DELAY_MS,
};
use rand::Rng;

/// Input actions for the bamboo game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BambooInput {
    /// Start (or restart) a session (Enter / S).
    Start,
    /// Move the panda (Left / Right).
    Move(MoveDirection),
    /// Collect nearby bamboo (Space / Up).
    Collect,
    /// Any other key.
    Other,
}

/// Process player input. Returns the win notice if this input caused it.
pub fn process_input(game: &mut BambooGame, input: BambooInput) -> Option<BambooNotice> {
    match input {
        BambooInput::Start => {
            start(game);
            None
        }
        BambooInput::Move(direction) => {
            move_player(game, direction);
            None
        }
        BambooInput::Collect => collect(game),
        BambooInput::Other => None,
    }
}

/// Begin a fresh session. Ignored while a session is still running.
pub fn start(game: &mut BambooGame) {
    if game.is_playing() {
        return;
    }

    game.timers.cancel_all();
    game.player = Player::default();
    game.bamboos.clear();
    game.effect = None;
    game.win_notified = false;
    game.phase = GamePhase::Playing;

    game.spawn_timer = Some(
        game.timers
            .schedule_repeating(BAMBOO_SPAWN_INTERVAL_MS, BambooTask::Spawn),
    );
    game.cleanup_timer = Some(
        game.timers
            .schedule_repeating(BAMBOO_CLEANUP_INTERVAL_MS, BambooTask::Cleanup),
    );

    tracing::info!(threshold = game.win_threshold, "bamboo session started");
}

/// Step the panda left or right, clamped to the play area.
pub fn move_player(game: &mut BambooGame, direction: MoveDirection) {
    if game.phase != GamePhase::Playing {
        return;
    }
    let x = game.player.x;
    game.player.x = match direction {
        MoveDirection::Left => (x - PLAYER_STEP).max(PLAYER_MIN_X),
        MoveDirection::Right => (x + PLAYER_STEP).min(game.area_width - PLAYER_RIGHT_MARGIN),
    };
}

/// Collect every uncollected stalk within reach.
///
/// Each stalk counts once. The win notice is returned by the collect that
/// first brings the count to the threshold, however far past it the count
/// jumps.
pub fn collect(game: &mut BambooGame) -> Option<BambooNotice> {
    if game.phase != GamePhase::Playing {
        return None;
    }

    let player_x = game.player.x;
    let mut last_hit = None;
    for bamboo in game
        .bamboos
        .iter_mut()
        .filter(|b| is_collectable(b, player_x))
    {
        last_hit = Some((bamboo.x, bamboo.height - 30));
        bamboo.collected = true;
        bamboo.height -= BAMBOO_BITE;
        game.player.collected += 1;
    }

    let (x, y) = last_hit?;
    game.effect_seq += 1;
    game.effect = Some(CollectEffect {
        x,
        y,
        seq: game.effect_seq,
    });
    game.timers.schedule_once(
        COLLECT_EFFECT_MS,
        BambooTask::EffectExpired(game.effect_seq),
    );

    if game.player.collected >= game.win_threshold && !game.win_notified {
        return Some(declare_win(game));
    }
    None
}

fn declare_win(game: &mut BambooGame) -> BambooNotice {
    game.win_notified = true;
    game.phase = GamePhase::Celebrating;
    if let Some(id) = game.spawn_timer.take() {
        game.timers.cancel(id);
    }
    if let Some(id) = game.cleanup_timer.take() {
        game.timers.cancel(id);
    }
    game.timers
        .schedule_once(WIN_EXIT_DELAY_MS, BambooTask::EndCelebration);

    tracing::info!(collected = game.player.collected, "bamboo harvest won");
    BambooNotice::Won {
        collected: game.player.collected,
    }
}

/// Sprout a stalk at a random position with a random height.
pub fn spawn<R: Rng>(game: &mut BambooGame, rng: &mut R) {
    let max_x = (game.area_width - BAMBOO_SPAWN_MARGIN).max(1);
    let bamboo = Bamboo {
        id: game.next_bamboo_id,
        x: rng.gen_range(0..max_x),
        height: BAMBOO_MIN_HEIGHT + rng.gen_range(0..BAMBOO_HEIGHT_RANGE),
        collected: false,
    };
    game.next_bamboo_id += 1;
    game.bamboos.push(bamboo);
}

/// Keep only the most recent stalks.
pub fn cleanup(game: &mut BambooGame) {
    let len = game.bamboos.len();
    if len > BAMBOO_RETENTION_CAP {
        game.bamboos.drain(..len - BAMBOO_RETENTION_CAP);
    }
}

/// Let `elapsed_ms` pass, running spawn/cleanup/expiry timers that fall due.
pub fn advance<R: Rng>(game: &mut BambooGame, elapsed_ms: u64, rng: &mut R) {
    let deadline = game.timers.deadline_after(elapsed_ms);
    while let Some(task) = game.timers.pop_due(deadline) {
        match task {
            BambooTask::Spawn => {
                if game.phase == GamePhase::Playing {
                    spawn(game, rng);
                }
            }
            BambooTask::Cleanup => cleanup(game),
            BambooTask::EffectExpired(seq) => {
                if game.effect.is_some_and(|e| e.seq == seq) {
                    game.effect = None;
                }
            }
            BambooTask::EndCelebration => game.phase = GamePhase::Won,
        }
    }
    game.timers.advance_to(deadline);
}

/// Tear the session down: cancel every timer and drop the effect.
pub fn stop(game: &mut BambooGame) {
    game.timers.cancel_all();
    game.spawn_timer = None;
    game.cleanup_timer = None;
    game.effect = None;
    if game.is_playing() {
        game.phase = if game.win_notified {
            GamePhase::Won
        } else {
            GamePhase::Idle
        };
    }
}
