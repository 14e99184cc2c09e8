//! Bamboo Birthday Harvest data structures.
//!
//! The panda walks along the bottom of the play area and collects bamboo
//! stalks that sprout at random positions. Positions are logical pixels;
//! the terminal scene scales them to columns.

use crate::core::constants::{
    BAMBOO_WIN_THRESHOLD, COLLECT_RADIUS, PLAYER_START_X, PLAY_AREA_WIDTH,
};
use crate::core::timers::{Scheduler, TimerId};

/// Session phase.
///
/// `Celebrating` is the short pause after the win notice while the win
/// message is on screen; the session leaves Playing when it ends. Together
/// with `Won` it is the terminal state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Playing,
    Celebrating,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// A bamboo stalk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bamboo {
    pub id: u64,
    /// Left edge in logical pixels.
    pub x: i32,
    pub height: i32,
    pub collected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    /// Stalks collected this session. Never decreases until the next start.
    pub collected: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            collected: 0,
        }
    }
}

/// Transient "+1" shown where a stalk was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectEffect {
    pub x: i32,
    pub y: i32,
    pub seq: u64,
}

/// Win notification; returned at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BambooNotice {
    Won { collected: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BambooTask {
    Spawn,
    Cleanup,
    EffectExpired(u64),
    EndCelebration,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct BambooGame {
    pub phase: GamePhase,
    pub player: Player,
    /// Recent stalks, oldest first.
    pub bamboos: Vec<Bamboo>,
    pub effect: Option<CollectEffect>,

    pub area_width: i32,
    pub win_threshold: u32,

    pub(crate) next_bamboo_id: u64,
    pub(crate) effect_seq: u64,
    pub(crate) win_notified: bool,
    pub(crate) timers: Scheduler<BambooTask>,
    pub(crate) spawn_timer: Option<TimerId>,
    pub(crate) cleanup_timer: Option<TimerId>,
}

impl Default for BambooGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BambooGame {
    pub fn new() -> Self {
        Self::with_area(PLAY_AREA_WIDTH, BAMBOO_WIN_THRESHOLD)
    }

    pub fn with_area(area_width: i32, win_threshold: u32) -> Self {
        Self {
            phase: GamePhase::Idle,
            player: Player::default(),
            bamboos: Vec::new(),
            effect: None,
            area_width,
            win_threshold,
            next_bamboo_id: 0,
            effect_seq: 0,
            win_notified: false,
            timers: Scheduler::new(),
            spawn_timer: None,
            cleanup_timer: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::Celebrating)
    }

    /// True once the collected count has reached the threshold this session.
    pub fn has_won(&self) -> bool {
        self.win_notified
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Uncollected stalks the panda could collect from where it stands.
    pub fn in_reach(&self) -> impl Iterator<Item = &Bamboo> {
        let x = self.player.x;
        self.bamboos.iter().filter(move |b| is_collectable(b, x))
    }
}

pub(crate) fn is_collectable(bamboo: &Bamboo, player_x: i32) -> bool {
    !bamboo.collected && (bamboo.x - player_x).abs() < COLLECT_RADIUS && bamboo.height > 0
}
