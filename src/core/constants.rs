// Main loop
pub const INPUT_POLL_MS: u64 = 50;

// Countdown
pub const COUNTDOWN_TICK_MS: u64 = 1000;
pub const MS_PER_SECOND: i64 = 1000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

// Bamboo game play area (logical pixels)
pub const PLAY_AREA_WIDTH: i32 = 600;
pub const PLAY_AREA_HEIGHT: i32 = 300;
pub const PLAYER_START_X: i32 = 30;
pub const PLAYER_STEP: i32 = 40;
pub const PLAYER_MIN_X: i32 = 10;
pub const PLAYER_RIGHT_MARGIN: i32 = 70;
pub const COLLECT_RADIUS: i32 = 60;

// Bamboo spawning
pub const BAMBOO_SPAWN_INTERVAL_MS: u64 = 2000;
pub const BAMBOO_CLEANUP_INTERVAL_MS: u64 = 10_000;
pub const BAMBOO_RETENTION_CAP: usize = 10;
pub const BAMBOO_SPAWN_MARGIN: i32 = 40;
pub const BAMBOO_MIN_HEIGHT: i32 = 100;
pub const BAMBOO_HEIGHT_RANGE: i32 = 80;
pub const BAMBOO_BITE: i32 = 20;

// Bamboo game session
pub const BAMBOO_WIN_THRESHOLD: u32 = 5;
pub const COLLECT_EFFECT_MS: u64 = 800;
pub const WIN_EXIT_DELAY_MS: u64 = 2000;

// Quiz
pub const QUIZ_COMPLETION_DELAY_MS: u64 = 8000;
pub const QUIZ_CONFETTI_MS: u64 = 7000;
pub const QUIZ_CONFETTI_PIECES: usize = 300;

// Birthday message
pub const MESSAGE_CONFETTI_MS: u64 = 10_000;
pub const MESSAGE_CONFETTI_PIECES: usize = 500;

// Confetti simulation (field units, per second)
pub const CONFETTI_GRAVITY: f64 = 6.0;
pub const CONFETTI_MAX_FALL_SPEED: f64 = 14.0;
pub const CONFETTI_MAX_DRIFT: f64 = 3.0;
pub const CONFETTI_FIELD_WIDTH: f64 = 100.0;
pub const CONFETTI_FIELD_HEIGHT: f64 = 40.0;
