//! Integration test: the whole party, key press by key press.
//!
//! Setup form → bamboo game → quiz → birthday message, using the same key
//! mapping and time driving as the terminal loop.

use chrono::{DateTime, Duration, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use panda_party::app::{App, AppOutcome, Section, Stage};
use panda_party::bamboo::{Bamboo, GamePhase};
use panda_party::core::config::BirthdayConfig;
use panda_party::core::constants::{
    INPUT_POLL_MS, MESSAGE_CONFETTI_MS, MESSAGE_CONFETTI_PIECES, QUIZ_COMPLETION_DELAY_MS,
    WIN_EXIT_DELAY_MS,
};
use panda_party::input::map_key;
use panda_party::setup::SetupForm;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

struct Harness {
    app: App,
    now: DateTime<Utc>,
    rng: ChaCha8Rng,
}

impl Harness {
    fn new(app: App, now: DateTime<Utc>) -> Self {
        Self {
            app,
            now,
            rng: ChaCha8Rng::seed_from_u64(2025),
        }
    }

    fn key(&mut self, code: KeyCode) -> AppOutcome {
        let action = map_key(&self.app, KeyEvent::new(code, KeyModifiers::NONE));
        self.app.handle(action, self.now, &mut self.rng)
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    /// Run the clock forward in terminal-sized frames.
    fn wait(&mut self, ms: u64) {
        let mut left = ms;
        while left > 0 {
            let step = left.min(INPUT_POLL_MS);
            self.now += Duration::milliseconds(step as i64);
            self.app.advance(step, self.now, &mut self.rng);
            left -= step;
        }
    }

    fn section(&self) -> Option<Section> {
        self.app.section()
    }

    /// Plant stalks under the panda so the next collect picks them up.
    fn plant(&mut self, count: u64) {
        if let Stage::Party(party) = &mut self.app.stage {
            let x = party.game.player.x;
            for i in 0..count {
                party.game.bamboos.push(Bamboo {
                    id: 1_000 + i,
                    x,
                    height: 150,
                    collected: false,
                });
            }
        }
    }
}

fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 23, 59, 50).unwrap()
}

#[test]
fn test_full_party_from_setup() {
    let mut h = Harness::new(App::with_setup(SetupForm::new(), None), start_time());

    // Setup
    h.type_text("Mei");
    h.key(KeyCode::Tab);
    h.type_text("2025-06-03");
    h.key(KeyCode::Tab);
    h.type_text("You're my favourite panda");
    let outcome = h.key(KeyCode::Enter);
    let expected =
        BirthdayConfig::new("Mei", "2025-06-03", Some("You're my favourite panda")).unwrap();
    assert_eq!(outcome, AppOutcome::SaveConfig(expected));
    assert_eq!(h.section(), Some(Section::Game));

    // Countdown shows ten seconds left, then arrives while playing
    let countdown = &h.app.party().unwrap().countdown.state;
    assert_eq!(countdown.seconds, 10);
    assert!(!h.app.party().unwrap().arrived);

    // Game
    h.key(KeyCode::Enter);
    h.wait(10_000);
    assert!(h.app.party().unwrap().arrived);
    assert!(h.app.party().unwrap().countdown.is_complete());

    h.key(KeyCode::Left);
    h.plant(5);
    h.key(KeyCode::Char(' '));
    assert_eq!(
        h.app.party().unwrap().game.phase,
        GamePhase::Celebrating
    );
    h.wait(WIN_EXIT_DELAY_MS);
    assert_eq!(h.section(), Some(Section::Quiz));

    // Quiz
    h.key(KeyCode::Enter);
    h.type_text("pickles");
    h.key(KeyCode::Enter);
    h.key(KeyCode::Enter);
    for number in ['2', '1', '2'] {
        h.key(KeyCode::Char(number));
        h.key(KeyCode::Enter);
        h.key(KeyCode::Enter);
    }
    let quiz = &h.app.party().unwrap().quiz;
    assert!(quiz.is_completed());
    assert_eq!(quiz.score, 3);

    h.wait(QUIZ_COMPLETION_DELAY_MS);
    assert_eq!(h.section(), Some(Section::Message));

    // Message
    assert!(!h.app.party().unwrap().reveal.revealed);
    h.key(KeyCode::Enter);
    let reveal = &h.app.party().unwrap().reveal;
    assert!(reveal.revealed);
    assert_eq!(reveal.message, "You're my favourite panda");
    assert_eq!(reveal.confetti.particles.len(), MESSAGE_CONFETTI_PIECES);

    h.wait(MESSAGE_CONFETTI_MS);
    let reveal = &h.app.party().unwrap().reveal;
    assert!(!reveal.confetti_active());
    assert!(reveal.confetti.is_empty());

    assert_eq!(h.key(KeyCode::Esc), AppOutcome::Quit);
}

#[test]
fn test_game_keys_do_nothing_before_start() {
    let config = BirthdayConfig::new("Mei", "2025-07-01", None).unwrap();
    let mut h = Harness::new(App::with_config(config, start_time()), start_time());
    h.plant(5);
    h.key(KeyCode::Char(' '));
    h.key(KeyCode::Right);
    let game = &h.app.party().unwrap().game;
    assert_eq!(game.phase, GamePhase::Idle);
    assert_eq!(game.player.collected, 0);
    h.wait(10_000);
    assert_eq!(h.section(), Some(Section::Game));
}

#[test]
fn test_typing_q_in_quiz_does_not_quit() {
    let config = BirthdayConfig::new("Mei", "2025-07-01", None).unwrap();
    let mut h = Harness::new(App::with_config(config, start_time()), start_time());
    if let Stage::Party(party) = &mut h.app.stage {
        party.section = Section::Quiz;
    }
    h.key(KeyCode::Enter);
    assert_eq!(h.key(KeyCode::Char('q')), AppOutcome::Continue);
    let quiz = &h.app.party().unwrap().quiz;
    assert_eq!(quiz.current().unwrap().answer, "q");
}

#[test]
fn test_reconfigure_mid_party() {
    let config = BirthdayConfig::new("Mei", "2025-07-01", None).unwrap();
    let mut h = Harness::new(App::with_config(config, start_time()), start_time());
    h.key(KeyCode::Enter);
    h.key(KeyCode::F(2));
    assert!(h.section().is_none());

    for _ in 0..3 {
        h.key(KeyCode::Backspace);
    }
    h.type_text("Lin");
    let outcome = h.key(KeyCode::Enter);
    match outcome {
        AppOutcome::SaveConfig(config) => assert_eq!(config.name, "Lin"),
        other => panic!("expected save, got {:?}", other),
    }
    let party = h.app.party().unwrap();
    assert_eq!(party.config.name, "Lin");
    assert_eq!(party.game.phase, GamePhase::Idle);
}
