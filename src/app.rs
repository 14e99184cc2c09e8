//! Top-level party state: setup form, countdown, and the three sections.
//!
//! The bamboo game unlocks the quiz, and finishing the quiz unlocks the
//! birthday message. Everything is driven by [`App::handle`] for key actions
//! and [`App::advance`] for elapsed time, so the whole flow can run without a
//! terminal.

use crate::bamboo::{self, BambooGame, BambooInput, BambooNotice, GamePhase};
use crate::celebration::{self, MessageReveal};
use crate::core::config::{BirthdayConfig, ConfigLayer};
use crate::countdown::{self, CountdownEngine, CountdownNotice};
use crate::quiz::{self, default_questions, Quiz, QuizInput, QuizNotice};
use crate::setup::{SetupForm, SetupInput};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Which part of the party page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Game,
    Quiz,
    Message,
}

/// Everything that exists once the party is configured.
#[derive(Debug, Clone)]
pub struct Party {
    pub config: BirthdayConfig,
    pub countdown: CountdownEngine,
    pub section: Section,
    pub game: BambooGame,
    pub quiz: Quiz,
    pub reveal: MessageReveal,
    /// Set when the countdown reports arrival.
    pub arrived: bool,
    /// Set when the game reports its win; the quiz opens once the
    /// celebration pause is over.
    pub game_won: bool,
}

impl Party {
    pub fn new(config: BirthdayConfig, now: DateTime<Utc>) -> Self {
        let mut party = Self {
            countdown: CountdownEngine::new(config.date),
            section: Section::Game,
            game: BambooGame::new(),
            quiz: Quiz::new(default_questions(&config.name)),
            reveal: MessageReveal::new(&config.name, config.message.as_deref()),
            arrived: false,
            game_won: false,
            config,
        };
        let notice = countdown::start(&mut party.countdown, now);
        party.on_countdown(notice);
        party
    }

    fn on_countdown(&mut self, notice: Option<CountdownNotice>) {
        if let Some(CountdownNotice::Arrived) = notice {
            self.arrived = true;
        }
    }

    fn on_game(&mut self, notice: Option<BambooNotice>) {
        if let Some(BambooNotice::Won { collected }) = notice {
            self.game_won = true;
            tracing::info!(collected, "quiz unlocks after the celebration");
        }
    }

    fn advance<R: Rng>(&mut self, elapsed_ms: u64, now: DateTime<Utc>, rng: &mut R) {
        let notice = countdown::advance(&mut self.countdown, elapsed_ms, now);
        self.on_countdown(notice);

        match self.section {
            Section::Game => {
                bamboo::advance(&mut self.game, elapsed_ms, rng);
                if self.game_won && self.game.phase == GamePhase::Won {
                    bamboo::stop(&mut self.game);
                    self.section = Section::Quiz;
                    tracing::info!("quiz unlocked");
                }
            }
            Section::Quiz => {
                if let Some(QuizNotice::Completed { score, total }) =
                    quiz::advance(&mut self.quiz, elapsed_ms)
                {
                    quiz::stop(&mut self.quiz);
                    self.section = Section::Message;
                    tracing::info!(score, total, "birthday message unlocked");
                }
            }
            Section::Message => celebration::advance_reveal(&mut self.reveal, elapsed_ms),
        }
    }

    /// Tear down every running timer.
    pub fn stop(&mut self) {
        countdown::stop(&mut self.countdown);
        bamboo::stop(&mut self.game);
        quiz::stop(&mut self.quiz);
    }
}

#[derive(Debug, Clone)]
pub enum Stage {
    Setup(SetupForm),
    Party(Box<Party>),
}

/// A key press after it has been mapped for the current stage and section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Setup(SetupInput),
    Game(BambooInput),
    Quiz(QuizInput),
    Reveal,
    /// Reopen the setup form from the party.
    OpenSetup,
    Quit,
    None,
}

/// What the caller should do after handling an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppOutcome {
    Continue,
    /// The setup form produced a new configuration; persist it.
    SaveConfig(BirthdayConfig),
    Quit,
}

pub struct App {
    pub stage: Stage,
    /// Last working configuration, restored when setup is cancelled.
    previous: Option<BirthdayConfig>,
}

impl App {
    pub fn with_config(config: BirthdayConfig, now: DateTime<Utc>) -> Self {
        tracing::info!(name = %config.name, date = %config.date, "party started");
        Self {
            previous: Some(config.clone()),
            stage: Stage::Party(Box::new(Party::new(config, now))),
        }
    }

    pub fn with_setup(form: SetupForm, previous: Option<BirthdayConfig>) -> Self {
        Self {
            stage: Stage::Setup(form),
            previous,
        }
    }

    pub fn party(&self) -> Option<&Party> {
        match &self.stage {
            Stage::Party(party) => Some(party.as_ref()),
            Stage::Setup(_) => None,
        }
    }

    pub fn section(&self) -> Option<Section> {
        self.party().map(|p| p.section)
    }

    pub fn handle<R: Rng>(
        &mut self,
        action: AppAction,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AppOutcome {
        match action {
            AppAction::Quit => return AppOutcome::Quit,
            AppAction::None => return AppOutcome::Continue,
            AppAction::OpenSetup => {
                if let Stage::Party(party) = &mut self.stage {
                    party.stop();
                    let form = SetupForm::from_layer(&ConfigLayer::from_saved(&party.config));
                    self.stage = Stage::Setup(form);
                }
                return AppOutcome::Continue;
            }
            _ => {}
        }

        match &mut self.stage {
            Stage::Setup(_) => match action {
                AppAction::Setup(input) => self.handle_setup(input, now),
                _ => AppOutcome::Continue,
            },
            Stage::Party(party) => {
                match (party.section, action) {
                    (Section::Game, AppAction::Game(input)) => {
                        let notice = bamboo::process_input(&mut party.game, input);
                        party.on_game(notice);
                    }
                    (Section::Quiz, AppAction::Quiz(input)) => {
                        quiz::process_input(&mut party.quiz, input, rng);
                    }
                    (Section::Message, AppAction::Reveal) => {
                        celebration::reveal(&mut party.reveal, rng);
                    }
                    _ => {}
                }
                AppOutcome::Continue
            }
        }
    }

    fn handle_setup(&mut self, input: SetupInput, now: DateTime<Utc>) -> AppOutcome {
        let Stage::Setup(form) = &mut self.stage else {
            return AppOutcome::Continue;
        };
        match input {
            SetupInput::Char(c) => form.handle_char_input(c),
            SetupInput::Backspace => form.handle_backspace(),
            SetupInput::NextField => form.next_field(),
            SetupInput::PrevField => form.prev_field(),
            SetupInput::Submit => {
                if let Some(config) = form.validate() {
                    *self = Self::with_config(config.clone(), now);
                    return AppOutcome::SaveConfig(config);
                }
            }
            SetupInput::Cancel => match self.previous.clone() {
                Some(config) => *self = Self::with_config(config, now),
                None => return AppOutcome::Quit,
            },
        }
        AppOutcome::Continue
    }

    /// Let `elapsed_ms` pass for every running component.
    pub fn advance<R: Rng>(&mut self, elapsed_ms: u64, now: DateTime<Utc>, rng: &mut R) {
        if let Stage::Party(party) = &mut self.stage {
            party.advance(elapsed_ms, now, rng);
        }
    }
}
