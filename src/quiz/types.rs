//! Birthday quiz data structures.

use crate::celebration::Confetti;
use crate::core::timers::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Any non-empty answer is accepted; never scored.
    FreeText,
    /// Scored against `correct`.
    MultipleChoice {
        options: Vec<String>,
        correct: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub kind: QuestionKind,
    /// The visitor's current answer (typed text or the chosen option).
    pub answer: String,
    pub answered: bool,
    /// Shown after a free-text answer is submitted.
    pub feedback: Option<String>,
}

impl QuizQuestion {
    pub fn free_text(id: u32, prompt: &str, feedback: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            kind: QuestionKind::FreeText,
            answer: String::new(),
            answered: false,
            feedback: Some(feedback.to_string()),
        }
    }

    pub fn multiple_choice(id: u32, prompt: &str, options: &[&str], correct: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            kind: QuestionKind::MultipleChoice {
                options: options.iter().map(|o| o.to_string()).collect(),
                correct: correct.to_string(),
            },
            answer: String::new(),
            answered: false,
            feedback: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. } => options,
            QuestionKind::FreeText => &[],
        }
    }

    pub fn correct_answer(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct, .. } => Some(correct),
            QuestionKind::FreeText => None,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.correct_answer() == Some(self.answer.as_str())
    }

    /// Whether the current answer would be accepted by submit.
    pub fn has_answer(&self) -> bool {
        match self.kind {
            QuestionKind::FreeText => !self.answer.trim().is_empty(),
            QuestionKind::MultipleChoice { .. } => !self.answer.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NotStarted,
    InProgress(usize),
    Results,
}

/// Derived summary shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub score: u32,
    /// Number of scored questions.
    pub total: u32,
    /// Verbatim answer to the first free-text question, if any.
    pub first_answer: Option<String>,
    pub message: &'static str,
}

/// Completion notification; returned once, after the results have been on
/// screen for a while.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizNotice {
    Completed { score: u32, total: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizTask {
    StopConfetti,
    NotifyCompletion,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    pub phase: QuizPhase,
    pub score: u32,
    /// Highlighted option on multiple-choice questions.
    pub cursor: usize,
    pub confetti: Confetti,
    pub(crate) completion_notified: bool,
    pub(crate) timers: Scheduler<QuizTask>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            phase: QuizPhase::NotStarted,
            score: 0,
            cursor: 0,
            confetti: Confetti::new(),
            completion_notified: false,
            timers: Scheduler::new(),
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::InProgress(i) => Some(i),
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut QuizQuestion> {
        match self.phase {
            QuizPhase::InProgress(i) => self.questions.get_mut(i),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.questions.len())
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Results
    }

    pub fn scored_question_count(&self) -> u32 {
        self.questions.iter().filter(|q| q.is_scored()).count() as u32
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }
}
