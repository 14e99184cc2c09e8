//! Quiz state machine: start, answer, submit, next, results.

use super::types::{QuestionKind, Quiz, QuizNotice, QuizPhase, QuizResults, QuizTask};
use crate::celebration;
use crate::core::constants::{QUIZ_COMPLETION_DELAY_MS, QUIZ_CONFETTI_MS, QUIZ_CONFETTI_PIECES};
use rand::Rng;

/// Shown on the results screen for every score.
pub const RESULT_MESSAGE: &str = "Amazing job! 💖";

/// Input actions for the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Typed character: text for free-text questions, `1`-`9` picks an option.
    Char(char),
    Backspace,
    /// Move the option highlight (and selection) up.
    Up,
    /// Move the option highlight (and selection) down.
    Down,
    /// Enter: start, submit, or go to the next question depending on state.
    Confirm,
    Other,
}

/// Process player input.
pub fn process_input<R: Rng>(quiz: &mut Quiz, input: QuizInput, rng: &mut R) {
    match input {
        QuizInput::Char(c) => match quiz.current().map(|q| q.is_scored()) {
            Some(true) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    select_option(quiz, index);
                }
            }
            Some(false) => input_char(quiz, c),
            None => {}
        },
        QuizInput::Backspace => backspace(quiz),
        QuizInput::Up => move_selection(quiz, false),
        QuizInput::Down => move_selection(quiz, true),
        QuizInput::Confirm => match quiz.phase {
            QuizPhase::NotStarted => start(quiz),
            QuizPhase::InProgress(_) => {
                if quiz.current().is_some_and(|q| q.answered) {
                    next_question(quiz, rng);
                } else {
                    submit(quiz);
                }
            }
            QuizPhase::Results => {}
        },
        QuizInput::Other => {}
    }
}

/// Arrow-key selection. The first press picks the highlighted option.
fn move_selection(quiz: &mut Quiz, down: bool) {
    let Some(question) = quiz.current() else {
        return;
    };
    let target = if question.answer.is_empty() {
        quiz.cursor
    } else if down {
        quiz.cursor + 1
    } else {
        quiz.cursor.saturating_sub(1)
    };
    select_option(quiz, target);
}

/// NotStarted → InProgress(0). An empty quiz goes straight to results.
pub fn start(quiz: &mut Quiz) {
    if quiz.phase != QuizPhase::NotStarted {
        return;
    }
    quiz.cursor = 0;
    quiz.phase = if quiz.questions.is_empty() {
        QuizPhase::Results
    } else {
        QuizPhase::InProgress(0)
    };
    tracing::info!(questions = quiz.questions.len(), "quiz started");
}

/// Choose an option on the active multiple-choice question.
pub fn select_option(quiz: &mut Quiz, index: usize) {
    let Some(question) = quiz.current_mut() else {
        return;
    };
    if question.answered {
        return;
    }
    let option = match &question.kind {
        QuestionKind::MultipleChoice { options, .. } => options.get(index).cloned(),
        QuestionKind::FreeText => None,
    };
    if let Some(option) = option {
        question.answer = option;
        quiz.cursor = index;
    }
}

/// Append to the free-text answer.
pub fn input_char(quiz: &mut Quiz, c: char) {
    if c.is_control() {
        return;
    }
    if let Some(question) = quiz.current_mut() {
        if !question.answered && !question.is_scored() {
            question.answer.push(c);
        }
    }
}

pub fn backspace(quiz: &mut Quiz) {
    if let Some(question) = quiz.current_mut() {
        if !question.answered && !question.is_scored() {
            question.answer.pop();
        }
    }
}

/// Replace the active question's answer outright.
pub fn set_answer(quiz: &mut Quiz, answer: &str) {
    if let Some(question) = quiz.current_mut() {
        if !question.answered {
            question.answer = answer.to_string();
        }
    }
}

/// Lock in the active answer. Scores multiple-choice questions answered
/// correctly. No-op when already answered or the answer is empty.
pub fn submit(quiz: &mut Quiz) {
    let Some(question) = quiz.current_mut() else {
        return;
    };
    if question.answered || !question.has_answer() {
        return;
    }
    question.answered = true;
    let point = question.is_scored() && question.is_correct();
    tracing::debug!(question = question.id, correct = point, "quiz answer submitted");
    if point {
        quiz.score += 1;
    }
}

/// Move to the next question, or to the results after the last one.
///
/// Entering results starts the confetti and schedules the completion notice;
/// both are delivered through [`advance`].
pub fn next_question<R: Rng>(quiz: &mut Quiz, rng: &mut R) {
    let Some(index) = quiz.current_index() else {
        return;
    };
    if !quiz.questions[index].answered {
        return;
    }

    if index + 1 < quiz.questions.len() {
        quiz.phase = QuizPhase::InProgress(index + 1);
        quiz.cursor = 0;
        return;
    }

    quiz.phase = QuizPhase::Results;
    celebration::burst(&mut quiz.confetti, QUIZ_CONFETTI_PIECES, rng);
    quiz.timers
        .schedule_once(QUIZ_CONFETTI_MS, QuizTask::StopConfetti);
    quiz.timers
        .schedule_once(QUIZ_COMPLETION_DELAY_MS, QuizTask::NotifyCompletion);
    tracing::info!(
        score = quiz.score,
        total = quiz.scored_question_count(),
        "quiz finished"
    );
}

/// Let `elapsed_ms` pass. Returns the completion notice when its delay ends.
pub fn advance(quiz: &mut Quiz, elapsed_ms: u64) -> Option<QuizNotice> {
    let deadline = quiz.timers.deadline_after(elapsed_ms);
    let mut notice = None;
    while let Some(task) = quiz.timers.pop_due(deadline) {
        match task {
            QuizTask::StopConfetti => quiz.confetti.clear(),
            QuizTask::NotifyCompletion => {
                if !quiz.completion_notified {
                    quiz.completion_notified = true;
                    notice = Some(QuizNotice::Completed {
                        score: quiz.score,
                        total: quiz.scored_question_count(),
                    });
                }
            }
        }
    }
    quiz.timers.advance_to(deadline);
    celebration::step(&mut quiz.confetti, elapsed_ms);
    notice
}

/// Results summary, available once the quiz reaches its results state.
pub fn results(quiz: &Quiz) -> Option<QuizResults> {
    if !quiz.is_completed() {
        return None;
    }
    Some(QuizResults {
        score: quiz.score,
        total: quiz.scored_question_count(),
        first_answer: quiz
            .questions
            .iter()
            .find(|q| !q.is_scored())
            .map(|q| q.answer.clone()),
        message: RESULT_MESSAGE,
    })
}

/// Feedback line for the active question once it has been answered.
pub fn feedback(quiz: &Quiz) -> Option<String> {
    let question = quiz.current().filter(|q| q.answered)?;
    match question.correct_answer() {
        None => question.feedback.clone(),
        Some(_) if question.is_correct() => Some("Correct! 🎉".to_string()),
        Some(correct) => Some(format!("Oops! The correct answer is: {}", correct)),
    }
}

/// Cancel pending confetti and notification timers.
pub fn stop(quiz: &mut Quiz) {
    quiz.timers.cancel_all();
    quiz.confetti.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::data::default_questions;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(21)
    }

    fn started_quiz() -> Quiz {
        let mut quiz = Quiz::new(default_questions("Trish"));
        start(&mut quiz);
        quiz
    }

    /// Answer the active question with `answer` and move on.
    fn answer_and_next(quiz: &mut Quiz, answer: &str, rng: &mut ChaCha8Rng) {
        set_answer(quiz, answer);
        submit(quiz);
        next_question(quiz, rng);
    }

    #[test]
    fn test_start_enters_first_question() {
        let quiz = started_quiz();
        assert_eq!(quiz.phase, QuizPhase::InProgress(0));
        assert_eq!(quiz.current().unwrap().id, 1);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut quiz = started_quiz();
        set_answer(&mut quiz, "x");
        submit(&mut quiz);
        next_question(&mut quiz, &mut rng());
        start(&mut quiz);
        assert_eq!(quiz.phase, QuizPhase::InProgress(1));
    }

    #[test]
    fn test_free_text_answer_not_scored() {
        let mut quiz = started_quiz();
        input_char(&mut quiz, 'h');
        input_char(&mut quiz, 'i');
        submit(&mut quiz);
        let q = quiz.current().unwrap();
        assert!(q.answered);
        assert_eq!(q.answer, "hi");
        assert_eq!(quiz.score, 0);
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let mut quiz = started_quiz();
        submit(&mut quiz);
        assert!(!quiz.current().unwrap().answered);
        set_answer(&mut quiz, "   ");
        submit(&mut quiz);
        assert!(!quiz.current().unwrap().answered);
    }

    #[test]
    fn test_cannot_edit_after_submit() {
        let mut quiz = started_quiz();
        set_answer(&mut quiz, "pickles");
        submit(&mut quiz);
        input_char(&mut quiz, '!');
        backspace(&mut quiz);
        set_answer(&mut quiz, "other");
        assert_eq!(quiz.current().unwrap().answer, "pickles");
    }

    #[test]
    fn test_next_requires_answer() {
        let mut quiz = started_quiz();
        next_question(&mut quiz, &mut rng());
        assert_eq!(quiz.phase, QuizPhase::InProgress(0));
    }

    #[test]
    fn test_correct_choice_scores_once() {
        let mut r = rng();
        let mut quiz = started_quiz();
        answer_and_next(&mut quiz, "pickles", &mut r);
        select_option(&mut quiz, 1);
        submit(&mut quiz);
        submit(&mut quiz);
        assert_eq!(quiz.score, 1);
        select_option(&mut quiz, 0);
        assert_eq!(quiz.current().unwrap().answer, "Trish");
    }

    #[test]
    fn test_wrong_choice_answers_without_score() {
        let mut r = rng();
        let mut quiz = started_quiz();
        answer_and_next(&mut quiz, "pickles", &mut r);
        select_option(&mut quiz, 3);
        submit(&mut quiz);
        assert!(quiz.current().unwrap().answered);
        assert_eq!(quiz.score, 0);
        assert_eq!(
            feedback(&quiz).as_deref(),
            Some("Oops! The correct answer is: Trish")
        );
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut r = rng();
        let mut quiz = started_quiz();
        answer_and_next(&mut quiz, "pickles", &mut r);
        select_option(&mut quiz, 9);
        assert!(quiz.current().unwrap().answer.is_empty());
    }

    #[test]
    fn test_all_correct_scores_count_minus_one() {
        let mut r = rng();
        let mut quiz = started_quiz();
        answer_and_next(&mut quiz, "the pickles", &mut r);
        answer_and_next(&mut quiz, "Trish", &mut r);
        answer_and_next(&mut quiz, "Gryffindor", &mut r);
        answer_and_next(&mut quiz, "Ek number ek number", &mut r);
        assert!(quiz.is_completed());
        let res = results(&quiz).unwrap();
        assert_eq!(res.score, 3);
        assert_eq!(res.total, quiz.questions.len() as u32 - 1);
        assert_eq!(res.first_answer.as_deref(), Some("the pickles"));
        assert_eq!(res.message, RESULT_MESSAGE);
    }

    #[test]
    fn test_completion_fires_once_after_delay() {
        let mut r = rng();
        let mut quiz = started_quiz();
        for a in ["x", "Me", "Ravenclaw", "Despacito"] {
            answer_and_next(&mut quiz, a, &mut r);
        }
        assert!(quiz.is_completed());
        assert!(!quiz.confetti.is_empty());
        assert_eq!(advance(&mut quiz, 7_999), None);
        assert!(quiz.confetti.is_empty());
        assert_eq!(
            advance(&mut quiz, 1),
            Some(QuizNotice::Completed { score: 0, total: 3 })
        );
        assert_eq!(advance(&mut quiz, 60_000), None);
        assert_eq!(quiz.pending_timers(), 0);
    }

    #[test]
    fn test_results_unavailable_before_end() {
        let quiz = started_quiz();
        assert!(results(&quiz).is_none());
    }

    #[test]
    fn test_free_text_feedback() {
        let mut quiz = started_quiz();
        assert!(feedback(&quiz).is_none());
        set_answer(&mut quiz, "x");
        submit(&mut quiz);
        assert_eq!(
            feedback(&quiz).as_deref(),
            Some(crate::quiz::data::INSIDE_JOKE_FEEDBACK)
        );
    }

    #[test]
    fn test_process_input_digits_and_confirm() {
        let mut r = rng();
        let mut quiz = Quiz::new(default_questions("Trish"));
        process_input(&mut quiz, QuizInput::Confirm, &mut r);
        assert_eq!(quiz.phase, QuizPhase::InProgress(0));

        // digits are text on the free-text question
        process_input(&mut quiz, QuizInput::Char('4'), &mut r);
        process_input(&mut quiz, QuizInput::Char('2'), &mut r);
        assert_eq!(quiz.current().unwrap().answer, "42");
        process_input(&mut quiz, QuizInput::Backspace, &mut r);
        assert_eq!(quiz.current().unwrap().answer, "4");

        process_input(&mut quiz, QuizInput::Confirm, &mut r); // submit
        process_input(&mut quiz, QuizInput::Confirm, &mut r); // next
        assert_eq!(quiz.phase, QuizPhase::InProgress(1));

        process_input(&mut quiz, QuizInput::Char('2'), &mut r);
        assert_eq!(quiz.current().unwrap().answer, "Trish");
        process_input(&mut quiz, QuizInput::Down, &mut r);
        assert_eq!(quiz.current().unwrap().answer, "Both of us");
        process_input(&mut quiz, QuizInput::Up, &mut r);
        process_input(&mut quiz, QuizInput::Confirm, &mut r);
        assert_eq!(quiz.score, 1);
    }

    #[test]
    fn test_first_arrow_picks_highlighted_option() {
        let mut r = rng();
        let mut quiz = started_quiz();
        answer_and_next(&mut quiz, "pickles", &mut r);
        process_input(&mut quiz, QuizInput::Down, &mut r);
        assert_eq!(quiz.current().unwrap().answer, "Me");
        process_input(&mut quiz, QuizInput::Up, &mut r);
        assert_eq!(quiz.current().unwrap().answer, "Me");
        assert_eq!(quiz.cursor, 0);
    }

    #[test]
    fn test_empty_quiz_has_zero_total() {
        let mut quiz = Quiz::new(Vec::new());
        start(&mut quiz);
        assert!(quiz.is_completed());
        let res = results(&quiz).unwrap();
        assert_eq!((res.score, res.total), (0, 0));
        assert_eq!(res.first_answer, None);
    }
}
