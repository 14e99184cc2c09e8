//! UI rendering for the birthday quiz.

use crate::quiz::{self, Quiz, QuizPhase, QuizQuestion};
use crate::ui::confetti::render_confetti;
use crate::ui::game_common::{
    create_section_layout, info_line, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_quiz(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let layout = create_section_layout(
        frame,
        area,
        " Birthday Knowledge Quiz ",
        Color::Magenta,
        8,
        22,
    );

    match quiz.phase {
        QuizPhase::NotStarted => render_intro(frame, layout.content),
        QuizPhase::InProgress(index) => {
            if let Some(question) = quiz.questions.get(index) {
                render_question(frame, layout.content, quiz, index, question);
            }
        }
        QuizPhase::Results => render_results(frame, layout.content, quiz),
    }
    render_status_bar_content(frame, layout.status_bar, quiz);
    render_info_panel(frame, layout.info_panel, quiz);
    render_confetti(frame, area, &quiz.confetti);
}

fn title(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        title("Birthday Knowledge Quiz".to_string()),
        Line::from(""),
        Line::from(
            "Let's Quiz the birthday star! 🎉 Answer these questions to reveal a special message.",
        ),
        Line::from(""),
        Line::from(Span::styled(
            "🎈 Press Enter to start 🎈",
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_question(
    frame: &mut Frame,
    area: Rect,
    quiz: &Quiz,
    index: usize,
    question: &QuizQuestion,
) {
    let mut lines = vec![
        title(format!("Question {} of {}", index + 1, quiz.questions.len())),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if question.is_scored() {
        for (i, option) in question.options().iter().enumerate() {
            let chosen = *option == question.answer;
            let marker = if chosen { "▶" } else { " " };
            let is_correct = question.correct_answer() == Some(option.as_str());
            let color = if question.answered && is_correct {
                Color::Green
            } else if chosen {
                Color::Yellow
            } else {
                Color::Gray
            };
            lines.push(Line::from(Span::styled(
                format!(" {} {}. {}", marker, i + 1, option),
                Style::default().fg(color),
            )));
        }
    } else {
        let text = if question.answer.is_empty() && !question.answered {
            Span::styled(
                "Type your answer here...",
                Style::default().fg(Color::DarkGray),
            )
        } else if question.answered {
            Span::styled(question.answer.clone(), Style::default().fg(Color::Cyan))
        } else {
            Span::styled(
                format!("{}_", question.answer),
                Style::default().fg(Color::White),
            )
        };
        lines.push(Line::from(vec![Span::raw(" > "), text]));
    }

    if let Some(feedback) = quiz::feedback(quiz) {
        let color = if !question.is_scored() || question.is_correct() {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            feedback,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_results(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let Some(results) = quiz::results(quiz) else {
        return;
    };
    let mut lines = vec![
        Line::from(""),
        title("Quiz Complete!".to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!("🎂 Score: {} / {} 🎂", results.score, results.total),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(results.message),
    ];
    if let Some(answer) = results.first_answer {
        lines.push(Line::from(format!(
            "Your memory of your inside joke: \"{}\" is adorable!",
            answer
        )));
    }
    lines.push(Line::from("Happy Birthday! 🎉"));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    match (quiz.phase, quiz.current()) {
        (QuizPhase::NotStarted, _) => render_status_bar(
            frame,
            area,
            "Ready when you are!",
            Color::Yellow,
            &[("[Enter]", "Start Quiz"), ("[Esc]", "Quit")],
        ),
        (QuizPhase::InProgress(_), Some(q)) if q.answered => {
            let action = if quiz.is_last_question() {
                "See Results"
            } else {
                "Next Question"
            };
            render_status_bar(
                frame,
                area,
                "Answer locked in",
                Color::Green,
                &[("[Enter]", action), ("[Esc]", "Quit")],
            )
        }
        (QuizPhase::InProgress(_), Some(q)) if q.is_scored() => render_status_bar(
            frame,
            area,
            "Pick an answer",
            Color::White,
            &[
                ("[1-9/↑↓]", "Choose"),
                ("[Enter]", "Submit"),
                ("[Esc]", "Quit"),
            ],
        ),
        (QuizPhase::InProgress(_), _) => render_status_bar(
            frame,
            area,
            "Type your answer",
            Color::White,
            &[("[Enter]", "Submit"), ("[Esc]", "Quit")],
        ),
        (QuizPhase::Results, _) => render_status_bar(
            frame,
            area,
            "Unlocking your special message...",
            Color::Yellow,
            &[],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let answered = quiz.questions.iter().filter(|q| q.answered).count();
    let lines = vec![
        info_line(
            "Answered",
            format!("{} / {}", answered, quiz.questions.len()),
            Color::White,
        ),
        info_line(
            "Score",
            format!("{} / {}", quiz.score, quiz.scored_question_count()),
            Color::Yellow,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
