//! The birthday question set.

use super::types::QuizQuestion;

pub const INSIDE_JOKE_FEEDBACK: &str = "Aww, that's definitely worth remembering! 💕";

/// Default questions. `name` is the birthday person, who is also the right
/// answer to the dance-party question.
pub fn default_questions(name: &str) -> Vec<QuizQuestion> {
    let dancers = distinct(&["Me", name, "Both of us", "The cat"]);
    vec![
        QuizQuestion::free_text(
            1,
            "What was our first inside joke?",
            INSIDE_JOKE_FEEDBACK,
        ),
        QuizQuestion::multiple_choice(
            2,
            "Who is more likely to start a random dance party in the kitchen?",
            &dancers,
            name,
        ),
        QuizQuestion::multiple_choice(
            3,
            "What's her Hogwarts house?",
            &["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"],
            "Gryffindor",
        ),
        QuizQuestion::multiple_choice(
            4,
            "What's the one song that always gets her dancing?",
            &[
                "Dancing Queen",
                "Ek number ek number",
                "Shake It Off",
                "Despacito",
            ],
            "Ek number ek number",
        ),
    ]
}

/// Drop repeated options, keeping the first of each.
fn distinct<'a>(options: &[&'a str]) -> Vec<&'a str> {
    let mut unique: Vec<&str> = Vec::with_capacity(options.len());
    for option in options {
        if !unique.contains(option) {
            unique.push(*option);
        }
    }
    unique
}
