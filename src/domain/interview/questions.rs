//! The fixed interview script.
//!
//! Every conversation asks the same questions in the same order. Index 0 is
//! the opening question asked by the persona's introduction; the rest are
//! asked one per turn while the conversation is in the questioning stage.

/// Ordered interview questions, asked verbatim.
const QUESTIONS: [&str; 7] = [
    "What's your biggest concern about your future right now?",
    "What's one goal you'd like to achieve in the next 5 years?",
    "How much do you estimate the average cost of raising a child to be?",
    "Have you considered saving for your child's college education?",
    "Do you know about ETFs and how they can help in long-term savings for education?",
    "What is your current level of financial literacy?",
    "Do you have a baby or are you expecting one? If so, what are your plans for their future?",
];

/// Read-only access to the predefined question list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredefinedQuestions;

impl PredefinedQuestions {
    /// Index of the question asked in the opening turn.
    pub const OPENING_INDEX: usize = 0;

    /// Index of the first question asked after the opening turn.
    pub const FIRST_FOLLOW_UP_INDEX: usize = 1;

    /// Question at `index`, or `None` past the end of the script.
    pub fn get(index: usize) -> Option<&'static str> {
        QUESTIONS.get(index).copied()
    }

    /// The opening question.
    pub fn opening() -> &'static str {
        QUESTIONS[Self::OPENING_INDEX]
    }

    /// Number of questions in the script.
    pub fn len() -> usize {
        QUESTIONS.len()
    }

    /// Index of the final scripted question.
    pub fn last_index() -> usize {
        QUESTIONS.len() - 1
    }

    /// True when `index` addresses a scripted question.
    pub fn contains_index(index: usize) -> bool {
        index < QUESTIONS.len()
    }

    /// All questions in asking order.
    pub fn all() -> &'static [&'static str] {
        &QUESTIONS
    }
}
