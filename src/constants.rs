//! Configuration constants for the trivia engine
//!
//! This module contains the limits used to validate question banks and
//! session configuration.

/// Question bank constants
pub mod question {
    /// Number of answers every question carries (one correct, three distractors)
    pub const ANSWER_COUNT: usize = 4;
    /// Minimum length of a question's text
    pub const MIN_TEXT_LENGTH: usize = 1;
    /// Maximum length of a question's text
    pub const MAX_TEXT_LENGTH: usize = 200;
    /// Minimum length of a single answer
    pub const MIN_ANSWER_LENGTH: usize = 1;
    /// Maximum length of a single answer
    pub const MAX_ANSWER_LENGTH: usize = 200;
    /// Maximum number of questions in a bank
    pub const MAX_BANK_SIZE: usize = 1000;
}

/// Session configuration constants
pub mod session {
    /// Questions asked per session unless configured otherwise
    pub const DEFAULT_MAX_QUESTIONS: usize = 3;
    /// Smallest allowed cap on questions per session
    pub const MIN_QUESTIONS: usize = 1;
    /// Largest allowed cap on questions per session
    pub const MAX_QUESTIONS: usize = 100;
}

/// User-facing strings
pub mod text {
    /// Shown after a correct answer
    pub const CORRECT_ANSWER: &str = "Correct!";
    /// Shown after a wrong answer
    pub const WRONG_ANSWER: &str = "Sorry, that's wrong.";
}
