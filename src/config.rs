//! Session configuration
//!
//! Controls how many questions a session asks. The session length is half
//! the bank, rounded up, capped at `max_questions`.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{constants, error::Error};

/// Tunable parameters for a trivia session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SessionConfig {
    /// Upper bound on the number of questions asked in one session
    #[garde(range(min = constants::session::MIN_QUESTIONS, max = constants::session::MAX_QUESTIONS))]
    max_questions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_questions: constants::session::DEFAULT_MAX_QUESTIONS,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with a custom question cap
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `max_questions` is outside
    /// the allowed range.
    pub fn new(max_questions: usize) -> Result<Self, Error> {
        let config = Self { max_questions };
        config.validate()?;
        Ok(config)
    }

    /// The configured question cap
    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// Number of questions asked for a bank of `bank_len` questions
    pub fn session_length(&self, bank_len: usize) -> usize {
        bank_len.div_ceil(2).min(self.max_questions)
    }
}
