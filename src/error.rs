//! Error type shared by the question bank, session and screen router

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building or playing a trivia session
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The question bank or session configuration is malformed
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A question bank could not be parsed from JSON
    #[error("malformed question bank: {0}")]
    Json(String),
    /// The selected display index does not name one of the shown answers
    #[error("selection {0} is out of range")]
    SelectionOutOfRange(usize),
    /// The session already reached a terminal state
    #[error("session is finished")]
    SessionFinished,
    /// An answer was submitted while no game is on screen
    #[error("no game in progress")]
    NotInGame,
}

impl From<garde::Report> for Error {
    fn from(report: garde::Report) -> Self {
        Self::InvalidConfiguration(report.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::SelectionOutOfRange(7).to_string(),
            "selection 7 is out of range"
        );
        assert_eq!(Error::SessionFinished.to_string(), "session is finished");
        assert_eq!(Error::NotInGame.to_string(), "no game in progress");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = Error::from(json_error);

        assert!(matches!(error, Error::Json(_)));
        assert!(error.to_string().starts_with("malformed question bank"));
    }
}
