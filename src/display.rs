//! What the presentation layer renders for the current question
//!
//! The progress label replaces the window title the presentation layer
//! would otherwise set itself.

use serde::Serialize;

/// Position of the current question within the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("Android Trivia ({number}/{total})")]
pub struct Progress {
    /// 1-based number of the current question
    pub number: usize,
    /// Number of questions in the session
    pub total: usize,
}

/// Everything needed to draw the game screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// The question text
    pub question: String,
    /// The four answers in display order
    pub answers: Vec<String>,
    /// Which question of the session this is
    pub progress: Progress,
}

impl DisplayState {
    /// The "question i of N" label
    pub fn progress_label(&self) -> String {
        self.progress.to_string()
    }

    /// Renders this state as the JSON payload handed to the presentation layer
    ///
    /// # Panics
    ///
    /// Never in practice: every field is a string or an integer, which
    /// `serde_json` always serializes.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample_state() -> DisplayState {
        DisplayState {
            question: "What's the build system for Android?".to_string(),
            answers: vec![
                "Grodle".to_string(),
                "Gradle".to_string(),
                "Groyle".to_string(),
                "Graddle".to_string(),
            ],
            progress: Progress {
                number: 2,
                total: 3,
            },
        }
    }

    #[test]
    fn test_progress_label() {
        assert_eq!(sample_state().progress_label(), "Android Trivia (2/3)");
    }

    #[test]
    fn test_to_message() {
        let json_str = sample_state().to_message();

        assert!(json_str.contains("\"question\":\"What's the build system for Android?\""));
        assert!(json_str.contains("\"number\":2"));
        assert!(json_str.contains("Groyle"));
    }
}
