//! Questions and question banks
//!
//! A [`Question`] stores its answers in canonical order: the first answer is
//! always the correct one. Display order is decided per session by
//! [`crate::session::Session`], never here.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{constants, error::Error};

type ValidationResult = garde::Result;

/// Rejects answer lists that repeat the same text
///
/// Answers are judged by text, so two equal answers would make a
/// distractor indistinguishable from the correct one.
fn validate_distinct_answers(answers: &[String]) -> ValidationResult {
    if answers.iter().all_unique() {
        Ok(())
    } else {
        Err(garde::Error::new("answers must be distinct"))
    }
}

/// A multiple choice question with one correct answer and three distractors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// The question text shown above the answers
    #[garde(length(chars, min = constants::question::MIN_TEXT_LENGTH, max = constants::question::MAX_TEXT_LENGTH))]
    text: String,
    /// Answers in canonical order, the first one is correct
    #[garde(
        length(equal = constants::question::ANSWER_COUNT),
        inner(length(chars, min = constants::question::MIN_ANSWER_LENGTH, max = constants::question::MAX_ANSWER_LENGTH)),
        custom(|v: &Vec<String>, _| validate_distinct_answers(v))
    )]
    answers: Vec<String>,
}

impl Question {
    /// Creates a question, the first answer being the correct one
    ///
    /// The question is validated when it is added to a [`QuestionBank`].
    pub fn new<S, I>(text: impl Into<String>, answers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            text: text.into(),
            answers: answers.into_iter().map(Into::into).collect_vec(),
        }
    }

    /// The question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All answers in canonical order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// The correct answer
    ///
    /// Only meaningful for a validated question; a question built with no
    /// answers and never added to a [`QuestionBank`] yields `""`.
    pub fn correct_answer(&self) -> &str {
        self.answers.first().map_or("", String::as_str)
    }

    /// Checks an answer by its text, independent of where it was displayed
    pub fn is_correct(&self, answer: &str) -> bool {
        self.answers.first().is_some_and(|correct| correct == answer)
    }
}

/// A validated, non-empty collection of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuestionBank {
    #[garde(length(min = 1, max = constants::question::MAX_BANK_SIZE), dive)]
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from a list of questions
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the list is empty or any
    /// question does not have exactly four distinct, non-empty answers.
    pub fn new(questions: Vec<Question>) -> Result<Self, Error> {
        let bank = Self { questions };
        bank.check()?;
        Ok(bank)
    }

    /// Parses and validates a bank from JSON
    ///
    /// The expected shape is `{"questions": [{"text": "...", "answers": [...]}]}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a bank and
    /// [`Error::InvalidConfiguration`] if the parsed bank fails validation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let bank: Self = serde_json::from_str(json)?;
        bank.check()?;
        Ok(bank)
    }

    /// The built-in Android trivia questions
    pub fn android_trivia() -> Self {
        Self {
            questions: vec![
                Question::new(
                    "What is Android Jetpack?",
                    ["all of these", "tools", "documentation", "libraries"],
                ),
                Question::new(
                    "What is the base class for layouts?",
                    ["ViewGroup", "ViewSet", "ViewCollection", "ViewRoot"],
                ),
                Question::new(
                    "What layout do you use for complex screens?",
                    ["ConstraintLayout", "GridLayout", "LinearLayout", "FrameLayout"],
                ),
                Question::new(
                    "What do you use to push structured data into a layout?",
                    ["Data Binding", "Data Pushing", "Set Text", "OnClick"],
                ),
                Question::new(
                    "What method do you use to inflate layouts in fragments?",
                    ["onCreateView", "onViewCreated", "onCreateLayout", "onInflateLayout"],
                ),
                Question::new(
                    "What's the build system for Android?",
                    ["Gradle", "Graddle", "Grodle", "Groyle"],
                ),
                Question::new(
                    "Which class do you use to create a vector drawable?",
                    [
                        "VectorDrawable",
                        "AndroidVectorDrawable",
                        "DrawableVector",
                        "AndroidVector",
                    ],
                ),
                Question::new(
                    "Which one of these is an Android navigation component?",
                    ["NavController", "NavCentral", "NavMaster", "NavSwitcher"],
                ),
                Question::new(
                    "Which XML element lets you register an activity with the launcher activity?",
                    ["intent-filter", "app-registry", "launcher-registry", "app-launcher"],
                ),
                Question::new(
                    "What do you use to mark a layout for data binding?",
                    ["<layout>", "<binding>", "<data-binding>", "<dbinding>"],
                ),
            ],
        }
    }

    /// Returns the number of questions in this bank
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if this bank contains any questions
    ///
    /// Always `false` for a validated bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The questions in bank order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn check(&self) -> Result<(), Error> {
        self.validate().map_err(|report| {
            log::warn!("rejected question bank: {report}");
            Error::from(report)
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new("Pick the first", ["right", "wrong a", "wrong b", "wrong c"])
    }

    #[test]
    fn test_question_correct_answer_is_first() {
        let question = sample_question();

        assert_eq!(question.correct_answer(), "right");
        assert!(question.is_correct("right"));
        assert!(!question.is_correct("wrong a"));
        assert!(!question.is_correct("Right"));
    }

    #[test]
    fn test_bank_new_valid() {
        let bank = QuestionBank::new(vec![sample_question(), sample_question()]).unwrap();

        assert_eq!(bank.len(), 2);
        assert!(!bank.is_empty());
        assert_eq!(bank.questions()[0].text(), "Pick the first");
    }

    #[test]
    fn test_bank_new_empty_is_invalid() {
        let result = QuestionBank::new(Vec::new());

        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_bank_new_three_answers_is_invalid() {
        let question = Question::new("Too few", ["a", "b", "c"]);
        let result = QuestionBank::new(vec![question]);

        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_bank_new_five_answers_is_invalid() {
        let question = Question::new("Too many", ["a", "b", "c", "d", "e"]);
        let result = QuestionBank::new(vec![sample_question(), question]);

        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_bank_new_duplicate_answers_is_invalid() {
        let question = Question::new("Twins", ["same", "same", "other", "another"]);
        let result = QuestionBank::new(vec![question]);

        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_bank_new_empty_text_is_invalid() {
        let question = Question::new("", ["a", "b", "c", "d"]);

        assert!(QuestionBank::new(vec![question]).is_err());
    }

    #[test]
    fn test_bank_new_empty_answer_is_invalid() {
        let question = Question::new("Blank", ["a", "", "c", "d"]);

        assert!(QuestionBank::new(vec![question]).is_err());
    }

    #[test]
    fn test_bank_new_counts_characters_not_bytes() {
        let question = Question::new("é".repeat(150), ["а", "б", "в", "г"]);
        let bank = QuestionBank::new(vec![question]).unwrap();

        assert_eq!(bank.questions()[0].text().chars().count(), 150);
        assert!(bank.questions()[0].text().len() > constants::question::MAX_TEXT_LENGTH);
    }

    #[test]
    fn test_bank_new_too_many_characters_is_invalid() {
        let question = Question::new("é".repeat(201), ["а", "б", "в", "г"]);

        assert!(matches!(
            QuestionBank::new(vec![question]),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_bank_new_long_non_ascii_answer() {
        let answer = "ж".repeat(150);
        let question = Question::new("Which one?", [answer.as_str(), "б", "в", "г"]);

        assert!(QuestionBank::new(vec![question]).is_ok());
    }

    #[test]
    fn test_question_without_answers_has_empty_correct_answer() {
        let question = Question::new("Nothing", Vec::<String>::new());

        assert_eq!(question.correct_answer(), "");
        assert!(!question.is_correct(""));
    }

    #[test]
    fn test_bank_from_json() {
        let json = r#"{"questions":[{"text":"2 + 2?","answers":["4","3","5","22"]}]}"#;
        let bank = QuestionBank::from_json(json).unwrap();

        assert_eq!(bank.len(), 1);
        assert_eq!(bank.questions()[0].correct_answer(), "4");
    }

    #[test]
    fn test_bank_from_json_malformed() {
        let result = QuestionBank::from_json("{\"questions\": 3}");

        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_bank_from_json_invalid_question() {
        let json = r#"{"questions":[{"text":"2 + 2?","answers":["4"]}]}"#;
        let result = QuestionBank::from_json(json);

        assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_android_trivia_is_valid() {
        let bank = QuestionBank::android_trivia();

        assert_eq!(bank.len(), 10);
        assert!(bank.validate().is_ok());
        assert!(bank.questions().iter().map(Question::text).all_unique());
    }
}
