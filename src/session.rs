//! Quiz session controller
//!
//! A [`Session`] is one play-through: it shuffles the bank, keeps the first
//! [`SessionConfig::session_length`] questions and judges one answer at a
//! time until the player either answers every question or gets one wrong.
//!
//! Answers are shown in a per-question shuffled order. A selection is
//! judged by the text at its display position compared to the first
//! answer of the unshuffled question, so the display order never affects
//! correctness.

use garde::Validate;
use serde::Serialize;

use crate::{
    config::SessionConfig,
    constants,
    display::{DisplayState, Progress},
    error::Error,
    question::{Question, QuestionBank},
};

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Phase {
    /// Waiting for the player to pick an answer
    #[default]
    AwaitingAnswer,
    /// Every question was answered correctly
    Won,
    /// A question was answered incorrectly
    Lost,
}

/// Notification the presentation layer shows after a judged answer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Feedback {
    /// The answer was right
    #[display("{}", constants::text::CORRECT_ANSWER)]
    Correct,
    /// The answer was wrong
    #[display("{}", constants::text::WRONG_ANSWER)]
    Wrong,
}

/// Result of submitting a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Nothing was selected; the session is unchanged
    Unanswered(DisplayState),
    /// The answer was correct and the next question is ready
    Advance(DisplayState),
    /// The last question was answered correctly
    Won {
        /// Number of questions in the session
        total_questions: usize,
        /// Index reached when the session ended, equal to `total_questions`
        final_index: usize,
    },
    /// The answer was wrong; the session is over
    Lost,
}

impl Outcome {
    /// Whether the submitted answer was correct, `None` if nothing was judged
    pub fn is_correct(&self) -> Option<bool> {
        match self {
            Self::Unanswered(_) => None,
            Self::Advance(_) | Self::Won { .. } => Some(true),
            Self::Lost => Some(false),
        }
    }

    /// The notification to show for this outcome, if any
    pub fn feedback(&self) -> Option<Feedback> {
        self.is_correct().map(|correct| {
            if correct {
                Feedback::Correct
            } else {
                Feedback::Wrong
            }
        })
    }

    /// Whether the session ended with this outcome
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost)
    }
}

/// State of a single play-through
#[derive(Debug, Clone)]
pub struct Session {
    /// Questions asked in this session, already shuffled and truncated
    questions: Vec<Question>,
    /// Index of the current question in `questions`
    index: usize,
    /// Answers of the current question in display order
    display_answers: Vec<String>,
    /// Number of answers judged so far
    answered: usize,
    phase: Phase,
    rng: fastrand::Rng,
}

impl Session {
    /// Starts a session with a freshly seeded random source
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the bank is empty, a
    /// question does not have four distinct answers, or the config is out
    /// of range.
    pub fn start(bank: &QuestionBank, config: &SessionConfig) -> Result<Self, Error> {
        Self::start_with_rng(bank, config, fastrand::Rng::new())
    }

    /// Starts a session drawing every shuffle from `rng`
    ///
    /// Two sessions started with equally seeded generators ask the same
    /// questions with the same answer orders.
    ///
    /// # Errors
    ///
    /// Same as [`Session::start`].
    pub fn start_with_rng(
        bank: &QuestionBank,
        config: &SessionConfig,
        mut rng: fastrand::Rng,
    ) -> Result<Self, Error> {
        // Banks can be deserialized directly, bypassing `QuestionBank::new`.
        bank.validate()?;
        config.validate()?;

        let total = config.session_length(bank.len());
        let mut questions = bank.questions().to_vec();
        rng.shuffle(&mut questions);
        questions.truncate(total);

        let mut session = Self {
            questions,
            index: 0,
            display_answers: Vec::new(),
            answered: 0,
            phase: Phase::AwaitingAnswer,
            rng,
        };
        session.shuffle_answers();

        log::debug!(
            "started trivia session with {total} of {} questions",
            bank.len()
        );

        Ok(session)
    }

    /// Judges the answer at `selection` in the displayed order
    ///
    /// `None` means the player pressed submit without choosing; this leaves
    /// the session untouched and returns [`Outcome::Unanswered`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionFinished`] once the session is won or lost,
    /// and [`Error::SelectionOutOfRange`] if `selection` is not a displayed
    /// position.
    pub fn submit(&mut self, selection: Option<usize>) -> Result<Outcome, Error> {
        if !self.phase.is_awaiting_answer() {
            log::warn!("rejected submission to a finished session");
            return Err(Error::SessionFinished);
        }

        let Some(selection) = selection else {
            return Ok(Outcome::Unanswered(self.display_state()));
        };

        let chosen = self
            .display_answers
            .get(selection)
            .ok_or(Error::SelectionOutOfRange(selection))?;

        let correct = self.questions[self.index].is_correct(chosen);
        self.answered += 1;

        log::debug!(
            "question {} of {} answered {}",
            self.index + 1,
            self.total_questions(),
            if correct { "correctly" } else { "incorrectly" }
        );

        if !correct {
            self.phase = Phase::Lost;
            return Ok(Outcome::Lost);
        }

        self.index += 1;
        if self.index < self.total_questions() {
            self.shuffle_answers();
            Ok(Outcome::Advance(self.display_state()))
        } else {
            self.phase = Phase::Won;
            Ok(Outcome::Won {
                total_questions: self.total_questions(),
                final_index: self.index,
            })
        }
    }

    /// The current question as it should be drawn, `None` once finished
    pub fn display(&self) -> Option<DisplayState> {
        self.phase
            .is_awaiting_answer()
            .then(|| self.display_state())
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the session reached a terminal phase
    pub fn is_finished(&self) -> bool {
        !self.phase.is_awaiting_answer()
    }

    /// Number of questions asked in this session
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 0-based index of the current question
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Number of answers judged so far
    pub fn answered(&self) -> usize {
        self.answered
    }

    fn shuffle_answers(&mut self) {
        self.display_answers = self.questions[self.index].answers().to_vec();
        self.rng.shuffle(&mut self.display_answers);
    }

    /// The current question as drawn, whatever the phase
    ///
    /// Callers must know the session is awaiting an answer; after a win the
    /// index is past the last question.
    pub(crate) fn display_state(&self) -> DisplayState {
        DisplayState {
            question: self.questions[self.index].text().to_string(),
            answers: self.display_answers.clone(),
            progress: Progress {
                number: self.index + 1,
                total: self.total_questions(),
            },
        }
    }
}
