//! Screen routing between the title, the game and its two endings
//!
//! [`Trivia`] owns the question bank and at most one [`Session`]. Session
//! outcomes are mapped to explicit [`Screen`] values which the presentation
//! layer renders however it likes.

use serde::Serialize;

use crate::{
    config::SessionConfig,
    display::DisplayState,
    error::Error,
    question::QuestionBank,
    session::{Outcome, Session},
};

/// The screen the presentation layer should show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, derive_more::IsVariant)]
pub enum Screen {
    /// Title screen with the play button
    #[default]
    Title,
    /// A question is on screen
    Game,
    /// Every question was answered correctly
    GameWon {
        /// Number of questions in the finished session
        total_questions: usize,
        /// Index reached when the session ended
        final_index: usize,
    },
    /// A question was answered incorrectly
    GameOver,
}

/// Routes between screens and owns the running session
#[derive(Debug, Clone)]
pub struct Trivia {
    bank: QuestionBank,
    config: SessionConfig,
    screen: Screen,
    session: Option<Session>,
    rng: fastrand::Rng,
}

impl Trivia {
    /// Creates a router on the title screen
    pub fn new(bank: QuestionBank, config: SessionConfig) -> Self {
        Self::with_rng(bank, config, fastrand::Rng::new())
    }

    /// Creates a router whose sessions draw their shuffles from `rng`
    pub fn with_rng(bank: QuestionBank, config: SessionConfig, rng: fastrand::Rng) -> Self {
        Self {
            bank,
            config,
            screen: Screen::Title,
            session: None,
            rng,
        }
    }

    /// Starts a fresh session and moves to the game screen
    ///
    /// Used for "play" on the title screen and for playing again from
    /// either ending. Called during a game, it abandons that game.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the session cannot start;
    /// the screen is left unchanged.
    pub fn play(&mut self) -> Result<DisplayState, Error> {
        let session = Session::start_with_rng(&self.bank, &self.config, self.rng.fork())?;
        let display = session.display_state();

        self.navigate(Screen::Game);
        self.session = Some(session);

        Ok(display)
    }

    /// Forwards a selection to the running session
    ///
    /// A terminal outcome ends the session and moves to the matching ending
    /// screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInGame`] when no game is on screen, otherwise
    /// whatever [`Session::submit`] returns.
    pub fn submit(&mut self, selection: Option<usize>) -> Result<Outcome, Error> {
        let Some(session) = self.session.as_mut() else {
            log::warn!("answer submitted on the {:?} screen", self.screen);
            return Err(Error::NotInGame);
        };

        let outcome = session.submit(selection)?;

        match outcome {
            Outcome::Won {
                total_questions,
                final_index,
            } => {
                self.session = None;
                self.navigate(Screen::GameWon {
                    total_questions,
                    final_index,
                });
            }
            Outcome::Lost => {
                self.session = None;
                self.navigate(Screen::GameOver);
            }
            Outcome::Unanswered(_) | Outcome::Advance(_) => {}
        }

        Ok(outcome)
    }

    /// Returns to the title screen, abandoning any running game
    pub fn title(&mut self) {
        self.session = None;
        self.navigate(Screen::Title);
    }

    /// The screen currently shown
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The running session, if a game is on screen
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The current question, if a game is on screen
    pub fn display(&self) -> Option<DisplayState> {
        self.session.as_ref().and_then(Session::display)
    }

    /// The question bank sessions are drawn from
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn navigate(&mut self, to: Screen) {
        log::debug!("navigating from {:?} to {to:?}", self.screen);
        self.screen = to;
    }
}
