//! # Trivia
//!
//! Core logic for a multiple choice trivia game. A session draws a few
//! questions from a shuffled bank, shows each question's answers in a
//! random order and ends on the first wrong answer or after the last
//! correct one. Rendering is left to the caller, which receives display
//! state and screen transitions as plain values.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod question;
pub mod screen;
pub mod session;

pub use config::SessionConfig;
pub use display::{DisplayState, Progress};
pub use error::Error;
pub use question::{Question, QuestionBank};
pub use screen::{Screen, Trivia};
pub use session::{Feedback, Outcome, Phase, Session};
