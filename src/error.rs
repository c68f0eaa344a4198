//! Error type shared by the scoring core and the session coordinator.
//!
//! Slate validation never produces one of these: an invalid slate is a
//! `SlateStatus`, not an error. Errors are reserved for calls the caller
//! should not have made.

use thiserror::Error;

use crate::state::Phase;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
  /// `score` was called before every slate held a full ranking.
  #[error("cannot score: {} question(s) not fully ranked (indices {invalid:?})", .invalid.len())]
  IncompleteResponses { invalid: Vec<usize> },

  #[error("cannot score an empty response set")]
  EmptyResponseSet,

  /// A caller-supplied answer list does not line up with the questionnaire.
  #[error("expected {expected} answer slates (one per question), got {actual}")]
  WrongQuestionCount { expected: usize, actual: usize },

  #[error("question index {index} out of range (questionnaire has {len} questions)")]
  QuestionOutOfRange { index: usize, len: usize },

  #[error("rank {0} out of range (expected 0-4)")]
  RankOutOfRange(u8),

  #[error("{action} not allowed in phase {actual}")]
  WrongPhase { action: &'static str, actual: Phase },

  #[error("unknown session: {0}")]
  UnknownSession(String),

  #[error("session limit reached ({0})")]
  SessionLimit(usize),
}
