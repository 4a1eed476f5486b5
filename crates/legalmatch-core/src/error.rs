//! Error types for `legalmatch-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("case not found: {0}")]
  CaseNotFound(String),

  #[error("section {index} is out of bounds for a document with {len} sections")]
  SectionOutOfBounds { index: usize, len: usize },

  #[error("invalid case submission: {0}")]
  Validation(String),

  #[error("content generation failed: {0}")]
  Generation(String),

  #[error("no authenticated session")]
  NotAuthenticated,

  #[error("unknown variant: {0}")]
  UnknownVariant(#[from] strum::ParseError),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
