//! The seam for section-content generation.
//!
//! A generator turns a section title, a case context and the section's
//! current content into suggested text. Implementations may take arbitrary
//! time and may fail; failure is reported as [`Error::Generation`] so callers
//! can offer a retry.
//!
//! [`Error::Generation`]: crate::Error::Generation

use std::future::Future;

use crate::Result;

/// Input to [`ContentGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
  pub section_title:    String,
  pub case_context:     String,
  pub existing_content: Option<String>,
}

impl GenerationRequest {
  pub fn new(
    section_title: impl Into<String>,
    case_context: impl Into<String>,
    existing_content: Option<String>,
  ) -> Self {
    Self {
      section_title: section_title.into(),
      case_context: case_context.into(),
      existing_content,
    }
  }

  /// The text the generator should work from: the existing content when
  /// there is any, otherwise the section title.
  pub fn prompt(&self) -> &str {
    match self.existing_content.as_deref() {
      Some(content) if !content.is_empty() => content,
      _ => &self.section_title,
    }
  }
}

/// Produces suggested content for a document section.
pub trait ContentGenerator: Send + Sync {
  fn generate<'a>(
    &'a self,
    request: &'a GenerationRequest,
  ) -> impl Future<Output = Result<String>> + Send + 'a;
}
