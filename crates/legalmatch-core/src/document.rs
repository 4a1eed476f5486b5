//! Legal documents drafted against a case.
//!
//! A document is an ordered list of titled sections. Section order and titles
//! come from the template catalog and are never rearranged; only section
//! content changes after instantiation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

// ─── DocumentType ────────────────────────────────────────────────────────────

/// The kinds of document a lawyer can draft. Each has a fixed template.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DocumentType {
  #[serde(rename = "Engagement Letter")]
  #[strum(serialize = "Engagement Letter")]
  EngagementLetter,
  #[serde(rename = "Client Intake Form")]
  #[strum(serialize = "Client Intake Form")]
  ClientIntakeForm,
  #[serde(rename = "Legal Memorandum")]
  #[strum(serialize = "Legal Memorandum")]
  LegalMemorandum,
  #[serde(rename = "Fee Agreement")]
  #[strum(serialize = "Fee Agreement")]
  FeeAgreement,
  #[serde(rename = "Initial Case Assessment")]
  #[strum(serialize = "Initial Case Assessment")]
  InitialCaseAssessment,
}

// ─── Sections ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSection {
  pub title:   String,
  pub content: String,
}

// ─── LegalDocument ───────────────────────────────────────────────────────────

/// A drafted document. By convention there is one per `(case_id,
/// document_type)`; nothing at the storage layer enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
  /// Empty until assigned by a save.
  #[serde(default)]
  pub id:            String,
  pub case_id:       String,
  pub document_type: DocumentType,
  pub sections:      Vec<DocumentSection>,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

impl LegalDocument {
  /// Return a copy with the content of section `index` replaced and
  /// `updated_at` refreshed. The section title is preserved.
  pub fn with_section_content(
    &self,
    index: usize,
    content: impl Into<String>,
    now: DateTime<Utc>,
  ) -> Result<Self> {
    let len = self.sections.len();
    if index >= len {
      return Err(Error::SectionOutOfBounds { index, len });
    }
    let mut updated = self.clone();
    updated.sections[index].content = content.into();
    updated.updated_at = now;
    Ok(updated)
  }

  /// Render the document as plain text, one `## Title` block per section.
  pub fn to_plain_text(&self) -> String {
    self
      .sections
      .iter()
      .map(|s| format!("## {}\n\n{}\n\n", s.title, s.content))
      .collect()
  }

  /// File name for a plain-text export made on `date`,
  /// e.g. `Engagement_Letter_2025-04-05.txt`.
  pub fn export_file_name(&self, date: NaiveDate) -> String {
    let stem = self
      .document_type
      .to_string()
      .split_whitespace()
      .collect::<Vec<_>>()
      .join("_");
    format!("{stem}_{}.txt", date.format("%Y-%m-%d"))
  }
}

#[cfg(test)]
mod tests {
  use chrono::Duration;

  use super::*;
  use crate::catalog::template_for;

  #[test]
  fn section_edit_preserves_titles_and_neighbours() {
    let doc = template_for(DocumentType::EngagementLetter, "case1");
    let later = doc.created_at + Duration::seconds(5);
    let edited = doc.with_section_content(2, "Flat fee of $500.", later).unwrap();

    assert_eq!(edited.sections[2].title, "Fees and Costs");
    assert_eq!(edited.sections[2].content, "Flat fee of $500.");
    assert_eq!(edited.updated_at, later);
    for i in [0, 1, 3, 4] {
      assert_eq!(edited.sections[i], doc.sections[i]);
    }
  }

  #[test]
  fn section_edit_out_of_bounds() {
    let doc = template_for(DocumentType::ClientIntakeForm, "case1");
    let err = doc.with_section_content(3, "x", Utc::now()).unwrap_err();
    assert!(matches!(err, Error::SectionOutOfBounds { index: 3, len: 3 }));
  }

  #[test]
  fn plain_text_rendering() {
    let doc = LegalDocument {
      id:            "doc-1".into(),
      case_id:       "case1".into(),
      document_type: DocumentType::FeeAgreement,
      sections:      vec![
        DocumentSection { title: "Parties".into(), content: "A and B".into() },
        DocumentSection { title: "Retainer".into(), content: "None".into() },
      ],
      created_at:    Utc::now(),
      updated_at:    Utc::now(),
    };
    assert_eq!(doc.to_plain_text(), "## Parties\n\nA and B\n\n## Retainer\n\nNone\n\n");
  }

  #[test]
  fn export_file_name_replaces_whitespace() {
    let doc = template_for(DocumentType::InitialCaseAssessment, "case1");
    let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
    assert_eq!(doc.export_file_name(date), "Initial_Case_Assessment_2025-04-05.txt");
  }

  #[test]
  fn document_type_labels() {
    assert_eq!(DocumentType::ClientIntakeForm.to_string(), "Client Intake Form");
    let parsed: DocumentType = "fee agreement".parse().unwrap();
    assert_eq!(parsed, DocumentType::FeeAgreement);
  }
}
