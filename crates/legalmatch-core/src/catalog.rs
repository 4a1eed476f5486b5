//! Document template catalog.
//!
//! Each [`DocumentType`] maps to a fixed, ordered list of sections with
//! placeholder content. Instantiating a template is pure apart from the fresh
//! identifier and timestamps.

use chrono::Utc;

use crate::{
  document::{DocumentSection, DocumentType, LegalDocument},
  id::generate_id,
};

/// A `(title, placeholder content)` pair.
pub type SectionTemplate = (&'static str, &'static str);

const ENGAGEMENT_LETTER: &[SectionTemplate] = &[
  ("Introduction", "This letter sets forth the terms of our engagement as legal counsel."),
  (
    "Scope of Services",
    "Our representation will consist of the following: [Scope to be defined]",
  ),
  ("Fees and Costs", "Our fees for legal services are based on [Fee structure to be defined]"),
  (
    "Client Responsibilities",
    "To assist us in representing you effectively, you agree to: [Responsibilities to be defined]",
  ),
  ("Conclusion", "If you agree with these terms, please sign and return this letter."),
];

const CLIENT_INTAKE_FORM: &[SectionTemplate] = &[
  (
    "Client Information",
    "• Full Name:\n• Contact Information:\n• Preferred Contact Method:",
  ),
  (
    "Matter Information",
    "• Brief Description of Legal Issue:\n• When did this issue begin?\n• Are there any deadlines we should be aware of?",
  ),
  (
    "Conflicts Check",
    "• Please list any adverse parties related to this matter:\n• Please list any related entities or individuals:",
  ),
];

const LEGAL_MEMORANDUM: &[SectionTemplate] = &[
  ("Issue", "The legal question to be addressed is [Issue to be defined]"),
  ("Brief Answer", "[Summary answer to be provided]"),
  ("Facts", "[Relevant facts to be outlined]"),
  ("Discussion", "[Legal analysis to be provided]"),
  ("Conclusion", "[Conclusion based on analysis]"),
];

const FEE_AGREEMENT: &[SectionTemplate] = &[
  ("Parties", "This agreement is between [Law Firm] and [Client Name]"),
  ("Fee Structure", "[Fee structure details to be defined]"),
  ("Billing Practices", "[Billing frequency and policies]"),
  ("Retainer", "[Retainer requirements and handling]"),
  ("Signatures", "[Signature blocks]"),
];

const INITIAL_CASE_ASSESSMENT: &[SectionTemplate] = &[
  ("Client Objective", "[Client's stated goals]"),
  ("Key Facts", "[Relevant facts of the case]"),
  ("Legal Issues", "[Identified legal issues]"),
  ("Potential Strategies", "[Initial strategic options]"),
  ("Next Steps", "[Recommended immediate actions]"),
];

/// The ordered section templates for `document_type`.
pub fn sections_for(document_type: DocumentType) -> &'static [SectionTemplate] {
  match document_type {
    DocumentType::EngagementLetter => ENGAGEMENT_LETTER,
    DocumentType::ClientIntakeForm => CLIENT_INTAKE_FORM,
    DocumentType::LegalMemorandum => LEGAL_MEMORANDUM,
    DocumentType::FeeAgreement => FEE_AGREEMENT,
    DocumentType::InitialCaseAssessment => INITIAL_CASE_ASSESSMENT,
  }
}

/// Instantiate a fresh, unsaved document of `document_type` for `case_id`.
pub fn template_for(document_type: DocumentType, case_id: &str) -> LegalDocument {
  let now = Utc::now();
  LegalDocument {
    id: format!("doc-{}", generate_id()),
    case_id: case_id.to_owned(),
    document_type,
    sections: sections_for(document_type)
      .iter()
      .map(|(title, content)| DocumentSection {
        title:   (*title).to_owned(),
        content: (*content).to_owned(),
      })
      .collect(),
    created_at: now,
    updated_at: now,
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn section_counts_per_type() {
    let expected = [
      (DocumentType::EngagementLetter, 5),
      (DocumentType::ClientIntakeForm, 3),
      (DocumentType::LegalMemorandum, 5),
      (DocumentType::FeeAgreement, 5),
      (DocumentType::InitialCaseAssessment, 5),
    ];
    for (ty, count) in expected {
      assert_eq!(template_for(ty, "case1").sections.len(), count, "{ty}");
    }
  }

  #[test]
  fn engagement_letter_titles_in_order() {
    let titles: Vec<_> = template_for(DocumentType::EngagementLetter, "case1")
      .sections
      .into_iter()
      .map(|s| s.title)
      .collect();
    assert_eq!(
      titles,
      [
        "Introduction",
        "Scope of Services",
        "Fees and Costs",
        "Client Responsibilities",
        "Conclusion"
      ]
    );
  }

  #[test]
  fn template_carries_case_and_type() {
    for ty in DocumentType::iter() {
      let doc = template_for(ty, "case42");
      assert_eq!(doc.case_id, "case42");
      assert_eq!(doc.document_type, ty);
      assert_eq!(doc.created_at, doc.updated_at);
      assert!(doc.id.starts_with("doc-"));
    }
  }

  #[test]
  fn each_instantiation_gets_a_new_id() {
    let a = template_for(DocumentType::FeeAgreement, "case1");
    let b = template_for(DocumentType::FeeAgreement, "case1");
    assert_ne!(a.id, b.id);
    assert_eq!(a.sections, b.sections);
  }
}
