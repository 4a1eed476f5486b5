//! Plain-text rendering of cases, lawyers and documents for the terminal.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use legalmatch_core::{
  case::ClientCase, document::LegalDocument, identity::Identity, lawyer::Lawyer,
};

const SUMMARY_WIDTH: usize = 72;

/// `Apr 5, 2025`
pub fn format_date(dt: DateTime<Utc>) -> String { dt.format("%b %-d, %Y").to_string() }

/// One line per case: id, type, location, date and a truncated description.
pub fn case_line(case: &ClientCase, score: Option<u8>) -> String {
  let mut line = format!(
    "{:<14} {:<22} {:<20} {:<13} {}",
    case.id,
    case.case_type.to_string(),
    case.location,
    format_date(case.submission_date),
    truncate(&case.description, SUMMARY_WIDTH),
  );
  if let Some(score) = score {
    let _ = write!(line, "  [{score}%]");
  }
  line
}

pub fn case_card(case: &ClientCase) -> String {
  format!(
    "{} Matter ({})\n\
     Submitted:  {}\n\
     Location:   {}\n\
     Budget:     {}\n\
     Status:     {}\n\
     Contact:    {}\n\n\
     {}\n",
    case.case_type,
    case.id,
    format_date(case.submission_date),
    case.location,
    case.budget_sensitivity,
    case.status,
    case.email,
    case.description,
  )
}

pub fn identity_line(identity: &Identity, lawyer: Option<&Lawyer>) -> String {
  match lawyer {
    Some(l) => {
      let areas: Vec<String> = l.practice_areas.iter().map(ToString::to_string).collect();
      format!(
        "{} <{}> ({}), {} [{}]",
        l.name,
        identity.email,
        identity.role,
        l.location,
        areas.join(", ")
      )
    }
    None => format!("{} ({})", identity.email, identity.role),
  }
}

pub fn document_line(doc: &LegalDocument) -> String {
  format!(
    "{:<18} {:<24} updated {}",
    doc.id,
    doc.document_type.to_string(),
    format_date(doc.updated_at)
  )
}

/// The full document with 1-based section numbers, as used by `edit`.
pub fn document_body(doc: &LegalDocument) -> String {
  let mut out = format!("{} ({}) for case {}\n\n", doc.document_type, doc.id, doc.case_id);
  for (i, section) in doc.sections.iter().enumerate() {
    let _ = writeln!(out, "[{}] {}", i + 1, section.title);
    for line in section.content.lines() {
      let _ = writeln!(out, "    {line}");
    }
    out.push('\n');
  }
  out
}

fn truncate(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    return s.to_owned();
  }
  let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
  cut.push('…');
  cut
}
