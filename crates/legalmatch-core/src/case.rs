//! Client cases — the legal matters clients submit for matching.
//!
//! A case is immutable once created. Its status starts at
//! [`CaseStatus::Pending`] and nothing in this workspace transitions it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result, id::generate_id};

// ─── Enumerations ────────────────────────────────────────────────────────────

/// The practice area a case falls under. Lawyers advertise a subset of these.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CaseType {
  #[serde(rename = "Business Law")]
  #[strum(serialize = "Business Law")]
  BusinessLaw,
  #[serde(rename = "Family Law")]
  #[strum(serialize = "Family Law")]
  FamilyLaw,
  #[serde(rename = "Criminal Law")]
  #[strum(serialize = "Criminal Law")]
  CriminalLaw,
  #[serde(rename = "Personal Injury")]
  #[strum(serialize = "Personal Injury")]
  PersonalInjury,
  #[serde(rename = "Real Estate")]
  #[strum(serialize = "Real Estate")]
  RealEstate,
  #[serde(rename = "Intellectual Property")]
  #[strum(serialize = "Intellectual Property")]
  IntellectualProperty,
  #[serde(rename = "Estate Planning")]
  #[strum(serialize = "Estate Planning")]
  EstatePlanning,
  #[serde(rename = "Employment Law")]
  #[strum(serialize = "Employment Law")]
  EmploymentLaw,
  Immigration,
  #[serde(rename = "Tax Law")]
  #[strum(serialize = "Tax Law")]
  TaxLaw,
  Other,
}

/// How sensitive the client says they are to legal costs.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BudgetSensitivity {
  Low,
  Medium,
  High,
  #[default]
  #[serde(rename = "Not Specified")]
  #[strum(serialize = "Not Specified")]
  NotSpecified,
}

/// Where a case is in its lifecycle.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CaseStatus {
  #[default]
  Pending,
  Matched,
  #[serde(rename = "In Progress")]
  #[strum(serialize = "In Progress")]
  InProgress,
  Closed,
}

// ─── ClientCase ──────────────────────────────────────────────────────────────

/// A legal matter as submitted by a client.
///
/// Field names serialise in camelCase so persisted values keep the shape of
/// the `submittedCases` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCase {
  pub id:                 String,
  pub description:        String,
  pub case_type:          CaseType,
  /// Free text; matching compares it verbatim.
  pub location:           String,
  pub budget_sensitivity: BudgetSensitivity,
  pub email:              String,
  /// Accepts either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
  #[serde(deserialize_with = "timestamp_or_date")]
  pub submission_date:    DateTime<Utc>,
  pub status:             CaseStatus,
}

/// A bare date is read as midnight UTC on that day.
fn timestamp_or_date<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
  let raw = String::deserialize(d)?;
  if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
    return Ok(dt.with_timezone(&Utc));
  }
  NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
    .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    .map_err(|_| {
      serde::de::Error::custom(format!("{raw:?} is neither an RFC 3339 timestamp nor a date"))
    })
}

impl ClientCase {
  /// The context string handed to the content generator when drafting
  /// documents for this case.
  pub fn generation_context(&self) -> String {
    format!("{} case: {}", self.case_type, self.description)
  }
}

// ─── NewCase ─────────────────────────────────────────────────────────────────

pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MIN_LOCATION_LEN: usize = 2;

/// Input to a case submission. `id`, `submission_date` and `status` are
/// assigned on submission and not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewCase {
  pub description:        String,
  pub case_type:          CaseType,
  pub location:           String,
  pub budget_sensitivity: BudgetSensitivity,
  pub email:              String,
}

impl NewCase {
  /// Check the submission the same way the intake form does.
  pub fn validate(&self) -> Result<()> {
    if self.description.chars().count() < MIN_DESCRIPTION_LEN {
      return Err(Error::Validation(format!(
        "description must be at least {MIN_DESCRIPTION_LEN} characters"
      )));
    }
    if self.location.chars().count() < MIN_LOCATION_LEN {
      return Err(Error::Validation("location is required".into()));
    }
    if !looks_like_email(&self.email) {
      return Err(Error::Validation(format!(
        "{:?} is not a valid email address",
        self.email
      )));
    }
    Ok(())
  }

  /// Validate and turn the submission into a pending [`ClientCase`].
  pub fn into_case(self, submitted_at: DateTime<Utc>) -> Result<ClientCase> {
    self.validate()?;
    Ok(ClientCase {
      id:                 generate_id(),
      description:        self.description,
      case_type:          self.case_type,
      location:           self.location,
      budget_sensitivity: self.budget_sensitivity,
      email:              self.email,
      submission_date:    submitted_at,
      status:             CaseStatus::Pending,
    })
  }
}

fn looks_like_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let mut labels = domain.split('.');
  domain.contains('.') && labels.all(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  fn submission() -> NewCase {
    NewCase {
      description:        "Need help drafting a shareholder agreement.".into(),
      case_type:          CaseType::BusinessLaw,
      location:           "New York, NY".into(),
      budget_sensitivity: BudgetSensitivity::Medium,
      email:              "founder@example.com".into(),
    }
  }

  #[test]
  fn case_type_has_eleven_variants() {
    assert_eq!(CaseType::iter().count(), 11);
  }

  #[test]
  fn case_type_display_and_parse_use_labels() {
    assert_eq!(CaseType::IntellectualProperty.to_string(), "Intellectual Property");
    assert_eq!(
      CaseType::from_str("intellectual property").unwrap(),
      CaseType::IntellectualProperty
    );
    assert!(CaseType::from_str("Maritime Law").is_err());
  }

  #[test]
  fn status_serialises_with_spaces() {
    let json = serde_json::to_string(&CaseStatus::InProgress).unwrap();
    assert_eq!(json, "\"In Progress\"");
  }

  #[test]
  fn persisted_shape_is_camel_case() {
    let case = submission().into_case(Utc::now()).unwrap();
    let value = serde_json::to_value(&case).unwrap();
    assert_eq!(value["caseType"], "Business Law");
    assert_eq!(value["budgetSensitivity"], "Medium");
    assert_eq!(value["status"], "Pending");
    assert!(value.get("submissionDate").is_some());
  }

  #[test]
  fn into_case_assigns_pending_status_and_id() {
    let now = Utc::now();
    let case = submission().into_case(now).unwrap();
    assert_eq!(case.status, CaseStatus::Pending);
    assert_eq!(case.submission_date, now);
    assert!(!case.id.is_empty());
  }

  #[test]
  fn short_description_rejected() {
    let mut input = submission();
    input.description = "help".into();
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn missing_location_rejected() {
    let mut input = submission();
    input.location = " ".into();
    assert!(matches!(input.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn length_counts_raw_characters() {
    let mut input = submission();
    input.description = "  help me ".into();
    input.location = "NY".into();
    assert!(input.validate().is_ok());
  }

  #[test]
  fn submission_date_accepts_bare_dates() {
    let case = submission().into_case(Utc::now()).unwrap();
    let mut value = serde_json::to_value(&case).unwrap();

    value["submissionDate"] = "2025-04-05".into();
    let parsed: ClientCase = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(parsed.submission_date.to_rfc3339(), "2025-04-05T00:00:00+00:00");

    value["submissionDate"] = "2025-04-05T09:30:00-04:00".into();
    let parsed: ClientCase = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(parsed.submission_date.to_rfc3339(), "2025-04-05T13:30:00+00:00");

    value["submissionDate"] = "April 5th".into();
    assert!(serde_json::from_value::<ClientCase>(value).is_err());
  }

  #[test]
  fn malformed_emails_rejected() {
    for bad in ["", "plain", "a@b", "@example.com", "a@@b.com", "a b@c.com", "a@b..com"] {
      let mut input = submission();
      input.email = bad.into();
      assert!(input.validate().is_err(), "{bad:?} should be rejected");
    }
  }

  #[test]
  fn generation_context_names_type_and_description() {
    let case = submission().into_case(Utc::now()).unwrap();
    assert_eq!(
      case.generation_context(),
      "Business Law case: Need help drafting a shareholder agreement."
    );
  }
}
