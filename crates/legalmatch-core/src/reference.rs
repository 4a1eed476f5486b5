//! Built-in reference data: lawyer profiles, the case list shown on lawyer
//! dashboards, and the identities allowed to log in.
//!
//! The set can be replaced wholesale from JSON with [`ReferenceData::from_json`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Result,
  case::{BudgetSensitivity, CaseStatus, CaseType, ClientCase},
  identity::{Identity, Role},
  lawyer::Lawyer,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
  pub lawyers: Vec<Lawyer>,
  pub cases:   Vec<ClientCase>,
  pub users:   Vec<Identity>,
}

impl Default for ReferenceData {
  fn default() -> Self { Self::builtin() }
}

impl ReferenceData {
  pub fn from_json(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }

  pub fn builtin() -> Self {
    Self {
      lawyers: vec![
        lawyer(
          "law1",
          "Sarah Johnson",
          "sarah.johnson@legalmatch.com",
          &[CaseType::BusinessLaw, CaseType::IntellectualProperty],
          "New York, NY",
          "Specializing in startup business formation and intellectual property protection.",
        ),
        lawyer(
          "law2",
          "Michael Chen",
          "michael.chen@legalmatch.com",
          &[CaseType::FamilyLaw, CaseType::EstatePlanning],
          "San Francisco, CA",
          "Experienced in family law matters and comprehensive estate planning.",
        ),
        lawyer(
          "law3",
          "David Rodriguez",
          "david.rodriguez@legalmatch.com",
          &[CaseType::CriminalLaw, CaseType::PersonalInjury],
          "Chicago, IL",
          "Former prosecutor with extensive trial experience.",
        ),
      ],
      cases:   vec![
        ClientCase {
          id:                 "case1".into(),
          description:        "I need help forming an LLC for my new tech startup and protecting our proprietary software.".into(),
          case_type:          CaseType::BusinessLaw,
          location:           "New York, NY".into(),
          budget_sensitivity: BudgetSensitivity::Medium,
          email:              "entrepreneur@example.com".into(),
          submission_date:    day(2025, 4, 5),
          status:             CaseStatus::Matched,
        },
        ClientCase {
          id:                 "case2".into(),
          description:        "I'm going through a divorce and need assistance with child custody arrangements and property division.".into(),
          case_type:          CaseType::FamilyLaw,
          location:           "San Francisco, CA".into(),
          budget_sensitivity: BudgetSensitivity::High,
          email:              "parent@example.com".into(),
          submission_date:    day(2025, 4, 6),
          status:             CaseStatus::Pending,
        },
        ClientCase {
          id:                 "case3".into(),
          description:        "I was arrested for DUI and need legal representation. First offense.".into(),
          case_type:          CaseType::CriminalLaw,
          location:           "Chicago, IL".into(),
          budget_sensitivity: BudgetSensitivity::Medium,
          email:              "defendant@example.com".into(),
          submission_date:    day(2025, 4, 7),
          status:             CaseStatus::Matched,
        },
        ClientCase {
          id:                 "case4".into(),
          description:        "Our company is negotiating a complex SaaS licensing agreement with a major client. Need review and guidance.".into(),
          case_type:          CaseType::BusinessLaw,
          location:           "New York, NY".into(),
          budget_sensitivity: BudgetSensitivity::Low,
          email:              "bizowner@example.com".into(),
          submission_date:    day(2025, 4, 8),
          status:             CaseStatus::Pending,
        },
      ],
      users:   vec![
        user("law1", "sarah.johnson@legalmatch.com", Role::Lawyer),
        user("law2", "michael.chen@legalmatch.com", Role::Lawyer),
        user("law3", "david.rodriguez@legalmatch.com", Role::Lawyer),
        user("admin1", "admin@legalmatch.com", Role::Admin),
      ],
    }
  }
}

fn lawyer(
  id: &str,
  name: &str,
  email: &str,
  practice_areas: &[CaseType],
  location: &str,
  description: &str,
) -> Lawyer {
  Lawyer {
    id:             id.into(),
    name:           name.into(),
    email:          email.into(),
    practice_areas: practice_areas.to_vec(),
    location:       location.into(),
    description:    Some(description.into()),
  }
}

fn user(id: &str, email: &str, role: Role) -> Identity {
  Identity { id: id.into(), email: email.into(), role }
}

/// Midnight UTC on the given calendar day.
fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
  NaiveDate::from_ymd_opt(year, month, day)
    .unwrap_or_default()
    .and_time(NaiveTime::MIN)
    .and_utc()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_shape() {
    let data = ReferenceData::builtin();
    assert_eq!(data.lawyers.len(), 3);
    assert_eq!(data.cases.len(), 4);
    assert_eq!(data.users.len(), 4);
    assert_eq!(data.cases[0].submission_date.to_rfc3339(), "2025-04-05T00:00:00+00:00");
  }

  #[test]
  fn every_lawyer_has_a_login() {
    let data = ReferenceData::builtin();
    for l in &data.lawyers {
      let user = data.users.iter().find(|u| u.id == l.id).unwrap();
      assert_eq!(user.role, Role::Lawyer);
      assert!(user.has_email(&l.email));
    }
  }

  #[test]
  fn json_round_trip() {
    let data = ReferenceData::builtin();
    let json = serde_json::to_string(&data).unwrap();
    assert_eq!(ReferenceData::from_json(&json).unwrap(), data);
  }

  #[test]
  fn loads_cases_with_date_only_submission() {
    let json = r#"{
      "lawyers": [],
      "users": [],
      "cases": [{
        "id": "case9",
        "description": "Dispute over a commercial lease renewal.",
        "caseType": "Real Estate",
        "location": "Chicago, IL",
        "budgetSensitivity": "Low",
        "email": "tenant@example.com",
        "submissionDate": "2025-04-05",
        "status": "Pending"
      }]
    }"#;

    let data = ReferenceData::from_json(json).unwrap();
    assert_eq!(data.cases[0].submission_date, day(2025, 4, 5));
    assert_eq!(data.cases[0].case_type, CaseType::RealEstate);
  }

  #[test]
  fn malformed_json_is_an_error() {
    assert!(ReferenceData::from_json("{\"lawyers\": 3}").is_err());
  }
}
