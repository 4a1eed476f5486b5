//! Case repository: reference cases and lawyers, plus client submissions.
//!
//! Lookups and matching run against the reference case list. Submissions are
//! appended to the persisted `submittedCases` collection, which is kept
//! separate: a submitted case does not appear in lookups or matching.

use std::sync::Arc;

use chrono::Utc;
use legalmatch_core::{
  Result,
  case::{ClientCase, NewCase},
  lawyer::Lawyer,
  matching,
  reference::ReferenceData,
  store::KeyValueStore,
};

use crate::persistence::{Persistence, SUBMITTED_CASES_KEY};

pub struct CaseRepository<S> {
  reference:   Arc<ReferenceData>,
  persistence: Persistence<S>,
}

impl<S: KeyValueStore> CaseRepository<S> {
  pub fn new(reference: Arc<ReferenceData>, persistence: Persistence<S>) -> Self {
    Self { reference, persistence }
  }

  // ── Reference data ────────────────────────────────────────────────────

  pub fn cases(&self) -> &[ClientCase] { &self.reference.cases }

  pub fn lawyers(&self) -> &[Lawyer] { &self.reference.lawyers }

  pub fn find_case_by_id(&self, id: &str) -> Option<&ClientCase> {
    self.reference.cases.iter().find(|c| c.id == id)
  }

  pub fn find_lawyer_by_id(&self, id: &str) -> Option<&Lawyer> {
    self.reference.lawyers.iter().find(|l| l.id == id)
  }

  /// Reference cases visible to `lawyer_id`, in reference order. Empty for
  /// an unknown lawyer.
  pub fn matched_cases_for_lawyer(&self, lawyer_id: &str) -> Vec<ClientCase> {
    matching::matched_cases_for_lawyer(&self.reference.lawyers, &self.reference.cases, lawyer_id)
  }

  // ── Submissions ───────────────────────────────────────────────────────

  /// Validate `input`, append it to the submitted-case collection and return
  /// the stored case.
  pub async fn submit_case(&self, input: NewCase) -> Result<ClientCase> {
    let case = input.into_case(Utc::now())?;

    let mut submitted: Vec<ClientCase> =
      self.persistence.retrieve(SUBMITTED_CASES_KEY, Vec::new()).await;
    submitted.push(case.clone());
    self.persistence.store(SUBMITTED_CASES_KEY, &submitted).await;

    tracing::info!(case_id = %case.id, case_type = %case.case_type, "case submitted");
    Ok(case)
  }

  /// All submitted cases in submission order.
  pub async fn submitted_cases(&self) -> Vec<ClientCase> {
    self.persistence.retrieve(SUBMITTED_CASES_KEY, Vec::new()).await
  }
}

#[cfg(test)]
mod tests {
  use legalmatch_core::{
    Error,
    case::{BudgetSensitivity, CaseStatus, CaseType},
    store::MemoryStore,
  };

  use super::*;

  fn repo() -> CaseRepository<MemoryStore> {
    CaseRepository::new(
      Arc::new(ReferenceData::builtin()),
      Persistence::new(Arc::new(MemoryStore::new())),
    )
  }

  fn submission(location: &str) -> NewCase {
    NewCase {
      description:        "My employer has not paid overtime for six months.".into(),
      case_type:          CaseType::EmploymentLaw,
      location:           location.into(),
      budget_sensitivity: BudgetSensitivity::High,
      email:              "worker@example.com".into(),
    }
  }

  #[test]
  fn finds_reference_records() {
    let r = repo();
    assert_eq!(r.find_case_by_id("case2").unwrap().case_type, CaseType::FamilyLaw);
    assert_eq!(r.find_lawyer_by_id("law3").unwrap().name, "David Rodriguez");
    assert!(r.find_case_by_id("case99").is_none());
    assert!(r.find_lawyer_by_id("law99").is_none());
  }

  #[test]
  fn matched_cases_follow_reference_order() {
    let ids: Vec<_> = repo()
      .matched_cases_for_lawyer("law1")
      .into_iter()
      .map(|c| c.id)
      .collect();
    assert_eq!(ids, ["case1", "case4"]);
  }

  #[tokio::test]
  async fn submissions_append_in_order() {
    let r = repo();
    let first = r.submit_case(submission("Boston, MA")).await.unwrap();
    let second = r.submit_case(submission("Seattle, WA")).await.unwrap();

    let stored = r.submitted_cases().await;
    assert_eq!(stored, [first.clone(), second]);
    assert_eq!(first.status, CaseStatus::Pending);
  }

  #[tokio::test]
  async fn invalid_submission_is_not_stored() {
    let r = repo();
    let mut input = submission("Boston, MA");
    input.email = "not-an-email".into();

    assert!(matches!(r.submit_case(input).await, Err(Error::Validation(_))));
    assert!(r.submitted_cases().await.is_empty());
  }

  #[tokio::test]
  async fn submitted_cases_stay_out_of_lookups() {
    let r = repo();
    let case = r.submit_case(submission("New York, NY")).await.unwrap();
    assert!(r.find_case_by_id(&case.id).is_none());
    assert_eq!(r.matched_cases_for_lawyer("law1").len(), 2);
  }
}
