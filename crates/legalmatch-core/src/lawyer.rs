//! Lawyer profiles — static reference data consulted by matching.

use serde::{Deserialize, Serialize};

use crate::case::CaseType;

/// A lawyer's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lawyer {
  pub id:             String,
  pub name:           String,
  pub email:          String,
  /// Practice areas the lawyer accepts cases in. Order is presentational.
  pub practice_areas: Vec<CaseType>,
  /// Free text; compared verbatim against case locations.
  pub location:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description:    Option<String>,
}

impl Lawyer {
  pub fn practices(&self, case_type: CaseType) -> bool {
    self.practice_areas.contains(&case_type)
  }
}
