//! Matching lawyers to cases.
//!
//! A case matches a lawyer when its type is one of the lawyer's practice
//! areas **and** its location string equals the lawyer's exactly. There is
//! no normalisation of locations; radius or geocoded matching would replace
//! [`location_matches`].
//!
//! [`match_score`] grades the same two conditions (50 points each) for
//! display. Selection never consults it.

use crate::{case::ClientCase, lawyer::Lawyer};

pub const PRACTICE_AREA_POINTS: u8 = 50;
pub const LOCATION_POINTS: u8 = 50;

pub fn practice_area_matches(lawyer: &Lawyer, case: &ClientCase) -> bool {
  lawyer.practices(case.case_type)
}

/// Case-sensitive, byte-for-byte comparison.
pub fn location_matches(lawyer: &Lawyer, case: &ClientCase) -> bool {
  lawyer.location == case.location
}

pub fn is_match(lawyer: &Lawyer, case: &ClientCase) -> bool {
  practice_area_matches(lawyer, case) && location_matches(lawyer, case)
}

/// 0, 50 or 100.
pub fn match_score(lawyer: &Lawyer, case: &ClientCase) -> u8 {
  let mut score = 0;
  if practice_area_matches(lawyer, case) {
    score += PRACTICE_AREA_POINTS;
  }
  if location_matches(lawyer, case) {
    score += LOCATION_POINTS;
  }
  score
}

/// Every case in `cases` matching `lawyer`, in input order.
pub fn matched_cases<'a>(
  lawyer: &'a Lawyer,
  cases: &'a [ClientCase],
) -> impl Iterator<Item = &'a ClientCase> + 'a {
  cases.iter().filter(move |c| is_match(lawyer, c))
}

/// Look up `lawyer_id` in `lawyers` and return its matching cases. An unknown
/// lawyer yields an empty list.
pub fn matched_cases_for_lawyer(
  lawyers: &[Lawyer],
  cases: &[ClientCase],
  lawyer_id: &str,
) -> Vec<ClientCase> {
  let Some(lawyer) = lawyers.iter().find(|l| l.id == lawyer_id) else {
    return Vec::new();
  };
  matched_cases(lawyer, cases).cloned().collect()
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use strum::IntoEnumIterator;

  use super::*;
  use crate::{
    case::{BudgetSensitivity, CaseStatus, CaseType},
    reference::ReferenceData,
  };

  fn case(id: &str, case_type: CaseType, location: &str) -> ClientCase {
    ClientCase {
      id: id.into(),
      description: "A matter needing counsel.".into(),
      case_type,
      location: location.into(),
      budget_sensitivity: BudgetSensitivity::NotSpecified,
      email: "client@example.com".into(),
      submission_date: Utc::now(),
      status: CaseStatus::Pending,
    }
  }

  fn lawyer() -> Lawyer {
    Lawyer {
      id:             "law9".into(),
      name:           "Test Lawyer".into(),
      email:          "test@example.com".into(),
      practice_areas: vec![CaseType::TaxLaw, CaseType::RealEstate],
      location:       "Austin, TX".into(),
      description:    None,
    }
  }

  #[test]
  fn both_conditions_required() {
    let l = lawyer();
    let cases = [
      case("both", CaseType::TaxLaw, "Austin, TX"),
      case("area-only", CaseType::RealEstate, "Dallas, TX"),
      case("location-only", CaseType::FamilyLaw, "Austin, TX"),
      case("neither", CaseType::Immigration, "Boston, MA"),
    ];
    let ids: Vec<_> = matched_cases(&l, &cases).map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["both"]);
  }

  #[test]
  fn location_comparison_is_exact() {
    let l = lawyer();
    assert!(!is_match(&l, &case("c", CaseType::TaxLaw, "austin, tx")));
    assert!(!is_match(&l, &case("c", CaseType::TaxLaw, "Austin, TX ")));
    assert!(!is_match(&l, &case("c", CaseType::TaxLaw, "Austin,TX")));
  }

  #[test]
  fn scores() {
    let l = lawyer();
    assert_eq!(match_score(&l, &case("c", CaseType::TaxLaw, "Austin, TX")), 100);
    assert_eq!(match_score(&l, &case("c", CaseType::TaxLaw, "Miami, FL")), 50);
    assert_eq!(match_score(&l, &case("c", CaseType::Other, "Austin, TX")), 50);
    assert_eq!(match_score(&l, &case("c", CaseType::Other, "Miami, FL")), 0);
  }

  #[test]
  fn selection_agrees_with_membership_and_equality() {
    let l = lawyer();
    let locations = ["Austin, TX", "austin, TX", "Chicago, IL"];
    let mut cases = Vec::new();
    for (i, ty) in CaseType::iter().enumerate() {
      for loc in locations {
        cases.push(case(&format!("{i}-{loc}"), ty, loc));
      }
    }
    let selected: Vec<_> = matched_cases(&l, &cases).collect();
    for c in &cases {
      let expected = l.practice_areas.contains(&c.case_type) && c.location == l.location;
      assert_eq!(selected.iter().any(|s| s.id == c.id), expected, "{}", c.id);
    }
  }

  #[test]
  fn unknown_lawyer_matches_nothing() {
    let data = ReferenceData::builtin();
    assert!(matched_cases_for_lawyer(&data.lawyers, &data.cases, "nobody").is_empty());
  }

  #[test]
  fn builtin_matches() {
    let data = ReferenceData::builtin();
    let ids = |lawyer_id| -> Vec<String> {
      matched_cases_for_lawyer(&data.lawyers, &data.cases, lawyer_id)
        .into_iter()
        .map(|c| c.id)
        .collect()
    };
    assert_eq!(ids("law1"), ["case1", "case4"]);
    assert_eq!(ids("law2"), ["case2"]);
    assert_eq!(ids("law3"), ["case3"]);
  }
}
