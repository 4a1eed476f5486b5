//! The authenticated principal held by a session.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Lawyer,
  Admin,
}

/// A user who can log in. For lawyers, `id` equals the id of their
/// [`Lawyer`](crate::lawyer::Lawyer) profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub id:    String,
  pub email: String,
  pub role:  Role,
}

impl Identity {
  /// Case-insensitive comparison against a login email.
  pub fn has_email(&self, email: &str) -> bool {
    self.email.to_lowercase() == email.to_lowercase()
  }
}
