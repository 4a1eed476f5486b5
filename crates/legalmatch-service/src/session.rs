//! The logged-in identity, carried as an explicit context object.
//!
//! Login only checks that the email belongs to a known user (compared
//! case-insensitively); the password is accepted and ignored. The current
//! identity is mirrored to the store so it survives restarts.

use std::sync::Arc;

use legalmatch_core::{
  Error, Result, identity::Identity, reference::ReferenceData, store::KeyValueStore,
};

use crate::persistence::{Persistence, SESSION_KEY};

pub struct Session<S> {
  persistence: Persistence<S>,
  reference:   Arc<ReferenceData>,
  current:     Option<Identity>,
}

impl<S: KeyValueStore> Session<S> {
  /// Restore any persisted session. A missing or corrupt record means no
  /// session.
  pub async fn init(persistence: Persistence<S>, reference: Arc<ReferenceData>) -> Self {
    let current: Option<Identity> = persistence.retrieve(SESSION_KEY, None).await;
    if let Some(identity) = &current {
      tracing::debug!(user_id = %identity.id, "restored session");
    }
    Self { persistence, reference, current }
  }

  pub fn current(&self) -> Option<&Identity> { self.current.as_ref() }

  pub fn is_authenticated(&self) -> bool { self.current.is_some() }

  /// The current identity, or [`Error::NotAuthenticated`].
  pub fn require(&self) -> Result<&Identity> { self.current().ok_or(Error::NotAuthenticated) }

  /// Start a session for the user with `email`. On failure the existing
  /// session, if any, is left untouched.
  pub async fn login(&mut self, email: &str, _password: &str) -> bool {
    let Some(found) = self.reference.users.iter().find(|u| u.has_email(email)).cloned() else {
      tracing::info!(email, "login rejected: unknown email");
      return false;
    };

    self.persistence.store(SESSION_KEY, &found).await;
    tracing::info!(user_id = %found.id, role = %found.role, "logged in");
    self.current = Some(found);
    true
  }

  /// End the session. Always succeeds.
  pub async fn logout(&mut self) {
    if let Some(identity) = self.current.take() {
      tracing::info!(user_id = %identity.id, "logged out");
    }
    self.persistence.remove(SESSION_KEY).await;
  }
}
