//! Case and document services for LegalMatch.
//!
//! Every service is generic over a [`KeyValueStore`] backend and shares it
//! through a [`Persistence`] adapter. Each mutation reads the whole
//! collection under its key, changes an in-memory copy and writes the whole
//! collection back. There is no locking: concurrent writers to the same key
//! can lose updates, which is acceptable for a single user in a single
//! process.
//!
//! [`KeyValueStore`]: legalmatch_core::store::KeyValueStore

pub mod cases;
pub mod documents;
pub mod generator;
pub mod persistence;
pub mod session;

pub use cases::CaseRepository;
pub use documents::DocumentService;
pub use generator::MockGenerator;
pub use legalmatch_core::{Error, Result};
pub use persistence::Persistence;
pub use session::Session;
