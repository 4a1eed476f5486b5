//! Core types and trait definitions for the LegalMatch case and document
//! store.
//!
//! This crate is deliberately free of database and runtime dependencies.
//! Storage backends implement [`store::KeyValueStore`]; content generators
//! implement [`generate::ContentGenerator`]. The service layer composes both.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod case;
pub mod catalog;
pub mod document;
pub mod error;
pub mod generate;
pub mod id;
pub mod identity;
pub mod lawyer;
pub mod matching;
pub mod reference;
pub mod store;

pub use error::{Error, Result};
