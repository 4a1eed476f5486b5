//! Short random identifiers.
//!
//! Identifiers are opaque base-36 strings drawn from the OS entropy source.
//! There is no collision detection and no persisted counter.

use rand_core::{OsRng, RngCore};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated identifier.
pub const ID_LEN: usize = 13;

/// Generate a fresh identifier from the OS random source.
pub fn generate_id() -> String { generate_id_with(&mut OsRng) }

/// Generate an identifier from a caller-supplied random source.
pub fn generate_id_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
  (0..ID_LEN)
    .map(|_| ALPHABET[(rng.next_u32() % ALPHABET.len() as u32) as usize] as char)
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  /// Counts upward; deterministic stand-in for an entropy source.
  struct Counter(u32);

  impl RngCore for Counter {
    fn next_u32(&mut self) -> u32 {
      self.0 = self.0.wrapping_add(1);
      self.0
    }

    fn next_u64(&mut self) -> u64 { u64::from(self.next_u32()) }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
      rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
      self.fill_bytes(dest);
      Ok(())
    }
  }

  #[test]
  fn fixed_length_and_alphabet() {
    let id = generate_id();
    assert_eq!(id.len(), ID_LEN);
    assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
  }

  #[test]
  fn deterministic_with_fixed_source() {
    assert_eq!(generate_id_with(&mut Counter(0)), "123456789abcd");
  }

  #[test]
  fn collisions_are_unlikely() {
    let ids: HashSet<_> = (0..1000).map(|_| generate_id()).collect();
    assert_eq!(ids.len(), 1000);
  }
}
