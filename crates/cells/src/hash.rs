//! The ledger's default hash: blake2b-256 personalized with
//! `ckb-default-hash`.

use {super::*, blake2b_simd::Params};

pub const PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

fn params() -> Params {
  let mut params = Params::new();
  params.hash_length(32).personal(PERSONALIZATION);
  params
}

pub fn blake2b_256(data: impl AsRef<[u8]>) -> Byte32 {
  Hasher::new().update(data.as_ref()).finalize()
}

/// The first 20 bytes of `blake2b_256`.
pub fn blake160(data: impl AsRef<[u8]>) -> [u8; 20] {
  let mut hash = [0; 20];
  hash.copy_from_slice(&blake2b_256(data).as_bytes()[..20]);
  hash
}

pub struct Hasher(blake2b_simd::State);

impl Hasher {
  pub fn new() -> Self {
    Self(params().to_state())
  }

  pub fn update(&mut self, data: &[u8]) -> &mut Self {
    self.0.update(data);
    self
  }

  pub fn finalize(&self) -> Byte32 {
    let mut hash = [0; 32];
    hash.copy_from_slice(self.0.finalize().as_bytes());
    Byte32(hash)
  }
}

impl Default for Hasher {
  fn default() -> Self {
    Self::new()
  }
}
