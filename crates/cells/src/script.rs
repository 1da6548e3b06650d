use super::*;

/// A lock or type script: the identity of a program plus its arguments.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
  #[serde(alias = "code_hash")]
  pub code_hash: Byte32,
  #[serde(alias = "hash_type")]
  pub hash_type: HashType,
  pub args: Bytes,
}

impl Script {
  /// Bytes the script occupies in a cell: code hash, hash type, and args.
  pub fn occupied_size(&self) -> usize {
    Byte32::LEN + 1 + self.args.len()
  }

  pub fn serialize(&self) -> Vec<u8> {
    molecule::table(&[
      self.code_hash.as_ref(),
      &[self.hash_type.as_u8()],
      &molecule::bytes(self.args.as_slice()),
    ])
  }

  pub fn hash(&self) -> Byte32 {
    hash::blake2b_256(self.serialize())
  }

  pub fn with_args(&self, args: impl Into<Bytes>) -> Self {
    Self {
      args: args.into(),
      ..self.clone()
    }
  }
}
