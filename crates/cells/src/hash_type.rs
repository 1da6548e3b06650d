use super::*;

/// How a script's code hash is matched against cell deps.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashType {
  #[default]
  Data,
  Type,
  Data1,
  Data2,
}

impl HashType {
  pub fn as_u8(self) -> u8 {
    match self {
      Self::Data => 0,
      Self::Type => 1,
      Self::Data1 => 2,
      Self::Data2 => 4,
    }
  }

  pub fn from_u8(n: u8) -> Option<Self> {
    match n {
      0 => Some(Self::Data),
      1 => Some(Self::Type),
      2 => Some(Self::Data1),
      4 => Some(Self::Data2),
      _ => None,
    }
  }
}

impl Display for HashType {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Data => write!(f, "data"),
      Self::Type => write!(f, "type"),
      Self::Data1 => write!(f, "data1"),
      Self::Data2 => write!(f, "data2"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn byte_round_trip() {
    for hash_type in [
      HashType::Data,
      HashType::Type,
      HashType::Data1,
      HashType::Data2,
    ] {
      assert_eq!(HashType::from_u8(hash_type.as_u8()), Some(hash_type));
    }

    assert_eq!(HashType::from_u8(3), None);
  }

  #[test]
  fn serde() {
    assert_eq!(
      serde_json::to_string(&HashType::Data1).unwrap(),
      "\"data1\""
    );
    assert_eq!(
      serde_json::from_str::<HashType>("\"type\"").unwrap(),
      HashType::Type
    );
  }
}
