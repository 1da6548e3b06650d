use super::*;

/// A 32-byte value such as a code hash or transaction hash, displayed as
/// `0x`-prefixed lowercase hex.
#[derive(
  Debug, PartialEq, Eq, Copy, Clone, Default, Hash, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay,
)]
pub struct Byte32(pub [u8; 32]);

impl Byte32 {
  pub const LEN: usize = 32;

  pub fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }

  /// Parse a `0x`-prefixed literal in const context. Panics, and so fails to
  /// compile when used in a constant, if `hex` is malformed.
  pub const fn from_hex(hex: &str) -> Self {
    const fn nibble(c: u8) -> u8 {
      match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
      }
    }

    let hex = hex.as_bytes();

    assert!(
      hex.len() == 2 + Self::LEN * 2 && hex[0] == b'0' && hex[1] == b'x',
      "expected 0x followed by 64 hex digits"
    );

    let mut bytes = [0; 32];
    let mut i = 0;
    while i < Self::LEN {
      bytes[i] = nibble(hex[2 + i * 2]) << 4 | nibble(hex[3 + i * 2]);
      i += 1;
    }

    Self(bytes)
  }
}

impl From<[u8; 32]> for Byte32 {
  fn from(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }
}

impl AsRef<[u8]> for Byte32 {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl TryFrom<&[u8]> for Byte32 {
  type Error = Error;

  fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
    Ok(Self(
      slice
        .try_into()
        .map_err(|_| Error::Length(slice.len()))?,
    ))
  }
}

impl Display for Byte32 {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl FromStr for Byte32 {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let hex = strip_0x(s).ok_or_else(|| Error::Prefix(s.into()))?;

    if hex.len() != Self::LEN * 2 {
      return Err(Error::Length(hex.len() / 2));
    }

    let mut bytes = [0; 32];
    hex::decode_to_slice(hex, &mut bytes)?;

    Ok(Self(bytes))
  }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
  #[error("invalid hex: {0}")]
  Hex(#[from] hex::FromHexError),
  #[error("expected 32 bytes but got {0}")]
  Length(usize),
  #[error("`{0}` is missing `0x` prefix")]
  Prefix(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  const HASH: &str = "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8";

  #[test]
  fn display_from_str_agree() {
    assert_eq!(HASH.parse::<Byte32>().unwrap().to_string(), HASH);
  }

  #[test]
  fn parse_errors() {
    assert_eq!(
      "9bd7".parse::<Byte32>().unwrap_err().to_string(),
      "`9bd7` is missing `0x` prefix"
    );
    assert_eq!(
      "0x9bd7".parse::<Byte32>().unwrap_err(),
      Error::Length(2)
    );
  }

  #[test]
  fn serde() {
    let byte32 = HASH.parse::<Byte32>().unwrap();
    let json = serde_json::to_string(&byte32).unwrap();
    assert_eq!(json, format!("\"{HASH}\""));
    assert_eq!(serde_json::from_str::<Byte32>(&json).unwrap(), byte32);
  }

  #[test]
  fn from_hex_matches_from_str() {
    const PARSED: Byte32 = Byte32::from_hex(HASH);
    assert_eq!(PARSED, HASH.parse::<Byte32>().unwrap());
  }

  #[test]
  #[should_panic(expected = "invalid hex digit")]
  fn from_hex_rejects_non_hex() {
    Byte32::from_hex("0xzbd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8");
  }

  #[test]
  fn from_slice() {
    assert_eq!(Byte32::try_from(&[7; 32][..]).unwrap(), Byte32([7; 32]));
    assert_eq!(Byte32::try_from(&[7; 20][..]), Err(Error::Length(20)));
  }
}
