use super::*;

/// Variable-length binary data, displayed as `0x`-prefixed lowercase hex. The
/// empty value displays as `0x`.
#[derive(
  Debug, PartialEq, Eq, Clone, Default, Hash, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay,
)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for Bytes {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }
}

impl From<&[u8]> for Bytes {
  fn from(bytes: &[u8]) -> Self {
    Self(bytes.to_vec())
  }
}

impl AsRef<[u8]> for Bytes {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Display for Bytes {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "0x{}", hex::encode(&self.0))
  }
}

impl FromStr for Bytes {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let hex = strip_0x(s).ok_or_else(|| Error::Prefix(s.into()))?;
    Ok(Self(hex::decode(hex)?))
  }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
  #[error("invalid hex: {0}")]
  Hex(#[from] hex::FromHexError),
  #[error("`{0}` is missing `0x` prefix")]
  Prefix(String),
}
