use super::*;

/// An amount of the native token, counted in shannons. One byte of cell
/// storage costs one CKB.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash, PartialOrd, Ord)]
pub struct Capacity(u64);

impl Capacity {
  pub const ZERO: Self = Self(0);

  pub const fn from_shannons(shannons: u64) -> Self {
    Self(shannons)
  }

  pub const fn from_ckb(ckb: u64) -> Self {
    Self(ckb * SHANNONS_PER_CKB)
  }

  pub const fn as_shannons(self) -> u64 {
    self.0
  }

  /// The capacity required to store `bytes` bytes.
  pub fn bytes(bytes: usize) -> Option<Self> {
    u64::try_from(bytes)
      .ok()?
      .checked_mul(SHANNONS_PER_CKB)
      .map(Self)
  }

  pub fn checked_add(self, rhs: Self) -> Option<Self> {
    self.0.checked_add(rhs.0).map(Self)
  }

  pub fn checked_sub(self, rhs: Self) -> Option<Self> {
    self.0.checked_sub(rhs.0).map(Self)
  }
}

impl Display for Capacity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}.{:08} CKB",
      self.0 / SHANNONS_PER_CKB,
      self.0 % SHANNONS_PER_CKB
    )
  }
}

impl Serialize for Capacity {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    hex_uint::uint64::serialize(&self.0, serializer)
  }
}

impl<'de> Deserialize<'de> for Capacity {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    hex_uint::uint64::deserialize(deserializer).map(Self)
  }
}
