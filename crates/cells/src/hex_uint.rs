//! Serde adapters for integers carried as `0x`-prefixed hex quantities in CKB
//! JSON, for use with `#[serde(with = "...")]`.

use super::*;

fn parse(s: &str) -> Result<u64, String> {
  let digits = strip_0x(s).ok_or_else(|| format!("`{s}` is missing `0x` prefix"))?;
  u64::from_str_radix(digits, 16).map_err(|err| format!("invalid hex quantity `{s}`: {err}"))
}

pub mod uint32 {
  use super::*;

  pub fn serialize<S: Serializer>(n: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{n:#x}"))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = parse(&String::deserialize(deserializer)?).map_err(de::Error::custom)?;
    n.try_into().map_err(de::Error::custom)
  }
}

pub mod uint64 {
  use super::*;

  pub fn serialize<S: Serializer>(n: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{n:#x}"))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    parse(&String::deserialize(deserializer)?).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, PartialEq, Serialize, Deserialize)]
  struct Quantities {
    #[serde(with = "super::uint32")]
    index: u32,
    #[serde(with = "super::uint64")]
    since: u64,
  }

  #[test]
  fn zero_is_0x0() {
    assert_eq!(
      serde_json::to_string(&Quantities { index: 0, since: 0 }).unwrap(),
      r#"{"index":"0x0","since":"0x0"}"#
    );
  }

  #[test]
  fn round_trip() {
    let quantities = Quantities {
      index: 0x1f,
      since: u64::MAX,
    };
    let json = serde_json::to_string(&quantities).unwrap();
    assert_eq!(json, r#"{"index":"0x1f","since":"0xffffffffffffffff"}"#);
    assert_eq!(serde_json::from_str::<Quantities>(&json).unwrap(), quantities);
  }

  #[test]
  fn errors() {
    assert!(serde_json::from_str::<Quantities>(r#"{"index":"1","since":"0x0"}"#).is_err());
    assert!(serde_json::from_str::<Quantities>(r#"{"index":"0x100000000","since":"0x0"}"#).is_err());
  }
}
