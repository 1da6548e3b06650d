//! Little-endian hex rendering of fixed-width unsigned integers.
//!
//! Every value is rendered as its bytes ordered least-significant first, each
//! byte as two lowercase hex digits, so a `u32` always yields 8 characters, a
//! `u64` 16, and a `u128` 32. Zero is rendered full width.

use super::*;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Width {
  U32,
  U64,
  U128,
}

impl Width {
  pub fn bytes(self) -> usize {
    match self {
      Self::U32 => 4,
      Self::U64 => 8,
      Self::U128 => 16,
    }
  }

  pub fn max(self) -> u128 {
    match self {
      Self::U32 => u32::MAX.into(),
      Self::U64 => u64::MAX.into(),
      Self::U128 => u128::MAX,
    }
  }
}

impl Display for Width {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::U32 => write!(f, "u32"),
      Self::U64 => write!(f, "u64"),
      Self::U128 => write!(f, "u128"),
    }
  }
}

impl FromStr for Width {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "32" | "u32" => Ok(Self::U32),
      "64" | "u64" => Ok(Self::U64),
      "128" | "u128" => Ok(Self::U128),
      _ => Err(Error::Width(s.into())),
    }
  }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
  #[error("expected {expected} hex characters but got {actual}")]
  Length { expected: usize, actual: usize },
  #[error("invalid hex: {0}")]
  Hex(#[from] hex::FromHexError),
  #[error("value {value} does not fit in {width}")]
  OutOfRange { value: u128, width: Width },
  #[error("invalid integer `{input}`: {source}")]
  Parse {
    input: String,
    source: ParseIntError,
  },
  #[error("invalid width `{0}`")]
  Width(String),
}

pub fn u32_to_le(n: u32) -> String {
  hex::encode(n.to_le_bytes())
}

pub fn u64_to_le(n: u64) -> String {
  hex::encode(n.to_le_bytes())
}

pub fn u128_to_le(n: u128) -> String {
  hex::encode(n.to_le_bytes())
}

/// The `width` bytes of `n`, least significant first. Fails instead of
/// truncating when `n` has bits above the width.
pub fn to_le_bytes(n: u128, width: Width) -> Result<Vec<u8>, Error> {
  if n > width.max() {
    return Err(Error::OutOfRange { value: n, width });
  }

  Ok(n.to_le_bytes()[..width.bytes()].to_vec())
}

/// Render `n` at `width` as hex.
pub fn encode(n: u128, width: Width) -> Result<String, Error> {
  Ok(hex::encode(to_le_bytes(n, width)?))
}

pub fn decode(s: &str, width: Width) -> Result<u128, Error> {
  let s = strip_0x(s).unwrap_or(s);

  if s.len() != width.bytes() * 2 {
    return Err(Error::Length {
      expected: width.bytes() * 2,
      actual: s.len(),
    });
  }

  let mut bytes = [0; 16];
  hex::decode_to_slice(s, &mut bytes[..width.bytes()])?;

  Ok(u128::from_le_bytes(bytes))
}

/// Parse a decimal integer that must fit in `width`.
pub fn parse(s: &str, width: Width) -> Result<u128, Error> {
  let value = s.parse::<u128>().map_err(|source| Error::Parse {
    input: s.into(),
    source,
  })?;

  if value > width.max() {
    return Err(Error::OutOfRange { value, width });
  }

  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn le_bytes() {
    assert_eq!(
      to_le_bytes(21_000_000, Width::U32).unwrap(),
      [0x40, 0x6f, 0x40, 0x01]
    );
    assert_eq!(to_le_bytes(0, Width::U128).unwrap(), [0; 16]);
    assert_eq!(
      to_le_bytes(u128::from(u32::MAX) + 1, Width::U32),
      Err(Error::OutOfRange {
        value: u128::from(u32::MAX) + 1,
        width: Width::U32,
      })
    );
  }

  #[test]
  fn u32_examples() {
    assert_eq!(u32_to_le(21_000_000), "406f4001");
    assert_eq!(u32_to_le(1), "01000000");
    assert_eq!(u32_to_le(u32::MAX), "ffffffff");
  }

  #[test]
  fn u64_examples() {
    assert_eq!(u64_to_le(21_000_000), "406f400100000000");
    assert_eq!(u64_to_le(0x0102_0304_0506_0708), "0807060504030201");
  }

  #[test]
  fn u128_examples() {
    assert_eq!(
      u128_to_le(21_000_000),
      "406f4001000000000000000000000000"
    );
    assert_eq!(
      u128_to_le(1000 * 100_000_000),
      "00e87648170000000000000000000000"
    );
    assert_eq!(
      u128_to_le(21_000_000 * 100_000_000),
      "0040075af07507000000000000000000"
    );
  }

  #[test]
  fn zero_is_rendered_full_width() {
    assert_eq!(u32_to_le(0), "00000000");
    assert_eq!(u64_to_le(0), "0000000000000000");
    assert_eq!(u128_to_le(0), "00000000000000000000000000000000");
  }

  #[test]
  fn output_length_is_fixed() {
    for n in [0, 1, 0xff, 0x100, u32::MAX] {
      assert_eq!(u32_to_le(n).len(), 8);
    }

    for n in [0, 1, u64::from(u32::MAX) + 1, u64::MAX] {
      assert_eq!(u64_to_le(n).len(), 16);
    }

    for n in [0, 1, u128::from(u64::MAX) + 1, u128::MAX] {
      assert_eq!(u128_to_le(n).len(), 32);
    }
  }

  #[test]
  fn encode_matches_fixed_width_functions() {
    assert_eq!(encode(21_000_000, Width::U32).unwrap(), u32_to_le(21_000_000));
    assert_eq!(encode(21_000_000, Width::U64).unwrap(), u64_to_le(21_000_000));
    assert_eq!(
      encode(21_000_000, Width::U128).unwrap(),
      u128_to_le(21_000_000)
    );
  }

  #[test]
  fn encode_rejects_values_wider_than_width() {
    assert_eq!(
      encode(u128::from(u32::MAX) + 1, Width::U32),
      Err(Error::OutOfRange {
        value: u128::from(u32::MAX) + 1,
        width: Width::U32,
      })
    );
    assert_eq!(
      encode(u128::from(u64::MAX) + 1, Width::U64)
        .unwrap_err()
        .to_string(),
      "value 18446744073709551616 does not fit in u64"
    );
    assert!(encode(u128::MAX, Width::U128).is_ok());
  }

  #[test]
  fn decode_round_trips() {
    for n in [0, 1, 21_000_000, u32::MAX] {
      assert_eq!(decode(&u32_to_le(n), Width::U32).unwrap(), u128::from(n));
    }

    for n in [0, 21_000_000 * 100_000_000, u64::MAX] {
      assert_eq!(decode(&u64_to_le(n), Width::U64).unwrap(), u128::from(n));
    }

    for n in [0, 1 << 64, u128::MAX - 1, u128::MAX] {
      assert_eq!(decode(&u128_to_le(n), Width::U128).unwrap(), n);
    }
  }

  #[test]
  fn decode_accepts_prefix() {
    assert_eq!(decode("0x406f4001", Width::U32).unwrap(), 21_000_000);
  }

  #[test]
  fn decode_errors() {
    assert_eq!(
      decode("406f40", Width::U32),
      Err(Error::Length {
        expected: 8,
        actual: 6
      })
    );
    assert!(matches!(
      decode("zz6f4001", Width::U32),
      Err(Error::Hex(_))
    ));
  }

  #[test]
  fn parse_checks_range() {
    assert_eq!(parse("4294967295", Width::U32).unwrap(), 4_294_967_295);
    assert_eq!(
      parse("4294967296", Width::U32).unwrap_err().to_string(),
      "value 4294967296 does not fit in u32"
    );
    assert_eq!(
      parse("-1", Width::U64).unwrap_err().to_string(),
      "invalid integer `-1`: invalid digit found in string"
    );
    assert!(parse("340282366920938463463374607431768211456", Width::U128).is_err());
  }

  #[test]
  fn width_from_str() {
    assert_eq!("32".parse::<Width>().unwrap(), Width::U32);
    assert_eq!("u64".parse::<Width>().unwrap(), Width::U64);
    assert_eq!("128".parse::<Width>().unwrap(), Width::U128);
    assert_eq!(
      "16".parse::<Width>().unwrap_err().to_string(),
      "invalid width `16`"
    );
  }
}
