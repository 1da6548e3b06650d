//! Inscription metadata records and the values derived from them.
//!
//! Both record schemas share one byte layout:
//!
//! ```text
//! decimal        1
//! name length    1
//! name           name length
//! symbol length  1
//! symbol         symbol length
//! hash           32
//! max supply     16, little-endian
//! mint limit     16, little-endian
//! mint status    1
//! ```
//!
//! They differ only in which script the 32-byte hash commits to: the xUDT
//! token type for `InscriptionInfo`, the xins type for `XinsInfo`.

use super::*;

pub use self::{inscription_info::InscriptionInfo, xins_info::XinsInfo};

mod inscription_info;
mod xins_info;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("inscription {field} cannot be encoded"))]
  Amount {
    field: &'static str,
    source: le::Error,
  },
  #[snafu(display("inscription {field} is {len} bytes but may be at most 255"))]
  FieldTooLong { field: &'static str, len: usize },
}

/// A borrowed view of the fields every schema serializes.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Metadata<'a> {
  pub decimal: u8,
  pub name: &'a str,
  pub symbol: &'a str,
  pub hash: Byte32,
  pub max_supply: u128,
  pub mint_limit: u128,
  pub mint_status: u8,
}

impl Metadata<'_> {
  pub fn serialized_size(&self) -> usize {
    1 + (1 + self.name.len())
      + (1 + self.symbol.len())
      + Byte32::LEN
      + le::Width::U128.bytes()
      + le::Width::U128.bytes()
      + 1
  }

  pub fn serialize(&self) -> Result<Vec<u8>, Error> {
    let name_len = length_prefix("name", self.name)?;
    let symbol_len = length_prefix("symbol", self.symbol)?;

    let mut buffer = Vec::with_capacity(self.serialized_size());
    buffer.push(self.decimal);
    buffer.push(name_len);
    buffer.extend_from_slice(self.name.as_bytes());
    buffer.push(symbol_len);
    buffer.extend_from_slice(self.symbol.as_bytes());
    buffer.extend_from_slice(self.hash.as_ref());
    buffer.extend(amount("max supply", self.max_supply)?);
    buffer.extend(amount("mint limit", self.mint_limit)?);
    buffer.push(self.mint_status);

    Ok(buffer)
  }
}

fn amount(field: &'static str, value: u128) -> Result<Vec<u8>, Error> {
  le::to_le_bytes(value, le::Width::U128).snafu_context(Amount { field })
}

fn length_prefix(field: &'static str, value: &str) -> Result<u8, Error> {
  u8::try_from(value.len()).map_err(|_| Error::FieldTooLong {
    field,
    len: value.len(),
  })
}

/// A metadata record schema a deploy transaction can carry.
pub trait Schema: Clone {
  /// Key the content hash is reported under.
  const HASH_FIELD: &'static str;

  fn metadata(&self) -> Metadata<'_>;

  /// A copy of the record carrying `hash` as its content hash.
  fn with_hash(&self, hash: Byte32) -> Self;

  /// The content hash for the record deployed under `info_type`.
  fn content_hash(info_type: &Script, deployment: &Deployment) -> Byte32;

  fn serialized_size(&self) -> usize {
    self.metadata().serialized_size()
  }

  fn to_bytes(&self) -> Result<Vec<u8>, Error> {
    self.metadata().serialize()
  }
}

/// Type-id style identifier: the hash of the first input followed by the
/// little-endian index of the output it identifies.
pub fn inscription_id(first_input: &CellInput, output_index: u64) -> Byte32 {
  hash::Hasher::new()
    .update(&first_input.serialize())
    .update(&output_index.to_le_bytes())
    .finalize()
}
