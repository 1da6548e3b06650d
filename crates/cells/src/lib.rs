//! Types for interoperating with CKB cells, scripts, and transactions.

use {
  serde::{de, Deserialize, Deserializer, Serialize, Serializer},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  std::{
    fmt::{self, Display, Formatter},
    num::ParseIntError,
    str::FromStr,
  },
  thiserror::Error,
};

pub use {
  address::{Address, Network},
  byte32::Byte32,
  bytes::Bytes,
  capacity::Capacity,
  cell_dep::{CellDep, DepType},
  cell_input::CellInput,
  cell_output::CellOutput,
  hash_type::HashType,
  out_point::OutPoint,
  raw_transaction::RawTransaction,
  script::Script,
  witness_args::WitnessArgs,
};

pub const SHANNONS_PER_CKB: u64 = 100_000_000;

pub mod address;
mod byte32;
mod bytes;
mod capacity;
mod cell_dep;
mod cell_input;
mod cell_output;
pub mod hash;
mod hash_type;
pub mod hex_uint;
pub mod le;
pub mod molecule;
mod out_point;
mod raw_transaction;
mod script;
mod witness_args;

fn strip_0x(s: &str) -> Option<&str> {
  s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}
