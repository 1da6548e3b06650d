use super::*;

/// An unsigned transaction, serialized in the JSON envelope wallets expect.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
  #[serde(with = "hex_uint::uint32")]
  pub version: u32,
  pub cell_deps: Vec<CellDep>,
  pub header_deps: Vec<Byte32>,
  pub inputs: Vec<CellInput>,
  pub outputs: Vec<CellOutput>,
  pub outputs_data: Vec<Bytes>,
  pub witnesses: Vec<Bytes>,
}
