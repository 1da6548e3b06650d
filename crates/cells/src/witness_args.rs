use super::*;

/// The structured witness layout: a lock proof plus optional data for the
/// input and output type scripts.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WitnessArgs {
  pub lock: Option<Bytes>,
  pub input_type: Option<Bytes>,
  pub output_type: Option<Bytes>,
}

impl WitnessArgs {
  pub fn serialize(&self) -> Vec<u8> {
    molecule::table(&[
      &molecule::bytes_opt(self.lock.as_ref().map(Bytes::as_slice)),
      &molecule::bytes_opt(self.input_type.as_ref().map(Bytes::as_slice)),
      &molecule::bytes_opt(self.output_type.as_ref().map(Bytes::as_slice)),
    ])
  }
}

impl From<&WitnessArgs> for Bytes {
  fn from(witness_args: &WitnessArgs) -> Self {
    Self(witness_args.serialize())
  }
}
