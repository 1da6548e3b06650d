use super::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInput {
  #[serde(alias = "previous_output")]
  pub previous_output: OutPoint,
  #[serde(with = "hex_uint::uint64")]
  pub since: u64,
}

impl CellInput {
  pub const SIZE: usize = 8 + OutPoint::SIZE;

  pub fn new(previous_output: OutPoint) -> Self {
    Self {
      previous_output,
      since: 0,
    }
  }

  pub fn serialize(&self) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(Self::SIZE);
    buffer.extend_from_slice(&self.since.to_le_bytes());
    buffer.extend_from_slice(&self.previous_output.serialize());
    buffer
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn since_precedes_out_point() {
    let input = CellInput {
      previous_output: OutPoint {
        tx_hash: Byte32([0xbb; 32]),
        index: 1,
      },
      since: 2,
    };

    let serialized = input.serialize();
    assert_eq!(serialized.len(), CellInput::SIZE);
    assert_eq!(&serialized[..8], &[2, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&serialized[8..40], &[0xbb; 32]);
    assert_eq!(&serialized[40..], &[1, 0, 0, 0]);
  }

  #[test]
  fn serde() {
    let input = CellInput::new(OutPoint::default());
    assert_eq!(
      serde_json::to_value(input).unwrap(),
      serde_json::json!({
        "previousOutput": {
          "txHash": format!("0x{}", "00".repeat(32)),
          "index": "0x0",
        },
        "since": "0x0",
      })
    );
  }
}
