use super::*;

/// Reference to an output of a committed transaction.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutPoint {
  #[serde(alias = "tx_hash")]
  pub tx_hash: Byte32,
  #[serde(with = "hex_uint::uint32")]
  pub index: u32,
}

impl OutPoint {
  pub const SIZE: usize = Byte32::LEN + 4;

  pub fn serialize(&self) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(Self::SIZE);
    buffer.extend_from_slice(self.tx_hash.as_ref());
    buffer.extend_from_slice(&self.index.to_le_bytes());
    buffer
  }
}

impl Display for OutPoint {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}:{}", self.tx_hash, self.index)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serialize() {
    let out_point = OutPoint {
      tx_hash: Byte32([0xaa; 32]),
      index: 0x0102,
    };

    let serialized = out_point.serialize();
    assert_eq!(serialized.len(), OutPoint::SIZE);
    assert_eq!(&serialized[..32], &[0xaa; 32]);
    assert_eq!(&serialized[32..], &[0x02, 0x01, 0x00, 0x00]);
  }

  #[test]
  fn serde() {
    let out_point = OutPoint {
      tx_hash: Byte32([0x11; 32]),
      index: 1,
    };

    assert_eq!(
      serde_json::to_value(out_point).unwrap(),
      serde_json::json!({
        "txHash": format!("0x{}", "11".repeat(32)),
        "index": "0x1",
      })
    );
  }

  #[test]
  fn display() {
    assert_eq!(
      OutPoint {
        tx_hash: Byte32([0; 32]),
        index: 3
      }
      .to_string(),
      format!("0x{}:3", "00".repeat(32))
    );
  }
}
