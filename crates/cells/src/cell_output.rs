use super::*;

#[derive(Debug, PartialEq, Eq, Clone, Default, Hash, Serialize, Deserialize)]
pub struct CellOutput {
  pub capacity: Capacity,
  pub lock: Script,
  #[serde(rename = "type")]
  pub type_: Option<Script>,
}

impl CellOutput {
  pub const CAPACITY_SIZE: usize = 8;

  /// Bytes the cell occupies on chain, given `data_len` bytes of data.
  pub fn occupied_size(&self, data_len: usize) -> usize {
    Self::CAPACITY_SIZE
      + self.lock.occupied_size()
      + self.type_.as_ref().map(Script::occupied_size).unwrap_or_default()
      + data_len
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn occupied_size() {
    let lock = Script {
      args: Bytes(vec![0; 20]),
      ..Default::default()
    };

    let output = CellOutput {
      capacity: Capacity::ZERO,
      lock: lock.clone(),
      type_: None,
    };

    assert_eq!(output.occupied_size(0), 61);

    let output = CellOutput {
      type_: Some(lock.with_args(vec![0; 32])),
      ..output
    };

    assert_eq!(output.occupied_size(10), 61 + 65 + 10);
  }

  #[test]
  fn missing_type_is_null() {
    let json = serde_json::to_value(CellOutput::default()).unwrap();
    assert_eq!(json["type"], serde_json::Value::Null);
    assert_eq!(json["capacity"], "0x0");
  }
}
