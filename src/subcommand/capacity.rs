use super::*;

#[derive(Debug, Parser)]
pub(crate) struct InfoCapacity {
  #[arg(long, help = "Deploy from <ADDRESS>.")]
  pub(crate) address: String,
  #[arg(long, help = "Size the record for the xins schema.")]
  pub(crate) xins: bool,
  #[command(flatten)]
  pub(crate) info: InfoArgs,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub capacity: Capacity,
  pub ckb: String,
}

impl InfoCapacity {
  pub(crate) fn run(self) -> SubcommandResult {
    let info = self.info.inscription_info();

    let capacity = if self.xins {
      crate::capacity::info_capacity_for_address(&self.address, &XinsInfo::from(info))?
    } else {
      crate::capacity::info_capacity_for_address(&self.address, &info)?
    };

    Ok(Some(Box::new(Output {
      capacity,
      ckb: capacity.to_string(),
    })))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn output() {
    let capacity = InfoCapacity {
      address: TESTNET_ADDRESS.into(),
      xins: false,
      info: InfoArgs {
        decimal: 8,
        name: "CKB Fist Inscription".into(),
        symbol: "CKBI".into(),
        max_supply: 2_100_000_000_000_000,
        mint_limit: 100_000_000_000,
        mint_status: 0,
      },
    };

    let expected = crate::capacity::info_capacity(&joyid_lock(), &inscription_info());

    assert_eq!(
      serde_json::to_value(Output {
        capacity: expected,
        ckb: expected.to_string(),
      })
      .unwrap(),
      serde_json::json!({
        "capacity": "0x51f4e4660",
        "ckb": "220.00060000 CKB",
      })
    );

    assert!(capacity.run().unwrap().is_some());
  }

  #[test]
  fn invalid_address() {
    let capacity = InfoCapacity {
      address: "ckt1nope".into(),
      xins: true,
      info: InfoArgs {
        decimal: 0,
        name: String::new(),
        symbol: String::new(),
        max_supply: 0,
        mint_limit: 0,
        mint_status: 0,
      },
    };

    assert!(capacity.run().is_err());
  }
}
