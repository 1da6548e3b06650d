use super::*;

/// Scripts and cell deps an inscription deploy references on one network.
#[derive(Debug, PartialEq, Clone)]
pub struct Deployment {
  pub cota_type: Script,
  pub inscription_info_dep: CellDep,
  pub inscription_info_type: Script,
  pub inscription_type: Script,
  pub joyid_lock_dep: CellDep,
  pub xins_type: Script,
  pub xudt_type: Script,
}

/// Deployment values as given in config. Unset fields fall back to the
/// values built in for the network, and fields with no built-in value must
/// be configured.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialDeployment {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cota_type: Option<Script>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inscription_info_dep: Option<CellDep>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inscription_info_type: Option<Script>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inscription_type: Option<Script>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub joyid_lock_dep: Option<CellDep>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub xins_type: Option<Script>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub xudt_type: Option<Script>,
}

fn script(code_hash: &str, hash_type: HashType) -> Option<Script> {
  Some(Script {
    code_hash: Byte32::from_hex(code_hash),
    hash_type,
    args: Bytes::new(),
  })
}

fn cell_dep(tx_hash: &str, index: u32, dep_type: DepType) -> Option<CellDep> {
  Some(CellDep {
    out_point: OutPoint {
      tx_hash: Byte32::from_hex(tx_hash),
      index,
    },
    dep_type,
  })
}

impl PartialDeployment {
  /// Built-in mainnet values. The inscription info dep and xins type have
  /// none and come from config.
  pub fn mainnet() -> Self {
    Self {
      cota_type: script(
        "0x1122a4fb54697cf2e6e3a96c9d80fd398a936559b90954c6e88eb7ba0cf652df",
        HashType::Type,
      ),
      inscription_info_dep: None,
      inscription_info_type: script(
        "0x5c33fc69bd72e895a63176147c6ab0bb5758d1c7a32e0914f99f9ec1bed90d41",
        HashType::Type,
      ),
      inscription_type: script(
        "0x7490970e6af9b9fe63fc19fc523a12b2ec69027e6ae484edffb97334f74e8c97",
        HashType::Type,
      ),
      joyid_lock_dep: cell_dep(
        "0xf05188e5f3a6767fc4687faf45ba5f1a6e25d3ada6129dae8722cb282f262493",
        0,
        DepType::DepGroup,
      ),
      xins_type: None,
      xudt_type: script(
        "0x50bd8d6680b8b9cf98b73f3c08faf8b2a21914311954118ad6609be6e78a1b95",
        HashType::Data1,
      ),
    }
  }

  /// Built-in testnet values. The inscription info dep and xins type have
  /// none and come from config.
  pub fn testnet() -> Self {
    Self {
      cota_type: script(
        "0x89cd8003a0eaf8e65e0c31525b7d1d5c1becefd2ea75bb4cff87810ae37764d8",
        HashType::Type,
      ),
      inscription_info_dep: None,
      inscription_info_type: script(
        "0x50fdea2d0030a8d0b3d69f883b471cab2a29cae6f01923f19cecac0f27fdaaa6",
        HashType::Type,
      ),
      inscription_type: script(
        "0x3a241ceceede72a5f55c8fb985652690f09a517d6392114ad2e9a5eba5ba8c66",
        HashType::Type,
      ),
      joyid_lock_dep: cell_dep(
        "0x4dcf3f3b09efac8995d6cbee87c5345e812d310094651e0c3d9a730f32dc9263",
        0,
        DepType::DepGroup,
      ),
      xins_type: None,
      xudt_type: script(
        "0x25c29dc317811a6f6f3985a7a9ebc4838bd388d19d0feeecf0bcd60f6c0975bb",
        HashType::Type,
      ),
    }
  }

  pub fn builtin(network: Network) -> Self {
    match network {
      Network::Mainnet => Self::mainnet(),
      Network::Testnet => Self::testnet(),
    }
  }

  /// Field-wise `self`, falling back to `other`.
  pub fn or(self, other: Self) -> Self {
    Self {
      cota_type: self.cota_type.or(other.cota_type),
      inscription_info_dep: self.inscription_info_dep.or(other.inscription_info_dep),
      inscription_info_type: self.inscription_info_type.or(other.inscription_info_type),
      inscription_type: self.inscription_type.or(other.inscription_type),
      joyid_lock_dep: self.joyid_lock_dep.or(other.joyid_lock_dep),
      xins_type: self.xins_type.or(other.xins_type),
      xudt_type: self.xudt_type.or(other.xudt_type),
    }
  }

  pub fn resolve(self, network: Network) -> Result<Deployment, DeployError> {
    let missing = |field| DeployError::MissingDeployment { network, field };

    Ok(Deployment {
      cota_type: self.cota_type.ok_or_else(|| missing("cota_type"))?,
      inscription_info_dep: self
        .inscription_info_dep
        .ok_or_else(|| missing("inscription_info_dep"))?,
      inscription_info_type: self
        .inscription_info_type
        .ok_or_else(|| missing("inscription_info_type"))?,
      inscription_type: self
        .inscription_type
        .ok_or_else(|| missing("inscription_type"))?,
      joyid_lock_dep: self
        .joyid_lock_dep
        .ok_or_else(|| missing("joyid_lock_dep"))?,
      xins_type: self.xins_type.ok_or_else(|| missing("xins_type"))?,
      xudt_type: self.xudt_type.ok_or_else(|| missing("xudt_type"))?,
    })
  }
}

impl From<Deployment> for PartialDeployment {
  fn from(deployment: Deployment) -> Self {
    Self {
      cota_type: Some(deployment.cota_type),
      inscription_info_dep: Some(deployment.inscription_info_dep),
      inscription_info_type: Some(deployment.inscription_info_type),
      inscription_type: Some(deployment.inscription_type),
      joyid_lock_dep: Some(deployment.joyid_lock_dep),
      xins_type: Some(deployment.xins_type),
      xudt_type: Some(deployment.xudt_type),
    }
  }
}

/// Configured deployment values per network, selected by address prefix.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Deployments {
  pub mainnet: PartialDeployment,
  pub testnet: PartialDeployment,
}

impl Deployments {
  /// The complete deployment for `network`, or the first field neither
  /// config nor the built-in table supplies.
  pub fn get(&self, network: Network) -> Result<Deployment, DeployError> {
    let configured = match network {
      Network::Mainnet => &self.mainnet,
      Network::Testnet => &self.testnet,
    };

    configured
      .clone()
      .or(PartialDeployment::builtin(network))
      .resolve(network)
  }
}
