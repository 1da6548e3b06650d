use super::*;

/// Metadata for an inscription whose minted tokens are xUDT cells.
#[serde_with::serde_as]
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InscriptionInfo {
  pub decimal: u8,
  pub name: String,
  pub symbol: String,
  pub xudt_hash: Byte32,
  #[serde_as(as = "serde_with::DisplayFromStr")]
  pub max_supply: u128,
  #[serde_as(as = "serde_with::DisplayFromStr")]
  pub mint_limit: u128,
  pub mint_status: u8,
}

impl InscriptionInfo {
  /// The xUDT type script of the tokens minted under `info_type`. Its owner
  /// is the inscription type script keyed by the info type's hash.
  pub fn xudt_type(info_type: &Script, deployment: &Deployment) -> Script {
    let owner = deployment
      .inscription_type
      .with_args(info_type.hash().0.to_vec());

    deployment.xudt_type.with_args(owner.hash().0.to_vec())
  }
}

impl Schema for InscriptionInfo {
  const HASH_FIELD: &'static str = "xudtHash";

  fn metadata(&self) -> Metadata<'_> {
    Metadata {
      decimal: self.decimal,
      name: &self.name,
      symbol: &self.symbol,
      hash: self.xudt_hash,
      max_supply: self.max_supply,
      mint_limit: self.mint_limit,
      mint_status: self.mint_status,
    }
  }

  fn with_hash(&self, hash: Byte32) -> Self {
    Self {
      xudt_hash: hash,
      ..self.clone()
    }
  }

  fn content_hash(info_type: &Script, deployment: &Deployment) -> Byte32 {
    Self::xudt_type(info_type, deployment).hash()
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn xudt_type_is_owned_by_inscription_type() {
    let deployment = testnet_deployment();
    let info_type = deployment
      .inscription_info_type
      .with_args(vec![0x33; 32]);

    let owner = deployment
      .inscription_type
      .with_args(info_type.hash().0.to_vec());

    let xudt_type = InscriptionInfo::xudt_type(&info_type, &deployment);

    assert_eq!(xudt_type.code_hash, deployment.xudt_type.code_hash);
    assert_eq!(xudt_type.hash_type, deployment.xudt_type.hash_type);
    assert_eq!(xudt_type.args.as_slice(), owner.hash().as_ref());
    assert_eq!(
      InscriptionInfo::content_hash(&info_type, &deployment),
      xudt_type.hash()
    );
  }

  #[test]
  fn content_hash_depends_on_network() {
    let info_type = testnet_deployment()
      .inscription_info_type
      .with_args(vec![0x33; 32]);

    assert_ne!(
      InscriptionInfo::content_hash(&info_type, &testnet_deployment()),
      InscriptionInfo::content_hash(&info_type, &mainnet_deployment())
    );
  }

  #[test]
  fn with_hash_only_changes_hash() {
    let info = inscription_info();
    let hashed = info.with_hash(Byte32([9; 32]));
    assert_eq!(hashed.xudt_hash, Byte32([9; 32]));
    assert_eq!(
      InscriptionInfo {
        xudt_hash: info.xudt_hash,
        ..hashed
      },
      info
    );
  }

  #[test]
  fn serde() {
    let json = serde_json::to_value(inscription_info()).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "decimal": 8,
        "name": "CKB Fist Inscription",
        "symbol": "CKBI",
        "xudtHash": format!("0x{}", "00".repeat(32)),
        "maxSupply": "2100000000000000",
        "mintLimit": "100000000000",
        "mintStatus": 0,
      })
    );

    assert_eq!(
      serde_json::from_value::<InscriptionInfo>(json).unwrap(),
      inscription_info()
    );
  }
}
