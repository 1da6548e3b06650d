use super::*;

/// Metadata for an inscription tracked by the xins type script.
#[serde_with::serde_as]
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XinsInfo {
  pub decimal: u8,
  pub name: String,
  pub symbol: String,
  pub xins_hash: Byte32,
  #[serde_as(as = "serde_with::DisplayFromStr")]
  pub max_supply: u128,
  #[serde_as(as = "serde_with::DisplayFromStr")]
  pub mint_limit: u128,
  pub mint_status: u8,
}

impl XinsInfo {
  pub fn xins_type(info_type: &Script, deployment: &Deployment) -> Script {
    deployment
      .xins_type
      .with_args(info_type.hash().0.to_vec())
  }
}

impl Schema for XinsInfo {
  const HASH_FIELD: &'static str = "xinsHash";

  fn metadata(&self) -> Metadata<'_> {
    Metadata {
      decimal: self.decimal,
      name: &self.name,
      symbol: &self.symbol,
      hash: self.xins_hash,
      max_supply: self.max_supply,
      mint_limit: self.mint_limit,
      mint_status: self.mint_status,
    }
  }

  fn with_hash(&self, hash: Byte32) -> Self {
    Self {
      xins_hash: hash,
      ..self.clone()
    }
  }

  fn content_hash(info_type: &Script, deployment: &Deployment) -> Byte32 {
    Self::xins_type(info_type, deployment).hash()
  }
}

impl From<InscriptionInfo> for XinsInfo {
  fn from(info: InscriptionInfo) -> Self {
    Self {
      decimal: info.decimal,
      name: info.name,
      symbol: info.symbol,
      xins_hash: info.xudt_hash,
      max_supply: info.max_supply,
      mint_limit: info.mint_limit,
      mint_status: info.mint_status,
    }
  }
}
