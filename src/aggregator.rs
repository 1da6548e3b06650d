use super::*;

/// Request for the proof that a subkey is registered under a JoyID lock.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct SubkeyUnlockReq {
  /// Molecule-serialized lock script.
  pub lock_script: Bytes,
  /// blake160 of the subkey's public key.
  pub pubkey_hash: Bytes,
  pub alg_index: u8,
}

impl SubkeyUnlockReq {
  /// Signing algorithm index of secp256r1 JoyID keys.
  pub const ALG_INDEX: u8 = 1;
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct SubkeyUnlockResp {
  pub unlock_entry: Bytes,
}

pub trait Aggregator {
  async fn generate_subkey_unlock_smt(&self, req: &SubkeyUnlockReq) -> Result<SubkeyUnlockResp>;
}

impl<A: Aggregator> Aggregator for &A {
  async fn generate_subkey_unlock_smt(&self, req: &SubkeyUnlockReq) -> Result<SubkeyUnlockResp> {
    (**self).generate_subkey_unlock_smt(req).await
  }
}

/// JSON-RPC client for a COTA aggregator.
#[derive(Debug, Clone)]
pub struct AggregatorClient {
  client: JsonRpcClient,
}

impl AggregatorClient {
  pub fn new(url: &str) -> Result<Self> {
    Ok(Self {
      client: JsonRpcClient::new(url)?,
    })
  }
}

impl Aggregator for AggregatorClient {
  async fn generate_subkey_unlock_smt(&self, req: &SubkeyUnlockReq) -> Result<SubkeyUnlockResp> {
    self
      .client
      .call("generate_subkey_unlock_smt", req)
      .await
      .context("failed to generate subkey unlock proof")
  }
}
