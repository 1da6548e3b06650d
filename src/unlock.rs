//! How the deploy transaction's inputs will be unlocked.
//!
//! A JoyID lock signed with its main key needs nothing beyond an empty
//! witness placeholder. A subkey must prove it is registered in the owner's
//! COTA cell: that cell becomes a cell dep and the aggregator's proof goes
//! into the first witness.

use {super::*, clap::ValueEnum};

#[derive(ValueEnum, Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub enum ConnectionType {
  #[default]
  #[value(name = "main")]
  #[serde(rename = "main")]
  MainKey,
  #[value(name = "sub")]
  #[serde(rename = "sub")]
  SubKey,
}

/// Cell deps to prepend and the witness to place first.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Unlocking {
  pub cell_deps: Vec<CellDep>,
  pub witness: WitnessArgs,
}

pub trait Unlock {
  async fn unlock<C: Collector>(
    &self,
    collector: &C,
    lock: &Script,
    deployment: &Deployment,
  ) -> Result<Unlocking, DeployError>;
}

/// Unlocking with the lock's own key.
#[derive(Debug, PartialEq, Copy, Clone, Default)]
pub struct DirectKey;

impl Unlock for DirectKey {
  async fn unlock<C: Collector>(
    &self,
    _collector: &C,
    _lock: &Script,
    _deployment: &Deployment,
  ) -> Result<Unlocking, DeployError> {
    Ok(Unlocking::default())
  }
}

/// Unlocking with a subkey registered in the lock owner's COTA cell.
#[derive(Debug, Clone)]
pub struct DelegatedSubkey<A> {
  pub aggregator: A,
  pub pubkey: Bytes,
}

impl<A: Aggregator> Unlock for DelegatedSubkey<A> {
  async fn unlock<C: Collector>(
    &self,
    collector: &C,
    lock: &Script,
    deployment: &Deployment,
  ) -> Result<Unlocking, DeployError> {
    let cota_cells = collector
      .get_cells(&CellFilter {
        lock: lock.clone(),
        type_: Some(deployment.cota_type.clone()),
      })
      .await
      .map_err(|err| DeployError::CollectorRequest { err })?;

    let Some(cota_cell) = cota_cells.first() else {
      return Err(DeployError::NoCotaCell);
    };

    log::debug!("Using COTA cell {}", cota_cell.out_point);

    let resp = self
      .aggregator
      .generate_subkey_unlock_smt(&SubkeyUnlockReq {
        lock_script: lock.serialize().into(),
        pubkey_hash: hash::blake160(self.pubkey.as_slice()).to_vec().into(),
        alg_index: SubkeyUnlockReq::ALG_INDEX,
      })
      .await
      .map_err(|err| DeployError::AggregatorRequest { err })?;

    Ok(Unlocking {
      cell_deps: vec![CellDep {
        out_point: cota_cell.out_point,
        dep_type: DepType::Code,
      }],
      witness: WitnessArgs {
        output_type: Some(resp.unlock_entry),
        ..default()
      },
    })
  }
}
