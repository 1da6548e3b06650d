//! Assembly of the unsigned transaction that deploys an inscription.
//!
//! The transaction spends enough of the deployer's cells to fund two outputs:
//! the info cell, typed by the inscription-info script whose args are the
//! new inscription id and holding the serialized record, and a change cell
//! returning the remainder to the deployer.

use super::*;

/// The built transaction plus the identifiers a wallet shows before signing.
#[derive(Debug, PartialEq, Clone)]
pub struct DeployOutput<S> {
  pub raw_tx: RawTransaction,
  pub inscription_id: Byte32,
  pub hash: Byte32,
  pub info: S,
}

impl<S: Schema> Serialize for DeployOutput<S> {
  fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
    use serde::ser::SerializeStruct;

    let mut state = serializer.serialize_struct("DeployOutput", 3)?;
    state.serialize_field("rawTx", &self.raw_tx)?;
    state.serialize_field("inscriptionId", &self.inscription_id)?;
    state.serialize_field(S::HASH_FIELD, &self.hash)?;
    state.end()
  }
}

pub struct DeployBuilder<'a, C, U> {
  pub collector: &'a C,
  pub unlock: &'a U,
  pub deployments: &'a Deployments,
}

impl<C: Collector, U: Unlock> DeployBuilder<'_, C, U> {
  pub async fn build<S: Schema>(
    &self,
    address: &str,
    info: &S,
    fee_rate: Option<FeeRate>,
  ) -> Result<DeployOutput<S>, DeployError> {
    let network = Network::from_address_prefix(address);
    let deployment = self.deployments.get(network)?;

    let fee = FeeRate::deploy_fee(fee_rate);

    log::debug!("Deploying on {network} with fee {fee}");

    let lock = address
      .parse::<Address>()
      .snafu_context(error::InvalidAddress { address })?
      .script;

    let cells = self
      .collector
      .get_cells(&CellFilter::lock(lock.clone()))
      .await
      .map_err(|err| DeployError::CollectorRequest { err })?;

    if cells.is_empty() {
      return Err(DeployError::NoLiveCell {
        address: address.into(),
      });
    }

    let info_capacity = capacity::info_capacity(&lock, info);

    let CollectResult {
      inputs,
      capacity: collected,
    } = self.collector.collect_inputs(&cells, info_capacity, fee)?;

    log::debug!(
      "Collected {} inputs holding {collected} for an info cell of {info_capacity}",
      inputs.len()
    );

    let Some(first_input) = inputs.first() else {
      return Err(DeployError::NoLiveCell {
        address: address.into(),
      });
    };

    let inscription_id = inscription::inscription_id(first_input, 0);

    let info_type = deployment.inscription_info_type.with_args(inscription_id.0.to_vec());

    let required = fee
      .checked_add(info_capacity)
      .and_then(|required| required.checked_add(MIN_CAPACITY))
      .unwrap_or(Capacity::from_shannons(u64::MAX));

    let change = collected
      .checked_sub(fee)
      .and_then(|remaining| remaining.checked_sub(info_capacity))
      .filter(|change| *change >= MIN_CAPACITY)
      .ok_or(DeployError::CapacityNotEnough {
        available: collected,
        required,
      })?;

    let unlocking = self.unlock.unlock(self.collector, &lock, &deployment).await?;

    let mut cell_deps = unlocking.cell_deps;
    cell_deps.push(deployment.joyid_lock_dep);
    cell_deps.push(deployment.inscription_info_dep);

    let hash = S::content_hash(&info_type, &deployment);
    let info = info.with_hash(hash);
    let data = info.to_bytes().snafu_context(error::InvalidInscription)?;

    let raw_tx = RawTransaction {
      version: 0,
      cell_deps,
      header_deps: Vec::new(),
      inputs,
      outputs: vec![
        CellOutput {
          capacity: info_capacity,
          lock: lock.clone(),
          type_: Some(info_type),
        },
        CellOutput {
          capacity: change,
          lock,
          type_: None,
        },
      ],
      outputs_data: vec![data.into(), Bytes::new()],
      witnesses: vec![(&unlocking.witness).into(), Bytes::new()],
    };

    log::info!("Built deploy transaction for inscription {inscription_id} with change {change}");

    Ok(DeployOutput {
      raw_tx,
      inscription_id,
      hash,
      info,
    })
  }
}

/// Build a deploy transaction for an xUDT-backed inscription.
pub async fn build_deploy_tx<C: Collector, U: Unlock>(
  collector: &C,
  unlock: &U,
  deployments: &Deployments,
  address: &str,
  info: &InscriptionInfo,
  fee_rate: Option<FeeRate>,
) -> Result<DeployOutput<InscriptionInfo>, DeployError> {
  DeployBuilder {
    collector,
    unlock,
    deployments,
  }
  .build(address, info, fee_rate)
  .await
}

/// Build a deploy transaction for an xins-backed inscription.
pub async fn build_deploy_xins_tx<C: Collector, U: Unlock>(
  collector: &C,
  unlock: &U,
  deployments: &Deployments,
  address: &str,
  info: &XinsInfo,
  fee_rate: Option<FeeRate>,
) -> Result<DeployOutput<XinsInfo>, DeployError> {
  DeployBuilder {
    collector,
    unlock,
    deployments,
  }
  .build(address, info, fee_rate)
  .await
}
