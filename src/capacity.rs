//! Storage deposit for the cell that carries inscription metadata.

use super::*;

/// Code hash, hash type, and 32 bytes of inscription id args.
pub const INFO_TYPE_SIZE: usize = Byte32::LEN + 1 + Byte32::LEN;

/// Extra capacity left in the info cell to pay for the transaction that later
/// spends it.
pub const INFO_CELL_FEE_BUFFER: Capacity = Capacity::from_shannons(60_000);

pub fn info_cell_size(lock: &Script, info: &impl Schema) -> usize {
  lock.occupied_size() + INFO_TYPE_SIZE + CellOutput::CAPACITY_SIZE + info.serialized_size()
}

pub fn info_capacity(lock: &Script, info: &impl Schema) -> Capacity {
  Capacity::bytes(info_cell_size(lock, info))
    .and_then(|occupied| occupied.checked_add(INFO_CELL_FEE_BUFFER))
    .unwrap_or(Capacity::from_shannons(u64::MAX))
}

pub fn info_capacity_for_address(
  address: &str,
  info: &impl Schema,
) -> Result<Capacity, cells::address::Error> {
  Ok(info_capacity(&address.parse::<Address>()?.script, info))
}
