use super::*;

pub use self::indexer_collector::IndexerCollector;

mod indexer_collector;

/// Selects live cells by lock script and, optionally, type script.
#[derive(Debug, PartialEq, Clone)]
pub struct CellFilter {
  pub lock: Script,
  pub type_: Option<Script>,
}

impl CellFilter {
  pub fn lock(lock: Script) -> Self {
    Self { lock, type_: None }
  }
}

/// A live cell as reported by the indexer.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct IndexerCell {
  pub out_point: OutPoint,
  pub output: CellOutput,
  #[serde(default)]
  pub output_data: Bytes,
}

impl IndexerCell {
  /// Holds only capacity, with no type script and no data.
  pub fn is_plain(&self) -> bool {
    self.output.type_.is_none() && self.output_data.is_empty()
  }
}

#[derive(Debug, PartialEq, Clone)]
pub struct CollectResult {
  pub inputs: Vec<CellInput>,
  pub capacity: Capacity,
}

#[derive(Debug, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum CollectError {
  #[snafu(display("insufficient balance: have {available}, need {required}"))]
  InsufficientBalance {
    available: Capacity,
    required: Capacity,
  },
}

/// Source of live cells and the policy for spending them.
pub trait Collector {
  async fn get_cells(&self, filter: &CellFilter) -> Result<Vec<IndexerCell>>;

  /// Pick inputs from `cells` worth at least `capacity` plus `fee`.
  fn collect_inputs(
    &self,
    cells: &[IndexerCell],
    capacity: Capacity,
    fee: Capacity,
  ) -> Result<CollectResult, CollectError> {
    collect_greedy(cells, capacity, fee)
  }
}

/// Take plain cells in order until they also cover a minimal change cell.
/// Fails only if every plain cell together cannot cover `capacity` plus
/// `fee`, so the result may still leave less than `MIN_CAPACITY` of change.
pub fn collect_greedy(
  cells: &[IndexerCell],
  capacity: Capacity,
  fee: Capacity,
) -> Result<CollectResult, CollectError> {
  let required = capacity.checked_add(fee).unwrap_or(Capacity::from_shannons(u64::MAX));
  let target = required.checked_add(MIN_CAPACITY).unwrap_or(Capacity::from_shannons(u64::MAX));

  let mut inputs = Vec::new();
  let mut sum = Capacity::ZERO;

  for cell in cells.iter().filter(|cell| cell.is_plain()) {
    if sum >= target {
      break;
    }

    inputs.push(CellInput::new(cell.out_point));
    sum = sum
      .checked_add(cell.output.capacity)
      .unwrap_or(Capacity::from_shannons(u64::MAX));
  }

  if sum < required {
    return Err(CollectError::InsufficientBalance {
      available: sum,
      required,
    });
  }

  Ok(CollectResult {
    inputs,
    capacity: sum,
  })
}
