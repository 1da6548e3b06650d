use super::*;

/// Reasons a deploy transaction cannot be built. No partial transaction is
/// returned alongside any of them.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum DeployError {
  #[snafu(display("{err}"))]
  AggregatorRequest { err: anyhow::Error },
  #[snafu(display(
    "insufficient capacity: inputs hold {available} but the deploy needs {required}"
  ))]
  CapacityNotEnough {
    available: Capacity,
    required: Capacity,
  },
  #[snafu(display("{err}"))]
  CollectorRequest { err: anyhow::Error },
  #[snafu(display("invalid address `{address}`"))]
  InvalidAddress {
    address: String,
    source: cells::address::Error,
  },
  #[snafu(display("invalid inscription info"))]
  InvalidInscription { source: inscription::Error },
  #[snafu(display(
    "no `{field}` deployment configured for {network}, set `{network}.{field}` in the config file"
  ))]
  MissingDeployment {
    network: Network,
    field: &'static str,
  },
  #[snafu(display("no COTA cell found, register the subkey before deploying with it"))]
  NoCotaCell,
  #[snafu(display("address `{address}` has no live cells"))]
  NoLiveCell { address: String },
}

impl From<CollectError> for DeployError {
  fn from(err: CollectError) -> Self {
    Self::CollectorRequest { err: err.into() }
  }
}

/// Gives access to `snafu::ResultExt::context`, which is otherwise shadowed
/// by `anyhow::Context::context`.
pub(crate) trait ResultExt<T, E>: Sized {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
  fn snafu_context<C, E2>(self, context: C) -> Result<T, E2>
  where
    C: snafu::IntoError<E2, Source = E>,
    E2: std::error::Error + snafu::ErrorCompat,
  {
    use snafu::ResultExt;
    self.context(context)
  }
}
