#![allow(clippy::result_large_err, async_fn_in_trait)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    aggregator::{Aggregator, AggregatorClient, SubkeyUnlockReq},
    arguments::Arguments,
    collector::{CellFilter, CollectError, CollectResult, Collector, IndexerCollector},
    error::ResultExt,
    inscription::Schema,
    jsonrpc::JsonRpcClient,
    settings::Settings,
    subcommand::{Output, Subcommand, SubcommandResult},
    unlock::{ConnectionType, Unlock},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  cells::{
    hash, le, Address, Byte32, Bytes, Capacity, CellDep, CellInput, CellOutput, DepType,
    HashType, Network, OutPoint, RawTransaction, Script, WitnessArgs,
  },
  clap::Parser,
  serde::{de::DeserializeOwned, Deserialize, Serialize, Serializer},
  snafu::Snafu,
  std::{
    env,
    fs::File,
    io,
    path::PathBuf,
    process,
    str::FromStr,
  },
  tokio::runtime::Runtime,
};

pub use self::{
  deploy::{build_deploy_tx, build_deploy_xins_tx, DeployBuilder, DeployOutput},
  error::DeployError,
  fee_rate::FeeRate,
  inscription::{InscriptionInfo, XinsInfo},
  network::{Deployment, Deployments, PartialDeployment},
  options::Options,
};


#[cfg(test)]
use self::test::*;

pub mod aggregator;
mod arguments;
pub mod capacity;
pub mod collector;
mod config;
pub mod deploy;
mod error;
mod fee_rate;
pub mod inscription;
mod jsonrpc;
pub mod network;
pub mod options;
pub mod settings;
pub mod subcommand;
pub mod unlock;

type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Smallest change cell the ledger accepts: 8 capacity bytes plus a lock with
/// 20 bytes of args.
pub const MIN_CAPACITY: Capacity = Capacity::from_ckb(61);

fn default<T: Default>() -> T {
  Default::default()
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      for (i, err) in err.chain().skip(1).enumerate() {
        if i == 0 {
          eprintln!();
          eprintln!("because:");
        }

        eprintln!("- {err}");
      }

      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print_json();
      }
    }
  }
}
