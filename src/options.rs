use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(long, help = "Request subkey unlock proofs from <AGGREGATOR_URL>.")]
  pub(crate) aggregator_url: Option<String>,
  #[arg(long, help = "Load configuration from <CONFIG>.")]
  pub(crate) config: Option<PathBuf>,
  #[arg(long, help = "Load configuration from <CONFIG_DIR>.")]
  pub(crate) config_dir: Option<PathBuf>,
  #[arg(long, help = "Query live cells from the indexer at <INDEXER_URL>.")]
  pub(crate) indexer_url: Option<String>,
}
