use {
  super::*,
  crate::unlock::{DelegatedSubkey, DirectKey},
};

#[derive(Debug, Parser)]
pub(crate) struct Deploy {
  #[arg(long, help = "Deploy from and return change to <ADDRESS>.")]
  pub(crate) address: String,
  #[arg(
    long,
    value_enum,
    default_value = "main",
    help = "Unlock inputs with the <CONNECTION> key."
  )]
  pub(crate) connection: ConnectionType,
  #[arg(long, help = "Pay <FEE_RATE> shannons per 1000 bytes. [default: flat 6000 shannons]")]
  pub(crate) fee_rate: Option<FeeRate>,
  #[command(flatten)]
  pub(crate) info: InfoArgs,
  #[arg(long, help = "Sign with subkey <PUBKEY>, 0x-prefixed hex.")]
  pub(crate) pubkey: Option<Bytes>,
  #[arg(long, help = "Deploy an xins inscription instead of an xUDT one.")]
  pub(crate) xins: bool,
}

impl Deploy {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    Runtime::new()?.block_on(self.run_async(settings))
  }

  async fn run_async(self, settings: Settings) -> SubcommandResult {
    let network = Network::from_address_prefix(&self.address);

    let collector = IndexerCollector::new(&settings.indexer_url(network)?)?;
    let deployments = settings.deployments();

    match self.connection {
      ConnectionType::MainKey => self.build(&collector, &DirectKey, &deployments).await,
      ConnectionType::SubKey => {
        let pubkey = self
          .pubkey
          .clone()
          .context("--pubkey is required when deploying with a subkey")?;

        let unlock = DelegatedSubkey {
          aggregator: AggregatorClient::new(&settings.aggregator_url(network)?)?,
          pubkey,
        };

        self.build(&collector, &unlock, &deployments).await
      }
    }
  }

  async fn build<C: Collector, U: Unlock>(
    &self,
    collector: &C,
    unlock: &U,
    deployments: &Deployments,
  ) -> SubcommandResult {
    let info = self.info.inscription_info();

    let output: Box<dyn Output> = if self.xins {
      Box::new(
        build_deploy_xins_tx(
          collector,
          unlock,
          deployments,
          &self.address,
          &XinsInfo::from(info),
          self.fee_rate,
        )
        .await?,
      )
    } else {
      Box::new(
        build_deploy_tx(
          collector,
          unlock,
          deployments,
          &self.address,
          &info,
          self.fee_rate,
        )
        .await?,
      )
    };

    Ok(Some(output))
  }
}
