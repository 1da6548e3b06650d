use {super::*, config::Config};

#[derive(Default, Debug)]
pub struct Settings {
  pub(crate) config: Config,
  pub(crate) options: Options,
}

impl Settings {
  pub const CONFIG_FILE: &'static str = "ckb-inscription.yaml";

  pub(crate) fn new(options: Options) -> Result<Self> {
    let config = match &options.config {
      Some(path) => Config::load(path)?,
      None => match &options.config_dir {
        Some(dir) if dir.join(Self::CONFIG_FILE).exists() => {
          Config::load(&dir.join(Self::CONFIG_FILE))?
        }
        Some(_) | None => Config::default(),
      },
    };

    Ok(Self { config, options })
  }

  pub(crate) fn indexer_url(&self, network: Network) -> Result<String> {
    Self::setting(
      self.options.indexer_url.as_deref(),
      Some("INDEXER_URL"),
      self.config.indexer_url.as_deref(),
      Self::default_indexer_url(network),
    )
  }

  pub(crate) fn aggregator_url(&self, network: Network) -> Result<String> {
    Self::setting(
      self.options.aggregator_url.as_deref(),
      Some("AGGREGATOR_URL"),
      self.config.aggregator_url.as_deref(),
      Self::default_aggregator_url(network),
    )
  }

  fn default_indexer_url(network: Network) -> &'static str {
    match network {
      Network::Mainnet => "https://mainnet.ckb.dev/rpc",
      Network::Testnet => "https://testnet.ckb.dev/rpc",
    }
  }

  fn default_aggregator_url(network: Network) -> &'static str {
    match network {
      Network::Mainnet => "https://cota.nervina.dev/mainnet-aggregator",
      Network::Testnet => "https://cota.nervina.dev/aggregator",
    }
  }

  pub(crate) fn deployments(&self) -> Deployments {
    self.config.deployments()
  }

  fn setting(
    arg_value: Option<&str>,
    env_key: Option<&str>,
    config_value: Option<&str>,
    default_value: &str,
  ) -> Result<String> {
    if let Some(arg_value) = arg_value {
      return Ok(arg_value.into());
    }

    if let Some(env_key) = env_key {
      match env::var(format!("CKB_INSCRIPTION_{env_key}")) {
        Ok(env_value) => return Ok(env_value),
        Err(err @ env::VarError::NotUnicode(_)) => return Err(err.into()),
        Err(env::VarError::NotPresent) => {}
      }
    }

    Ok(config_value.unwrap_or(default_value).into())
  }
}
