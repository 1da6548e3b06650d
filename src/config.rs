use super::*;

#[derive(Deserialize, Default, PartialEq, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) aggregator_url: Option<String>,
  pub(crate) indexer_url: Option<String>,
  #[serde(default)]
  pub(crate) mainnet: PartialDeployment,
  #[serde(default)]
  pub(crate) testnet: PartialDeployment,
}

impl Config {
  pub(crate) fn load(path: &std::path::Path) -> Result<Self> {
    serde_yaml::from_reader(
      File::open(path).with_context(|| format!("failed to open config `{}`", path.display()))?,
    )
    .with_context(|| format!("failed to parse config `{}`", path.display()))
  }

  pub(crate) fn deployments(&self) -> Deployments {
    Deployments {
      mainnet: self.mainnet.clone(),
      testnet: self.testnet.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn example_config_file_is_valid() {
    let config = serde_yaml::from_str::<Config>(
      "indexer_url: http://127.0.0.1:8114\naggregator_url: http://127.0.0.1:3030\n",
    )
    .unwrap();

    assert_eq!(config.indexer_url.as_deref(), Some("http://127.0.0.1:8114"));
    assert_eq!(config.aggregator_url.as_deref(), Some("http://127.0.0.1:3030"));
    assert_eq!(config.deployments(), Deployments::default());
  }

  #[test]
  fn unknown_fields_are_rejected() {
    assert!(serde_yaml::from_str::<Config>("indexer: http://127.0.0.1:8114\n").is_err());
  }

  #[test]
  fn deployment_override() {
    let config = serde_yaml::from_str::<Config>(&format!(
      "testnet:
  inscription_info_dep:
    outPoint:
      txHash: '0x{}'
      index: '0x1'
    depType: code
  xins_type:
    codeHash: '0x{}'
    hashType: data1
    args: '0x'
",
      "77".repeat(32),
      "88".repeat(32),
    ))
    .unwrap();

    let testnet = config.deployments().get(Network::Testnet).unwrap();

    assert_eq!(
      testnet.inscription_info_dep,
      CellDep {
        out_point: OutPoint {
          tx_hash: Byte32([0x77; 32]),
          index: 1,
        },
        dep_type: DepType::Code,
      }
    );
    assert_eq!(testnet.xins_type.code_hash, Byte32([0x88; 32]));
    assert_eq!(testnet.xudt_type, testnet_deployment().xudt_type);

    assert_matches!(
      config.deployments().get(Network::Mainnet),
      Err(DeployError::MissingDeployment {
        network: Network::Mainnet,
        ..
      })
    );
  }

  #[test]
  fn unknown_deployment_fields_are_rejected() {
    assert!(serde_yaml::from_str::<Config>("testnet:\n  info_dep: 0x\n").is_err());
  }

  #[test]
  fn load() {
    let tempdir = tempfile::TempDir::new().unwrap();
    let path = tempdir.path().join("ckb-inscription.yaml");
    std::fs::write(&path, "indexer_url: http://localhost:8114\n").unwrap();

    assert_eq!(
      Config::load(&path).unwrap(),
      Config {
        indexer_url: Some("http://localhost:8114".into()),
        ..default()
      }
    );

    assert!(Config::load(&tempdir.path().join("missing.yaml"))
      .unwrap_err()
      .to_string()
      .starts_with("failed to open config"));
  }
}
