use super::*;

#[derive(Debug, Parser)]
#[command(version, about = "Build unsigned CKB inscription deploy transactions.")]
pub(crate) struct Arguments {
  #[command(flatten)]
  pub(crate) options: Options,
  #[command(subcommand)]
  pub(crate) subcommand: Subcommand,
}

impl Arguments {
  pub(crate) fn run(self) -> SubcommandResult {
    let settings = Settings::new(self.options)?;
    self.subcommand.run(settings)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn global_options_precede_subcommand() {
    let arguments = Arguments::try_parse_from([
      "ckb-inscription",
      "--indexer-url",
      "http://localhost:8114",
      "encode",
      "--width",
      "32",
      "21000000",
    ])
    .unwrap();

    assert_eq!(
      arguments.options.indexer_url.as_deref(),
      Some("http://localhost:8114")
    );
    assert_matches!(arguments.subcommand, Subcommand::Encode(_));
  }

  #[test]
  fn subcommand_is_required() {
    assert!(Arguments::try_parse_from(["ckb-inscription"]).is_err());
  }
}
