use super::*;

mod capacity;
mod deploy;
mod encode;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Print the capacity an inscription info cell must hold")]
  Capacity(capacity::InfoCapacity),
  #[command(about = "Build an unsigned inscription deploy transaction")]
  Deploy(deploy::Deploy),
  #[command(about = "Encode an unsigned integer as little-endian hex")]
  Encode(encode::Encode),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Capacity(capacity) => capacity.run(),
      Self::Deploy(deploy) => deploy.run(settings),
      Self::Encode(encode) => encode.run(),
    }
  }
}

pub type SubcommandResult = Result<Option<Box<dyn Output>>>;

pub trait Output: Send {
  fn print_json(&self);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self) {
    serde_json::to_writer_pretty(io::stdout(), self).ok();
    println!();
  }
}

/// Inscription metadata given on the command line.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InfoArgs {
  #[arg(long, default_value_t = 8, help = "Use <DECIMAL> decimal places.")]
  pub(crate) decimal: u8,
  #[arg(long, help = "Name the inscription <NAME>.")]
  pub(crate) name: String,
  #[arg(long, help = "Use ticker <SYMBOL>.")]
  pub(crate) symbol: String,
  #[arg(
    long,
    value_parser = parse_amount,
    help = "Allow at most <MAX_SUPPLY> base units, in decimal or 0x-prefixed little-endian hex."
  )]
  pub(crate) max_supply: u128,
  #[arg(
    long,
    value_parser = parse_amount,
    help = "Allow <MINT_LIMIT> base units per mint, in decimal or 0x-prefixed little-endian hex."
  )]
  pub(crate) mint_limit: u128,
  #[arg(long, default_value_t = 0, help = "Start with mint status <MINT_STATUS>.")]
  pub(crate) mint_status: u8,
}

impl InfoArgs {
  pub(crate) fn inscription_info(&self) -> InscriptionInfo {
    InscriptionInfo {
      decimal: self.decimal,
      name: self.name.clone(),
      symbol: self.symbol.clone(),
      xudt_hash: Byte32::default(),
      max_supply: self.max_supply,
      mint_limit: self.mint_limit,
      mint_status: self.mint_status,
    }
  }
}

fn parse_amount(s: &str) -> Result<u128, le::Error> {
  match s.strip_prefix("0x") {
    Some(hex) => le::decode(hex, le::Width::U128),
    None => le::parse(s, le::Width::U128),
  }
}
