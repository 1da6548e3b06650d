use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Encode {
  #[arg(long, default_value = "128", help = "Encode as a <WIDTH>-bit integer.")]
  pub(crate) width: le::Width,
  #[arg(help = "Encode decimal <VALUE>.")]
  pub(crate) value: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub hex: String,
}

impl Encode {
  pub(crate) fn run(self) -> SubcommandResult {
    Ok(Some(Box::new(Output { hex: self.hex()? })))
  }

  fn hex(self) -> Result<String> {
    Ok(le::encode(le::parse(&self.value, self.width)?, self.width)?)
  }
}
