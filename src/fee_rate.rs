use super::*;

/// Fee rate in shannons per 1,000 bytes of serialized transaction.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FeeRate(u64);

impl FromStr for FeeRate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::try_from(u64::from_str(s)?)
  }
}

impl TryFrom<u64> for FeeRate {
  type Error = Error;

  fn try_from(rate: u64) -> Result<Self, Self::Error> {
    if rate == 0 {
      bail!("invalid fee rate: {rate}")
    }
    Ok(Self(rate))
  }
}

impl FeeRate {
  /// Bytes assumed for a deploy transaction when pricing it from a fee rate.
  pub const ESTIMATED_TX_SIZE: u64 = 1200;

  /// Fee charged when no fee rate is given.
  pub const DEFAULT_FEE: Capacity = Capacity::from_shannons(6_000);

  pub fn n(self) -> u64 {
    self.0
  }

  /// Fee for `size` bytes, rounded up to the next shannon.
  pub fn fee(self, size: u64) -> Capacity {
    Capacity::from_shannons(size.saturating_mul(self.0).div_ceil(1000))
  }

  pub fn deploy_fee(fee_rate: Option<Self>) -> Capacity {
    fee_rate
      .map(|fee_rate| fee_rate.fee(Self::ESTIMATED_TX_SIZE))
      .unwrap_or(Self::DEFAULT_FEE)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse() {
    assert_eq!("1000".parse::<FeeRate>().unwrap().n(), 1000);
    assert_eq!("1".parse::<FeeRate>().unwrap().n(), 1);
    assert!("0".parse::<FeeRate>().is_err());
    assert!("-4".parse::<FeeRate>().is_err());
    assert!("1.5".parse::<FeeRate>().is_err());
  }

  #[test]
  fn fee() {
    assert_eq!(
      "1000".parse::<FeeRate>().unwrap().fee(1200),
      Capacity::from_shannons(1200)
    );
    assert_eq!(
      "2500".parse::<FeeRate>().unwrap().fee(100),
      Capacity::from_shannons(250)
    );
    assert_eq!(
      "1".parse::<FeeRate>().unwrap().fee(1001),
      Capacity::from_shannons(2)
    );
    assert_eq!(
      "1".parse::<FeeRate>().unwrap().fee(1000),
      Capacity::from_shannons(1)
    );
  }

  #[test]
  fn deploy_fee() {
    assert_eq!(FeeRate::deploy_fee(None), FeeRate::DEFAULT_FEE);
    assert_eq!(
      FeeRate::deploy_fee(Some("3000".parse().unwrap())),
      Capacity::from_shannons(3600)
    );
  }
}
