//! Address decoding and encoding.
//!
//! An address is a bech32 string whose human-readable part names the network
//! and whose payload describes a lock script. The full format (`0x00`) is
//! bech32m-encoded and carries the code hash, hash type, and args verbatim.
//! The deprecated short (`0x01`) and full (`0x02`, `0x04`) formats use plain
//! bech32 and are still accepted when decoding.

use {
  super::*,
  bech32::{FromBase32, ToBase32, Variant},
};

const FULL: u8 = 0x00;
const SHORT: u8 = 0x01;
const FULL_DATA: u8 = 0x02;
const FULL_TYPE: u8 = 0x04;

const SECP256K1_BLAKE160_SIGHASH_ALL: [u8; 32] = [
  0x9b, 0xd7, 0xe0, 0x6f, 0x3e, 0xcf, 0x4b, 0xe0, 0xf2, 0xfc, 0xd2, 0x18, 0x8b, 0x23, 0xf1, 0xb9,
  0xfc, 0xc8, 0x8e, 0x5d, 0x4b, 0x65, 0xa8, 0x63, 0x7b, 0x17, 0x72, 0x3b, 0xbd, 0xa3, 0xcc, 0xe8,
];

const SECP256K1_BLAKE160_MULTISIG_ALL: [u8; 32] = [
  0x5c, 0x50, 0x69, 0xeb, 0x08, 0x57, 0xef, 0xc6, 0x5e, 0x1b, 0xca, 0x0c, 0x07, 0xdf, 0x34, 0xc3,
  0x16, 0x63, 0xb3, 0x62, 0x2f, 0xd3, 0x87, 0x6c, 0x87, 0x63, 0x20, 0xfc, 0x96, 0x34, 0xe2, 0xa8,
];

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
  Mainnet,
  Testnet,
}

impl Network {
  pub fn hrp(self) -> &'static str {
    match self {
      Self::Mainnet => "ckb",
      Self::Testnet => "ckt",
    }
  }

  /// Mainnet addresses start with `ckb`, anything else is treated as testnet.
  pub fn from_address_prefix(address: &str) -> Self {
    if address.starts_with(Self::Mainnet.hrp()) {
      Self::Mainnet
    } else {
      Self::Testnet
    }
  }

  pub fn is_mainnet(self) -> bool {
    self == Self::Mainnet
  }
}

impl Display for Network {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Mainnet => write!(f, "mainnet"),
      Self::Testnet => write!(f, "testnet"),
    }
  }
}

impl FromStr for Network {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" | "main" | "mirana" => Ok(Self::Mainnet),
      "testnet" | "test" | "pudge" => Ok(Self::Testnet),
      _ => Err(Error::Network(s.into())),
    }
  }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Address {
  pub network: Network,
  pub script: Script,
}

impl Address {
  pub fn new(network: Network, script: Script) -> Self {
    Self { network, script }
  }

  fn payload(&self) -> Vec<u8> {
    let mut payload = Vec::with_capacity(1 + self.script.occupied_size());
    payload.push(FULL);
    payload.extend_from_slice(self.script.code_hash.as_ref());
    payload.push(self.script.hash_type.as_u8());
    payload.extend_from_slice(self.script.args.as_slice());
    payload
  }

  fn decode_payload(payload: &[u8], variant: Variant) -> Result<Script, Error> {
    let (&format, body) = payload.split_first().ok_or(Error::EmptyPayload)?;

    let expected = if format == FULL {
      Variant::Bech32m
    } else {
      Variant::Bech32
    };

    if variant != expected {
      return Err(Error::Variant { format });
    }

    match format {
      FULL => {
        if body.len() < Byte32::LEN + 1 {
          return Err(Error::PayloadLength(payload.len()));
        }

        let (code_hash, rest) = body.split_at(Byte32::LEN);

        Ok(Script {
          code_hash: Byte32::try_from(code_hash).map_err(|_| Error::PayloadLength(payload.len()))?,
          hash_type: HashType::from_u8(rest[0]).ok_or(Error::HashType(rest[0]))?,
          args: Bytes::from(&rest[1..]),
        })
      }
      SHORT => {
        let (&code_index, args) = body.split_first().ok_or(Error::PayloadLength(payload.len()))?;

        let code_hash = match code_index {
          0x00 => SECP256K1_BLAKE160_SIGHASH_ALL,
          0x01 => SECP256K1_BLAKE160_MULTISIG_ALL,
          _ => return Err(Error::CodeIndex(code_index)),
        };

        if args.len() != 20 {
          return Err(Error::PayloadLength(payload.len()));
        }

        Ok(Script {
          code_hash: Byte32(code_hash),
          hash_type: HashType::Type,
          args: Bytes::from(args),
        })
      }
      FULL_DATA | FULL_TYPE => {
        if body.len() < Byte32::LEN {
          return Err(Error::PayloadLength(payload.len()));
        }

        let (code_hash, args) = body.split_at(Byte32::LEN);

        Ok(Script {
          code_hash: Byte32::try_from(code_hash).map_err(|_| Error::PayloadLength(payload.len()))?,
          hash_type: if format == FULL_DATA {
            HashType::Data
          } else {
            HashType::Type
          },
          args: Bytes::from(args),
        })
      }
      _ => Err(Error::Format(format)),
    }
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let encoded = bech32::encode(
      self.network.hrp(),
      self.payload().to_base32(),
      Variant::Bech32m,
    )
    .map_err(|_| fmt::Error)?;

    write!(f, "{encoded}")
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (hrp, data, variant) = bech32::decode(s)?;

    let network = match hrp.as_str() {
      "ckb" => Network::Mainnet,
      "ckt" => Network::Testnet,
      _ => return Err(Error::Hrp(hrp)),
    };

    let payload = Vec::<u8>::from_base32(&data)?;

    Ok(Self {
      network,
      script: Self::decode_payload(&payload, variant)?,
    })
  }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
  #[error("invalid bech32: {0}")]
  Bech32(#[from] bech32::Error),
  #[error("unknown code index {0:#04x}")]
  CodeIndex(u8),
  #[error("address payload is empty")]
  EmptyPayload,
  #[error("unknown address format {0:#04x}")]
  Format(u8),
  #[error("unknown hash type {0:#04x}")]
  HashType(u8),
  #[error("unknown address prefix `{0}`")]
  Hrp(String),
  #[error("unknown network `{0}`")]
  Network(String),
  #[error("invalid address payload length {0}")]
  PayloadLength(usize),
  #[error("address format {format:#04x} uses the wrong bech32 variant")]
  Variant { format: u8 },
}
