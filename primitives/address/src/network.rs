use core::str::FromStr;

use crate::Error;

/// Network an address string is rendered for.
///
/// The network only affects the first character of the string form, the
/// binary representation of an address is the same on every network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Returns the string prefix of the network.
    pub fn prefix(self) -> char {
        match self {
            Network::Mainnet => 'f',
            Network::Testnet => 't',
        }
    }

    /// Parses the network from an address string prefix.
    pub fn from_prefix(prefix: char) -> Result<Self, Error> {
        match prefix {
            'f' => Ok(Network::Mainnet),
            't' => Ok(Network::Testnet),
            p => Err(Error::InvalidNetwork(p.to_string())),
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Network::Mainnet),
            1 => Ok(Network::Testnet),
            v => Err(Error::InvalidNetwork(v.to_string())),
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mainnet" | "f" => Ok(Network::Mainnet),
            "testnet" | "t" => Ok(Network::Testnet),
            _ => Err(Error::InvalidNetwork(value.to_string())),
        }
    }
}
