//! Core type definitions for Restart

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every hex-rendered identifier
pub const HEX_PREFIX: &str = "0x";

/// Wallet address length in bytes
pub const ADDRESS_BYTES: usize = 20;

/// Object ID length in bytes
pub const OBJECT_ID_BYTES: usize = 32;

/// Check that `value` is `0x` followed by exactly `bytes * 2` hex characters
fn is_prefixed_hex(value: &str, bytes: usize) -> bool {
    match value.strip_prefix(HEX_PREFIX) {
        Some(digits) => digits.len() == bytes * 2 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Wallet address (20 bytes, `0x`-prefixed hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    /// Render raw address bytes as lowercase `0x` hex
    pub fn from_bytes(bytes: &[u8; ADDRESS_BYTES]) -> Self {
        Self(format!("{}{}", HEX_PREFIX, hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the `0x` + 40 hex character rendering
    pub fn is_well_formed(&self) -> bool {
        is_prefixed_hex(&self.0, ADDRESS_BYTES)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Object ID of a created lock (32 bytes, `0x`-prefixed hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_bytes(bytes: &[u8; OBJECT_ID_BYTES]) -> Self {
        Self(format!("{}{}", HEX_PREFIX, hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the `0x` + 64 hex character rendering
    pub fn is_well_formed(&self) -> bool {
        is_prefixed_hex(&self.0, OBJECT_ID_BYTES)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
        }
    }

    /// Human-readable label for the info panel
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mainnet => "Sui Mainnet",
            Self::Testnet => "Sui Testnet",
            Self::Devnet => "Sui Devnet",
        }
    }

    /// Whether tokens on this network carry real value
    pub fn is_test_environment(&self) -> bool {
        !matches!(self, Self::Mainnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// MIST amount (1 SUI = 1_000_000_000 MIST)
pub type Mist = u64;

/// Constants
pub mod constants {
    use super::Mist;

    /// 1 SUI in MIST
    pub const MIST_PER_SUI: Mist = 1_000_000_000;

    /// Display symbol of the native token
    pub const TOKEN_SYMBOL: &str = "SUI";

    /// Basis points in 100%
    pub const BPS_DENOM: u64 = 10_000;

    /// Seconds per hour, used for lock period hints
    pub const SECS_PER_HOUR: u64 = 3_600;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_from_bytes() {
        let addr = Address::from_bytes(&[0xab; ADDRESS_BYTES]);
        assert_eq!(addr.as_str().len(), 42);
        assert!(addr.as_str().starts_with("0xabab"));
        assert!(addr.is_well_formed());
    }

    #[test]
    fn test_address_rejects_bad_rendering() {
        assert!(!Address::new("abcdef0123456789abcdef0123456789abcdef01").is_well_formed());
        assert!(!Address::new("0x1234").is_well_formed());
        assert!(!Address::new("0xZZCDEF0123456789ABCDEF0123456789ABCDEF01").is_well_formed());
        assert!(Address::new("0xABCDEF0123456789ABCDEF0123456789ABCDEF01").is_well_formed());
    }

    #[test]
    fn test_object_id_from_bytes() {
        let id = ObjectId::from_bytes(&[7u8; OBJECT_ID_BYTES]);
        assert_eq!(id.as_str().len(), 66);
        assert!(id.is_well_formed());
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.as_str(), "mainnet");
        assert_eq!(Network::Testnet.as_str(), "testnet");
        assert_eq!(Network::default(), Network::Testnet);
        assert!(Network::Testnet.is_test_environment());
        assert!(!Network::Mainnet.is_test_environment());
    }
}
