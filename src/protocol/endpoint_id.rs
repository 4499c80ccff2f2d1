//! LayerZero endpoint ID types for identifying blockchain networks
//!
//! Every network a LayerZero V2 endpoint is deployed on has a unique endpoint
//! ID (eid). The eid encodes both the chain and its environment: `30xxx` ids
//! are mainnets, `40xxx` ids are testnets. This module provides a closed enum
//! of the endpoints this crate knows about so an unknown eid is rejected at
//! the boundary instead of flowing through a topology.
//!
//! Reference: <https://docs.layerzero.network/v2/deployments/deployed-contracts>

use std::fmt;

use serde::{Deserialize, Serialize};

/// LayerZero V2 endpoint identifier
///
/// # Example
///
/// ```rust
/// use oapp_topology::EndpointId;
///
/// let sepolia = EndpointId::Sepolia;
/// let eid: u32 = sepolia.into();
/// assert_eq!(eid, 40161);
/// assert_eq!(sepolia.key(), "SEPOLIA_V2_TESTNET");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
#[non_exhaustive]
pub enum EndpointId {
    /// Ethereum mainnet (eid: 30101)
    Ethereum = 30101,
    /// BNB Smart Chain (eid: 30102)
    Bsc = 30102,
    /// Avalanche C-Chain (eid: 30106)
    Avalanche = 30106,
    /// Polygon PoS (eid: 30109)
    Polygon = 30109,
    /// Arbitrum One (eid: 30110)
    Arbitrum = 30110,
    /// OP Mainnet (eid: 30111)
    Optimism = 30111,
    /// Solana mainnet (eid: 30168) - Non-EVM
    Solana = 30168,
    /// Linea (eid: 30183)
    Linea = 30183,
    /// Base (eid: 30184)
    Base = 30184,
    /// BNB Smart Chain testnet (eid: 40102)
    BscTestnet = 40102,
    /// Avalanche Fuji (eid: 40106)
    AvalancheFuji = 40106,
    /// Ethereum Sepolia (eid: 40161)
    Sepolia = 40161,
    /// Solana devnet (eid: 40168) - Non-EVM
    SolanaDevnet = 40168,
    /// Arbitrum Sepolia (eid: 40231)
    ArbitrumSepolia = 40231,
    /// OP Sepolia (eid: 40232)
    OptimismSepolia = 40232,
    /// Base Sepolia (eid: 40245)
    BaseSepolia = 40245,
    /// Polygon Amoy (eid: 40267)
    PolygonAmoy = 40267,
    /// Linea Sepolia (eid: 40287)
    LineaSepolia = 40287,
}

/// Deployment environment of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Mainnet,
    Testnet,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Testnet => f.write_str("testnet"),
        }
    }
}

impl EndpointId {
    const ALL: [EndpointId; 18] = [
        Self::Ethereum,
        Self::Bsc,
        Self::Avalanche,
        Self::Polygon,
        Self::Arbitrum,
        Self::Optimism,
        Self::Solana,
        Self::Linea,
        Self::Base,
        Self::BscTestnet,
        Self::AvalancheFuji,
        Self::Sepolia,
        Self::SolanaDevnet,
        Self::ArbitrumSepolia,
        Self::OptimismSepolia,
        Self::BaseSepolia,
        Self::PolygonAmoy,
        Self::LineaSepolia,
    ];

    /// Every known endpoint, ordered by eid
    pub const fn all() -> &'static [EndpointId] {
        &Self::ALL
    }

    /// Returns the numeric endpoint ID
    ///
    /// # Example
    ///
    /// ```rust
    /// use oapp_topology::EndpointId;
    ///
    /// assert_eq!(EndpointId::OptimismSepolia.as_u32(), 40232);
    /// assert_eq!(EndpointId::ArbitrumSepolia.as_u32(), 40231);
    /// ```
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Attempts to create an EndpointId from a u32 value
    ///
    /// # Example
    ///
    /// ```rust
    /// use oapp_topology::EndpointId;
    ///
    /// assert_eq!(EndpointId::from_u32(40161), Some(EndpointId::Sepolia));
    /// assert_eq!(EndpointId::from_u32(40161 - 10000), None);
    /// ```
    #[inline]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            30101 => Some(Self::Ethereum),
            30102 => Some(Self::Bsc),
            30106 => Some(Self::Avalanche),
            30109 => Some(Self::Polygon),
            30110 => Some(Self::Arbitrum),
            30111 => Some(Self::Optimism),
            30168 => Some(Self::Solana),
            30183 => Some(Self::Linea),
            30184 => Some(Self::Base),
            40102 => Some(Self::BscTestnet),
            40106 => Some(Self::AvalancheFuji),
            40161 => Some(Self::Sepolia),
            40168 => Some(Self::SolanaDevnet),
            40231 => Some(Self::ArbitrumSepolia),
            40232 => Some(Self::OptimismSepolia),
            40245 => Some(Self::BaseSepolia),
            40267 => Some(Self::PolygonAmoy),
            40287 => Some(Self::LineaSepolia),
            _ => None,
        }
    }

    /// Returns the network name as a string
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Bsc => "BNB Smart Chain",
            Self::Avalanche => "Avalanche",
            Self::Polygon => "Polygon",
            Self::Arbitrum => "Arbitrum",
            Self::Optimism => "Optimism",
            Self::Solana => "Solana",
            Self::Linea => "Linea",
            Self::Base => "Base",
            Self::BscTestnet => "BNB Smart Chain Testnet",
            Self::AvalancheFuji => "Avalanche Fuji",
            Self::Sepolia => "Sepolia",
            Self::SolanaDevnet => "Solana Devnet",
            Self::ArbitrumSepolia => "Arbitrum Sepolia",
            Self::OptimismSepolia => "Optimism Sepolia",
            Self::BaseSepolia => "Base Sepolia",
            Self::PolygonAmoy => "Polygon Amoy",
            Self::LineaSepolia => "Linea Sepolia",
        }
    }

    /// Returns the key of this endpoint in the LayerZero definitions registry
    ///
    /// # Example
    ///
    /// ```rust
    /// use oapp_topology::EndpointId;
    ///
    /// assert_eq!(EndpointId::OptimismSepolia.key(), "OPTSEP_V2_TESTNET");
    /// assert_eq!(EndpointId::ArbitrumSepolia.key(), "ARBSEP_V2_TESTNET");
    /// ```
    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ethereum => "ETHEREUM_V2_MAINNET",
            Self::Bsc => "BSC_V2_MAINNET",
            Self::Avalanche => "AVALANCHE_V2_MAINNET",
            Self::Polygon => "POLYGON_V2_MAINNET",
            Self::Arbitrum => "ARBITRUM_V2_MAINNET",
            Self::Optimism => "OPTIMISM_V2_MAINNET",
            Self::Solana => "SOLANA_V2_MAINNET",
            Self::Linea => "ZKCONSENSYS_V2_MAINNET",
            Self::Base => "BASE_V2_MAINNET",
            Self::BscTestnet => "BSC_V2_TESTNET",
            Self::AvalancheFuji => "AVALANCHE_V2_TESTNET",
            Self::Sepolia => "SEPOLIA_V2_TESTNET",
            Self::SolanaDevnet => "SOLANA_V2_TESTNET",
            Self::ArbitrumSepolia => "ARBSEP_V2_TESTNET",
            Self::OptimismSepolia => "OPTSEP_V2_TESTNET",
            Self::BaseSepolia => "BASESEP_V2_TESTNET",
            Self::PolygonAmoy => "AMOY_V2_TESTNET",
            Self::LineaSepolia => "LINEASEP_V2_TESTNET",
        }
    }

    /// Looks up an endpoint by its registry key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|eid| eid.key() == key)
    }

    /// Environment encoded in the eid's leading digit
    #[inline]
    pub const fn stage(self) -> Stage {
        match self.as_u32() {
            40_000..=49_999 => Stage::Testnet,
            _ => Stage::Mainnet,
        }
    }

    #[inline]
    pub const fn is_testnet(self) -> bool {
        matches!(self.stage(), Stage::Testnet)
    }

    /// Returns true for endpoints living on an EVM chain
    #[inline]
    pub const fn is_evm(self) -> bool {
        !matches!(self, Self::Solana | Self::SolanaDevnet)
    }
}

impl From<EndpointId> for u32 {
    #[inline]
    fn from(eid: EndpointId) -> Self {
        eid.as_u32()
    }
}

impl TryFrom<u32> for EndpointId {
    type Error = InvalidEndpointId;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(InvalidEndpointId(value))
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u32())
    }
}

/// Error returned when attempting to convert an unknown u32 to an EndpointId
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEndpointId(pub u32);

impl fmt::Display for InvalidEndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown LayerZero endpoint ID: {}", self.0)
    }
}

impl std::error::Error for InvalidEndpointId {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_endpoint_values() {
        assert_eq!(EndpointId::Sepolia.as_u32(), 40161);
        assert_eq!(EndpointId::OptimismSepolia.as_u32(), 40232);
        assert_eq!(EndpointId::ArbitrumSepolia.as_u32(), 40231);
        assert_eq!(EndpointId::BaseSepolia.as_u32(), 40245);
    }

    #[test]
    fn test_from_u32_invalid() {
        assert_eq!(EndpointId::from_u32(0), None);
        // v1 eids are not part of the registry
        assert_eq!(EndpointId::from_u32(10161), None);
        assert_eq!(EndpointId::from_u32(40000), None);
        assert_eq!(EndpointId::from_u32(u32::MAX), None);
    }

    #[test]
    fn test_try_from_invalid() {
        let err = EndpointId::try_from(12345).unwrap_err();
        assert_eq!(err, InvalidEndpointId(12345));
        assert_eq!(err.to_string(), "unknown LayerZero endpoint ID: 12345");
    }

    #[test]
    fn test_conversion_roundtrip_for_all() {
        for &eid in EndpointId::all() {
            let value: u32 = eid.into();
            assert_eq!(EndpointId::try_from(value).unwrap(), eid);
            assert_eq!(EndpointId::from_key(eid.key()), Some(eid));
        }
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let all = EndpointId::all();
        assert!(all.windows(2).all(|pair| pair[0].as_u32() < pair[1].as_u32()));
    }

    #[test]
    fn test_stage() {
        assert_eq!(EndpointId::Ethereum.stage(), Stage::Mainnet);
        assert_eq!(EndpointId::Sepolia.stage(), Stage::Testnet);
        assert!(EndpointId::ArbitrumSepolia.is_testnet());
        assert!(!EndpointId::Base.is_testnet());
        assert_eq!(Stage::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_display() {
        assert_eq!(EndpointId::Sepolia.to_string(), "Sepolia (40161)");
        assert_eq!(
            EndpointId::OptimismSepolia.to_string(),
            "Optimism Sepolia (40232)"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&EndpointId::ArbitrumSepolia).unwrap();
        assert_eq!(json, "40231");

        let parsed: EndpointId = serde_json::from_str("40232").unwrap();
        assert_eq!(parsed, EndpointId::OptimismSepolia);

        let err = serde_json::from_str::<EndpointId>("999").unwrap_err();
        assert!(err.to_string().contains("unknown LayerZero endpoint ID: 999"));
    }

    #[test]
    fn test_is_evm() {
        assert!(EndpointId::Sepolia.is_evm());
        assert!(!EndpointId::SolanaDevnet.is_evm());
    }
}
