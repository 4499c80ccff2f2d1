//! Mapping between EVM chains and LayerZero endpoints

use alloy_chains::{Chain, NamedChain};

use crate::{EndpointId, Result, TopologyError};

/// Chains that host a LayerZero V2 endpoint
///
/// Implemented on `alloy_chains::NamedChain`.
///
/// # Example
///
/// ```rust
/// use alloy_chains::NamedChain;
/// use oapp_topology::{EndpointId, LzEndpoint};
///
/// assert_eq!(NamedChain::Sepolia.lz_endpoint_id().unwrap(), EndpointId::Sepolia);
/// assert!(NamedChain::Sepolia.supports_lz_v2());
/// ```
pub trait LzEndpoint {
    /// Returns true if a LayerZero V2 endpoint is known for this chain
    fn supports_lz_v2(&self) -> bool;

    /// Returns the LayerZero V2 endpoint id of this chain
    fn lz_endpoint_id(&self) -> Result<EndpointId>;
}

impl LzEndpoint for NamedChain {
    fn supports_lz_v2(&self) -> bool {
        self.lz_endpoint_id().is_ok()
    }

    fn lz_endpoint_id(&self) -> Result<EndpointId> {
        Ok(match self {
            Self::Mainnet => EndpointId::Ethereum,
            Self::BinanceSmartChain => EndpointId::Bsc,
            Self::Avalanche => EndpointId::Avalanche,
            Self::Polygon => EndpointId::Polygon,
            Self::Arbitrum => EndpointId::Arbitrum,
            Self::Optimism => EndpointId::Optimism,
            Self::Linea => EndpointId::Linea,
            Self::Base => EndpointId::Base,
            // Testnets
            Self::BinanceSmartChainTestnet => EndpointId::BscTestnet,
            Self::AvalancheFuji => EndpointId::AvalancheFuji,
            Self::Sepolia => EndpointId::Sepolia,
            Self::ArbitrumSepolia => EndpointId::ArbitrumSepolia,
            Self::OptimismSepolia => EndpointId::OptimismSepolia,
            Self::BaseSepolia => EndpointId::BaseSepolia,
            Self::PolygonAmoy => EndpointId::PolygonAmoy,
            Self::LineaSepolia => EndpointId::LineaSepolia,
            _ => return Err(TopologyError::UnsupportedChain(*self)),
        })
    }
}

impl EndpointId {
    /// Returns the EVM chain hosting this endpoint, `None` for non-EVM endpoints
    pub const fn named_chain(self) -> Option<NamedChain> {
        match self {
            Self::Ethereum => Some(NamedChain::Mainnet),
            Self::Bsc => Some(NamedChain::BinanceSmartChain),
            Self::Avalanche => Some(NamedChain::Avalanche),
            Self::Polygon => Some(NamedChain::Polygon),
            Self::Arbitrum => Some(NamedChain::Arbitrum),
            Self::Optimism => Some(NamedChain::Optimism),
            Self::Linea => Some(NamedChain::Linea),
            Self::Base => Some(NamedChain::Base),
            Self::BscTestnet => Some(NamedChain::BinanceSmartChainTestnet),
            Self::AvalancheFuji => Some(NamedChain::AvalancheFuji),
            Self::Sepolia => Some(NamedChain::Sepolia),
            Self::ArbitrumSepolia => Some(NamedChain::ArbitrumSepolia),
            Self::OptimismSepolia => Some(NamedChain::OptimismSepolia),
            Self::BaseSepolia => Some(NamedChain::BaseSepolia),
            Self::PolygonAmoy => Some(NamedChain::PolygonAmoy),
            Self::LineaSepolia => Some(NamedChain::LineaSepolia),
            Self::Solana | Self::SolanaDevnet => None,
        }
    }

    /// Returns the EIP-155 chain id of the hosting EVM chain
    pub fn evm_chain_id(self) -> Option<u64> {
        self.named_chain().map(|chain| Chain::from_named(chain).id())
    }
}
