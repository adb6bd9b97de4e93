//! Deployment Registry
//!
//! The generator-side domain model: which protocol deployments ("pools")
//! exist, which network each one lives on, and which networks may host the
//! governance vote itself. Pool identifiers inside a record are plain
//! strings; they are resolved against this registry at the generator
//! boundary rather than during local validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A blockchain network, identified by its canonical numeric chain id.
///
/// `cache.blockNumber` in a record is a height on the chain the pool lives
/// on, so every registry entry knows its host chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Polygon,
    Avalanche,
    Optimism,
    Arbitrum,
    Metis,
    Base,
    Gnosis,
    Scroll,
    Bnb,
    ZkSync,
    Linea,
    Sonic,
    Celo,
}

impl Chain {
    /// Canonical EVM chain id
    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Polygon => 137,
            Chain::Avalanche => 43114,
            Chain::Optimism => 10,
            Chain::Arbitrum => 42161,
            Chain::Metis => 1088,
            Chain::Base => 8453,
            Chain::Gnosis => 100,
            Chain::Scroll => 534352,
            Chain::Bnb => 56,
            Chain::ZkSync => 324,
            Chain::Linea => 59144,
            Chain::Sonic => 146,
            Chain::Celo => 42220,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon",
            Chain::Avalanche => "Avalanche",
            Chain::Optimism => "Optimism",
            Chain::Arbitrum => "Arbitrum",
            Chain::Metis => "Metis",
            Chain::Base => "Base",
            Chain::Gnosis => "Gnosis",
            Chain::Scroll => "Scroll",
            Chain::Bnb => "BNB",
            Chain::ZkSync => "ZkSync",
            Chain::Linea => "Linea",
            Chain::Sonic => "Sonic",
            Chain::Celo => "Celo",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Network hosting the governance vote (may differ from a pool's network)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VotingNetwork {
    Ethereum,
    Polygon,
    Avalanche,
}

impl VotingNetwork {
    pub const ALL: [VotingNetwork; 3] = [
        VotingNetwork::Ethereum,
        VotingNetwork::Polygon,
        VotingNetwork::Avalanche,
    ];

    /// Wire name as it appears in a record, e.g. `"POLYGON"`
    pub fn as_str(&self) -> &'static str {
        match self {
            VotingNetwork::Ethereum => "ETHEREUM",
            VotingNetwork::Polygon => "POLYGON",
            VotingNetwork::Avalanche => "AVALANCHE",
        }
    }

    /// Parse an exact wire name; unknown names return `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.as_str() == value)
    }

    pub fn chain(&self) -> Chain {
        match self {
            VotingNetwork::Ethereum => Chain::Ethereum,
            VotingNetwork::Polygon => Chain::Polygon,
            VotingNetwork::Avalanche => Chain::Avalanche,
        }
    }
}

impl fmt::Display for VotingNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol major version of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolVersion {
    V2,
    V3,
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::V2 => f.write_str("V2"),
            ProtocolVersion::V3 => f.write_str("V3"),
        }
    }
}

/// A known protocol deployment a proposal can target.
///
/// Variant names are the exact identifier strings used in records; new
/// deployments are added here when the payload pipeline learns about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolIdentifier {
    AaveV2Ethereum,
    AaveV2Polygon,
    AaveV2Avalanche,
    AaveV3Ethereum,
    AaveV3EthereumLido,
    AaveV3EthereumEtherFi,
    AaveV3Polygon,
    AaveV3Avalanche,
    AaveV3Optimism,
    AaveV3Arbitrum,
    AaveV3Metis,
    AaveV3Base,
    AaveV3Gnosis,
    AaveV3Scroll,
    AaveV3BNB,
    AaveV3ZkSync,
    AaveV3Linea,
    AaveV3Sonic,
    AaveV3Celo,
}

impl PoolIdentifier {
    pub const ALL: [PoolIdentifier; 19] = [
        PoolIdentifier::AaveV2Ethereum,
        PoolIdentifier::AaveV2Polygon,
        PoolIdentifier::AaveV2Avalanche,
        PoolIdentifier::AaveV3Ethereum,
        PoolIdentifier::AaveV3EthereumLido,
        PoolIdentifier::AaveV3EthereumEtherFi,
        PoolIdentifier::AaveV3Polygon,
        PoolIdentifier::AaveV3Avalanche,
        PoolIdentifier::AaveV3Optimism,
        PoolIdentifier::AaveV3Arbitrum,
        PoolIdentifier::AaveV3Metis,
        PoolIdentifier::AaveV3Base,
        PoolIdentifier::AaveV3Gnosis,
        PoolIdentifier::AaveV3Scroll,
        PoolIdentifier::AaveV3BNB,
        PoolIdentifier::AaveV3ZkSync,
        PoolIdentifier::AaveV3Linea,
        PoolIdentifier::AaveV3Sonic,
        PoolIdentifier::AaveV3Celo,
    ];

    /// Wire name as it appears in `rootOptions.pools`
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolIdentifier::AaveV2Ethereum => "AaveV2Ethereum",
            PoolIdentifier::AaveV2Polygon => "AaveV2Polygon",
            PoolIdentifier::AaveV2Avalanche => "AaveV2Avalanche",
            PoolIdentifier::AaveV3Ethereum => "AaveV3Ethereum",
            PoolIdentifier::AaveV3EthereumLido => "AaveV3EthereumLido",
            PoolIdentifier::AaveV3EthereumEtherFi => "AaveV3EthereumEtherFi",
            PoolIdentifier::AaveV3Polygon => "AaveV3Polygon",
            PoolIdentifier::AaveV3Avalanche => "AaveV3Avalanche",
            PoolIdentifier::AaveV3Optimism => "AaveV3Optimism",
            PoolIdentifier::AaveV3Arbitrum => "AaveV3Arbitrum",
            PoolIdentifier::AaveV3Metis => "AaveV3Metis",
            PoolIdentifier::AaveV3Base => "AaveV3Base",
            PoolIdentifier::AaveV3Gnosis => "AaveV3Gnosis",
            PoolIdentifier::AaveV3Scroll => "AaveV3Scroll",
            PoolIdentifier::AaveV3BNB => "AaveV3BNB",
            PoolIdentifier::AaveV3ZkSync => "AaveV3ZkSync",
            PoolIdentifier::AaveV3Linea => "AaveV3Linea",
            PoolIdentifier::AaveV3Sonic => "AaveV3Sonic",
            PoolIdentifier::AaveV3Celo => "AaveV3Celo",
        }
    }

    /// Parse an exact identifier string; unknown deployments return `None`
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == value)
    }

    /// The network this deployment lives on
    pub fn chain(&self) -> Chain {
        match self {
            PoolIdentifier::AaveV2Ethereum
            | PoolIdentifier::AaveV3Ethereum
            | PoolIdentifier::AaveV3EthereumLido
            | PoolIdentifier::AaveV3EthereumEtherFi => Chain::Ethereum,
            PoolIdentifier::AaveV2Polygon | PoolIdentifier::AaveV3Polygon => Chain::Polygon,
            PoolIdentifier::AaveV2Avalanche | PoolIdentifier::AaveV3Avalanche => Chain::Avalanche,
            PoolIdentifier::AaveV3Optimism => Chain::Optimism,
            PoolIdentifier::AaveV3Arbitrum => Chain::Arbitrum,
            PoolIdentifier::AaveV3Metis => Chain::Metis,
            PoolIdentifier::AaveV3Base => Chain::Base,
            PoolIdentifier::AaveV3Gnosis => Chain::Gnosis,
            PoolIdentifier::AaveV3Scroll => Chain::Scroll,
            PoolIdentifier::AaveV3BNB => Chain::Bnb,
            PoolIdentifier::AaveV3ZkSync => Chain::ZkSync,
            PoolIdentifier::AaveV3Linea => Chain::Linea,
            PoolIdentifier::AaveV3Sonic => Chain::Sonic,
            PoolIdentifier::AaveV3Celo => Chain::Celo,
        }
    }

    pub fn version(&self) -> ProtocolVersion {
        match self {
            PoolIdentifier::AaveV2Ethereum
            | PoolIdentifier::AaveV2Polygon
            | PoolIdentifier::AaveV2Avalanche => ProtocolVersion::V2,
            _ => ProtocolVersion::V3,
        }
    }
}

impl fmt::Display for PoolIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
