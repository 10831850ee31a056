//! # Collection Configuration
//!
//! Describes the deployed collection: contract address, the networks the dApp
//! accepts, where to link for the block explorer and the marketplace, and the
//! whitelist used for proof generation.
//!
//! The web app embeds a `collection.toml` and parses it once on start-up:
//!
//! ```rust
//! use shared::config::CollectionConfig;
//!
//! let config = CollectionConfig::from_toml_str(r#"
//! contract_name = "MyCollection"
//! contract_address = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
//! marketplace_identifier = "my-collection"
//! "#).unwrap();
//!
//! assert_eq!(config.mainnet.chain_id, 1);
//! assert!(config.network_for_chain(5).is_some());
//! ```

use std::collections::HashSet;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::DappError;

/// Block explorer used for contract and transaction links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExplorer {
    pub name: String,
    /// Base URL without trailing slash, e.g. `https://etherscan.io`
    pub base_url: String,
}

impl BlockExplorer {
    pub fn etherscan(subdomain: Option<&str>) -> Self {
        let base_url = match subdomain {
            Some(sub) => format!("https://{}.etherscan.io", sub),
            None => "https://etherscan.io".to_string(),
        };
        Self {
            name: "Etherscan".to_string(),
            base_url,
        }
    }

    pub fn contract_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.base_url.trim_end_matches('/'), address)
    }

    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.base_url.trim_end_matches('/'), hash)
    }
}

/// A chain the dApp is willing to talk to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub name: String,
    /// Native currency ticker shown next to prices
    #[serde(default = "default_symbol")]
    pub symbol: String,
    pub block_explorer: BlockExplorer,
}

fn default_symbol() -> String {
    "ETH".to_string()
}

impl NetworkConfig {
    pub fn mainnet() -> Self {
        Self {
            chain_id: 1,
            name: "mainnet".to_string(),
            symbol: default_symbol(),
            block_explorer: BlockExplorer::etherscan(None),
        }
    }

    fn testnet(chain_id: u64, name: &str) -> Self {
        Self {
            chain_id,
            name: name.to_string(),
            symbol: default_symbol(),
            block_explorer: BlockExplorer::etherscan(Some(name)),
        }
    }
}

/// Secondary marketplace linked from the sold-out panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    pub name: String,
    pub mainnet_url: String,
    pub testnet_url: String,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            name: "OpenSea".to_string(),
            mainnet_url: "https://opensea.io".to_string(),
            testnet_url: "https://testnets.opensea.io".to_string(),
        }
    }
}

impl MarketplaceConfig {
    pub fn collection_url(&self, identifier: &str, is_mainnet: bool) -> String {
        let base = if is_mainnet {
            &self.mainnet_url
        } else {
            &self.testnet_url
        };
        format!("{}/collection/{}", base.trim_end_matches('/'), identifier)
    }
}

fn default_testnets() -> Vec<NetworkConfig> {
    vec![
        NetworkConfig::testnet(3, "ropsten"),
        NetworkConfig::testnet(4, "rinkeby"),
        NetworkConfig::testnet(5, "goerli"),
    ]
}

/// Full collection configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub contract_name: String,
    pub contract_address: String,
    pub marketplace_identifier: String,
    #[serde(default)]
    pub marketplace: MarketplaceConfig,
    #[serde(default = "NetworkConfig::mainnet")]
    pub mainnet: NetworkConfig,
    #[serde(default = "default_testnets")]
    pub testnets: Vec<NetworkConfig>,
    #[serde(default)]
    pub whitelist_addresses: Vec<String>,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            contract_name: "Collection".to_string(),
            contract_address: Address::ZERO.to_string(),
            marketplace_identifier: "collection".to_string(),
            marketplace: MarketplaceConfig::default(),
            mainnet: NetworkConfig::mainnet(),
            testnets: default_testnets(),
            whitelist_addresses: Vec::new(),
        }
    }
}

impl CollectionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, DappError> {
        let config: Self =
            toml::from_str(source).map_err(|e| DappError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check addresses parse and chain ids are unique.
    pub fn validate(&self) -> Result<(), DappError> {
        self.contract_address()?;

        let mut seen = HashSet::new();
        for network in std::iter::once(&self.mainnet).chain(self.testnets.iter()) {
            if !seen.insert(network.chain_id) {
                return Err(DappError::Config(format!(
                    "chain id {} is configured more than once",
                    network.chain_id
                )));
            }
        }

        for entry in &self.whitelist_addresses {
            Address::from_str(entry.trim()).map_err(|e| {
                DappError::Config(format!("invalid whitelist address {}: {}", entry, e))
            })?;
        }

        Ok(())
    }

    pub fn contract_address(&self) -> Result<Address, DappError> {
        Address::from_str(self.contract_address.trim()).map_err(|e| {
            DappError::Config(format!(
                "invalid contract address {}: {}",
                self.contract_address, e
            ))
        })
    }

    /// Resolve the network config for a chain id, `None` if unsupported.
    pub fn network_for_chain(&self, chain_id: u64) -> Option<&NetworkConfig> {
        std::iter::once(&self.mainnet)
            .chain(self.testnets.iter())
            .find(|network| network.chain_id == chain_id)
    }

    pub fn is_mainnet(&self, chain_id: u64) -> bool {
        self.mainnet.chain_id == chain_id
    }

    pub fn contract_url(&self, network: &NetworkConfig) -> String {
        network.block_explorer.contract_url(&self.contract_address)
    }

    pub fn marketplace_url(&self, is_mainnet: bool) -> String {
        self.marketplace
            .collection_url(&self.marketplace_identifier, is_mainnet)
    }

    /// Marketplace link for the connected chain; mainnet when no chain is known.
    pub fn marketplace_url_for_chain(&self, chain_id: Option<u64>) -> String {
        self.marketplace_url(chain_id.map_or(true, |id| self.is_mainnet(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
contract_name = "TestCollection"
contract_address = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
marketplace_identifier = "test-collection"
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = CollectionConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.contract_name, "TestCollection");
        assert_eq!(config.mainnet, NetworkConfig::mainnet());
        assert_eq!(config.testnets.len(), 3);
        assert_eq!(config.marketplace.name, "OpenSea");
        assert!(config.whitelist_addresses.is_empty());
    }

    #[test]
    fn test_network_for_chain() {
        let config = CollectionConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.network_for_chain(1).unwrap().name, "mainnet");
        assert_eq!(config.network_for_chain(4).unwrap().name, "rinkeby");
        assert_eq!(config.network_for_chain(5).unwrap().name, "goerli");
        assert!(config.network_for_chain(137).is_none());
        assert!(config.is_mainnet(1));
        assert!(!config.is_mainnet(5));
    }

    #[test]
    fn test_explorer_urls() {
        let config = CollectionConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(
            config.contract_url(&config.mainnet),
            "https://etherscan.io/address/0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
        );
        let goerli = config.network_for_chain(5).unwrap();
        assert_eq!(
            goerli.block_explorer.transaction_url("0xabc"),
            "https://goerli.etherscan.io/tx/0xabc"
        );
    }

    #[test]
    fn test_marketplace_urls() {
        let config = CollectionConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(
            config.marketplace_url(true),
            "https://opensea.io/collection/test-collection"
        );
        assert_eq!(
            config.marketplace_url(false),
            "https://testnets.opensea.io/collection/test-collection"
        );
    }

    #[test]
    fn test_marketplace_url_follows_connected_chain() {
        let config = CollectionConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.marketplace_url_for_chain(None), config.marketplace_url(true));
        assert_eq!(config.marketplace_url_for_chain(Some(1)), config.marketplace_url(true));
        assert_eq!(
            config.marketplace_url_for_chain(Some(5)),
            "https://testnets.opensea.io/collection/test-collection"
        );
    }

    #[test]
    fn test_custom_networks() {
        let source = r#"
contract_name = "TestCollection"
contract_address = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4"
marketplace_identifier = "test-collection"

[[testnets]]
chain_id = 11155111
name = "sepolia"

[testnets.block_explorer]
name = "Etherscan"
base_url = "https://sepolia.etherscan.io/"
"#;
        let config = CollectionConfig::from_toml_str(source).unwrap();
        assert_eq!(config.testnets.len(), 1);
        assert!(config.network_for_chain(5).is_none());
        let sepolia = config.network_for_chain(11155111).unwrap();
        assert_eq!(sepolia.symbol, "ETH");
        assert_eq!(
            sepolia.block_explorer.contract_url("0x01"),
            "https://sepolia.etherscan.io/address/0x01"
        );
    }

    #[test]
    fn test_rejects_bad_contract_address() {
        let source = r#"
contract_name = "TestCollection"
contract_address = "not-an-address"
marketplace_identifier = "test-collection"
"#;
        let err = CollectionConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(err, DappError::Config(_)));
    }

    #[test]
    fn test_rejects_duplicate_chain_ids() {
        let mut config = CollectionConfig::default();
        config.testnets.push(NetworkConfig::mainnet());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_whitelist_entry() {
        let mut config = CollectionConfig::default();
        config.whitelist_addresses.push("0x1234".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CollectionConfig::default().validate().is_ok());
    }
}
