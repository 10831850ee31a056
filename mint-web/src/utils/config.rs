//! # Collection Configuration
//!
//! The collection is described by `collection.toml`, embedded at compile time.
//! It is parsed and validated once; [`collection_config()`] hands out the
//! cached instance and [`whitelist()`] the Merkle tree built from it.

use std::sync::OnceLock;

use shared::config::CollectionConfig;
use shared::error::DappError;
use shared::whitelist::Whitelist;

const COLLECTION_TOML: &str = include_str!("../../collection.toml");

static CONFIG: OnceLock<CollectionConfig> = OnceLock::new();
static WHITELIST: OnceLock<Whitelist> = OnceLock::new();

/// Parse the embedded configuration and cache it.
///
/// On failure the built-in defaults are cached instead, so the page still
/// renders and the error can be shown to the user.
pub fn init_config() -> Result<(), DappError> {
    match CollectionConfig::from_toml_str(COLLECTION_TOML) {
        Ok(config) => {
            log::info!(
                "Loaded collection config for {} at {}",
                config.contract_name,
                config.contract_address
            );
            let _ = CONFIG.set(config);
            Ok(())
        }
        Err(e) => {
            let _ = CONFIG.set(CollectionConfig::default());
            Err(e)
        }
    }
}

/// Cached configuration, falling back to defaults if [`init_config()`] was never called.
pub fn collection_config() -> &'static CollectionConfig {
    CONFIG.get_or_init(CollectionConfig::default)
}

pub fn whitelist() -> &'static Whitelist {
    WHITELIST.get_or_init(|| {
        Whitelist::from_strings(&collection_config().whitelist_addresses).unwrap_or_else(|e| {
            log::error!("Invalid whitelist entry, whitelist disabled: {}", e);
            Whitelist::new(&[])
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = CollectionConfig::from_toml_str(COLLECTION_TOML).unwrap();
        assert!(Whitelist::from_strings(&config.whitelist_addresses).is_ok());
        assert!(config.network_for_chain(config.mainnet.chain_id).is_some());
    }
}
