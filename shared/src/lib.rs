//! # Shared Mint dApp Core
//!
//! Target-independent logic used by the `mint-web` browser app. Nothing in this
//! crate touches the DOM or the injected wallet, so all of it is unit tested on
//! the host.
//!
//! ## Structure
//!
//! - **[`config`]**: Collection, network, block explorer and marketplace configuration
//! - **[`status`]**: UI state derived from on-chain reads (sale open, sold out, mint mode)
//! - **[`error`]**: Error type and provider error normalization
//! - **[`whitelist`]**: Keccak-256 Merkle tree for whitelist proofs
//! - **[`dto`]**: JSON-RPC shapes exchanged with the wallet provider
//! - **[`utils`]**: Address and ether amount formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::status::CollectionState;
//!
//! let mut state = CollectionState::default();
//! state.max_supply = 100;
//! state.total_supply = 100;
//! assert!(state.is_sold_out());
//! assert!(!state.is_sale_open());
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod status;
pub mod utils;
pub mod whitelist;

pub use config::{BlockExplorer, CollectionConfig, MarketplaceConfig, NetworkConfig};
pub use error::{DappError, ProviderError};
pub use status::{CollectionState, MintKind, Network, SaleStatus};
pub use whitelist::Whitelist;
