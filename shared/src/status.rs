//! # Collection State
//!
//! Plain snapshot of everything the dApp knows about the wallet and the
//! contract, plus the boolean derivations the views are built from. The web
//! app keeps one [`CollectionState`] inside a signal and re-renders from it.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;

/// Chain the wallet is currently connected to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub chain_id: u64,
    pub name: String,
}

/// Sale status shown in the collection status panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaleStatus {
    WhitelistOnly,
    Open,
    Closed,
}

impl SaleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SaleStatus::WhitelistOnly => "Whitelist Only",
            SaleStatus::Open => "Open",
            SaleStatus::Closed => "Closed",
        }
    }
}

/// Which contract method a mint goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintKind {
    /// `mint(amount)`, paid at `cost()`
    Public,
    /// `mintFree(amount)` while the free allocation lasts
    Free,
    /// `whitelistMint(amount, proof)`
    Whitelist,
}

impl MintKind {
    pub fn button_label(&self) -> &'static str {
        match self {
            MintKind::Public => "Mint",
            MintKind::Free => "Free Mint",
            MintKind::Whitelist => "Whitelist Mint",
        }
    }
}

/// Contract reads refreshed after every wallet change and every mint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractSnapshot {
    pub total_supply: u64,
    pub max_supply: u64,
    pub max_free: u64,
    pub max_mint_amount_per_tx: u64,
    pub max_free_mint_amount_per_tx: u64,
    pub token_price: U256,
    pub is_paused: bool,
    pub is_whitelist_mint_enabled: bool,
}

/// Feedback shown under the manual whitelist proof tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofFeedback {
    NotWhitelisted,
    Copied,
    CopyFailed(String),
}

impl ProofFeedback {
    pub fn message(&self) -> String {
        match self {
            ProofFeedback::NotWhitelisted => {
                "The given address is not in the whitelist, please double-check.".to_string()
            }
            ProofFeedback::Copied => {
                "Congratulations! Your Merkle Proof has been copied to the clipboard.".to_string()
            }
            ProofFeedback::CopyFailed(reason) => {
                format!("Could not copy the proof to the clipboard: {}", reason)
            }
        }
    }
}

/// UI state container contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionState {
    pub user_address: Option<String>,
    pub network: Option<Network>,
    pub network_config: NetworkConfig,
    pub total_supply: u64,
    pub max_supply: u64,
    pub max_free: u64,
    pub max_mint_amount_per_tx: u64,
    pub max_free_mint_amount_per_tx: u64,
    pub token_price: U256,
    pub free_price: U256,
    pub is_paused: bool,
    pub loading: bool,
    pub is_whitelist_mint_enabled: bool,
    pub is_user_in_whitelist: bool,
    pub contract_ready: bool,
    pub merkle_proof_manual_address: String,
    pub merkle_proof_feedback: Option<ProofFeedback>,
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::with_network_config(NetworkConfig::mainnet())
    }
}

impl CollectionState {
    pub fn with_network_config(network_config: NetworkConfig) -> Self {
        Self {
            user_address: None,
            network: None,
            network_config,
            total_supply: 0,
            max_supply: 0,
            max_free: 0,
            max_mint_amount_per_tx: 0,
            max_free_mint_amount_per_tx: 0,
            token_price: U256::ZERO,
            free_price: U256::ZERO,
            is_paused: true,
            loading: false,
            is_whitelist_mint_enabled: false,
            is_user_in_whitelist: false,
            contract_ready: false,
            merkle_proof_manual_address: String::new(),
            merkle_proof_feedback: None,
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: ContractSnapshot, is_user_in_whitelist: bool) {
        self.total_supply = snapshot.total_supply;
        self.max_supply = snapshot.max_supply;
        self.max_free = snapshot.max_free;
        self.max_mint_amount_per_tx = snapshot.max_mint_amount_per_tx;
        self.max_free_mint_amount_per_tx = snapshot.max_free_mint_amount_per_tx;
        self.token_price = snapshot.token_price;
        self.is_paused = snapshot.is_paused;
        self.is_whitelist_mint_enabled = snapshot.is_whitelist_mint_enabled;
        self.is_user_in_whitelist = is_user_in_whitelist;
        self.contract_ready = true;
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.user_address.is_some()
    }

    pub fn is_contract_ready(&self) -> bool {
        self.contract_ready
    }

    pub fn is_sold_out(&self) -> bool {
        self.max_supply != 0 && self.total_supply >= self.max_supply
    }

    pub fn is_sale_open(&self) -> bool {
        (self.is_whitelist_mint_enabled || !self.is_paused) && !self.is_sold_out()
    }

    pub fn sale_status(&self) -> SaleStatus {
        if !self.is_sale_open() {
            SaleStatus::Closed
        } else if self.is_whitelist_mint_enabled {
            SaleStatus::WhitelistOnly
        } else {
            SaleStatus::Open
        }
    }

    /// True while a network is known and it is not `mainnet_chain_id`.
    pub fn is_not_mainnet(&self, mainnet_chain_id: u64) -> bool {
        self.network
            .as_ref()
            .is_some_and(|network| network.chain_id != mainnet_chain_id)
    }

    fn in_free_phase(&self) -> bool {
        self.total_supply < self.max_free
    }

    pub fn supply_label(&self) -> &'static str {
        if self.in_free_phase() {
            "Free Supply"
        } else {
            "Supply"
        }
    }

    /// Denominator of the supply counter.
    pub fn supply_cap(&self) -> u64 {
        if self.in_free_phase() {
            self.max_free
        } else {
            self.max_supply
        }
    }

    pub fn can_whitelist_mint(&self) -> bool {
        self.is_whitelist_mint_enabled && self.is_user_in_whitelist
    }

    /// Mint path currently available to the connected user, if any.
    pub fn mint_kind(&self) -> Option<MintKind> {
        if self.is_sold_out() {
            return None;
        }
        if !self.is_paused {
            if self.in_free_phase() {
                Some(MintKind::Free)
            } else {
                Some(MintKind::Public)
            }
        } else if self.can_whitelist_mint() {
            Some(MintKind::Whitelist)
        } else {
            None
        }
    }

    pub fn max_amount_for(&self, kind: MintKind) -> u64 {
        match kind {
            MintKind::Free => self.max_free_mint_amount_per_tx,
            MintKind::Public | MintKind::Whitelist => self.max_mint_amount_per_tx,
        }
    }

    pub fn price_for(&self, kind: MintKind) -> U256 {
        match kind {
            MintKind::Free => self.free_price,
            MintKind::Public | MintKind::Whitelist => self.token_price,
        }
    }

    /// Value to attach to a mint of `amount` tokens.
    pub fn total_price(&self, kind: MintKind, amount: u64) -> U256 {
        self.price_for(kind).saturating_mul(U256::from(amount))
    }

    /// Clamp a requested amount to `[1, max]` for the given mint path.
    pub fn clamp_amount(&self, kind: MintKind, amount: u64) -> u64 {
        let max = self.max_amount_for(kind).max(1);
        amount.clamp(1, max)
    }

    /// The manual proof tool is offered before connecting or during the whitelist sale.
    pub fn show_whitelist_proof_tool(&self) -> bool {
        !self.is_wallet_connected() || self.is_whitelist_mint_enabled
    }

    /// Address the proof tool works on: the wallet if connected, the typed one otherwise.
    pub fn proof_address(&self) -> &str {
        self.user_address
            .as_deref()
            .unwrap_or(&self.merkle_proof_manual_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: u64, max: u64, paused: bool, whitelist: bool) -> CollectionState {
        let mut s = CollectionState::default();
        s.total_supply = total;
        s.max_supply = max;
        s.is_paused = paused;
        s.is_whitelist_mint_enabled = whitelist;
        s
    }

    #[test]
    fn test_default_state() {
        let s = CollectionState::default();
        assert!(s.is_paused);
        assert!(!s.is_wallet_connected());
        assert!(!s.is_contract_ready());
        assert!(!s.is_sold_out());
        assert_eq!(s.sale_status(), SaleStatus::Closed);
    }

    #[test]
    fn test_sold_out_requires_nonzero_max() {
        assert!(!state(0, 0, false, false).is_sold_out());
        assert!(!state(5, 0, false, false).is_sold_out());
        assert!(!state(9, 10, false, false).is_sold_out());
        assert!(state(10, 10, false, false).is_sold_out());
        assert!(state(11, 10, false, false).is_sold_out());
    }

    #[test]
    fn test_sale_open_truth_table() {
        for paused in [false, true] {
            for whitelist in [false, true] {
                for sold_out in [false, true] {
                    let total = if sold_out { 10 } else { 3 };
                    let s = state(total, 10, paused, whitelist);
                    let expected = (whitelist || !paused) && !sold_out;
                    assert_eq!(s.is_sale_open(), expected, "paused={paused} wl={whitelist} sold_out={sold_out}");
                }
            }
        }
    }

    #[test]
    fn test_sale_status_labels() {
        assert_eq!(state(0, 10, false, false).sale_status(), SaleStatus::Open);
        assert_eq!(state(0, 10, true, true).sale_status(), SaleStatus::WhitelistOnly);
        assert_eq!(state(0, 10, false, true).sale_status(), SaleStatus::WhitelistOnly);
        assert_eq!(state(0, 10, true, false).sale_status(), SaleStatus::Closed);
        assert_eq!(state(10, 10, false, true).sale_status(), SaleStatus::Closed);
        assert_eq!(SaleStatus::WhitelistOnly.label(), "Whitelist Only");
    }

    #[test]
    fn test_supply_display_switches_after_free_phase() {
        let mut s = state(50, 1000, false, false);
        s.max_free = 100;
        assert_eq!(s.supply_label(), "Free Supply");
        assert_eq!(s.supply_cap(), 100);

        s.total_supply = 100;
        assert_eq!(s.supply_label(), "Supply");
        assert_eq!(s.supply_cap(), 1000);
    }

    #[test]
    fn test_not_mainnet() {
        let mut s = CollectionState::default();
        assert!(!s.is_not_mainnet(1));
        s.network = Some(Network { chain_id: 1, name: "mainnet".to_string() });
        assert!(!s.is_not_mainnet(1));
        s.network = Some(Network { chain_id: 5, name: "goerli".to_string() });
        assert!(s.is_not_mainnet(1));
    }

    #[test]
    fn test_mint_kind() {
        let mut s = state(10, 1000, false, false);
        s.max_free = 100;
        assert_eq!(s.mint_kind(), Some(MintKind::Free));

        s.total_supply = 100;
        assert_eq!(s.mint_kind(), Some(MintKind::Public));

        s.is_paused = true;
        assert_eq!(s.mint_kind(), None);

        s.is_whitelist_mint_enabled = true;
        assert_eq!(s.mint_kind(), None);

        s.is_user_in_whitelist = true;
        assert_eq!(s.mint_kind(), Some(MintKind::Whitelist));

        s.total_supply = 1000;
        assert_eq!(s.mint_kind(), None);
    }

    #[test]
    fn test_amount_limits_and_price() {
        let mut s = state(0, 1000, false, false);
        s.max_mint_amount_per_tx = 5;
        s.max_free_mint_amount_per_tx = 2;
        s.token_price = U256::from(10_000_000_000_000_000u64);

        assert_eq!(s.clamp_amount(MintKind::Public, 0), 1);
        assert_eq!(s.clamp_amount(MintKind::Public, 9), 5);
        assert_eq!(s.clamp_amount(MintKind::Free, 3), 2);

        assert_eq!(
            s.total_price(MintKind::Public, 3),
            U256::from(30_000_000_000_000_000u64)
        );
        assert_eq!(s.total_price(MintKind::Free, 2), U256::ZERO);
        assert_eq!(s.total_price(MintKind::Whitelist, 2), U256::from(20_000_000_000_000_000u64));
    }

    #[test]
    fn test_clamp_with_zero_limit() {
        let s = state(0, 1000, false, false);
        assert_eq!(s.clamp_amount(MintKind::Public, 4), 1);
    }

    #[test]
    fn test_whitelist_proof_tool_visibility() {
        let mut s = CollectionState::default();
        assert!(s.show_whitelist_proof_tool());

        s.user_address = Some("0x5B38Da6a701c568545dCfcB03FcB875f56beddC4".to_string());
        assert!(!s.show_whitelist_proof_tool());

        s.is_whitelist_mint_enabled = true;
        assert!(s.show_whitelist_proof_tool());
    }

    #[test]
    fn test_proof_address_prefers_wallet() {
        let mut s = CollectionState::default();
        s.merkle_proof_manual_address = "0xmanual".to_string();
        assert_eq!(s.proof_address(), "0xmanual");
        s.user_address = Some("0xwallet".to_string());
        assert_eq!(s.proof_address(), "0xwallet");
    }

    #[test]
    fn test_apply_snapshot_marks_ready() {
        let mut s = CollectionState::default();
        s.apply_snapshot(
            ContractSnapshot {
                total_supply: 3,
                max_supply: 10,
                is_paused: false,
                ..Default::default()
            },
            true,
        );
        assert!(s.is_contract_ready());
        assert!(s.is_user_in_whitelist);
        assert_eq!(s.sale_status(), SaleStatus::Open);
    }
}
