//! Wallet and mint flows
//!
//! Each flow runs to completion inside `spawn_local` and reports failures
//! through the error banner; nothing here is retried.

use leptos::prelude::*;
use shared::error::DappError;
use shared::status::{MintKind, Network, ProofFeedback};

use crate::services::contract::{wait_for_receipt, CollectionContract};
use crate::services::ethereum::{self, ProviderStatus};
use crate::state::dapp::{DappContext, Notice, ToastKind};
use crate::utils::config::{collection_config, whitelist};
use crate::utils::constants::PROVIDER_DETECT_TIMEOUT_MS;

fn collection_contract() -> CollectionContract {
    CollectionContract::new(collection_config().contract_address.clone())
}

/// Page start-up: detect the provider, subscribe to its events, load the wallet.
pub async fn start(ctx: DappContext) {
    if !ctx.mark_started() {
        log::warn!("Wallet start-up already ran");
        return;
    }

    let status = ethereum::detect_provider(PROVIDER_DETECT_TIMEOUT_MS).await;
    log::info!("Wallet provider: {:?}", status);
    ctx.provider.set(status);

    if status != ProviderStatus::MetaMask {
        ctx.set_notice(Notice::MetaMaskMissing);
    }
    if !status.is_available() {
        return;
    }

    register_wallet_events(ctx);
    init_wallet(ctx).await;
}

fn register_wallet_events(ctx: DappContext) {
    ethereum::on_accounts_changed(move || {
        log::info!("Wallet accounts changed");
        leptos::task::spawn_local(init_wallet(ctx));
    });

    ethereum::on_chain_changed(|| {
        log::info!("Wallet chain changed, reloading");
        ethereum::reload_page();
    });
}

/// Reset state and rebuild it from the wallet's current account and chain.
pub async fn init_wallet(ctx: DappContext) {
    if let Err(e) = load_wallet(ctx).await {
        ctx.set_error(&e);
    }
}

async fn load_wallet(ctx: DappContext) -> Result<(), DappError> {
    let accounts = ethereum::accounts().await?;

    ctx.reset();

    let Some(address) = accounts.into_iter().next() else {
        log::info!("No wallet account exposed to this page");
        return Ok(());
    };

    let config = collection_config();
    let chain_id = ethereum::chain_id().await?;
    let Some(network_config) = config.network_for_chain(chain_id) else {
        log::warn!("Unsupported chain id {}", chain_id);
        ctx.set_error_text("Unsupported network!");
        return Ok(());
    };

    ctx.state.update(|s| {
        s.user_address = Some(address.clone());
        s.network = Some(Network {
            chain_id,
            name: network_config.name.clone(),
        });
        s.network_config = network_config.clone();
    });

    if !collection_contract().is_deployed().await? {
        ctx.set_error_text("Could not find the contract, are you connected to the right chain?");
        return Ok(());
    }

    refresh_contract_state(ctx).await
}

/// Re-read every contract field the UI shows.
pub async fn refresh_contract_state(ctx: DappContext) -> Result<(), DappError> {
    let snapshot = collection_contract().read_snapshot().await?;
    let in_whitelist = ctx.state.with_untracked(|s| {
        s.user_address
            .as_deref()
            .is_some_and(|address| whitelist().contains(address))
    });

    log::debug!("Contract state: {:?}", snapshot);
    ctx.state.update(|s| s.apply_snapshot(snapshot, in_whitelist));
    Ok(())
}

/// Prompt the wallet for access, then load it.
pub async fn connect_wallet(ctx: DappContext) {
    if !ctx.provider.get_untracked().is_available() {
        ctx.set_error(&DappError::NoProvider);
        return;
    }

    match ethereum::request_accounts().await {
        Ok(_) => init_wallet(ctx).await,
        Err(e) => ctx.set_error(&e),
    }
}

/// Full mint lifecycle: submit, announce, wait for the receipt, announce, refresh.
pub async fn mint(ctx: DappContext, kind: MintKind, amount: u64) {
    if ctx.is_loading() {
        return;
    }

    ctx.set_loading(true);
    if let Err(e) = submit_mint(ctx, kind, amount).await {
        ctx.set_error(&e);
    }
    ctx.set_loading(false);
}

async fn submit_mint(ctx: DappContext, kind: MintKind, amount: u64) -> Result<(), DappError> {
    let (from, value) = ctx
        .state
        .with_untracked(|s| (s.user_address.clone(), s.total_price(kind, amount)));
    let from = from.ok_or(DappError::NotConnected)?;

    let proof = match kind {
        MintKind::Whitelist => whitelist().proof(&from),
        MintKind::Public | MintKind::Free => Vec::new(),
    };

    let hash = collection_contract()
        .send_mint(&from, kind, amount, value, proof)
        .await?;
    log::info!("Mint transaction sent: {}", hash);
    ctx.push_toast(
        ToastKind::Info,
        "Transaction sent! Please wait...",
        Some(ctx.transaction_link(&hash)),
    );

    let receipt = wait_for_receipt(&hash).await?;
    log::info!("Mint transaction confirmed: {}", receipt.transaction_hash);
    ctx.push_toast(
        ToastKind::Success,
        "Success!",
        Some(ctx.transaction_link(&receipt.transaction_hash)),
    );

    refresh_contract_state(ctx).await
}

/// Copy the raw whitelist proof for the wallet (or typed) address.
pub async fn copy_merkle_proof(ctx: DappContext) {
    let address = ctx.state.with_untracked(|s| s.proof_address().to_string());
    let proof = whitelist().raw_proof(&address);

    if proof.is_empty() {
        ctx.set_proof_feedback(ProofFeedback::NotWhitelisted);
        return;
    }

    let feedback = match ethereum::copy_to_clipboard(&proof).await {
        Ok(()) => ProofFeedback::Copied,
        Err(e) => ProofFeedback::CopyFailed(e.user_message()),
    };
    ctx.set_proof_feedback(feedback);
}
