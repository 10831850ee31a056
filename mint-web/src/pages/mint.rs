//! Mint Page - wallet connection, collection status and minting

use leptos::prelude::*;
use shared::status::{CollectionState, MintKind};

use crate::components::{CollectionStatus, MintWidget, WhitelistProofTool};
use crate::state::actions::{connect_wallet, mint};
use crate::state::dapp::use_dapp_context;
use crate::utils::config::collection_config;

#[component]
pub fn MintPage() -> impl IntoView {
    let ctx = use_dapp_context();
    let state = Signal::derive(move || ctx.state.get());
    let wallet_connected = move || ctx.state.with(|s| s.is_wallet_connected());

    view! {
        <main class="dapp">
            {move || {
                if wallet_connected() {
                    view! { <ConnectedPanel state=state/> }.into_any()
                } else {
                    view! { <NoWalletPanel/> }.into_any()
                }
            }}
        </main>
    }
}

#[component]
fn ConnectedPanel(#[prop(into)] state: Signal<CollectionState>) -> impl IntoView {
    let ctx = use_dapp_context();
    let on_mint = Callback::new(move |(kind, amount): (MintKind, u64)| {
        leptos::task::spawn_local(mint(ctx, kind, amount));
    });

    move || {
        let (ready, sold_out) = state.with(|s| (s.is_contract_ready(), s.is_sold_out()));
        if !ready {
            view! {
                <div class="collection-not-ready">
                    <div class="spinner"></div>
                    "Loading collection data..."
                </div>
            }
            .into_any()
        } else if sold_out {
            view! {
                <CollectionStatus state=state/>
                <SoldOut/>
            }
            .into_any()
        } else {
            view! {
                <CollectionStatus state=state/>
                <MintWidget state=state on_mint=on_mint/>
            }
            .into_any()
        }
    }
}

#[component]
fn SoldOut() -> impl IntoView {
    let ctx = use_dapp_context();
    let config = collection_config();
    let marketplace_url = move || {
        let chain_id = ctx.state.with(|s| s.network.as_ref().map(|n| n.chain_id));
        config.marketplace_url_for_chain(chain_id)
    };

    view! {
        <div class="collection-sold-out">
            <h2>"Tokens have been " <strong>"sold out"</strong> "!"</h2>
            "You can buy from our beloved holders on "
            <a href=marketplace_url target="_blank" rel="noreferrer">{config.marketplace.name.clone()}</a>
            "."
        </div>
    }
}

#[component]
fn NoWalletPanel() -> impl IntoView {
    let ctx = use_dapp_context();

    let provider_missing = move || !ctx.provider.get().is_available();
    let show_proof_tool = move || ctx.state.with(|s| s.show_whitelist_proof_tool());
    let contract_url = move || ctx.state.with(|s| collection_config().contract_url(&s.network_config));
    let explorer_name = move || ctx.state.with(|s| s.network_config.block_explorer.name.clone());
    let on_connect = move |_| leptos::task::spawn_local(connect_wallet(ctx));

    view! {
        <div class="no-wallet">
            <button class="primary" disabled=provider_missing on:click=on_connect>
                "Connect Wallet"
            </button>

            <div class="use-block-explorer">
                "Hey, looking for a " <strong>"super-safe experience"</strong> "?"
                <br/>
                "You can interact with the smart-contract " <strong>"directly"</strong> " through "
                <a href=contract_url target="_blank" rel="noreferrer">{explorer_name}</a>
                ", without even connecting your wallet to this DAPP!"
                <br/>
                <br/>
                "Keep safe!"
            </div>

            <Show when=show_proof_tool>
                <WhitelistProofTool/>
            </Show>
        </div>
    }
}
