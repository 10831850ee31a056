//! Banner shown while the wallet is on a test network

use leptos::prelude::*;

use crate::state::dapp::use_dapp_context;
use crate::utils::config::collection_config;
use crate::utils::constants::UNKNOWN_NETWORK_NAME;

#[component]
pub fn NetworkWarning() -> impl IntoView {
    let ctx = use_dapp_context();
    let mainnet_chain_id = collection_config().mainnet.chain_id;

    let is_not_mainnet = move || ctx.state.with(|s| s.is_not_mainnet(mainnet_chain_id));
    let network_name = move || {
        ctx.state.with(|s| {
            s.network
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_else(|| UNKNOWN_NETWORK_NAME.to_string())
        })
    };

    view! {
        <Show when=is_not_mainnet>
            <div class="not-mainnet">
                "You are not connected to the main network."
                <span class="small">"Current network: " <strong>{network_name}</strong></span>
            </div>
        </Show>
    }
}
