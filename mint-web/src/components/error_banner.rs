//! Dismissible error banner

use leptos::prelude::*;

use crate::state::dapp::{use_dapp_context, Notice};
use crate::utils::config::collection_config;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_dapp_context();

    move || {
        ctx.error.get().map(|notice| {
            let body = match notice {
                Notice::Text(message) => view! { <p>{message}</p> }.into_any(),
                Notice::MetaMaskMissing => view! { <MetaMaskMissing/> }.into_any(),
            };

            view! {
                <div class="error">
                    {body}
                    <button on:click=move |_| ctx.clear_error()>"Close"</button>
                </div>
            }
        })
    }
}

#[component]
fn MetaMaskMissing() -> impl IntoView {
    let ctx = use_dapp_context();
    let explorer = move || ctx.state.with(|s| s.network_config.clone());
    let contract_url = move || collection_config().contract_url(&explorer());
    let explorer_name = move || explorer().block_explorer.name;

    view! {
        <p>
            "We were not able to detect " <strong>"MetaMask"</strong>
            ". We value " <strong>"privacy and security"</strong>
            " a lot so we limit the wallet options on the DAPP."
        </p>
        <p>
            "But don't worry! You can always interact with the smart-contract through "
            <a href=contract_url target="_blank" rel="noreferrer">{explorer_name}</a>
            " and " <strong>"we do our best to provide you with the best user experience possible"</strong>
            ", even from there."
        </p>
        <p>"You can also get your " <strong>"Whitelist Proof"</strong> " manually, using the tool below."</p>
    }
}
