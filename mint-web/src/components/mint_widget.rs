//! Mint Widget - amount picker, total price and the mint button

use leptos::prelude::*;
use shared::status::{CollectionState, MintKind};
use shared::utils::format_ether;

#[component]
pub fn MintWidget(
    #[prop(into)] state: Signal<CollectionState>,
    /// Called with the mint path and the clamped amount
    on_mint: Callback<(MintKind, u64)>,
) -> impl IntoView {
    let (requested, set_requested) = signal(1u64);

    let kind = move || state.with(|s| s.mint_kind());
    let loading = move || state.with(|s| s.loading);
    let amount = move || {
        let requested = requested.get();
        state.with(|s| match s.mint_kind() {
            Some(kind) => s.clamp_amount(kind, requested),
            None => requested,
        })
    };
    let max_amount = move || state.with(|s| s.mint_kind().map(|k| s.max_amount_for(k)).unwrap_or(1));

    let total_price = move || {
        state.with(|s| {
            let price = s
                .mint_kind()
                .map(|k| s.total_price(k, amount()))
                .unwrap_or_default();
            format!("{} {}", format_ether(price), s.network_config.symbol)
        })
    };
    let button_label = move || kind().map(|k| k.button_label()).unwrap_or("Mint");

    let decrement = move |_| set_requested.set(amount().saturating_sub(1).max(1));
    let increment = move |_| set_requested.set((amount() + 1).min(max_amount()));
    let mint = move |_| {
        if let Some(kind) = kind() {
            on_mint.run((kind, amount()));
        }
    };

    view! {
        {move || {
            if kind().is_some() {
                view! {
                    <div class="mint-widget">
                        <div class="price">
                            <strong>"Total price:"</strong> " " {total_price}
                        </div>

                        <div class="controls">
                            <button class="decrease" disabled=loading on:click=decrement>"-"</button>
                            <span class="mint-amount">{amount}</span>
                            <button class="increase" disabled=loading on:click=increment>"+"</button>
                            <button class="primary" disabled=loading on:click=mint>{button_label}</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                let whitelist_sale = state.with(|s| s.is_whitelist_mint_enabled);
                view! {
                    <div class="cannot-mint">
                        {if whitelist_sale {
                            view! { "You are not included in the " <strong>"whitelist"</strong> "." }.into_any()
                        } else {
                            view! { "The contract is " <strong>"paused"</strong> "." }.into_any()
                        }}
                        <br/>
                        "Please come back during the next sale!"
                    </div>
                }.into_any()
            }
        }}
    }
}
