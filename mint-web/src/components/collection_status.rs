//! Collection Status Panel - wallet address, supply counter, sale status

use leptos::prelude::*;
use shared::status::CollectionState;
use shared::utils::truncate_address;

/// Pure view of the collection state; reads nothing but its prop.
#[component]
pub fn CollectionStatus(#[prop(into)] state: Signal<CollectionState>) -> impl IntoView {
    let address = move || {
        state.with(|s| s.user_address.clone().unwrap_or_default())
    };
    let short_address = move || truncate_address(&address());
    let supply_label = move || state.with(|s| s.supply_label());
    let supply = move || state.with(|s| format!("{}/{}", s.total_supply, s.supply_cap()));
    let sale_status = move || state.with(|s| s.sale_status().label());

    view! {
        <div class="collection-status">
            <div class="user-address">
                <span class="label">"Wallet Address"</span>
                <span class="address" title=address>{short_address}</span>
            </div>

            <div class="supply">
                <span class="label">{supply_label}</span>
                {supply}
            </div>

            <div class="current-sale">
                <span class="label">"Sale Status"</span>
                {sale_status}
            </div>
        </div>
    }
}
