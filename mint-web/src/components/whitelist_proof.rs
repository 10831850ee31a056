//! Manual whitelist proof generator
//!
//! Lets anyone produce the proof for a listed address and paste it into the
//! block explorer's `whitelistMint` form. Only the owner of the address can
//! use it successfully.

use leptos::prelude::*;

use crate::state::actions::copy_merkle_proof;
use crate::state::dapp::use_dapp_context;

#[component]
pub fn WhitelistProofTool() -> impl IntoView {
    let ctx = use_dapp_context();

    let address = move || ctx.state.with(|s| s.proof_address().to_string());
    let wallet_connected = move || ctx.state.with(|s| s.is_wallet_connected());
    let feedback = move || ctx.state.with(|s| s.merkle_proof_feedback.as_ref().map(|f| f.message()));

    let on_copy = move |_| leptos::task::spawn_local(copy_merkle_proof(ctx));

    view! {
        <div class="merkle-proof-manual-address">
            <h2>"Whitelist Proof"</h2>
            <p>
                "Anyone can generate the proof using any public address in the list, but "
                <strong>"only the owner of that address"</strong>
                " will be able to make a successful transaction by using it."
            </p>

            {move || feedback().map(|message| view! { <div class="feedback-message">{message}</div> })}

            <label for="merkle-proof-manual-address">"Public address:"</label>
            <input
                id="merkle-proof-manual-address"
                type="text"
                placeholder="0x000..."
                disabled=wallet_connected
                prop:value=address
                on:input=move |ev| ctx.set_manual_address(event_target_value(&ev))
            />
            " "
            <button on:click=on_copy>"Generate and copy to clipboard"</button>
        </div>
    }
}
