//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::config::collection_config;

#[component]
pub fn Navbar() -> impl IntoView {
    let title = collection_config().contract_name.clone();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/">
                    <span class="nav-title">{title}</span>
                </A>
            </div>
        </nav>
    }
}
