//! NFT Mint dApp - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{ErrorBanner, Navbar, NetworkWarning, Toasts};
use crate::pages::MintPage;
use crate::state::actions::start;
use crate::state::dapp::{provide_dapp_context, Notice};

#[component]
pub fn App(
    /// Shown in the error banner when the embedded config failed to load
    config_error: Option<String>,
) -> impl IntoView {
    let ctx = provide_dapp_context();
    if let Some(message) = config_error {
        ctx.set_notice(Notice::Text(message));
    }
    leptos::task::spawn_local(start(ctx));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <NetworkWarning/>
                <ErrorBanner/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=MintPage/>
                </Routes>
                <Toasts/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to the mint page"</span>
            </A>
        </div>
    }
}
