//! dApp state management

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::error::{capitalize_first, DappError};
use shared::status::{CollectionState, ProofFeedback};
use uuid::Uuid;

use crate::services::ethereum::ProviderStatus;
use crate::utils::config::collection_config;
use crate::utils::constants::TOAST_TIMEOUT_MS;

/// Content of the dismissible error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Text(String),
    /// No MetaMask in the page; the banner points to the block explorer instead.
    MetaMaskMissing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

/// Link to a transaction on the block explorer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerLink {
    pub url: String,
    pub explorer_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
    pub link: Option<ExplorerLink>,
}

/// Global dApp context
#[derive(Clone, Copy)]
pub struct DappContext {
    pub state: RwSignal<CollectionState>,
    pub error: RwSignal<Option<Notice>>,
    pub toasts: RwSignal<Vec<Toast>>,
    pub provider: RwSignal<ProviderStatus>,
    started: RwSignal<bool>,
}

impl Default for DappContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DappContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(default_state()),
            error: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            provider: RwSignal::new(ProviderStatus::Detecting),
            started: RwSignal::new(false),
        }
    }

    /// Back to the disconnected defaults; the banner is cleared too.
    pub fn reset(&self) {
        self.state.set(default_state());
        self.error.set(None);
    }

    /// Returns `true` only on the first call, so wallet events are registered once.
    pub fn mark_started(&self) -> bool {
        if self.started.get_untracked() {
            return false;
        }
        self.started.set(true);
        true
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.update(|s| s.loading = loading);
    }

    pub fn is_loading(&self) -> bool {
        self.state.with_untracked(|s| s.loading)
    }

    pub fn set_error(&self, error: &DappError) {
        match error {
            DappError::Provider(p) if p.is_user_rejection() => log::info!("Request rejected in wallet"),
            _ => log::error!("{}", error),
        }
        self.error.set(Some(Notice::Text(error.user_message())));
    }

    pub fn set_error_text(&self, message: &str) {
        self.error.set(Some(Notice::Text(capitalize_first(message))));
    }

    pub fn set_notice(&self, notice: Notice) {
        self.error.set(Some(notice));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub fn set_manual_address(&self, address: String) {
        self.state.update(|s| s.merkle_proof_manual_address = address);
    }

    pub fn set_proof_feedback(&self, feedback: ProofFeedback) {
        self.state.update(|s| s.merkle_proof_feedback = Some(feedback));
    }

    /// Show a toast and schedule its removal.
    pub fn push_toast(&self, kind: ToastKind, message: impl Into<String>, link: Option<ExplorerLink>) {
        let id = self.add_toast(kind, message, link);

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    fn add_toast(&self, kind: ToastKind, message: impl Into<String>, link: Option<ExplorerLink>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.into(),
                link,
            })
        });
        id
    }

    pub fn dismiss_toast(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    /// Explorer link for a transaction on the currently selected network.
    pub fn transaction_link(&self, hash: &str) -> ExplorerLink {
        self.state.with_untracked(|s| {
            let explorer = &s.network_config.block_explorer;
            ExplorerLink {
                url: explorer.transaction_url(hash),
                explorer_name: explorer.name.clone(),
            }
        })
    }
}

fn default_state() -> CollectionState {
    CollectionState::with_network_config(collection_config().mainnet.clone())
}

pub fn provide_dapp_context() -> DappContext {
    let context = DappContext::new();
    provide_context(context);
    context
}

pub fn use_dapp_context() -> DappContext {
    expect_context::<DappContext>()
}
