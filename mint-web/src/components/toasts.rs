//! Transient transaction notifications

use leptos::prelude::*;

use crate::state::dapp::{use_dapp_context, Toast, ToastKind};

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_dapp_context();

    view! {
        <div class="toasts">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let class = match toast.kind {
                        ToastKind::Info => "toast toast-info",
                        ToastKind::Success => "toast toast-success",
                    };
                    let id = toast.id;
                    let link = toast.link.map(|link| view! {
                        <a href=link.url target="_blank" rel="noopener noreferrer">
                            "View on " {link.explorer_name}
                        </a>
                    });

                    view! {
                        <div class=class on:click=move |_| ctx.dismiss_toast(id)>
                            <span class="toast-message">{toast.message}</span>
                            {link}
                        </div>
                    }
                }
            />
        </div>
    }
}
