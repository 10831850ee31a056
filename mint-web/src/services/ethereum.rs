//! Injected Wallet Provider Integration via wasm-bindgen
//!
//! Thin bindings to the EIP-1193 provider that wallet extensions inject as
//! `window.ethereum`. Every call looks the provider up again, so nothing
//! JavaScript-owned is kept in Rust state.

use js_sys::Reflect;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::parse_quantity;
use shared::error::{DappError, ProviderError};
use wasm_bindgen::prelude::*;

/// What kind of provider, if any, was injected into the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderStatus {
    /// Detection still running
    Detecting,
    MetaMask,
    /// Some other EIP-1193 wallet
    Other,
    Missing,
}

impl ProviderStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ProviderStatus::MetaMask | ProviderStatus::Other)
    }
}

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function classify() {
    const eth = window.ethereum;
    if (!eth) {
        return 'none';
    }
    return eth.isMetaMask === true ? 'metamask' : 'other';
}

export async function detectEthereumProvider(timeoutMs) {
    if (window.ethereum) {
        return classify();
    }

    return await new Promise((resolve) => {
        let settled = false;
        const finish = () => {
            if (settled) {
                return;
            }
            settled = true;
            window.removeEventListener('ethereum#initialized', finish);
            resolve(classify());
        };
        window.addEventListener('ethereum#initialized', finish, { once: true });
        setTimeout(finish, timeoutMs);
    });
}

export async function providerRequest(method, params) {
    const eth = window.ethereum;
    if (!eth || typeof eth.request !== 'function') {
        throw new Error('No wallet provider detected');
    }
    return await eth.request({ method: method, params: params });
}

export function onProviderEvent(eventName, callback) {
    const eth = window.ethereum;
    if (eth && typeof eth.on === 'function') {
        eth.on(eventName, callback);
        return true;
    }
    return false;
}

export async function copyToClipboard(text) {
    if (!navigator.clipboard) {
        throw new Error('Clipboard access is not available in this browser');
    }
    await navigator.clipboard.writeText(text);
}
")]
extern "C" {
    /// Resolves to `metamask`, `other` or `none`
    #[wasm_bindgen(js_name = detectEthereumProvider, catch)]
    async fn detect_ethereum_provider(timeout_ms: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = onProviderEvent)]
    fn on_provider_event(event_name: &str, callback: &Closure<dyn FnMut(JsValue)>) -> bool;

    #[wasm_bindgen(js_name = copyToClipboard, catch)]
    async fn copy_to_clipboard_js(text: &str) -> Result<JsValue, JsValue>;
}

// ============================================================================
// ERROR EXTRACTION
// ============================================================================

/// Follow a property path through nested JS objects.
fn lookup(value: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(value.clone(), |current, key| {
        if !current.is_object() {
            return None;
        }
        let next = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if next.is_undefined() || next.is_null() {
            None
        } else {
            Some(next)
        }
    })
}

fn lookup_string(value: &JsValue, path: &[&str]) -> Option<String> {
    lookup(value, path).and_then(|v| v.as_string())
}

/// Turn a provider rejection into a [`ProviderError`].
pub fn provider_error(err: &JsValue) -> ProviderError {
    if let Some(text) = err.as_string() {
        return ProviderError::from_message(text);
    }

    ProviderError {
        nested_message: lookup_string(err, &["error", "message"]),
        data_message: lookup_string(err, &["data", "message"]),
        message: lookup_string(err, &["message"]),
        code: lookup(err, &["code"]).and_then(|c| c.as_f64()).map(|c| c as i64),
    }
}

// ============================================================================
// TYPED REQUESTS
// ============================================================================

/// Look for an injected provider, waiting up to `timeout_ms` for late injection.
pub async fn detect_provider(timeout_ms: u32) -> ProviderStatus {
    match detect_ethereum_provider(timeout_ms).await {
        Ok(kind) => match kind.as_string().as_deref() {
            Some("metamask") => ProviderStatus::MetaMask,
            Some("other") => ProviderStatus::Other,
            _ => ProviderStatus::Missing,
        },
        Err(e) => {
            log::warn!("Provider detection failed: {:?}", e);
            ProviderStatus::Missing
        }
    }
}

/// Send a JSON-RPC request through the injected provider.
pub async fn request<P, T>(method: &str, params: &P) -> Result<T, DappError>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_params = params
        .serialize(&serializer)
        .map_err(|e| DappError::decode(format!("{} params", method), e))?;

    log::debug!("-> {}", method);
    let result = provider_request(method, js_params)
        .await
        .map_err(|e| DappError::Provider(provider_error(&e)))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| DappError::decode(method, e))
}

fn no_params() -> Vec<String> {
    Vec::new()
}

/// Accounts the user already exposed to this origin (no prompt).
pub async fn accounts() -> Result<Vec<String>, DappError> {
    request("eth_accounts", &no_params()).await
}

/// Ask the wallet to connect; opens the wallet prompt.
pub async fn request_accounts() -> Result<Vec<String>, DappError> {
    request("eth_requestAccounts", &no_params()).await
}

pub async fn chain_id() -> Result<u64, DappError> {
    let raw: String = request("eth_chainId", &no_params()).await?;
    parse_quantity(&raw)
}

/// Deployed bytecode at `address`, `0x` when nothing is deployed.
pub async fn get_code(address: &str) -> Result<String, DappError> {
    request("eth_getCode", &(address, "latest")).await
}

// ============================================================================
// EVENTS AND BROWSER HELPERS
// ============================================================================

/// Subscribe to a provider event. The callback lives for the rest of the page.
fn subscribe(event_name: &str, handler: impl FnMut(JsValue) + 'static) {
    let callback = Closure::<dyn FnMut(JsValue)>::new(handler);
    if on_provider_event(event_name, &callback) {
        callback.forget();
    } else {
        log::warn!("Provider does not support '{}' events", event_name);
    }
}

pub fn on_accounts_changed(mut handler: impl FnMut() + 'static) {
    subscribe("accountsChanged", move |_| handler());
}

pub fn on_chain_changed(mut handler: impl FnMut() + 'static) {
    subscribe("chainChanged", move |_| handler());
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), DappError> {
    copy_to_clipboard_js(text)
        .await
        .map(|_| ())
        .map_err(|e| DappError::Provider(provider_error(&e)))
}
