//! # Error Types
//!
//! [`DappError`] covers everything that can fail between the UI and the chain.
//! Wallet rejections arrive as loosely shaped JavaScript objects; the web app
//! extracts the interesting fields into a [`ProviderError`] and the banner shows
//! [`ProviderError::normalize`].
//!
//! ## Message Precedence
//!
//! Providers wrap the useful text at different depths. The nested
//! `error.error.message` (an RPC node's revert reason) wins, then
//! `error.data.message`, then the top-level `error.message`.
//!
//! ```rust
//! use shared::error::ProviderError;
//!
//! let err = ProviderError {
//!     nested_message: Some("execution reverted: insufficient funds".to_string()),
//!     data_message: None,
//!     message: Some("Internal JSON-RPC error.".to_string()),
//!     code: Some(-32603),
//! };
//! assert_eq!(err.normalize(), "Execution reverted: insufficient funds");
//! ```

use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "Unknown error...";

/// Error code returned by EIP-1193 providers when the user rejects a request.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Fields pulled out of a provider rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderError {
    /// `error.error.message`
    pub nested_message: Option<String>,
    /// `error.data.message`
    pub data_message: Option<String>,
    /// `error.message`
    pub message: Option<String>,
    pub code: Option<i64>,
}

impl ProviderError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED_CODE)
    }

    /// Human-readable message for the error banner.
    pub fn normalize(&self) -> String {
        let raw = self
            .nested_message
            .as_deref()
            .or(self.data_message.as_deref())
            .or(self.message.as_deref())
            .unwrap_or(UNKNOWN_ERROR);

        capitalize_first(raw)
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Errors raised while talking to the wallet or the contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DappError {
    /// Rejection from the injected provider or the RPC node behind it.
    #[error("{}", .0.normalize())]
    Provider(ProviderError),

    /// No injected wallet provider in the page.
    #[error("No wallet provider detected")]
    NoProvider,

    #[error("Wallet is not connected")]
    NotConnected,

    /// Response could not be decoded as the expected ABI type or JSON shape.
    #[error("Could not decode {what}: {reason}")]
    Decode { what: String, reason: String },

    /// Transaction mined but reverted.
    #[error("Transaction {0} was reverted")]
    Reverted(String),

    /// Invalid collection configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl DappError {
    pub fn decode(what: impl Into<String>, reason: impl ToString) -> Self {
        DappError::Decode {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// Message for the error banner, first character capitalized.
    pub fn user_message(&self) -> String {
        capitalize_first(&self.to_string())
    }
}

impl From<ProviderError> for DappError {
    fn from(err: ProviderError) -> Self {
        DappError::Provider(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_message_wins() {
        let err = ProviderError {
            nested_message: Some("nested".to_string()),
            data_message: Some("data".to_string()),
            message: Some("top".to_string()),
            code: None,
        };
        assert_eq!(err.normalize(), "Nested");
    }

    #[test]
    fn test_data_message_before_top_level() {
        let err = ProviderError {
            nested_message: None,
            data_message: Some("execution reverted: Max supply exceeded!".to_string()),
            message: Some("Internal JSON-RPC error.".to_string()),
            code: Some(-32603),
        };
        assert_eq!(err.normalize(), "Execution reverted: Max supply exceeded!");
    }

    #[test]
    fn test_top_level_message() {
        let err = ProviderError::from_message("user rejected transaction");
        assert_eq!(err.normalize(), "User rejected transaction");
    }

    #[test]
    fn test_unknown_error() {
        assert_eq!(ProviderError::default().normalize(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first("éclair"), "Éclair");
        assert_eq!(capitalize_first("Already"), "Already");
    }

    #[test]
    fn test_user_rejection() {
        let err = ProviderError {
            code: Some(USER_REJECTED_CODE),
            ..ProviderError::from_message("User denied transaction signature.")
        };
        assert!(err.is_user_rejection());
        assert!(!ProviderError::default().is_user_rejection());
    }

    #[test]
    fn test_dapp_error_messages() {
        let err = DappError::from(ProviderError::from_message("insufficient funds"));
        assert_eq!(err.user_message(), "Insufficient funds");
        assert_eq!(
            DappError::Reverted("0xabc".to_string()).to_string(),
            "Transaction 0xabc was reverted"
        );
    }
}
