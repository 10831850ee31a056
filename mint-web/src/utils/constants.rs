//! Application constants

/// How long to wait for a late-injected provider before giving up.
pub const PROVIDER_DETECT_TIMEOUT_MS: u32 = 3000;

/// Interval between `eth_getTransactionReceipt` polls.
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 1000;

/// Toasts disappear on their own after this long.
pub const TOAST_TIMEOUT_MS: u32 = 8000;

/// Shown in place of a network name the dApp does not know.
pub const UNKNOWN_NETWORK_NAME: &str = "unknown";
