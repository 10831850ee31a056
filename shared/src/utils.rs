//! # Shared Utility Functions
//!
//! Formatting helpers used by the status display and the mint widget.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the usual `0x1234...abcd` layout
//!
//! ## Amounts
//!
//! - [`format_ether`] - Render a wei amount as a trimmed ether string
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
//! assert_eq!(truncate_address(address), "0x5B38...ddC4");
//! ```

use alloy_primitives::utils::format_units;
use alloy_primitives::U256;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
/// assert_eq!(format_address(addr, 6, 4), "0x5B38...ddC4");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an `0x` address keeping the prefix plus four hex digits on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a wei amount as ether, trimming trailing zeros (`0.05`, `1`, `0`).
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::utils::format_ether;
///
/// assert_eq!(format_ether(U256::from(50_000_000_000_000_000u64)), "0.05");
/// ```
pub fn format_ether(wei: U256) -> String {
    let formatted = match format_units(wei, "ether") {
        Ok(s) => s,
        Err(_) => return wei.to_string(),
    };

    match formatted.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac = frac_part.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
        assert_eq!(format_address(addr, 6, 4), "0x5B38...ddC4");
        assert_eq!(format_address(addr, 4, 2), "0x5B...C4");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xab", 6, 4), "0xab");
        assert_eq!(truncate_address(""), "");
    }

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(U256::ZERO), "0");
        assert_eq!(format_ether(U256::from(1_000_000_000_000_000_000u64)), "1");
        assert_eq!(format_ether(U256::from(1_500_000_000_000_000_000u64)), "1.5");
        assert_eq!(format_ether(U256::from(10_000_000_000_000_000u64)), "0.01");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }
}
