//! # JSON-RPC Data Transfer Objects
//!
//! Request and response structures for the handful of Ethereum JSON-RPC
//! methods the dApp uses through the wallet provider.

use alloy_primitives::{hex, U256};
use serde::{Deserialize, Serialize};

use crate::error::DappError;

/// Parameter object for `eth_call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub to: String,
    pub data: String,
}

/// Parameter object for `eth_sendTransaction`. Gas is left to the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Subset of `eth_getTransactionReceipt` the dApp reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TransactionReceipt {
    /// Post-Byzantium receipts carry `0x1` on success and `0x0` on revert.
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => parse_quantity(status).map(|s| s == 1).unwrap_or(false),
            None => true,
        }
    }
}

/// Parse a hex quantity such as `0x1` or `0x5` into a `u64`.
pub fn parse_quantity(value: &str) -> Result<u64, DappError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| DappError::decode("quantity", format!("missing 0x prefix in {}", value)))?;
    if digits.is_empty() {
        return Err(DappError::decode("quantity", "empty quantity"));
    }
    u64::from_str_radix(digits, 16).map_err(|e| DappError::decode("quantity", e))
}

/// Encode a value as a JSON-RPC quantity.
pub fn to_quantity(value: U256) -> String {
    format!("0x{:x}", value)
}

/// Encode bytes as `0x`-prefixed hex data.
pub fn to_data(bytes: &[u8]) -> String {
    hex::encode_prefixed(bytes)
}

/// Decode `0x`-prefixed hex data returned by `eth_call` / `eth_getCode`.
pub fn decode_data(value: &str) -> Result<Vec<u8>, DappError> {
    hex::decode(value).map_err(|e| DappError::decode("hex data", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x1").unwrap(), 1);
        assert_eq!(parse_quantity("0x5").unwrap(), 5);
        assert_eq!(parse_quantity("0xaa36a7").unwrap(), 11155111);
        assert!(parse_quantity("5").is_err());
        assert!(parse_quantity("0x").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_to_quantity() {
        assert_eq!(to_quantity(U256::ZERO), "0x0");
        assert_eq!(to_quantity(U256::from(20_000_000_000_000_000u64)), "0x470de4df820000");
    }

    #[test]
    fn test_data_hex() {
        assert_eq!(to_data(&[0xa0, 0x71, 0x2d, 0x68]), "0xa0712d68");
        assert_eq!(decode_data("0xa0712d68").unwrap(), vec![0xa0, 0x71, 0x2d, 0x68]);
        assert!(decode_data("0x").unwrap().is_empty());
        assert!(decode_data("0xabc").is_err());
    }

    #[test]
    fn test_transaction_request_json() {
        let req = TransactionRequest {
            from: "0x01".to_string(),
            to: "0x02".to_string(),
            data: "0x".to_string(),
            value: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "from": "0x01", "to": "0x02", "data": "0x" }));
    }

    #[test]
    fn test_receipt_status() {
        let receipt: TransactionReceipt = serde_json::from_value(serde_json::json!({
            "transactionHash": "0xabc",
            "status": "0x1",
            "blockNumber": "0x10",
            "gasUsed": "0x5208"
        }))
        .unwrap();
        assert!(receipt.succeeded());

        let reverted = TransactionReceipt {
            status: Some("0x0".to_string()),
            ..receipt
        };
        assert!(!reverted.succeeded());
    }
}
