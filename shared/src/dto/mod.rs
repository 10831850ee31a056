//! # Data Transfer Objects (DTOs)
//!
//! Shapes exchanged with the injected wallet provider over EIP-1193
//! `request({ method, params })`.
//!
//! ## Module Organization
//!
//! - [`rpc`] - Ethereum JSON-RPC call/transaction requests and receipts
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, as the JSON-RPC API expects
//! - **Quantities**: `0x`-prefixed hex strings without leading zeros
//! - **Optional fields**: Omitted when `None`
//!
//! ## Example
//!
//! ```text
//! eth_sendTransaction
//! [{
//!   "from": "0x5b38da6a701c568545dcfcb03fcb875f56beddc4",
//!   "to": "0xd9145cce52d386f254917e481eb44e9943f39138",
//!   "data": "0xa0712d680000...0002",
//!   "value": "0x470de4df820000"
//! }]
//! ```

pub mod rpc;

pub use rpc::*;
