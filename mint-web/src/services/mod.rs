//! Services talking to the outside world: the injected wallet and the contract

pub mod contract;
pub mod ethereum;
