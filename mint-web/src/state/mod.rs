//! Application state

pub mod actions;
pub mod dapp;
