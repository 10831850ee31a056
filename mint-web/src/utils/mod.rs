//! Utility modules

pub mod config;
pub mod constants;
