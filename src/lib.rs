//! Application-transaction builders, algod/indexer clients and the
//! behaviour-driven harness that checks them against golden fixtures
//!

pub mod cli;
pub mod client;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod harness;
pub mod transaction;
pub mod types;
