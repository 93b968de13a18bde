//! Ledger value types
//!
//! - `address`: 32-byte account addresses and their checksummed text form
//! - `transaction`: application-call transaction, schemas, suggested params
//! - `account`: in-memory ed25519 signing accounts

mod account;
mod address;
mod transaction;

pub use account::Account;
pub use address::{Address, ADDRESS_LEN, ADDRESS_TEXT_LEN};
pub use transaction::*;
