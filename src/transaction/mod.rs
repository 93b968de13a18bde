//! Transaction construction
//!
//! - **application** - builders for every application-call lifecycle operation
//! - **fee** - flat and per-byte fee rules
//! - **sign** - ed25519 signing into the canonical signed envelope

pub mod application;
pub mod fee;
mod sign;

pub use application::{
    make_application_call_tx, make_application_clear_state_tx, make_application_close_out_tx,
    make_application_create_tx, make_application_create_tx_with_extra_pages,
    make_application_delete_tx, make_application_opt_in_tx, make_application_update_tx,
    ApplicationCallBuilder, CallReferences, HeaderOptions,
};
pub use fee::{apply_fee, estimate_size, MIN_TXN_FEE};
