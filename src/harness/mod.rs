//! Scenario step implementations
//!
//! The cucumber runner under `tests/` registers step texts and forwards to
//! the functions here, so every step is an ordinary fallible call that unit
//! tests can drive directly.
//!
//! - **applications** - application-transaction and client-call steps
//! - **args** - argument-list parsing used by the build step
//! - **fixtures** - program loading, suggested params, golden comparison

pub mod applications;
pub mod args;
pub mod fixtures;

pub use applications::{AppOperation, ApplicationTxnSpec, ApplicationsContext};
pub use args::{parse_app_args, split_accounts, split_uint64};
pub use fixtures::{compare_with_golden, get_suggested_params, load_program};
