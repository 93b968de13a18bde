//! Fee calculation
//!
//! Flat fees are copied verbatim (a zero flat fee stays zero and is dropped on
//! the wire). Per-byte fees are multiplied by the estimated signed size and
//! raised to the network minimum.

use crate::encoding::encode_signed_transaction;
use crate::errors::AppResult;
use crate::types::{SignedTransaction, SuggestedParams, Transaction};
use tracing::debug;

/// Network minimum fee in micro-algos
pub const MIN_TXN_FEE: u64 = 1000;

/// Encoded size of the transaction once wrapped with a signature
///
/// Sizes the `sig`/`txn` envelope around the transaction as it stands
/// (normally with `fee` still zero). The Go SDK instead encodes the bare
/// transaction with the per-byte rate already in `fee` and adds 64, so the
/// two estimates differ by the envelope keys and the fee field's width.
/// Per-byte fees derived from them differ by that many bytes times the rate.
pub fn estimate_size(tx: &Transaction) -> AppResult<u64> {
    let envelope = SignedTransaction {
        transaction: tx.clone(),
        signature: [0u8; 64],
        auth_address: None,
    };
    Ok(encode_signed_transaction(&envelope)?.len() as u64)
}

pub fn apply_fee(tx: &mut Transaction, params: &SuggestedParams) -> AppResult<()> {
    if params.flat_fee {
        tx.header.fee = params.fee;
        return Ok(());
    }

    let size = estimate_size(tx)?;
    let fee = params.fee.saturating_mul(size).max(MIN_TXN_FEE);
    debug!(
        "Per-byte fee {} x {} bytes -> {} micro-algos",
        params.fee, size, fee
    );
    tx.header.fee = fee;
    Ok(())
}
