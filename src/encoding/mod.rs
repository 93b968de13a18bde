//! Wire encoding for transactions
//!
//! - **msgpack** - canonical msgpack encode/decode built on `rmpv`
//! - **json** - rendering of decoded msgpack values for inspection
//! - transaction ids derived from the canonical bytes

pub mod json;
pub mod msgpack;

pub use json::value_to_json;
pub use msgpack::{
    bytes_to_sign, decode_signed_transaction, decode_value, encode_signed_transaction,
    encode_transaction, map_field, TX_TAG,
};

use crate::errors::AppResult;
use crate::types::Transaction;
use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

/// Transaction id: base32 (unpadded) of SHA-512/256 over the tagged encoding
pub fn transaction_id(tx: &Transaction) -> AppResult<String> {
    let digest = Sha512_256::digest(bytes_to_sign(tx)?);
    Ok(BASE32_NOPAD.encode(&digest))
}
