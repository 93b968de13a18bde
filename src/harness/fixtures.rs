//! Fixture loading and golden comparison

use crate::errors::{AppError, AppResult};
use crate::types::{Digest, SuggestedParams};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read a program fixture relative to the resources directory; an empty name means no program
pub fn load_program(resources_dir: &Path, name: &str) -> AppResult<Vec<u8>> {
    if name.is_empty() {
        return Ok(Vec::new());
    }

    let path = resources_dir.join(name);
    let bytes = fs::read(&path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read program {}: {}", path.display(), e),
        ))
    })?;
    debug!("Loaded program {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

/// Suggested params from step inputs; the genesis hash is standard base64 (empty for none)
pub fn get_suggested_params(
    fee: u64,
    first_valid: u64,
    last_valid: u64,
    genesis_id: &str,
    genesis_hash_b64: &str,
    flat_fee: bool,
) -> AppResult<SuggestedParams> {
    let raw = STANDARD.decode(genesis_hash_b64)?;
    let genesis_hash = if raw.is_empty() {
        None
    } else {
        let digest: Digest = raw.as_slice().try_into().map_err(|_| {
            AppError::InvalidData(format!("genesis hash must be 32 bytes, got {}", raw.len()))
        })?;
        Some(digest)
    };

    Ok(SuggestedParams {
        fee,
        genesis_id: genesis_id.to_string(),
        genesis_hash,
        first_valid,
        last_valid,
        flat_fee,
    })
}

/// Compare bytes with a base64 golden; the error shows both sides in base64
pub fn compare_with_golden(actual: &[u8], golden_b64: &str, what: &str) -> AppResult<()> {
    let golden = STANDARD.decode(golden_b64)?;
    if golden != actual {
        return Err(AppError::Assertion(format!(
            "{} does not match the golden: {} != {}",
            what,
            STANDARD.encode(actual),
            golden_b64
        )));
    }
    Ok(())
}
