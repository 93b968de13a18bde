//! Parsing of the comma-separated argument strings used in scenario steps

use crate::errors::{AppError, AppResult};
use crate::types::Address;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Parse `kind:value` application arguments separated by commas
///
/// Supported kinds:
/// - `str` - UTF-8 bytes of the value
/// - `int` - 8-byte big-endian unsigned integer
/// - `addr` - 32 raw bytes of a checksummed address
/// - `b64` - standard base64
///
/// An empty string yields no arguments.
pub fn parse_app_args(app_args: &str) -> AppResult<Vec<Vec<u8>>> {
    if app_args.is_empty() {
        return Ok(Vec::new());
    }

    app_args
        .split(',')
        .map(|arg| {
            let (kind, value) = arg.split_once(':').ok_or_else(|| {
                AppError::InvalidData(format!("application argument {:?} has no type prefix", arg))
            })?;
            match kind {
                "str" => Ok(value.as_bytes().to_vec()),
                "int" => Ok(value.parse::<u64>()?.to_be_bytes().to_vec()),
                "addr" => Ok(value.parse::<Address>()?.as_bytes().to_vec()),
                "b64" => Ok(STANDARD.decode(value)?),
                other => Err(AppError::InvalidData(format!(
                    "Applications doesn't currently support argument of type {}",
                    other
                ))),
            }
        })
        .collect()
}

/// Split a comma-separated list of unsigned integers; empty input yields an empty list
pub fn split_uint64(values: &str) -> AppResult<Vec<u64>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    values
        .split(',')
        .map(|v| v.trim().parse::<u64>().map_err(AppError::from))
        .collect()
}

/// Split comma-separated account addresses; empty input yields no accounts
pub fn split_accounts(accounts: &str) -> Vec<String> {
    if accounts.is_empty() {
        return Vec::new();
    }
    accounts.split(',').map(str::to_string).collect()
}
