use crate::encoding::{decode_signed_transaction, decode_value, transaction_id, value_to_json};
use crate::errors::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Decode a base64 msgpack transaction into JSON
#[derive(Args)]
pub struct DecodeCommand {
    /// Base64 msgpack (signed envelope or bare transaction)
    pub input: Option<String>,

    /// Read the base64 text from a file instead
    #[arg(long, conflicts_with = "input")]
    pub file: Option<PathBuf>,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Pretty JSON of the decoded value, plus a txid line when the input is a
    /// signed application call
    pub fn render(&self) -> AppResult<String> {
        let text = match (&self.input, &self.file) {
            (Some(input), _) => input.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                return Err(AppError::Config(
                    "provide base64 input or --file".to_string(),
                ))
            }
        };

        let bytes = STANDARD.decode(text.trim())?;
        let value = decode_value(&bytes)?;
        let mut out = serde_json::to_string_pretty(&value_to_json(&value))?;
        out.push('\n');

        match decode_signed_transaction(&bytes) {
            Ok(stx) => {
                let txid = transaction_id(&stx.transaction)?;
                out.push_str(&format!("txid: {}\n", txid));
            }
            Err(e) => debug!("Not a signed application call: {}", e),
        }
        Ok(out)
    }
}
