use crate::config::HarnessConfig;
use crate::encoding::{encode_transaction, transaction_id};
use crate::errors::{AppError, AppResult};
use crate::harness::{ApplicationTxnSpec, ApplicationsContext};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Build an application transaction from the same inputs the scenario step takes
#[derive(Args)]
pub struct BuildAppCommand {
    /// create, update, call, optin, clear, closeout or delete
    #[arg(long)]
    pub operation: String,

    #[arg(long, default_value_t = 0)]
    pub app_id: u64,

    /// Sender address (defaults to the signing account)
    #[arg(long, default_value = "")]
    pub sender: String,

    /// Approval program file, relative to the resources directory
    #[arg(long, default_value = "")]
    pub approval: String,

    /// Clear-state program file, relative to the resources directory
    #[arg(long, default_value = "")]
    pub clear: String,

    #[arg(long, default_value_t = 0)]
    pub global_bytes: u64,

    #[arg(long, default_value_t = 0)]
    pub global_ints: u64,

    #[arg(long, default_value_t = 0)]
    pub local_bytes: u64,

    #[arg(long, default_value_t = 0)]
    pub local_ints: u64,

    /// Comma-separated `str:`, `int:`, `addr:` or `b64:` arguments
    #[arg(long, default_value = "")]
    pub app_args: String,

    #[arg(long, default_value = "")]
    pub foreign_apps: String,

    #[arg(long, default_value = "")]
    pub foreign_assets: String,

    #[arg(long, default_value = "")]
    pub accounts: String,

    /// Flat fee in micro-algos
    #[arg(long, default_value_t = 1000)]
    pub fee: u64,

    #[arg(long)]
    pub first_valid: u64,

    #[arg(long)]
    pub last_valid: u64,

    /// Base64 genesis hash
    #[arg(long, default_value = "")]
    pub genesis_hash: String,

    #[arg(long, default_value_t = 0)]
    pub extra_pages: u32,

    /// Resources directory (overrides harness.toml)
    #[arg(long)]
    pub resources: Option<PathBuf>,

    /// Hex ed25519 seed (overrides harness.toml)
    #[arg(long)]
    pub seed_hex: Option<String>,

    /// Print the signed envelope instead of the bare transaction
    #[arg(long)]
    pub sign: bool,
}

impl BuildAppCommand {
    fn spec(&self) -> ApplicationTxnSpec {
        ApplicationTxnSpec {
            operation: self.operation.clone(),
            application_id: self.app_id,
            sender: self.sender.clone(),
            approval_program: self.approval.clone(),
            clear_program: self.clear.clone(),
            global_bytes: self.global_bytes,
            global_ints: self.global_ints,
            local_bytes: self.local_bytes,
            local_ints: self.local_ints,
            app_args: self.app_args.clone(),
            foreign_apps: self.foreign_apps.clone(),
            foreign_assets: self.foreign_assets.clone(),
            app_accounts: self.accounts.clone(),
            fee: self.fee,
            first_valid: self.first_valid,
            last_valid: self.last_valid,
            genesis_hash: self.genesis_hash.clone(),
            extra_pages: self.extra_pages,
        }
    }

    pub fn run(&self) -> AppResult<()> {
        print!("{}", self.render(&HarnessConfig::get_defaults())?);
        Ok(())
    }

    /// Build (and with `--sign`, sign) the transaction; returns the txid line
    /// followed by the base64 encoding
    pub fn render(&self, config: &HarnessConfig) -> AppResult<String> {
        let resources = self
            .resources
            .clone()
            .unwrap_or_else(|| config.paths.resources.clone());
        let mut ctx = ApplicationsContext::new(resources);

        if let Some(seed) = self.seed_hex.as_ref().or(config.signer.seed_hex.as_ref()) {
            let address = ctx.use_account_seed_hex(seed)?;
            info!("Signing account {}", address);
        } else if self.sign {
            return Err(AppError::Config(
                "--sign needs --seed-hex or signer.seed_hex in harness.toml".to_string(),
            ));
        }

        ctx.build_application_transaction(&self.spec())?;
        let tx = ctx
            .tx
            .as_ref()
            .ok_or_else(|| AppError::Transaction("no transaction was built".to_string()))?;
        let txid = transaction_id(tx)?;

        let encoded = if self.sign {
            ctx.sign_transaction()?;
            format!("signed: {}", STANDARD.encode(&ctx.stx))
        } else {
            format!("unsigned: {}", STANDARD.encode(encode_transaction(tx)?))
        };
        Ok(format!("txid: {}\n{}\n", txid, encoded))
    }
}
