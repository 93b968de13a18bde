//! Application-transaction scenario steps
//!
//! [`ApplicationsContext`] carries the state a scenario accumulates between
//! steps: the application id, the last built transaction and its signed
//! bytes. A fresh context is created for every scenario.

use super::args::{parse_app_args, split_accounts, split_uint64};
use super::fixtures::{compare_with_golden, get_suggested_params, load_program};
use crate::client::{AlgodClient, IndexerClient};
use crate::config::DEFAULT_RESOURCES_DIR;
use crate::encoding::{decode_value, map_field};
use crate::errors::{AppError, AppResult};
use crate::transaction::{
    make_application_call_tx, make_application_clear_state_tx, make_application_close_out_tx,
    make_application_create_tx, make_application_create_tx_with_extra_pages,
    make_application_delete_tx, make_application_opt_in_tx, make_application_update_tx,
    CallReferences, HeaderOptions,
};
use crate::types::{Account, Address, OnCompletion, StateSchema, Transaction};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Lifecycle operation named in a build step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppOperation {
    Create,
    Update,
    Call,
    OptIn,
    Clear,
    CloseOut,
    Delete,
}

impl FromStr for AppOperation {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "create" => Ok(AppOperation::Create),
            "update" => Ok(AppOperation::Update),
            "call" => Ok(AppOperation::Call),
            "optin" => Ok(AppOperation::OptIn),
            "clear" => Ok(AppOperation::Clear),
            "closeout" => Ok(AppOperation::CloseOut),
            "delete" => Ok(AppOperation::Delete),
            other => Err(AppError::InvalidData(format!(
                "unknown application operation {:?}",
                other
            ))),
        }
    }
}

/// Raw inputs of the "build an application transaction" step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationTxnSpec {
    pub operation: String,
    pub application_id: u64,
    /// Checksummed address; empty falls back to the scenario account
    pub sender: String,
    /// Program fixture names, relative to the resources directory
    pub approval_program: String,
    pub clear_program: String,
    pub global_bytes: u64,
    pub global_ints: u64,
    pub local_bytes: u64,
    pub local_ints: u64,
    pub app_args: String,
    pub foreign_apps: String,
    pub foreign_assets: String,
    pub app_accounts: String,
    pub fee: u64,
    pub first_valid: u64,
    pub last_valid: u64,
    /// Standard base64
    pub genesis_hash: String,
    pub extra_pages: u32,
}

pub struct ApplicationsContext {
    pub application_id: u64,
    pub tx: Option<Transaction>,
    pub stx: Vec<u8>,
    pub account: Option<Account>,
    /// Base URL of the mock server client steps talk to
    pub mock_url: Option<String>,
    resources_dir: PathBuf,
}

impl Default for ApplicationsContext {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCES_DIR)
    }
}

impl fmt::Debug for ApplicationsContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationsContext")
            .field("application_id", &self.application_id)
            .field("tx", &self.tx.is_some())
            .field("stx_len", &self.stx.len())
            .field("account", &self.account)
            .field("mock_url", &self.mock_url)
            .field("resources_dir", &self.resources_dir)
            .finish()
    }
}

impl ApplicationsContext {
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            application_id: 0,
            tx: None,
            stx: Vec::new(),
            account: None,
            mock_url: None,
            resources_dir: resources_dir.into(),
        }
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    pub fn use_account_seed_hex(&mut self, seed_hex: &str) -> AppResult<Address> {
        let account = Account::from_seed_hex(seed_hex)?;
        let address = account.address();
        self.account = Some(account);
        Ok(address)
    }

    fn sender(&self, sender: &str) -> AppResult<Address> {
        if !sender.is_empty() {
            return sender.parse();
        }
        self.account.as_ref().map(Account::address).ok_or_else(|| {
            AppError::Config("no sender given and no scenario account configured".to_string())
        })
    }

    /// Build the transaction described by `spec` and keep it for later steps
    ///
    /// Any transaction or signature from an earlier step is discarded first,
    /// so a failed build leaves nothing to sign.
    pub fn build_application_transaction(&mut self, spec: &ApplicationTxnSpec) -> AppResult<()> {
        self.tx = None;
        self.stx.clear();
        self.application_id = spec.application_id;

        let approval = load_program(&self.resources_dir, &spec.approval_program)?;
        let clear = load_program(&self.resources_dir, &spec.clear_program)?;
        let refs = CallReferences {
            args: parse_app_args(&spec.app_args)?,
            accounts: split_accounts(&spec.app_accounts),
            foreign_apps: split_uint64(&spec.foreign_apps)?,
            foreign_assets: split_uint64(&spec.foreign_assets)?,
        };
        let global_schema = StateSchema::new(spec.global_ints, spec.global_bytes);
        let local_schema = StateSchema::new(spec.local_ints, spec.local_bytes);
        let params = get_suggested_params(
            spec.fee,
            spec.first_valid,
            spec.last_valid,
            "",
            &spec.genesis_hash,
            true,
        )?;
        let sender = self.sender(&spec.sender)?;
        let app_id = self.application_id;
        let options = HeaderOptions::default();

        let tx = match spec.operation.parse::<AppOperation>()? {
            AppOperation::Create if spec.extra_pages > 0 => {
                make_application_create_tx_with_extra_pages(
                    OnCompletion::NoOp,
                    &approval,
                    &clear,
                    global_schema,
                    local_schema,
                    refs,
                    params,
                    sender,
                    options,
                    spec.extra_pages,
                )?
            }
            AppOperation::Create => make_application_create_tx(
                OnCompletion::NoOp,
                &approval,
                &clear,
                global_schema,
                local_schema,
                refs,
                params,
                sender,
                options,
            )?,
            AppOperation::Update => make_application_update_tx(
                app_id,
                refs,
                &approval,
                &clear,
                params,
                sender,
                options,
            )?,
            AppOperation::Call => make_application_call_tx(
                app_id,
                refs,
                OnCompletion::NoOp,
                &approval,
                &clear,
                global_schema,
                local_schema,
                params,
                sender,
                options,
            )?,
            AppOperation::OptIn => {
                make_application_opt_in_tx(app_id, refs, params, sender, options)?
            }
            AppOperation::Clear => {
                make_application_clear_state_tx(app_id, refs, params, sender, options)?
            }
            AppOperation::CloseOut => {
                make_application_close_out_tx(app_id, refs, params, sender, options)?
            }
            AppOperation::Delete => {
                make_application_delete_tx(app_id, refs, params, sender, options)?
            }
        };

        info!(
            "Built {} transaction ({}) for application {}",
            spec.operation, tx.application.on_completion, app_id
        );
        self.tx = Some(tx);
        Ok(())
    }

    /// Sign the last built transaction with the scenario account into `stx`
    pub fn sign_transaction(&mut self) -> AppResult<()> {
        let tx = self
            .tx
            .as_ref()
            .ok_or_else(|| AppError::Config("no transaction has been built".to_string()))?;
        let account = self
            .account
            .as_ref()
            .ok_or_else(|| AppError::Config("no scenario account configured".to_string()))?;

        self.stx = account.sign_and_encode(tx)?;
        debug!("Signed transaction is {} bytes", self.stx.len());
        Ok(())
    }

    fn stx_has_fee(&self) -> AppResult<bool> {
        let value = decode_value(&self.stx)
            .map_err(|e| AppError::Encoding(format!("Error while decoding txn. {}", e)))?;
        let txn = map_field(&value, "txn").ok_or_else(|| {
            AppError::Encoding("Error while decoding txn. no txn field".to_string())
        })?;
        if txn.as_map().is_none() {
            return Err(AppError::Encoding(
                "Error while decoding txn. txn is not a map".to_string(),
            ));
        }
        Ok(map_field(txn, "fee").is_some())
    }

    pub fn fee_field_is_in_txn(&self) -> AppResult<()> {
        if !self.stx_has_fee()? {
            return Err(AppError::Assertion("fee field missing".to_string()));
        }
        Ok(())
    }

    pub fn fee_field_not_in_txn(&self) -> AppResult<()> {
        if self.stx_has_fee()? {
            return Err(AppError::Assertion(
                "fee field found but it should have been omitted".to_string(),
            ));
        }
        Ok(())
    }

    pub fn the_base64_encoded_signed_transaction_should_equal(
        &self,
        golden: &str,
    ) -> AppResult<()> {
        compare_with_golden(&self.stx, golden, "Application signed transaction")
    }

    fn mock_url(&self) -> AppResult<&str> {
        self.mock_url
            .as_deref()
            .ok_or_else(|| AppError::Config("mock server is not running".to_string()))
    }

    // The client steps only drive the request; scenarios assert on what the
    // mock server received, so call outcomes are logged and dropped.

    pub async fn we_make_a_get_asset_by_id_call(&self, asset_id: u64) -> AppResult<()> {
        let client = AlgodClient::new(self.mock_url()?, "")?;
        if let Err(e) = client.get_asset_by_id(asset_id).await {
            warn!("GetAssetByID({}) failed: {}", asset_id, e);
        }
        Ok(())
    }

    pub async fn we_make_a_get_application_by_id_call(&self, application_id: u64) -> AppResult<()> {
        let client = AlgodClient::new(self.mock_url()?, "")?;
        if let Err(e) = client.get_application_by_id(application_id).await {
            warn!("GetApplicationByID({}) failed: {}", application_id, e);
        }
        Ok(())
    }

    pub async fn we_make_a_search_for_applications_call(
        &self,
        application_id: u64,
    ) -> AppResult<()> {
        let client = IndexerClient::new(self.mock_url()?, "")?;
        if let Err(e) = client
            .search_for_applications()
            .application_id(application_id)
            .send()
            .await
        {
            warn!("SearchForApplications({}) failed: {}", application_id, e);
        }
        Ok(())
    }

    pub async fn we_make_a_lookup_applications_call(&self, application_id: u64) -> AppResult<()> {
        let client = IndexerClient::new(self.mock_url()?, "")?;
        if let Err(e) = client.lookup_application_by_id(application_id).await {
            warn!("LookupApplicationByID({}) failed: {}", application_id, e);
        }
        Ok(())
    }
}
