//! Application-call transaction construction
//!
//! [`ApplicationCallBuilder`] assembles every variant; the `make_application_*`
//! functions are thin entry points for each lifecycle operation.

use super::fee::apply_fee;
use crate::errors::{AppError, AppResult};
use crate::types::{
    Address, ApplicationCallFields, Digest, Header, OnCompletion, StateSchema, SuggestedParams,
    Transaction, MAX_EXTRA_PROGRAM_PAGES,
};
use tracing::debug;

/// Arguments and foreign references any application call may carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallReferences {
    pub args: Vec<Vec<u8>>,
    /// Account addresses in their text form
    pub accounts: Vec<String>,
    pub foreign_apps: Vec<u64>,
    pub foreign_assets: Vec<u64>,
}

/// Optional header fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    pub note: Vec<u8>,
    pub lease: Option<Digest>,
    pub rekey_to: Option<Address>,
}

#[derive(Debug, Clone)]
pub struct ApplicationCallBuilder {
    params: SuggestedParams,
    sender: Address,
    fields: ApplicationCallFields,
    accounts: Vec<String>,
    options: HeaderOptions,
}

impl ApplicationCallBuilder {
    pub fn new(params: SuggestedParams, sender: Address) -> Self {
        Self {
            params,
            sender,
            fields: ApplicationCallFields::default(),
            accounts: Vec::new(),
            options: HeaderOptions::default(),
        }
    }

    pub fn application_id(mut self, application_id: u64) -> Self {
        self.fields.application_id = application_id;
        self
    }

    pub fn on_completion(mut self, on_completion: OnCompletion) -> Self {
        self.fields.on_completion = on_completion;
        self
    }

    pub fn references(mut self, refs: CallReferences) -> Self {
        self.fields.application_args = refs.args;
        self.fields.foreign_apps = refs.foreign_apps;
        self.fields.foreign_assets = refs.foreign_assets;
        self.accounts = refs.accounts;
        self
    }

    pub fn programs(mut self, approval: &[u8], clear: &[u8]) -> Self {
        self.fields.approval_program = approval.to_vec();
        self.fields.clear_state_program = clear.to_vec();
        self
    }

    pub fn schemas(mut self, global: StateSchema, local: StateSchema) -> Self {
        self.fields.global_state_schema = global;
        self.fields.local_state_schema = local;
        self
    }

    pub fn extra_program_pages(mut self, pages: u32) -> Self {
        self.fields.extra_program_pages = pages;
        self
    }

    pub fn options(mut self, options: HeaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> AppResult<Transaction> {
        let Self {
            params,
            sender,
            mut fields,
            accounts,
            options,
        } = self;

        if fields.extra_program_pages > MAX_EXTRA_PROGRAM_PAGES {
            return Err(AppError::Transaction(format!(
                "extra program pages {} exceeds maximum {}",
                fields.extra_program_pages, MAX_EXTRA_PROGRAM_PAGES
            )));
        }
        if fields.extra_program_pages > 0 && fields.application_id != 0 {
            return Err(AppError::Transaction(
                "extra program pages can only be set when creating an application".to_string(),
            ));
        }

        fields.accounts = accounts
            .iter()
            .map(|a| a.parse::<Address>())
            .collect::<AppResult<Vec<_>>>()?;

        let mut tx = Transaction {
            header: Header {
                sender,
                fee: 0,
                first_valid: params.first_valid,
                last_valid: params.last_valid,
                note: options.note,
                genesis_id: params.genesis_id.clone(),
                genesis_hash: params.genesis_hash,
                lease: options.lease,
                rekey_to: options.rekey_to,
            },
            application: fields,
        };
        apply_fee(&mut tx, &params)?;

        debug!(
            "Built application call: app {} on-completion {} fee {}",
            tx.application.application_id, tx.application.on_completion, tx.header.fee
        );
        Ok(tx)
    }
}

/// Create a new application
#[allow(clippy::too_many_arguments)]
pub fn make_application_create_tx(
    on_complete: OnCompletion,
    approval_program: &[u8],
    clear_program: &[u8],
    global_schema: StateSchema,
    local_schema: StateSchema,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    make_application_create_tx_with_extra_pages(
        on_complete,
        approval_program,
        clear_program,
        global_schema,
        local_schema,
        refs,
        params,
        sender,
        options,
        0,
    )
}

/// Create a new application whose programs may span additional pages
#[allow(clippy::too_many_arguments)]
pub fn make_application_create_tx_with_extra_pages(
    on_complete: OnCompletion,
    approval_program: &[u8],
    clear_program: &[u8],
    global_schema: StateSchema,
    local_schema: StateSchema,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
    extra_pages: u32,
) -> AppResult<Transaction> {
    ApplicationCallBuilder::new(params, sender)
        .on_completion(on_complete)
        .programs(approval_program, clear_program)
        .schemas(global_schema, local_schema)
        .references(refs)
        .extra_program_pages(extra_pages)
        .options(options)
        .build()
}

/// Replace an existing application's programs
#[allow(clippy::too_many_arguments)]
pub fn make_application_update_tx(
    application_id: u64,
    refs: CallReferences,
    approval_program: &[u8],
    clear_program: &[u8],
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    ApplicationCallBuilder::new(params, sender)
        .application_id(application_id)
        .on_completion(OnCompletion::UpdateApplication)
        .programs(approval_program, clear_program)
        .references(refs)
        .options(options)
        .build()
}

/// Generic application call; programs and schemas are carried as given
#[allow(clippy::too_many_arguments)]
pub fn make_application_call_tx(
    application_id: u64,
    refs: CallReferences,
    on_complete: OnCompletion,
    approval_program: &[u8],
    clear_program: &[u8],
    global_schema: StateSchema,
    local_schema: StateSchema,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    ApplicationCallBuilder::new(params, sender)
        .application_id(application_id)
        .on_completion(on_complete)
        .programs(approval_program, clear_program)
        .schemas(global_schema, local_schema)
        .references(refs)
        .options(options)
        .build()
}

fn lifecycle_call(
    on_complete: OnCompletion,
    application_id: u64,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    ApplicationCallBuilder::new(params, sender)
        .application_id(application_id)
        .on_completion(on_complete)
        .references(refs)
        .options(options)
        .build()
}

/// Opt the sender into an application's local state
pub fn make_application_opt_in_tx(
    application_id: u64,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    lifecycle_call(OnCompletion::OptIn, application_id, refs, params, sender, options)
}

/// Clear the sender's local state regardless of the approval program
pub fn make_application_clear_state_tx(
    application_id: u64,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    lifecycle_call(
        OnCompletion::ClearState,
        application_id,
        refs,
        params,
        sender,
        options,
    )
}

/// Close out the sender's local state with the approval program's consent
pub fn make_application_close_out_tx(
    application_id: u64,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    lifecycle_call(
        OnCompletion::CloseOut,
        application_id,
        refs,
        params,
        sender,
        options,
    )
}

pub fn make_application_delete_tx(
    application_id: u64,
    refs: CallReferences,
    params: SuggestedParams,
    sender: Address,
    options: HeaderOptions,
) -> AppResult<Transaction> {
    lifecycle_call(
        OnCompletion::DeleteApplication,
        application_id,
        refs,
        params,
        sender,
        options,
    )
}
