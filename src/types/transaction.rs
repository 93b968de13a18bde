//! Application-call transaction types
//!
//! Plain data; building lives in `crate::transaction` and the wire form in
//! `crate::encoding`.

use super::Address;
use crate::errors::{AppError, AppResult};
use std::fmt;

/// Wire tag for application-call transactions
pub const APPLICATION_CALL_TYPE: &str = "appl";

/// Protocol cap on additional program pages for a created application
pub const MAX_EXTRA_PROGRAM_PAGES: u32 = 3;

/// 32-byte digest (genesis hash, lease)
pub type Digest = [u8; 32];

/// Action taken by the application call after the program runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnCompletion {
    #[default]
    NoOp,
    OptIn,
    CloseOut,
    ClearState,
    UpdateApplication,
    DeleteApplication,
}

impl OnCompletion {
    pub fn as_u64(self) -> u64 {
        match self {
            OnCompletion::NoOp => 0,
            OnCompletion::OptIn => 1,
            OnCompletion::CloseOut => 2,
            OnCompletion::ClearState => 3,
            OnCompletion::UpdateApplication => 4,
            OnCompletion::DeleteApplication => 5,
        }
    }

    pub fn from_u64(value: u64) -> AppResult<Self> {
        match value {
            0 => Ok(OnCompletion::NoOp),
            1 => Ok(OnCompletion::OptIn),
            2 => Ok(OnCompletion::CloseOut),
            3 => Ok(OnCompletion::ClearState),
            4 => Ok(OnCompletion::UpdateApplication),
            5 => Ok(OnCompletion::DeleteApplication),
            other => Err(AppError::InvalidData(format!(
                "unknown on-completion value {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OnCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OnCompletion::NoOp => "noop",
            OnCompletion::OptIn => "optin",
            OnCompletion::CloseOut => "closeout",
            OnCompletion::ClearState => "clear",
            OnCompletion::UpdateApplication => "update",
            OnCompletion::DeleteApplication => "delete",
        };
        f.write_str(name)
    }
}

/// Storage an application reserves in global or per-account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSchema {
    pub num_uint: u64,
    pub num_byte_slice: u64,
}

impl StateSchema {
    pub fn new(num_uint: u64, num_byte_slice: u64) -> Self {
        Self {
            num_uint,
            num_byte_slice,
        }
    }
}

/// Network parameters a transaction is built against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestedParams {
    /// Micro-algos when `flat_fee`, otherwise micro-algos per byte
    pub fee: u64,
    pub genesis_id: String,
    pub genesis_hash: Option<Digest>,
    pub first_valid: u64,
    pub last_valid: u64,
    pub flat_fee: bool,
}

/// Fields shared by every transaction type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    pub sender: Address,
    pub fee: u64,
    pub first_valid: u64,
    pub last_valid: u64,
    pub note: Vec<u8>,
    pub genesis_id: String,
    pub genesis_hash: Option<Digest>,
    pub lease: Option<Digest>,
    pub rekey_to: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationCallFields {
    pub application_id: u64,
    pub on_completion: OnCompletion,
    pub application_args: Vec<Vec<u8>>,
    pub accounts: Vec<Address>,
    pub foreign_apps: Vec<u64>,
    pub foreign_assets: Vec<u64>,
    pub approval_program: Vec<u8>,
    pub clear_state_program: Vec<u8>,
    pub global_state_schema: StateSchema,
    pub local_state_schema: StateSchema,
    pub extra_program_pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    pub header: Header,
    pub application: ApplicationCallFields,
}

impl Transaction {
    pub fn sender(&self) -> &Address {
        &self.header.sender
    }
}

/// A transaction plus the ed25519 signature authorising it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    pub signature: [u8; 64],
    /// Set when the signing key is not the sender's (rekeyed account)
    pub auth_address: Option<Address>,
}
