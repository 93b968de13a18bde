//! Response bodies for the algod and indexer endpoints the harness touches
//!
//! Field names follow the REST API's kebab-case; everything is defaulted so
//! partial fixtures still deserialise.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Asset {
    pub index: u64,
    pub params: AssetParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssetParams {
    pub creator: String,
    pub decimals: u64,
    pub total: u64,
    pub default_frozen: Option<bool>,
    pub name: Option<String>,
    pub unit_name: Option<String>,
    pub url: Option<String>,
    pub metadata_hash: Option<String>,
    pub manager: Option<String>,
    pub reserve: Option<String>,
    pub freeze: Option<String>,
    pub clawback: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Application {
    pub id: u64,
    pub params: ApplicationParams,
    pub deleted: Option<bool>,
    pub created_at_round: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApplicationParams {
    pub creator: String,
    /// base64
    pub approval_program: String,
    /// base64
    pub clear_state_program: String,
    pub extra_program_pages: Option<u64>,
    pub global_state_schema: Option<ApplicationStateSchema>,
    pub local_state_schema: Option<ApplicationStateSchema>,
    pub global_state: Vec<TealKeyValue>,
}

impl ApplicationParams {
    pub fn approval_program_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.approval_program)
    }

    pub fn clear_state_program_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.clear_state_program)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApplicationStateSchema {
    pub num_uint: u64,
    pub num_byte_slice: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TealKeyValue {
    pub key: String,
    pub value: TealValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TealValue {
    /// 1 = bytes, 2 = uint
    #[serde(rename = "type")]
    pub kind: u64,
    pub bytes: String,
    pub uint: u64,
}

/// Indexer `GET /v2/applications`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
    pub current_round: u64,
    pub next_token: Option<String>,
}

/// Indexer `GET /v2/applications/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApplicationResponse {
    pub application: Option<Application>,
    pub current_round: u64,
}
