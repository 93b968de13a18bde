//! Local signing accounts

use super::Address;
use crate::errors::{AppError, AppResult};
use ed25519_dalek::{Signer, SigningKey};
use std::fmt;

/// ed25519 key pair held in memory for signing transactions
#[derive(Clone)]
pub struct Account {
    signing_key: SigningKey,
    address: Address,
}

impl Account {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let address = Address::new(signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            address,
        }
    }

    /// Build an account from a hex-encoded 32-byte seed
    pub fn from_seed_hex(seed_hex: &str) -> AppResult<Self> {
        let bytes = hex::decode(seed_hex.trim())
            .map_err(|e| AppError::InvalidData(format!("seed is not hex: {}", e)))?;
        let seed: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            AppError::InvalidData(format!("seed must be 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self::from_seed(seed))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn sign_bytes(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
