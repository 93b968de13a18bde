//! Ledger addresses
//!
//! An address is a 32-byte ed25519 public key. Its text form is the unpadded
//! base32 encoding of the key followed by a 4-byte checksum (the tail of the
//! key's SHA-512/256 digest), giving 58 characters.

use crate::errors::{AppError, AppResult};
use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};
use std::fmt;
use std::str::FromStr;

pub const ADDRESS_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 4;
pub const ADDRESS_TEXT_LEN: usize = 58;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> AppResult<Self> {
        let raw: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            AppError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }

    fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let digest = Sha512_256::digest(self.0);
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
        out
    }

    pub fn encode(&self) -> String {
        let mut buf = Vec::with_capacity(ADDRESS_LEN + CHECKSUM_LEN);
        buf.extend_from_slice(&self.0);
        buf.extend_from_slice(&self.checksum());
        BASE32_NOPAD.encode(&buf)
    }
}

impl FromStr for Address {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s.len() != ADDRESS_TEXT_LEN {
            return Err(AppError::InvalidAddress(format!(
                "{} has length {}, expected {}",
                s,
                s.len(),
                ADDRESS_TEXT_LEN
            )));
        }

        let decoded = BASE32_NOPAD
            .decode(s.as_bytes())
            .map_err(|e| AppError::InvalidAddress(format!("{}: {}", s, e)))?;
        if decoded.len() != ADDRESS_LEN + CHECKSUM_LEN {
            return Err(AppError::InvalidAddress(format!(
                "{} decodes to {} bytes",
                s,
                decoded.len()
            )));
        }

        let address = Self::from_slice(&decoded[..ADDRESS_LEN])?;
        if decoded[ADDRESS_LEN..] != address.checksum() {
            return Err(AppError::InvalidAddress(format!("{}: checksum mismatch", s)));
        }
        Ok(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encode())
    }
}
