use crate::encoding::{bytes_to_sign, encode_signed_transaction};
use crate::errors::AppResult;
use crate::types::{Account, SignedTransaction, Transaction};
use tracing::debug;

impl Account {
    /// Sign `"TX" || encode(tx)`; records the signer as `sgnr` when it is not the sender
    pub fn sign_transaction(&self, tx: &Transaction) -> AppResult<SignedTransaction> {
        let signature = self.sign_bytes(&bytes_to_sign(tx)?);
        let auth_address = (self.address() != *tx.sender()).then(|| self.address());
        if let Some(auth) = &auth_address {
            debug!("Signing for {} with rekeyed key {}", tx.sender(), auth);
        }

        Ok(SignedTransaction {
            transaction: tx.clone(),
            signature,
            auth_address,
        })
    }

    /// Sign and return the canonical signed-envelope bytes
    pub fn sign_and_encode(&self, tx: &Transaction) -> AppResult<Vec<u8>> {
        encode_signed_transaction(&self.sign_transaction(tx)?)
    }
}
