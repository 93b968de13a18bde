//! Canonical msgpack form of transactions
//!
//! Maps are written with keys in bytewise order and zero-valued fields left
//! out, so equal transactions always produce identical bytes. Byte strings go
//! on the wire as `bin`, text as `str`.

use crate::errors::{AppError, AppResult};
use crate::types::{
    Address, ApplicationCallFields, Digest, Header, OnCompletion, SignedTransaction, StateSchema,
    Transaction, APPLICATION_CALL_TYPE,
};
use rmpv::Value;

/// Domain separator prepended to an encoded transaction before signing/hashing
pub const TX_TAG: &[u8] = b"TX";

/// Builder for a map value that drops zero fields and sorts its keys
#[derive(Debug, Default)]
struct CanonicalMap {
    entries: Vec<(&'static str, Value)>,
}

impl CanonicalMap {
    fn uint(&mut self, key: &'static str, value: u64) {
        if value != 0 {
            self.entries.push((key, Value::from(value)));
        }
    }

    fn bytes(&mut self, key: &'static str, value: &[u8]) {
        if !value.is_empty() {
            self.entries.push((key, Value::Binary(value.to_vec())));
        }
    }

    fn string(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.entries.push((key, Value::from(value)));
        }
    }

    fn address(&mut self, key: &'static str, value: Option<&Address>) {
        if let Some(address) = value.filter(|a| !a.is_zero()) {
            self.bytes(key, address.as_bytes());
        }
    }

    fn digest(&mut self, key: &'static str, value: Option<&Digest>) {
        if let Some(digest) = value.filter(|d| d.iter().any(|b| *b != 0)) {
            self.bytes(key, digest);
        }
    }

    fn array(&mut self, key: &'static str, items: Vec<Value>) {
        if !items.is_empty() {
            self.entries.push((key, Value::Array(items)));
        }
    }

    fn map(&mut self, key: &'static str, inner: CanonicalMap) {
        if !inner.entries.is_empty() {
            self.entries.push((key, inner.into_value()));
        }
    }

    fn into_value(mut self) -> Value {
        self.entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        Value::Map(
            self.entries
                .into_iter()
                .map(|(k, v)| (Value::from(k), v))
                .collect(),
        )
    }
}

fn schema_map(schema: &StateSchema) -> CanonicalMap {
    let mut map = CanonicalMap::default();
    map.uint("nui", schema.num_uint);
    map.uint("nbs", schema.num_byte_slice);
    map
}

/// Dynamic value of a transaction in canonical form
pub fn transaction_value(tx: &Transaction) -> Value {
    let header = &tx.header;
    let app = &tx.application;
    let mut map = CanonicalMap::default();

    map.uint("fee", header.fee);
    map.uint("fv", header.first_valid);
    map.uint("lv", header.last_valid);
    map.bytes("note", &header.note);
    map.string("gen", &header.genesis_id);
    map.digest("gh", header.genesis_hash.as_ref());
    map.digest("lx", header.lease.as_ref());
    map.address("rekey", header.rekey_to.as_ref());
    map.address("snd", Some(&header.sender));
    map.string("type", APPLICATION_CALL_TYPE);

    map.uint("apid", app.application_id);
    map.uint("apan", app.on_completion.as_u64());
    map.array(
        "apaa",
        app.application_args
            .iter()
            .map(|arg| Value::Binary(arg.clone()))
            .collect(),
    );
    map.array(
        "apat",
        app.accounts
            .iter()
            .map(|a| Value::Binary(a.as_bytes().to_vec()))
            .collect(),
    );
    map.array(
        "apfa",
        app.foreign_apps.iter().map(|id| Value::from(*id)).collect(),
    );
    map.array(
        "apas",
        app.foreign_assets.iter().map(|id| Value::from(*id)).collect(),
    );
    map.bytes("apap", &app.approval_program);
    map.bytes("apsu", &app.clear_state_program);
    map.map("apgs", schema_map(&app.global_state_schema));
    map.map("apls", schema_map(&app.local_state_schema));
    map.uint("apep", u64::from(app.extra_program_pages));

    map.into_value()
}

/// Dynamic value of a signed transaction envelope in canonical form
pub fn signed_transaction_value(stx: &SignedTransaction) -> Value {
    let mut map = CanonicalMap::default();
    map.bytes("sig", &stx.signature);
    map.address("sgnr", stx.auth_address.as_ref());
    map.entries.push(("txn", transaction_value(&stx.transaction)));
    map.into_value()
}

pub fn write_value(value: &Value) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    rmpv::encode::write_value(&mut buf, value)?;
    Ok(buf)
}

pub fn encode_transaction(tx: &Transaction) -> AppResult<Vec<u8>> {
    write_value(&transaction_value(tx))
}

pub fn encode_signed_transaction(stx: &SignedTransaction) -> AppResult<Vec<u8>> {
    write_value(&signed_transaction_value(stx))
}

/// Bytes covered by the transaction signature
pub fn bytes_to_sign(tx: &Transaction) -> AppResult<Vec<u8>> {
    let mut buf = TX_TAG.to_vec();
    buf.extend(encode_transaction(tx)?);
    Ok(buf)
}

/// Decode any msgpack buffer into a dynamic value
pub fn decode_value(bytes: &[u8]) -> AppResult<Value> {
    let mut reader = bytes;
    let value = rmpv::decode::read_value(&mut reader)?;
    if !reader.is_empty() {
        return Err(AppError::Encoding(format!(
            "{} trailing bytes after msgpack value",
            reader.len()
        )));
    }
    Ok(value)
}

/// Look up a string-keyed entry in a map value
pub fn map_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value
        .as_map()?
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

fn field_u64(map: &Value, key: &str) -> AppResult<u64> {
    match map_field(map, key) {
        None => Ok(0),
        Some(v) => v
            .as_u64()
            .ok_or_else(|| AppError::Encoding(format!("field {} is not an unsigned integer", key))),
    }
}

fn field_bytes(map: &Value, key: &str) -> AppResult<Vec<u8>> {
    match map_field(map, key) {
        None => Ok(Vec::new()),
        Some(Value::Binary(b)) => Ok(b.clone()),
        Some(_) => Err(AppError::Encoding(format!("field {} is not binary", key))),
    }
}

fn field_string(map: &Value, key: &str) -> AppResult<String> {
    match map_field(map, key) {
        None => Ok(String::new()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Encoding(format!("field {} is not a string", key))),
    }
}

fn field_digest(map: &Value, key: &str) -> AppResult<Option<Digest>> {
    let bytes = field_bytes(map, key)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let digest: Digest = bytes
        .as_slice()
        .try_into()
        .map_err(|_| AppError::Encoding(format!("field {} must be 32 bytes", key)))?;
    Ok(Some(digest))
}

fn field_address(map: &Value, key: &str) -> AppResult<Option<Address>> {
    let bytes = field_bytes(map, key)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Address::from_slice(&bytes).map(Some)
}

fn field_array<'a>(map: &'a Value, key: &str) -> AppResult<&'a [Value]> {
    match map_field(map, key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(AppError::Encoding(format!("field {} is not an array", key))),
    }
}

fn field_schema(map: &Value, key: &str) -> AppResult<StateSchema> {
    match map_field(map, key) {
        None => Ok(StateSchema::default()),
        Some(inner) => Ok(StateSchema {
            num_uint: field_u64(inner, "nui")?,
            num_byte_slice: field_u64(inner, "nbs")?,
        }),
    }
}

fn transaction_from_value(map: &Value) -> AppResult<Transaction> {
    let tx_type = field_string(map, "type")?;
    if tx_type != APPLICATION_CALL_TYPE {
        return Err(AppError::Encoding(format!(
            "unsupported transaction type {:?}",
            tx_type
        )));
    }

    let header = Header {
        sender: field_address(map, "snd")?.unwrap_or_default(),
        fee: field_u64(map, "fee")?,
        first_valid: field_u64(map, "fv")?,
        last_valid: field_u64(map, "lv")?,
        note: field_bytes(map, "note")?,
        genesis_id: field_string(map, "gen")?,
        genesis_hash: field_digest(map, "gh")?,
        lease: field_digest(map, "lx")?,
        rekey_to: field_address(map, "rekey")?,
    };

    let application_args = field_array(map, "apaa")?
        .iter()
        .map(|v| match v {
            Value::Binary(b) => Ok(b.clone()),
            _ => Err(AppError::Encoding("apaa entry is not binary".to_string())),
        })
        .collect::<AppResult<Vec<_>>>()?;
    let accounts = field_array(map, "apat")?
        .iter()
        .map(|v| match v {
            Value::Binary(b) => Address::from_slice(b),
            _ => Err(AppError::Encoding("apat entry is not binary".to_string())),
        })
        .collect::<AppResult<Vec<_>>>()?;
    let ids = |key: &str| -> AppResult<Vec<u64>> {
        field_array(map, key)?
            .iter()
            .map(|v| {
                v.as_u64()
                    .ok_or_else(|| AppError::Encoding(format!("{} entry is not an integer", key)))
            })
            .collect()
    };
    let extra_pages = field_u64(map, "apep")?;

    let application = ApplicationCallFields {
        application_id: field_u64(map, "apid")?,
        on_completion: OnCompletion::from_u64(field_u64(map, "apan")?)?,
        application_args,
        accounts,
        foreign_apps: ids("apfa")?,
        foreign_assets: ids("apas")?,
        approval_program: field_bytes(map, "apap")?,
        clear_state_program: field_bytes(map, "apsu")?,
        global_state_schema: field_schema(map, "apgs")?,
        local_state_schema: field_schema(map, "apls")?,
        extra_program_pages: u32::try_from(extra_pages)
            .map_err(|_| AppError::Encoding(format!("apep {} out of range", extra_pages)))?,
    };

    Ok(Transaction {
        header,
        application,
    })
}

/// Decode a signed application-call transaction envelope
pub fn decode_signed_transaction(bytes: &[u8]) -> AppResult<SignedTransaction> {
    let value = decode_value(bytes)?;
    let txn = map_field(&value, "txn")
        .ok_or_else(|| AppError::Encoding("signed transaction has no txn field".to_string()))?;

    let sig = field_bytes(&value, "sig")?;
    let signature: [u8; 64] = sig
        .as_slice()
        .try_into()
        .map_err(|_| AppError::Encoding(format!("sig must be 64 bytes, got {}", sig.len())))?;

    Ok(SignedTransaction {
        transaction: transaction_from_value(txn)?,
        signature,
        auth_address: field_address(&value, "sgnr")?,
    })
}
