// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Chunked RSA codec.
//!
//! RSA can only process `modulus_len - padding_overhead` bytes per operation,
//! so plaintext is cut into blocks of at most that size, every block is
//! processed independently and the fixed-size outputs are concatenated. The
//! concatenation travels as URL-safe base64 without padding. On the way back
//! the decoded bytes must be an exact multiple of the modulus length.
//!
//! Two directions exist:
//! - [`seal`] / [`open`]: encrypt with the recipient public key, decrypt with
//!   the matching private key. Padding is randomized, so two seals of the
//!   same plaintext differ.
//! - [`private_encrypt`] / [`public_decrypt`]: the custody platform's wire
//!   direction. Blocks are formatted with PKCS#1 v1.5 block type 1 and run
//!   through the private key operation, anyone holding the public key can
//!   recover them. This direction is deterministic.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine,
};
use log::debug;
use rsa::{
    rand_core::OsRng, traits::PublicKeyParts, BigUint, Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign,
    RsaPrivateKey, RsaPublicKey,
};
use serde_json::Value;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::{Error, Payload, Result};

/// URL-safe base64, emitted without `=` padding, accepted with or without.
pub const BASE64_URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Padding schemes for the chunked RSA codec. Names follow
/// <https://datatracker.ietf.org/doc/html/rfc7518#section-4.1>.
#[derive(EnumString, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingMode {
    #[strum(serialize = "RSA-OAEP")]
    OAEP,

    #[default]
    #[strum(serialize = "RSA1_5")]
    PKCS1v15,
}

impl PaddingMode {
    /// Bytes of every RSA block consumed by the padding itself.
    pub fn overhead(&self) -> usize {
        match self {
            PaddingMode::OAEP => 2 * <Sha256 as Digest>::output_size() + 2,
            PaddingMode::PKCS1v15 => 11,
        }
    }

    /// Largest plaintext block that fits a key of `modulus_len` bytes.
    pub fn max_block(&self, modulus_len: usize) -> Result<usize> {
        modulus_len
            .checked_sub(self.overhead())
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                Error::Crypto(format!(
                    "a {}-bit key is too small for {} padding",
                    modulus_len * 8,
                    self.as_ref()
                ))
            })
    }
}

/// Encrypt a mapping for the holder of `key` with PKCS#1 v1.5 padding.
pub fn encrypt(payload: &Payload, key: &RsaPublicKey) -> Result<String> {
    encrypt_with(PaddingMode::default(), payload, key)
}

pub fn encrypt_with(mode: PaddingMode, payload: &Payload, key: &RsaPublicKey) -> Result<String> {
    let text = to_canonical_json(payload)?;
    seal(mode, text.as_bytes(), key)
}

/// Inverse of [`encrypt`].
pub fn decrypt(cipher: &str, key: &RsaPrivateKey) -> Result<Payload> {
    decrypt_with(PaddingMode::default(), cipher, key)
}

pub fn decrypt_with(mode: PaddingMode, cipher: &str, key: &RsaPrivateKey) -> Result<Payload> {
    let plaintext = Zeroizing::new(open(mode, cipher, key)?);
    parse_payload(&plaintext)
}

pub fn seal(mode: PaddingMode, plaintext: &[u8], key: &RsaPublicKey) -> Result<String> {
    let modulus_len = key.size();
    let max_block = mode.max_block(modulus_len)?;

    let mut rng = OsRng;
    let mut sealed = Vec::with_capacity(block_count(plaintext.len(), max_block) * modulus_len);
    for block in plaintext_blocks(plaintext, max_block) {
        let encrypted = match mode {
            PaddingMode::OAEP => key.encrypt(&mut rng, Oaep::new::<Sha256>(), block),
            PaddingMode::PKCS1v15 => key.encrypt(&mut rng, Pkcs1v15Encrypt, block),
        }
        .map_err(|e| Error::Crypto(format!("RSA {} encrypt failed: {e}", mode.as_ref())))?;
        sealed.extend_from_slice(&encrypted);
    }

    Ok(BASE64_URL.encode(sealed))
}

pub fn open(mode: PaddingMode, cipher: &str, key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let raw = decode_blocks(cipher, key.size())?;

    let mut plaintext = Vec::with_capacity(raw.len());
    for block in raw.chunks_exact(key.size()) {
        let decrypted = match mode {
            PaddingMode::OAEP => key.decrypt(Oaep::new::<Sha256>(), block),
            PaddingMode::PKCS1v15 => key.decrypt(Pkcs1v15Encrypt, block),
        }
        .map_err(|e| Error::Crypto(format!("RSA {} decrypt failed: {e}", mode.as_ref())))?;
        plaintext.extend_from_slice(&decrypted);
    }

    Ok(plaintext)
}

/// Platform direction: format every block with block type 1 padding and apply
/// the private key operation.
pub fn private_encrypt(plaintext: &[u8], key: &RsaPrivateKey) -> Result<String> {
    let modulus_len = key.size();
    let max_block = PaddingMode::PKCS1v15.max_block(modulus_len)?;

    let mut sealed = Vec::with_capacity(block_count(plaintext.len(), max_block) * modulus_len);
    for block in plaintext_blocks(plaintext, max_block) {
        let encrypted = key
            .sign(Pkcs1v15Sign::new_unprefixed(), block)
            .map_err(|e| Error::Crypto(format!("RSA private key encrypt failed: {e}")))?;
        sealed.extend_from_slice(&encrypted);
    }

    Ok(BASE64_URL.encode(sealed))
}

/// Platform direction: apply the public key operation to every block and strip
/// the PKCS#1 v1.5 padding (block type 1 or 2).
pub fn public_decrypt(cipher: &str, key: &RsaPublicKey) -> Result<Vec<u8>> {
    let modulus_len = key.size();
    let raw = decode_blocks(cipher, modulus_len)?;

    let mut plaintext = Vec::with_capacity(raw.len());
    for (index, block) in raw.chunks_exact(modulus_len).enumerate() {
        let c = BigUint::from_bytes_be(block);
        if &c >= key.n() {
            return Err(Error::Crypto(format!(
                "ciphertext block {index} is out of range for the key modulus"
            )));
        }

        let m = c.modpow(key.e(), key.n()).to_bytes_be();
        let mut em = Zeroizing::new(vec![0u8; modulus_len]);
        em[modulus_len - m.len()..].copy_from_slice(&m);

        let data = strip_pkcs1_padding(&em).ok_or_else(|| {
            Error::Crypto(format!("invalid PKCS#1 padding in ciphertext block {index}"))
        })?;
        plaintext.extend_from_slice(data);
    }

    Ok(plaintext)
}

/// Deterministic compact JSON with object keys sorted at every level.
pub fn to_canonical_json(payload: &Payload) -> Result<String> {
    let sorted = sort_keys(&Value::Object(payload.clone()));
    serde_json::to_string(&sorted)
        .map_err(|e| Error::Validation(format!("serialize payload failed: {e}")))
}

/// Parse decrypted bytes back into a mapping.
pub fn parse_payload(plaintext: &[u8]) -> Result<Payload> {
    match serde_json::from_slice::<Value>(plaintext) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::Validation(format!(
            "payload is a JSON {}, not an object",
            json_kind(&other)
        ))),
        Err(e) => Err(Error::Validation(format!("payload is not valid JSON: {e}"))),
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// An empty plaintext still produces one block so that it survives a round trip.
fn plaintext_blocks(plaintext: &[u8], max_block: usize) -> Vec<&[u8]> {
    if plaintext.is_empty() {
        return vec![plaintext];
    }
    plaintext.chunks(max_block).collect()
}

fn block_count(len: usize, max_block: usize) -> usize {
    len.div_ceil(max_block).max(1)
}

fn decode_blocks(cipher: &str, modulus_len: usize) -> Result<Vec<u8>> {
    let raw = BASE64_URL
        .decode(cipher.trim())
        .map_err(|e| Error::Crypto(format!("base64url decode ciphertext failed: {e}")))?;

    if raw.is_empty() || raw.len() % modulus_len != 0 {
        return Err(Error::Crypto(format!(
            "ciphertext length {} is not a multiple of the {modulus_len}-byte key modulus",
            raw.len()
        )));
    }

    debug!(
        "ciphertext holds {} block(s) of {modulus_len} bytes",
        raw.len() / modulus_len
    );
    Ok(raw)
}

// 0x00 || BT || PS || 0x00 || D, BT is 0x01 (PS all 0xff) or 0x02 (PS
// non-zero), PS at least 8 bytes.
fn strip_pkcs1_padding(em: &[u8]) -> Option<&[u8]> {
    if em.len() < 11 || em[0] != 0x00 {
        return None;
    }

    let block_type = em[1];
    if block_type != 0x01 && block_type != 0x02 {
        return None;
    }

    let separator = em[2..].iter().position(|b| *b == 0x00)? + 2;
    if separator < 10 {
        return None;
    }
    if block_type == 0x01 && em[2..separator].iter().any(|b| *b != 0xff) {
        return None;
    }

    Some(&em[separator + 1..])
}
