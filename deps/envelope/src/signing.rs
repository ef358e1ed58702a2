// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Detached signatures over transaction parameters.
//!
//! The signed text is the canonical parameter string (see
//! [`canonical_string`]). Its lowercase hex MD5 digest is signed with RSA
//! PKCS#1 v1.5 over SHA-256 and the signature travels as standard base64.

use base64::{engine::general_purpose::STANDARD, Engine};
use log::debug;
use md5::{Digest, Md5};
use rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    signature::{SignatureEncoding, Signer, Verifier},
    RsaPrivateKey, RsaPublicKey,
};
use serde_json::Value;
use sha2::Sha256;

use crate::{Error, Payload, Result};

/// Key whose value has trailing fractional zeros trimmed before signing.
const AMOUNT_KEY: &str = "amount";

/// Build `k1=v1&k2=v2` from the non-empty entries of `params`, keys in ASCII
/// order, all lowercase.
pub fn canonical_string(params: &Payload) -> String {
    let mut pairs: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) if s.is_empty() => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let text = if key == AMOUNT_KEY {
                trim_amount(&text)
            } else {
                text
            };
            Some((key.as_str(), text))
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
        .to_lowercase()
}

/// `1.0001000` becomes `1.0001`, `1.0` becomes `1`. Anything that is not a
/// plain decimal is left alone.
fn trim_amount(value: &str) -> String {
    match value.rfind('.') {
        Some(dot) if value[dot + 1..].bytes().all(|b| b.is_ascii_digit()) => {
            let trimmed = value.trim_end_matches('0');
            trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
        }
        _ => value.to_string(),
    }
}

/// Lowercase hex MD5 of the canonical string.
pub fn digest(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Sign the canonical string of `params`.
pub fn sign(params: &Payload, key: &RsaPrivateKey) -> Result<String> {
    sign_text(&canonical_string(params), key)
}

/// Sign an already canonical string.
pub fn sign_text(text: &str, key: &RsaPrivateKey) -> Result<String> {
    if text.is_empty() {
        return Err(Error::Validation("nothing to sign".into()));
    }

    let digest = digest(text);
    debug!("sign canonical string with digest {digest}");
    let signature = SigningKey::<Sha256>::new(key.clone())
        .try_sign(digest.as_bytes())
        .map_err(|e| Error::Crypto(format!("RSA sign failed: {e}")))?;

    Ok(STANDARD.encode(signature.to_bytes()))
}

/// `Ok(false)` on a well formed signature that does not match, `Err` when the
/// signature is not base64 at all.
pub fn verify(params: &Payload, signature: &str, key: &RsaPublicKey) -> Result<bool> {
    verify_text(&canonical_string(params), signature, key)
}

pub fn verify_text(text: &str, signature: &str, key: &RsaPublicKey) -> Result<bool> {
    if text.is_empty() {
        return Err(Error::Validation("nothing to verify".into()));
    }

    let raw = STANDARD
        .decode(signature.trim())
        .map_err(|e| Error::Validation(format!("malformed signature encoding: {e}")))?;
    if raw.is_empty() {
        return Err(Error::Validation("empty signature".into()));
    }

    let Ok(signature) = Signature::try_from(raw.as_slice()) else {
        return Ok(false);
    };

    let verified = VerifyingKey::<Sha256>::new(key.clone())
        .verify(digest(text).as_bytes(), &signature)
        .is_ok();
    if !verified {
        debug!("signature mismatch");
    }
    Ok(verified)
}
