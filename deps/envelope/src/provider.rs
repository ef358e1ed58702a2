// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! The crypto capability the SDK needs from its environment.
//!
//! Everything the transport does with key material goes through
//! [`CryptoProvider`], so an implementation may keep the keys somewhere else
//! entirely (an HSM, a cloud KMS) and only hand back ciphertext and
//! signatures.

use std::fmt;

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::{codec, keys, signing, Error, Result};

pub trait CryptoProvider: Send + Sync {
    /// Encrypt an outbound request body so that the platform can open it.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Open a response body or notification produced by the platform.
    fn decrypt(&self, cipher: &str) -> Result<String>;

    /// Sign a canonical parameter string.
    fn sign(&self, text: &str) -> Result<String>;

    /// Check a platform signature over a canonical parameter string.
    fn verify(&self, text: &str, signature: &str) -> Result<bool>;
}

/// In-process RSA.
///
/// Requests are encrypted with the caller's private key, responses are
/// opened with the platform public key, transaction signatures use a
/// dedicated signing key. Every key is optional, a missing key is reported
/// when an operation needs it.
#[derive(Clone, Default)]
pub struct RsaCryptoProvider {
    private_key: Option<RsaPrivateKey>,
    public_key: Option<RsaPublicKey>,
    sign_key: Option<RsaPrivateKey>,
}

impl RsaCryptoProvider {
    pub fn new(
        private_key: Option<RsaPrivateKey>,
        public_key: Option<RsaPublicKey>,
        sign_key: Option<RsaPrivateKey>,
    ) -> Self {
        Self {
            private_key,
            public_key,
            sign_key,
        }
    }

    /// Parse PEM (or bare base64) key text. Empty strings count as absent.
    pub fn from_pem(
        private_key: Option<&str>,
        public_key: Option<&str>,
        sign_key: Option<&str>,
    ) -> Result<Self> {
        fn present(text: Option<&str>) -> Option<&str> {
            text.filter(|t| !t.trim().is_empty())
        }

        Ok(Self {
            private_key: present(private_key)
                .map(keys::parse_private_key)
                .transpose()?,
            public_key: present(public_key)
                .map(keys::parse_public_key)
                .transpose()?,
            sign_key: present(sign_key)
                .map(keys::parse_private_key)
                .transpose()?,
        })
    }

    pub fn has_sign_key(&self) -> bool {
        self.sign_key.is_some()
    }

    fn private_key(&self) -> Result<&RsaPrivateKey> {
        self.private_key
            .as_ref()
            .ok_or_else(|| Error::Configuration("private key is not configured".into()))
    }

    fn public_key(&self) -> Result<&RsaPublicKey> {
        self.public_key
            .as_ref()
            .ok_or_else(|| Error::Configuration("platform public key is not configured".into()))
    }
}

impl fmt::Debug for RsaCryptoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaCryptoProvider")
            .field("private_key", &self.private_key.is_some())
            .field("public_key", &self.public_key.is_some())
            .field("sign_key", &self.sign_key.is_some())
            .finish()
    }
}

impl CryptoProvider for RsaCryptoProvider {
    fn encrypt(&self, text: &str) -> Result<String> {
        codec::private_encrypt(text.as_bytes(), self.private_key()?)
    }

    fn decrypt(&self, cipher: &str) -> Result<String> {
        let plaintext = codec::public_decrypt(cipher, self.public_key()?)?;
        String::from_utf8(plaintext)
            .map_err(|e| Error::Crypto(format!("decrypted data is not UTF-8: {e}")))
    }

    fn sign(&self, text: &str) -> Result<String> {
        let key = self.sign_key.as_ref().ok_or_else(|| {
            Error::Configuration("signing requires a dedicated sign private key".into())
        })?;
        signing::sign_text(text, key)
    }

    fn verify(&self, text: &str, signature: &str) -> Result<bool> {
        signing::verify_text(text, signature, self.public_key()?)
    }
}
