// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! # Envelope
//!
//! This crate encapsulates the secure envelope used to talk to the custody
//! platform: RSA encryption of JSON payloads, chunked to respect the
//! per-operation plaintext limit of the key, and detached signatures over
//! transaction parameters.
//!
//! ## Components
//!
//! This crate include the following public submodules:
//! - `keys`: Parse PEM (or bare base64) RSA key material
//! - `codec`: Chunked RSA encryption in both directions, base64url framing
//! - `signing`: Canonical signing string, sign and verify
//! - `provider`: The [`CryptoProvider`] capability trait and its default
//!   in-process RSA implementation
//!
//! All operations are pure transforms over in-memory buffers. Parsed keys
//! are read-only and can be shared across threads.

#[macro_use]
extern crate strum;

pub mod codec;
pub use codec::{decrypt, encrypt, PaddingMode};

pub mod error;
pub use error::*;

pub mod keys;
pub use keys::{parse_private_key, parse_public_key};

pub mod provider;
pub use provider::{CryptoProvider, RsaCryptoProvider};

pub mod signing;
pub use signing::{sign, verify};

/// A string-keyed JSON mapping, the unit the codec encrypts, decrypts and
/// signs.
pub type Payload = serde_json::Map<String, serde_json::Value>;

pub use rsa::{RsaPrivateKey, RsaPublicKey};
