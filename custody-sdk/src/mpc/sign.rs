// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Transaction signatures for withdrawals and Web3 transactions.
//!
//! Only a fixed set of fields is covered by the signature. Absent or empty
//! fields drop out of the canonical string, see
//! [`envelope::signing::canonical_string`].

use envelope::signing::canonical_string;

use crate::{params, CryptoProvider, Error, Payload, Result};

pub const WITHDRAW_SIGN_FIELDS: &[&str] = &[
    "request_id",
    "sub_wallet_id",
    "symbol",
    "address_to",
    "amount",
    "memo",
    "outputs",
];

pub const WEB3_SIGN_FIELDS: &[&str] = &[
    "request_id",
    "sub_wallet_id",
    "main_chain_symbol",
    "interactive_contract",
    "amount",
    "input_data",
];

pub fn generate_withdraw_sign(params: &Payload, provider: &dyn CryptoProvider) -> Result<String> {
    sign_fields(params, WITHDRAW_SIGN_FIELDS, provider)
}

pub fn generate_web3_sign(params: &Payload, provider: &dyn CryptoProvider) -> Result<String> {
    sign_fields(params, WEB3_SIGN_FIELDS, provider)
}

fn sign_fields(params: &Payload, fields: &[&str], provider: &dyn CryptoProvider) -> Result<String> {
    let text = canonical_string(&params::pick(params, fields));
    if text.is_empty() {
        return Err(Error::validation("no signable fields in parameters"));
    }

    let signature = provider.sign(&text)?;
    if signature.is_empty() {
        return Err(Error::Crypto("crypto provider returned an empty signature".into()));
    }
    Ok(signature)
}
