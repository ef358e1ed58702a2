// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use serde_json::Value;

use super::{sign::generate_web3_sign, NEED_TRANSACTION_SIGN, PATH_PREFIX};
use crate::{params, transport::Transport, Payload, Result};

const CREATE_TRANSACTION: &str = concatcp!(PATH_PREFIX, "web3/trans/create");
const ACCELERATE: &str = concatcp!(PATH_PREFIX, "web3/pending");
const TRANSACTION_LIST: &str = concatcp!(PATH_PREFIX, "web3/trans_list");
const SYNC_TRANSACTION_LIST: &str = concatcp!(PATH_PREFIX, "web3/sync_trans_list");

/// `amount` and `input_data` may legitimately be `"0"` or empty, so these are
/// only checked for presence.
const CREATE_FIELDS: &[&str] = &[
    "request_id",
    "sub_wallet_id",
    "main_chain_symbol",
    "interactive_contract",
    "amount",
    "gas_price",
    "gas_limit",
    "input_data",
    "trans_type",
];
const DAPP_FIELDS: &[&str] = &["from", "dapp_name", "dapp_url", "dapp_img"];
const ACCELERATE_FIELDS: &[&str] = &["request_id", "gas_price", "gas_limit"];

/// Contract calls signed by the MPC wallet.
pub struct Web3Api<'a> {
    transport: &'a Transport,
}

impl<'a> Web3Api<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn create_web3_trans(&self, params: Payload) -> Result<Value> {
        params::require_keys(&params, CREATE_FIELDS)?;

        let mut request = params::pick(&params, CREATE_FIELDS);
        request.extend(params::pick_present(&params, DAPP_FIELDS));

        if params::flag(&params, NEED_TRANSACTION_SIGN) {
            let signature = generate_web3_sign(&params, self.transport.provider().as_ref())?;
            request.insert("sign".into(), Value::from(signature));
        }

        self.transport.post(CREATE_TRANSACTION, request).await
    }

    /// Re-price a pending transaction.
    pub async fn accelerate_web3_trans(&self, params: Payload) -> Result<Value> {
        params::require_keys(&params, ACCELERATE_FIELDS)?;
        self.transport
            .post(ACCELERATE, params::pick(&params, ACCELERATE_FIELDS))
            .await
    }

    pub async fn get_web3_trans_records(&self, request_ids: &[&str]) -> Result<Value> {
        let params = params::ids("request_ids", request_ids)?;
        self.transport.get(TRANSACTION_LIST, params).await
    }

    pub async fn sync_web3_trans_records(&self, max_id: i64) -> Result<Value> {
        self.transport
            .get(SYNC_TRANSACTION_LIST, params::max_id(max_id))
            .await
    }
}
