// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use log::debug;
use serde_json::Value;

use super::{sign::generate_withdraw_sign, NEED_TRANSACTION_SIGN, PATH_PREFIX};
use crate::{params, transport::Transport, Payload, Result};

const WITHDRAW: &str = concatcp!(PATH_PREFIX, "billing/withdraw");
const WITHDRAW_LIST: &str = concatcp!(PATH_PREFIX, "billing/withdraw_list");
const SYNC_WITHDRAW_LIST: &str = concatcp!(PATH_PREFIX, "billing/sync_withdraw_list");

const REQUIRED_FIELDS: &[&str] = &["request_id", "sub_wallet_id", "symbol", "amount", "address_to"];
const OPTIONAL_FIELDS: &[&str] = &["from", "memo", "remark", "outputs"];

pub struct WithdrawApi<'a> {
    transport: &'a Transport,
}

impl<'a> WithdrawApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Withdraw from a sub-wallet.
    ///
    /// Only the withdrawal fields are sent, other keys of `params` are
    /// dropped. With `need_transaction_sign` set the request carries a
    /// `sign` field, and a missing signing key fails here before anything
    /// is sent.
    pub async fn withdraw(&self, params: Payload) -> Result<Value> {
        params::require(&params, REQUIRED_FIELDS)?;

        let mut request = params::pick(&params, REQUIRED_FIELDS);
        request.extend(params::pick_present(&params, OPTIONAL_FIELDS));

        if params::flag(&params, NEED_TRANSACTION_SIGN) {
            let signature = generate_withdraw_sign(&params, self.transport.provider().as_ref())?;
            debug!("signed withdrawal {:?}", params.get("request_id"));
            request.insert("sign".into(), Value::from(signature));
        }

        self.transport.post(WITHDRAW, request).await
    }

    /// Withdrawal records by `request_id`.
    pub async fn get_withdraw_records(&self, request_ids: &[&str]) -> Result<Value> {
        let params = params::ids("request_ids", request_ids)?;
        self.transport.get(WITHDRAW_LIST, params).await
    }

    pub async fn sync_withdraw_records(&self, max_id: i64) -> Result<Value> {
        self.transport
            .get(SYNC_WITHDRAW_LIST, params::max_id(max_id))
            .await
    }
}
