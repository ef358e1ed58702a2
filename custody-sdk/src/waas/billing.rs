// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use serde_json::Value;

use crate::{params, transport::Transport, Payload, Result};

const WITHDRAW: &str = "billing/withdraw";
const WITHDRAW_LIST: &str = "billing/withdrawList";
const SYNC_WITHDRAW_LIST: &str = "billing/syncWithdrawList";
const DEPOSIT_LIST: &str = "billing/depositList";
const SYNC_DEPOSIT_LIST: &str = "billing/syncDepositList";
const MINER_FEE_LIST: &str = "billing/minerFeeList";
const SYNC_MINER_FEE_LIST: &str = "billing/syncMinerFeeList";

const WITHDRAW_FIELDS: &[&str] = &["request_id", "from_uid", "to_address", "amount", "symbol"];

/// Withdrawals, deposits and miner fees.
pub struct BillingApi<'a> {
    transport: &'a Transport,
}

impl<'a> BillingApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Withdraw `amount` of `symbol` from user `from_uid` to `to_address`.
    /// `request_id` is the idempotency key of the withdrawal.
    pub async fn withdraw(&self, params: Payload) -> Result<Value> {
        params::require(&params, WITHDRAW_FIELDS)?;
        self.transport.post(WITHDRAW, params).await
    }

    /// Withdrawals by `request_id`.
    pub async fn withdraw_list(&self, request_ids: &[&str]) -> Result<Value> {
        let params = params::ids("request_ids", request_ids)?;
        self.transport.post(WITHDRAW_LIST, params).await
    }

    pub async fn sync_withdraw_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_WITHDRAW_LIST, params::max_id(max_id))
            .await
    }

    /// Deposits by platform id.
    pub async fn deposit_list(&self, ids: &[&str]) -> Result<Value> {
        let params = params::ids("ids", ids)?;
        self.transport.post(DEPOSIT_LIST, params).await
    }

    pub async fn sync_deposit_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_DEPOSIT_LIST, params::max_id(max_id))
            .await
    }

    pub async fn miner_fee_list(&self, ids: &[&str]) -> Result<Value> {
        let params = params::ids("ids", ids)?;
        self.transport.post(MINER_FEE_LIST, params).await
    }

    pub async fn sync_miner_fee_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_MINER_FEE_LIST, params::max_id(max_id))
            .await
    }
}
