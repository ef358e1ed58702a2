// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use serde_json::Value;

use crate::{params, transport::Transport, Payload, Result};

const USER_ACCOUNT: &str = "account/getByUidAndSymbol";
const DEPOSIT_ADDRESS: &str = "account/getDepositAddress";
const COMPANY_ACCOUNT: &str = "account/getCompanyBySymbol";
const DEPOSIT_ADDRESS_INFO: &str = "account/getDepositAddressInfo";
const SYNC_ADDRESS_LIST: &str = "address/syncList";

/// Balances and deposit addresses.
pub struct AccountApi<'a> {
    transport: &'a Transport,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Balance of user `uid` in `symbol`.
    pub async fn get_user_account(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["uid", "symbol"])?;
        self.transport.post(USER_ACCOUNT, params).await
    }

    /// Deposit address of user `uid` for `symbol`, created on first use.
    pub async fn get_user_address(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["uid", "symbol"])?;
        self.transport.post(DEPOSIT_ADDRESS, params).await
    }

    /// Merchant balance in `symbol`.
    pub async fn get_company_account(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["symbol"])?;
        self.transport.post(COMPANY_ACCOUNT, params).await
    }

    pub async fn get_user_address_info(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["address"])?;
        self.transport.post(DEPOSIT_ADDRESS_INFO, params).await
    }

    pub async fn sync_user_address_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_ADDRESS_LIST, params::max_id(max_id))
            .await
    }
}
