// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Energy and bandwidth rental on TRON.

use const_format::concatcp;
use serde_json::Value;

use super::PATH_PREFIX;
use crate::{params, transport::Transport, Payload, Result};

const DELEGATE: &str = concatcp!(PATH_PREFIX, "tron/delegate");
const DELEGATE_LIST: &str = concatcp!(PATH_PREFIX, "tron/delegate/trans_list");
const SYNC_DELEGATE_LIST: &str = concatcp!(PATH_PREFIX, "tron/delegate/sync_trans_list");

/// Purchases that fund a transfer need to know what is being transferred.
const TRANSFER_BUY_TYPES: &[i64] = &[0, 2];

pub struct TronResourceApi<'a> {
    transport: &'a Transport,
}

impl<'a> TronResourceApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Buy resources for `address_from`. With `buy_type` 0 or 2 the
    /// `address_to` and `contract_address` of the transfer are required.
    pub async fn create_tron_delegate(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["request_id", "address_from", "service_charge_type"])?;
        let buy_type = params::int_field(&params, "buy_type");
        if buy_type.is_some_and(|t| TRANSFER_BUY_TYPES.contains(&t)) {
            params::require(&params, &["address_to", "contract_address"])?;
        }

        self.transport.post(DELEGATE, params).await
    }

    pub async fn get_buy_resource_records(&self, request_ids: &[&str]) -> Result<Value> {
        let params = params::ids("request_ids", request_ids)?;
        self.transport.post(DELEGATE_LIST, params).await
    }

    pub async fn sync_buy_resource_records(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_DELEGATE_LIST, params::max_id(max_id))
            .await
    }
}
