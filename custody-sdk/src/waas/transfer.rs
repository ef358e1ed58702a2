// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use serde_json::Value;

use crate::{enums::QueryIdType, params, transport::Transport, Payload, Result};

const ACCOUNT_TRANSFER: &str = "account/transfer";
const TRANSFER_LIST: &str = "account/transferList";
const SYNC_TRANSFER_LIST: &str = "account/syncTransferList";

const TRANSFER_FIELDS: &[&str] = &["request_id", "symbol", "amount", "from", "to"];

/// Transfers between accounts of the same merchant.
pub struct TransferApi<'a> {
    transport: &'a Transport,
}

impl<'a> TransferApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Move `amount` of `symbol` from user `from` to user `to`. `remark` is
    /// optional.
    pub async fn account_transfer(&self, params: Payload) -> Result<Value> {
        params::require(&params, TRANSFER_FIELDS)?;
        self.transport.post(ACCOUNT_TRANSFER, params).await
    }

    /// Transfers by request id or by receipt.
    pub async fn get_account_transfer_list(
        &self,
        ids: &[&str],
        ids_type: QueryIdType,
    ) -> Result<Value> {
        let mut params = params::ids("ids", ids)?;
        params.insert("ids_type".into(), Value::from(ids_type.as_ref()));
        self.transport.post(TRANSFER_LIST, params).await
    }

    pub async fn sync_account_transfer_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_TRANSFER_LIST, params::max_id(max_id))
            .await
    }
}
