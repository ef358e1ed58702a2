// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use serde_json::Value;

use super::PATH_PREFIX;
use crate::{
    models::{FromMapping, TransactionRecord},
    params,
    transport::Transport,
    Result,
};

const DEPOSIT_LIST: &str = concatcp!(PATH_PREFIX, "billing/deposit_list");
const SYNC_DEPOSIT_LIST: &str = concatcp!(PATH_PREFIX, "billing/sync_deposit_list");

pub struct DepositApi<'a> {
    transport: &'a Transport,
}

impl<'a> DepositApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Deposit records by platform id.
    pub async fn get_deposit_records(&self, ids: &[i64]) -> Result<Value> {
        let params = params::ids("ids", ids)?;
        self.transport.get(DEPOSIT_LIST, params).await
    }

    /// Deposit records with an id above `max_id`, at most 100 per call.
    pub async fn sync_deposit_records(&self, max_id: i64) -> Result<Value> {
        self.transport
            .get(SYNC_DEPOSIT_LIST, params::max_id(max_id))
            .await
    }

    pub async fn deposits_since(&self, max_id: i64) -> Result<Vec<TransactionRecord>> {
        TransactionRecord::from_list(&self.sync_deposit_records(max_id).await?)
    }
}
