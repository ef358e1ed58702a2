// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use serde_json::Value;

use super::PATH_PREFIX;
use crate::{params, transport::Transport, Payload, Result};

const SUB_WALLETS: &str = concatcp!(PATH_PREFIX, "auto_collect/sub_wallets");
const SET_SYMBOL: &str = concatcp!(PATH_PREFIX, "auto_collect/symbol/set");
const SYNC_COLLECT_LIST: &str = concatcp!(PATH_PREFIX, "billing/sync_auto_collect_list");

const SET_SYMBOL_FIELDS: &[&str] = &["symbol", "collect_min", "fueling_limit"];

/// Automatic collection of deposits into the main wallet.
pub struct AutoSweepApi<'a> {
    transport: &'a Transport,
}

impl<'a> AutoSweepApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Collection and fueling wallets for `symbol`.
    pub async fn auto_collect_sub_wallets(&self, symbol: &str) -> Result<Value> {
        let params = Payload::from_iter([("symbol".to_string(), Value::from(symbol))]);
        params::require(&params, &["symbol"])?;
        self.transport.get(SUB_WALLETS, params).await
    }

    /// Set the minimum collected amount and the fueling cap for `symbol`.
    pub async fn set_auto_collect_symbol(&self, params: Payload) -> Result<Value> {
        params::require_keys(&params, SET_SYMBOL_FIELDS)?;
        self.transport
            .post(SET_SYMBOL, params::pick(&params, SET_SYMBOL_FIELDS))
            .await
    }

    pub async fn sync_auto_collect_records(&self, max_id: i64) -> Result<Value> {
        self.transport
            .get(SYNC_COLLECT_LIST, params::max_id(max_id))
            .await
    }
}
