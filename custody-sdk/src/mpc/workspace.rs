// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use serde_json::Value;

use super::PATH_PREFIX;
use crate::{
    models::{CoinInfo, FromMapping},
    params,
    transport::Transport,
    Payload, Result,
};

const OPEN_COIN: &str = concatcp!(PATH_PREFIX, "wallet/open_coin");
const COIN_LIST: &str = concatcp!(PATH_PREFIX, "coin_list");
const CHAIN_HEIGHT: &str = concatcp!(PATH_PREFIX, "chain_height");

/// Chains and coins enabled for the workspace.
pub struct WorkspaceApi<'a> {
    transport: &'a Transport,
}

impl<'a> WorkspaceApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub async fn get_support_main_chain(&self) -> Result<Value> {
        self.transport.get(OPEN_COIN, Payload::new()).await
    }

    /// Coin details, optionally filtered by `symbol`, `base_symbol` or
    /// `open_chain`.
    pub async fn get_coin_details(&self, params: Payload) -> Result<Value> {
        self.transport.get(COIN_LIST, params).await
    }

    pub async fn coins(&self, params: Payload) -> Result<Vec<CoinInfo>> {
        CoinInfo::from_list(&self.get_coin_details(params).await?)
    }

    /// Latest block height of the chain whose main coin is `base_symbol`.
    pub async fn get_last_block_height(&self, base_symbol: &str) -> Result<Value> {
        let params = Payload::from_iter([("base_symbol".to_string(), Value::from(base_symbol))]);
        params::require(&params, &["base_symbol"])?;
        self.transport.get(CHAIN_HEIGHT, params).await
    }
}
