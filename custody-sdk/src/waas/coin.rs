// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use serde_json::Value;

use crate::{
    models::{CoinInfo, FromMapping},
    transport::Transport,
    Payload, Result,
};

const COIN_LIST: &str = "user/getCoinList";

pub struct CoinApi<'a> {
    transport: &'a Transport,
}

impl<'a> CoinApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Every coin the merchant can use, with decimals, contract address,
    /// memo support and deposit confirmations.
    pub async fn get_coin_list(&self, params: Payload) -> Result<Value> {
        self.transport.post(COIN_LIST, params).await
    }

    pub async fn coins(&self) -> Result<Vec<CoinInfo>> {
        let list = self.get_coin_list(Payload::new()).await?;
        CoinInfo::from_list(&list)
    }
}
