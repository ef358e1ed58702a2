// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use const_format::concatcp;
use serde_json::Value;

use super::PATH_PREFIX;
use crate::{
    enums::WalletShowStatus,
    models::{AddressInfo, FromMapping},
    params,
    transport::Transport,
    Error, Payload, Result,
};

const CREATE_WALLET: &str = concatcp!(PATH_PREFIX, "sub_wallet/create");
const CREATE_ADDRESS: &str = concatcp!(PATH_PREFIX, "sub_wallet/create/address");
const ADDRESS_LIST: &str = concatcp!(PATH_PREFIX, "sub_wallet/get/address/list");
const WALLET_ASSETS: &str = concatcp!(PATH_PREFIX, "sub_wallet/assets");
const CHANGE_SHOW_STATUS: &str = concatcp!(PATH_PREFIX, "sub_wallet/change_show_status");
const ADDRESS_INFO: &str = concatcp!(PATH_PREFIX, "sub_wallet/address/info");

const MAX_WALLET_NAME_CHARS: usize = 50;

/// Sub-wallets and their addresses.
pub struct WalletApi<'a> {
    transport: &'a Transport,
}

impl<'a> WalletApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Create a sub-wallet named `sub_wallet_name`. `app_show_status` is
    /// optional.
    pub async fn create_wallet(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["sub_wallet_name"])?;
        let name = params
            .get("sub_wallet_name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if name.chars().count() > MAX_WALLET_NAME_CHARS {
            return Err(Error::invalid_field(
                "sub_wallet_name",
                format!("wallet name cannot be longer than {MAX_WALLET_NAME_CHARS} characters"),
            ));
        }

        self.transport.post(CREATE_WALLET, params).await
    }

    /// New address for `symbol` in wallet `sub_wallet_id`.
    pub async fn create_wallet_address(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["sub_wallet_id", "symbol"])?;
        self.transport.post(CREATE_ADDRESS, params).await
    }

    /// Addresses of wallet `sub_wallet_id` for `symbol`. Paged with `max_id`.
    pub async fn query_wallet_address(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["sub_wallet_id", "symbol"])?;
        self.transport.post(ADDRESS_LIST, params).await
    }

    pub async fn get_wallet_assets(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["sub_wallet_id", "symbol"])?;
        self.transport.get(WALLET_ASSETS, params).await
    }

    /// Show or hide wallets in the app. `sub_wallet_ids` is a comma
    /// separated list.
    pub async fn change_wallet_show_status(
        &self,
        sub_wallet_ids: &str,
        status: WalletShowStatus,
    ) -> Result<Value> {
        if sub_wallet_ids.trim().is_empty() {
            return Err(Error::invalid_field(
                "sub_wallet_ids",
                "parameter `sub_wallet_ids` is required",
            ));
        }

        let params = Payload::from_iter([
            ("sub_wallet_ids".to_string(), Value::from(sub_wallet_ids)),
            ("app_show_status".to_string(), Value::from(status as u8)),
        ]);
        self.transport.post(CHANGE_SHOW_STATUS, params).await
    }

    /// As [`Self::change_wallet_show_status`] with untyped parameters.
    /// `app_show_status` must be 1 or 2.
    pub async fn change_show_status(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["sub_wallet_ids"])?;
        let valid = params::int_field(&params, "app_show_status")
            .and_then(|status| u8::try_from(status).ok())
            .and_then(WalletShowStatus::from_repr)
            .is_some();
        if !valid {
            return Err(Error::invalid_field(
                "app_show_status",
                "parameter `app_show_status` is required and must be 1 or 2",
            ));
        }

        self.transport.post(CHANGE_SHOW_STATUS, params).await
    }

    /// Wallet and chain of a deposit `address`.
    pub async fn wallet_address_info(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["address"])?;
        self.transport.get(ADDRESS_INFO, params).await
    }

    pub async fn address_info(&self, address: &str) -> Result<AddressInfo> {
        let params = Payload::from_iter([("address".to_string(), Value::from(address))]);
        match self.wallet_address_info(params).await? {
            Value::Object(info) => AddressInfo::from_mapping(&info),
            _ => Err(Error::validation("address info is not a JSON object")),
        }
    }
}
