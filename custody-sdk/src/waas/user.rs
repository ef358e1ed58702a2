// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use serde_json::Value;

use crate::{
    models::{FromMapping, UserInfo},
    params,
    transport::Transport,
    Error, Payload, Result,
};

const CREATE_USER: &str = "user/createUser";
const REGISTER_EMAIL: &str = "user/registerEmail";
const USER_INFO: &str = "user/info";
const SYNC_USER_LIST: &str = "user/syncList";

/// Registration and lookup of platform users.
pub struct UserApi<'a> {
    transport: &'a Transport,
}

impl<'a> UserApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Register a user by phone. Needs `country` (e.g. `86`) and `mobile`.
    pub async fn register_mobile_user(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["country", "mobile"])?;
        self.transport.post(CREATE_USER, params).await
    }

    /// Register a user by `email`.
    pub async fn register_email_user(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["email"])?;
        self.transport.post(REGISTER_EMAIL, params).await
    }

    pub async fn get_mobile_user(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["country", "mobile"])?;
        self.transport.post(USER_INFO, params).await
    }

    pub async fn get_email_user(&self, params: Payload) -> Result<Value> {
        params::require(&params, &["email"])?;
        self.transport.post(USER_INFO, params).await
    }

    /// Typed lookup by email.
    pub async fn email_user_info(&self, email: &str) -> Result<UserInfo> {
        let params = Payload::from_iter([("email".to_string(), Value::from(email))]);
        match self.get_email_user(params).await? {
            Value::Object(user) => UserInfo::from_mapping(&user),
            _ => Err(Error::validation("user info is not a JSON object")),
        }
    }

    /// Users with an id above `max_id`, 0 for the first page.
    pub async fn sync_user_list(&self, max_id: i64) -> Result<Value> {
        self.transport
            .post(SYNC_USER_LIST, params::max_id(max_id))
            .await
    }
}
