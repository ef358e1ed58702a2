// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::{
    models::{FromMapping, NotifyData},
    transport::Transport,
    Payload, Result,
};

/// Deposit, withdrawal and Web3 callbacks pushed by the platform.
pub struct NotifyApi<'a> {
    transport: &'a Transport,
}

impl<'a> NotifyApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn notify_request(&self, cipher: &str) -> Result<Payload> {
        self.transport.open_notification(cipher)
    }

    pub fn notify(&self, cipher: &str) -> Result<NotifyData> {
        NotifyData::from_mapping(&self.notify_request(cipher)?)
    }
}
