// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! Callbacks pushed by the platform to the merchant.
//!
//! Deposit and withdrawal notifications, and the second confirmation of a
//! withdrawal, arrive encrypted by the platform. The merchant's answer to a
//! confirmation goes back encrypted with the merchant key.

use crate::{
    models::{FromMapping, NotifyData},
    transport::Transport,
    Payload, Result,
};

pub struct AsyncNotifyApi<'a> {
    transport: &'a Transport,
}

impl<'a> AsyncNotifyApi<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Decrypt a deposit or withdrawal notification.
    pub fn notify_request(&self, cipher: &str) -> Result<Payload> {
        self.transport.open_notification(cipher)
    }

    pub fn notify(&self, cipher: &str) -> Result<NotifyData> {
        NotifyData::from_mapping(&self.notify_request(cipher)?)
    }

    /// Decrypt the second confirmation request of a withdrawal.
    pub fn verify_request(&self, cipher: &str) -> Result<Payload> {
        self.transport.open_notification(cipher)
    }

    /// Encrypt the answer to a withdrawal confirmation request.
    pub fn verify_response(&self, withdraw: &Payload) -> Result<String> {
        self.transport.seal_reply(withdraw)
    }
}
