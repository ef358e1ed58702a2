// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

//! A fake platform for the API tests.
//!
//! The client encrypts with `client_private` and opens responses with
//! `platform_public`. The fake platform opens requests with `client_public`
//! and encrypts responses with `platform_private`.

#![allow(dead_code)]

use custody_sdk::Payload;
use envelope::{codec, RsaPrivateKey, RsaPublicKey};
use serde_json::{json, Value};
use wiremock::{Request, Respond, ResponseTemplate};

pub const APP_ID: &str = "test-app";

pub const CLIENT_PRIVATE: &str = include_str!("../fixtures/client_private.pem");
pub const CLIENT_PUBLIC: &str = include_str!("../fixtures/client_public.pem");
pub const PLATFORM_PRIVATE: &str = include_str!("../fixtures/platform_private.pem");
pub const PLATFORM_PUBLIC: &str = include_str!("../fixtures/platform_public.pem");

pub fn client_public() -> RsaPublicKey {
    envelope::parse_public_key(CLIENT_PUBLIC).unwrap()
}

pub fn platform_private() -> RsaPrivateKey {
    envelope::parse_private_key(PLATFORM_PRIVATE).unwrap()
}

pub fn mapping(value: Value) -> Payload {
    value.as_object().unwrap().to_owned()
}

/// `data` of a request as sent on the wire. base64url never needs
/// percent-encoding, so the form body splits on `&` and `=`.
fn wire_field(request: &Request, name: &str) -> Option<String> {
    if let Some((_, value)) = request.url.query_pairs().find(|(k, _)| k == name) {
        return Some(value.into_owned());
    }

    let body = String::from_utf8_lossy(&request.body);
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

/// Decrypted request arguments.
pub fn request_args(request: &Request) -> Payload {
    assert_eq!(wire_field(request, "app_id").as_deref(), Some(APP_ID));
    let data = wire_field(request, "data").expect("request carries no data");
    let plain = codec::public_decrypt(&data, &client_public()).unwrap();
    codec::parse_payload(&plain).unwrap()
}

/// Outer frame whose `data` is the encrypted `inner` frame.
pub fn sealed_frame(inner: &Value) -> Value {
    let text = serde_json::to_string(inner).unwrap();
    let cipher = codec::private_encrypt(text.as_bytes(), &platform_private()).unwrap();
    json!({ "code": 0, "msg": "success", "data": cipher })
}

/// Encrypted success response with `data`.
pub fn sealed_success(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(sealed_frame(&json!({
        "code": 0,
        "msg": "success",
        "data": data,
    })))
}

/// Platform-side encryption of a callback body.
pub fn sealed_notification(notification: &Value) -> String {
    let text = serde_json::to_string(notification).unwrap();
    codec::private_encrypt(text.as_bytes(), &platform_private()).unwrap()
}

/// Answers every request with its own decrypted arguments as `data`.
pub struct EchoArgs;

impl Respond for EchoArgs {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        sealed_success(Value::Object(request_args(request)))
    }
}
