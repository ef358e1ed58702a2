// Copyright (c) 2026 The Custody SDK Authors
//
// SPDX-License-Identifier: Apache-2.0
//

mod common;

use std::sync::Arc;

use assert_json_diff::{assert_json_eq, assert_json_include};
use common::*;
use custody_sdk::{
    config::MpcConfig, enums::WalletShowStatus, mpc::MpcClient, CryptoProvider, Error,
    RsaCryptoProvider,
};
use rstest::rstest;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer,
};
use zeroize::Zeroizing;

const WITHDRAW_SIGNATURE: &str = include_str!("fixtures/withdraw_sign.txt");

fn config(server: &MockServer) -> MpcConfig {
    MpcConfig {
        app_id: APP_ID.into(),
        rsa_private_key: Zeroizing::new(CLIENT_PRIVATE.into()),
        waas_public_key: Zeroizing::new(PLATFORM_PUBLIC.into()),
        domain: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    }
}

fn client(server: &MockServer) -> MpcClient {
    MpcClient::new(config(server)).unwrap()
}

/// Signing key is the client key, so signatures verify with `client_public`.
fn signing_client(server: &MockServer) -> MpcClient {
    MpcClient::new(MpcConfig {
        sign_private_key: Zeroizing::new(CLIENT_PRIVATE.into()),
        ..config(server)
    })
    .unwrap()
}

async fn echo(server: &MockServer, http_method: &str, endpoint: &str) {
    Mock::given(method(http_method))
        .and(path(endpoint))
        .respond_with(EchoArgs)
        .mount(server)
        .await;
}

fn withdraw_params() -> Value {
    json!({
        "request_id": "req-1",
        "sub_wallet_id": 123,
        "symbol": "ETH",
        "address_to": "0xabc",
        "amount": "1.5000",
        "memo": "",
        "remark": "payout",
        "not_a_withdraw_field": 1,
    })
}

#[tokio::test]
async fn signed_withdraw() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/billing/withdraw").await;

    let mut params = mapping(withdraw_params());
    params.insert("need_transaction_sign".into(), Value::from(true));
    let mut sent = signing_client(&server)
        .withdraw()
        .withdraw(params)
        .await
        .unwrap();

    sent.as_object_mut().unwrap().remove("time");
    assert_json_eq!(
        sent,
        json!({
            "request_id": "req-1",
            "sub_wallet_id": 123,
            "symbol": "ETH",
            "address_to": "0xabc",
            "amount": "1.5000",
            "remark": "payout",
            "sign": WITHDRAW_SIGNATURE,
            "charset": "utf-8",
        })
    );
}

#[tokio::test]
async fn unsigned_withdraw_has_no_sign_field() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/billing/withdraw").await;

    let sent = client(&server)
        .withdraw()
        .withdraw(mapping(withdraw_params()))
        .await
        .unwrap();
    assert!(sent.get("sign").is_none());
    assert!(sent.get("not_a_withdraw_field").is_none());
}

#[tokio::test]
async fn signing_without_key_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(EchoArgs)
        .expect(0)
        .mount(&server)
        .await;

    let mut params = mapping(withdraw_params());
    params.insert("need_transaction_sign".into(), Value::from(1));
    let err = client(&server)
        .withdraw()
        .withdraw(params)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{err:?}");
}

#[tokio::test]
async fn signed_web3_transaction() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/web3/trans/create").await;

    let sent = signing_client(&server)
        .web3()
        .create_web3_trans(mapping(json!({
            "request_id": "w3-1",
            "sub_wallet_id": 77,
            "main_chain_symbol": "ETH",
            "interactive_contract": "0xDEF",
            "amount": "0",
            "gas_price": "20",
            "gas_limit": "21000",
            "input_data": "",
            "trans_type": 0,
            "dapp_name": "swap",
            "dapp_url": "",
            "need_transaction_sign": true,
        })))
        .await
        .unwrap();

    assert_json_include!(
        actual: &sent,
        expected: json!({"input_data": "", "dapp_name": "swap", "trans_type": 0})
    );
    assert!(sent.get("dapp_url").is_none());

    let signature = sent["sign"].as_str().unwrap();
    let text = "amount=0&interactive_contract=0xdef&main_chain_symbol=eth\
                &request_id=w3-1&sub_wallet_id=77";
    assert!(envelope::signing::verify_text(text, signature, &client_public()).unwrap());
}

#[tokio::test]
async fn web3_requires_every_field() {
    let server = MockServer::start().await;
    let err = client(&server)
        .web3()
        .create_web3_trans(mapping(json!({"request_id": "w3-1"})))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn deposit_records_use_query_string() {
    let server = MockServer::start().await;
    echo(&server, "GET", "/api/mpc/billing/deposit_list").await;

    let sent = client(&server)
        .deposit()
        .get_deposit_records(&[11, 12])
        .await
        .unwrap();
    assert_eq!(sent["ids"], "11,12");

    let err = client(&server)
        .deposit()
        .get_deposit_records(&[])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn typed_deposit_sync() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mpc/billing/sync_deposit_list"))
        .respond_with(sealed_success(json!([
            {"id": "501", "symbol": "ETH", "amount": "0.1", "status": 2000},
            {"id": 502, "symbol": "ETH", "amount": "0.2"},
        ])))
        .mount(&server)
        .await;

    let records = client(&server).deposit().deposits_since(500).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 501);
    assert_eq!(records[1].id, 502);
}

#[rstest]
#[case(json!({"sub_wallet_name": "a".repeat(50)}), true)]
#[case(json!({"sub_wallet_name": "a".repeat(51)}), false)]
#[case(json!({"sub_wallet_name": ""}), false)]
#[case(json!({}), false)]
#[tokio::test]
async fn wallet_names(#[case] params: Value, #[case] accepted: bool) {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/sub_wallet/create").await;

    let result = client(&server).wallet().create_wallet(mapping(params)).await;
    assert_eq!(result.is_ok(), accepted, "{result:?}");
}

#[rstest]
#[case(json!(1), true)]
#[case(json!("2"), true)]
#[case(json!(3), false)]
#[case(json!(0), false)]
#[tokio::test]
async fn show_status_values(#[case] status: Value, #[case] accepted: bool) {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/sub_wallet/change_show_status").await;

    let result = client(&server)
        .wallet()
        .change_show_status(mapping(json!({
            "sub_wallet_ids": "1,2",
            "app_show_status": status,
        })))
        .await;
    assert_eq!(result.is_ok(), accepted, "{result:?}");
}

#[tokio::test]
async fn typed_show_status() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/sub_wallet/change_show_status").await;

    let sent = client(&server)
        .wallet()
        .change_wallet_show_status("9", WalletShowStatus::Hide)
        .await
        .unwrap();
    assert_json_include!(actual: sent, expected: json!({"sub_wallet_ids": "9", "app_show_status": 2}));
}

#[rstest]
#[case(json!({"buy_type": 0}), false)]
#[case(json!({"buy_type": 2, "address_to": "T2"}), false)]
#[case(json!({"buy_type": 2, "address_to": "T2", "contract_address": "TC"}), true)]
#[case(json!({"buy_type": 1}), true)]
#[case(json!({}), true)]
#[tokio::test]
async fn tron_delegate_buy_types(#[case] extra: Value, #[case] accepted: bool) {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/tron/delegate").await;

    let mut params = mapping(json!({
        "request_id": "t-1",
        "address_from": "T1",
        "service_charge_type": "10010",
    }));
    params.extend(mapping(extra));
    let result = client(&server)
        .tron_resource()
        .create_tron_delegate(params)
        .await;
    assert_eq!(result.is_ok(), accepted, "{result:?}");
}

#[tokio::test]
async fn auto_collect_settings_are_picked() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/auto_collect/symbol/set").await;

    let sent = client(&server)
        .auto_sweep()
        .set_auto_collect_symbol(mapping(json!({
            "symbol": "USDTERC20",
            "collect_min": "100",
            "fueling_limit": "0.01",
            "ignored": true,
        })))
        .await
        .unwrap();
    assert!(sent.get("ignored").is_none());
    assert_eq!(sent["fueling_limit"], "0.01");
}

#[tokio::test]
async fn workspace_queries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mpc/wallet/open_coin"))
        .respond_with(sealed_success(json!([{"coin_net": "ETH"}])))
        .mount(&server)
        .await;
    echo(&server, "GET", "/api/mpc/chain_height").await;

    let client = client(&server);
    let chains = client.workspace().get_support_main_chain().await.unwrap();
    assert_eq!(chains[0]["coin_net"], "ETH");

    let sent = client.workspace().get_last_block_height("TRX").await.unwrap();
    assert_eq!(sent["base_symbol"], "TRX");

    let err = client.workspace().get_last_block_height("").await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn missing_platform_key_is_configuration_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/mpc/wallet/open_coin"))
        .respond_with(sealed_success(json!({})))
        .mount(&server)
        .await;

    let without_key = MpcConfig {
        waas_public_key: Zeroizing::default(),
        ..config(&server)
    };
    assert!(matches!(
        MpcClient::new(without_key.clone()),
        Err(Error::Configuration(_))
    ));

    let provider = RsaCryptoProvider::from_pem(Some(CLIENT_PRIVATE), None, None).unwrap();
    let client = MpcClient::with_provider(without_key, Arc::new(provider)).unwrap();
    let err = client
        .workspace()
        .get_support_main_chain()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)), "{err:?}");
}

#[tokio::test]
async fn zero_timeout_is_rejected() {
    let server = MockServer::start().await;
    let err = MpcClient::new(MpcConfig {
        timeout_secs: 0,
        ..config(&server)
    })
    .err()
    .unwrap();
    assert!(matches!(err, Error::Configuration(_)));
}

/// Delegates everything but signing, which stays outside the process.
struct RemoteSigner(RsaCryptoProvider);

impl CryptoProvider for RemoteSigner {
    fn encrypt(&self, text: &str) -> envelope::Result<String> {
        self.0.encrypt(text)
    }

    fn decrypt(&self, cipher: &str) -> envelope::Result<String> {
        self.0.decrypt(cipher)
    }

    fn sign(&self, _text: &str) -> envelope::Result<String> {
        Ok("remote-signature".into())
    }

    fn verify(&self, text: &str, signature: &str) -> envelope::Result<bool> {
        self.0.verify(text, signature)
    }
}

#[tokio::test]
async fn custom_provider_signs() {
    let server = MockServer::start().await;
    echo(&server, "POST", "/api/mpc/billing/withdraw").await;

    let inner =
        RsaCryptoProvider::from_pem(Some(CLIENT_PRIVATE), Some(PLATFORM_PUBLIC), None).unwrap();
    let client = MpcClient::with_provider(
        MpcConfig {
            rsa_private_key: Zeroizing::default(),
            ..config(&server)
        },
        Arc::new(RemoteSigner(inner)),
    )
    .unwrap();

    let mut params = mapping(withdraw_params());
    params.insert("need_transaction_sign".into(), Value::from("true"));
    let sent = client.withdraw().withdraw(params).await.unwrap();
    assert_eq!(sent["sign"], "remote-signature");
}

#[test]
fn mpc_notification() {
    let offline = MpcClient::new(MpcConfig {
        app_id: APP_ID.into(),
        rsa_private_key: Zeroizing::new(CLIENT_PRIVATE.into()),
        waas_public_key: Zeroizing::new(PLATFORM_PUBLIC.into()),
        ..Default::default()
    })
    .unwrap();

    let cipher = sealed_notification(&json!({
        "side": "deposit",
        "sub_wallet_id": "1000537",
        "symbol": "USDTERC20",
        "amount": "12.5",
        "txid": "0x01",
    }));
    let notification = offline.notify().notify(&cipher).unwrap();
    assert_eq!(notification.sub_wallet_id, 1000537);
    assert_eq!(notification.amount, "12.5");

    let raw = offline
        .notify()
        .notify_request(include_str!("fixtures/notify_cipher.txt"))
        .unwrap();
    assert_eq!(raw["sub_wallet_id"], 1000537);
}
