use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nobitex_api_client::error::{NobitexError, OrderRejection};
use nobitex_api_client::rest::{NobitexApi, NobitexRestClient};
use nobitex_api_client::rest::private::{
    CancelAllOrdersRequest, CreateOrderRequest, OpenOrdersRequest,
};
use nobitex_api_client::types::{DstCurrency, ExecutionType, Side, UpdateOrderStatus};

fn build_client(server: &MockServer) -> NobitexRestClient {
    NobitexRestClient::builder()
        .base_url(server.uri())
        .token("test_token")
        .build()
}

fn ok(payload: serde_json::Value) -> ResponseTemplate {
    let mut body = json!({"status": "ok"});
    if let (Some(target), Some(extra)) = (body.as_object_mut(), payload.as_object()) {
        target.extend(extra.clone());
    }
    ResponseTemplate::new(200).set_body_json(body)
}

fn limit_order() -> CreateOrderRequest {
    CreateOrderRequest::new(
        Side::Buy,
        ExecutionType::Limit,
        "BTC",
        DstCurrency::Rls,
        "0.6".parse().unwrap(),
        "520000000".parse().unwrap(),
    )
}

#[tokio::test]
async fn test_create_limit_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/market/orders/add"))
        .and(header("authorization", "Token test_token"))
        .and(body_json(json!({
            "type": "buy",
            "execution": "limit",
            "srcCurrency": "btc",
            "dstCurrency": "rls",
            "amount": "0.6",
            "price": 520000000.0
        })))
        .respond_with(ok(json!({"order": {"id": 25, "status": "Active"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let placed = client.create_order(&limit_order()).await.unwrap();
    assert_eq!(placed["order"]["id"], json!(25));
}

#[tokio::test]
async fn test_create_stop_order_without_stop_price_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    for execution in [ExecutionType::StopLimit, ExecutionType::StopMarket] {
        let request = CreateOrderRequest {
            execution,
            ..limit_order()
        };
        let err = client.create_order(&request).await.unwrap_err();
        assert!(matches!(err, NobitexError::InvalidInput { .. }), "{err:?}");
        assert_eq!(err.operation(), "create_order");
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_stop_limit_order_sends_stop_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/market/orders/add"))
        .and(body_json(json!({
            "type": "sell",
            "execution": "stop_limit",
            "srcCurrency": "eth",
            "dstCurrency": "usdt",
            "amount": "1.25",
            "price": 1800.5,
            "stopPrice": 1810.0
        })))
        .respond_with(ok(json!({"order": {"id": 26}})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CreateOrderRequest::new(
        Side::Sell,
        ExecutionType::StopLimit,
        "ETH",
        DstCurrency::Usdt,
        "1.25".parse().unwrap(),
        "1800.5".parse().unwrap(),
    )
    .stop_price("1810".parse().unwrap());
    let placed = client.create_order(&request).await.unwrap();
    assert_eq!(placed["order"]["id"], json!(26));
}

#[tokio::test]
async fn test_create_order_rejection_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/market/orders/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failed",
            "code": "BadPrice",
            "message": "Price is far from market"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.create_order(&limit_order()).await.unwrap_err();
    match &err {
        NobitexError::OrderRejected {
            reason, message, ..
        } => {
            assert_eq!(*reason, OrderRejection::BadPrice);
            assert_eq!(message, "Price is far from market");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.arguments()["srcCurrency"], json!("btc"));
}

#[tokio::test]
async fn test_private_call_without_token_sends_nothing() {
    let server = MockServer::start().await;
    let client = NobitexRestClient::builder().base_url(server.uri()).build();

    let err = client.user_profile().await.unwrap_err();
    assert!(matches!(err, NobitexError::InvalidCredential { .. }), "{err:?}");

    let err = client.create_order(&limit_order()).await.unwrap_err();
    assert!(matches!(err, NobitexError::InvalidCredential { .. }), "{err:?}");

    let err = client.balance("btc").await.unwrap_err();
    assert!(matches!(err, NobitexError::InvalidCredential { .. }), "{err:?}");

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_auth_header_does_not_leak_into_public_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/profile"))
        .respond_with(ok(json!({"profile": {"username": "name@example.com"}})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/orderbook/BTCIRT"))
        .respond_with(ok(json!({"bids": [], "asks": []})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.user_profile().await.unwrap();
    client.orderbook("BTCIRT").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Token test_token"
    );
    assert!(requests[1].headers.get("authorization").is_none());
    assert!(client.default_headers().get("authorization").is_none());
}

#[tokio::test]
async fn test_set_token_enables_private_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/limitations"))
        .and(header("authorization", "Token later"))
        .respond_with(ok(json!({"limitations": {}})))
        .mount(&server)
        .await;

    let mut client = NobitexRestClient::builder().base_url(server.uri()).build();
    assert!(client.user_limitations().await.is_err());

    client.set_token("later");
    let limitations = client.user_limitations().await.unwrap();
    assert_eq!(limitations["limitations"], json!({}));
}

#[tokio::test]
async fn test_order_status_and_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/market/orders/status"))
        .and(body_json(json!({"id": 5851})))
        .respond_with(ok(json!({"order": {"id": 5851, "status": "Active"}})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/market/orders/update-status"))
        .and(body_json(json!({"id": 5851, "status": "cancel"})))
        .respond_with(ok(json!({"updatedStatus": "Canceled"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.order_status(5851).await.unwrap();
    assert_eq!(order["order"]["status"], json!("Active"));

    let updated = client
        .update_order_status(5851, UpdateOrderStatus::Cancel)
        .await
        .unwrap();
    assert_eq!(updated["updatedStatus"], json!("Canceled"));
}

#[tokio::test]
async fn test_open_orders_and_cancel_all() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/market/orders/list"))
        .and(body_json(json!({"status": "open", "details": 1})))
        .respond_with(ok(json!({"orders": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/market/orders/cancel-all"))
        .and(body_json(json!({
            "srcCurrency": "btc",
            "dstCurrency": "rls",
            "execution": "market"
        })))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = client
        .open_orders(&OpenOrdersRequest::default())
        .await
        .unwrap();
    assert_eq!(orders["orders"], json!([]));

    let cancelled = client
        .cancel_all_orders(&CancelAllOrdersRequest::new("BTC", DstCurrency::Rls))
        .await
        .unwrap();
    assert_eq!(cancelled, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_wallet_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/list"))
        .respond_with(ok(json!({"wallets": [{"id": 1, "currency": "rls"}]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/wallets"))
        .and(body_json(json!({"currencies": "rls,btc"})))
        .respond_with(ok(json!({"wallets": {"RLS": {}, "BTC": {}}})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/balance"))
        .and(body_json(json!({"currency": "ltc"})))
        .respond_with(ok(json!({"balance": "10.2649975000"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/deposits/list"))
        .and(body_json(json!({"wallet": "all"})))
        .respond_with(ok(json!({"deposits": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/transactions/list"))
        .and(body_json(json!({"wallet": "4159"})))
        .respond_with(ok(json!({"transactions": []})))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let all = client.user_wallets(None).await.unwrap();
    assert_eq!(all["wallets"][0]["currency"], json!("rls"));

    let filter = vec!["RLS".to_string(), "btc".to_string()];
    let some = client.user_wallets(Some(filter.as_slice())).await.unwrap();
    assert!(some["wallets"].get("BTC").is_some());

    let balance = client.balance("LTC").await.unwrap();
    assert_eq!(balance["balance"], json!("10.2649975000"));

    let deposits = client.deposits_list(None).await.unwrap();
    assert_eq!(deposits["deposits"], json!([]));

    let transactions = client.transactions_list(4159).await.unwrap();
    assert_eq!(transactions["transactions"], json!([]));
}

#[tokio::test]
async fn test_bank_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/cards-add"))
        .and(body_json(json!({"number": "5041721011111111", "bank": "resalat"})))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/account-add"))
        .and(body_json(json!({
            "number": "5041721011111111",
            "shaba": "ir123456789012345678901234",
            "bank": "resalat"
        })))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/generate-address"))
        .and(body_json(json!({"currency": "btc"})))
        .respond_with(ok(json!({"address": "LRf3vuTMy4UwD5b72G84hmkfGBQYJeTwUs"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client
        .add_bank_card("5041721011111111", "Resalat")
        .await
        .unwrap();
    client
        .add_bank_account("5041721011111111", "IR123456789012345678901234", "Resalat")
        .await
        .unwrap();
    let address = client.generate_wallet_address("BTC").await.unwrap();
    assert!(address["address"].is_string());
}

#[tokio::test]
async fn test_cancel_all_with_non_finite_hours_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CancelAllOrdersRequest::new("btc", DstCurrency::Rls).hours(f64::NAN);
    let err = client.cancel_all_orders(&request).await.unwrap_err();
    assert!(matches!(err, NobitexError::InvalidInput { .. }), "{err:?}");
    assert_eq!(err.operation(), "cancel_all_orders");
    assert!(server.received_requests().await.unwrap().is_empty());
}

async fn deposit_count<C: NobitexApi>(client: &C, wallet_id: Option<u64>) -> usize {
    client
        .deposits_list(wallet_id)
        .await
        .ok()
        .and_then(|body| body["deposits"].as_array().map(Vec::len))
        .unwrap_or_default()
}

#[tokio::test]
async fn test_wallet_and_bank_calls_through_trait() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/deposits/list"))
        .and(body_json(json!({"wallet": "7"})))
        .respond_with(ok(json!({"deposits": [{"id": 1}, {"id": 2}]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/transactions/list"))
        .and(body_json(json!({"wallet": "7"})))
        .respond_with(ok(json!({"transactions": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/wallets/generate-address"))
        .respond_with(ok(json!({"address": "addr"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/cards-add"))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/account-add"))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(deposit_count(&client, Some(7)).await, 2);

    let api = &client;
    let transactions = NobitexApi::transactions_list(api, 7).await.unwrap();
    assert_eq!(transactions["transactions"], json!([]));
    let address = NobitexApi::generate_wallet_address(api, "btc").await.unwrap();
    assert_eq!(address["address"], json!("addr"));
    NobitexApi::add_bank_card(api, "5041721011111111", "resalat")
        .await
        .unwrap();
    NobitexApi::add_bank_account(api, "5041721011111111", "IR12", "resalat")
        .await
        .unwrap();
}
