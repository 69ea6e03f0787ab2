use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, PAID_TRANSACTION, SECRET, STARTING_BALANCE, TOKEN, USER_ID};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

// --- auth/user ---

#[tokio::test]
async fn auth_user_returns_the_seeded_profile() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/auth/user",
            &format!("secret={SECRET}&token={TOKEN}&scopes=profile"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["id"], USER_ID);
    assert_eq!(body["user"]["discordID"], "690420846774321221");
}

#[tokio::test]
async fn auth_user_rejects_an_unknown_token() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/auth/user",
            &format!("secret={SECRET}&token=wrong"),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn auth_user_rejects_a_wrong_secret() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/auth/user",
            &format!("secret=wrong&token={TOKEN}"),
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
}

// --- pay/transaction/create (create and fetch share the path) ---

#[tokio::test]
async fn create_then_fetch_transaction() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/v1/pay/transaction/create",
            &format!("secret={SECRET}&user={USER_ID}&amount=5&notes=hi"),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    let id = body["transaction"].as_i64().unwrap();

    // Fetch through the same path, keyed on the payload shape.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/v1/pay/transaction/create",
            &format!("secret={SECRET}&transaction={id}"),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["transaction"]["id"], id);
    assert_eq!(body["transaction"]["user"], USER_ID);
    assert_eq!(body["transaction"]["amount"], 5);
    assert_eq!(body["transaction"]["status"], "0");
    assert_eq!(body["transaction"]["date_time"], "2021-05-01 12:00:00");
}

#[tokio::test]
async fn fetch_unknown_transaction_fails_in_band() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/pay/transaction/create",
            &format!("secret={SECRET}&transaction=999999"),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn seeded_transaction_is_paid() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/pay/transaction/create",
            &format!("secret={SECRET}&transaction={PAID_TRANSACTION}"),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["transaction"]["status"], "1");
}

// --- pay/send and pay/balance ---

#[tokio::test]
async fn send_reduces_the_balance() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/v1/pay/send",
            &format!("secret={SECRET}&party={USER_ID}&amount=30&notes="),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(form_request(
            "/v1/pay/balance",
            &format!("secret={SECRET}"),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    // Balance is a numeric string on the wire.
    assert_eq!(body["balance"], (STARTING_BALANCE - 30).to_string());
}

#[tokio::test]
async fn send_rejects_overdraft() {
    let app = app();
    let resp = app
        .oneshot(form_request(
            "/v1/pay/send",
            &format!("secret={SECRET}&party={USER_ID}&amount={}&notes=", STARTING_BALANCE + 1),
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
}
