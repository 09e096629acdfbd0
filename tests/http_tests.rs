use std::time::Duration;

use serde_json::json;
use telnyx::{
    ApiKey, MessageSendParams, PageNumber, PageParams, PageSize, PhoneNumberFilter,
    PhoneNumberListParams, RawPhoneNumber, RequestParams, SimCardId, TelnyxClient, TelnyxError,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> TelnyxClient {
    assert_ok!(
        TelnyxClient::builder(assert_ok!(ApiKey::new("KEY_INTEGRATION")))
            .base_url(format!("{}/v2", server.uri()))
            .timeout(Duration::from_secs(5))
            .build()
    )
}

#[tokio::test]
async fn send_message_posts_json_with_bearer_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/messages"))
        .and(header("authorization", "Bearer KEY_INTEGRATION"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "to": "+18665550002",
            "from": "+18445550001",
            "text": "hello"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-123")
                .set_body_json(json!({
                    "data": {
                        "id": "40385f64-5717-4562-b3fc-2c963f66afa6",
                        "record_type": "message",
                        "direction": "outbound",
                        "type": "SMS",
                        "text": "hello",
                        "to": [{ "phone_number": "+18665550002", "status": "queued" }]
                    }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = MessageSendParams::text(
        assert_ok!(RawPhoneNumber::new("+18445550001")),
        assert_ok!(RawPhoneNumber::new("+18665550002")),
        "hello",
    );

    let raw = assert_ok!(
        client
            .messages()
            .with_raw_response()
            .send(assert_ok!(RequestParams::from_serialize(&params)))
            .await
    );
    assert_eq!(raw.status(), 200);
    assert_eq!(raw.request_id(), Some("req-123"));
    assert_eq!(
        raw.data().data.id.as_str(),
        "40385f64-5717-4562-b3fc-2c963f66afa6"
    );
}

#[tokio::test]
async fn list_phone_numbers_sends_deep_object_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/phone_numbers"))
        .and(query_param("filter[tag]", "vip"))
        .and(query_param("page[number]", "2"))
        .and(query_param("page[size]", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "1293384261075731499", "phone_number": "+19705555098" }],
            "meta": { "page_number": 2, "page_size": 10, "total_pages": 3, "total_results": 25 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let params = PhoneNumberListParams {
        filter: PhoneNumberFilter {
            tag: Some("vip".to_owned()),
            ..Default::default()
        },
        page: PageParams::new(assert_ok!(PageNumber::new(2)), assert_ok!(PageSize::new(10))),
        ..Default::default()
    };

    let page = assert_ok!(client.phone_numbers().list(&params).await);
    assert_eq!(page.data.len(), 1);
    assert!(page.has_next_page());
    let next = page.next_page_params().map(|next| next.number);
    assert_eq!(next, Some(Some(assert_ok!(PageNumber::new(3)))));
}

#[tokio::test]
async fn api_errors_carry_status_codes_and_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v2/sim_cards/6a09cdc3-8948-47f0-aa62-74ac943d6c58/actions/enable",
        ))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("x-request-id", "req-err")
                .set_body_json(json!({
                    "errors": [{
                        "code": "10015",
                        "title": "Bad Request",
                        "detail": "The SIM card is already enabled",
                        "source": { "pointer": "/status" }
                    }]
                })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let id = assert_ok!(SimCardId::new("6a09cdc3-8948-47f0-aa62-74ac943d6c58"));
    let err = client.sim_cards().enable(&id).await.unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.first_error_code(), Some("10015"));
    assert!(!err.is_retryable());
    match &err {
        TelnyxError::Api { request_id, .. } => assert_eq!(request_id.as_deref(), Some("req-err")),
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(err.to_string().contains("The SIM card is already enabled"));
}

#[tokio::test]
async fn server_errors_are_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/balance"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.balance().retrieve().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
    assert!(err.errors().is_empty());
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let client = assert_ok!(
        TelnyxClient::builder(assert_ok!(ApiKey::new("KEY_INTEGRATION")))
            .base_url("http://127.0.0.1:1/v2")
            .timeout(Duration::from_secs(2))
            .build()
    );
    let err = client.balance().retrieve().await.unwrap_err();
    assert!(matches!(err, TelnyxError::Transport(_)));
    assert!(err.is_retryable());
}
