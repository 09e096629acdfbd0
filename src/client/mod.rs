//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod http;
mod raw;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{ApiErrorDetail, ApiKey, RequestParams, ValidationError};
use crate::resources::{
    AvailablePhoneNumbers, Balance, Brands, Calls, Messages, MessagingProfiles, NumberOrders,
    PartnerCampaigns, PhoneNumbers, PortingOrders, SimCards, Verifications, VerifyProfiles,
};
use crate::webhooks::{DEFAULT_TOLERANCE, WebhookError, Webhooks};

pub(crate) use http::HttpMethod;
use http::{BoxError, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use raw::{REQUEST_ID_HEADER, RawResponse};

const DEFAULT_BASE_URL: &str = "https://api.telnyx.com/v2";
const DEFAULT_USER_AGENT: &str = concat!("telnyx-rust/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TELNYX_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "TELNYX_BASE_URL";
/// Environment variable holding the base64 webhook public key.
pub const PUBLIC_KEY_ENV: &str = "TELNYX_PUBLIC_KEY";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TelnyxClient`] and every resource method.
///
/// This error preserves:
/// - transport failures (DNS, TLS, timeouts),
/// - API failures (non-2xx status with the decoded `errors` list),
/// - validation/parse failures,
/// - webhook verification failures.
pub enum TelnyxError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-successful HTTP status code returned by the API.
    #[error("API error (HTTP {status}){}", describe_errors(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
        body: Option<String>,
        request_id: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The base URL (or a URL built from it) is invalid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Webhook signature or timestamp check failed.
    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),

    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

fn describe_errors(errors: &[ApiErrorDetail]) -> String {
    match errors.first() {
        Some(first) => match first.detail.as_deref() {
            Some(detail) => format!(": {} {} ({detail})", first.code, first.title),
            None => format!(": {} {}", first.code, first.title),
        },
        None => String::new(),
    }
}

impl TelnyxError {
    /// HTTP status for [`TelnyxError::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error entries for [`TelnyxError::Api`]; empty otherwise.
    pub fn errors(&self) -> &[ApiErrorDetail] {
        match self {
            Self::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Platform error code of the first error entry (e.g. `"10015"`).
    pub fn first_error_code(&self) -> Option<&str> {
        self.errors().first().map(|error| error.code.as_str())
    }

    /// 401 or 403.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// Whether a caller may reasonably retry: transport failures, 408, 409, 429 and 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api { status, .. } => matches!(status, 408 | 409 | 429 | 500..=599),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TelnyxClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or webhook settings.
pub struct TelnyxClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    webhook_public_key: Option<String>,
    webhook_tolerance: Duration,
}

impl TelnyxClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            webhook_public_key: None,
            webhook_tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Override the API base URL (default `https://api.telnyx.com/v2`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Base64 Ed25519 public key used by [`Webhooks`] (portal: Account Settings → Keys).
    pub fn webhook_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.webhook_public_key = Some(public_key.into());
        self
    }

    /// Maximum allowed skew between the webhook timestamp and the local clock.
    pub fn webhook_tolerance(mut self, tolerance: Duration) -> Self {
        self.webhook_tolerance = tolerance;
        self
    }

    /// Build a [`TelnyxClient`].
    pub fn build(self) -> Result<TelnyxClient, TelnyxError> {
        let base_url = parse_base_url(&self.base_url)?.to_owned();

        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| TelnyxError::Transport(Box::new(err)))?;

        Ok(TelnyxClient {
            api_key: self.api_key,
            base_url,
            webhook_public_key: self.webhook_public_key,
            webhook_tolerance: self.webhook_tolerance,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(value: &str) -> Result<&str, TelnyxError> {
    let trimmed = value.trim();
    if Url::parse(trimmed)?.cannot_be_a_base() {
        return Err(TelnyxError::Config(format!(
            "base URL must be a hierarchical http(s) URL: {value}"
        )));
    }
    Ok(trimmed)
}

#[derive(Clone)]
/// High-level Telnyx client.
///
/// Holds credentials and the HTTP transport. Resources are reached through accessor methods
/// (`client.messages()`, `client.sim_cards()`, ...), each of which offers typed methods and a
/// `with_raw_response()` variant exposing the underlying HTTP response.
pub struct TelnyxClient {
    api_key: ApiKey,
    base_url: String,
    webhook_public_key: Option<String>,
    webhook_tolerance: Duration,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for TelnyxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnyxClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("webhook_tolerance", &self.webhook_tolerance)
            .finish_non_exhaustive()
    }
}

impl TelnyxClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`TelnyxClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            webhook_public_key: None,
            webhook_tolerance: DEFAULT_TOLERANCE,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TelnyxClientBuilder {
        TelnyxClientBuilder::new(api_key)
    }

    /// Build a client from `TELNYX_API_KEY`, and optionally `TELNYX_BASE_URL` and
    /// `TELNYX_PUBLIC_KEY`.
    pub fn from_env() -> Result<Self, TelnyxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TelnyxError> {
        let api_key = lookup(API_KEY_ENV)
            .ok_or_else(|| TelnyxError::Config(format!("{API_KEY_ENV} is not set")))?;
        let mut builder = Self::builder(ApiKey::new(api_key)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        if let Some(public_key) = lookup(PUBLIC_KEY_ENV).filter(|value| !value.trim().is_empty())
        {
            builder = builder.webhook_public_key(public_key);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn phone_numbers(&self) -> PhoneNumbers<'_> {
        PhoneNumbers::new(self)
    }

    pub fn available_phone_numbers(&self) -> AvailablePhoneNumbers<'_> {
        AvailablePhoneNumbers::new(self)
    }

    pub fn number_orders(&self) -> NumberOrders<'_> {
        NumberOrders::new(self)
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    pub fn messaging_profiles(&self) -> MessagingProfiles<'_> {
        MessagingProfiles::new(self)
    }

    pub fn calls(&self) -> Calls<'_> {
        Calls::new(self)
    }

    pub fn sim_cards(&self) -> SimCards<'_> {
        SimCards::new(self)
    }

    pub fn porting_orders(&self) -> PortingOrders<'_> {
        PortingOrders::new(self)
    }

    pub fn verifications(&self) -> Verifications<'_> {
        Verifications::new(self)
    }

    pub fn verify_profiles(&self) -> VerifyProfiles<'_> {
        VerifyProfiles::new(self)
    }

    pub fn brands(&self) -> Brands<'_> {
        Brands::new(self)
    }

    pub fn partner_campaigns(&self) -> PartnerCampaigns<'_> {
        PartnerCampaigns::new(self)
    }

    pub fn balance(&self) -> Balance<'_> {
        Balance::new(self)
    }

    /// Webhook verification using the configured public key and tolerance.
    pub fn webhooks(&self) -> Webhooks {
        Webhooks::new(self.webhook_public_key.clone(), self.webhook_tolerance)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TelnyxError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| {
                TelnyxError::Config(format!(
                    "base URL cannot carry path segments: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send one request and decode a 2xx body into `T`.
    ///
    /// `params` become the query string for `GET`/`DELETE` and the JSON body otherwise.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        segments: &[&str],
        params: RequestParams,
    ) -> Result<RawResponse<T>, TelnyxError> {
        let mut url = self.endpoint(segments)?;

        let mut headers = vec![
            (
                "Authorization".to_owned(),
                format!("Bearer {}", self.api_key.as_str()),
            ),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];

        let body = if method.has_body() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
            let body = crate::transport::encode_json_body(&params)
                .map_err(|err| TelnyxError::Parse(Box::new(err)))?;
            Some(body)
        } else {
            let pairs = crate::transport::encode_query(&params);
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
            None
        };

        tracing::debug!(method = %method, path = url.path(), "dispatching Telnyx request");

        let response = self
            .http
            .send(HttpRequest {
                method,
                url: url.into(),
                headers,
                body,
            })
            .await
            .map_err(TelnyxError::Transport)?;

        tracing::debug!(status = response.status, "received Telnyx response");

        decode_response(response)
    }
}

fn decode_response<T: DeserializeOwned>(
    response: HttpResponse,
) -> Result<RawResponse<T>, TelnyxError> {
    let HttpResponse {
        status,
        headers,
        body,
    } = response;

    if !(200..=299).contains(&status) {
        let errors = crate::transport::decode_error_response(&body);
        let request_id = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(REQUEST_ID_HEADER))
            .map(|(_, value)| value.clone());
        tracing::warn!(
            status,
            code = errors.first().map(|error| error.code.as_str()),
            request_id = request_id.as_deref(),
            "Telnyx API request failed"
        );
        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body)
        };
        return Err(TelnyxError::Api {
            status,
            errors,
            body,
            request_id,
        });
    }

    let data = crate::transport::decode_json_response::<T>(&body)
        .map_err(|err| TelnyxError::Parse(Box::new(err)))?;
    Ok(RawResponse::new(status, headers, body, data))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::http::BoxFuture;
    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct RecordedRequest {
        pub method: HttpMethod,
        pub url: Url,
        pub headers: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
    }

    impl RecordedRequest {
        pub fn path(&self) -> &str {
            self.url.path()
        }

        pub fn query(&self, key: &str) -> Option<String> {
            self.url
                .query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        }

        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last_request: Option<RecordedRequest>,
        response_status: u16,
        response_headers: Vec<(String, String)>,
        response_body: String,
    }

    impl FakeTransport {
        pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last_request: None,
                    response_status,
                    response_headers: vec![("x-request-id".to_owned(), "req-test".to_owned())],
                    response_body: response_body.into(),
                })),
            }
        }

        pub fn last_request(&self) -> RecordedRequest {
            self.state
                .lock()
                .unwrap()
                .last_request
                .clone()
                .expect("no request was sent")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send<'a>(
            &'a self,
            request: HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.last_request = Some(RecordedRequest {
                    method: request.method,
                    url: Url::parse(&request.url).unwrap(),
                    headers: request.headers,
                    body: request
                        .body
                        .map(|body| serde_json::from_str(&body).unwrap()),
                });
                Ok(HttpResponse {
                    status: state.response_status,
                    headers: state.response_headers.clone(),
                    body: state.response_body.clone(),
                })
            })
        }
    }

    pub(crate) fn make_client(transport: FakeTransport) -> TelnyxClient {
        TelnyxClient {
            api_key: ApiKey::new("KEY_TEST").unwrap(),
            base_url: "https://example.invalid/v2".to_owned(),
            webhook_public_key: None,
            webhook_tolerance: DEFAULT_TOLERANCE,
            http: Arc::new(transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{Value, json};

    use super::testing::{FakeTransport, make_client};
    use super::*;
    use crate::domain::Data;

    #[tokio::test]
    async fn get_request_encodes_query_and_auth_headers() {
        let transport = FakeTransport::new(200, r#"{"data": {"id": "1"}}"#);
        let client = make_client(transport.clone());

        let params = RequestParams::new().with("filter", json!({ "status": "active" }));
        let raw: RawResponse<Data<Value>> = client
            .request(HttpMethod::Get, &["phone_numbers"], params)
            .await
            .unwrap();
        assert_eq!(raw.status(), 200);
        assert_eq!(raw.request_id(), Some("req-test"));
        assert_eq!(raw.into_inner(), json!({ "id": "1" }));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "/v2/phone_numbers");
        assert_eq!(request.query("filter[status]").as_deref(), Some("active"));
        assert_eq!(request.header("authorization"), Some("Bearer KEY_TEST"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn post_request_sends_json_body() {
        let transport = FakeTransport::new(200, r#"{"data": {}}"#);
        let client = make_client(transport.clone());

        let params = RequestParams::new().with("text", "hi").with("tags", Value::Null);
        let _: RawResponse<Data<Value>> = client
            .request(HttpMethod::Post, &["messages"], params)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, Some(json!({ "text": "hi", "tags": null })));
        assert_eq!(request.url.query(), None);
    }

    #[tokio::test]
    async fn path_segments_are_percent_encoded() {
        let transport = FakeTransport::new(200, r#"{"data": {}}"#);
        let client = make_client(transport.clone());

        let _: RawResponse<Data<Value>> = client
            .request(HttpMethod::Get, &["phone_numbers", "+13125550001/x"], RequestParams::new())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().path(),
            "/v2/phone_numbers/+13125550001%2Fx"
        );
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error_with_details() {
        let body = r#"{"errors": [{"code": "10009", "title": "Authentication failed", "detail": "Could not understand the provided credentials."}]}"#;
        let transport = FakeTransport::new(401, body);
        let client = make_client(transport);

        let err = client
            .request::<Data<Value>>(HttpMethod::Get, &["balance"], RequestParams::new())
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
        assert!(!err.is_retryable());
        assert_eq!(err.first_error_code(), Some("10009"));
        assert_eq!(
            err.to_string(),
            "API error (HTTP 401): 10009 Authentication failed (Could not understand the provided credentials.)"
        );
        match err {
            TelnyxError::Api {
                status,
                body,
                request_id,
                ..
            } => {
                assert_eq!(status, 401);
                assert!(body.is_some());
                assert_eq!(request_id.as_deref(), Some("req-test"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_maps_to_none() {
        let transport = FakeTransport::new(503, "   ");
        let client = make_client(transport);

        let err = client
            .request::<Data<Value>>(HttpMethod::Get, &["balance"], RequestParams::new())
            .await
            .unwrap_err();
        assert!(err.is_retryable());
        assert!(err.errors().is_empty());
        assert!(matches!(
            err,
            TelnyxError::Api {
                status: 503,
                body: None,
                ..
            }
        ));
        assert_eq!(err.to_string(), "API error (HTTP 503)");
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let client = make_client(transport);

        let err = client
            .request::<Data<Value>>(HttpMethod::Get, &["balance"], RequestParams::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TelnyxError::Parse(_)));
    }

    #[test]
    fn error_classification_helpers() {
        let api = |status| TelnyxError::Api {
            status,
            errors: Vec::new(),
            body: None,
            request_id: None,
        };
        assert!(api(404).is_not_found());
        assert!(api(429).is_rate_limited());
        assert!(api(429).is_retryable());
        assert!(api(403).is_auth_error());
        assert!(!api(422).is_retryable());
        assert_eq!(api(422).status(), Some(422));
        assert_eq!(TelnyxError::Config("x".to_owned()).status(), None);
    }

    #[test]
    fn builder_base_url_override_is_applied() {
        let client = TelnyxClient::builder(ApiKey::new("key").unwrap())
            .base_url("http://localhost:8080/v2/")
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v2/");
        assert_eq!(
            client.endpoint(&["messages"]).unwrap().as_str(),
            "http://localhost:8080/v2/messages"
        );
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = TelnyxClient::builder(ApiKey::new("key").unwrap())
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, TelnyxError::Url(_)));

        let err = TelnyxClient::builder(ApiKey::new("key").unwrap())
            .base_url("mailto:ops@example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, TelnyxError::Config(_)));
    }

    #[test]
    fn from_lookup_reads_environment_values() {
        let vars = HashMap::from([
            (API_KEY_ENV, "KEY_FROM_ENV"),
            (BASE_URL_ENV, "https://example.invalid/v2"),
            (PUBLIC_KEY_ENV, "   "),
        ]);
        let client =
            TelnyxClient::from_lookup(|name| vars.get(name).map(|v| (*v).to_owned())).unwrap();
        assert_eq!(client.api_key.as_str(), "KEY_FROM_ENV");
        assert_eq!(client.base_url(), "https://example.invalid/v2");
        assert!(client.webhook_public_key.is_none());
    }

    #[test]
    fn from_lookup_requires_api_key() {
        let err = TelnyxClient::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, TelnyxError::Config(message) if message.contains(API_KEY_ENV)));
    }

    #[test]
    fn webhook_settings_flow_into_webhooks() {
        let client = TelnyxClient::builder(ApiKey::new("key").unwrap())
            .webhook_public_key("cHVibGljLWtleQ==")
            .webhook_tolerance(Duration::from_secs(30))
            .build()
            .unwrap();
        assert_eq!(
            client.webhooks(),
            Webhooks::new(Some("cHVibGljLWtleQ==".to_owned()), Duration::from_secs(30))
        );
        assert_eq!(
            TelnyxClient::new(ApiKey::new("key").unwrap())
                .webhooks()
                .tolerance(),
            DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = make_client(FakeTransport::new(200, ""));
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("KEY_TEST"));
        assert!(rendered.contains("example.invalid"));
    }
}
