use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::{blank_as_none, null_as_default};
use crate::domain::{Data, MessageId, MessagingProfileId, Omittable, RawPhoneNumber, RequestParams};

const PATH: &str = "messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "MMS")]
    Mms,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Body of `POST /messages`.
///
/// Either `from` or `messaging_profile_id` selects the sender, and either `text` or
/// `media_urls` carries the content.
pub struct MessageSendParams {
    pub to: RawPhoneNumber,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub from: Omittable<RawPhoneNumber>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub messaging_profile_id: Omittable<MessagingProfileId>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub text: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub subject: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub media_urls: Omittable<Vec<String>>,
    #[serde(rename = "type", skip_serializing_if = "Omittable::is_omitted")]
    pub message_type: Omittable<MessageType>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_failover_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub use_profile_webhooks: Omittable<bool>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub auto_detect: Omittable<bool>,
    /// ISO 8601 time at which to send; makes the message cancellable until then.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub send_at: Omittable<String>,
}

impl MessageSendParams {
    /// Params addressed to `to` with every optional field omitted.
    pub fn new(to: RawPhoneNumber) -> Self {
        Self {
            to,
            from: Omittable::Omitted,
            messaging_profile_id: Omittable::Omitted,
            text: Omittable::Omitted,
            subject: Omittable::Omitted,
            media_urls: Omittable::Omitted,
            message_type: Omittable::Omitted,
            webhook_url: Omittable::Omitted,
            webhook_failover_url: Omittable::Omitted,
            use_profile_webhooks: Omittable::Omitted,
            auto_detect: Omittable::Omitted,
            send_at: Omittable::Omitted,
        }
    }

    /// Plain text message from a specific number.
    pub fn text(from: RawPhoneNumber, to: RawPhoneNumber, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            text: text.into().into(),
            ..Self::new(to)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageParty {
    pub phone_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub line_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageMedia {
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageCost {
    pub amount: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: MessageId,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(rename = "type", default)]
    pub message_type: Option<MessageType>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub messaging_profile_id: Option<MessagingProfileId>,
    #[serde(default)]
    pub from: Option<MessageParty>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: Vec<MessageParty>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<MessageMedia>,
    #[serde(default)]
    pub parts: Option<u32>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub cost: Option<MessageCost>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub send_at: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<Value>,
}

resource_handles!(
    /// `/messages`: send, retrieve and cancel scheduled messages.
    Messages,
    MessagesRaw
);

impl Messages<'_> {
    /// Send an SMS/MMS message.
    pub async fn send(&self, params: &MessageSendParams) -> Result<Message, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().send(params).await?.into_inner())
    }

    pub async fn retrieve(&self, id: &MessageId) -> Result<Message, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    /// Cancel a message scheduled with `send_at` that has not been sent yet.
    pub async fn cancel_scheduled(&self, id: &MessageId) -> Result<Message, TelnyxError> {
        Ok(self
            .with_raw_response()
            .cancel_scheduled(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl MessagesRaw<'_> {
    pub async fn send(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Message>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &MessageId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Message>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn cancel_scheduled(
        &self,
        id: &MessageId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Message>>, TelnyxError> {
        self.client
            .request(HttpMethod::Delete, &[PATH, id.as_str()], params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{FakeTransport, make_client};

    const MESSAGE_JSON: &str = r#"
    {
      "data": {
        "record_type": "message",
        "direction": "outbound",
        "id": "40385f64-5717-4562-b3fc-2c963f66afa6",
        "type": "SMS",
        "messaging_profile_id": "4000eba1-a0c0-4563-9925-b25e842a7cb6",
        "from": { "phone_number": "+18445550001", "carrier": "TELNYX LLC", "line_type": "VoIP" },
        "to": [{ "phone_number": "+18445550002", "status": "queued", "carrier": "T-MOBILE USA, INC.", "line_type": "Wireless" }],
        "text": "Hello, World!",
        "media": [],
        "parts": 1,
        "encoding": "GSM-7",
        "cost": { "amount": "0.0051", "currency": "USD" },
        "tags": ["Greetings"],
        "errors": []
      }
    }
    "#;

    fn number(value: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(value).unwrap()
    }

    #[tokio::test]
    async fn send_posts_only_provided_fields() {
        let transport = FakeTransport::new(200, MESSAGE_JSON);
        let client = make_client(transport.clone());

        let params = MessageSendParams {
            webhook_url: Omittable::Null,
            ..MessageSendParams::text(number("+18445550001"), number("+18445550002"), "Hello, World!")
        };
        let message = client.messages().send(&params).await.unwrap();
        assert_eq!(message.id.as_str(), "40385f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(message.message_type, Some(MessageType::Sms));
        assert_eq!(message.to[0].status.as_deref(), Some("queued"));
        assert_eq!(message.cost.unwrap().amount, "0.0051");

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/v2/messages");
        assert_eq!(
            request.body,
            Some(json!({
                "to": "+18445550002",
                "from": "+18445550001",
                "text": "Hello, World!",
                "webhook_url": null
            }))
        );
    }

    #[tokio::test]
    async fn send_with_profile_and_media() {
        let transport = FakeTransport::new(200, MESSAGE_JSON);
        let client = make_client(transport.clone());

        let params = MessageSendParams {
            messaging_profile_id: MessagingProfileId::new("4000eba1-a0c0-4563-9925-b25e842a7cb6")
                .unwrap()
                .into(),
            media_urls: vec!["https://example.com/cat.png".to_owned()].into(),
            message_type: MessageType::Mms.into(),
            ..MessageSendParams::new(number("+18445550002"))
        };
        client.messages().send(&params).await.unwrap();

        let body = transport.last_request().body.unwrap();
        assert_eq!(body["type"], json!("MMS"));
        assert_eq!(body["media_urls"], json!(["https://example.com/cat.png"]));
        assert!(body.get("from").is_none());
    }

    #[tokio::test]
    async fn raw_send_exposes_http_response() {
        let transport = FakeTransport::new(200, MESSAGE_JSON);
        let client = make_client(transport.clone());

        let raw = client
            .messages()
            .with_raw_response()
            .send(
                RequestParams::new()
                    .with("to", "+18445550002")
                    .with("from", "+18445550001")
                    .with("text", "hi"),
            )
            .await
            .unwrap();
        assert_eq!(raw.status(), 200);
        assert_eq!(raw.request_id(), Some("req-test"));
        assert!(raw.body().contains("\"record_type\": \"message\""));
        assert_eq!(raw.data().data.parts, Some(1));
    }

    #[tokio::test]
    async fn retrieve_and_cancel_scheduled_hit_message_path() {
        let transport = FakeTransport::new(200, MESSAGE_JSON);
        let client = make_client(transport.clone());
        let id = MessageId::new("40385f64-5717-4562-b3fc-2c963f66afa6").unwrap();

        client.messages().retrieve(&id).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.path(),
            "/v2/messages/40385f64-5717-4562-b3fc-2c963f66afa6"
        );

        client.messages().cancel_scheduled(&id).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.path(),
            "/v2/messages/40385f64-5717-4562-b3fc-2c963f66afa6"
        );
    }

    #[tokio::test]
    async fn cancel_scheduled_surfaces_api_error() {
        let body = r#"{"errors": [{"code": "40321", "title": "Message cannot be cancelled"}]}"#;
        let transport = FakeTransport::new(422, body);
        let client = make_client(transport);

        let err = client
            .messages()
            .cancel_scheduled(&MessageId::new("abc").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.first_error_code(), Some("40321"));
    }
}
