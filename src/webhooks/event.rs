use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// A verified webhook delivery: `{"data": {...}, "meta": {...}}`.
pub struct WebhookEvent {
    pub data: EventData,
    #[serde(default)]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventData {
    pub id: String,
    /// e.g. `message.received`, `call.answered`, `verification.completed`.
    pub event_type: String,
    #[serde(default)]
    pub occurred_at: Option<String>,
    #[serde(default)]
    pub record_type: Option<String>,
    /// Event-specific body; its shape depends on `event_type`.
    #[serde(default)]
    pub payload: Value,
}

impl WebhookEvent {
    pub fn event_type(&self) -> &str {
        &self.data.event_type
    }

    /// Decode `data.payload` into a caller-chosen type.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data.payload)
    }
}
