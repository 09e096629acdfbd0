use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::{
    ActionResult, CallControlId, ConnectionId, Data, Omittable, RawPhoneNumber, RequestParams,
};

const PATH: &str = "calls";
const ACTIONS: &str = "actions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /calls`.
pub struct CallDialParams {
    pub connection_id: ConnectionId,
    pub to: RawPhoneNumber,
    pub from: RawPhoneNumber,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub from_display_name: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub timeout_secs: Omittable<u32>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub time_limit_secs: Omittable<u32>,
    /// `detect`, `detect_beep`, `detect_words`, `greeting_end` or `disabled`.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub answering_machine_detection: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    /// Base64 value echoed back in every webhook for this call.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub client_state: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub command_id: Omittable<String>,
}

impl CallDialParams {
    pub fn new(connection_id: ConnectionId, to: RawPhoneNumber, from: RawPhoneNumber) -> Self {
        Self {
            connection_id,
            to,
            from,
            from_display_name: Omittable::Omitted,
            timeout_secs: Omittable::Omitted,
            time_limit_secs: Omittable::Omitted,
            answering_machine_detection: Omittable::Omitted,
            webhook_url: Omittable::Omitted,
            client_state: Omittable::Omitted,
            command_id: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallAnswerParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub client_state: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub command_id: Omittable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CallHangupParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub client_state: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub command_id: Omittable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /calls/{id}/actions/speak` (text-to-speech).
pub struct CallSpeakParams {
    pub payload: String,
    /// e.g. `female`, `male`, or a provider voice id such as `Polly.Joanna`.
    pub voice: String,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub language: Omittable<String>,
    /// `text` or `ssml`.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub payload_type: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub client_state: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub command_id: Omittable<String>,
}

impl CallSpeakParams {
    pub fn new(payload: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            voice: voice.into(),
            language: Omittable::Omitted,
            payload_type: Omittable::Omitted,
            client_state: Omittable::Omitted,
            command_id: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// A newly dialed call leg.
pub struct Call {
    pub call_control_id: CallControlId,
    #[serde(default)]
    pub call_leg_id: Option<String>,
    #[serde(default)]
    pub call_session_id: Option<String>,
    #[serde(default)]
    pub is_alive: Option<bool>,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub client_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallStatus {
    pub call_control_id: CallControlId,
    #[serde(default)]
    pub call_leg_id: Option<String>,
    #[serde(default)]
    pub call_session_id: Option<String>,
    pub is_alive: bool,
    #[serde(default)]
    pub call_duration: Option<u64>,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub client_state: Option<String>,
}

resource_handles!(
    /// `/calls`: Call Control dialing, status and in-call actions.
    Calls,
    CallsRaw
);

impl Calls<'_> {
    pub async fn dial(&self, params: &CallDialParams) -> Result<Call, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().dial(params).await?.into_inner())
    }

    pub async fn retrieve_status(&self, id: &CallControlId) -> Result<CallStatus, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve_status(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn answer(
        &self,
        id: &CallControlId,
        params: &CallAnswerParams,
    ) -> Result<ActionResult, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .answer(id, params)
            .await?
            .into_inner())
    }

    pub async fn hangup(
        &self,
        id: &CallControlId,
        params: &CallHangupParams,
    ) -> Result<ActionResult, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .hangup(id, params)
            .await?
            .into_inner())
    }

    pub async fn speak(
        &self,
        id: &CallControlId,
        params: &CallSpeakParams,
    ) -> Result<ActionResult, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .speak(id, params)
            .await?
            .into_inner())
    }
}

impl CallsRaw<'_> {
    pub async fn dial(&self, params: RequestParams) -> Result<RawResponse<Data<Call>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve_status(
        &self,
        id: &CallControlId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<CallStatus>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn answer(
        &self,
        id: &CallControlId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<ActionResult>>, TelnyxError> {
        self.action(id, "answer", params).await
    }

    pub async fn hangup(
        &self,
        id: &CallControlId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<ActionResult>>, TelnyxError> {
        self.action(id, "hangup", params).await
    }

    pub async fn speak(
        &self,
        id: &CallControlId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<ActionResult>>, TelnyxError> {
        self.action(id, "speak", params).await
    }

    async fn action(
        &self,
        id: &CallControlId,
        action: &str,
        params: RequestParams,
    ) -> Result<RawResponse<Data<ActionResult>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, id.as_str(), ACTIONS, action], params)
            .await
    }
}
