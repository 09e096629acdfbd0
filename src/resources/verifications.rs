use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::blank_as_none;
use crate::domain::{
    Data, Omittable, RawPhoneNumber, RequestParams, VerificationId, VerifyProfileId,
};

const PATH: &str = "verifications";
const BY_PHONE_NUMBER: &str = "by_phone_number";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /verifications/sms` and `POST /verifications/call`.
pub struct VerificationTriggerParams {
    pub phone_number: RawPhoneNumber,
    pub verify_profile_id: VerifyProfileId,
    /// Send this code instead of a generated one.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub custom_code: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub timeout_secs: Omittable<u32>,
}

impl VerificationTriggerParams {
    pub fn new(phone_number: RawPhoneNumber, verify_profile_id: VerifyProfileId) -> Self {
        Self {
            phone_number,
            verify_profile_id,
            custom_code: Omittable::Omitted,
            timeout_secs: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyCodeParams {
    pub code: String,
    pub verify_profile_id: VerifyProfileId,
}

impl VerifyCodeParams {
    pub fn new(code: impl Into<String>, verify_profile_id: VerifyProfileId) -> Self {
        Self {
            code: code.into(),
            verify_profile_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verification {
    pub id: VerificationId,
    #[serde(default)]
    pub record_type: Option<String>,
    /// Delivery channel: `sms`, `call` or `flashcall`.
    #[serde(rename = "type", default)]
    pub channel: Option<String>,
    pub phone_number: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub verify_profile_id: Option<VerifyProfileId>,
    /// `pending`, `accepted`, `invalid`, `expired` or `error`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyCodeResult {
    pub phone_number: String,
    /// `accepted` or `rejected`.
    pub response_code: String,
}

impl VerifyCodeResult {
    pub fn is_accepted(&self) -> bool {
        self.response_code == "accepted"
    }
}

resource_handles!(
    /// `/verifications`: one-time codes delivered by SMS or voice call.
    Verifications,
    VerificationsRaw
);

impl Verifications<'_> {
    pub async fn trigger_sms(
        &self,
        params: &VerificationTriggerParams,
    ) -> Result<Verification, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .trigger_sms(params)
            .await?
            .into_inner())
    }

    pub async fn trigger_call(
        &self,
        params: &VerificationTriggerParams,
    ) -> Result<Verification, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .trigger_call(params)
            .await?
            .into_inner())
    }

    pub async fn retrieve(&self, id: &VerificationId) -> Result<Verification, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    /// All verifications sent to `phone_number`, newest first.
    pub async fn list_by_phone_number(
        &self,
        phone_number: &RawPhoneNumber,
    ) -> Result<Vec<Verification>, TelnyxError> {
        Ok(self
            .with_raw_response()
            .list_by_phone_number(phone_number, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn verify_code(
        &self,
        phone_number: &RawPhoneNumber,
        params: &VerifyCodeParams,
    ) -> Result<VerifyCodeResult, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .verify_code(phone_number, params)
            .await?
            .into_inner())
    }
}

impl VerificationsRaw<'_> {
    pub async fn trigger_sms(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Verification>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, "sms"], params)
            .await
    }

    pub async fn trigger_call(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Verification>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, "call"], params)
            .await
    }

    pub async fn retrieve(
        &self,
        id: &VerificationId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Verification>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list_by_phone_number(
        &self,
        phone_number: &RawPhoneNumber,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Vec<Verification>>>, TelnyxError> {
        self.client
            .request(
                HttpMethod::Get,
                &[PATH, BY_PHONE_NUMBER, phone_number.raw()],
                params,
            )
            .await
    }

    pub async fn verify_code(
        &self,
        phone_number: &RawPhoneNumber,
        params: RequestParams,
    ) -> Result<RawResponse<Data<VerifyCodeResult>>, TelnyxError> {
        self.client
            .request(
                HttpMethod::Post,
                &[PATH, BY_PHONE_NUMBER, phone_number.raw(), "actions", "verify"],
                params,
            )
            .await
    }
}
