use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{Data, Omittable, Page, PageParams, RequestParams, VerifyProfileId};

const PATH: &str = "verify_profiles";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyProfileSmsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_verification_timeout_secs: Option<u32>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub whitelisted_destinations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyProfileCallSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_verification_timeout_secs: Option<u32>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub whitelisted_destinations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyProfileCreateParams {
    pub name: String,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_failover_url: Omittable<String>,
    /// ISO 639-1 language of the generated messages, e.g. `en-US`.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub language: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub sms: Omittable<VerifyProfileSmsSettings>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub call: Omittable<VerifyProfileCallSettings>,
}

impl VerifyProfileCreateParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            webhook_url: Omittable::Omitted,
            webhook_failover_url: Omittable::Omitted,
            language: Omittable::Omitted,
            sms: Omittable::Omitted,
            call: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VerifyProfileFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VerifyProfileListParams {
    pub filter: VerifyProfileFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyProfile {
    pub id: VerifyProfileId,
    #[serde(default)]
    pub record_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_failover_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub sms: Option<VerifyProfileSmsSettings>,
    #[serde(default)]
    pub call: Option<VerifyProfileCallSettings>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

resource_handles!(
    /// `/verify_profiles`: templates and limits applied to verifications.
    VerifyProfiles,
    VerifyProfilesRaw
);

impl VerifyProfiles<'_> {
    pub async fn create(
        &self,
        params: &VerifyProfileCreateParams,
    ) -> Result<VerifyProfile, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().create(params).await?.into_inner())
    }

    pub async fn retrieve(&self, id: &VerifyProfileId) -> Result<VerifyProfile, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn list(
        &self,
        params: &VerifyProfileListParams,
    ) -> Result<Page<VerifyProfile>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    pub async fn delete(&self, id: &VerifyProfileId) -> Result<VerifyProfile, TelnyxError> {
        Ok(self
            .with_raw_response()
            .delete(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl VerifyProfilesRaw<'_> {
    pub async fn create(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<VerifyProfile>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &VerifyProfileId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<VerifyProfile>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Page<VerifyProfile>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn delete(
        &self,
        id: &VerifyProfileId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<VerifyProfile>>, TelnyxError> {
        self.client
            .request(HttpMethod::Delete, &[PATH, id.as_str()], params)
            .await
    }
}
