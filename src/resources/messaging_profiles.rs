use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{Data, MessagingProfileId, Omittable, Page, PageParams, RequestParams};

const PATH: &str = "messaging_profiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagingProfileCreateParams {
    pub name: String,
    /// ISO country codes messages may be sent to; `["*"]` allows all.
    pub whitelisted_destinations: Vec<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub enabled: Omittable<bool>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_failover_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_api_version: Omittable<String>,
}

impl MessagingProfileCreateParams {
    pub fn new(name: impl Into<String>, whitelisted_destinations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            whitelisted_destinations,
            enabled: Omittable::Omitted,
            webhook_url: Omittable::Omitted,
            webhook_failover_url: Omittable::Omitted,
            webhook_api_version: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MessagingProfileUpdateParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub name: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub whitelisted_destinations: Omittable<Vec<String>>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub enabled: Omittable<bool>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_failover_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_api_version: Omittable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MessagingProfileFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MessagingProfileListParams {
    pub filter: MessagingProfileFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessagingProfile {
    pub id: MessagingProfileId,
    #[serde(default)]
    pub record_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_failover_url: Option<String>,
    #[serde(default)]
    pub webhook_api_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub whitelisted_destinations: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

resource_handles!(
    /// `/messaging_profiles`: sender settings shared by a group of numbers.
    MessagingProfiles,
    MessagingProfilesRaw
);

impl MessagingProfiles<'_> {
    pub async fn create(
        &self,
        params: &MessagingProfileCreateParams,
    ) -> Result<MessagingProfile, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().create(params).await?.into_inner())
    }

    pub async fn retrieve(&self, id: &MessagingProfileId) -> Result<MessagingProfile, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn update(
        &self,
        id: &MessagingProfileId,
        params: &MessagingProfileUpdateParams,
    ) -> Result<MessagingProfile, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .update(id, params)
            .await?
            .into_inner())
    }

    pub async fn list(
        &self,
        params: &MessagingProfileListParams,
    ) -> Result<Page<MessagingProfile>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    pub async fn delete(&self, id: &MessagingProfileId) -> Result<MessagingProfile, TelnyxError> {
        Ok(self
            .with_raw_response()
            .delete(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl MessagingProfilesRaw<'_> {
    pub async fn create(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<MessagingProfile>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &MessagingProfileId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<MessagingProfile>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn update(
        &self,
        id: &MessagingProfileId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<MessagingProfile>>, TelnyxError> {
        self.client
            .request(HttpMethod::Patch, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Page<MessagingProfile>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn delete(
        &self,
        id: &MessagingProfileId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<MessagingProfile>>, TelnyxError> {
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
    use crate::domain::{PageNumber, PageSize};

    const PROFILE_JSON: &str = r#"
    {
      "data": {
        "record_type": "messaging_profile",
        "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
        "name": "Profile for Messages",
        "enabled": true,
        "webhook_url": "https://www.example.com/hooks",
        "webhook_failover_url": "",
        "webhook_api_version": "2",
        "whitelisted_destinations": ["US"],
        "created_at": "2019-01-23T18:10:02.574Z",
        "updated_at": "2019-01-23T18:10:02.574Z"
      }
    }
    "#;

    #[tokio::test]
    async fn create_sends_required_and_given_fields() {
        let transport = FakeTransport::new(200, PROFILE_JSON);
        let client = make_client(transport.clone());

        let params = MessagingProfileCreateParams {
            webhook_url: "https://www.example.com/hooks".to_owned().into(),
            ..MessagingProfileCreateParams::new("Profile for Messages", vec!["US".to_owned()])
        };
        let profile = client.messaging_profiles().create(&params).await.unwrap();
        assert_eq!(profile.name, "Profile for Messages");
        assert_eq!(profile.whitelisted_destinations, vec!["US"]);

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/v2/messaging_profiles");
        assert_eq!(
            request.body,
            Some(json!({
                "name": "Profile for Messages",
                "whitelisted_destinations": ["US"],
                "webhook_url": "https://www.example.com/hooks"
            }))
        );
    }

    #[tokio::test]
    async fn update_can_clear_failover_url() {
        let transport = FakeTransport::new(200, PROFILE_JSON);
        let client = make_client(transport.clone());
        let id = MessagingProfileId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();

        let params = MessagingProfileUpdateParams {
            enabled: false.into(),
            webhook_failover_url: Omittable::Null,
            ..Default::default()
        };
        client.messaging_profiles().update(&id, &params).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(
            request.body,
            Some(json!({ "enabled": false, "webhook_failover_url": null }))
        );
    }

    #[tokio::test]
    async fn list_retrieve_and_delete() {
        let transport = FakeTransport::new(200, r#"{"data": [], "meta": {"page_number": 2, "page_size": 10, "total_pages": 2, "total_results": 11}}"#);
        let client = make_client(transport.clone());

        let params = MessagingProfileListParams {
            filter: MessagingProfileFilter {
                name: Some("Profile".to_owned()),
            },
            page: PageParams::new(PageNumber::new(2).unwrap(), PageSize::new(10).unwrap()),
        };
        let page = client.messaging_profiles().list(&params).await.unwrap();
        assert!(!page.has_next_page());
        let request = transport.last_request();
        assert_eq!(request.query("filter[name]").as_deref(), Some("Profile"));
        assert_eq!(request.query("page[number]").as_deref(), Some("2"));

        let transport = FakeTransport::new(200, PROFILE_JSON);
        let client = make_client(transport.clone());
        let id = MessagingProfileId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap();
        let profile = client.messaging_profiles().retrieve(&id).await.unwrap();
        assert_eq!(profile.enabled, Some(true));

        client.messaging_profiles().delete(&id).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(
            request.path(),
            "/v2/messaging_profiles/3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
    }
}
