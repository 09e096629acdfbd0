//! 10DLC campaigns shared with this account by a connectivity partner.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{CampaignId, PageNumber, PageSize, RequestParams};

const PATH: &str = "partner_campaigns";
const SHARING_PATH: &str = "partnerCampaign";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCampaignListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_per_page: Option<PageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerCampaign {
    pub tcr_campaign_id: CampaignId,
    #[serde(default)]
    pub tcr_brand_id: Option<String>,
    #[serde(default)]
    pub brand_display_name: Option<String>,
    #[serde(default)]
    pub usecase: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub campaign_status: Option<String>,
    #[serde(default)]
    pub is_number_pooling_enabled: Option<bool>,
    #[serde(default)]
    pub assigned_phone_numbers_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// `{"records": [...], "page": 1, "totalRecords": 3}`.
pub struct PartnerCampaignPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<PartnerCampaign>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_records: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingStatus {
    /// `PENDING`, `ACCEPTED` or `DECLINED`.
    #[serde(default)]
    pub sharing_status: Option<String>,
    #[serde(default)]
    pub upstream_cnp_id: Option<String>,
    #[serde(default)]
    pub downstream_cnp_id: Option<String>,
    #[serde(default)]
    pub shared_date: Option<String>,
    #[serde(default)]
    pub status_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSharingStatus {
    #[serde(default)]
    pub shared_by_me: Option<SharingStatus>,
    #[serde(default)]
    pub shared_with_me: Option<SharingStatus>,
}

resource_handles!(
    /// `/partner_campaigns`: campaigns shared by an upstream partner.
    PartnerCampaigns,
    PartnerCampaignsRaw
);

impl PartnerCampaigns<'_> {
    pub async fn list(
        &self,
        params: &PartnerCampaignListParams,
    ) -> Result<PartnerCampaignPage, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    /// Accept a pending share. The registry answers with a free-form map of campaign ids.
    pub async fn accept_sharing(&self, id: &CampaignId) -> Result<Value, TelnyxError> {
        Ok(self
            .with_raw_response()
            .accept_sharing(id, RequestParams::new())
            .await?
            .into_data())
    }

    pub async fn sharing_status(&self, id: &CampaignId) -> Result<CampaignSharingStatus, TelnyxError> {
        Ok(self
            .with_raw_response()
            .sharing_status(id, RequestParams::new())
            .await?
            .into_data())
    }
}

impl PartnerCampaignsRaw<'_> {
    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<PartnerCampaignPage>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn accept_sharing(
        &self,
        id: &CampaignId,
        params: RequestParams,
    ) -> Result<RawResponse<Value>, TelnyxError> {
        self.client
            .request(
                HttpMethod::Post,
                &[SHARING_PATH, "acceptSharing", id.as_str()],
                params,
            )
            .await
    }

    pub async fn sharing_status(
        &self,
        id: &CampaignId,
        params: RequestParams,
    ) -> Result<RawResponse<CampaignSharingStatus>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[SHARING_PATH, id.as_str(), "sharing"], params)
            .await
    }
}
