//! 10DLC brands. These endpoints use camelCase fields and answer with bare objects
//! instead of the `{"data": ...}` envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{BrandId, Omittable, PageNumber, PageSize, RequestParams};

const PATH: &str = "brand";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    PrivateProfit,
    PublicProfit,
    NonProfit,
    Government,
    SoleProprietor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /brand`.
pub struct BrandCreateParams {
    pub entity_type: EntityType,
    pub display_name: String,
    pub country: String,
    pub email: String,
    /// Industry segment, e.g. `TECHNOLOGY`.
    pub vertical: String,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub company_name: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub first_name: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub last_name: Omittable<String>,
    /// Tax id; required for every entity type except `SOLE_PROPRIETOR`.
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub ein: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub phone: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub street: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub city: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub state: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub postal_code: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub website: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
}

impl BrandCreateParams {
    pub fn new(
        entity_type: EntityType,
        display_name: impl Into<String>,
        country: impl Into<String>,
        email: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            display_name: display_name.into(),
            country: country.into(),
            email: email.into(),
            vertical: vertical.into(),
            company_name: Omittable::Omitted,
            first_name: Omittable::Omitted,
            last_name: Omittable::Omitted,
            ein: Omittable::Omitted,
            phone: Omittable::Omitted,
            street: Omittable::Omitted,
            city: Omittable::Omitted,
            state: Omittable::Omitted,
            postal_code: Omittable::Omitted,
            website: Omittable::Omitted,
            webhook_url: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_per_page: Option<PageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Sort field, e.g. `-createdAt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub brand_id: BrandId,
    #[serde(default)]
    pub tcr_brand_id: Option<String>,
    pub entity_type: EntityType,
    pub display_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub vertical: Option<String>,
    /// `VERIFIED`, `UNVERIFIED`, `SELF_DECLARED` or `VETTED_VERIFIED`.
    #[serde(default)]
    pub identity_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// `GET /brand` body: `{"records": [...], "page": 1, "totalRecords": 7}`.
pub struct BrandPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub records: Vec<Brand>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_records: Option<u64>,
}

resource_handles!(
    /// `/brand`: 10DLC brand registration.
    Brands,
    BrandsRaw
);

impl Brands<'_> {
    pub async fn create(&self, params: &BrandCreateParams) -> Result<Brand, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().create(params).await?.into_data())
    }

    pub async fn retrieve(&self, id: &BrandId) -> Result<Brand, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_data())
    }

    pub async fn list(&self, params: &BrandListParams) -> Result<BrandPage, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    pub async fn delete(&self, id: &BrandId) -> Result<(), TelnyxError> {
        self.with_raw_response()
            .delete(id, RequestParams::new())
            .await?;
        Ok(())
    }

    /// Ask the registry to re-run identity vetting for the brand.
    pub async fn revet(&self, id: &BrandId) -> Result<Brand, TelnyxError> {
        Ok(self
            .with_raw_response()
            .revet(id, RequestParams::new())
            .await?
            .into_data())
    }
}

impl BrandsRaw<'_> {
    pub async fn create(&self, params: RequestParams) -> Result<RawResponse<Brand>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &BrandId,
        params: RequestParams,
    ) -> Result<RawResponse<Brand>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list(&self, params: RequestParams) -> Result<RawResponse<BrandPage>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn delete(
        &self,
        id: &BrandId,
        params: RequestParams,
    ) -> Result<RawResponse<Value>, TelnyxError> {
        self.client
            .request(HttpMethod::Delete, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn revet(
        &self,
        id: &BrandId,
        params: RequestParams,
    ) -> Result<RawResponse<Brand>, TelnyxError> {
        self.client
            .request(HttpMethod::Put, &[PATH, id.as_str(), "revet"], params)
            .await
    }
}
