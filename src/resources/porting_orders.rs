use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{
    Data, Omittable, Page, PageParams, PortingOrderId, RawPhoneNumber, RequestParams,
};

const PATH: &str = "porting_orders";
const ACTIONS: &str = "actions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /porting_orders`. The API splits the numbers into one draft order per
/// losing carrier.
pub struct PortingOrderCreateParams {
    pub phone_numbers: Vec<RawPhoneNumber>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub customer_reference: Omittable<String>,
}

impl PortingOrderCreateParams {
    pub fn new(phone_numbers: Vec<RawPhoneNumber>) -> Self {
        Self {
            phone_numbers,
            customer_reference: Omittable::Omitted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PortingOrderUpdateParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub customer_reference: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub webhook_url: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub requirement_group_id: Omittable<String>,
    /// Free-form `end_user` block (admin and location details of the number owner).
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub end_user: Omittable<Value>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub activation_settings: Omittable<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PortingOrderFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PortingOrderListParams {
    pub filter: PortingOrderFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortingOrderStatus {
    /// e.g. `draft`, `in-process`, `submitted`, `ported`, `cancelled`.
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortingOrder {
    pub id: PortingOrderId,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub status: Option<PortingOrderStatus>,
    #[serde(default)]
    pub support_key: Option<String>,
    #[serde(default)]
    pub customer_reference: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub porting_phone_numbers_count: Option<u32>,
    #[serde(default)]
    pub old_service_provider_ocn: Option<String>,
    #[serde(default)]
    pub requirements_met: Option<bool>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

resource_handles!(
    /// `/porting_orders`: moving numbers in from another carrier.
    PortingOrders,
    PortingOrdersRaw
);

impl PortingOrders<'_> {
    /// Create draft orders; one order comes back per losing carrier.
    pub async fn create(
        &self,
        params: &PortingOrderCreateParams,
    ) -> Result<Vec<PortingOrder>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().create(params).await?.into_inner())
    }

    pub async fn retrieve(&self, id: &PortingOrderId) -> Result<PortingOrder, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn update(
        &self,
        id: &PortingOrderId,
        params: &PortingOrderUpdateParams,
    ) -> Result<PortingOrder, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .update(id, params)
            .await?
            .into_inner())
    }

    pub async fn list(
        &self,
        params: &PortingOrderListParams,
    ) -> Result<Page<PortingOrder>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    /// Delete a draft order. The API answers `204 No Content`.
    pub async fn delete(&self, id: &PortingOrderId) -> Result<(), TelnyxError> {
        self.with_raw_response()
            .delete(id, RequestParams::new())
            .await?;
        Ok(())
    }

    /// Submit a draft order to the losing carrier.
    pub async fn confirm(&self, id: &PortingOrderId) -> Result<PortingOrder, TelnyxError> {
        Ok(self
            .with_raw_response()
            .confirm(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn cancel(&self, id: &PortingOrderId) -> Result<PortingOrder, TelnyxError> {
        Ok(self
            .with_raw_response()
            .cancel(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl PortingOrdersRaw<'_> {
    pub async fn create(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<Vec<PortingOrder>>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &PortingOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PortingOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn update(
        &self,
        id: &PortingOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PortingOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Patch, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Page<PortingOrder>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    /// The body is empty on success, so `data()` is `Value::Null`.
    pub async fn delete(
        &self,
        id: &PortingOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Value>, TelnyxError> {
        self.client
            .request(HttpMethod::Delete, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn confirm(
        &self,
        id: &PortingOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PortingOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, id.as_str(), ACTIONS, "confirm"], params)
            .await
    }

    pub async fn cancel(
        &self,
        id: &PortingOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PortingOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Post, &[PATH, id.as_str(), ACTIONS, "cancel"], params)
            .await
    }
}
