use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::{blank_as_none, null_as_default};
use crate::domain::{
    ConnectionId, Data, MessagingProfileId, NumberOrderId, Omittable, Page, PageParams,
    RawPhoneNumber, RequestParams,
};

const PATH: &str = "number_orders";

#[derive(Serialize)]
struct OrderedNumber {
    phone_number: RawPhoneNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Body of `POST /number_orders`.
pub struct NumberOrderCreateParams {
    #[serde(serialize_with = "serialize_ordered_numbers")]
    pub phone_numbers: Vec<RawPhoneNumber>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub connection_id: Omittable<ConnectionId>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub messaging_profile_id: Omittable<MessagingProfileId>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub billing_group_id: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub customer_reference: Omittable<String>,
}

impl NumberOrderCreateParams {
    pub fn new(phone_numbers: Vec<RawPhoneNumber>) -> Self {
        Self {
            phone_numbers,
            connection_id: Omittable::Omitted,
            messaging_profile_id: Omittable::Omitted,
            billing_group_id: Omittable::Omitted,
            customer_reference: Omittable::Omitted,
        }
    }
}

/// The API expects `[{"phone_number": "+1..."}]` rather than bare strings.
fn serialize_ordered_numbers<S: serde::Serializer>(
    numbers: &[RawPhoneNumber],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(numbers.iter().map(|phone_number| OrderedNumber {
        phone_number: phone_number.clone(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberOrderUpdateParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub customer_reference: Omittable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberOrderFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements_met: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NumberOrderListParams {
    pub filter: NumberOrderFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberOrderPhoneNumber {
    #[serde(default)]
    pub id: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub requirements_met: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberOrder {
    pub id: NumberOrderId,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub phone_numbers_count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<NumberOrderPhoneNumber>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub connection_id: Option<ConnectionId>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub messaging_profile_id: Option<MessagingProfileId>,
    #[serde(default)]
    pub billing_group_id: Option<String>,
    #[serde(default)]
    pub customer_reference: Option<String>,
    #[serde(default)]
    pub requirements_met: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

resource_handles!(
    /// `/number_orders`: purchase numbers found through available-number search.
    NumberOrders,
    NumberOrdersRaw
);

impl NumberOrders<'_> {
    pub async fn create(&self, params: &NumberOrderCreateParams) -> Result<NumberOrder, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().create(params).await?.into_inner())
    }

    pub async fn retrieve(&self, id: &NumberOrderId) -> Result<NumberOrder, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn update(
        &self,
        id: &NumberOrderId,
        params: &NumberOrderUpdateParams,
    ) -> Result<NumberOrder, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .update(id, params)
            .await?
            .into_inner())
    }

    pub async fn list(&self, params: &NumberOrderListParams) -> Result<Page<NumberOrder>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }
}

impl NumberOrdersRaw<'_> {
    pub async fn create(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Data<NumberOrder>>, TelnyxError> {
        self.client.request(HttpMethod::Post, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &NumberOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<NumberOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn update(
        &self,
        id: &NumberOrderId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<NumberOrder>>, TelnyxError> {
        self.client
            .request(HttpMethod::Patch, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Page<NumberOrder>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }
}
