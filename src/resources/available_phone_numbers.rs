use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::null_as_default;
use crate::domain::{PhoneNumber, RequestParams, ValidationError};

const PATH: &str = "available_phone_numbers";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// `filter[phone_number][...]` digit patterns.
pub struct PhoneNumberPattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
}

impl PhoneNumberPattern {
    fn is_empty(&self) -> bool {
        self.starts_with.is_none() && self.ends_with.is_none() && self.contains.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AvailablePhoneNumberFilter {
    #[serde(skip_serializing_if = "PhoneNumberPattern::is_empty")]
    pub phone_number: PhoneNumberPattern,
    /// ISO 3166-1 alpha-2 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_destination_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_type: Option<String>,
    /// Required capabilities, e.g. `["sms", "voice"]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_effort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quickship: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AvailablePhoneNumberListParams {
    pub filter: AvailablePhoneNumberFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionInformation {
    #[serde(default)]
    pub region_type: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CostInformation {
    #[serde(default)]
    pub upfront_cost: Option<String>,
    #[serde(default)]
    pub monthly_cost: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberFeature {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailablePhoneNumber {
    pub phone_number: String,
    #[serde(default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub vanity_format: Option<String>,
    #[serde(default)]
    pub best_effort: Option<bool>,
    #[serde(default)]
    pub quickship: Option<bool>,
    #[serde(default)]
    pub reservable: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_information: Vec<RegionInformation>,
    #[serde(default)]
    pub cost_information: Option<CostInformation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<NumberFeature>,
}

impl AvailablePhoneNumber {
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|feature| feature.name == name)
    }

    /// Parsed form of `phone_number`, ready to order or message.
    pub fn number(&self) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::parse_e164(self.phone_number.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AvailablePhoneNumbersMeta {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub best_effort_results: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Search results; this endpoint is limited by `filter[limit]` rather than paginated.
pub struct AvailablePhoneNumbersList {
    pub data: Vec<AvailablePhoneNumber>,
    #[serde(default)]
    pub meta: Option<AvailablePhoneNumbersMeta>,
}

resource_handles!(
    /// `/available_phone_numbers`: inventory search.
    AvailablePhoneNumbers,
    AvailablePhoneNumbersRaw
);

impl AvailablePhoneNumbers<'_> {
    pub async fn list(
        &self,
        params: &AvailablePhoneNumberListParams,
    ) -> Result<AvailablePhoneNumbersList, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }
}

impl AvailablePhoneNumbersRaw<'_> {
    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<AvailablePhoneNumbersList>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }
}
