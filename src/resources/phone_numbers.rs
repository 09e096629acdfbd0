use serde::{Deserialize, Serialize};

use crate::client::{HttpMethod, RawResponse, TelnyxError};
use crate::domain::serde_helpers::{blank_as_none, null_as_default};
use crate::domain::{
    ConnectionId, Data, MessagingProfileId, Omittable, Page, PageParams, PhoneNumber,
    PhoneNumberId, RequestParams, ValidationError,
};

const PATH: &str = "phone_numbers";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// `filter[...]` options for listing purchased numbers.
pub struct PhoneNumberFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Matches numbers containing this digit sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<ConnectionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_address_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PhoneNumberListParams {
    pub filter: PhoneNumberFilter,
    #[serde(skip_serializing_if = "PageParams::is_empty")]
    pub page: PageParams,
    /// Sort field, prefixed with `-` for descending order (e.g. `-purchased_at`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// Body of `PATCH /phone_numbers/{id}`. `Null` clears a field.
pub struct PhoneNumberUpdateParams {
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub tags: Omittable<Vec<String>>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub connection_id: Omittable<ConnectionId>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub customer_reference: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub billing_group_id: Omittable<String>,
    #[serde(skip_serializing_if = "Omittable::is_omitted")]
    pub external_pin: Omittable<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// A number owned by the account.
pub struct PhoneNumberRecord {
    pub id: PhoneNumberId,
    #[serde(default)]
    pub record_type: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub connection_id: Option<ConnectionId>,
    #[serde(default)]
    pub connection_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub messaging_profile_id: Option<MessagingProfileId>,
    #[serde(default)]
    pub customer_reference: Option<String>,
    #[serde(default)]
    pub billing_group_id: Option<String>,
    #[serde(default)]
    pub emergency_enabled: Option<bool>,
    #[serde(default)]
    pub phone_number_type: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PhoneNumberRecord {
    /// Parsed form of `phone_number`.
    pub fn number(&self) -> Result<PhoneNumber, ValidationError> {
        PhoneNumber::parse_e164(self.phone_number.as_str())
    }
}

resource_handles!(
    /// `/phone_numbers`: numbers owned by the account.
    PhoneNumbers,
    PhoneNumbersRaw
);

impl PhoneNumbers<'_> {
    pub async fn list(
        &self,
        params: &PhoneNumberListParams,
    ) -> Result<Page<PhoneNumberRecord>, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self.with_raw_response().list(params).await?.into_data())
    }

    pub async fn retrieve(&self, id: &PhoneNumberId) -> Result<PhoneNumberRecord, TelnyxError> {
        Ok(self
            .with_raw_response()
            .retrieve(id, RequestParams::new())
            .await?
            .into_inner())
    }

    pub async fn update(
        &self,
        id: &PhoneNumberId,
        params: &PhoneNumberUpdateParams,
    ) -> Result<PhoneNumberRecord, TelnyxError> {
        let params = RequestParams::from_serialize(params)?;
        Ok(self
            .with_raw_response()
            .update(id, params)
            .await?
            .into_inner())
    }

    /// Release the number; the deleted record is returned.
    pub async fn delete(&self, id: &PhoneNumberId) -> Result<PhoneNumberRecord, TelnyxError> {
        Ok(self
            .with_raw_response()
            .delete(id, RequestParams::new())
            .await?
            .into_inner())
    }
}

impl PhoneNumbersRaw<'_> {
    pub async fn list(
        &self,
        params: RequestParams,
    ) -> Result<RawResponse<Page<PhoneNumberRecord>>, TelnyxError> {
        self.client.request(HttpMethod::Get, &[PATH], params).await
    }

    pub async fn retrieve(
        &self,
        id: &PhoneNumberId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PhoneNumberRecord>>, TelnyxError> {
        self.client
            .request(HttpMethod::Get, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn update(
        &self,
        id: &PhoneNumberId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PhoneNumberRecord>>, TelnyxError> {
        self.client
            .request(HttpMethod::Patch, &[PATH, id.as_str()], params)
            .await
    }

    pub async fn delete(
        &self,
        id: &PhoneNumberId,
        params: RequestParams,
    ) -> Result<RawResponse<Data<PhoneNumberRecord>>, TelnyxError> {
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

    const RECORD: &str = r#"
    {
      "id": "1293384261075731499",
      "record_type": "phone_number",
      "phone_number": "+19705555098",
      "status": "active",
      "tags": ["tag_1", "tag_2"],
      "connection_id": "1293384261075731499",
      "messaging_profile_id": "abc85f64-5717-4562-b3fc-2c9600000000",
      "emergency_enabled": true,
      "purchased_at": "2019-10-23T18:10:00.000Z"
    }
    "#;

    #[tokio::test]
    async fn list_encodes_filters_and_pagination() {
        let body = format!(
            r#"{{"data": [{RECORD}], "meta": {{"page_number": 1, "page_size": 2, "total_pages": 4, "total_results": 7}}}}"#
        );
        let transport = FakeTransport::new(200, body);
        let client = make_client(transport.clone());

        let params = PhoneNumberListParams {
            filter: PhoneNumberFilter {
                tag: Some("tag_1".to_owned()),
                phone_number: Some("555".to_owned()),
                ..Default::default()
            },
            page: PageParams::new(PageNumber::FIRST, PageSize::new(2).unwrap()),
            sort: Some("-purchased_at".to_owned()),
        };
        let page = client.phone_numbers().list(&params).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].phone_number, "+19705555098");
        assert_eq!(page.data[0].tags, vec!["tag_1", "tag_2"]);
        assert!(page.has_next_page());

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "/v2/phone_numbers");
        assert_eq!(request.query("filter[tag]").as_deref(), Some("tag_1"));
        assert_eq!(request.query("filter[phone_number]").as_deref(), Some("555"));
        assert_eq!(request.query("filter[status]"), None);
        assert_eq!(request.query("page[number]").as_deref(), Some("1"));
        assert_eq!(request.query("page[size]").as_deref(), Some("2"));
        assert_eq!(request.query("sort").as_deref(), Some("-purchased_at"));
    }

    #[tokio::test]
    async fn list_tolerates_null_lists_and_blank_ids() {
        let body = r#"{
          "data": [{
            "id": "1293384261075731500",
            "phone_number": "+19705555099",
            "tags": null,
            "connection_id": null,
            "messaging_profile_id": ""
          }],
          "meta": null
        }"#;
        let client = make_client(FakeTransport::new(200, body));

        let page = client
            .phone_numbers()
            .list(&PhoneNumberListParams::default())
            .await
            .unwrap();
        let record = &page.data[0];
        assert!(record.tags.is_empty());
        assert_eq!(record.connection_id, None);
        assert_eq!(record.messaging_profile_id, None);
        assert!(!page.has_next_page());
    }

    #[test]
    fn record_number_parses_e164() {
        let record: PhoneNumberRecord = serde_json::from_str(RECORD).unwrap();
        let number = record.number().unwrap();
        assert_eq!(number.country_code(), 1);
        assert_eq!(number.e164(), "+19705555098");
    }

    #[tokio::test]
    async fn update_sends_patch_with_null_for_cleared_fields() {
        let transport = FakeTransport::new(200, format!(r#"{{"data": {RECORD}}}"#));
        let client = make_client(transport.clone());
        let id = PhoneNumberId::new("1293384261075731499").unwrap();

        let params = PhoneNumberUpdateParams {
            tags: vec!["vip".to_owned()].into(),
            connection_id: Omittable::Null,
            ..Default::default()
        };
        let record = client.phone_numbers().update(&id, &params).await.unwrap();
        assert_eq!(record.emergency_enabled, Some(true));

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/v2/phone_numbers/1293384261075731499");
        assert_eq!(
            request.body,
            Some(json!({ "tags": ["vip"], "connection_id": null }))
        );
    }

    #[tokio::test]
    async fn retrieve_and_delete_use_record_path() {
        let transport = FakeTransport::new(200, format!(r#"{{"data": {RECORD}}}"#));
        let client = make_client(transport.clone());
        let id = PhoneNumberId::new("1293384261075731499").unwrap();

        let record = client.phone_numbers().retrieve(&id).await.unwrap();
        assert_eq!(record.status.as_deref(), Some("active"));
        assert_eq!(transport.last_request().method, HttpMethod::Get);

        client.phone_numbers().delete(&id).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path(), "/v2/phone_numbers/1293384261075731499");
    }

    #[tokio::test]
    async fn retrieve_missing_number_is_not_found() {
        let body = r#"{"errors": [{"code": "10005", "title": "Resource not found"}]}"#;
        let client = make_client(FakeTransport::new(404, body));
        let err = client
            .phone_numbers()
            .retrieve(&PhoneNumberId::new("missing").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
