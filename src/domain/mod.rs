//! Domain layer: strong types with validation and invariants (no I/O).

mod omittable;
mod params;
mod response;
pub(crate) mod serde_helpers;
mod validation;
mod value;

pub use omittable::Omittable;
pub use params::{CursorParams, PageParams, RequestParams};
pub use response::{
    ActionResult, ApiErrorDetail, CursorMeta, CursorPage, Cursors, Data, ErrorSource, Page,
    PageMeta,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, BrandId, CallControlId, CampaignId, ConnectionId, MessageId, MessagingProfileId,
    NumberOrderId, PageNumber, PageSize, PhoneNumber, PhoneNumberId, PortingOrderId,
    RawPhoneNumber, SimCardId, UnixTimestamp, VerificationId, VerifyProfileId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::GB), " 020 7946 0018 ").unwrap();
        assert_eq!(pn.raw(), "020 7946 0018");
        assert_eq!(pn.e164(), "+442079460018");
    }

    #[test]
    fn page_size_reports_field_in_error() {
        assert!(matches!(
            PageSize::new(251),
            Err(ValidationError::OutOfRange {
                field: PageSize::FIELD,
                actual: 251,
                ..
            })
        ));
    }

    #[test]
    fn typed_params_become_raw_params() {
        let params = RequestParams::from_serialize(&PageParams::new(
            PageNumber::FIRST,
            PageSize::new(50).unwrap(),
        ))
        .unwrap();
        assert_eq!(params.get("number"), Some(&serde_json::json!(1)));
        assert_eq!(params.get("size"), Some(&serde_json::json!(50)));
    }
}
