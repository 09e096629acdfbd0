//! Resource layer: one module per API resource.
//!
//! Every resource exposes a typed handle (`Messages`, `SimCards`, ...) taking params structs
//! and returning decoded records, and a raw handle (`MessagesRaw`, ...) reached through
//! `with_raw_response()` that takes [`RequestParams`](crate::domain::RequestParams) and returns
//! [`RawResponse`](crate::client::RawResponse).

/// Declares the typed and raw handle pair for one resource.
macro_rules! resource_handles {
    ($(#[$meta:meta])* $name:ident, $raw:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            client: &'a crate::client::TelnyxClient,
        }

        #[doc = concat!("Raw-response variant of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy)]
        pub struct $raw<'a> {
            client: &'a crate::client::TelnyxClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a crate::client::TelnyxClient) -> Self {
                Self { client }
            }

            /// Same operations, returning the HTTP response alongside the decoded body.
            pub fn with_raw_response(&self) -> $raw<'a> {
                $raw {
                    client: self.client,
                }
            }
        }
    };
}

mod available_phone_numbers;
mod balance;
mod brands;
mod calls;
mod messages;
mod messaging_profiles;
mod number_orders;
mod partner_campaigns;
mod phone_numbers;
mod porting_orders;
mod sim_cards;
mod verifications;
mod verify_profiles;

pub use available_phone_numbers::{
    AvailablePhoneNumber, AvailablePhoneNumberFilter, AvailablePhoneNumberListParams,
    AvailablePhoneNumbers, AvailablePhoneNumbersList, AvailablePhoneNumbersMeta,
    AvailablePhoneNumbersRaw, CostInformation, NumberFeature, PhoneNumberPattern,
    RegionInformation,
};
pub use balance::{AccountBalance, Balance, BalanceRaw};
pub use brands::{
    Brand, BrandCreateParams, BrandListParams, BrandPage, Brands, BrandsRaw, EntityType,
};
pub use calls::{
    Call, CallAnswerParams, CallDialParams, CallHangupParams, CallSpeakParams, CallStatus, Calls,
    CallsRaw,
};
pub use messages::{
    Message, MessageCost, MessageMedia, MessageParty, MessageSendParams, MessageType, Messages,
    MessagesRaw,
};
pub use messaging_profiles::{
    MessagingProfile, MessagingProfileCreateParams, MessagingProfileFilter,
    MessagingProfileListParams, MessagingProfileUpdateParams, MessagingProfiles,
    MessagingProfilesRaw,
};
pub use number_orders::{
    NumberOrder, NumberOrderCreateParams, NumberOrderFilter, NumberOrderListParams,
    NumberOrderPhoneNumber, NumberOrderUpdateParams, NumberOrders, NumberOrdersRaw,
};
pub use partner_campaigns::{
    CampaignSharingStatus, PartnerCampaign, PartnerCampaignListParams, PartnerCampaignPage,
    PartnerCampaigns, PartnerCampaignsRaw, SharingStatus,
};
pub use phone_numbers::{
    PhoneNumberFilter, PhoneNumberListParams, PhoneNumberRecord, PhoneNumberUpdateParams,
    PhoneNumbers, PhoneNumbersRaw,
};
pub use porting_orders::{
    PortingOrder, PortingOrderCreateParams, PortingOrderFilter, PortingOrderListParams,
    PortingOrderStatus, PortingOrderUpdateParams, PortingOrders, PortingOrdersRaw,
};
pub use sim_cards::{
    SimCard, SimCardAction, SimCardFilter, SimCardListParams, SimCardStatus, SimCardUpdateParams,
    SimCards, SimCardsRaw,
};
pub use verifications::{
    Verification, VerificationTriggerParams, Verifications, VerificationsRaw, VerifyCodeParams,
    VerifyCodeResult,
};
pub use verify_profiles::{
    VerifyProfile, VerifyProfileCallSettings, VerifyProfileCreateParams, VerifyProfileFilter,
    VerifyProfileListParams, VerifyProfileSmsSettings, VerifyProfiles, VerifyProfilesRaw,
};
