use std::fmt;

use phonenumber::country;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Telnyx API key sent as a bearer token.
///
/// Invariant: non-empty after trimming. `Debug` never prints the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Declares a trimmed, non-empty identifier newtype for one API resource.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Field name used in validation errors.
            pub const FIELD: &'static str = $field;

            /// Create a validated identifier; surrounding whitespace is trimmed.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Borrow the identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

resource_id!(
    /// Phone number resource id (`/phone_numbers/{id}`), not the number itself.
    PhoneNumberId,
    "phone_number_id"
);
resource_id!(
    /// Number order id.
    NumberOrderId,
    "number_order_id"
);
resource_id!(
    /// Message id returned by `POST /messages`.
    MessageId,
    "message_id"
);
resource_id!(
    /// Messaging profile id.
    MessagingProfileId,
    "messaging_profile_id"
);
resource_id!(
    /// Call control id identifying a live call leg.
    CallControlId,
    "call_control_id"
);
resource_id!(
    /// Voice connection (call control application / credential connection) id.
    ConnectionId,
    "connection_id"
);
resource_id!(
    /// SIM card id.
    SimCardId,
    "sim_card_id"
);
resource_id!(
    /// Porting order id.
    PortingOrderId,
    "porting_order_id"
);
resource_id!(
    /// Verification id.
    VerificationId,
    "verification_id"
);
resource_id!(
    /// Verify profile id.
    VerifyProfileId,
    "verify_profile_id"
);
resource_id!(
    /// 10DLC brand id.
    BrandId,
    "brand_id"
);
resource_id!(
    /// 10DLC campaign id.
    CampaignId,
    "campaign_id"
);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Unvalidated phone number as sent on the wire.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RawPhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RawPhoneNumber> for String {
    fn from(value: RawPhoneNumber) -> Self {
        value.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Phone number parsed with libphonenumber rules.
///
/// Telnyx addresses every number in E.164, so equality, ordering, hashing, `Display` and
/// serialization all use that form. The trimmed input is kept for error messages.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Parse a number, falling back to `default_region` when it has no `+` country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = input.into().trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        match phonenumber::parse(default_region, &raw) {
            Ok(parsed) => {
                let e164 = phonenumber::format(&parsed)
                    .mode(phonenumber::Mode::E164)
                    .to_string();
                Ok(Self { raw, e164, parsed })
            }
            Err(_) => Err(ValidationError::InvalidPhoneNumber { input: raw }),
        }
    }

    /// Parse a number that must carry its own country prefix, as API records do.
    pub fn parse_e164(input: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(None, input)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `+` followed by country code and subscriber number.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Calling code, e.g. `1` for NANP numbers.
    pub fn country_code(&self) -> u16 {
        self.parsed.country().code()
    }

    /// Region the number belongs to, when the calling code maps to one.
    pub fn region(&self) -> Option<country::Id> {
        self.parsed.country().id()
    }

    /// Whether the number matches a known numbering plan for its region.
    pub fn is_valid(&self) -> bool {
        phonenumber::is_valid(&self.parsed)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds.
///
/// Used for webhook timestamps (`telnyx-timestamp`).
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current wall-clock time; clocks before the epoch read as zero.
    pub fn now() -> Self {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        Self(secs)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Absolute distance between two timestamps in seconds.
    pub fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// 1-based page index (`page[number]`).
///
/// Invariant: `>= 1`.
pub struct PageNumber(u32);

impl PageNumber {
    /// Query field name.
    pub const FIELD: &'static str = "page[number]";

    /// First page.
    pub const FIRST: Self = Self(1);

    /// Create a validated page number.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: 1,
                max: u32::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page number.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The page after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Page size (`page[size]`).
///
/// Invariant: `1..=250`.
pub struct PageSize(u32);

impl PageSize {
    /// Query field name.
    pub const FIELD: &'static str = "page[size]";

    /// Minimum allowed page size.
    pub const MIN: u32 = 1;
    /// Maximum allowed page size.
    pub const MAX: u32 = 250;

    /// Create a validated page size.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page size.
    pub fn value(self) -> u32 {
        self.0
    }
}
