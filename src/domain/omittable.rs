use serde::{Serialize, Serializer};

/// Optional request field that distinguishes "not provided" from "explicitly null".
///
/// Request structs mark these fields with
/// `#[serde(default, skip_serializing_if = "Omittable::is_omitted")]`, so
/// [`Omittable::Omitted`] leaves the key out of the body while [`Omittable::Null`]
/// sends `null` (which the API treats as "clear this value").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Omittable<T> {
    Omitted,
    Null,
    Value(T),
}

impl<T> Omittable<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Omitted | Self::Null => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Omittable<U> {
        match self {
            Self::Omitted => Omittable::Omitted,
            Self::Null => Omittable::Null,
            Self::Value(value) => Omittable::Value(f(value)),
        }
    }

    /// `None` becomes [`Omittable::Omitted`]; use [`Omittable::Null`] to send `null`.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Omitted, Self::Value)
    }
}

impl<T> Default for Omittable<T> {
    fn default() -> Self {
        Self::Omitted
    }
}

impl<T> From<T> for Omittable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Omittable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            // Omitted only reaches here when the field lacks `skip_serializing_if`.
            Self::Omitted | Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::Omittable;

    #[derive(Serialize, Default)]
    struct Update {
        #[serde(skip_serializing_if = "Omittable::is_omitted")]
        tags: Omittable<Vec<String>>,
        #[serde(skip_serializing_if = "Omittable::is_omitted")]
        customer_reference: Omittable<String>,
    }

    #[test]
    fn omitted_fields_are_absent_and_null_fields_are_sent() {
        let update = Update {
            tags: Omittable::Null,
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "tags": null }));

        let update = Update {
            customer_reference: "ref-1".to_owned().into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "customer_reference": "ref-1" })
        );

        assert_eq!(serde_json::to_value(Update::default()).unwrap(), json!({}));
    }

    #[test]
    fn from_option_maps_none_to_omitted() {
        assert!(Omittable::<u8>::from_option(None).is_omitted());
        assert_eq!(Omittable::from_option(Some(3)).as_value(), Some(&3));
        assert_eq!(Omittable::Value(2).map(|v| v * 2), Omittable::Value(4));
        assert!(Omittable::<u8>::Null.map(|v| v * 2).is_null());
    }
}
