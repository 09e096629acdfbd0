use serde::de::DeserializeOwned;

use crate::client::TelnyxError;
use crate::domain::Data;

/// Header carrying the platform's request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
/// Decoded response plus the underlying HTTP response it came from.
///
/// Returned by every raw resource method (`with_raw_response()`).
pub struct RawResponse<T> {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    data: T,
}

impl<T> RawResponse<T> {
    pub(crate) fn new(status: u16, headers: Vec<(String, String)>, body: String, data: T) -> Self {
        Self {
            status,
            headers,
            body,
            data,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// All response headers in the order received.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID_HEADER)
    }

    /// Undecoded response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decode the body again into another shape, such as `CursorPage<U>` for listings
    /// paginated with `page[after]`/`page[before]`.
    pub fn parse_body<U: DeserializeOwned>(&self) -> Result<U, TelnyxError> {
        serde_json::from_str(&self.body).map_err(|err| TelnyxError::Parse(Box::new(err)))
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Split into `(status, headers, body, data)`.
    pub fn into_parts(self) -> (u16, Vec<(String, String)>, String, T) {
        (self.status, self.headers, self.body, self.data)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RawResponse<U> {
        RawResponse {
            status: self.status,
            headers: self.headers,
            body: self.body,
            data: f(self.data),
        }
    }
}

impl<T> RawResponse<Data<T>> {
    /// Unwrap the `data` member of a single-resource envelope.
    pub fn into_inner(self) -> T {
        self.data.data
    }
}
