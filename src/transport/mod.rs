//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod envelope;
mod query;

pub use envelope::{
    TransportError, decode_error_response, decode_json_response, encode_json_body,
};
pub use query::encode_query;
