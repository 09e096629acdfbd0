//! Webhook layer: Ed25519 signature checks and event decoding.
//!
//! Telnyx signs `"{telnyx-timestamp}|{raw body}"` with its account key and sends the
//! base64 signature in `telnyx-signature-ed25519`. Deliveries whose timestamp is further
//! than the tolerance from the local clock (in either direction) are rejected.

mod event;
mod headers;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::{Signature, VerifyingKey};

use crate::client::TelnyxError;
use crate::domain::UnixTimestamp;

pub use event::{EventData, WebhookEvent};
pub use headers::HeaderSource;

/// Header carrying the base64 Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "telnyx-signature-ed25519";
/// Header carrying the signing time in unix seconds.
pub const TIMESTAMP_HEADER: &str = "telnyx-timestamp";
/// Maximum accepted distance between the delivery timestamp and the local clock.
pub const DEFAULT_TOLERANCE: Duration = Duration::from_secs(300);

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("no webhook public key configured")]
    MissingPublicKey,

    #[error("invalid webhook public key: {0}")]
    InvalidPublicKey(String),

    #[error("missing `{0}` header")]
    MissingHeader(&'static str),

    #[error("invalid `telnyx-timestamp` header: {0:?}")]
    InvalidTimestamp(String),

    #[error(
        "webhook timestamp {timestamp} is {skew_secs}s away from now (tolerance {tolerance_secs}s)"
    )]
    TimestampOutOfTolerance {
        timestamp: u64,
        skew_secs: u64,
        tolerance_secs: u64,
    },

    #[error("invalid webhook signature encoding: {0}")]
    InvalidSignature(String),

    #[error("webhook signature does not match payload")]
    SignatureMismatch,

    #[error("webhook payload is not a valid event: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verifies and decodes incoming webhooks.
///
/// Obtained from [`TelnyxClient::webhooks`](crate::client::TelnyxClient::webhooks), which
/// carries the configured public key and tolerance, or built directly with [`Webhooks::new`].
pub struct Webhooks {
    public_key: Option<String>,
    tolerance: Duration,
}

impl Default for Webhooks {
    fn default() -> Self {
        Self::new(None, DEFAULT_TOLERANCE)
    }
}

impl Webhooks {
    /// `public_key` is the base64 Ed25519 key shown in the portal.
    pub fn new(public_key: Option<String>, tolerance: Duration) -> Self {
        Self {
            public_key,
            tolerance,
        }
    }

    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    /// Check the signature of a delivery against the current clock.
    pub fn verify<H>(&self, payload: impl AsRef<[u8]>, headers: &H) -> Result<(), TelnyxError>
    where
        H: HeaderSource + ?Sized,
    {
        self.verify_at(payload, headers, UnixTimestamp::now())
    }

    /// Same as [`Webhooks::verify`] with an explicit "now".
    pub fn verify_at<H>(
        &self,
        payload: impl AsRef<[u8]>,
        headers: &H,
        now: UnixTimestamp,
    ) -> Result<(), TelnyxError>
    where
        H: HeaderSource + ?Sized,
    {
        self.check(payload.as_ref(), headers, now).map_err(|err| {
            tracing::warn!(error = %err, "rejected Telnyx webhook");
            TelnyxError::Webhook(err)
        })
    }

    /// Verify a delivery, then decode it.
    pub fn unwrap<H>(&self, payload: impl AsRef<[u8]>, headers: &H) -> Result<WebhookEvent, TelnyxError>
    where
        H: HeaderSource + ?Sized,
    {
        self.unwrap_at(payload, headers, UnixTimestamp::now())
    }

    /// Same as [`Webhooks::unwrap`] with an explicit "now".
    pub fn unwrap_at<H>(
        &self,
        payload: impl AsRef<[u8]>,
        headers: &H,
        now: UnixTimestamp,
    ) -> Result<WebhookEvent, TelnyxError>
    where
        H: HeaderSource + ?Sized,
    {
        let payload = payload.as_ref();
        self.verify_at(payload, headers, now)?;
        let event: WebhookEvent =
            serde_json::from_slice(payload).map_err(WebhookError::InvalidPayload)?;
        tracing::debug!(
            event_type = %event.data.event_type,
            id = %event.data.id,
            "accepted Telnyx webhook"
        );
        Ok(event)
    }

    fn check<H>(&self, payload: &[u8], headers: &H, now: UnixTimestamp) -> Result<(), WebhookError>
    where
        H: HeaderSource + ?Sized,
    {
        let key = self.verifying_key()?;

        let signature = headers
            .header(SIGNATURE_HEADER)
            .ok_or(WebhookError::MissingHeader(SIGNATURE_HEADER))?;
        let timestamp = headers
            .header(TIMESTAMP_HEADER)
            .ok_or(WebhookError::MissingHeader(TIMESTAMP_HEADER))?
            .trim();

        let sent_at = timestamp
            .parse::<u64>()
            .map(UnixTimestamp::new)
            .map_err(|_| WebhookError::InvalidTimestamp(timestamp.to_owned()))?;
        let skew_secs = now.abs_diff(sent_at);
        if skew_secs > self.tolerance.as_secs() {
            return Err(WebhookError::TimestampOutOfTolerance {
                timestamp: sent_at.value(),
                skew_secs,
                tolerance_secs: self.tolerance.as_secs(),
            });
        }

        let signature = decode_signature(signature)?;

        let mut message = Vec::with_capacity(timestamp.len() + 1 + payload.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.push(b'|');
        message.extend_from_slice(payload);

        // Strict mode also refuses small-order keys and non-canonical signatures.
        key.verify_strict(&message, &signature)
            .map_err(|_| WebhookError::SignatureMismatch)
    }

    fn verifying_key(&self) -> Result<VerifyingKey, WebhookError> {
        let encoded = self
            .public_key
            .as_deref()
            .ok_or(WebhookError::MissingPublicKey)?;
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|err| WebhookError::InvalidPublicKey(err.to_string()))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            WebhookError::InvalidPublicKey(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        VerifyingKey::from_bytes(&bytes).map_err(|err| WebhookError::InvalidPublicKey(err.to_string()))
    }
}

fn decode_signature(encoded: &str) -> Result<Signature, WebhookError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|err| WebhookError::InvalidSignature(err.to_string()))?;
    let bytes: [u8; 64] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        WebhookError::InvalidSignature(format!("expected 64 bytes, got {}", bytes.len()))
    })?;
    Ok(Signature::from_bytes(&bytes))
}
