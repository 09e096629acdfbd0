//! Typed Rust client for the Telnyx v2 REST API.
//!
//! The crate is split into a domain layer of strong types (ids, phone numbers, pagination,
//! the [`Omittable`] request-field marker), a transport layer for wire-format quirks
//! (deepObject query strings, JSON envelopes), a small client layer that sends requests,
//! one module per API resource, and webhook signature verification.
//!
//! Every resource is reached from [`TelnyxClient`] and exposes typed methods returning the
//! decoded record, plus `with_raw_response()` for the same calls returning a
//! [`RawResponse`] with status, headers and body.
//!
//! ```rust,no_run
//! use telnyx::{MessageSendParams, RawPhoneNumber, TelnyxClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telnyx::TelnyxError> {
//!     let client = TelnyxClient::from_env()?;
//!     let params = MessageSendParams::text(
//!         RawPhoneNumber::new("+18445550001")?,
//!         RawPhoneNumber::new("+18665550002")?,
//!         "hello from Rust",
//!     );
//!     let message = client.messages().send(&params).await?;
//!     println!("queued {}", message.id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;
mod transport;
pub mod webhooks;

pub use client::{RawResponse, TelnyxClient, TelnyxClientBuilder, TelnyxError};
pub use domain::{
    ActionResult, ApiErrorDetail, ApiKey, BrandId, CallControlId, CampaignId, ConnectionId,
    CursorPage, CursorParams, Data, MessageId, MessagingProfileId, NumberOrderId, Omittable, Page,
    PageNumber, PageParams, PageSize, PhoneNumber, PhoneNumberId, PortingOrderId, RawPhoneNumber,
    RequestParams, SimCardId, UnixTimestamp, ValidationError, VerificationId, VerifyProfileId,
};
pub use resources::*;
pub use webhooks::{HeaderSource, WebhookError, WebhookEvent, Webhooks};
