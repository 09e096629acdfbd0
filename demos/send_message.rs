use std::io;

use telnyx::{MessageSendParams, MessagingProfileId, PhoneNumber, RawPhoneNumber, TelnyxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from_raw = std::env::var("TELNYX_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELNYX_FROM environment variable is required",
        )
    })?;
    let to_raw = std::env::var("TELNYX_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELNYX_TO environment variable is required",
        )
    })?;
    let text = std::env::var("TELNYX_MESSAGE")
        .unwrap_or_else(|_| "Hello from the telnyx demo.".to_owned());

    // Accept "+1 (866) 555-0002" and friends; Telnyx wants E.164.
    let to = PhoneNumber::parse_e164(to_raw)?;
    if !to.is_valid() {
        eprintln!("warning: {to} does not match a known numbering plan");
    }

    let client = TelnyxClient::from_env()?;
    let mut params = MessageSendParams::text(RawPhoneNumber::new(from_raw)?, to.into(), text);
    if let Ok(profile_id) = std::env::var("TELNYX_MESSAGING_PROFILE_ID") {
        params.messaging_profile_id = MessagingProfileId::new(profile_id)?.into();
    }

    let message = client.messages().send(&params).await?;
    println!(
        "id: {}, type: {:?}, parts: {:?}, to: {:?}",
        message.id, message.message_type, message.parts, message.to
    );

    Ok(())
}
