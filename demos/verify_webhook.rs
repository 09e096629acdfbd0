//! Reads a webhook body from stdin and checks it against the `telnyx-signature-ed25519`
//! and `telnyx-timestamp` values given in `TELNYX_SIGNATURE` and `TELNYX_TIMESTAMP`.

use std::io::{self, Read};

use telnyx::TelnyxClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signature = std::env::var("TELNYX_SIGNATURE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELNYX_SIGNATURE environment variable is required",
        )
    })?;
    let timestamp = std::env::var("TELNYX_TIMESTAMP").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELNYX_TIMESTAMP environment variable is required",
        )
    })?;

    let mut payload = String::new();
    io::stdin().read_to_string(&mut payload)?;

    let client = TelnyxClient::from_env()?;
    let headers = [
        ("telnyx-signature-ed25519", signature.as_str()),
        ("telnyx-timestamp", timestamp.as_str()),
    ];
    let event = client.webhooks().unwrap(&payload, &headers)?;
    println!(
        "verified {} ({}) at {:?}",
        event.event_type(),
        event.data.id,
        event.data.occurred_at
    );

    Ok(())
}
