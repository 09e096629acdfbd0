use telnyx::{PhoneNumberFilter, PhoneNumberListParams, TelnyxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TelnyxClient::from_env()?;
    let mut params = PhoneNumberListParams {
        filter: PhoneNumberFilter {
            tag: std::env::var("TELNYX_TAG").ok(),
            ..Default::default()
        },
        ..Default::default()
    };

    loop {
        let page = client.phone_numbers().list(&params).await?;
        for record in &page.data {
            println!(
                "{} {} status: {:?}, tags: {:?}",
                record.id, record.phone_number, record.status, record.tags
            );
        }
        match page.next_page_params() {
            Some(next) => params.page = next,
            None => break,
        }
    }

    Ok(())
}
