use telnyx::{RequestParams, TelnyxClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TelnyxClient::from_env()?;

    let raw = client
        .balance()
        .with_raw_response()
        .retrieve(RequestParams::new())
        .await?;
    let balance = &raw.data().data;
    println!(
        "balance: {} {}, available credit: {:?}, request id: {:?}",
        balance.balance,
        balance.currency,
        balance.available_credit,
        raw.request_id()
    );

    Ok(())
}
