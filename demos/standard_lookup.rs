use anyhow::Result;

use telesign_phoneid::{Config, PhoneIdClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let customer_id =
        std::env::var("TELESIGN_CUSTOMER_ID").expect("TELESIGN_CUSTOMER_ID must be set");
    let api_key = std::env::var("TELESIGN_API_KEY").expect("TELESIGN_API_KEY must be set");

    let phone_number = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "+15558675309".to_string());

    println!("=== PhoneID Standard Lookup ===\n");

    let client = PhoneIdClient::new(Config::new(customer_id, api_key))?;

    println!("Looking up {}...", phone_number);
    let response = client.standard(&phone_number, None).await?;

    println!("Status: {}", response.status);
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    Ok(())
}
