//! Example: Public market data and error classification.
//!
//! Run with: cargo run --example market_data
//!
//! Set `RUST_LOG=nobitex_api_client=debug` to see outgoing requests. When
//! `NOBITEX_TOKEN` is set, the user profile is fetched as well.

use nobitex_api_client::NobitexError;
use nobitex_api_client::auth::EnvToken;
use nobitex_api_client::rest::NobitexRestClient;
use nobitex_api_client::types::{DstCurrency, ORDERBOOK_PRICE_INDEX, ORDERBOOK_QUANTITY_INDEX};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut client = NobitexRestClient::new();

    let book = client.orderbook("BTCIRT").await?;
    if let Some(levels) = book["bids"].as_array() {
        for level in levels.iter().take(5) {
            println!(
                "bid {} x {}",
                level[ORDERBOOK_PRICE_INDEX], level[ORDERBOOK_QUANTITY_INDEX]
            );
        }
    }

    let stats = client.market_stats("btc", DstCurrency::Rls).await?;
    println!("Stats: {}", stats["stats"]);

    match client.trades("NOSUCHMARKET").await {
        Ok(trades) => println!("Trades: {}", trades["trades"]),
        Err(NobitexError::StatusCode { status, .. }) => println!("Unknown market: HTTP {status}"),
        Err(err @ NobitexError::InvalidResponse { .. }) => println!("Rejected: {err}"),
        Err(err) => return Err(err.into()),
    }

    if let Some(token) = EnvToken::try_from_env() {
        client.set_token(token);
        let profile = client.user_profile().await?;
        println!("Profile: {}", profile["profile"]);
    }

    Ok(())
}
