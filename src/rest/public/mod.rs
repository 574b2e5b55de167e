//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::{Value, json};

use crate::auth::Token;
use crate::error::{CallContext, NobitexError};
use crate::rest::NobitexRestClient;
use crate::rest::endpoints::public;
use crate::rest::request::RequestDescriptor;
use crate::rest::response::decode_response;
use crate::types::DstCurrency;

/// Envelope key used by the UDF history endpoint.
const UDF_STATUS_KEY: &str = "s";

impl NobitexRestClient {
    /// Get the order book of a market.
    ///
    /// The payload holds `bids` and `asks` as `[price, quantity]` string pairs.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nobitex_api_client::rest::NobitexRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = NobitexRestClient::new();
    ///     let book = client.orderbook("USDTIRT").await?;
    ///     println!("Last update: {}", book["lastUpdate"]);
    ///     Ok(())
    /// }
    /// ```
    pub async fn orderbook(&self, symbol: &str) -> Result<Value, NobitexError> {
        let context = CallContext::new("orderbook", json!({ "symbol": symbol }));
        let path = format!("{}{}", public::ORDERBOOK, symbol.to_ascii_uppercase());
        self.execute(&context, &RequestDescriptor::get(path)).await
    }

    /// Get the recent trades of a market.
    pub async fn trades(&self, symbol: &str) -> Result<Value, NobitexError> {
        let context = CallContext::new("trades", json!({ "symbol": symbol }));
        let path = format!("{}{}", public::TRADES, symbol.to_ascii_uppercase());
        self.execute(&context, &RequestDescriptor::get(path)).await
    }

    /// Get market statistics for a source/destination currency pair.
    ///
    /// # Arguments
    ///
    /// * `src_currency` - Base currency, e.g. `btc` (case-insensitive).
    /// * `dst_currency` - Quote currency.
    pub async fn market_stats(
        &self,
        src_currency: &str,
        dst_currency: DstCurrency,
    ) -> Result<Value, NobitexError> {
        let context = CallContext::new(
            "market_stats",
            json!({ "src_currency": src_currency, "dst_currency": dst_currency }),
        );
        let body = json!({
            "srcCurrency": src_currency.to_ascii_lowercase(),
            "dstCurrency": dst_currency.as_str(),
        });
        let request = RequestDescriptor::get(public::MARKET_STATS).json(body);
        self.execute(&context, &request).await
    }

    /// Get OHLC candles.
    ///
    /// This endpoint reports its status under `s` rather than `status`.
    pub async fn ohlc(&self, request: &OhlcRequest) -> Result<Value, NobitexError> {
        let context = CallContext::for_request("ohlc", request);
        let descriptor = RequestDescriptor::get(public::OHLC)
            .query(request)
            .map_err(|e| NobitexError::invalid_input(&context, e.to_string()))?;
        self.execute_with_status_key(&context, &descriptor, UDF_STATUS_KEY)
            .await
    }

    /// Get global market statistics.
    pub async fn global_stats(&self) -> Result<Value, NobitexError> {
        let context = CallContext::bare("global_stats");
        self.execute(&context, &RequestDescriptor::get(public::GLOBAL_STATS))
            .await
    }

    /// Exchange a username and password for an API token.
    ///
    /// `captcha` defaults to `"api"`, which is what the exchange expects from
    /// programmatic clients. Only the HTTP status is checked; the token is
    /// read from `result.token`, or from `key` when the former is absent.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        captcha: Option<&str>,
    ) -> Result<Token, NobitexError> {
        let captcha = captcha.unwrap_or("api");
        let context = CallContext::new(
            "login",
            json!({ "username": username, "captcha": captcha }),
        );
        let body = Self::json_body(
            &context,
            &LoginRequest {
                username,
                password,
                captcha,
            },
        )?;
        let request = RequestDescriptor::post(public::LOGIN).json(body);

        let raw = self.request(&context, &request).await?;
        let body = decode_response(&context, &raw)?;
        body.pointer("/result/token")
            .or_else(|| body.get("key"))
            .and_then(Value::as_str)
            .map(Token::new)
            .ok_or_else(|| NobitexError::InvalidResponse {
                context,
                message: format!("token not found | {body}"),
                body: None,
            })
    }
}
