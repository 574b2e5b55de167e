//! Types for public REST API endpoints.

use serde::Serialize;
use time::OffsetDateTime;

use crate::types::Resolution;

/// Request for OHLC candles in TradingView UDF format.
#[derive(Debug, Clone, Serialize)]
pub struct OhlcRequest {
    /// Market symbol, e.g. `BTCIRT`.
    pub symbol: String,
    /// Candle resolution.
    pub resolution: Resolution,
    /// Range start, unix seconds.
    pub from: i64,
    /// Range end, unix seconds.
    pub to: i64,
}

impl OhlcRequest {
    /// Create a request for the candles of `symbol` between two instants.
    ///
    /// The symbol is upper-cased.
    pub fn new(
        symbol: impl AsRef<str>,
        resolution: Resolution,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Self {
        Self {
            symbol: symbol.as_ref().to_ascii_uppercase(),
            resolution,
            from: from.unix_timestamp(),
            to: to.unix_timestamp(),
        }
    }
}

/// Body of a login request.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub captcha: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_ohlc_request_query_order() {
        let request = OhlcRequest::new(
            "btcirt",
            Resolution::Day1,
            datetime!(2023-11-14 22:13:20 UTC),
            datetime!(2023-11-15 22:13:20 UTC),
        );
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCIRT&resolution=D&from=1700000000&to=1700086400"
        );
    }
}
