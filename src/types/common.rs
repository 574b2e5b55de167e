//! Common domain types for the Nobitex API.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Error returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            _ => Err(ParseEnumError::new("side", s)),
        }
    }
}

/// How an order is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionType {
    /// Fill immediately at the best available price
    #[default]
    Market,
    /// Fill at the given price or better
    Limit,
    /// Place a market order once the stop price is reached
    StopMarket,
    /// Place a limit order once the stop price is reached
    StopLimit,
}

impl ExecutionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionType::Market => "market",
            ExecutionType::Limit => "limit",
            ExecutionType::StopMarket => "stop_market",
            ExecutionType::StopLimit => "stop_limit",
        }
    }

    /// Whether orders of this type need a stop price.
    pub fn requires_stop_price(&self) -> bool {
        matches!(self, ExecutionType::StopMarket | ExecutionType::StopLimit)
    }
}

impl std::fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "market" => Ok(ExecutionType::Market),
            "limit" => Ok(ExecutionType::Limit),
            "stop_market" => Ok(ExecutionType::StopMarket),
            "stop_limit" => Ok(ExecutionType::StopLimit),
            _ => Err(ParseEnumError::new("execution type", s)),
        }
    }
}

/// Filter for listing the user's orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenOrderStatus {
    All,
    #[default]
    Open,
    Done,
    Close,
}

impl OpenOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenOrderStatus::All => "all",
            OpenOrderStatus::Open => "open",
            OpenOrderStatus::Done => "done",
            OpenOrderStatus::Close => "close",
        }
    }
}

impl std::fmt::Display for OpenOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target status when updating an existing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateOrderStatus {
    New,
    Active,
    Inactive,
    /// Cancel the order
    Cancel,
}

impl UpdateOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOrderStatus::New => "new",
            UpdateOrderStatus::Active => "active",
            UpdateOrderStatus::Inactive => "inactive",
            UpdateOrderStatus::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for UpdateOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level of detail in order listings.
///
/// Sent as the integer `1` or `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Details {
    #[default]
    Basic = 1,
    Advanced = 2,
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Quote currency of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DstCurrency {
    /// Iranian Rial
    Rls,
    /// Tether
    Usdt,
}

impl DstCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            DstCurrency::Rls => "rls",
            DstCurrency::Usdt => "usdt",
        }
    }
}

impl std::fmt::Display for DstCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DstCurrency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rls" => Ok(DstCurrency::Rls),
            "usdt" | "tether" => Ok(DstCurrency::Usdt),
            _ => Err(ParseEnumError::new("destination currency", s)),
        }
    }
}

/// Candle resolution for OHLC history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1")]
    Minute1,
    #[serde(rename = "5")]
    Minute5,
    #[serde(rename = "15")]
    Minute15,
    #[serde(rename = "30")]
    Minute30,
    #[serde(rename = "60")]
    Hour1,
    #[serde(rename = "180")]
    Hour3,
    #[serde(rename = "240")]
    Hour4,
    #[serde(rename = "360")]
    Hour6,
    #[serde(rename = "720")]
    Hour12,
    #[serde(rename = "D")]
    Day1,
    #[serde(rename = "2D")]
    Day2,
    #[serde(rename = "3D")]
    Day3,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Minute1 => "1",
            Resolution::Minute5 => "5",
            Resolution::Minute15 => "15",
            Resolution::Minute30 => "30",
            Resolution::Hour1 => "60",
            Resolution::Hour3 => "180",
            Resolution::Hour4 => "240",
            Resolution::Hour6 => "360",
            Resolution::Hour12 => "720",
            Resolution::Day1 => "D",
            Resolution::Day2 => "2D",
            Resolution::Day3 => "3D",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of the price within an order book level `[price, quantity]`.
pub const ORDERBOOK_PRICE_INDEX: usize = 0;
/// Index of the quantity within an order book level `[price, quantity]`.
pub const ORDERBOOK_QUANTITY_INDEX: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ExecutionType::StopLimit).unwrap(),
            "\"stop_limit\""
        );
        assert_eq!(
            serde_json::to_string(&ExecutionType::Market).unwrap(),
            "\"market\""
        );
    }

    #[test]
    fn test_execution_type_parse_is_case_insensitive() {
        assert_eq!(
            "STOP_MARKET".parse::<ExecutionType>().unwrap(),
            ExecutionType::StopMarket
        );
        assert!("stop".parse::<ExecutionType>().is_err());
    }

    #[test]
    fn test_requires_stop_price() {
        assert!(ExecutionType::StopLimit.requires_stop_price());
        assert!(ExecutionType::StopMarket.requires_stop_price());
        assert!(!ExecutionType::Limit.requires_stop_price());
        assert!(!ExecutionType::Market.requires_stop_price());
    }

    #[test]
    fn test_details_serialize_as_integer() {
        assert_eq!(serde_json::to_string(&Details::Advanced).unwrap(), "2");
    }

    #[test]
    fn test_dst_currency_aliases() {
        assert_eq!("Tether".parse::<DstCurrency>().unwrap(), DstCurrency::Usdt);
        assert_eq!("RLS".parse::<DstCurrency>().unwrap(), DstCurrency::Rls);
        let err = "eur".parse::<DstCurrency>().unwrap_err();
        assert_eq!(err.to_string(), "unknown destination currency: \"eur\"");
    }

    #[test]
    fn test_resolution_matches_wire_format() {
        assert_eq!(serde_json::to_string(&Resolution::Day1).unwrap(), "\"D\"");
        assert_eq!(Resolution::Hour1.to_string(), "60");
    }
}
