//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::error::{CallContext, NobitexError};
use crate::rest::NobitexRestClient;
use crate::types::serde_helpers::{comma_separated_lowercase, lowercase, lowercase_option};
use crate::types::{Details, DstCurrency, ExecutionType, OpenOrderStatus, Side};

/// Request to place a new order.
///
/// `stopPrice` is only sent for stop executions, and is mandatory for them.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Order side.
    #[serde(rename = "type")]
    pub side: Side,
    /// Execution type.
    pub execution: ExecutionType,
    /// Base currency, e.g. `btc`.
    #[serde(serialize_with = "lowercase")]
    pub src_currency: String,
    /// Quote currency.
    pub dst_currency: DstCurrency,
    /// Amount of the base currency, sent as a decimal string.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Limit price, sent as a number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Trigger price for stop executions.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub stop_price: Option<Decimal>,
}

impl CreateOrderRequest {
    /// Create a new order request without a stop price.
    pub fn new(
        side: Side,
        execution: ExecutionType,
        src_currency: impl Into<String>,
        dst_currency: DstCurrency,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            side,
            execution,
            src_currency: src_currency.into(),
            dst_currency,
            amount,
            price,
            stop_price: None,
        }
    }

    /// Set the stop price.
    pub fn stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    /// Build the JSON body sent to the exchange.
    ///
    /// Fails with [`NobitexError::InvalidInput`] when a stop execution has no
    /// stop price.
    pub(crate) fn to_body(&self, context: &CallContext) -> Result<Value, NobitexError> {
        let needs_stop = self.execution.requires_stop_price();
        if needs_stop && self.stop_price.is_none() {
            return Err(NobitexError::invalid_input(
                context,
                "stop_price is required for stop_limit and stop_market orders",
            ));
        }

        let mut body = NobitexRestClient::json_body(context, self)?;
        if !needs_stop {
            if let Some(map) = body.as_object_mut() {
                map.remove("stopPrice");
            }
        }
        Ok(body)
    }
}

/// Request for listing the user's orders.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrdersRequest {
    /// Order status filter.
    pub status: Option<OpenOrderStatus>,
    /// Base currency filter.
    #[serde(serialize_with = "lowercase_option")]
    pub src_currency: Option<String>,
    /// Quote currency filter.
    pub dst_currency: Option<DstCurrency>,
    /// Level of detail.
    pub details: Option<Details>,
}

impl Default for OpenOrdersRequest {
    /// Open orders of every market, basic details.
    fn default() -> Self {
        Self {
            status: Some(OpenOrderStatus::Open),
            src_currency: None,
            dst_currency: None,
            details: Some(Details::Basic),
        }
    }
}

/// Request to cancel orders in bulk.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllOrdersRequest {
    /// Base currency.
    #[serde(serialize_with = "lowercase")]
    pub src_currency: String,
    /// Quote currency.
    pub dst_currency: DstCurrency,
    /// Only cancel orders of this execution type.
    pub execution: Option<ExecutionType>,
    /// Only cancel orders older than this many hours.
    pub hours: Option<f64>,
}

impl CancelAllOrdersRequest {
    /// Cancel the market-execution orders of a pair.
    pub fn new(src_currency: impl Into<String>, dst_currency: DstCurrency) -> Self {
        Self {
            src_currency: src_currency.into(),
            dst_currency,
            execution: Some(ExecutionType::Market),
            hours: None,
        }
    }

    /// Filter by execution type, or `None` for all types.
    pub fn execution(mut self, execution: Option<ExecutionType>) -> Self {
        self.execution = execution;
        self
    }

    /// Only cancel orders older than `hours`.
    pub fn hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Build the JSON body sent to the exchange.
    ///
    /// Fails with [`NobitexError::InvalidInput`] when `hours` is NaN or
    /// infinite, which JSON cannot carry.
    pub(crate) fn to_body(&self, context: &CallContext) -> Result<Value, NobitexError> {
        if let Some(hours) = self.hours.filter(|h| !h.is_finite()) {
            return Err(NobitexError::invalid_input(
                context,
                format!("hours must be a finite number, got {hours}"),
            ));
        }
        NobitexRestClient::json_body(context, self)
    }
}

/// Body for the currency-filtered wallet listing.
#[derive(Serialize)]
pub(crate) struct WalletsFilter<'a> {
    #[serde(serialize_with = "comma_separated_lowercase")]
    pub currencies: &'a [String],
}

/// Body for adding a bank account.
#[derive(Serialize)]
pub(crate) struct BankAccount<'a> {
    pub number: &'a str,
    pub shaba: &'a str,
    pub bank: &'a str,
}
