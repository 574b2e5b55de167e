//! Error types for the Nobitex client library.
//!
//! Every failure carries a [`CallContext`] naming the operation that failed and
//! the arguments it was called with, so a failing call can be reproduced from
//! the error alone.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The operation name and original arguments of a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallContext {
    /// Name of the client operation, e.g. `create_order`.
    pub operation: &'static str,
    /// Arguments the operation was called with.
    pub arguments: Value,
}

impl CallContext {
    /// Create a context for an operation with its call arguments.
    pub fn new(operation: &'static str, arguments: Value) -> Self {
        Self {
            operation,
            arguments,
        }
    }

    /// Create a context whose arguments are a serialized request.
    pub fn for_request<T: Serialize>(operation: &'static str, request: &T) -> Self {
        Self::new(operation, serde_json::to_value(request).unwrap_or(Value::Null))
    }

    /// Create a context for an operation that takes no arguments.
    pub fn bare(operation: &'static str) -> Self {
        Self::new(operation, Value::Object(Default::default()))
    }
}

impl fmt::Display for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.operation, self.arguments)
    }
}

/// The main error type for all Nobitex client operations.
#[derive(Error, Debug)]
pub enum NobitexError {
    /// The HTTP call failed before a response was obtained.
    #[error("{} -> {source} | {}", .context.operation, .context.arguments)]
    Transport {
        /// Call that failed.
        context: CallContext,
        /// Underlying client or middleware error.
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a status code outside `200..300`.
    #[error("{} | {status} -> {message} | {}", .context.operation, .context.arguments)]
    StatusCode {
        /// Call that failed.
        context: CallContext,
        /// HTTP status code.
        status: u16,
        /// Response body text.
        message: String,
    },

    /// The response body is not valid JSON.
    #[error("{} -> {message} | {}", .context.operation, .context.arguments)]
    BodyDecoding {
        /// Call that failed.
        context: CallContext,
        /// Parser error followed by the raw body.
        message: String,
    },

    /// The body parsed but does not carry an `ok` status.
    #[error("{} -> {message} | {}", .context.operation, .context.arguments)]
    InvalidResponse {
        /// Call that failed.
        context: CallContext,
        /// What was wrong with the envelope.
        message: String,
        /// Decoded body, present when `status` was found but not `ok`.
        body: Option<Value>,
    },

    /// An authenticated call was attempted without a usable token.
    #[error("{} -> {message} | {}", .context.operation, .context.arguments)]
    InvalidCredential {
        /// Call that failed.
        context: CallContext,
        /// Why the token could not be used.
        message: String,
    },

    /// Caller-supplied parameters failed a local precondition.
    #[error("{} -> {message} | {}", .context.operation, .context.arguments)]
    InvalidInput {
        /// Call that failed.
        context: CallContext,
        /// The violated precondition.
        message: String,
    },

    /// Only GET and POST are spoken by the API.
    #[error("{} -> invalid method {method:?} | {}", .context.operation, .context.arguments)]
    UnsupportedMethod {
        /// Call that failed.
        context: CallContext,
        /// Method name as given.
        method: String,
    },

    /// The exchange refused to place an order.
    #[error("{} -> order rejected ({reason}): {message} | {}", .context.operation, .context.arguments)]
    OrderRejected {
        /// Call that failed.
        context: CallContext,
        /// Rejection reason derived from the server's `code`.
        reason: OrderRejection,
        /// Server-supplied message.
        message: String,
    },
}

impl NobitexError {
    /// The context of the call that failed.
    pub fn context(&self) -> &CallContext {
        match self {
            NobitexError::Transport { context, .. }
            | NobitexError::StatusCode { context, .. }
            | NobitexError::BodyDecoding { context, .. }
            | NobitexError::InvalidResponse { context, .. }
            | NobitexError::InvalidCredential { context, .. }
            | NobitexError::InvalidInput { context, .. }
            | NobitexError::UnsupportedMethod { context, .. }
            | NobitexError::OrderRejected { context, .. } => context,
        }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        self.context().operation
    }

    /// Arguments of the call that failed.
    pub fn arguments(&self) -> &Value {
        &self.context().arguments
    }

    /// HTTP status code, for [`NobitexError::StatusCode`] only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NobitexError::StatusCode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid_input(context: &CallContext, message: impl Into<String>) -> Self {
        NobitexError::InvalidInput {
            context: context.clone(),
            message: message.into(),
        }
    }

    /// Reclassify an envelope failure of an order placement as a rejection.
    ///
    /// Other variants pass through untouched.
    pub(crate) fn into_order_rejection(self) -> Self {
        match self {
            NobitexError::InvalidResponse {
                context,
                message,
                body: Some(body),
            } => {
                let code = body.get("code").and_then(Value::as_str);
                let reason = code.map(OrderRejection::from_code).unwrap_or(OrderRejection::Other);
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or(message);
                NobitexError::OrderRejected {
                    context,
                    reason,
                    message,
                }
            }
            other => other,
        }
    }
}

/// Reasons the exchange gives for refusing a new order.
///
/// The `code` field of a failed order response is matched against the
/// variant names; unknown codes land in [`OrderRejection::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderRejection {
    /// Price is malformed or not a multiple of the tick size.
    InvalidOrderPrice,
    /// Price is too far below or above the market.
    BadPrice,
    InvalidExecutionType,
    InvalidOrderType,
    /// Order value exceeds the allowed maximum.
    OverValueOrder,
    /// Order value is below the allowed minimum.
    SmallOrder,
    DuplicateOrder,
    InvalidMarketPair,
    MarketClosed,
    TradingUnavailable,
    FeatureUnavailable,
    /// Any code not listed above.
    Other,
}

impl OrderRejection {
    /// Map a server error code to a rejection reason.
    pub fn from_code(code: &str) -> Self {
        match code {
            "InvalidOrderPrice" => Self::InvalidOrderPrice,
            "BadPrice" => Self::BadPrice,
            "InvalidExecutionType" => Self::InvalidExecutionType,
            "InvalidOrderType" => Self::InvalidOrderType,
            "OverValueOrder" => Self::OverValueOrder,
            "SmallOrder" => Self::SmallOrder,
            "DuplicateOrder" => Self::DuplicateOrder,
            "InvalidMarketPair" => Self::InvalidMarketPair,
            "MarketClosed" => Self::MarketClosed,
            "TradingUnavailable" => Self::TradingUnavailable,
            "FeatureUnavailable" => Self::FeatureUnavailable,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for OrderRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidOrderPrice => "InvalidOrderPrice",
            Self::BadPrice => "BadPrice",
            Self::InvalidExecutionType => "InvalidExecutionType",
            Self::InvalidOrderType => "InvalidOrderType",
            Self::OverValueOrder => "OverValueOrder",
            Self::SmallOrder => "SmallOrder",
            Self::DuplicateOrder => "DuplicateOrder",
            Self::InvalidMarketPair => "InvalidMarketPair",
            Self::MarketClosed => "MarketClosed",
            Self::TradingUnavailable => "TradingUnavailable",
            Self::FeatureUnavailable => "FeatureUnavailable",
            Self::Other => "Other",
        };
        write!(f, "{}", s)
    }
}
