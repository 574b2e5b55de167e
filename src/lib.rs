//! # Nobitex Client
//!
//! An async Rust client library for the Nobitex exchange REST API.
//!
//! ## Features
//!
//! - Public market data and private trading/account endpoints
//! - Bearer token authentication with request-scoped headers
//! - Strict response envelope validation with a typed error for every failure
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nobitex_api_client::rest::NobitexRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NobitexRestClient::new();
//!     let trades = client.trades("BTCIRT").await?;
//!     println!("Trades: {}", trades["trades"]);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CallContext, NobitexError, OrderRejection};
pub use types::common::{DstCurrency, ExecutionType, Side};

/// Result type alias using NobitexError
pub type Result<T> = std::result::Result<T, NobitexError>;
