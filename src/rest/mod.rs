//! Nobitex REST API client.
//!
//! Each operation follows the same pipeline:
//!
//! 1. the façade method normalizes its parameters into a [`RequestDescriptor`],
//! 2. [`NobitexRestClient::request`] attaches the headers and sends it,
//! 3. [`validate_response`] classifies the outcome.
//!
//! # Trait-based API
//!
//! The [`NobitexApi`] trait abstracts all REST operations, enabling mock
//! implementations for testing.

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod request;
mod response;
mod traits;

pub use client::{DEFAULT_TIMEOUT, NobitexRestClient, NobitexRestClientBuilder};
pub use endpoints::NOBITEX_BASE_URL;
pub use request::{HttpMethod, RequestDescriptor};
pub use response::{RawResponse, STATUS_KEY, decode_response, validate_envelope, validate_response};
pub use traits::NobitexApi;
