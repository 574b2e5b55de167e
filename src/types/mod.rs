//! Common types used across the Nobitex client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
