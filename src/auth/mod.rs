//! Authentication module for Nobitex API.
//!
//! Nobitex authenticates private calls with a static bearer token sent as
//! `Authorization: Token <token>`. Tokens are obtained once through
//! [`NobitexRestClient::login`](crate::rest::NobitexRestClient::login) or from
//! the account panel.

mod credentials;

pub use credentials::{EnvToken, TOKEN_ENV_VAR, Token};
