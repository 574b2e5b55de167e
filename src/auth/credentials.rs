//! Bearer token handling for Nobitex API authentication.

use reqwest::header::{HeaderValue, InvalidHeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "NOBITEX_TOKEN";

/// An API bearer token, obtained from a login exchange or the account panel.
#[derive(Clone)]
pub struct Token(SecretString);

impl Token {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Get the raw token.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Build the `Authorization: Token <token>` header value.
    pub(crate) fn authorization_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Token {}", self.expose_secret()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Token loader that reads from environment variables.
///
/// By default, reads from `NOBITEX_TOKEN`.
pub struct EnvToken;

impl EnvToken {
    /// Read the token from `NOBITEX_TOKEN`.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env() -> Token {
        Self::from_env_var(TOKEN_ENV_VAR)
    }

    /// Read the token from a custom environment variable.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env_var(var: &str) -> Token {
        let token =
            std::env::var(var).unwrap_or_else(|_| panic!("Environment variable {var} not set"));
        Token::new(token)
    }

    /// Try to read the token from `NOBITEX_TOKEN`.
    ///
    /// Returns `None` if the variable is unset or empty.
    pub fn try_from_env() -> Option<Token> {
        Self::try_from_env_var(TOKEN_ENV_VAR)
    }

    /// Try to read the token from a custom environment variable.
    pub fn try_from_env_var(var: &str) -> Option<Token> {
        std::env::var(var)
            .ok()
            .filter(|token| !token.is_empty())
            .map(Token::new)
    }
}
