//! Per-call request descriptors.

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::types::ParseEnumError;

/// HTTP methods spoken by the Nobitex API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ParseEnumError;

    /// Parse a method name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(HttpMethod::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(HttpMethod::Post)
        } else {
            Err(ParseEnumError::new("http method", s))
        }
    }
}

/// Everything needed to issue one request.
///
/// The method is kept as given and parsed when the request is sent, so an
/// unsupported method is reported as an error of the call that used it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    /// HTTP method name, case-insensitive.
    pub method: String,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Whether the `Authorization` header must be attached.
    pub requires_auth: bool,
    /// URL-encoded query string, without the leading `?`.
    pub query: Option<String>,
    /// JSON body.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Create an unauthenticated request without query or body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            requires_auth: false,
            query: None,
            body: None,
        }
    }

    /// A GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    /// A POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    /// Require the `Authorization` header.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Attach query parameters, encoded in field order.
    pub fn query<Q>(mut self, params: &Q) -> Result<Self, serde_urlencoded::ser::Error>
    where
        Q: Serialize + ?Sized,
    {
        let encoded = serde_urlencoded::to_string(params)?;
        self.query = (!encoded.is_empty()).then_some(encoded);
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
