//! Nobitex REST API client implementation.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::Token;
use crate::error::{CallContext, NobitexError};
use crate::rest::endpoints::NOBITEX_BASE_URL;
use crate::rest::request::{HttpMethod, RequestDescriptor};
use crate::rest::response::{RawResponse, STATUS_KEY, validate_envelope};

/// Per-call timeout used unless the builder sets another.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The Nobitex REST API client.
///
/// Every operation issues exactly one HTTP request and validates the response
/// envelope before handing back the decoded body. Nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use nobitex_api_client::rest::NobitexRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints need no token
///     let client = NobitexRestClient::new();
///
///     let book = client.orderbook("btcirt").await?;
///     println!("Best bids: {}", book["bids"]);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide a token:
///
/// ```rust,no_run
/// use nobitex_api_client::rest::NobitexRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NobitexRestClient::builder().token("my-token").build();
///
///     let profile = client.user_profile().await?;
///     println!("Profile: {}", profile["profile"]);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct NobitexRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    default_headers: HeaderMap,
    token: Option<Token>,
    timeout: Duration,
}

impl NobitexRestClient {
    /// Create a new client with default settings and no token.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> NobitexRestClientBuilder {
        NobitexRestClientBuilder::new()
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// The configured token, if any.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Replace the token used for authenticated calls.
    pub fn set_token(&mut self, token: impl Into<Token>) {
        self.token = Some(token.into());
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Change the per-call timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Build the header set for one call.
    ///
    /// The stored defaults are copied; the `Authorization` header only ever
    /// lives in the returned map.
    pub(crate) fn request_headers(
        &self,
        context: &CallContext,
        requires_auth: bool,
    ) -> Result<HeaderMap, NobitexError> {
        let mut headers = self.default_headers.clone();
        if requires_auth {
            let token = self
                .token
                .as_ref()
                .ok_or_else(|| NobitexError::InvalidCredential {
                    context: context.clone(),
                    message: "no token configured, set one with `set_token`".to_string(),
                })?;
            let value =
                token
                    .authorization_value()
                    .map_err(|_| NobitexError::InvalidCredential {
                        context: context.clone(),
                        message: "token contains characters not allowed in a header".to_string(),
                    })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn endpoint_url(
        &self,
        context: &CallContext,
        path: &str,
        query: Option<&str>,
    ) -> Result<Url, NobitexError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            let message = if Url::parse(&self.base_url).is_err() {
                format!("configured base url {:?} is not a valid URL: {e}", self.base_url)
            } else {
                format!("path {path:?} does not form a valid URL: {e}")
            };
            NobitexError::invalid_input(context, message)
        })?;
        if query.is_some() {
            url.set_query(query);
        }
        Ok(url)
    }

    /// Send one request and return the response as received.
    ///
    /// Fails without touching the network when the call needs a token and
    /// none is set, or when the method is neither GET nor POST.
    pub async fn request(
        &self,
        context: &CallContext,
        descriptor: &RequestDescriptor,
    ) -> Result<RawResponse, NobitexError> {
        let headers = self.request_headers(context, descriptor.requires_auth)?;
        let method: HttpMethod =
            descriptor
                .method
                .parse()
                .map_err(|_| NobitexError::UnsupportedMethod {
                    context: context.clone(),
                    method: descriptor.method.clone(),
                })?;
        let url = self.endpoint_url(context, &descriptor.path, descriptor.query.as_deref())?;

        tracing::debug!(
            operation = context.operation,
            %method,
            path = %descriptor.path,
            auth = descriptor.requires_auth,
            "sending request"
        );

        let builder = match method {
            HttpMethod::Get => self.http_client.get(url),
            HttpMethod::Post => self.http_client.post(url),
        };
        let mut builder = builder.headers(headers).timeout(self.timeout);
        if let Some(body) = &descriptor.body {
            builder = builder.body(body.to_string());
        }

        let response = builder
            .send()
            .await
            .map_err(|source| NobitexError::Transport {
                context: context.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response
            .text()
            .await
            .map_err(|e| NobitexError::Transport {
                context: context.clone(),
                source: e.into(),
            })?;

        Ok(RawResponse { status, url, text })
    }

    /// Send one request and validate the standard `status` envelope.
    pub async fn execute(
        &self,
        context: &CallContext,
        descriptor: &RequestDescriptor,
    ) -> Result<Value, NobitexError> {
        self.execute_with_status_key(context, descriptor, STATUS_KEY)
            .await
    }

    /// Send one request and validate an envelope keyed by `status_key`.
    pub(crate) async fn execute_with_status_key(
        &self,
        context: &CallContext,
        descriptor: &RequestDescriptor,
        status_key: &str,
    ) -> Result<Value, NobitexError> {
        let raw = self.request(context, descriptor).await?;
        validate_envelope(context, &raw, status_key).inspect_err(|e| {
            tracing::warn!(
                operation = context.operation,
                url = %raw.url,
                "rejected response: {}",
                e
            );
        })
    }

    /// Serialize a request struct into a JSON body.
    pub(crate) fn json_body<T: Serialize>(
        context: &CallContext,
        request: &T,
    ) -> Result<Value, NobitexError> {
        serde_json::to_value(request).map_err(|e| {
            NobitexError::invalid_input(context, format!("failed to serialize request: {e}"))
        })
    }
}

impl Default for NobitexRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NobitexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NobitexRestClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`NobitexRestClient`].
pub struct NobitexRestClientBuilder {
    base_url: String,
    token: Option<Token>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl NobitexRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: NOBITEX_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the token for authenticated requests.
    pub fn token(mut self, token: impl Into<Token>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> NobitexRestClient {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("nobitex-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("nobitex-api-client"));

        let mut client_headers = HeaderMap::new();
        client_headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(client_headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        NobitexRestClient {
            http_client: client,
            base_url: self.base_url,
            default_headers,
            token: self.token,
            timeout: self.timeout,
        }
    }
}

impl Default for NobitexRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
