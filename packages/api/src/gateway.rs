//! # Request gateway
//!
//! Every call to the PetSPA API goes through one [`Gateway`]. It owns the
//! base URL, reads the bearer token from the [`TokenStore`] on each request,
//! and centralises the failure policy:
//!
//! | Response | Outcome |
//! |----------|---------|
//! | 2xx | body handed to the caller, decoded from the bare or `{ success, data }` envelope |
//! | 401 | token store cleared, `on_unauthorized` hook fired, [`ApiError::Unauthorized`] |
//! | other non-2xx | logged, [`ApiError::Http`] with the server's `message`/`error` text |
//! | no response | logged, [`ApiError::Network`] or [`ApiError::Timeout`] |
//!
//! The HTTP client itself sits behind the [`Transport`] trait so tests can
//! script responses without a server.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{ApiConfig, TokenStore};
use tracing::{debug, error, warn};

use crate::error::ApiError;

/// A fully-resolved request, ready for a [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations only report transport failures as errors; status codes
/// are interpreted by the [`Gateway`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// [`Transport`] backed by `reqwest` (browser `fetch` on wasm32).
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let timeout = request.timeout;
        let mut builder = self.client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
        }

        let exchange = async move {
            let response = builder.send().await.map_err(|e| network_error(e, timeout))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| network_error(e, timeout))?;
            Ok(ApiResponse {
                status,
                body: body.to_vec(),
            })
        };

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(timeout) = timeout {
                return with_timeout(exchange, timeout).await;
            }
        }

        exchange.await
    }
}

fn network_error(e: reqwest::Error, timeout: Option<Duration>) -> ApiError {
    match timeout {
        Some(limit) if e.is_timeout() => ApiError::Timeout(limit),
        _ => ApiError::Network(e.to_string()),
    }
}

/// `fetch` has no timeout of its own; race it against a timer.
#[cfg(target_arch = "wasm32")]
async fn with_timeout<F>(exchange: F, limit: Duration) -> Result<ApiResponse, ApiError>
where
    F: std::future::Future<Output = Result<ApiResponse, ApiError>>,
{
    use futures::future::{select, Either};

    let timer = gloo_timers::future::sleep(limit);
    futures::pin_mut!(exchange);
    futures::pin_mut!(timer);
    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(limit)),
    }
}

/// Successful bodies come either bare or wrapped as `{ success, message, data }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(data) => data,
        }
    }
}

/// Decode a single value from a success body.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<Payload<T>>(body)
        .map(Payload::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a list, treating an empty body, `null` and a `null` payload as
/// an empty list.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice::<Payload<Option<Vec<T>>>>(body)
        .map(|payload| payload.into_inner().unwrap_or_default())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .filter(|m| !m.trim().is_empty())
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// The single client every feature module calls through.
///
/// Cheap to clone; clones share the transport, token store and hook.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    tokens: TokenStore,
    transport: Rc<dyn Transport>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl Gateway {
    pub fn new(config: &ApiConfig, tokens: TokenStore) -> Self {
        Self::with_transport(&config.base_url, tokens, ReqwestTransport::new())
    }

    pub fn with_transport(
        base_url: &str,
        tokens: TokenStore,
        transport: impl Transport + 'static,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            transport: Rc::new(transport),
            on_unauthorized: None,
        }
    }

    /// Hook run after a 401 has cleared the token store.
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request for `path` relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.url(path))
    }

    /// Attach credentials, send, and apply the failure policy.
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if let Some(token) = self.tokens.token() {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if request.body.is_some() {
            request
                .headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let method = request.method.clone();
        let url = request.url.clone();
        debug!("Sending {} {}", method, url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("No response for {} {}: {}", method, url, e);
                return Err(e);
            }
        };

        if response.status == 401 {
            warn!("Token invalid or expired ({} {})", method, url);
            self.tokens.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            let message = error_message(&response.body);
            error!(
                "Error {} on {} {}: {}",
                response.status,
                method,
                url,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        debug!("{} {} -> {}", method, url, response.status);
        Ok(response)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let mut request = self.request(method, path);
        request.query = query;
        request.body = body;
        self.execute(request).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, Vec::new(), None).await?;
        decode(&response.body)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, query, None).await?;
        decode(&response.body)
    }

    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.get_list_query(path, Vec::new()).await
    }

    pub async fn get_list_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<T>, ApiError> {
        let response = self.send(Method::GET, path, query, None).await?;
        decode_list(&response.body)
    }

    /// Raw body, for binary downloads.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Method::GET, path, Vec::new(), None).await?;
        Ok(response.body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(Method::POST, path, Vec::new(), Some(encode(body)?))
            .await?;
        decode(&response.body)
    }

    /// POST whose response body is ignored.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::POST, path, Vec::new(), Some(encode(body)?))
            .await
            .map(|_| ())
    }

    /// POST with no request body, response ignored.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, path, Vec::new(), None)
            .await
            .map(|_| ())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(Method::PUT, path, Vec::new(), Some(encode(body)?))
            .await?;
        decode(&response.body)
    }

    pub async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Method::PUT, path, Vec::new(), Some(encode(body)?))
            .await
            .map(|_| ())
    }

    pub async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::PUT, path, Vec::new(), None)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, Vec::new(), None)
            .await
            .map(|_| ())
    }
}
