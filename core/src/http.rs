//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. Whatever executes the request implements
//! [`Transport`]; the crate ships a blocking ureq implementation behind the
//! `ureq` feature and tests plug in their own.

use crate::error::FetchError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request/response round-trip.
///
/// Implementations must return non-2xx responses as data and reserve `Err`
/// for failures where no response exists. Status interpretation belongs to
/// [`CatalogClient`](crate::CatalogClient).
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a ureq agent.
#[cfg(feature = "ureq")]
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

#[cfg(feature = "ureq")]
impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

#[cfg(feature = "ureq")]
impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ureq")]
impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let transport_err = |e: ureq::Error| FetchError::Transport(e.to_string());

        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
        }
        .map_err(transport_err)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(transport_err)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
