//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `list_products` and `create_product` glue the two halves
//! around a [`Transport`] for callers that do not need the split.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{NewProduct, Product};

/// Synchronous, stateless client for the product store.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/produtos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &NewProduct) -> Result<HttpRequest, FetchError> {
        let body =
            serde_json::to_string(input).map_err(|e| FetchError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/produtos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, FetchError> {
        decode(response)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, FetchError> {
        decode(response)
    }

    /// Fetch the full product list through `transport`.
    pub fn list_products<T: Transport>(&self, transport: &T) -> Result<Vec<Product>, FetchError> {
        let request = self.build_list_products();
        let result = transport
            .execute(&request)
            .and_then(|response| self.parse_list_products(response));
        if let Err(err) = &result {
            tracing::warn!(
                error = %err,
                method = request.method.as_str(),
                path = %request.path,
                "listing products failed"
            );
        }
        result
    }

    /// Create `input` in the store and return the stored product.
    pub fn create_product<T: Transport>(
        &self,
        transport: &T,
        input: &NewProduct,
    ) -> Result<Product, FetchError> {
        let request = self.build_create_product(input)?;
        let result = transport
            .execute(&request)
            .and_then(|response| self.parse_create_product(response));
        if let Err(err) = &result {
            tracing::warn!(
                error = %err,
                method = request.method.as_str(),
                path = %request.path,
                "creating product failed"
            );
        }
        result
    }
}

/// Any 2xx is success; the body is then decoded as `T`.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, FetchError> {
    if !response.is_success() {
        return Err(FetchError::Status {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::Deserialization(e.to_string()))
}
