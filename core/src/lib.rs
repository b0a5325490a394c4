//! Client core for the CampusTrade student marketplace.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! product store without touching the network (host-does-IO pattern), and
//! layers the sell-form and product-list workflows on top as explicit state
//! machines.
//!
//! # Design
//! - `CatalogClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response). A [`Transport`] executes the round-trip when a
//!   caller wants both halves glued together.
//! - `validation` is pure; `submission` and `refresh` own their state and
//!   expose named transitions; `marketplace` wires them together.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod marketplace;
pub mod refresh;
pub mod render;
pub mod submission;
pub mod types;
pub mod validation;

pub use client::CatalogClient;
pub use config::ClientConfig;
pub use error::FetchError;
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use marketplace::{Marketplace, View};
pub use refresh::{ListState, ProductList, RefreshTicket};
pub use submission::{SubmissionEvent, SubmissionForm, SubmissionState, SubmitRejected};
pub use types::{Category, NewProduct, Product};
pub use validation::{Draft, ErrorSet, Field, FieldError};
