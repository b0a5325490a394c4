//! Product list refresh workflow.
//!
//! # Design
//! `ProductList` is a three-state machine (`Loading`, `Loaded`, `Failed`).
//! Every refresh is started with [`ProductList::begin`], which hands out a
//! ticket carrying a monotonic sequence number. Only the ticket from the most
//! recent `begin` may change the displayed state, so overlapping refreshes
//! settle on the newest request rather than on whichever answer arrives last.

use crate::client::CatalogClient;
use crate::error::FetchError;
use crate::http::Transport;
use crate::types::Product;

pub const LOAD_FAILED_MESSAGE: &str =
    "Could not load products. Check that the API is reachable.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

/// Proof that a refresh was started; pass it back to [`ProductList::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone)]
pub struct ProductList {
    state: ListState,
    latest: u64,
}

impl Default for ProductList {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductList {
    /// A list that has not been fetched yet shows as loading.
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            latest: 0,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    /// Products currently on display; empty unless `Loaded`.
    pub fn products(&self) -> &[Product] {
        match &self.state {
            ListState::Loaded(products) => products,
            _ => &[],
        }
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Enter `Loading`, dropping any displayed error, and issue a ticket.
    pub fn begin(&mut self) -> RefreshTicket {
        self.latest += 1;
        self.state = ListState::Loading;
        tracing::debug!(seq = self.latest, "refreshing product list");
        RefreshTicket { seq: self.latest }
    }

    /// Apply a list result. Returns `false` and changes nothing when a newer
    /// refresh has started since `ticket` was issued.
    pub fn finish(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest,
                "discarding stale list response"
            );
            return false;
        }
        self.state = match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "product list loaded");
                ListState::Loaded(products)
            }
            Err(err) => {
                tracing::warn!(error = %err, "product list failed to load");
                ListState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Run one full refresh through `transport`.
    pub fn refresh_with<T: Transport>(&mut self, client: &CatalogClient, transport: &T) {
        let ticket = self.begin();
        let result = client.list_products(transport);
        self.finish(ticket, result);
    }
}
