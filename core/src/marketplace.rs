//! Top-level view state: browse vs. sell, the detail selection, and the
//! wiring between a finished submission and the next list refresh.

use crate::client::CatalogClient;
use crate::http::Transport;
use crate::refresh::{ProductList, RefreshTicket};
use crate::submission::{SubmissionEvent, SubmissionForm, SubmitRejected};
use crate::types::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Browse,
    Sell,
}

#[derive(Debug, Clone)]
pub struct Marketplace {
    list: ProductList,
    form: SubmissionForm,
    view: View,
    selected: Option<Product>,
}

impl Default for Marketplace {
    fn default() -> Self {
        Self::new()
    }
}

impl Marketplace {
    pub fn new() -> Self {
        Self {
            list: ProductList::new(),
            form: SubmissionForm::new(),
            view: View::Browse,
            selected: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn list(&self) -> &ProductList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ProductList {
        &mut self.list
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    pub fn toggle_view(&mut self) {
        match self.view {
            View::Browse => self.open_sell(),
            View::Sell => self.view = View::Browse,
        }
    }

    /// Show the sell form. Coming from another view it starts with an empty
    /// draft, unless a submission is still in flight.
    pub fn open_sell(&mut self) {
        if self.view != View::Sell {
            self.form.cancel();
        }
        self.view = View::Sell;
    }

    /// Leave the sell form without submitting.
    pub fn cancel_sell(&mut self) {
        self.form.cancel();
        self.view = View::Browse;
    }

    /// Open the detail view for a product currently in the list.
    pub fn select(&mut self, id: u64) -> Option<&Product> {
        self.selected = self.list.find(id).cloned();
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    /// React to a finished submission. A created product closes the form and
    /// starts a refresh whose ticket the caller must complete.
    pub fn handle_submission(&mut self, event: &SubmissionEvent) -> Option<RefreshTicket> {
        match event {
            SubmissionEvent::Created(_) => {
                self.view = View::Browse;
                Some(self.list.begin())
            }
            SubmissionEvent::Failed => None,
        }
    }

    /// Submit the sell form and, on success, reload the list.
    pub fn submit_with<T: Transport>(
        &mut self,
        client: &CatalogClient,
        transport: &T,
    ) -> Result<SubmissionEvent, SubmitRejected> {
        let event = self.form.submit_with(client, transport)?;
        if let Some(ticket) = self.handle_submission(&event) {
            let result = client.list_products(transport);
            self.list.finish(ticket, result);
        }
        Ok(event)
    }

    pub fn refresh_with<T: Transport>(&mut self, client: &CatalogClient, transport: &T) {
        self.list.refresh_with(client, transport);
    }
}
