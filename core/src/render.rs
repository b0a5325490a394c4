//! Plain-text rendering of the catalog views.

use std::fmt::Write;

use crate::format::{format_price, format_timestamp};
use crate::refresh::ListState;
use crate::submission::{SubmissionForm, SubmissionState};
use crate::types::Product;
use crate::validation::Field;

pub const LOADING_TEXT: &str = "Loading products...";
pub const EMPTY_TEXT: &str = "No products found. Be the first to list one!";

/// One product as a list card.
pub fn render_card(product: &Product) -> String {
    format!(
        "#{} {}\n  {}\n  {}  [{}]\n  Seller: {}",
        product.id,
        product.titulo,
        product.descricao,
        format_price(product.preco),
        product.categoria,
        product.vendedor,
    )
}

/// Full detail view of one product.
pub fn render_details(product: &Product) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", product.titulo);
    let _ = writeln!(out, "\nDescription\n  {}", product.descricao);
    let _ = writeln!(out, "\nDetails");
    let _ = writeln!(out, "  Price:    {}", format_price(product.preco));
    let _ = writeln!(out, "  Category: {}", product.categoria);
    let _ = writeln!(out, "  Seller:   {}", product.vendedor);
    if let Some(ts) = product.data_criacao {
        let _ = writeln!(out, "  Listed:   {}", format_timestamp(ts));
    }
    out
}

/// The browse view for the list's current state.
pub fn render_list(state: &ListState) -> String {
    match state {
        ListState::Loading => LOADING_TEXT.to_string(),
        ListState::Failed(message) => format!("Error! {message}"),
        ListState::Loaded(products) if products.is_empty() => EMPTY_TEXT.to_string(),
        ListState::Loaded(products) => products
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// The sell form: each field with its current value, then the failed
/// fields' messages and the last outcome notice.
pub fn render_form(form: &SubmissionForm) -> String {
    let mut out = String::new();
    for field in Field::ALL {
        let _ = writeln!(out, "{:<12} {}", format!("{field}:"), form.draft().get(field));
    }
    for (field, _) in form.errors().iter() {
        if let Some(message) = form.errors().message(field) {
            let _ = writeln!(out, "  ! {message}");
        }
    }
    if form.state() == SubmissionState::Submitting {
        let _ = writeln!(out, "Creating...");
    }
    if let Some(notice) = form.notice() {
        let _ = writeln!(out, "{}", notice.message());
    }
    out
}
