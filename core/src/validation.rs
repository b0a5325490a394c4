//! Field rules for the sell form.
//!
//! # Design
//! `Draft::validate` is pure: every field is checked independently and all
//! failures are collected into one [`ErrorSet`]. Within a field only the first
//! failing rule is reported (a blank title is `Required`, never also
//! `TooShort`). A draft may be turned into a [`NewProduct`] only when the
//! set comes back empty.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Category, NewProduct};

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// A field of the sell form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    Price,
    Category,
    Seller,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Description,
        Field::Price,
        Field::Category,
        Field::Seller,
    ];

    /// Name of the field in the store's JSON payload.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Title => "titulo",
            Field::Description => "descricao",
            Field::Price => "preco",
            Field::Category => "categoria",
            Field::Seller => "vendedor",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::Seller => "seller name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    NotANumber,
    NotPositive,
    UnknownCategory,
}

/// Field-scoped validation failures, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<Field, FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the error for `field`, leaving every other entry in place.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Human-readable message for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| describe(field, error))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }
}

fn describe(field: Field, error: FieldError) -> String {
    match error {
        FieldError::Required => format!("{field} is required"),
        FieldError::TooShort { min } => format!("{field} must be at least {min} characters"),
        FieldError::NotANumber => format!("{field} must be a number"),
        FieldError::NotPositive => format!("{field} must be greater than zero"),
        FieldError::UnknownCategory => {
            let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
            format!("{field} must be one of: {}", names.join(", "))
        }
    }
}

/// Raw, unvalidated form input. `preco` stays text until validation passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub titulo: String,
    pub descricao: String,
    pub preco: String,
    pub categoria: String,
    pub vendedor: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.titulo,
            Field::Description => &self.descricao,
            Field::Price => &self.preco,
            Field::Category => &self.categoria,
            Field::Seller => &self.vendedor,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.titulo,
            Field::Description => &mut self.descricao,
            Field::Price => &mut self.preco,
            Field::Category => &mut self.categoria,
            Field::Seller => &mut self.vendedor,
        };
        *slot = value.into();
    }

    /// True when every field is empty, i.e. the form's initial state.
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check every field and collect all failures.
    pub fn validate(&self) -> ErrorSet {
        let mut errors = ErrorSet::new();
        let checks = [
            (Field::Title, check_text(&self.titulo, TITLE_MIN_CHARS)),
            (Field::Description, check_text(&self.descricao, DESCRIPTION_MIN_CHARS)),
            (Field::Price, parse_price(&self.preco).err()),
            (Field::Category, parse_category(&self.categoria).err()),
            (Field::Seller, check_text(&self.vendedor, 0)),
        ];
        for (field, error) in checks {
            if let Some(error) = error {
                errors.insert(field, error);
            }
        }
        errors
    }

    /// Validate and, when clean, convert into the POST payload.
    pub fn to_payload(&self) -> Result<NewProduct, ErrorSet> {
        let errors = self.validate();
        match (parse_price(&self.preco), parse_category(&self.categoria)) {
            (Ok(preco), Ok(categoria)) if errors.is_empty() => Ok(NewProduct {
                titulo: self.titulo.clone(),
                descricao: self.descricao.clone(),
                preco,
                categoria,
                vendedor: self.vendedor.clone(),
            }),
            _ => Err(errors),
        }
    }
}

// The length check counts the raw input, only the emptiness check trims.
fn check_text(value: &str, min: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required)
    } else if value.chars().count() < min {
        Some(FieldError::TooShort { min })
    } else {
        None
    }
}

fn parse_price(value: &str) -> Result<f64, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let price: f64 = value.parse().map_err(|_| FieldError::NotANumber)?;
    if !price.is_finite() {
        return Err(FieldError::NotANumber);
    }
    if price <= 0.0 {
        return Err(FieldError::NotPositive);
    }
    Ok(price)
}

fn parse_category(value: &str) -> Result<Category, FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    value.parse().map_err(|_| FieldError::UnknownCategory)
}
