use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub const CATEGORIES: [&str; 6] = ["Livros", "Eletrônicos", "Móveis", "Roupas", "Esportes", "Outros"];

pub const MAX_PRICE: f64 = 50_000.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub titulo: String,
    pub descricao: String,
    pub preco: f64,
    pub categoria: String,
    pub vendedor: String,
    pub data_criacao: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateProduct {
    pub titulo: String,
    pub descricao: String,
    pub preco: f64,
    pub categoria: String,
    pub vendedor: String,
}

impl CreateProduct {
    /// Store-side constraints; the first violation wins.
    pub fn check(&self) -> Result<(), String> {
        check_len("titulo", &self.titulo, 3, 100)?;
        check_len("descricao", &self.descricao, 10, 500)?;
        if !(self.preco > 0.0 && self.preco <= MAX_PRICE) {
            return Err(format!("preco must be greater than 0 and at most {MAX_PRICE}"));
        }
        if !CATEGORIES.contains(&self.categoria.as_str()) {
            return Err(format!(
                "invalid categoria, use one of: {}",
                CATEGORIES.join(", ")
            ));
        }
        check_len("vendedor", &self.vendedor, 2, 50)
    }
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!("{field} must be between {min} and {max} characters"));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    products: BTreeMap<u64, Product>,
}

impl Store {
    pub fn insert(&mut self, input: CreateProduct) -> Product {
        self.next_id += 1;
        let product = Product {
            id: self.next_id,
            titulo: input.titulo,
            descricao: input.descricao,
            preco: input.preco,
            categoria: input.categoria,
            vendedor: input.vendedor,
            data_criacao: Utc::now().naive_utc(),
        };
        self.products.insert(product.id, product.clone());
        product
    }

    /// Newest first; ids break ties between equal timestamps.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort_by(|a, b| {
            b.data_criacao
                .cmp(&a.data_criacao)
                .then_with(|| b.id.cmp(&a.id))
        });
        products
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.get(&id)
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Three listings used for local runs.
pub fn sample_products() -> Vec<CreateProduct> {
    let item = |titulo: &str, descricao: &str, preco: f64, categoria: &str, vendedor: &str| {
        CreateProduct {
            titulo: titulo.to_string(),
            descricao: descricao.to_string(),
            preco,
            categoria: categoria.to_string(),
            vendedor: vendedor.to_string(),
        }
    };
    vec![
        item(
            "Algorithms textbook - Cormen",
            "Complete book on algorithms and data structures. Used but in great shape.",
            120.0,
            "Livros",
            "João Silva",
        ),
        item(
            "HP 12C calculator",
            "Financial calculator in perfect condition. Comes with manual and case.",
            180.0,
            "Eletrônicos",
            "Maria Santos",
        ),
        item(
            "Study desk",
            "Wooden desk, 1.20m x 60cm, ideal for studying. Well kept.",
            150.0,
            "Móveis",
            "Pedro Costa",
        ),
    ]
}

pub fn app() -> Router {
    router(Db::default())
}

pub fn app_with(products: Vec<CreateProduct>) -> Router {
    let mut store = Store::default();
    for product in products {
        store.insert(product);
    }
    router(Arc::new(RwLock::new(store)))
}

fn router(db: Db) -> Router {
    Router::new()
        .route("/produtos", get(list_products).post(create_product))
        .route("/produtos/{id}", get(get_product))
        .route("/categorias", get(list_categories))
        .with_state(db)
}

pub async fn run_with(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_products(State(db): State<Db>) -> Json<Vec<Product>> {
    Json(db.read().await.list())
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<CreateProduct>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<Value>)> {
    if let Err(detail) = input.check() {
        tracing::debug!(%detail, "rejected product");
        return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "detail": detail }))));
    }
    let product = db.write().await.insert(input);
    tracing::info!(id = product.id, titulo = %product.titulo, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn get_product(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, StatusCode> {
    let store = db.read().await;
    store.get(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn list_categories() -> Json<Value> {
    Json(json!({ "categorias": CATEGORIES, "total": CATEGORIES.len() }))
}
