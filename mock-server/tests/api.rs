use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_products, Product};
use tower::ServiceExt;

const BOOK: &str = r#"{"titulo":"Book","descricao":"Calculus textbook, like new","preco":45.5,"categoria":"Livros","vendedor":"Alice"}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_products_empty() {
    let resp = app().oneshot(get("/produtos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = body_json(resp).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn list_products_seeded_newest_first() {
    let resp = app_with(sample_products())
        .oneshot(get("/produtos"))
        .await
        .unwrap();

    let products: Vec<Product> = body_json(resp).await;
    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

// --- create ---

#[tokio::test]
async fn create_product_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request("POST", "/produtos", BOOK))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Product = body_json(resp).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.titulo, "Book");
    assert_eq!(product.preco, 45.5);
}

#[tokio::test]
async fn create_product_unknown_category_returns_422() {
    let body = BOOK.replace("Livros", "Books");
    let resp = app()
        .oneshot(json_request("POST", "/produtos", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let detail: serde_json::Value = body_json(resp).await;
    assert!(detail["detail"].as_str().unwrap().contains("categoria"));
}

#[tokio::test]
async fn create_product_short_title_returns_422() {
    let body = BOOK.replace(r#""Book""#, r#""Hi""#);
    let resp = app()
        .oneshot(json_request("POST", "/produtos", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_product_missing_fields_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/produtos", r#"{"titulo":"Book"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_product_not_found() {
    let resp = app().oneshot(get("/produtos/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_product_bad_id_returns_400() {
    let resp = app().oneshot(get("/produtos/not-a-number")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- categories ---

#[tokio::test]
async fn categories_lists_fixed_set() {
    let resp = app().oneshot(get("/categorias")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 6);
    assert_eq!(json["categorias"][1], "Eletrônicos");
}

// --- create then read back ---

#[tokio::test]
async fn create_then_list_and_get() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/produtos", BOOK))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Product = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/produtos"))
        .await
        .unwrap();
    let products: Vec<Product> = body_json(resp).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, created.id);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/produtos/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Product = body_json(resp).await;
    assert_eq!(fetched.data_criacao, created.data_criacao);
    assert_eq!(fetched.vendedor, "Alice");
}
