//! End-to-end workflows against the live mock store.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client, the
//! sell form and the product list over real HTTP using `UreqTransport`.

use std::net::SocketAddr;

use campustrade_core::{
    CatalogClient, Category, Field, ListState, Marketplace, NewProduct, ProductList,
    SubmissionEvent, SubmissionForm, SubmissionState, SubmitRejected, UreqTransport, View,
};

/// Serve `router` on a random local port from a background thread.
fn spawn_store(router: axum::Router) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, router).await
        })
        .unwrap();
    });

    addr
}

fn fill_book(form: &mut SubmissionForm) {
    form.edit(Field::Title, "Book");
    form.edit(Field::Description, "Calculus textbook, like new");
    form.edit(Field::Price, "45.50");
    form.edit(Field::Category, "Livros");
    form.edit(Field::Seller, "Alice");
}

#[test]
fn create_and_list_round_trip() {
    let addr = spawn_store(mock_server::app());
    let client = CatalogClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();

    let products = client.list_products(&transport).unwrap();
    assert!(products.is_empty(), "expected empty list");

    let input = NewProduct {
        titulo: "Integration test".to_string(),
        descricao: "Created over real HTTP".to_string(),
        preco: 9.9,
        categoria: Category::Sports,
        vendedor: "Tester".to_string(),
    };
    let created = client.create_product(&transport, &input).unwrap();
    assert_eq!(created.titulo, "Integration test");
    assert_eq!(created.categoria, Category::Sports);
    assert!(created.data_criacao.is_some());

    let products = client.list_products(&transport).unwrap();
    assert_eq!(products, vec![created]);
}

#[test]
fn store_rejection_surfaces_as_status_error() {
    let addr = spawn_store(mock_server::app());
    let client = CatalogClient::new(&format!("http://{addr}"));

    // Passes client-side rules, fails the store's 50k ceiling.
    let input = NewProduct {
        titulo: "Used car".to_string(),
        descricao: "Runs fine, some rust".to_string(),
        preco: 80_000.0,
        categoria: Category::Other,
        vendedor: "Rita".to_string(),
    };
    let err = client
        .create_product(&UreqTransport::new(), &input)
        .unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[test]
fn sell_form_submits_and_list_refreshes() {
    let addr = spawn_store(mock_server::app_with(mock_server::sample_products()));
    let client = CatalogClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();

    let mut market = Marketplace::new();
    market.refresh_with(&client, &transport);
    assert_eq!(market.list().products().len(), 3);

    market.open_sell();
    fill_book(market.form_mut());
    let event = market.submit_with(&client, &transport).unwrap();

    let SubmissionEvent::Created(created) = event else {
        panic!("expected a created event");
    };
    assert_eq!(created.id, 4);
    assert_eq!(created.preco, 45.5);
    assert_eq!(market.view(), View::Browse);
    assert_eq!(market.form().state(), SubmissionState::Idle);
    assert!(market.form().draft().is_blank());

    let products = market.list().products();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0], created, "newest product is listed first");
}

#[test]
fn invalid_form_is_not_sent() {
    let addr = spawn_store(mock_server::app());
    let client = CatalogClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();

    let mut form = SubmissionForm::new();
    form.edit(Field::Title, "Hi");
    form.edit(Field::Description, "ok");
    form.edit(Field::Price, "0");
    let err = form.submit_with(&client, &transport).unwrap_err();
    assert!(matches!(err, SubmitRejected::Invalid(_)));

    assert!(client.list_products(&transport).unwrap().is_empty());
}

#[test]
fn unreachable_store_fails_list_and_keeps_draft() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = CatalogClient::new(&format!("http://{addr}"));
    let transport = UreqTransport::new();

    let mut list = ProductList::new();
    list.refresh_with(&client, &transport);
    assert!(matches!(list.state(), ListState::Failed(_)));

    let mut form = SubmissionForm::new();
    fill_book(&mut form);
    let before = form.draft().clone();
    let event = form.submit_with(&client, &transport).unwrap();
    assert_eq!(event, SubmissionEvent::Failed);
    assert_eq!(form.draft(), &before);
}
