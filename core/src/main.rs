use campustrade_core::render::{render_details, render_list};
use campustrade_core::{CatalogClient, ClientConfig, ListState, Marketplace, UreqTransport};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "loading catalog");

    let client = CatalogClient::from_config(&config);
    let transport = UreqTransport::new();
    let mut market = Marketplace::new();
    market.refresh_with(&client, &transport);
    if let ListState::Failed(message) = market.list().state() {
        eprintln!("Error! {message}");
        std::process::exit(1);
    }

    // `campustrade <id>` prints one product's details instead of the list.
    match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(id)) => match market.select(id) {
            Some(product) => println!("{}", render_details(product)),
            None => {
                eprintln!("no product with id {id}");
                std::process::exit(1);
            }
        },
        Some(Err(_)) => {
            eprintln!("usage: campustrade [product-id]");
            std::process::exit(2);
        }
        None => println!("{}", render_list(market.list().state())),
    }
}
