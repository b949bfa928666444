use rosterio::api::handlers;
use rosterio::config::Config;
use rosterio::core::services::UserService;
use rosterio::infrastructure::storage::in_memory::InMemoryStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .init();

    // Initialize storage and the service
    let storage = InMemoryStorage::new();
    let service = Arc::new(UserService::new(storage));

    let app = handlers::app(service);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
