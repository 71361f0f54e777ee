use std::net::SocketAddr;

use court_server::cache::{CacheConfig, CachedOsClient};
use court_server::directory::CourtDirectory;
use court_server::os::{OsClient, OsConfig};
use court_server::web::{AppState, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where the court directory file lives when COURT_DATA is not set.
const DEFAULT_COURT_DATA: &str = "data/courts.json";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "court_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get credentials from environment
    let api_key = std::env::var("OS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: OS_API_KEY not set. Postcode lookups will fail.");
        String::new()
    });

    // Create OS Places client
    let os_config = OsConfig::new(api_key);
    let os_client = OsClient::new(os_config).expect("Failed to create OS Places client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_os = CachedOsClient::new(os_client, &cache_config);

    // Load the court directory (fail fast if unavailable)
    let data_path =
        std::env::var("COURT_DATA").unwrap_or_else(|_| DEFAULT_COURT_DATA.to_string());
    println!("Loading court directory from {data_path}...");
    let directory = CourtDirectory::load(&data_path).expect("Failed to load court directory");
    println!(
        "Loaded {} courts across {} service areas",
        directory.court_count(),
        directory.service_area_count()
    );

    // Build app state
    let state = AppState::new(cached_os, directory);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));
    println!("Court Search Service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                  - Health check");
    println!("  GET /search/courts/postcode  - Find the courts serving a postcode");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
