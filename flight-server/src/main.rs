use std::net::SocketAddr;

use flight_server::amadeus::{AmadeusClient, AmadeusConfig};
use flight_server::notify::{Mailer, MailerConfig};
use flight_server::planner::{ConnectionBuffers, RegionBuckets, SearchConfig};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_server=info".into()),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("AMADEUS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: AMADEUS_API_KEY not set. API calls will fail.");
        String::new()
    });
    let api_secret = std::env::var("AMADEUS_API_SECRET").unwrap_or_else(|_| {
        eprintln!("Warning: AMADEUS_API_SECRET not set. API calls will fail.");
        String::new()
    });

    // Create Amadeus client
    let amadeus_config = AmadeusConfig::new(api_key, api_secret);
    let amadeus = AmadeusClient::new(amadeus_config).expect("Failed to create Amadeus client");

    // Planner configuration: the built-in region buckets and buffer
    // table, frozen for the lifetime of the process
    let buckets = RegionBuckets::world_default();
    let buffers = ConnectionBuffers::world_default();
    let search_config = SearchConfig::default();

    // Optional outbound mailer
    let mailer = match MailerConfig::from_env() {
        Ok(Some(config)) => Some(Mailer::new(&config).expect("Failed to create mailer")),
        Ok(None) => {
            println!("SMTP not configured; email notifications disabled.");
            None
        }
        Err(e) => {
            eprintln!("Invalid SMTP configuration: {e}");
            std::process::exit(1);
        }
    };

    // Build app state
    let state = AppState::new(amadeus, buckets, buffers, search_config, mailer);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight Itinerary Search listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  GET  /flights   - Offers for one route and date");
    println!("  GET  /airports  - Airport and city lookup");
    println!("  POST /search    - Multi-leg itinerary search");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
