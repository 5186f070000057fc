use campusnav::config::Config;
use campusnav::services::accessibility::{AccessibilityService, LiftStatusRegistry};
use campusnav::services::route_planner::RoutePlanner;
use campusnav::store::{CampusStore, CsvCampusStore};
use campusnav::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusnav=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting CampusNav API server");
    tracing::info!(
        locations = %config.locations_csv.display(),
        routes = %config.routes_csv.display(),
        "Configuration loaded successfully"
    );

    // Initialize the CSV-backed store
    let store: Arc<dyn CampusStore> = Arc::new(CsvCampusStore::new(
        config.locations_csv.clone(),
        config.routes_csv.clone(),
    ));

    // Seed the lift registry from the buildings present in location data
    let locations = store.locations().await?;
    let lifts = Arc::new(LiftStatusRegistry::from_locations(&locations));
    tracing::info!(
        locations = locations.len(),
        buildings = lifts.snapshot().len(),
        "Campus data loaded"
    );

    // Initialize services
    let planner = RoutePlanner::new(store.clone());
    let accessibility = AccessibilityService::new(store.clone(), planner.clone(), lifts);

    // Create application state
    let state = Arc::new(AppState {
        store,
        planner,
        accessibility,
    });

    // Build router with CORS and tracing
    let app = axum::Router::new()
        .nest("/api/v1", campusnav::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
