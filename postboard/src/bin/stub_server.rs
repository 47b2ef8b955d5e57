// ============================================================================
// LOCAL STAND-IN FOR THE DEMO POSTS API
// ============================================================================

// - 100 seeded posts
// - Writes are validated and echoed, never stored
// - Structured request logging

use postboard::{
    config::Settings,
    routes::{self, AppState},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::load();

    let app = routes::router(AppState::seeded());

    let listener = match tokio::net::TcpListener::bind(&settings.stub_bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", settings.stub_bind, e);
            std::process::exit(1);
        }
    };

    info!("Server running on http://{}", settings.stub_bind);
    info!("API Endpoints:");
    info!("  GET    /posts            - List posts");
    info!("  GET    /posts/:id        - Get specific post");
    info!("  POST   /posts            - Create post (echoed, not stored)");
    info!("  PUT    /posts/:id        - Update post (echoed, not stored)");
    info!("  DELETE /posts/:id        - Delete post (acknowledged, not removed)");

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
