use club_fitting::api::routes::create_routes;
use club_fitting::config::{database, AppConfig, DatabaseConfig, DatabaseSeeder};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    database::init_schema(&pool).await?;
    DatabaseSeeder::new(pool.clone()).seed_all().await?;

    // Create the application routes
    let app = create_routes(pool);

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Club fitting server starting on http://{}",
        config.server_address()
    );
    info!(
        "Intake form at http://{}/ , health check at http://{}/health",
        config.server_address(),
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
