use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod jwt;
mod media;
mod models;
mod password;
mod repositories;
mod routes;
mod state;
mod validation;

use common::database::{self, DatabaseConfig};

use crate::{
    config::ServerConfig,
    jwt::{JwtConfig, JwtService},
    media::MediaStore,
    repositories::{BookRepository, UserRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting book catalog service");

    let server_config = ServerConfig::from_env();

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    sqlx::migrate!().run(&pool).await?;
    info!("Database migrations applied");

    // Initialize media storage
    let media_store = MediaStore::new(
        server_config.uploads_dir.clone(),
        server_config.public_base_url.clone(),
    );
    media_store.init().await?;

    // Initialize JWT service
    let jwt_config = JwtConfig::from_env()?;
    let jwt_service = JwtService::new(jwt_config);

    let book_repository = BookRepository::new(pool.clone());
    let user_repository = UserRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        book_repository,
        user_repository,
        media_store,
        jwt_service,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Book catalog service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
