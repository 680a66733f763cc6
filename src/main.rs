use beacon::server::{
    config::Config, model::app::AppState, router::routes, startup::connect_to_database,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), beacon::server::error::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = connect_to_database(&config).await?;

    let router = routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, router).await?;

    Ok(())
}
