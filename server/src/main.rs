mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "roombook listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
