mod config;
mod controllers;
mod models;
mod routes;
use crate::config::loader::Config;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let config = Config::new()?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app = routes::router::create_routes(config);

    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
