use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8800);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: connect the store, apply migrations, build the app and run
/// the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db = models::db::connect().await?;
    info!("database connected successfully");
    migration::Migrator::up(&db, None).await?;

    let state = ServerState { db };
    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting student registry server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
