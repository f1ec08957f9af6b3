use std::net::SocketAddr;

use nc_news::{init_db, make_router, run_app};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::error!("DATABASE_URL must be set");
            return;
        }
    };
    let pool = match init_db(&db_url).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!(%error, "failed to initialize database");
            return;
        }
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    let router = make_router();
    tracing::info!(%addr, "server started");
    if let Err(error) = run_app(router, pool, addr).await {
        tracing::error!(%error, "server exited with error");
    }
}
