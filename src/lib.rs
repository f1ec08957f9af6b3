mod authentication;
mod data_formats;
mod db_helpers;
mod endpoints;
mod errors;
mod handlers;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};
use tower_http::trace::TraceLayer;

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, pool: SqlitePool, address: SocketAddr) -> Result<()> {
    let app = app.layer(Extension(Arc::new(pool)));
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

/// Creates the database file if needed, connects a pool and applies the
/// embedded migrations. The url is injected rather than read from the
/// environment here, so tests can point at throwaway files.
pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!(db_url, "creating database");
        Sqlite::create_database(db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = SqlitePool::connect(db_url).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    Ok(pool)
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(list_endpoints))
        .route("/api/topics", get(get_topics).post(post_topic))
        .route("/api/articles", get(get_articles).post(post_article))
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id)
                .patch(patch_article)
                .delete(delete_article),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route(
            "/api/comments/:comment_id",
            patch(patch_comment).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/signup", post(signup_user))
        .route("/api/users/login", post(login_user))
        .route("/api/users/:username", get(get_user_by_username))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
