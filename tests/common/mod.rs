#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use linkcut::domain::repositories::UrlRepository;
use linkcut::infrastructure::persistence::InMemoryUrlRepository;
use linkcut::routes::router;
use linkcut::state::AppState;

pub const HOST: &str = "sho.rt";

/// State backed by a fresh in-memory store, returned alongside the store
/// so tests can seed it and inject failures.
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repo = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(repo.clone() as Arc<dyn UrlRepository>);
    (state, repo)
}

/// Full application router served in-process.
pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repo) = create_test_state();
    let server = TestServer::new(router(state, "static")).unwrap();
    (server, repo)
}

pub async fn create_test_link(repo: &InMemoryUrlRepository, code: &str, url: &str) {
    repo.insert(url, code).await.unwrap();
}

pub async fn insert_pg_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO shortener (short_url, long_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
