#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{header, Request, Response},
    Router,
};
use migration::{Migrator, MigratorTrait};
use portal::config::{AppState, AuthSettings};
use portal::entities::{content, content::ContentKind, user, user::UserRole};
use portal::repositories::{
    content_repository::{ContentRepository, NewContent},
    user_repository::UserRepository,
    Storage,
};
use portal::services::auth_service::AuthService;
use portal::utils::jwt_utils::JwtUtils;
use sea_orm::{ConnectOptions, Database};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse";

pub fn auth_settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "test-secret".to_string(),
        jwt_expires_in: 60,
        cookie_name: "tokenJWT".to_string(),
    }
}

/// Fresh in-memory database with all migrations applied.
pub async fn state() -> AppState {
    // One pinned connection: every connection to `sqlite::memory:` is its own database.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("migrate");

    AppState {
        storage: Storage::new(db, Duration::from_secs(5)),
        auth: auth_settings(),
    }
}

/// File-backed database behind a real pool, for tests that need writers to
/// actually overlap. Keep the value alive for the whole test: dropping it
/// deletes the database directory.
pub struct PooledState {
    pub state: AppState,
    _dir: TempDir,
}

pub async fn pooled_state() -> PooledState {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("portal.db").display());

    let mut opts = ConnectOptions::new(url);
    opts.max_connections(5).sqlx_logging(false);

    let db = Database::connect(opts).await.expect("connect sqlite file");
    Migrator::up(&db, None).await.expect("migrate");

    PooledState {
        state: AppState {
            storage: Storage::new(db, Duration::from_secs(10)),
            auth: auth_settings(),
        },
        _dir: dir,
    }
}

pub async fn create_user(storage: &Storage, username: &str, role: UserRole) -> user::Model {
    let hash = AuthService::hash_password(PASSWORD).unwrap();
    UserRepository::create(
        storage,
        username.to_string(),
        format!("{username}@portal.test"),
        hash,
        role,
    )
    .await
    .unwrap()
}

pub async fn create_item(storage: &Storage, kind: ContentKind, title: &str) -> content::Model {
    ContentRepository::new(storage, kind)
        .create(NewContent {
            title: title.to_string(),
            description: Some(format!("{title} description")),
            content: format!("{title} body"),
            category: None,
            image_url: None,
            author_id: None,
        })
        .await
        .unwrap()
}

pub fn session_cookie(user: &user::Model) -> String {
    let token = JwtUtils::generate_jwt(&auth_settings(), user.public_id).unwrap();
    format!("tokenJWT={token}")
}

pub fn app(state: &AppState) -> Router {
    portal::app(state.clone())
}

pub async fn send(state: &AppState, req: Request<Body>) -> Response<Body> {
    app(state).oneshot(req).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn json_body(res: Response<Body>) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(res: &Response<Body>) -> &str {
    res.headers()[header::LOCATION].to_str().unwrap()
}
