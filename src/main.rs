use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use studycircle::features::quiz::{DailyQuota, QuizClient, DAILY_QUIZ_LIMIT};
use studycircle::{handlers, DbPool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration
    dotenv::dotenv().ok();
    env_logger::init();
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://studycircle.db".into());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into());

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool: DbPool = Pool::builder().build(manager)?;

    // Quiz proxy configuration
    let quiz_endpoint = std::env::var("QUIZ_API_URL")
        .unwrap_or_else(|_| "http://localhost:8787/generate".into());
    let quiz_api_key = std::env::var("QUIZ_API_KEY").unwrap_or_default();
    if quiz_api_key.is_empty() {
        log::warn!("QUIZ_API_KEY is not set; quiz generation will be rejected upstream");
    }
    let quiz_state = (
        Arc::new(QuizClient::new(quiz_endpoint, quiz_api_key)),
        Arc::new(DailyQuota::new(DAILY_QUIZ_LIMIT)),
    );

    // Sessions configuration
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
        .with_secure(false);

    // Per-resource API routers
    let subjects_router = Router::new()
        .route(
            "/",
            get(handlers::subjects::list_subjects).post(handlers::subjects::create_subject),
        )
        .route("/{id}", delete(handlers::subjects::delete_subject))
        .with_state(pool.clone());

    let sessions_router = Router::new()
        .route(
            "/",
            get(handlers::sessions::list_sessions).post(handlers::sessions::log_session),
        )
        .with_state(pool.clone());

    let reviews_router = Router::new()
        .route("/due", get(handlers::reviews::due_reviews))
        .route("/{id}/complete", post(handlers::reviews::complete_review))
        .with_state(pool.clone());

    let goals_router = Router::new()
        .route(
            "/",
            get(handlers::goals::list_goals).post(handlers::goals::create_goal),
        )
        .route("/{id}/complete", post(handlers::goals::complete_goal))
        .route("/{id}", delete(handlers::goals::delete_goal))
        .with_state(pool.clone());

    let profile_router = Router::new()
        .route("/", get(handlers::profile::get_profile))
        .route("/avatar", post(handlers::profile::update_avatar))
        .with_state(pool.clone());

    let functions_router = Router::new()
        .route(
            "/display-name",
            post(handlers::profile::update_display_name),
        )
        .with_state(pool.clone());

    let friends_router = Router::new()
        .route("/", get(handlers::friends::list_friends))
        .route("/pending", get(handlers::friends::pending_requests))
        .route("/requests", post(handlers::friends::send_request))
        .route(
            "/requests/{id}/respond",
            post(handlers::friends::respond_request),
        )
        .with_state(pool.clone());

    let ranking_router = Router::new()
        .route("/weekly", get(handlers::ranking::weekly_ranking))
        .with_state(pool.clone());

    let quiz_router = Router::new()
        .route("/", post(handlers::quiz::generate_quiz))
        .with_state(quiz_state);

    let identity_router = Router::new().route(
        "/",
        post(handlers::identity::bind_identity).delete(handlers::identity::clear_identity),
    );

    // Combined API router
    let api_router = Router::new()
        .nest("/subjects", subjects_router)
        .nest("/sessions", sessions_router)
        .nest("/reviews", reviews_router)
        .nest("/goals", goals_router)
        .nest("/profile", profile_router)
        .nest("/functions", functions_router)
        .nest("/friends", friends_router)
        .nest("/ranking", ranking_router)
        .nest("/quiz", quiz_router)
        .nest("/identity", identity_router);

    let app = Router::new().nest("/api", api_router).layer(session_layer);

    // Start server
    let listener = TcpListener::bind(&bind_addr).await?;
    log::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
