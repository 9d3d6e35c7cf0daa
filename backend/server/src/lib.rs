//! Documentation of an anonymous review sharing platform.
//!
//! [Publishing](https://www.reddit.com/r/rust/comments/195ao81/publishing_documentation_as_github_page/) docs to GitHub Pages.
//!
//!
//!
//! # General Infrastructure
//! - Frontend renders pages and talks to this server over JSON
//! - Redis holds every review, the reaction counters and the per-tag indexes
//! - Meilisearch holds a searchable copy of each review for the explore page
//! - Text analysis (hashtags, sentiment, trending) lives in the `analysis` crate
//!
//!
//!
//! # Identity
//!
//! There are no accounts.
//!
//! - First visit, the client asks `GET /pseudonym` and keeps the result in local storage
//! - Every submission carries that pseudonym, the avatar defaults to its first letter
//! - Bookmarks are a list of review ids, also only in local storage
//! - The bookmarks page posts that list to `POST /reviews/bookmarked`
//!
//!
//!
//! # Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/reviews` | newest 50 |
//! | POST | `/reviews` | submit, `201` with the stored record |
//! | POST | `/reviews/bookmarked` | `{ "ids": [..] }`, newest first |
//! | GET | `/reviews/tag/trending` | `[{ tag, count, percent }]` |
//! | GET | `/reviews/tag/{slug}` | reviews tagged `#slug`, case sensitive |
//! | POST | `/reviews/{id}/reactions` | `+1`, returns the new count |
//! | GET | `/search?q=&rating=&sentiment=` | explore search, `rating` is a minimum |
//! | POST | `/analyze` | `{ "content" }`, live hashtag and sentiment preview |
//! | GET | `/pseudonym` | fresh `{ pseudonym, avatar }` |
//!
//! ## Submissions
//! - `title`, `content`, `rating` (1-5) and `pseudonym` are required
//! - Company/product name and url are optional, trimmed, default empty
//! - `images` are references to already hosted files, stored as given
//! - Hashtags and sentiment are always computed here from `content`, anything
//!   the client sends for them is ignored
//!
//!
//!
//! # Notes
//!
//! ## Redis + Meilisearch
//! Redis keeps the records and atomic counters, Meilisearch is only used for
//! search. Search hits are resolved back through Redis so reaction counts
//! never lag. Eventual consistency on the index is fine for this use case.
//!
//!
//!
//! # Setup
//!
//! Environment.
//! ```sh
//! RUST_PORT=8080
//! REDIS_URL=redis://127.0.0.1:6379
//! MEILI_URL=http://127.0.0.1:7700
//! MEILI_ADMIN_KEY=...    # or /run/secrets/MEILI_ADMIN_KEY
//! RUST_LOG=server=info
//! ```
//!
//! Run.
//! ```sh
//! cargo run -p server
//! ```
//!
//! Seed sample reviews into a running server.
//! ```sh
//! cargo run -p seed -- --server http://127.0.0.1:8080
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! `````
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod search;
pub mod state;
pub mod utils;

use routes::{
    analyze_handler, bookmarked_reviews_handler, create_review_handler, latest_reviews_handler,
    pseudonym_handler, reactions_handler, search_handler, tag_reviews_handler, trending_handler,
};
use state::State;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(
            "/reviews",
            get(latest_reviews_handler).post(create_review_handler),
        )
        .route("/reviews/bookmarked", post(bookmarked_reviews_handler))
        .route("/reviews/tag/trending", get(trending_handler))
        .route("/reviews/tag/{slug}", get(tag_reviews_handler))
        .route("/reviews/{id}/reactions", post(reactions_handler))
        .route("/search", get(search_handler))
        .with_state(state)
        .merge(public_router())
        .layer(cors)
}

/// Routes that never touch Redis or Meilisearch.
pub fn public_router() -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/pseudonym", get(pseudonym_handler))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use analysis::{SentimentLabel, generate_avatar};
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::public_router;
    use crate::models::AnalyzeResponse;

    #[tokio::test]
    async fn test_analyze_route() {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(
                r##"{"content": "Terrible #Support, awful #support"}"##,
            ))
            .unwrap();

        let response = public_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let preview: AnalyzeResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(preview.hashtags, vec!["#Support", "#support"]);
        assert_eq!(preview.sentiment.label, SentimentLabel::Negative);
        assert!((preview.sentiment.score - 1.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .body(Body::from("not json"))
            .unwrap();

        let response = public_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pseudonym_route() {
        let request = Request::builder()
            .uri("/pseudonym")
            .body(Body::empty())
            .unwrap();

        let response = public_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let identity: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let pseudonym = identity["pseudonym"].as_str().unwrap();
        assert!(!pseudonym.is_empty());
        assert_eq!(identity["avatar"], generate_avatar(pseudonym));
    }
}
