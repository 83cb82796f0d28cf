use anyhow::Result;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use storefind::{store, SearchIndex};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize {
    10
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

/// One entry for the results UI: everything it needs to render a clickable
/// hit with its teaser image.
#[derive(Serialize)]
pub struct SearchHit {
    pub score: usize,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub teaser: String,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<SearchIndex>,
}

pub fn build_app(store_path: &str) -> Result<Router> {
    // Load the store and build the index once at startup; it is read-only
    // from then on, so handlers share it through an Arc.
    let records = store::from_path(store_path)?;
    let index = SearchIndex::build(records)?;
    tracing::info!(
        num_records = index.len(),
        num_tokens = index.num_tokens(),
        "index ready"
    );
    let app_state = AppState {
        index: Arc::new(index),
    };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            if origins.is_empty() {
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any)
            } else {
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_methods(Any)
                    .allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(app_state)
        .layer(cors);
    Ok(app)
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let hits = state.index.query_scored(&params.q);
    let total_hits = hits.len();

    let k = params.k.clamp(1, 100);
    let results: Vec<SearchHit> = hits
        .into_iter()
        .take(k)
        .map(|hit| SearchHit {
            score: hit.score,
            title: hit.record.title.clone(),
            excerpt: hit.record.excerpt.clone(),
            url: hit.record.url.clone(),
            teaser: hit.record.teaser.clone(),
            categories: hit.record.categories.clone(),
            tags: hit.record.tags.clone(),
        })
        .collect();

    Json(SearchResponse {
        query: params.q,
        took_s: start.elapsed().as_secs_f64(),
        total_hits,
        results,
    })
}
