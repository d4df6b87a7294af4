pub mod api;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/reviews", post(api::analyze_review))
        .route("/data_all_db", post(api::retrieve_all))
        .route("/data_db", post(api::retrieve_for_user))
        .with_state(state)
}
