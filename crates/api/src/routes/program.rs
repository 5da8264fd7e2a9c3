use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/programs", post(handlers::program::create_program))
        .route("/api/programs", get(handlers::program::list_programs))
        .route("/api/programs/:id", get(handlers::program::get_program))
        .route("/api/programs/:id", put(handlers::program::update_program))
        .route("/api/programs/:id", delete(handlers::program::delete_program))
}
