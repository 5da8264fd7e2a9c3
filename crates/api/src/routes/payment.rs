use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/payments", post(handlers::payment::create_payment))
        .route("/api/payments/:id", get(handlers::payment::get_payment))
        .route("/api/payments/:id", put(handlers::payment::update_payment))
        .route("/api/payments/:id", delete(handlers::payment::delete_payment))
}
