use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/employees", post(handlers::employee::create_employee))
        .route("/api/employees", get(handlers::employee::list_employees))
        .route("/api/employees/:id", get(handlers::employee::get_employee))
        .route("/api/employees/:id", put(handlers::employee::update_employee))
        .route(
            "/api/employees/:id",
            delete(handlers::employee::delete_employee),
        )
}
