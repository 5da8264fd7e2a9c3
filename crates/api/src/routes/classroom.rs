use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/classrooms", post(handlers::classroom::create_classroom))
        .route("/api/classrooms", get(handlers::classroom::list_classrooms))
        .route("/api/classrooms/:id", get(handlers::classroom::get_classroom))
        .route(
            "/api/classrooms/:id",
            delete(handlers::classroom::delete_classroom),
        )
        .route(
            "/api/classrooms/:id/schedules",
            post(handlers::classroom::add_schedule_entry),
        )
        .route(
            "/api/classrooms/:id/schedules",
            put(handlers::classroom::replace_schedules),
        )
        .route(
            "/api/classrooms/:id/schedules/:entry_id",
            delete(handlers::classroom::delete_schedule_entry),
        )
}
