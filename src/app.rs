use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/events", post(handlers::create_event))
        .route(
            "/api/events/:id",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        .route("/api/events/:id/realize", post(handlers::realize_event))
        .route("/api/payments", post(handlers::create_payment))
        .route("/api/payments/:id", delete(handlers::delete_payment))
        .route("/api/expenses", post(handlers::create_expense))
        .route("/api/expenses/:id", delete(handlers::delete_expense))
        .route("/api/months/:month", get(handlers::get_month))
        .route("/api/months/:month/toggle", post(handlers::toggle_month))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/reset", post(handlers::reset_data))
        .with_state(state)
}
