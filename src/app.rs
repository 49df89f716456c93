use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/dashboard", get(handlers::dashboard))
        .route("/profile", get(handlers::profile))
        .route("/profile/personal", post(handlers::save_personal))
        .route("/profile/goals", post(handlers::save_goals))
        .route("/profile/notifications/:kind", post(handlers::toggle_notification))
        .route("/journal", get(handlers::journal).post(handlers::submit_entry))
        .route("/journal/cards", get(handlers::journal_cards))
        .route("/session/login", post(handlers::log_in))
        .route("/session/logout", post(handlers::log_out))
        .route("/api/journal", get(handlers::list_entries).post(handlers::create_entry))
        .route("/api/journal/:id", get(handlers::get_entry))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/profile/notifications", post(handlers::toggle_notification_api))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/session", get(handlers::get_session))
        .fallback(handlers::not_found)
        .with_state(state)
}
