use crate::dashboard::{DashboardResponse, build_dashboard};
use crate::errors::AppError;
use crate::journal::{EntryDraft, JournalEntry};
use crate::models::{
    DashboardQuery, JournalPageQuery, ProfilePageQuery, SearchQuery, SessionResponse,
    ToggleRequest,
};
use crate::profile::{
    HealthGoals, NotificationKind, NotificationSettings, PersonalInfo, ProfileSettings,
};
use crate::state::AppState;
use crate::ui::{
    JournalPage, render_dashboard, render_journal, render_journal_cards, render_landing,
    render_not_found, render_profile,
};
use axum::{
    Form, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use tracing::{info, warn};

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    Html(render_landing(state.logged_in().await))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let dashboard = load_dashboard(&state, query).await;
    Html(render_dashboard(&dashboard, state.logged_in().await))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardResponse> {
    Json(load_dashboard(&state, query).await)
}

async fn load_dashboard(state: &AppState, query: DashboardQuery) -> DashboardResponse {
    let goals = state.profile.lock().await.goals.clone();
    build_dashboard(&goals, query.range)
}

pub async fn profile(
    State(state): State<AppState>,
    Query(query): Query<ProfilePageQuery>,
) -> Html<String> {
    let logged_in = state.logged_in().await;
    let profile = state.profile.lock().await;
    Html(render_profile(&profile, query.tab, query.saved, logged_in))
}

pub async fn save_personal(
    State(state): State<AppState>,
    Form(personal): Form<PersonalInfo>,
) -> Redirect {
    state.profile.lock().await.update_personal(personal);
    Redirect::to("/profile?tab=personal&saved=profile")
}

pub async fn save_goals(
    State(state): State<AppState>,
    Form(goals): Form<HealthGoals>,
) -> Redirect {
    state.profile.lock().await.update_goals(goals);
    Redirect::to("/profile?tab=goals&saved=goals")
}

pub async fn toggle_notification(
    State(state): State<AppState>,
    Path(kind): Path<NotificationKind>,
) -> Redirect {
    state.profile.lock().await.toggle_notification(kind);
    Redirect::to("/profile?tab=notifications")
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileSettings> {
    Json(state.profile.lock().await.clone())
}

pub async fn toggle_notification_api(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Json<NotificationSettings> {
    let mut profile = state.profile.lock().await;
    profile.toggle_notification(payload.kind);
    Json(profile.notifications.clone())
}

pub async fn journal(
    State(state): State<AppState>,
    Query(query): Query<JournalPageQuery>,
) -> Html<String> {
    let logged_in = state.logged_in().await;
    let store = state.journal.lock().await;
    let page = JournalPage {
        entries: store.filter(&query.q),
        query: &query.q,
        composing: query.new,
        created: query.created,
        draft: None,
        error: None,
        today: Local::now().date_naive(),
    };
    Html(render_journal(&page, logged_in))
}

/// Form submission from the journal page. A rejected draft re-renders the
/// page with the form still filled in.
pub async fn submit_entry(
    State(state): State<AppState>,
    Form(draft): Form<EntryDraft>,
) -> Response {
    let logged_in = state.logged_in().await;
    let mut store = state.journal.lock().await;
    let error = match store.create_entry(draft.clone()) {
        Ok(_) => return Redirect::to("/journal?created=true").into_response(),
        Err(err) => err.to_string(),
    };

    let page = JournalPage {
        entries: store.filter(""),
        query: "",
        composing: true,
        created: false,
        draft: Some(&draft),
        error: Some(capitalize(&error)),
        today: Local::now().date_naive(),
    };
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(render_journal(&page, logged_in)),
    )
        .into_response()
}

pub async fn journal_cards(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let store = state.journal.lock().await;
    Html(render_journal_cards(&store.filter(&query.q)))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<JournalEntry>> {
    let store = state.journal.lock().await;
    Json(store.filter(&query.q).iter().cloned().collect())
}

/// Malformed bodies and unknown mood or energy values are 400s, same as a
/// draft that fails validation.
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<EntryDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<JournalEntry>), AppError> {
    let Json(draft) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "rejected journal payload");
        AppError::bad_request(rejection.body_text())
    })?;
    let entry = state.journal.lock().await.create_entry(draft)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<JournalEntry>, AppError> {
    let store = state.journal.lock().await;
    let entry = store
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("no journal entry with id {id}")))?;
    Ok(Json(entry))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        logged_in: state.logged_in().await,
    })
}

pub async fn log_in(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.log_in();
    Redirect::to("/")
}

pub async fn log_out(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.log_out();
    Redirect::to("/")
}

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Html<String>) {
    info!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Html(render_not_found(uri.path(), state.logged_in().await)),
    )
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
