use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{Action, FormState};

use super::AppState;

/// Body posted by the page's form: the pressed button plus all seven inputs
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    pub action: Action,
    #[serde(flatten)]
    pub form: FormState,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Renders the page from the current view
pub async fn show_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let view = state.controller.view().await;
    Ok(Html(state.renderer.render(&view)?))
}

/// Runs the pressed action against the submitted form and renders the result
pub async fn submit_action(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> AppResult<Html<String>> {
    let action = submission.action;
    let outcome = state.controller.submit(action, submission.form).await;

    tracing::info!(action = %action, outcome = ?outcome, "Form action handled");

    let view = state.controller.view().await;
    Ok(Html(state.renderer.render(&view)?))
}
