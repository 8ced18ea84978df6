use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use serde_json::json;

use super::domain::{CandidateRecord, UserId};
use super::repository::ProfileRepository;
use super::service::{TalentError, TalentService};

/// Router builder exposing the talent operations over HTTP.
pub fn talent_router<R>(service: Arc<TalentService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/talent/profiles", get(list_profiles_handler::<R>))
        .route(
            "/api/v1/talent/profiles/:user_id",
            get(profile_handler::<R>),
        )
        .route(
            "/api/v1/talent/profiles/:user_id/merit",
            get(merit_handler::<R>),
        )
        .route(
            "/api/v1/talent/profiles/:user_id/career",
            get(career_handler::<R>),
        )
        .route(
            "/api/v1/talent/profiles/:user_id/trainings/:training_id",
            post(training_completion_handler::<R>),
        )
        .route(
            "/api/v1/talent/profiles/:user_id/reset",
            delete(reset_handler::<R>),
        )
        .route("/api/v1/talent/merit-board", get(merit_board_handler::<R>))
        .route(
            "/api/v1/talent/fraud-checklist",
            post(fraud_checklist_handler::<R>),
        )
        .with_state(service)
}

fn error_response(error: TalentError) -> Response {
    let status = match &error {
        TalentError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
        TalentError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn list_profiles_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.profiles() {
        Ok(profiles) => (StatusCode::OK, axum::Json(profiles)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.profile(&UserId(user_id)) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn merit_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.merit_breakdown(&UserId(user_id)) {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn career_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let recommendation = service.career_recommendation(&UserId(user_id));
    (StatusCode::OK, axum::Json(recommendation)).into_response()
}

pub(crate) async fn training_completion_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    Path((user_id, training_id)): Path<(String, String)>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.apply_training_completion(&UserId(user_id), &training_id) {
        Ok(completion) => (StatusCode::OK, axum::Json(completion)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.reset_user(&UserId(user_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn merit_board_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.merit_board() {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fraud_checklist_handler<R>(
    State(service): State<Arc<TalentService<R>>>,
    axum::Json(candidate): axum::Json<CandidateRecord>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let report = service.fraud_checklist(&candidate);
    (StatusCode::OK, axum::Json(report)).into_response()
}
