use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::builder::{create_profile, Profile};
use super::repository::ProfileRepository;
use super::service::{ProfileService, ProfileServiceError};
use crate::dashboard::DashboardCard;
use crate::error::AppError;
use crate::rules::QuizAnswers;

/// Router exposing rule evaluation and the saved-profile lifecycle.
pub fn profile_router<R>(service: Arc<ProfileService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/rules/evaluate", post(evaluate_handler))
        .route(
            "/api/v1/profile",
            post(submit_handler::<R>)
                .get(current_handler::<R>)
                .patch(revise_handler::<R>)
                .delete(reset_handler::<R>),
        )
        .route("/api/v1/profile/dashboard", get(dashboard_handler::<R>))
        .with_state(service)
}

/// Stateless evaluation; nothing is persisted.
pub(crate) async fn evaluate_handler(
    Json(answers): Json<QuizAnswers>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(create_profile(answers)?))
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Json(answers): Json<QuizAnswers>,
) -> Result<(StatusCode, Json<Profile>), AppError>
where
    R: ProfileRepository + 'static,
{
    let profile = on_store(service, move |service| service.submit(answers)).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub(crate) async fn current_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
) -> Result<Json<Profile>, AppError>
where
    R: ProfileRepository + 'static,
{
    Ok(Json(on_store(service, ProfileService::current).await?))
}

pub(crate) async fn revise_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
    Json(changes): Json<QuizAnswers>,
) -> Result<Json<Profile>, AppError>
where
    R: ProfileRepository + 'static,
{
    let profile = on_store(service, move |service| service.revise(changes)).await?;
    Ok(Json(profile))
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
) -> Result<StatusCode, AppError>
where
    R: ProfileRepository + 'static,
{
    on_store(service, ProfileService::reset).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<ProfileService<R>>>,
) -> Result<Json<Vec<DashboardCard>>, AppError>
where
    R: ProfileRepository + 'static,
{
    Ok(Json(on_store(service, ProfileService::dashboard).await?))
}

/// Runs a service call on the blocking pool; file-backed stores do synchronous I/O.
async fn on_store<R, T, F>(service: Arc<ProfileService<R>>, call: F) -> Result<T, AppError>
where
    R: ProfileRepository + 'static,
    T: Send + 'static,
    F: FnOnce(&ProfileService<R>) -> Result<T, ProfileServiceError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || call(&service)).await?;
    Ok(outcome?)
}
