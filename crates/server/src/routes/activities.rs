use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use models::activity;
use service::activity_service::{self, ActivityInput};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::routes::AppState;

/// Activity responses never nest signups.
#[derive(Debug, Serialize)]
pub struct ActivityOut {
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

impl From<activity::Model> for ActivityOut {
    fn from(m: activity::Model) -> Self {
        Self { id: m.id, name: m.name, difficulty: m.difficulty }
    }
}

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityOut>>, ApiError> {
    let rows = activity_service::list_activities(&state.db).await?;
    Ok(Json(rows.into_iter().map(ActivityOut::from).collect()))
}

pub async fn create_activity(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ActivityInput>,
) -> Result<(StatusCode, Json<ActivityOut>), ApiError> {
    let created = activity_service::create_activity(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(input): ApiJson<ActivityInput>,
) -> Result<(StatusCode, Json<ActivityOut>), ApiError> {
    let updated = activity_service::update_activity(&state.db, id, input).await?;
    Ok((StatusCode::ACCEPTED, Json(updated.into())))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    activity_service::delete_activity(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
