use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use service::signup_service::{self, SignupDetail, SignupInput};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::routes::activities::ActivityOut;
use crate::routes::campers::CamperOut;
use crate::routes::AppState;

/// Signup responses always resolve both sides of the join.
#[derive(Debug, Serialize)]
pub struct SignupOut {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: CamperOut,
    pub activity: ActivityOut,
}

impl From<SignupDetail> for SignupOut {
    fn from(d: SignupDetail) -> Self {
        Self {
            id: d.signup.id,
            time: d.signup.time,
            camper_id: d.signup.camper_id,
            activity_id: d.signup.activity_id,
            camper: d.camper.into(),
            activity: d.activity.into(),
        }
    }
}

pub async fn list_signups(
    State(state): State<AppState>,
) -> Result<Json<Vec<SignupOut>>, ApiError> {
    let rows = signup_service::list_signups(&state.db).await?;
    Ok(Json(rows.into_iter().map(SignupOut::from).collect()))
}

pub async fn get_signup(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SignupOut>, ApiError> {
    let detail = signup_service::get_signup(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Signup not found".into()))?;
    Ok(Json(detail.into()))
}

pub async fn create_signup(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SignupInput>,
) -> Result<(StatusCode, Json<SignupOut>), ApiError> {
    let created = signup_service::create_signup(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn delete_signup(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    signup_service::delete_signup(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
