use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use models::{activity, camper, signup};
use service::camper_service::{self, CamperDetail, CamperInput};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::routes::activities::ActivityOut;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct CamperOut {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl From<camper::Model> for CamperOut {
    fn from(m: camper::Model) -> Self {
        Self { id: m.id, name: m.name, age: m.age }
    }
}

#[derive(Debug, Serialize)]
pub struct CamperSignupOut {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub activity: ActivityOut,
}

#[derive(Debug, Serialize)]
pub struct CamperDetailOut {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub signups: Vec<CamperSignupOut>,
}

impl From<CamperDetail> for CamperDetailOut {
    fn from(d: CamperDetail) -> Self {
        let signups = d
            .signups
            .into_iter()
            .map(|(s, a): (signup::Model, activity::Model)| CamperSignupOut {
                id: s.id,
                time: s.time,
                camper_id: s.camper_id,
                activity_id: s.activity_id,
                activity: a.into(),
            })
            .collect();
        Self { id: d.camper.id, name: d.camper.name, age: d.camper.age, signups }
    }
}

/// List campers as bare summaries; signups are only expanded on the
/// single-camper view.
pub async fn list_campers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CamperOut>>, ApiError> {
    let rows = camper_service::list_campers(&state.db).await?;
    Ok(Json(rows.into_iter().map(CamperOut::from).collect()))
}

pub async fn get_camper(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CamperDetailOut>, ApiError> {
    let detail = camper_service::get_camper_detail(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Camper not found".into()))?;
    Ok(Json(detail.into()))
}

pub async fn create_camper(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CamperInput>,
) -> Result<(StatusCode, Json<CamperOut>), ApiError> {
    let created = camper_service::create_camper(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update_camper(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ApiJson(input): ApiJson<CamperInput>,
) -> Result<(StatusCode, Json<CamperOut>), ApiError> {
    let updated = camper_service::update_camper(&state.db, id, input).await?;
    Ok((StatusCode::ACCEPTED, Json(updated.into())))
}

pub async fn delete_camper(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    camper_service::delete_camper(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
