use crate::db::models::{License, LicensePatch, NewLicense};
use crate::{StockroomError, router::StockroomState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list_licenses(
    State(state): State<StockroomState>,
) -> Result<Json<Vec<License>>, StockroomError> {
    Ok(Json(state.store.list_licenses().await?))
}

pub async fn get_license(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<License>, StockroomError> {
    match state.store.get_license(id).await? {
        Some(license) => Ok(Json(license)),
        None => Err(StockroomError::NotFound("license")),
    }
}

pub async fn search_licenses(
    State(state): State<StockroomState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<License>>, StockroomError> {
    Ok(Json(state.store.search_licenses(&query).await?))
}

pub async fn create_license(
    State(state): State<StockroomState>,
    Json(new): Json<NewLicense>,
) -> Result<(StatusCode, Json<License>), StockroomError> {
    let license = state.store.create_license(new).await?;
    Ok((StatusCode::CREATED, Json(license)))
}

pub async fn update_license(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
    Json(patch): Json<LicensePatch>,
) -> Result<Json<License>, StockroomError> {
    match state.store.update_license(id, patch).await? {
        Some(license) => Ok(Json(license)),
        None => Err(StockroomError::NotFound("license")),
    }
}

pub async fn delete_license(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<License>, StockroomError> {
    match state.store.delete_license(id).await? {
        Some(license) => Ok(Json(license)),
        None => Err(StockroomError::NotFound("license")),
    }
}
