use crate::db::models::{Asset, AssetPatch, AssetStats, NewAsset};
use crate::{StockroomError, router::StockroomState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list_assets(
    State(state): State<StockroomState>,
) -> Result<Json<Vec<Asset>>, StockroomError> {
    Ok(Json(state.store.list_assets().await?))
}

pub async fn get_asset(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<Asset>, StockroomError> {
    match state.store.get_asset(id).await? {
        Some(asset) => Ok(Json(asset)),
        None => Err(StockroomError::NotFound("asset")),
    }
}

pub async fn get_asset_by_tag(
    State(state): State<StockroomState>,
    Path(tag): Path<String>,
) -> Result<Json<Asset>, StockroomError> {
    match state.store.get_asset_by_tag(&tag).await? {
        Some(asset) => Ok(Json(asset)),
        None => Err(StockroomError::NotFound("asset")),
    }
}

pub async fn search_assets(
    State(state): State<StockroomState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Asset>>, StockroomError> {
    Ok(Json(state.store.search_assets(&query).await?))
}

pub async fn asset_stats(
    State(state): State<StockroomState>,
) -> Result<Json<AssetStats>, StockroomError> {
    Ok(Json(state.store.asset_stats().await?))
}

pub async fn create_asset(
    State(state): State<StockroomState>,
    Json(new): Json<NewAsset>,
) -> Result<(StatusCode, Json<Asset>), StockroomError> {
    let asset = state.store.create_asset(new).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

pub async fn update_asset(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
    Json(patch): Json<AssetPatch>,
) -> Result<Json<Asset>, StockroomError> {
    match state.store.update_asset(id, patch).await? {
        Some(asset) => Ok(Json(asset)),
        None => Err(StockroomError::NotFound("asset")),
    }
}

pub async fn delete_asset(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<Asset>, StockroomError> {
    match state.store.delete_asset(id).await? {
        Some(asset) => Ok(Json(asset)),
        None => Err(StockroomError::NotFound("asset")),
    }
}
