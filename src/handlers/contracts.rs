use crate::db::models::{Contract, ContractPatch, NewContract};
use crate::{StockroomError, router::StockroomState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list_contracts(
    State(state): State<StockroomState>,
) -> Result<Json<Vec<Contract>>, StockroomError> {
    Ok(Json(state.store.list_contracts().await?))
}

pub async fn get_contract(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<Contract>, StockroomError> {
    match state.store.get_contract(id).await? {
        Some(contract) => Ok(Json(contract)),
        None => Err(StockroomError::NotFound("contract")),
    }
}

pub async fn search_contracts(
    State(state): State<StockroomState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Contract>>, StockroomError> {
    Ok(Json(state.store.search_contracts(&query).await?))
}

pub async fn create_contract(
    State(state): State<StockroomState>,
    Json(new): Json<NewContract>,
) -> Result<(StatusCode, Json<Contract>), StockroomError> {
    let contract = state.store.create_contract(new).await?;
    Ok((StatusCode::CREATED, Json(contract)))
}

pub async fn update_contract(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
    Json(patch): Json<ContractPatch>,
) -> Result<Json<Contract>, StockroomError> {
    match state.store.update_contract(id, patch).await? {
        Some(contract) => Ok(Json(contract)),
        None => Err(StockroomError::NotFound("contract")),
    }
}

pub async fn delete_contract(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<Contract>, StockroomError> {
    match state.store.delete_contract(id).await? {
        Some(contract) => Ok(Json(contract)),
        None => Err(StockroomError::NotFound("contract")),
    }
}
