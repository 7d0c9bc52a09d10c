use crate::db::models::{NewUser, User, UserPatch};
use crate::{StockroomError, router::StockroomState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub async fn list_users(
    State(state): State<StockroomState>,
) -> Result<Json<Vec<User>>, StockroomError> {
    Ok(Json(state.store.list_users().await?))
}

pub async fn get_user(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, StockroomError> {
    match state.store.get_user(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(StockroomError::NotFound("user")),
    }
}

pub async fn search_users(
    State(state): State<StockroomState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<User>>, StockroomError> {
    Ok(Json(state.store.search_users(&query).await?))
}

pub async fn create_user(
    State(state): State<StockroomState>,
    Json(new): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), StockroomError> {
    let user = state.store.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, StockroomError> {
    match state.store.update_user(id, patch).await? {
        Some(user) => Ok(Json(user)),
        None => Err(StockroomError::NotFound("user")),
    }
}

pub async fn delete_user(
    State(state): State<StockroomState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, StockroomError> {
    match state.store.delete_user(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(StockroomError::NotFound("user")),
    }
}
