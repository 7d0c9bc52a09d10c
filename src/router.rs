use crate::db::InventoryStore;
use crate::handlers::{assets, contracts, health, licenses, users};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Shared request state: the record store handle (and its pool) only.
/// No other cross-request mutable state exists.
#[derive(Clone)]
pub struct StockroomState {
    pub store: InventoryStore,
}

impl StockroomState {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }
}

/// CORS for the browser client. A configured origin restricts to that
/// origin; unset falls back to permissive (development).
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let allow_origin = match allowed_origin {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::list([value]),
            Err(e) => {
                warn!(origin = %origin, error = %e, "invalid allowed origin, denying cross-origin requests");
                AllowOrigin::predicate(|_, _| false)
            }
        },
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn stockroom_router(state: StockroomState, allowed_origin: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/stats", get(assets::asset_stats))
        .route(
            "/api/assets",
            get(assets::list_assets).post(assets::create_asset),
        )
        .route(
            "/api/assets/{id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
        .route("/api/assets/tag/{tag}", get(assets::get_asset_by_tag))
        .route("/api/assets/search/{query}", get(assets::search_assets))
        .route(
            "/api/licenses",
            get(licenses::list_licenses).post(licenses::create_license),
        )
        .route(
            "/api/licenses/{id}",
            get(licenses::get_license)
                .put(licenses::update_license)
                .delete(licenses::delete_license),
        )
        .route(
            "/api/licenses/search/{query}",
            get(licenses::search_licenses),
        )
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/api/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/users/search/{query}", get(users::search_users))
        .route(
            "/api/contracts",
            get(contracts::list_contracts).post(contracts::create_contract),
        )
        .route(
            "/api/contracts/{id}",
            get(contracts::get_contract)
                .put(contracts::update_contract)
                .delete(contracts::delete_contract),
        )
        .route(
            "/api/contracts/search/{query}",
            get(contracts::search_contracts),
        )
        .layer(cors_layer(allowed_origin))
        .with_state(state)
}
