use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use stockroom::InventoryStore;
use stockroom::router::{StockroomState, stockroom_router};

async fn test_app(label: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "stockroom-{}-{}-{}.sqlite",
        label,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let pool = stockroom::db::connect(&database_url)
        .await
        .expect("failed to open test database");
    let store = InventoryStore::new(pool);
    store.init_schema().await.expect("schema init failed");

    let state = StockroomState::new(store);
    (stockroom_router(state, None), temp_path)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

#[tokio::test]
async fn license_defaults_and_full_lifecycle() {
    let (app, temp_path) = test_app("license-lifecycle").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/licenses",
        Some(json!({
            "name": "Office Suite",
            "type": "subscription",
            "software_name": "LibreWork",
            "vendor": "Docs Ltd"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["quantity"], 1);
    assert_eq!(created["cost"], 0.0);
    let id = created["id"].as_i64().expect("missing id");

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/licenses/{id}"),
        Some(json!({"quantity": 25, "status": "Expired"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 25);
    assert_eq!(updated["status"], "Expired");
    assert_eq!(updated["name"], "Office Suite");

    let (status, deleted) = request(&app, "DELETE", &format!("/api/licenses/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], created["id"]);

    let (status, _) = request(&app, "GET", &format!("/api/licenses/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn license_key_must_be_unique_when_present() {
    let (app, temp_path) = test_app("license-key-unique").await;

    let payload = json!({"name": "IDE", "type": "perpetual", "key": "XXXX-YYYY"});
    let (status, _) = request(&app, "POST", "/api/licenses", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app, "POST", "/api/licenses", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // Keyless licenses do not collide with each other.
    for name in ["Site license A", "Site license B"] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/licenses",
            Some(json!({"name": name, "type": "site"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn license_search_covers_software_and_vendor() {
    let (app, temp_path) = test_app("license-search").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/licenses",
        Some(json!({
            "name": "Drafting",
            "type": "subscription",
            "software_name": "AutoSketch",
            "vendor": "CADWorks"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app, "GET", "/api/licenses/search/autosketch", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|v| v.len()), Some(1));

    let (status, body) = request(&app, "GET", "/api/licenses/search/cadworks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|v| v.len()), Some(1));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn user_defaults_email_uniqueness_and_empty_patch() {
    let (app, temp_path) = test_app("user-lifecycle").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Priya Shah", "email": "priya@example.com", "department": "IT"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["assigned_assets"], 0);
    let id = created["id"].as_i64().expect("missing id");

    let (status, body) = request(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Other", "email": "priya@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = request(&app, "PUT", &format!("/api/users/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION");

    let (status, body) = request(&app, "GET", "/api/users/search/PRIYA", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|v| v.len()), Some(1));

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn contract_defaults_dates_and_search_by_contact() {
    let (app, temp_path) = test_app("contract-lifecycle").await;

    let (status, created) = request(
        &app,
        "POST",
        "/api/contracts",
        Some(json!({
            "name": "Datacenter maintenance",
            "vendor": "CoolAir GmbH",
            "type": "maintenance",
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "contact_person": "Jo Miller",
            "contact_email": "jo.miller@coolair.example"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Active");
    assert_eq!(created["value"], 0.0);
    assert_eq!(created["start_date"], "2026-01-01");
    let id = created["id"].as_i64().expect("missing id");

    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/contracts/{id}"),
        Some(json!({"value": 12500.0, "renewal_date": "2026-11-30"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["value"], 12500.0);
    assert_eq!(updated["renewal_date"], "2026-11-30");
    assert_eq!(updated["end_date"], "2026-12-31");

    let (status, body) = request(&app, "GET", "/api/contracts/search/miller", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|v| v.len()), Some(1));

    let (status, _) = request(&app, "GET", "/api/contracts/search/nobody", None).await;
    assert_eq!(status, StatusCode::OK);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn entity_lists_are_independent() {
    let (app, temp_path) = test_app("entity-independence").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/users",
        Some(json!({"name": "Sam Field"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Deleting every user leaves assets referencing the name untouched.
    let (status, created) = request(
        &app,
        "POST",
        "/api/assets",
        Some(json!({"tag": "A-1", "type": "hardware", "assigned_user_name": "Sam Field"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, users) = request(&app, "GET", "/api/users", None).await;
    let user_id = users[0]["id"].as_i64().expect("missing user id");
    let (status, _) = request(&app, "DELETE", &format!("/api/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, asset) = request(
        &app,
        "GET",
        &format!("/api/assets/{}", created["id"]),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(asset["assigned_user_name"], "Sam Field");

    let _ = fs::remove_file(&temp_path);
}
