//! End-to-end smoke tests for the full gearguardd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`, so no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gearguard_adapter_http_axum::router;
use gearguard_adapter_http_axum::session::CookieSettings;
use gearguard_adapter_http_axum::state::AppState;
use gearguard_adapter_storage_sqlite_sqlx::SqliteStorage;
use gearguard_adapter_storage_sqlite_sqlx::pool::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> (axum::Router, SqliteStorage) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");
    let storage = SqliteStorage::from(&db);

    let state = AppState::new(&storage, CookieSettings::default());
    (router::build(state), storage)
}

async fn call(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A team, a department, a category owned by the team, and a piece of
/// equipment registered without an explicit team. Returns
/// `(team, equipment)`.
async fn plant(app: &axum::Router) -> (Value, Value) {
    let (_, team) = call(
        app,
        with_json("POST", "/api/teams", &json!({"name": "Mechanics"})),
    )
    .await;
    let (_, department) = call(
        app,
        with_json("POST", "/api/departments", &json!({"name": "Production"})),
    )
    .await;
    let (_, category) = call(
        app,
        with_json(
            "POST",
            "/api/equipment-categories",
            &json!({"name": "CNC Machines", "responsibleTeamId": team["id"]}),
        ),
    )
    .await;
    let (status, equipment) = call(
        app,
        with_json(
            "POST",
            "/api/equipment",
            &json!({
                "name": "CNC Machine #1",
                "serialNumber": "CNC-001",
                "categoryId": category["id"],
                "departmentId": department["id"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (team, equipment)
}

async fn file_request(app: &axum::Router, equipment_id: &Value, subject: &str) -> Value {
    let (status, request) = call(
        app,
        with_json(
            "POST",
            "/api/requests",
            &json!({
                "type": "Corrective",
                "subject": subject,
                "equipmentId": equipment_id
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    request
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app().await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Equipment and requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_fill_team_from_category_and_pass_it_to_requests() {
    let (app, _) = app().await;
    let (team, equipment) = plant(&app).await;

    assert_eq!(equipment["maintenanceTeamId"], team["id"]);
    assert_eq!(equipment["state"], "Active");

    let request = file_request(&app, &equipment["id"], "Spindle vibration").await;
    assert_eq!(request["maintenanceTeamId"], team["id"]);
    assert_eq!(request["equipmentCategoryId"], equipment["categoryId"]);
    assert_eq!(request["departmentId"], equipment["departmentId"]);
    assert_eq!(request["state"], "New");
    assert_eq!(request["teamName"], "Mechanics");
    assert_eq!(request["equipmentName"], "CNC Machine #1");
}

#[tokio::test]
async fn should_scrap_equipment_when_request_moves_to_scrap() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    let request = file_request(&app, &equipment["id"], "Cracked frame").await;

    let (status, updated) = call(
        &app,
        with_json(
            "PATCH",
            &format!("/api/requests/{}/state", request["id"]),
            &json!({"state": "Scrap"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["state"], "Scrap");

    let (_, equipment) = call(&app, get(&format!("/api/equipment/{}", equipment["id"]))).await;
    assert_eq!(equipment["state"], "Scrap");
}

#[tokio::test]
async fn should_move_request_between_kanban_columns() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    let request = file_request(&app, &equipment["id"], "Oil change").await;

    call(
        &app,
        with_json(
            "PATCH",
            &format!("/api/requests/{}/state", request["id"]),
            &json!({"state": "In Progress"}),
        ),
    )
    .await;

    let (status, board) = call(&app, get("/api/requests/kanban")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["new"], json!([]));
    assert_eq!(board["in_progress"][0]["id"], request["id"]);

    let (_, count) = call(
        &app,
        get(&format!(
            "/api/equipment/{}/open-requests-count",
            equipment["id"]
        )),
    )
    .await;
    assert_eq!(count["count"], 1);
}

#[tokio::test]
async fn should_remove_deleted_request_from_listing() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    let keep = file_request(&app, &equipment["id"], "Keep me").await;
    let drop = file_request(&app, &equipment["id"], "Drop me").await;

    let (status, body) = call(&app, delete(&format!("/api/requests/{}", drop["id"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Request deleted successfully");

    let (_, list) = call(&app, get("/api/requests")).await;
    let ids: Vec<&Value> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| &r["id"])
        .collect();
    assert_eq!(ids, vec![&keep["id"]]);

    let (status, _) = call(&app, get(&format!("/api/requests/{}", drop["id"]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_number_requests_sequentially() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;

    let first = file_request(&app, &equipment["id"], "First").await;
    let second = file_request(&app, &equipment["id"], "Second").await;

    let first = first["requestNumber"].as_str().unwrap().to_string();
    let second = second["requestNumber"].as_str().unwrap().to_string();
    assert!(first.starts_with("MR-"));
    assert!(first.ends_with("-0001"), "{first}");
    assert!(second.ends_with("-0002"), "{second}");
    assert_eq!(first[..7], second[..7]);
}

#[tokio::test]
async fn should_delete_equipment_and_report_missing_afterwards() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    file_request(&app, &equipment["id"], "Orphan").await;

    let uri = format!("/api/equipment/{}", equipment["id"]);
    let (status, body) = call(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Equipment deleted successfully");

    let (status, _) = call(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = call(&app, get("/api/requests")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn should_patch_only_given_equipment_fields() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;

    let (status, updated) = call(
        &app,
        with_json(
            "PATCH",
            &format!("/api/equipment/{}", equipment["id"]),
            &json!({"location": "Building B"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["location"], "Building B");
    assert_eq!(updated["serialNumber"], "CNC-001");
}

#[tokio::test]
async fn should_clear_owner_when_patched_to_null() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    let (_, signed_up) = call(
        &app,
        with_json(
            "POST",
            "/api/auth/signup",
            &json!({"name": "John Smith", "email": "john@example.com", "password": "secret123"}),
        ),
    )
    .await;
    let uri = format!("/api/equipment/{}", equipment["id"]);

    let (status, owned) = call(
        &app,
        with_json(
            "PATCH",
            &uri,
            &json!({"employeeId": signed_up["employee"]["id"], "warrantyEnd": "2027-06-30"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(owned["employeeName"], "John Smith");
    assert_eq!(owned["warrantyEnd"], "2027-06-30T00:00:00Z");

    let (status, cleared) = call(
        &app,
        with_json("PATCH", &uri, &json!({"employeeId": null, "warrantyEnd": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["employeeId"].is_null());
    assert!(cleared["employeeName"].is_null());
    assert!(cleared["warrantyEnd"].is_null());
    assert_eq!(cleared["serialNumber"], "CNC-001");
}

#[tokio::test]
async fn should_include_related_names_with_equipment() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    assert_eq!(equipment["categoryName"], "CNC Machines");

    let (status, listed) = call(&app, get("/api/equipment")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["name"], "CNC Machine #1");
    assert_eq!(listed[0]["categoryName"], "CNC Machines");
    assert_eq!(listed[0]["departmentName"], "Production");
    assert_eq!(listed[0]["teamName"], "Mechanics");
    assert!(listed[0]["employeeName"].is_null());

    let (_, one) = call(&app, get(&format!("/api/equipment/{}", equipment["id"]))).await;
    assert_eq!(one["teamName"], "Mechanics");
}

#[tokio::test]
async fn should_answer_bad_request_for_unknown_references() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;

    let (status, body) = call(
        &app,
        with_json(
            "PATCH",
            &format!("/api/equipment/{}", equipment["id"]),
            &json!({"categoryId": 9999}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = call(
        &app,
        with_json(
            "POST",
            "/api/requests",
            &json!({
                "type": "Corrective",
                "subject": "Who?",
                "equipmentId": equipment["id"],
                "assignedTechnicianId": 9999
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_list_preventive_requests_on_calendar() {
    let (app, _) = app().await;
    let (_, equipment) = plant(&app).await;
    let (status, _) = call(
        &app,
        with_json(
            "POST",
            "/api/requests",
            &json!({
                "type": "Preventive",
                "subject": "Quarterly service",
                "equipmentId": equipment["id"],
                "scheduledDate": "2030-06-01"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    file_request(&app, &equipment["id"], "Not on calendar").await;

    let (_, events) = call(&app, get("/api/requests/calendar")).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["date"], "2030-06-01");
    assert_eq!(events[0]["team"], "Mechanics");
    assert_eq!(events[0]["teamColor"], "bg-blue-500");
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_wrong_password_with_unauthorized() {
    let (app, _) = app().await;
    let signup = json!({
        "name": "Alex Foster",
        "email": "alex@gearguard.com",
        "password": "password123"
    });
    let (status, body) = call(&app, with_json("POST", "/api/auth/signup", &signup)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["employee"].get("password").is_none());
    assert!(body["employee"].get("passwordHash").is_none());

    let (status, body) = call(
        &app,
        with_json(
            "POST",
            "/api/auth/login",
            &json!({"email": "alex@gearguard.com", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn should_reject_me_without_session() {
    let (app, _) = app().await;
    let (status, _) = call(&app, get("/api/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_duplicate_signup() {
    let (app, _) = app().await;
    let signup = json!({
        "name": "Alex Foster",
        "email": "alex@gearguard.com",
        "password": "password123"
    });
    call(&app, with_json("POST", "/api/auth/signup", &signup)).await;
    let (status, _) = call(&app, with_json("POST", "/api/auth/signup", &signup)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_never_expose_password_hashes() {
    let (app, storage) = app().await;
    gearguard_adapter_demo::seed(&storage).await.unwrap();

    let (status, body) = call(&app, get("/api/employees")).await;
    assert_eq!(status, StatusCode::OK);
    let text = body.to_string();
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert!(!text.contains("sha256$"));
    assert!(!text.to_lowercase().contains("password"));

    let (status, body) = call(
        &app,
        with_json(
            "POST",
            "/api/auth/login",
            &json!({
                "email": "john@example.com",
                "password": gearguard_adapter_demo::DEMO_PASSWORD
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.to_string().contains("sha256$"));
}

// ---------------------------------------------------------------------------
// Demo dataset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_demo_dataset_filters() {
    let (app, storage) = app().await;
    gearguard_adapter_demo::seed(&storage).await.unwrap();

    let (_, technicians) = call(&app, get("/api/employees?role=Technician")).await;
    assert_eq!(technicians.as_array().unwrap().len(), 2);

    let (_, preventive) = call(&app, get("/api/requests?type=Preventive")).await;
    assert_eq!(preventive.as_array().unwrap().len(), 2);

    let (_, categories) = call(&app, get("/api/equipment-categories")).await;
    let foundry = categories
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Foundry Equipment")
        .unwrap();
    assert_eq!(foundry["equipmentCount"], 2);
    assert_eq!(foundry["responsibleTeamName"], "Mechanics");
}
