//! Router-level integration tests for the task API.
//!
//! Every test drives the real axum router over the in-memory repository,
//! exercising the documented resource-mapping contract end to end.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes JSON values whose shape is asserted"
)]
#![expect(
    clippy::cognitive_complexity,
    reason = "Test functions may have higher complexity for full scenario coverage"
)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::Value;
use std::sync::Arc;
use taskboard::http::{ApiState, build_router};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::domain::{Task, TaskFields, TaskId};
use taskboard::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use taskboard::task::services::TaskCrudService;
use tower::ServiceExt;

fn router_over<R: TaskRepository + 'static>(repository: R, strict_body: bool) -> Router {
    let service = TaskCrudService::new(Arc::new(repository), Arc::new(DefaultClock));
    build_router(ApiState {
        service,
        strict_body,
    })
}

#[fixture]
fn router() -> Router {
    router_over(InMemoryTaskRepository::new(), false)
}

#[fixture]
fn strict_router() -> Router {
    router_over(InMemoryTaskRepository::new(), true)
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |payload| Body::from(payload.to_owned())))
        .expect("request should build");
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router should produce a response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).expect("body should be utf-8");
    (status, text)
}

/// Parses a response body as JSON.
///
/// # Errors
///
/// Returns an error when the body is not valid JSON.
fn parse_json(body: &str) -> Result<Value, eyre::Report> {
    serde_json::from_str(body).map_err(|err| eyre::eyre!("invalid JSON body {body:?}: {err}"))
}

async fn create_task(router: &Router, payload: &str) -> String {
    let (status, body) = send(router, "POST", "/tasks", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let ack = parse_json(&body).expect("creation acknowledgment should be JSON");
    ack["inserted_id"]
        .as_str()
        .expect("acknowledgment should carry the generated id")
        .to_owned()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips(router: Router) {
    let id = create_task(&router, r#"{"title":"Task 1","description":"First task"}"#).await;
    assert_eq!(id.len(), 32);

    let (status, body) = send(&router, "GET", &format!("/tasks/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    let task = parse_json(&body).expect("task should be JSON");
    assert_eq!(task["id"], Value::String(id));
    assert_eq!(task["title"], Value::String("Task 1".to_owned()));
    assert_eq!(task["description"], Value::String("First task".to_owned()));
    assert_eq!(task["status"], Value::String(String::new()));
    assert!(task.get("created_at").is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_collection_returns_empty_array(router: Router) {
    let (status, body) = send(&router, "GET", "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        parse_json(&body).expect("list should be JSON"),
        Value::Array(Vec::new())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_every_created_task(router: Router) {
    let mut created_ids = vec![
        create_task(&router, r#"{"title":"a"}"#).await,
        create_task(&router, r#"{"title":"b"}"#).await,
        create_task(&router, r#"{"title":"c"}"#).await,
    ];

    let (status, body) = send(&router, "GET", "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    let listed = parse_json(&body).expect("list should be JSON");
    let mut listed_ids: Vec<String> = listed
        .as_array()
        .expect("list should be an array")
        .iter()
        .map(|task| {
            task["id"]
                .as_str()
                .expect("each entry should carry an id")
                .to_owned()
        })
        .collect();

    listed_ids.sort();
    created_ids.sort();
    assert_eq!(listed_ids, created_ids);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn success_responses_are_json(router: Router) {
    let request = Request::builder()
        .method("GET")
        .uri("/tasks")
        .body(Body::empty())
        .expect("request should build");
    let response = router
        .oneshot(request)
        .await
        .expect("router should produce a response");

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type should be set");
    assert_eq!(content_type, "application/json");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_with_well_formed_unassigned_id_returns_404(router: Router) {
    let unassigned = "0".repeat(32);
    let (status, _) = send(&router, "GET", &format!("/tasks/{unassigned}"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case::objectid_length("000000000000000000000000")]
#[case::word("not-an-id")]
#[case::short_hex("deadbeef")]
#[tokio::test(flavor = "multi_thread")]
async fn get_with_malformed_id_returns_404_never_500(router: Router, #[case] raw_id: &str) {
    let (status, body) = send(&router, "GET", &format!("/tasks/{raw_id}"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("malformed task identifier"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_echoes_submission_and_persists_fields(router: Router) {
    let id = create_task(&router, r#"{"title":"Original","description":"x"}"#).await;
    let (_, original_body) = send(&router, "GET", &format!("/tasks/{id}"), None).await;
    let original = parse_json(&original_body).expect("task should be JSON");

    let payload = r#"{"title":"Updated","description":"d","status":"done"}"#;
    let (status, body) = send(&router, "PUT", &format!("/tasks/{id}"), Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    let echo = parse_json(&body).expect("echo should be JSON");
    assert_eq!(echo["title"], Value::String("Updated".to_owned()));
    assert_eq!(echo["description"], Value::String("d".to_owned()));
    assert_eq!(echo["status"], Value::String("done".to_owned()));
    // The echo carries the submitted fields only, never identity.
    assert!(echo.get("id").is_none());

    let (_, stored_body) = send(&router, "GET", &format!("/tasks/{id}"), None).await;
    let stored = parse_json(&stored_body).expect("task should be JSON");
    assert_eq!(stored["title"], Value::String("Updated".to_owned()));
    assert_eq!(stored["id"], original["id"]);
    assert_eq!(stored["created_at"], original["created_at"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_against_unknown_id_is_a_no_op_success(router: Router) {
    let unknown = TaskId::new();
    let payload = r#"{"title":"ghost","description":"","status":""}"#;
    let (status, body) = send(&router, "PUT", &format!("/tasks/{unknown}"), Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    let echo = parse_json(&body).expect("echo should be JSON");
    assert_eq!(echo["title"], Value::String("ghost".to_owned()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_against_malformed_id_is_a_no_op_success(router: Router) {
    let payload = r#"{"title":"ghost"}"#;
    let (status, _) = send(&router, "PUT", "/tasks/not-an-id", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_task_and_confirms(router: Router) {
    let id = create_task(&router, r#"{"title":"Doomed"}"#).await;

    let (status, body) = send(&router, "DELETE", &format!("/tasks/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    let confirmation = parse_json(&body).expect("confirmation should be JSON");
    assert_eq!(
        confirmation["message"],
        Value::String("Task deleted successfully".to_owned())
    );

    let (status_after, _) = send(&router, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(status_after, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent(router: Router) {
    let id = create_task(&router, r#"{"title":"Doomed"}"#).await;

    let (first, _) = send(&router, "DELETE", &format!("/tasks/{id}"), None).await;
    let (second, _) = send(&router, "DELETE", &format!("/tasks/{id}"), None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_mode_treats_malformed_body_as_zero_valued_task(router: Router) {
    let (status, body) = send(&router, "POST", "/tasks", Some("definitely not json")).await;

    assert_eq!(status, StatusCode::OK);
    let ack = parse_json(&body).expect("acknowledgment should be JSON");
    let id = ack["inserted_id"]
        .as_str()
        .expect("acknowledgment should carry the generated id");

    let (_, stored_body) = send(&router, "GET", &format!("/tasks/{id}"), None).await;
    let stored = parse_json(&stored_body).expect("task should be JSON");
    assert_eq!(stored["title"], Value::String(String::new()));
    assert_eq!(stored["description"], Value::String(String::new()));
    assert_eq!(stored["status"], Value::String(String::new()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lenient_mode_accepts_empty_body(router: Router) {
    let (status, _) = send(&router, "POST", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_mode_rejects_malformed_create_body(strict_router: Router) {
    let (status, _) = send(&strict_router, "POST", "/tasks", Some("definitely not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_mode_rejects_malformed_update_body(strict_router: Router) {
    let id = create_task(&strict_router, r#"{"title":"kept"}"#).await;
    let (status, _) = send(
        &strict_router,
        "PUT",
        &format!("/tasks/{id}"),
        Some("definitely not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_mode_accepts_well_formed_body(strict_router: Router) {
    let (status, _) = send(
        &strict_router,
        "POST",
        "/tasks",
        Some(r#"{"title":"fine","description":"","status":"open"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok(router: Router) {
    let (status, body) = send(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let probe = parse_json(&body).expect("probe should be JSON");
    assert_eq!(probe["status"], Value::String("ok".to_owned()));
}

/// Repository that fails every operation, for status-mapping coverage.
#[derive(Debug, Default, Clone)]
struct FailingTaskRepository;

fn refused() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection refused"))
}

#[async_trait::async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Err(refused())
    }

    async fn find_by_id(&self, _id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        Err(refused())
    }

    async fn insert(&self, _task: &Task) -> TaskRepositoryResult<()> {
        Err(refused())
    }

    async fn update_fields(&self, _id: TaskId, _fields: &TaskFields) -> TaskRepositoryResult<()> {
        Err(refused())
    }

    async fn delete_by_id(&self, _id: TaskId) -> TaskRepositoryResult<()> {
        Err(refused())
    }
}

#[rstest]
#[case::list("GET", "/tasks", None)]
#[case::create("POST", "/tasks", Some(r#"{"title":"t"}"#))]
#[case::update("PUT", "/tasks/{id}", Some(r#"{"title":"t"}"#))]
#[case::delete("DELETE", "/tasks/{id}", None)]
#[tokio::test(flavor = "multi_thread")]
async fn storage_failures_map_to_500_with_plain_text_body(
    #[case] method: &str,
    #[case] uri_template: &str,
    #[case] payload: Option<&str>,
) {
    let failing = router_over(FailingTaskRepository, false);
    let uri = uri_template.replace("{id}", &TaskId::new().to_string());

    let (status, body) = send(&failing, method, &uri, payload).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("persistence error"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_storage_failure_maps_to_404() {
    let failing = router_over(FailingTaskRepository, false);
    let uri = format!("/tasks/{}", TaskId::new());

    let (status, body) = send(&failing, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("persistence error"));
}
