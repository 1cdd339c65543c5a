//! Contact Intake Tests
//!
//! End-to-end tests for `POST /api/contact` through the full router:
//! - Every rule rejects with 400 and stores nothing
//! - Valid submissions are stored verbatim with server-assigned id and timestamp
//! - Identical submissions are never deduplicated
//! - Storage failures return a generic 500 and log the cause

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

use transexpress::contact::{ContactSubmission, NewContactSubmission};
use transexpress::http_server::{HttpServer, HttpServerConfig};
use transexpress::locale::Locale;
use transexpress::storage::{
    MemorySubmissionStore, StorageError, StorageResult, SubmissionStore,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn app(store: Arc<dyn SubmissionStore>, locale: Locale) -> Router {
    HttpServer::new(HttpServerConfig::default(), store, locale)
        .unwrap()
        .router()
}

fn memory_app() -> (Arc<MemorySubmissionStore>, Router) {
    let store = Arc::new(MemorySubmissionStore::new());
    let router = app(store.clone(), Locale::Pl);
    (store, router)
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post_contact(router: &Router, body: &Value) -> (StatusCode, Value) {
    send(router, Method::POST, "/api/contact", Some(body.to_string())).await
}

fn scenario_a() -> Value {
    json!({
        "name": "Jan Kowalski",
        "phone": "+48796691959",
        "email": "jan@example.com",
        "serviceType": "home-moving",
        "message": "Proszę o wycenę przeprowadzki."
    })
}

fn with(field: &str, value: Value) -> Value {
    let mut body = scenario_a();
    body[field] = value;
    body
}

fn violated_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

/// Store that is always unreachable
struct UnavailableStore;

#[async_trait]
impl SubmissionStore for UnavailableStore {
    async fn insert(&self, _submission: NewContactSubmission) -> StorageResult<ContactSubmission> {
        Err(StorageError::Unavailable(
            "connection refused (os error 111)".into(),
        ))
    }

    async fn ping(&self) -> StorageResult<()> {
        Err(StorageError::Unavailable(
            "connection refused (os error 111)".into(),
        ))
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

/// Memory store that rejects an over-long phone the way the `VARCHAR(20)`
/// column does
#[derive(Default)]
struct PhoneWidthStore {
    inner: MemorySubmissionStore,
}

#[async_trait]
impl SubmissionStore for PhoneWidthStore {
    async fn insert(&self, submission: NewContactSubmission) -> StorageResult<ContactSubmission> {
        if submission.phone.chars().count() > 20 {
            return Err(StorageError::Constraint(
                "value too long for type character varying(20)".into(),
            ));
        }
        self.inner.insert(submission).await
    }

    async fn ping(&self) -> StorageResult<()> {
        self.inner.ping().await
    }

    fn backend(&self) -> &'static str {
        "phone-width"
    }
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// =============================================================================
// Accepted Submissions
// =============================================================================

/// Scenario A: valid submission is stored with exact field values.
#[tokio::test]
async fn test_valid_submission_is_created() {
    let (store, router) = memory_app();
    let before = Utc::now();

    let (status, body) = post_contact(&router, &scenario_a()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Dziękujemy za wiadomość! Skontaktujemy się wkrótce."
    );
    let id = body["id"].as_i64().expect("numeric id");

    let rows = store.submissions();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(i64::from(row.id), id);
    assert_eq!(row.name, "Jan Kowalski");
    assert_eq!(row.phone, "+48796691959");
    assert_eq!(row.email, "jan@example.com");
    assert_eq!(row.service_type, "home-moving");
    assert_eq!(row.message, "Proszę o wycenę przeprowadzki.");
    assert!(row.created_at >= before && row.created_at <= Utc::now());
}

/// Identical payloads produce distinct rows with distinct ids.
#[tokio::test]
async fn test_identical_submissions_are_not_deduplicated() {
    let (store, router) = memory_app();

    let (first_status, first) = post_contact(&router, &scenario_a()).await;
    let (second_status, second) = post_contact(&router, &scenario_a()).await;

    assert_eq!(first_status, StatusCode::CREATED);
    assert_eq!(second_status, StatusCode::CREATED);
    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.len(), 2);
}

/// The server does not enforce the dropdown categories.
#[tokio::test]
async fn test_unknown_service_type_is_accepted() {
    let (store, router) = memory_app();

    let (status, _) = post_contact(&router, &with("serviceType", json!("piano-transport"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.submissions()[0].service_type, "piano-transport");
}

/// Fields not in the schema are dropped, not stored or rejected.
#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let (store, router) = memory_app();
    let mut body = scenario_a();
    body["id"] = json!(12345);
    body["createdAt"] = json!("1999-01-01T00:00:00Z");

    let (status, response) = post_contact(&router, &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(response["id"], json!(12345));
    assert!(store.submissions()[0].created_at.timestamp() > 946_684_800);
}

// =============================================================================
// Rejected Submissions
// =============================================================================

/// Scenario B: one-character name is rejected on `name`.
#[tokio::test]
async fn test_short_name_is_rejected() {
    let (store, router) = memory_app();
    let body = json!({
        "name": "J",
        "phone": "123456789",
        "email": "jan@example.com",
        "serviceType": "home-moving",
        "message": "Proszę o wycenę przeprowadzki."
    });

    let (status, response) = post_contact(&router, &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Nieprawidłowe dane formularza");
    assert_eq!(violated_fields(&response), vec!["name"]);
    assert_eq!(response["errors"][0]["code"], "too_small");
    assert!(store.is_empty());
}

/// Each rule rejects its own field and nothing is stored.
#[tokio::test]
async fn test_each_rule_rejects_and_stores_nothing() {
    let cases = [
        ("name", json!("")),
        ("name", json!("A")),
        ("phone", json!("")),
        ("phone", json!("12345678")),
        ("email", json!("")),
        ("email", json!("jan.example.com")),
        ("email", json!("jan@")),
        ("email", json!("@example.com")),
        ("email", json!("Jan Kowalski <jan@example.com>")),
        ("email", json!("\"jan kowalski\"@example.com")),
        ("email", json!("jan@[127.0.0.1]")),
        ("email", json!("jan@localhost")),
        ("email", json!("jan@example")),
        ("serviceType", json!("")),
        ("message", json!("")),
        ("message", json!("123456789")),
    ];

    for (field, value) in cases {
        let (store, router) = memory_app();
        let (status, response) = post_contact(&router, &with(field, value.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} = {}", field, value);
        assert_eq!(violated_fields(&response), vec![field.to_string()]);
        assert!(store.is_empty(), "{} = {} was stored", field, value);
    }
}

/// All violations are returned together, in field order.
#[tokio::test]
async fn test_all_violations_reported_together() {
    let (store, router) = memory_app();
    let body = json!({
        "name": "J",
        "phone": "123",
        "email": "nope",
        "serviceType": "",
        "message": "hi"
    });

    let (status, response) = post_contact(&router, &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        violated_fields(&response),
        vec!["name", "phone", "email", "serviceType", "message"]
    );
    assert!(store.is_empty());
}

/// Missing fields are reported as required.
#[tokio::test]
async fn test_missing_fields_are_required() {
    let store = Arc::new(MemorySubmissionStore::new());
    let router = app(store.clone(), Locale::En);

    let (status, response) = post_contact(&router, &json!({ "name": "Jan Kowalski" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Invalid form data");
    assert_eq!(
        violated_fields(&response),
        vec!["phone", "email", "serviceType", "message"]
    );
    for error in response["errors"].as_array().unwrap() {
        assert_eq!(error["code"], "invalid_type");
        assert_eq!(error["message"], "Required");
    }
    assert!(store.is_empty());
}

/// Bodies that are not JSON objects are malformed form data.
#[tokio::test]
async fn test_non_object_bodies_are_rejected() {
    let (store, router) = memory_app();

    for raw in ["", "not json", "[1,2,3]", "\"Jan Kowalski\""] {
        let (status, response) =
            send(&router, Method::POST, "/api/contact", Some(raw.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {:?}", raw);
        assert_eq!(response["errors"][0]["field"], "");
        assert_eq!(response["errors"][0]["code"], "invalid_type");
    }

    assert!(store.is_empty());
}

// =============================================================================
// Storage Failures
// =============================================================================

/// Scenario C: unavailable storage yields a generic 500 and a logged cause.
#[tokio::test]
async fn test_storage_failure_is_generic_and_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let router = app(Arc::new(UnavailableStore), Locale::Pl);
    let (status, response) = post_contact(&router, &scenario_a()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response,
        json!({ "message": "Wystąpił błąd podczas przetwarzania formularza" })
    );

    let output = logs.contents();
    assert!(output.contains("SUBMISSION_FAILED"), "logs: {}", output);
    assert!(output.contains("connection refused"), "logs: {}", output);
}

/// A phone longer than its column passes validation; only a width-enforcing
/// store turns it into a 500.
#[tokio::test]
async fn test_over_long_phone_depends_on_store_widths() {
    let body = with("phone", json!("1".repeat(21)));

    let (memory, router) = memory_app();
    let (status, _) = post_contact(&router, &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(memory.len(), 1);

    let router = app(Arc::new(PhoneWidthStore::default()), Locale::Pl);
    let (status, response) = post_contact(&router, &body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.get("errors").is_none());
}

/// Validation runs before storage, so a bad payload is a 400 even when
/// storage is down.
#[tokio::test]
async fn test_validation_precedes_storage() {
    let router = app(Arc::new(UnavailableStore), Locale::Pl);

    let (status, response) = post_contact(&router, &with("email", json!("invalid"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(violated_fields(&response), vec!["email"]);
}

// =============================================================================
// Read-only Lookups
// =============================================================================

#[tokio::test]
async fn test_schema_endpoint_publishes_rules() {
    let (_store, router) = memory_app();

    let (status, body) = send(&router, Method::GET, "/api/contact/schema", None).await;

    assert_eq!(status, StatusCode::OK);
    let rules = body.as_array().unwrap();
    assert_eq!(rules.len(), 5);
    assert_eq!(rules[0], json!({
        "field": "name",
        "rule": "minLength",
        "value": 2,
        "message": "Imię i nazwisko musi mieć co najmniej 2 znaki"
    }));
    assert_eq!(rules[1]["value"], 9);
    assert_eq!(rules[2]["rule"], "email");
    assert_eq!(rules[3]["field"], "serviceType");
    assert_eq!(rules[4]["value"], 10);
}

#[tokio::test]
async fn test_service_types_are_localized() {
    let router = app(Arc::new(MemorySubmissionStore::new()), Locale::Ru);

    let (status, body) = send(&router, Method::GET, "/api/service-types", None).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0], json!({ "value": "home-moving", "label": "Переезд квартиры" }));
    assert_eq!(entries[4]["value"], "other");
}
