//! End-to-end smoke tests for the full blinkhubd stack.
//!
//! Each test spins up the complete application (temporary asset directory,
//! filesystem storage, virtual outputs, real handlers, real axum router) and
//! exercises the HTTP layer via `tower::ServiceExt::oneshot`. No TCP port is
//! bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use blinkhub_adapter_http_axum::router;
use blinkhub_adapter_http_axum::state::AppState;
use blinkhub_adapter_storage_fs::Config;
use blinkhub_adapter_virtual::VirtualOutputs;
use blinkhub_app::handlers::{self, HandlerConfig};
use blinkhub_app::services::asset_store::AssetStore;
use blinkhub_app::services::device_state::DeviceState;
use blinkhub_app::services::dispatcher::RouteDispatcher;
use blinkhub_domain::asset::AssetName;
use blinkhub_domain::register::{OutputId, RegisterName};

const LED_PIN: OutputId = OutputId::new(2);

struct TestApp {
    router: axum::Router,
    state: Arc<DeviceState<Arc<VirtualOutputs>>>,
    outputs: Arc<VirtualOutputs>,
    dir: tempfile::TempDir,
}

/// Build a fully-wired router serving `index` (when given) from a temporary
/// asset directory.
async fn app(index: Option<&str>) -> TestApp {
    let dir = tempfile::tempdir().expect("temporary directory should be created");
    if let Some(contents) = index {
        std::fs::write(dir.path().join("index.html"), contents).expect("index should be written");
    }

    let source = Config {
        root: dir.path().to_path_buf(),
    }
    .build()
    .await
    .expect("asset storage should open");

    let outputs = Arc::new(VirtualOutputs::with_lines([LED_PIN]));
    let state = Arc::new(
        DeviceState::builder(Arc::clone(&outputs))
            .register("led", LED_PIN, false)
            .build()
            .expect("device state should initialise"),
    );

    let mut dispatcher = RouteDispatcher::new();
    handlers::install(
        &mut dispatcher,
        &Arc::new(AssetStore::new(source)),
        &state,
        &HandlerConfig {
            index: AssetName::new("index.html").unwrap(),
            led: RegisterName::new("led"),
        },
    )
    .expect("routes should register");

    TestApp {
        router: router::build(AppState::new(dispatcher)),
        state,
        outputs,
        dir,
    }
}

impl TestApp {
    async fn send(&self, method: &str, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    fn led(&self) -> bool {
        self.state.get(&RegisterName::new("led")).unwrap()
    }
}

async fn body_string(response: axum::response::Response) -> String {
    String::from_utf8(
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

fn content_type(response: &axum::response::Response) -> String {
    response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app(None).await;
    let response = app.send("GET", "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Status page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_status_page_with_led_off() {
    let app = app(Some("<p>LED is {{LED_STATE}}</p>")).await;

    let response = app.send("GET", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html");
    assert_eq!(body_string(response).await, "<p>LED is OFF</p>");
}

#[tokio::test]
async fn should_answer_head_on_status_page_without_body() {
    let app = app(Some("<p>LED is {{LED_STATE}}</p>")).await;

    let response = app.send("HEAD", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html");
    assert!(body_string(response).await.is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_index_missing() {
    let app = app(None).await;

    let response = app.send("GET", "/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(!body_string(response).await.is_empty());
}

#[tokio::test]
async fn should_pick_up_asset_changes_between_requests() {
    let app = app(Some("v1 {{LED_STATE}}")).await;
    assert_eq!(body_string(app.send("GET", "/").await).await, "v1 OFF");

    std::fs::write(app.dir.path().join("index.html"), "v2 {{LED_STATE}}").unwrap();

    assert_eq!(body_string(app.send("GET", "/").await).await, "v2 OFF");
}

#[tokio::test]
async fn should_keep_unknown_placeholders() {
    let app = app(Some("{{LED_STATE}} {{UPTIME}}")).await;

    let response = app.send("GET", "/").await;

    assert_eq!(body_string(response).await, "OFF {{UPTIME}}");
}

// ---------------------------------------------------------------------------
// LED API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_turn_led_on() {
    let app = app(None).await;

    let response = app.send("POST", "/api/on").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_string(response).await, r#"{"status":"on"}"#);
    assert!(app.led());
    assert_eq!(app.outputs.level(LED_PIN), Some(true));
}

#[tokio::test]
async fn should_answer_identically_when_turned_on_twice() {
    let app = app(None).await;

    let first = body_string(app.send("POST", "/api/on").await).await;
    let second = body_string(app.send("POST", "/api/on").await).await;

    assert_eq!(first, second);
    assert!(app.led());
}

#[tokio::test]
async fn should_turn_led_off() {
    let app = app(None).await;
    app.send("POST", "/api/on").await;

    let response = app.send("POST", "/api/off").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"status":"off"}"#);
    assert!(!app.led());
    assert_eq!(app.outputs.level(LED_PIN), Some(false));
}

#[tokio::test]
async fn should_return_not_found_for_get_on_api() {
    let app = app(None).await;
    let response = app.send("GET", "/api/on").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_path() {
    let app = app(None).await;
    let response = app.send("POST", "/api/toggle").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reflect_led_state_across_on_off_cycle() {
    let app = app(Some("<p>LED is {{LED_STATE}}</p>")).await;
    assert!(!app.led());

    let page = body_string(app.send("GET", "/").await).await;
    assert_eq!(page, "<p>LED is OFF</p>");

    let on = body_string(app.send("POST", "/api/on").await).await;
    assert_eq!(on, r#"{"status":"on"}"#);
    assert!(app.led());

    let page = body_string(app.send("GET", "/").await).await;
    assert_eq!(page, "<p>LED is ON</p>");

    let off = body_string(app.send("POST", "/api/off").await).await;
    assert_eq!(off, r#"{"status":"off"}"#);
    assert!(!app.led());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_settle_on_a_single_state_under_concurrent_requests() {
    let app = Arc::new(app(Some("{{LED_STATE}}")).await);

    let mut tasks = Vec::new();
    for i in 0..32 {
        let app = Arc::clone(&app);
        let uri = if i % 2 == 0 { "/api/on" } else { "/api/off" };
        tasks.push(tokio::spawn(async move { app.send("POST", uri).await.status() }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let value = app.led();
    assert_eq!(app.outputs.level(LED_PIN), Some(value));
    let page = body_string(app.send("GET", "/").await).await;
    assert_eq!(page, if value { "ON" } else { "OFF" });
}
