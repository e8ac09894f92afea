//! Shared helpers for integration tests against a stubbed WakaTime API.

#![allow(dead_code)]

use std::sync::Once;

use wakatime::{ClientConfig, WakaTimeClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub use wiremock::Request;

/// Path prefix the stub server mounts the API under.
pub const API_PREFIX: &str = "/api/v1";

static TRACING: Once = Once::new();

/// Route client logs through the test harness. Set `RUST_LOG=wakatime=trace`
/// to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Read a JSON fixture from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("fixture {path}: {e}"))
}

/// Config pointing at `server` with the API mounted under [`API_PREFIX`].
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: format!("{}{API_PREFIX}/", server.uri()),
        ..Default::default()
    }
}

/// Start a stub server and a client talking to it.
pub async fn setup() -> (MockServer, WakaTimeClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = WakaTimeClient::new(config_for(&server)).expect("client should build");
    (server, client)
}

/// Answer `GET {API_PREFIX}/{endpoint}` with the named fixture.
pub async fn mount_fixture(server: &MockServer, endpoint: &str, fixture_name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/{endpoint}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixture(fixture_name), "application/json"),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// The single request the server received.
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
