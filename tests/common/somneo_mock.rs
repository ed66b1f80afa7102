//! WireMock-based Somneo and InfluxDB mocking infrastructure
//!
//! Simulates the device status endpoint and the InfluxDB 1.x HTTP API so
//! the exporter can be exercised without hardware or a running database.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Status endpoint the exporter polls
pub const SENSOR_PATH: &str = "/di/v1/products/1/wusrd";

/// Mock Somneo device for testing
pub struct MockSomneo {
    pub server: MockServer,
}

impl MockSomneo {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve a fixed sensor payload on the status endpoint
    pub async fn with_sensor_data(self, body: Value) -> Self {
        Mock::given(method("GET"))
            .and(path(SENSOR_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Answer the status endpoint with a bare HTTP status
    pub async fn with_status(self, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path(SENSOR_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Mock InfluxDB 1.x server (`/query` for admin, `/write` for ingest)
pub struct MockInflux {
    pub server: MockServer,
}

impl MockInflux {
    /// Start with the target database already listed and writes accepted
    pub async fn start() -> Self {
        let influx = Self {
            server: MockServer::start().await,
        };

        Mock::given(path("/query"))
            .and(query_param("q", "SHOW DATABASES"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(show_databases_body(&["sensors"])),
            )
            .mount(&influx.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/write"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&influx.server)
            .await;

        influx
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Line protocol bodies of all writes received so far
    pub async fn write_bodies(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/write")
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }
}

/// Body of a `SHOW DATABASES` response listing `names`
pub fn show_databases_body(names: &[&str]) -> Value {
    json!({
        "results": [{
            "statement_id": 0,
            "series": [{
                "name": "databases",
                "columns": ["name"],
                "values": names.iter().map(|n| vec![json!(n)]).collect::<Vec<_>>(),
            }]
        }]
    })
}
