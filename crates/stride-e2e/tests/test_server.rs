// Local double of the membership-agreement validation endpoint
//
// Serves the staging contract on a loopback port: the POST path carries a
// percent-encoded base64 blob of the member record, the body carries the
// same record as JSON, and a good request gets the decoded record echoed
// back. A second route answers 500 for the failure-path scenarios.

#![allow(dead_code)]

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/membership-agreement/validate/{blob}", post(validate))
            .route("/membership-agreement/broken/{blob}", post(broken));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        TestServer { addr, handle }
    }

    /// Base URL in the shape the fixture's `membership_agreement_url` has.
    pub fn validate_url(&self) -> String {
        format!("http://{}/membership-agreement/validate/", self.addr)
    }

    /// Base URL for the route that always answers 500.
    pub fn broken_url(&self) -> String {
        format!("http://{}/membership-agreement/broken/", self.addr)
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

async fn validate(Path(blob): Path<String>, Json(body): Json<Value>) -> Response {
    // The router matches the raw path, so the percent-decoded segment here
    // is the blob exactly as the client base64-encoded it.
    let decoded = match BASE64_STANDARD.decode(blob.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, format!("blob is not base64: {e}")).into_response();
        }
    };
    let record: Value = match serde_json::from_slice(&decoded) {
        Ok(value) => value,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, format!("blob is not JSON: {e}")).into_response();
        }
    };
    if body != record {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "request body does not match the URL blob".to_string(),
        )
            .into_response();
    }
    Json(record).into_response()
}

async fn broken(Path(_blob): Path<String>, Json(_body): Json<Value>) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "validation backend unavailable").into_response()
}
