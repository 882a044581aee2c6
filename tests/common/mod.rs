//! In-process mock of a Mozhi mirror for integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// How the mock answers every request.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 with well-formed bodies.
    Healthy { translation: String },
    /// The given status with an empty body.
    Status(StatusCode),
    /// 200 with a body that is not the expected JSON.
    Malformed,
}

#[derive(Clone)]
struct MirrorState {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Path and decoded query of one request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

pub struct MockMirror {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockMirror {
    pub async fn spawn(behavior: Behavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MirrorState {
            behavior,
            requests: Arc::clone(&requests),
        };

        let app = Router::new()
            .route("/api/source_languages", get(source_languages))
            .route("/api/translate", get(translate))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, requests }
    }

    pub async fn healthy(translation: &str) -> Self {
        Self::spawn(Behavior::Healthy {
            translation: translation.to_string(),
        })
        .await
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl MirrorState {
    fn record(&self, path: &str, query: HashMap<String, String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.to_string(),
            query,
        });
    }

    fn respond(&self, healthy_body: impl FnOnce(&str) -> String) -> Response {
        match &self.behavior {
            Behavior::Healthy { translation } => (
                StatusCode::OK,
                [("content-type", "application/json")],
                healthy_body(translation),
            )
                .into_response(),
            Behavior::Status(status) => (*status).into_response(),
            Behavior::Malformed => (StatusCode::OK, "<html>not json</html>").into_response(),
        }
    }
}

async fn source_languages(
    State(state): State<MirrorState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record("/api/source_languages", query);
    state.respond(|_| {
        r#"[{"Name":"English","Id":"en"},{"Name":"French","Id":"fr"}]"#.to_string()
    })
}

async fn translate(
    State(state): State<MirrorState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.record("/api/translate", query);
    state.respond(|translation| {
        serde_json::json!({
            "engine": "google",
            "translated-text": translation,
        })
        .to_string()
    })
}
