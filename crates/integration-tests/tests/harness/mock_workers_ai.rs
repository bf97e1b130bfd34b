//! Mock Workers AI backend for integration tests
//!
//! Serves `POST /client/v4/accounts/{account}/ai/run/{*model}` with a canned
//! reply and records every request it sees

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Clone)]
pub enum Reply {
    /// Successful run envelope; `mime_type` is omitted when `None`
    Audio { audio: String, mime_type: Option<String> },
    /// Non-2xx status with a plain-text body
    Status(u16, String),
    /// 200 with an arbitrary body
    Raw(String),
}

impl Reply {
    pub fn audio(audio: &str, mime_type: &str) -> Self {
        Self::Audio {
            audio: audio.to_owned(),
            mime_type: Some(mime_type.to_owned()),
        }
    }
}

/// One request as the mock received it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub account: String,
    pub model: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockWorkersAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockWorkersAi {
    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(
                "/client/v4/accounts/{account}/ai/run/{*model}",
                routing::post(handle_run),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.cancelled().await })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the backend
    pub fn base_url(&self) -> String {
        format!("http://{}/client/v4/accounts", self.addr)
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("mock state lock").len()
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.state.requests.lock().expect("mock state lock").last().cloned()
    }
}

impl Drop for MockWorkersAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_run(
    State(state): State<Arc<MockState>>,
    Path((account, model)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let recorded = Recorded {
        account,
        model: model.trim_start_matches('/').to_owned(),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    };
    state.requests.lock().expect("mock state lock").push(recorded);

    match &state.reply {
        Reply::Audio { audio, mime_type } => {
            let mut result = serde_json::json!({ "audio": audio });
            if let Some(mime_type) = mime_type {
                result["mime_type"] = serde_json::Value::from(mime_type.as_str());
            }
            axum::Json(serde_json::json!({ "result": result, "success": true })).into_response()
        }
        Reply::Status(code, text) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, text.clone()).into_response()
        }
        Reply::Raw(body) => (StatusCode::OK, body.clone()).into_response(),
    }
}
