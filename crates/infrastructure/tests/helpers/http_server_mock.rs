#![allow(dead_code)]
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// `Basic` header for `user:pass`
pub const EXPECTED_AUTH: &str = "Basic dXNlcjpwYXNz";

pub struct MockHttpServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHttpServer {
    pub async fn start(router: Router) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// AdGuard Home stand-in serving a fixed query log body behind basic auth.
pub fn adguard_router(body: Value) -> Router {
    Router::new()
        .route("/control/querylog", get(serve_query_log))
        .with_state(Arc::new(body))
}

async fn serve_query_log(State(body): State<Arc<Value>>, headers: HeaderMap) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == EXPECTED_AUTH)
        .unwrap_or(false);

    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(body.as_ref().clone()).into_response()
}

pub fn status_router(path: &'static str, status: StatusCode) -> Router {
    Router::new().route(path, any(move || async move { status }))
}

pub fn raw_body_router(path: &'static str, body: &'static str) -> Router {
    Router::new().route(path, any(move || async move { body }))
}

#[derive(Clone, Default)]
pub struct IpApiState {
    pub countries: Arc<HashMap<String, (String, String)>>,
    pub requests: Arc<Mutex<Vec<(HashMap<String, String>, Vec<Value>)>>>,
}

impl IpApiState {
    pub fn with_countries(countries: &[(&str, &str, &str)]) -> Self {
        Self {
            countries: Arc::new(
                countries
                    .iter()
                    .map(|(ip, code, name)| (ip.to_string(), (code.to_string(), name.to_string())))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<(HashMap<String, String>, Vec<Value>)> {
        self.requests.lock().unwrap().clone()
    }
}

/// ip-api stand-in for the batch endpoint. Unknown addresses come back as
/// `{"status":"fail"}`.
pub fn ip_api_router(state: IpApiState) -> Router {
    Router::new()
        .route("/batch", post(serve_batch))
        .with_state(state)
}

async fn serve_batch(
    State(state): State<IpApiState>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Vec<Value>>,
) -> Json<Vec<Value>> {
    state
        .requests
        .lock()
        .unwrap()
        .push((params, body.clone()));

    let answers = body
        .iter()
        .map(|item| {
            let query = item["query"].as_str().unwrap_or_default();
            match state.countries.get(query) {
                Some((code, name)) => json!({
                    "status": "success",
                    "countryCode": code,
                    "country": name,
                    "query": query,
                }),
                None => json!({
                    "status": "fail",
                    "query": query,
                }),
            }
        })
        .collect();

    Json(answers)
}

/// Answers `path` with `[]` only after `delay`.
pub fn slow_router(path: &'static str, delay: std::time::Duration) -> Router {
    Router::new().route(
        path,
        any(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!([]))
        }),
    )
}
