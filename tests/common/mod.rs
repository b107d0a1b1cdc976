#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub const IPO_PATH: &str = "/api/v1/calendar/ipo";

/// Canned stand-in for the Finnhub IPO endpoint.
pub struct Upstream {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    hits: AtomicUsize,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

impl Upstream {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
            hits: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }

    /// Serves on an ephemeral port and returns the full endpoint URL.
    pub async fn serve(self: &Arc<Self>) -> String {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let router = Router::new()
            .route(IPO_PATH, get(handle_ipo))
            .with_state(Arc::clone(self));

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}{IPO_PATH}")
    }
}

async fn handle_ipo(
    State(upstream): State<Arc<Upstream>>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    upstream.queries.lock().unwrap().push(query);

    if let Some(delay) = upstream.delay {
        tokio::time::sleep(delay).await;
    }

    (upstream.status, upstream.body.clone())
}

pub const ACME: &str = r#"{
    "symbol": "ABC",
    "date": "2024-05-01",
    "name": "Acme",
    "numberOfShares": 12000000,
    "price": "18-21",
    "exchange": "NASDAQ",
    "status": "expected",
    "totalSharesValue": 234000000
}"#;

pub fn calendar_body(records: &[&str]) -> String {
    format!(r#"{{"ipoCalendar": [{}]}}"#, records.join(","))
}
