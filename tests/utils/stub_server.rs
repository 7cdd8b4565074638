/// Local stand-ins for the upstream services
///
/// Each stub is a small axum app bound to an ephemeral port on loopback, so
/// adapters and the full server can be exercised with the real HTTP client.
use axum::{
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Serve `router` on 127.0.0.1 and return its base URL
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub upstream");
    let address = listener.local_addr().expect("stub upstream address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", address)
}

/// Request counter shared between a stub handler and the test
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// GET handler answering with `body`
pub fn json_handler(body: Value, hits: HitCounter) -> MethodRouter {
    get(move || {
        let body = body.clone();
        let hits = hits.clone();
        async move {
            hits.hit();
            Json(body)
        }
    })
}

/// GET handler answering with `body` after `delay`
pub fn slow_json_handler(body: Value, delay: Duration) -> MethodRouter {
    get(move || {
        let body = body.clone();
        async move {
            tokio::time::sleep(delay).await;
            Json(body)
        }
    })
}

/// GET handler answering with a bare status code
pub fn status_handler(status: StatusCode, hits: HitCounter) -> MethodRouter {
    get(move || {
        let hits = hits.clone();
        async move {
            hits.hit();
            status
        }
    })
}

/// GET handler answering 200 with a non-JSON body
pub fn text_handler(body: &'static str) -> MethodRouter {
    get(move || async move { body })
}
