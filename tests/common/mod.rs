#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::Value;

use reel::ui::App;

/// What the mock backend saw
#[derive(Clone, Default)]
pub struct Recorded {
    pub bodies: Arc<Mutex<Vec<Value>>>,
    pub request_ids: Arc<Mutex<Vec<String>>>,
}

impl Recorded {
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.request_ids.lock().unwrap().clone()
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Starts a backend whose `/recommend` always answers `status` with `body`
pub async fn spawn_backend(status: StatusCode, body: &str) -> (String, Recorded) {
    let recorded = Recorded::default();
    let body = body.to_string();

    let router = Router::new()
        .route(
            "/recommend",
            post(
                move |State(recorded): State<Recorded>,
                      headers: HeaderMap,
                      Json(request): Json<Value>| {
                    let body = body.clone();
                    async move {
                        recorded.bodies.lock().unwrap().push(request);
                        if let Some(id) = headers.get("x-request-id").and_then(|h| h.to_str().ok()) {
                            recorded.request_ids.lock().unwrap().push(id.to_string());
                        }
                        (status, [(header::CONTENT_TYPE, "application/json")], body)
                    }
                },
            ),
        )
        .with_state(recorded.clone());

    (serve(router).await, recorded)
}

/// Starts a backend that answers after `delay` when the title starts with "Slow",
/// echoing the title back as the only recommendation
pub async fn spawn_echo_backend(delay: Duration) -> String {
    let router = Router::new().route(
        "/recommend",
        post(move |Json(request): Json<Value>| async move {
            let title = request["title"].as_str().unwrap_or_default().to_string();
            if title.starts_with("Slow") {
                tokio::time::sleep(delay).await;
            }
            Json(serde_json::json!({
                "recommendations": [
                    {"title": format!("Like {}", title), "description": "echo", "similarity": 0.5}
                ]
            }))
        }),
    );

    serve(router).await
}

/// Address where nothing is listening
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Renders the app and returns the screen as text, one line per row
pub fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(usize::from(width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
