//! Canned film catalog served over HTTP for client tests.
//!
//! Every [`StubRoute`] becomes a `GET` route on an axum router; any other
//! path answers 404 with the catalog's `{"detail":"Not found"}` body.

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use holocron_types::FilmRecord;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{film_json, film_list_json};

const NOT_FOUND_BODY: &str = r#"{"detail":"Not found"}"#;

type RequestLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: String,
    pub status: StatusCode,
    pub body: String,
}

impl StubRoute {
    pub fn json(path: impl Into<String>, body: impl ToString) -> Self {
        Self::status(path, 200, body)
    }

    /// Route answering with `status`; codes outside 100..=999 become 500
    pub fn status(path: impl Into<String>, status: u16, body: impl ToString) -> Self {
        Self {
            path: path.into(),
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
        }
    }

    fn into_router(self, router: Router) -> Router {
        let StubRoute { path, status, body } = self;
        router.route(
            &path,
            get(move || {
                let body = body.clone();
                async move { json_response(status, body) }
            }),
        )
    }
}

pub struct StubServer {
    addr: SocketAddr,
    requests: RequestLog,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(routes: Vec<StubRoute>) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests: RequestLog = Arc::new(Mutex::new(Vec::new()));

        let app = routes
            .into_iter()
            .fold(Router::new(), |router, route| route.into_router(router))
            .fallback(|| async { json_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY.to_string()) })
            .layer(middleware::from_fn_with_state(
                Arc::clone(&requests),
                record_request,
            ));

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Serves the given records the way the film catalog does, under `/api`
    pub async fn catalog(records: &[FilmRecord]) -> std::io::Result<Self> {
        let mut routes = vec![StubRoute::json("/api/films", film_list_json(records))];
        for (index, record) in records.iter().enumerate() {
            routes.push(StubRoute::json(
                format!("/api/films/{}", index + 1),
                film_json(record),
            ));
        }
        Self::start(routes).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Paths requested so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_request(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    if let Ok(mut requests) = log.lock() {
        requests.push(request.uri().path().to_string());
    }
    next.run(request).await
}

fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::film_records;

    #[tokio::test]
    async fn test_stub_answers_known_and_unknown_paths() -> anyhow::Result<()> {
        let server = StubServer::catalog(&film_records()).await?;
        let client = reqwest::Client::new();

        let found = client
            .get(format!("{}/films/1", server.base_url()))
            .send()
            .await?;
        assert_eq!(found.status().as_u16(), 200);
        assert_eq!(
            found.headers()["content-type"].to_str()?,
            "application/json"
        );

        let missing = client
            .get(format!("{}/films/9", server.base_url()))
            .send()
            .await?;
        assert_eq!(missing.status().as_u16(), 404);
        assert_eq!(missing.text().await?, NOT_FOUND_BODY);

        assert_eq!(server.requests(), vec!["/api/films/1", "/api/films/9"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_stub_only_answers_get() -> anyhow::Result<()> {
        let server = StubServer::catalog(&film_records()).await?;

        let response = reqwest::Client::new()
            .post(format!("{}/films", server.base_url()))
            .send()
            .await?;

        assert_eq!(response.status().as_u16(), 405);
        Ok(())
    }

    #[test]
    fn test_invalid_status_code_becomes_server_error() {
        let route = StubRoute::status("/api/films", 42, "{}");
        assert_eq!(route.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
