//! Shared setup for the HTTP integration tests: a stub form endpoint and an
//! app wired to it.

#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use nebjtech::{
    AppState, Config,
    config::{ContactConfig, LoggingConfig, ServerConfig, SessionConfig},
};
use tower::ServiceExt;

#[derive(Clone)]
struct EndpointState {
    status: StatusCode,
    delay: Duration,
    bodies: Arc<Mutex<Vec<String>>>,
}

/// Form-handling endpoint answering every POST with a fixed status.
pub struct Endpoint {
    pub url: String,
    bodies: Arc<Mutex<Vec<String>>>,
}

impl Endpoint {
    pub async fn start(status: u16) -> anyhow::Result<Self> {
        Self::start_with_delay(status, Duration::ZERO).await
    }

    pub async fn start_with_delay(status: u16, delay: Duration) -> anyhow::Result<Self> {
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let state = EndpointState {
            status: StatusCode::from_u16(status)?,
            delay,
            bodies: bodies.clone(),
        };

        let app = Router::new()
            .route("/", post(receive))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/", listener.local_addr()?);

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { url, bodies })
    }

    /// Address nothing listens on, every submission fails to connect.
    pub async fn unreachable() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}/", listener.local_addr()?);
        drop(listener);

        Ok(Self {
            url,
            bodies: Arc::default(),
        })
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }
}

async fn receive(State(state): State<EndpointState>, body: String) -> StatusCode {
    state.bodies.lock().unwrap().push(body);
    tokio::time::sleep(state.delay).await;

    state.status
}

pub fn test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        contact: ContactConfig {
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
        },
        session: SessionConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn test_app(endpoint: &Endpoint) -> anyhow::Result<Router> {
    let state = AppState::from_config(test_config(&endpoint.url))?;

    Ok(nebjtech::app(state))
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response<Body>> {
    Ok(app.clone().oneshot(request).await?)
}

/// `name=value` pair of the session cookie set by a response.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("nebj_session="))
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
}

/// Opens a session the way a browser does, by loading the page.
pub async fn open_session(app: &Router) -> anyhow::Result<String> {
    let response = send(app, get("/")).await?;

    session_cookie(&response).ok_or_else(|| anyhow::anyhow!("no session cookie"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Urlencoded POST carrying the session cookie, optionally as an enhanced `ts-request`.
pub fn post_form(uri: &str, cookie: &str, fields: &[(&str, &str)], twinspark: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, cookie);

    if twinspark {
        builder = builder.header("ts-request", "true");
    }

    let body = serde_urlencoded::to_string(fields).unwrap();

    builder.body(Body::from(body)).unwrap()
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub const ALICE: &[(&str, &str)] = &[
    ("name", "Alice"),
    ("email", "alice@x.com"),
    ("service", "Site vitrine"),
    ("message", "Need a site"),
];
