#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use nebjtech_contact::{
    EndpointResponse, Field, FormController, HttpSubmissionClient, SubmissionClient,
    TransportError,
};
use tokio::sync::Notify;

/// What the scripted client answers.
#[derive(Clone, Copy)]
pub enum Reply {
    Status(u16),
    Offline,
    Panic,
}

/// In-memory client recording every body it receives.
///
/// With `gated` set, each call signals `entered` and then waits on `release`.
pub struct ScriptedClient {
    reply: Reply,
    gated: bool,
    calls: AtomicUsize,
    bodies: Mutex<Vec<String>>,
    pub entered: Notify,
    pub release: Notify,
}

impl ScriptedClient {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gated: false,
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    pub fn gated(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gated: true,
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionClient for ScriptedClient {
    async fn post_form(&self, body: String) -> Result<EndpointResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body);

        if self.gated {
            self.entered.notify_one();
            self.release.notified().await;
        }

        match self.reply {
            Reply::Status(status) => Ok(EndpointResponse { status }),
            Reply::Offline => Err(offline_error().await),
            Reply::Panic => panic!("endpoint client exploded"),
        }
    }
}

/// A real transport failure: connecting to a port nobody listens on.
pub async fn offline_error() -> TransportError {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpSubmissionClient::new(format!("http://{addr}/"), Duration::from_secs(2))
        .unwrap();

    client.post_form(String::new()).await.unwrap_err()
}

pub fn fill(controller: &FormController) {
    controller.update_field(Field::Name, "Alice").unwrap();
    controller.update_field(Field::Email, "alice@x.com").unwrap();
    controller.update_field(Field::Service, "Site vitrine").unwrap();
    controller
        .update_field(Field::Message, "Need a site")
        .unwrap();
}

pub fn controller(client: Arc<ScriptedClient>) -> Arc<FormController> {
    Arc::new(FormController::new(client))
}
