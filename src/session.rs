//! Visitor sessions.
//!
//! A session stands in for one browser page lifetime: it is opened by a page
//! load and owns a single [`FormController`]. Nothing is persisted.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use nebjtech_contact::{FormController, SubmissionClient};

pub const SESSION_COOKIE: &str = "nebj_session";

struct Entry {
    controller: Arc<FormController>,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    client: Arc<dyn SubmissionClient>,
    ttl: Duration,
    max_sessions: usize,
    cookie_secure: bool,
}

impl SessionStore {
    pub fn new(
        client: Arc<dyn SubmissionClient>,
        config: &crate::config::SessionConfig,
    ) -> Self {
        Self {
            entries: Arc::default(),
            client,
            ttl: Duration::from_secs(config.ttl_secs),
            max_sessions: config.max_sessions,
            cookie_secure: config.cookie_secure,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a fresh session, as a page load does.
    pub fn open(&self) -> (String, Arc<FormController>) {
        let now = Instant::now();
        let mut entries = self.lock();
        self.prune(&mut entries, now);

        let id = ulid::Ulid::new().to_string();
        let controller = Arc::new(FormController::new(self.client.clone()));
        entries.insert(
            id.to_owned(),
            Entry {
                controller: controller.clone(),
                last_seen: now,
            },
        );

        tracing::debug!(session = %id, active = entries.len(), "session opened");

        (id, controller)
    }

    /// Looks up the session carried by the request cookie, opening a new one
    /// when it is missing or expired.
    pub fn resume(&self, id: Option<&str>) -> (String, Arc<FormController>) {
        let now = Instant::now();

        if let Some(id) = id {
            let mut entries = self.lock();
            if let Some(entry) = entries.get_mut(id) {
                if entry.controller.is_submitting()
                    || now.duration_since(entry.last_seen) <= self.ttl
                {
                    entry.last_seen = now;
                    return (id.to_owned(), entry.controller.clone());
                }

                entries.remove(id);
            }
        }

        self.open()
    }

    pub fn from_jar(&self, jar: &CookieJar) -> (String, Arc<FormController>) {
        self.resume(jar.get(SESSION_COOKIE).map(|c| c.value()))
    }

    pub fn cookie(&self, id: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.cookie_secure)
            .build()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&self, entries: &mut HashMap<String, Entry>, now: Instant) {
        entries.retain(|_, entry| {
            // Never drop a visitor whose submission is still running
            entry.controller.is_submitting() || now.duration_since(entry.last_seen) <= self.ttl
        });

        while entries.len() >= self.max_sessions {
            let Some(oldest) = entries
                .iter()
                .filter(|(_, entry)| !entry.controller.is_submitting())
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.to_owned())
            else {
                break;
            };

            entries.remove(&oldest);
        }
    }
}
