use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use validator::Validate;

use crate::{
    Action, Classification, ContactSubmission, Field, FieldUpdate, Outcome, PageState,
    SubmissionClient, classify,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already running; nothing was sent.
    InFlight,
    Settled(Outcome),
}

/// Owns one visitor's page state and runs its contact form submissions.
///
/// The state lock is never held across an `.await`. The `submitting` flag is
/// checked and set under that lock, so at most one request reaches the client
/// per controller at a time.
pub struct FormController {
    state: Mutex<PageState>,
    client: Arc<dyn SubmissionClient>,
}

impl FormController {
    pub fn new(client: Arc<dyn SubmissionClient>) -> Self {
        Self {
            state: Mutex::new(PageState::default()),
            client,
        }
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, action: Action) {
        let mut state = self.lock();
        let current = std::mem::take(&mut *state);
        *state = current.reduce(action);
    }

    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) -> crate::Result<()> {
        self.update_fields([FieldUpdate::parse(field, value)?])
    }

    /// Applies already parsed updates all at once, or none of them while a
    /// submission is in flight.
    pub fn update_fields(
        &self,
        updates: impl IntoIterator<Item = FieldUpdate>,
    ) -> crate::Result<()> {
        let mut state = self.lock();
        if state.submitting {
            return Err(crate::Error::InFlight);
        }

        for update in updates {
            let current = std::mem::take(&mut *state);
            *state = current.reduce(Action::UpdateField(update));
        }

        Ok(())
    }

    pub fn toggle_menu(&self) {
        self.apply(Action::ToggleMenu);
    }

    pub fn close_menu(&self) {
        self.apply(Action::CloseMenu);
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> crate::Result<SubmitOutcome> {
        let form = {
            let mut state = self.lock();
            if state.submitting {
                tracing::debug!("submission already in flight");
                return Ok(SubmitOutcome::InFlight);
            }

            state.form.validate()?;

            let current = std::mem::take(&mut *state);
            *state = current.reduce(Action::SubmitStarted);
            state.form.clone()
        };

        let mut guard = InFlightGuard {
            controller: self,
            settled: false,
        };

        let body = ContactSubmission::from(&form).encode()?;

        let outcome = match self.client.post_form(body).await {
            Ok(response) => match classify(&response) {
                Classification::Success => Outcome::Delivered,
                Classification::AppError(status) => {
                    tracing::warn!(status, "form endpoint rejected submission");
                    Outcome::Rejected(status)
                }
            },
            Err(err) => {
                tracing::warn!("{err}");
                Outcome::Unreachable
            }
        };

        guard.settle(outcome);
        tracing::info!(?outcome, "contact form submission settled");

        Ok(SubmitOutcome::Settled(outcome))
    }
}

/// Releases the submission guard on every exit path of [`FormController::submit`].
struct InFlightGuard<'a> {
    controller: &'a FormController,
    settled: bool,
}

impl InFlightGuard<'_> {
    fn settle(&mut self, outcome: Outcome) {
        self.settled = true;
        self.controller.apply(Action::SubmitSettled(outcome));
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::error!("contact form submission aborted");
            self.controller.apply(Action::SubmitAborted);
        }
    }
}
