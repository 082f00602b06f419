use crate::{ContactFormState, FieldUpdate};

pub const SUCCESS_MESSAGE: &str = "✓ Merci ! Votre demande a été envoyée.";
pub const REJECTED_MESSAGE: &str = "Erreur lors de l'envoi. Veuillez réessayer.";
pub const UNREACHABLE_MESSAGE: &str = "Erreur de connexion. Veuillez réessayer.";

#[derive(Default, Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(msg) | Self::Error(msg) => Some(msg.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// How a submission attempt that reached the client ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Rejected(u16),
    Unreachable,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    UpdateField(FieldUpdate),
    ToggleMenu,
    CloseMenu,
    SubmitStarted,
    SubmitSettled(Outcome),
    /// The submission ended without an outcome (panic or internal failure).
    SubmitAborted,
}

/// Everything a visitor can change on the page.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub form: ContactFormState,
    pub status: SubmissionStatus,
    pub submitting: bool,
}

impl PageState {
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::UpdateField(update) => self.form.set(update),
            Action::ToggleMenu => self.menu_open = !self.menu_open,
            Action::CloseMenu => self.menu_open = false,
            Action::SubmitStarted => {
                self.submitting = true;
                self.status = SubmissionStatus::None;
            }
            Action::SubmitSettled(outcome) => {
                self.submitting = false;
                self.status = match outcome {
                    Outcome::Delivered => {
                        self.form = ContactFormState::default();
                        SubmissionStatus::Success(SUCCESS_MESSAGE.to_owned())
                    }
                    Outcome::Rejected(_) => SubmissionStatus::Error(REJECTED_MESSAGE.to_owned()),
                    Outcome::Unreachable => {
                        SubmissionStatus::Error(UNREACHABLE_MESSAGE.to_owned())
                    }
                };
            }
            Action::SubmitAborted => {
                self.submitting = false;
                self.status = SubmissionStatus::Error(REJECTED_MESSAGE.to_owned());
            }
        }

        self
    }
}
