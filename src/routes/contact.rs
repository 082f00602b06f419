use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use nebjtech_contact::{
    Field, FieldUpdate, FormController, PageState, ServiceChoice, SubmissionStatus, SubmitOutcome,
};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::{AppState, landing::LandingTemplate},
    template::{ServerTemplate, Template, VALIDATION_MESSAGE},
};

pub struct ServiceOption {
    pub label: &'static str,
    pub selected: bool,
}

pub struct Banner {
    pub success: bool,
    pub message: String,
}

/// Everything the contact form partial needs, taken from one state snapshot.
pub struct FormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub options: Vec<ServiceOption>,
    pub submitting: bool,
    pub banner: Option<Banner>,
    pub invalid: Option<&'static str>,
}

impl FormView {
    pub fn new(state: &PageState) -> Self {
        let banner = match &state.status {
            SubmissionStatus::None => None,
            SubmissionStatus::Success(message) => Some(Banner {
                success: true,
                message: message.to_owned(),
            }),
            SubmissionStatus::Error(message) => Some(Banner {
                success: false,
                message: message.to_owned(),
            }),
        };

        Self {
            name: state.form.name.to_owned(),
            email: state.form.email.to_owned(),
            message: state.form.message.to_owned(),
            options: ServiceChoice::VARIANTS
                .iter()
                .map(|choice| ServiceOption {
                    label: choice.as_ref(),
                    selected: *choice == state.form.service,
                })
                .collect(),
            submitting: state.submitting,
            banner,
            invalid: None,
        }
    }

    pub fn invalid(mut self, message: &'static str) -> Self {
        self.invalid = Some(message);
        self
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate {
    pub form: FormView,
}

/// Urlencoded contact form body. Absent keys leave the field as it is.
#[derive(Deserialize, Default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}

impl ContactInput {
    /// Parses every posted field before touching the form, so a bad value
    /// leaves all of them unchanged.
    fn apply(self, controller: &FormController) -> nebjtech_contact::Result<()> {
        let fields = [
            (Field::Name, self.name),
            (Field::Email, self.email),
            (Field::Service, self.service),
            (Field::Message, self.message),
        ];

        let updates = fields
            .into_iter()
            .filter_map(|(field, value)| value.map(|value| FieldUpdate::parse(field, value)))
            .collect::<nebjtech_contact::Result<Vec<_>>>()?;

        controller.update_fields(updates)
    }
}

/// Answers a request that arrived while this visitor's submission is running.
///
/// An enhanced request keeps the form already shown. A plain form post gets
/// the page back with the disabled submit button.
fn in_flight(template: &Template, jar: CookieJar, controller: &FormController) -> Response {
    if template.is_partial() {
        return (StatusCode::CONFLICT, jar, [("ts-swap", "skip")]).into_response();
    }

    let state = controller.snapshot();

    render_form(template, jar, StatusCode::CONFLICT, FormView::new(&state), &state)
}

fn render_form(
    template: &Template,
    jar: CookieJar,
    status: StatusCode,
    form: FormView,
    state: &PageState,
) -> Response {
    if template.is_partial() {
        return (jar, template.render_status(status, ContactFormTemplate { form })).into_response();
    }

    (
        jar,
        template.render_status(status, LandingTemplate::new(state).with_form(form)),
    )
        .into_response()
}

/// POST /contact/field - keeps the server copy of a field in sync while the visitor types.
pub async fn field(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let (id, controller) = app_state.sessions.from_jar(&jar);
    let jar = jar.add(app_state.sessions.cookie(id));

    match input.apply(&controller) {
        Ok(()) => {}
        Err(nebjtech_contact::Error::InFlight) => {
            return (StatusCode::CONFLICT, jar, [("ts-swap", "skip")]).into_response();
        }
        Err(err) => {
            tracing::debug!("{err}");

            return (StatusCode::UNPROCESSABLE_ENTITY, jar, [("ts-swap", "skip")])
                .into_response();
        }
    }

    (StatusCode::NO_CONTENT, jar, [("ts-swap", "skip")]).into_response()
}

/// POST /contact - applies the posted fields then submits them to the form endpoint.
pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ContactInput>,
) -> impl IntoResponse {
    let (id, controller) = app_state.sessions.from_jar(&jar);
    let jar = jar.add(app_state.sessions.cookie(id));

    match input.apply(&controller) {
        Ok(()) => {}
        Err(nebjtech_contact::Error::InFlight) => return in_flight(&template, jar, &controller),
        Err(err) => {
            tracing::debug!("{err}");

            let state = controller.snapshot();
            let form = FormView::new(&state).invalid(VALIDATION_MESSAGE);

            return render_form(&template, jar, StatusCode::UNPROCESSABLE_ENTITY, form, &state);
        }
    }

    // Runs detached so a dropped connection cannot cancel a submission mid-flight
    let task = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.submit().await }
    });

    match task.await {
        Ok(Ok(SubmitOutcome::InFlight)) => return in_flight(&template, jar, &controller),
        Ok(Ok(SubmitOutcome::Settled(_))) => {}
        Ok(Err(nebjtech_contact::Error::Validate(err))) => {
            tracing::debug!("{err}");

            let state = controller.snapshot();
            let form = FormView::new(&state).invalid(VALIDATION_MESSAGE);

            return render_form(&template, jar, StatusCode::UNPROCESSABLE_ENTITY, form, &state);
        }
        Ok(Err(err)) => {
            tracing::error!("{err}");
        }
        Err(err) => {
            tracing::error!("contact form submission aborted: {err}");

            return (
                jar,
                template.render_status(StatusCode::INTERNAL_SERVER_ERROR, ServerTemplate),
            )
                .into_response();
        }
    }

    let state = controller.snapshot();

    render_form(&template, jar, StatusCode::OK, FormView::new(&state), &state)
}
