use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Une erreur est survenue, veuillez réessayer plus tard.";
pub const VALIDATION_MESSAGE: &str =
    "Merci de renseigner votre nom, une adresse e-mail valide et votre message.";

/// Header sent with every request issued by `static/js/site.js`.
pub const TS_REQUEST: &str = "ts-request";

pub(crate) mod filters {
    /// Two-digit ordinal used by the process steps ("01", "02", ...).
    #[askama::filter_fn]
    pub fn ordinal(value: &usize, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(format!("{value:02}"))
    }

    /// Public URL of an embedded asset, cache-busted with the crate version.
    #[askama::filter_fn]
    pub fn asset(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let version = askama::get_value::<&'static str>(values, "version")?;

        Ok(format!("/static/{value}?v={version}"))
    }
}

pub struct Template {
    partial: bool,
}

impl Template {
    /// Whether the request came from the enhancement script and only wants the fragment.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("version", Box::new(env!("CARGO_PKG_VERSION")));

        template.render_with_values(&values)
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match self.render_with_values(template) {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            partial: parts.headers.contains_key(TS_REQUEST),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
