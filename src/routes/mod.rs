use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    assets::AssetsService,
    session::SessionStore,
    template::{NotFoundTemplate, Template},
};

mod contact;
mod health;
mod landing;
mod menu;

pub use contact::{Banner, ContactFormTemplate, FormView, ServiceOption};
pub use landing::LandingTemplate;
pub use menu::NavTemplate;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub sessions: SessionStore,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route("/", get(landing::page))
        .route("/menu/toggle", post(menu::toggle))
        .route("/menu/close", post(menu::close))
        .route("/contact", post(contact::action))
        .route("/contact/field", post(contact::field))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
