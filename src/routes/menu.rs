use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use nebjtech_content::{NAV, NavItem};
use nebjtech_contact::FormController;

use crate::{
    routes::{AppState, landing::LandingTemplate},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "partials/nav.html")]
pub struct NavTemplate {
    pub menu_open: bool,
    pub nav_items: &'static [NavItem],
}

impl NavTemplate {
    pub fn new(menu_open: bool) -> Self {
        Self {
            menu_open,
            nav_items: NAV,
        }
    }
}

fn render(template: Template, jar: CookieJar, controller: &FormController) -> Response {
    let state = controller.snapshot();

    if template.is_partial() {
        return (jar, template.render(NavTemplate::new(state.menu_open))).into_response();
    }

    (jar, template.render(LandingTemplate::new(&state))).into_response()
}

pub async fn toggle(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (id, controller) = app_state.sessions.from_jar(&jar);
    controller.toggle_menu();

    render(template, jar.add(app_state.sessions.cookie(id)), &controller)
}

pub async fn close(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (id, controller) = app_state.sessions.from_jar(&jar);
    controller.close_menu();

    render(template, jar.add(app_state.sessions.cookie(id)), &controller)
}
