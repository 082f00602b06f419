use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use nebjtech_contact::PageState;
use nebjtech_content::{
    BRAND, CONTACT, ContactDetails, HIGHLIGHTS, NAV, NavItem, PORTFOLIO, PortfolioEntry,
    ProcessStep, SERVICES, STATS, STEPS, Service, Stat, TAGLINE,
};

use crate::{
    routes::{AppState, contact::FormView},
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub menu_open: bool,
    pub nav_items: &'static [NavItem],
    pub form: FormView,
    pub year: i32,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub contact: &'static ContactDetails,
    pub highlights: &'static [&'static str],
    pub stats: &'static [Stat],
    pub services: &'static [Service],
    pub steps: &'static [ProcessStep],
    pub portfolio: &'static [PortfolioEntry],
}

impl LandingTemplate {
    pub fn new(state: &PageState) -> Self {
        Self {
            menu_open: state.menu_open,
            nav_items: NAV,
            form: FormView::new(state),
            year: time::OffsetDateTime::now_utc().year(),
            brand: BRAND,
            tagline: TAGLINE,
            contact: &CONTACT,
            highlights: HIGHLIGHTS,
            stats: STATS,
            services: SERVICES,
            steps: STEPS,
            portfolio: PORTFOLIO,
        }
    }

    pub fn with_form(mut self, form: FormView) -> Self {
        self.form = form;
        self
    }
}

/// GET / - a page load starts a new visitor session with a blank form.
pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (id, controller) = app_state.sessions.open();
    let jar = jar.add(app_state.sessions.cookie(id));

    (jar, template.render(LandingTemplate::new(&controller.snapshot())))
}
