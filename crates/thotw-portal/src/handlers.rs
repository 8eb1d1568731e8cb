//! Page Handlers

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use thotw_forms::catalog::choices::APPOINTMENT_SERVICES;
use thotw_forms::catalog::{CHANGE_PASSWORD, NOTIFICATION_PREFERENCES};
use thotw_forms::{FormController, FormState, FormValues, RecordSchema};

use crate::error::Result;
use crate::forms::{
    bind, notification_defaults, profile_defaults, FormLayout, FormView, BOOK_APPOINTMENT_LAYOUT,
    CHANGE_PASSWORD_LAYOUT, DONATION_LAYOUT, EDIT_PROFILE_LAYOUT, FORM_ID_FIELD, LOGIN_LAYOUT,
    NOTIFICATION_PREFERENCES_LAYOUT, REFUND_REQUEST_LAYOUT, SIGN_UP_LAYOUT,
};
use crate::routes::Route;
use crate::submission::{process, status_for, PlaceholderHandler, ACCOUNT_DELETION_MESSAGE};
use crate::templates;
use crate::toggles::Toggles;
use crate::AppState;

pub const DELETE_ACCOUNT: &str = "delete_account";

const CONTACT_HOURS: [&str; 3] = [
    "Monday - Friday: 8:00 AM - 8:00 PM",
    "Saturday - Sunday: 9:00 AM - 5:00 PM",
    "Emergency: 24/7",
];

const REFUND_POLICY: [&str; 4] = [
    "Refund requests must be submitted within 30 days of service",
    "Processing time: 3-5 business days for review, 7-14 days for refund",
    "Administrative fee may apply depending on the refund reason",
    "Original payment method will be used for refunds when possible",
];

fn donation_causes() -> Value {
    json!([
        { "title": "Medical Equipment", "description": "Help us acquire modern medical equipment to serve patients better" },
        { "title": "Medicine Fund", "description": "Support our medicine assistance program for underprivileged patients" },
        { "title": "Facility Improvement", "description": "Contribute to expanding and improving our healthcare facilities" },
    ])
}

fn health_tips() -> Value {
    json!([
        { "title": "Stay Hydrated", "text": "Drink at least 8 glasses of water daily to maintain optimal health." },
        { "title": "Regular Exercise", "text": "Aim for 30 minutes of moderate exercise 5 times a week." },
        { "title": "Annual Checkup", "text": "Schedule your annual health screening for early detection." },
    ])
}

fn render(state: &AppState, route: Route, toggles: &Toggles, template: &str, data: Value) -> Result<Html<String>> {
    Ok(Html(state.renderer.page(route, toggles, template, data)?))
}

fn fresh(schema: &Arc<RecordSchema>, baseline: &FormValues) -> FormState {
    FormController::with_values(schema.clone(), PlaceholderHandler, baseline).into_state()
}

/// A page built around one form.
struct FormPage {
    route: Route,
    template: &'static str,
    layout: FormLayout,
    extra: fn() -> Value,
}

fn no_extra() -> Value {
    json!({})
}

fn donors_extra() -> Value {
    json!({ "causes": donation_causes() })
}

fn refund_extra() -> Value {
    json!({ "policy": REFUND_POLICY })
}

const SIGN_UP_PAGE: FormPage = FormPage { route: Route::SignUp, template: templates::SIGN_UP, layout: SIGN_UP_LAYOUT, extra: no_extra };
const LOGIN_PAGE: FormPage = FormPage { route: Route::Login, template: templates::LOGIN, layout: LOGIN_LAYOUT, extra: no_extra };
const BOOK_APPOINTMENT_PAGE: FormPage = FormPage { route: Route::BookAppointment, template: templates::BOOK_APPOINTMENT, layout: BOOK_APPOINTMENT_LAYOUT, extra: no_extra };
const DONORS_PAGE: FormPage = FormPage { route: Route::Donors, template: templates::DONORS, layout: DONATION_LAYOUT, extra: donors_extra };
const REFUND_PAGE: FormPage = FormPage { route: Route::Refund, template: templates::REFUND, layout: REFUND_REQUEST_LAYOUT, extra: refund_extra };
const EDIT_PROFILE_PAGE: FormPage = FormPage { route: Route::EditProfile, template: templates::EDIT_PROFILE, layout: EDIT_PROFILE_LAYOUT, extra: no_extra };

impl FormPage {
    fn schema<'a>(&self, state: &'a AppState) -> Result<&'a Arc<RecordSchema>> {
        state.catalog.get(self.layout.form).ok_or_else(|| {
            crate::error::PortalError::Config(format!("no schema for form '{}'", self.layout.form))
        })
    }

    fn baseline(&self) -> FormValues {
        match self.route {
            Route::EditProfile => profile_defaults(),
            _ => FormValues::new(),
        }
    }

    fn view(&self, state: &AppState, toggles: &Toggles, form: &FormState, status: StatusCode) -> Result<Response> {
        let mut data = (self.extra)();
        if let Value::Object(map) = &mut data {
            map.insert(
                "form".to_string(),
                json!(FormView::new(&self.layout, form, toggles, self.route.path())),
            );
        }
        let html = render(state, self.route, toggles, self.template, data)?;
        Ok((status, html).into_response())
    }

    fn get(&self, state: &AppState, toggles: &Toggles) -> Result<Response> {
        let form = fresh(self.schema(state)?, &self.baseline());
        self.view(state, toggles, &form, StatusCode::OK)
    }

    /// Pre-filled forms reopen with what was just saved; the rest start blank.
    fn saved(&self, schema: &RecordSchema, body: &HashMap<String, String>) -> FormValues {
        match self.route {
            Route::EditProfile => bind(schema, body),
            _ => self.baseline(),
        }
    }

    fn post(&self, state: &AppState, toggles: &Toggles, body: &HashMap<String, String>) -> Result<Response> {
        let schema = self.schema(state)?.clone();
        let saved = self.saved(&schema, body);
        let (form, outcome) = process(schema, PlaceholderHandler, &saved, body)?;
        self.view(state, toggles, &form, status_for(&outcome))
    }
}

pub async fn health() -> &'static str {
    "OK"
}

// Static pages
pub async fn home(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::Home, &toggles, templates::HOME, json!({}))
}

pub async fn about(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::About, &toggles, templates::ABOUT, json!({}))
}

pub async fn services(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::Services, &toggles, templates::SERVICES, json!({ "services": APPOINTMENT_SERVICES }))
}

pub async fn contact(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::Contact, &toggles, templates::CONTACT, json!({ "hours": CONTACT_HOURS }))
}

// Form pages
pub async fn signup_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    SIGN_UP_PAGE.get(&state, &toggles)
}

pub async fn signup_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    SIGN_UP_PAGE.post(&state, &toggles, &body)
}

pub async fn login_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    LOGIN_PAGE.get(&state, &toggles)
}

pub async fn login_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    LOGIN_PAGE.post(&state, &toggles, &body)
}

pub async fn appointment_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    BOOK_APPOINTMENT_PAGE.get(&state, &toggles)
}

pub async fn appointment_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    BOOK_APPOINTMENT_PAGE.post(&state, &toggles, &body)
}

pub async fn donors_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    DONORS_PAGE.get(&state, &toggles)
}

pub async fn donors_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    DONORS_PAGE.post(&state, &toggles, &body)
}

pub async fn refund_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    REFUND_PAGE.get(&state, &toggles)
}

pub async fn refund_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    REFUND_PAGE.post(&state, &toggles, &body)
}

// Dashboard
pub async fn dashboard(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    let records = &state.records;
    render(
        &state,
        Route::Dashboard,
        &toggles,
        templates::DASHBOARD,
        json!({
            "first_name": state.config.patient_first_name(),
            "stats": records.stats(),
            "recent": records.recent_appointments(3),
            "tips": health_tips(),
        }),
    )
}

pub async fn profile_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    EDIT_PROFILE_PAGE.get(&state, &toggles)
}

pub async fn profile_submit(State(state): State<AppState>, Query(toggles): Query<Toggles>, Form(body): Form<HashMap<String, String>>) -> Result<Response> {
    EDIT_PROFILE_PAGE.post(&state, &toggles, &body)
}

pub async fn appointments(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::AppointmentHistory, &toggles, templates::APPOINTMENTS, json!({ "appointments": state.records.appointments }))
}

pub async fn donations(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(
        &state,
        Route::DonationRecords,
        &toggles,
        templates::DONATIONS,
        json!({ "donations": state.records.donations, "total": state.records.donation_total() }),
    )
}

pub async fn refunds(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Html<String>> {
    render(&state, Route::RefundRequests, &toggles, templates::REFUNDS, json!({ "refunds": state.records.refunds }))
}

// Account settings: password, notification preferences and account deletion share one page.
struct SettingsView {
    password: FormState,
    notifications: FormState,
    notice: Option<&'static str>,
}

impl SettingsView {
    fn fresh(state: &AppState) -> Self {
        Self {
            password: fresh(&state.catalog.change_password, &FormValues::new()),
            notifications: fresh(&state.catalog.notification_preferences, &notification_defaults()),
            notice: None,
        }
    }

    fn render(&self, state: &AppState, toggles: &Toggles, status: StatusCode) -> Result<Response> {
        let path = Route::AccountSettings.path();
        let html = render(
            state,
            Route::AccountSettings,
            toggles,
            templates::SETTINGS,
            json!({
                "password": FormView::new(&CHANGE_PASSWORD_LAYOUT, &self.password, toggles, path),
                "notifications": FormView::new(&NOTIFICATION_PREFERENCES_LAYOUT, &self.notifications, toggles, path),
                "notice": self.notice,
                "confirm_delete": toggles.confirm_delete,
                "delete_href": toggles.flipped(path, "confirm_delete"),
            }),
        )?;
        Ok((status, html).into_response())
    }
}

pub async fn settings_page(State(state): State<AppState>, Query(toggles): Query<Toggles>) -> Result<Response> {
    SettingsView::fresh(&state).render(&state, &toggles, StatusCode::OK)
}

pub async fn settings_submit(
    State(state): State<AppState>,
    Query(mut toggles): Query<Toggles>,
    Form(body): Form<HashMap<String, String>>,
) -> Result<Response> {
    let mut view = SettingsView::fresh(&state);
    let status = match body.get(FORM_ID_FIELD).map(String::as_str) {
        Some(CHANGE_PASSWORD) => {
            let (form, outcome) = process(
                state.catalog.change_password.clone(),
                PlaceholderHandler,
                &FormValues::new(),
                &body,
            )?;
            view.password = form;
            status_for(&outcome)
        }
        Some(NOTIFICATION_PREFERENCES) => {
            let schema = state.catalog.notification_preferences.clone();
            let saved = bind(&schema, &body);
            let (form, outcome) = process(schema, PlaceholderHandler, &saved, &body)?;
            view.notifications = form;
            status_for(&outcome)
        }
        Some(DELETE_ACCOUNT) => {
            tracing::warn!(patient = %state.config.patient_name, "account deletion requested");
            toggles.confirm_delete = false;
            view.notice = Some(ACCOUNT_DELETION_MESSAGE);
            StatusCode::OK
        }
        other => {
            tracing::debug!(form = ?other, "unknown settings form");
            StatusCode::BAD_REQUEST
        }
    };
    view.render(&state, &toggles, status)
}

pub async fn logout() -> Redirect {
    tracing::info!("patient logged out");
    Redirect::to(Route::Login.path())
}

pub async fn not_found(State(state): State<AppState>) -> Result<Response> {
    let html = render(&state, Route::NotFound, &Toggles::default(), templates::NOT_FOUND, json!({}))?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}
