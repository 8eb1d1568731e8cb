//! THOTW Portal
//!
//! Server-rendered marketing site and patient dashboard for THOTW. Every
//! page is produced by this service; forms post back to their own route and
//! are validated against the schemas in `thotw-forms`.

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod submission;
pub mod templates;
pub mod toggles;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use thotw_forms::Catalog;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use routes::Route;

use handlers::*;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub catalog: Arc<Catalog>,
    pub renderer: Arc<render::Renderer>,
    pub records: Arc<models::PatientRecords>,
}

impl AppState {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let renderer = render::Renderer::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::load()?),
            renderer: Arc::new(renderer),
            records: Arc::new(models::PatientRecords::demo()),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))

        // Public pages
        .route("/", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/contact", get(contact))
        .route("/donors", get(donors_page).post(donors_submit))
        .route("/refund", get(refund_page).post(refund_submit))
        .route("/signup", get(signup_page).post(signup_submit))
        .route("/login", get(login_page).post(login_submit))
        .route("/book-appointment", get(appointment_page).post(appointment_submit))

        // Dashboard
        .route("/dashboard", get(dashboard))
        .route("/dashboard/profile", get(profile_page).post(profile_submit))
        .route("/dashboard/appointments", get(appointments))
        .route("/dashboard/donations", get(donations))
        .route("/dashboard/refunds", get(refunds))
        .route("/dashboard/settings", get(settings_page).post(settings_submit))
        .route("/logout", post(logout))

        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(PortalConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_logout_redirects_to_login() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/login");
    }
}
