//! Form posts over HTTP.

use axum::http::StatusCode;
use axum_test::TestServer;
use thotw_portal::{build_router, AppState, PortalConfig};

fn server() -> TestServer {
    let state = AppState::new(PortalConfig::default()).unwrap();
    TestServer::new(build_router(state)).unwrap()
}

fn sign_up_body() -> Vec<(&'static str, &'static str)> {
    vec![
        ("form", "sign_up"),
        ("firstName", "Maria"),
        ("lastName", "Santos"),
        ("email", "maria@example.com"),
        ("phone", "+63 917 123 4567"),
        ("dateOfBirth", "1990-01-01"),
        ("gender", "female"),
        ("address", "12 Rizal St, Poblacion, Makati"),
        ("password", "correct-horse"),
        ("confirmPassword", "correct-horse"),
        ("emergencyContact", "+63 918 765 4321"),
        ("emergencyRelation", "spouse"),
        ("termsAccepted", "on"),
        ("privacyAccepted", "on"),
    ]
}

#[tokio::test]
async fn test_invalid_login_is_422_and_keeps_values() {
    let response = server()
        .post("/login")
        .form(&[("form", "login"), ("email", "not-an-email"), ("password", "")])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains("Password is required"));
    assert!(html.contains(r#"value="not-an-email""#));
    assert!(!html.contains("Login successful"));
}

#[tokio::test]
async fn test_valid_login_acknowledged_and_cleared() {
    let response = server()
        .post("/login")
        .form(&[("form", "login"), ("email", "john.doe@example.com"), ("password", "secret"), ("rememberMe", "on")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Login successful! Welcome back to THOTW."));
    assert!(!html.contains("john.doe@example.com"));
    assert!(!html.contains("error-message"));
}

#[tokio::test]
async fn test_sign_up_accepted() {
    let response = server().post("/signup").form(&sign_up_body()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Account created successfully!"));
}

#[tokio::test]
async fn test_sign_up_without_terms_rejected() {
    let body: Vec<_> = sign_up_body()
        .into_iter()
        .filter(|(k, _)| *k != "termsAccepted")
        .collect();
    let response = server().post("/signup").form(&body).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = response.text();
    assert!(html.contains("You must accept the terms and conditions"));
    assert_eq!(html.matches("error-message").count(), 1);
}

#[tokio::test]
async fn test_sign_up_short_phone_rejected() {
    let body: Vec<_> = sign_up_body()
        .into_iter()
        .map(|(k, v)| if k == "phone" { (k, "091712345") } else { (k, v) })
        .collect();
    let response = server().post("/signup").form(&body).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Phone number must be at least 10 digits"));
}

#[tokio::test]
async fn test_refund_exceeding_paid_rejected() {
    let response = server()
        .post("/refund")
        .form(&[
            ("form", "refund_request"),
            ("firstName", "Juan"),
            ("lastName", "Reyes"),
            ("email", "juan@example.com"),
            ("phone", "09171234567"),
            ("transactionId", "TXN-001234"),
            ("serviceDate", "2024-12-05"),
            ("serviceType", "laboratory"),
            ("amountPaid", "1500"),
            ("refundAmount", "2500"),
            ("paymentMethod", "gcash"),
            ("refundReason", "Lab test was not conducted"),
            ("accountName", "Juan Reyes"),
            ("accountNumber", "09171234567"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Refund amount cannot exceed the amount paid"));
}

#[tokio::test]
async fn test_donation_bank_branch_appears_for_bank_payment() {
    let server = server();
    let fresh = server.get("/donors").await.text();
    assert!(!fresh.contains(r#"name="bankName""#));

    let response = server
        .post("/donors")
        .form(&[("form", "donation"), ("paymentMethod", "bdo")])
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains(r#"name="bankName""#));
}

#[tokio::test]
async fn test_password_visibility_toggle() {
    let server = server();
    let hidden = server.get("/login").await.text();
    assert!(hidden.contains(r#"name="password" type="password""#));

    let shown = server
        .get("/login")
        .add_query_param("show_password", "true")
        .await
        .text();
    assert!(shown.contains(r#"name="password" type="text""#));
}

#[tokio::test]
async fn test_edit_profile_prefilled() {
    let html = server().get("/dashboard/profile").await.text();
    assert!(html.contains(r#"value="john.doe@example.com""#));
    assert!(html.contains(r#"<option value="male" selected>Male</option>"#));
}

#[tokio::test]
async fn test_edit_profile_reopens_with_saved_values() {
    let response = server()
        .post("/dashboard/profile")
        .form(&[
            ("form", "edit_profile"),
            ("firstName", "Johnny"),
            ("lastName", "Doe"),
            ("email", "john.doe@example.com"),
            ("phone", "+1 (555) 123-4567"),
            ("dateOfBirth", "1990-01-01"),
            ("gender", "male"),
            ("address", "123 Healthcare Street, Medical District, City, State 12345"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Your profile has been successfully updated."));
    assert!(html.contains(r#"value="Johnny""#));
}

#[tokio::test]
async fn test_change_password_mismatch() {
    let response = server()
        .post("/dashboard/settings")
        .form(&[
            ("form", "change_password"),
            ("currentPassword", "old-password"),
            ("newPassword", "new-password-1"),
            ("confirmPassword", "new-password-2"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("New passwords do not match."));
}

#[tokio::test]
async fn test_notification_preferences_saved() {
    let response = server()
        .post("/dashboard/settings")
        .form(&[("form", "notification_preferences"), ("promotions", "on")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Your notification preferences have been saved."));
    assert!(html.contains(r#"<input type="checkbox" name="promotions" checked>"#));
    assert!(html.contains(r#"<input type="checkbox" name="email">"#));
}

#[tokio::test]
async fn test_delete_account_modal_and_request() {
    let server = server();
    let closed = server.get("/dashboard/settings").await.text();
    assert!(!closed.contains(r#"class="modal""#));

    let open = server
        .get("/dashboard/settings")
        .add_query_param("confirm_delete", "true")
        .await
        .text();
    assert!(open.contains(r#"class="modal""#));

    let response = server
        .post("/dashboard/settings")
        .form(&[("form", "delete_account")])
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("Account deletion request has been submitted."));
    assert!(!html.contains(r#"class="modal""#));
}

#[tokio::test]
async fn test_unknown_settings_form_is_bad_request() {
    let response = server()
        .post("/dashboard/settings")
        .form(&[("form", "bogus")])
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
