//! Integration tests for signup and login

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_success_returns_sanitized_user() {
    let app = common::TestApp::new().await;

    let email = format!("signup_{}@example.com", uuid::Uuid::new_v4());
    let body = json!({
        "name": "Jo",
        "email": email,
        "password": "sturdy-secret-1"
    });

    let (status, response) = app.post("/auth/signup", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["success"], 1);
    assert!(!response["token"].as_str().unwrap().is_empty());

    // The serialized user never contains credentials
    let user = &response["user"];
    assert_eq!(user["name"], "Jo");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
    assert!(user.get("tokens").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_signup_duplicate_email_rejected() {
    let app = common::TestApp::new().await;

    let email = format!("dup_{}@example.com", uuid::Uuid::new_v4());
    let body = json!({
        "name": "Jo",
        "email": email,
        "password": "sturdy-secret-1"
    });

    let (status, _) = app.post("/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.post("/auth/signup", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success_issues_second_token() {
    let app = common::TestApp::new().await;

    let email = format!("login_{}@example.com", uuid::Uuid::new_v4());
    let signup = json!({
        "name": "Jo",
        "email": email,
        "password": "sturdy-secret-1"
    });
    let (status, signup_response) = app.post("/auth/signup", &signup.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    let first_token = signup_response["token"].as_str().unwrap().to_string();

    let login = json!({ "email": email, "password": "sturdy-secret-1" });
    let (status, login_response) = app.post("/auth/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(login_response["success"], 1);
    let second_token = login_response["token"].as_str().unwrap().to_string();

    // Both sessions stay usable: the token list is additive
    for token in [&first_token, &second_token] {
        let body = json!({ "title": "T", "description": "D" });
        let (status, _) = app
            .request("POST", "/blog/blogs", Some(&body.to_string()), Some(token))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_email_is_401() {
    let app = common::TestApp::new().await;

    // The legacy surface returned 500 here; that was a defect and the
    // corrected behavior is asserted instead.
    let login = json!({
        "email": "nobody@example.com",
        "password": "sturdy-secret-1"
    });
    let (status, response) = app.post("/auth/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], "Not Authenticated");
    assert_eq!(response["message"], "Unable to Login, No Such worker exists");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_is_401() {
    let app = common::TestApp::new().await;

    let email = format!("wrongpw_{}@example.com", uuid::Uuid::new_v4());
    let signup = json!({
        "name": "Jo",
        "email": email,
        "password": "sturdy-secret-1"
    });
    let (status, _) = app.post("/auth/signup", &signup.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let login = json!({ "email": email, "password": "completely-wrong" });
    let (status, response) = app.post("/auth/login", &login.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Wrong Credentials");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_revoked_token_no_longer_authenticates() {
    let app = common::TestApp::new().await;

    let (user_id, token) = app.signup_user("revoked").await;

    // Works while the token is in the active list
    let body = json!({ "title": "T", "description": "D" });
    let (status, _) = app
        .request("POST", "/blog/blogs", Some(&body.to_string()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Signature still verifies after revocation, but the active-list
    // membership check fails
    app.revoke_tokens(&user_id).await;
    let (status, _) = app
        .request("POST", "/blog/blogs", Some(&body.to_string()), Some(&token))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
