use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{MAX_ATTEMPTS, TOKEN, TestApp};

#[tokio::test]
async fn create_email_returns_201_for_a_verified_address() {
    let app = TestApp::new().await;
    app.mount_domains(&["mailto.plus"]).await;
    app.mount_signup(1).await;
    app.mount_disify(true).await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["disposableDetected"], false);
    assert_eq!(body["attempts"], 1);
    assert_eq!(body["data"]["isVerified"], true);
    assert_eq!(body["data"]["token"], TOKEN);
    assert!(body["data"]["email"].as_str().unwrap().ends_with("@mailto.plus"));
    assert_eq!(body["data"]["password"].as_str().unwrap().len(), 12);
    assert_eq!(body["domains"][0]["domain"], "mailto.plus");
    assert!(!body["userProfile"]["fullName"].as_str().unwrap().is_empty());
    assert!(body["userProfile"]["address"]["city"].is_string());
}

#[tokio::test]
async fn create_email_falls_back_to_an_unverified_address() {
    let app = TestApp::new().await;
    app.mount_domains(&["mailto.plus", "fexpost.com"]).await;
    app.mount_signup(MAX_ATTEMPTS as u64).await;
    app.mount_disify(false).await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["disposableDetected"], true);
    assert_eq!(body["attempts"], MAX_ATTEMPTS);
    assert_eq!(body["data"]["isVerified"], false);
    assert_eq!(body["domains"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_email_returns_503_when_no_domains_exist() {
    let app = TestApp::new().await;
    app.mount_domains(&[]).await;
    app.mount_signup(0).await;
    app.mount_disify(true).await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["message"], "No domains available");
    assert!(body["error"].get("stack").is_none());
}

#[tokio::test]
async fn create_email_returns_503_when_domains_cannot_be_listed() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.mail_tm_server)
        .await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 503);
}

#[tokio::test]
async fn create_email_returns_500_when_every_attempt_fails() {
    let app = TestApp::new().await;
    app.mount_domains(&["mailto.plus"]).await;
    app.mount_disify(true).await;
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .respond_with(ResponseTemplate::new(422))
        .expect(MAX_ATTEMPTS as u64)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["error"]["message"],
        format!("Could not create an email account after {MAX_ATTEMPTS} attempts")
    );
}

#[tokio::test]
async fn validity_checker_outage_abandons_every_attempt() {
    let app = TestApp::new().await;
    app.mount_domains(&["mailto.plus"]).await;
    app.mount_signup(0).await;
    Mock::given(method("POST"))
        .and(path("/api/email"))
        .respond_with(ResponseTemplate::new(500))
        .expect(MAX_ATTEMPTS as u64)
        .mount(&app.disify_server)
        .await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn error_stack_is_exposed_when_enabled() {
    let app = TestApp::with_error_details().await;
    Mock::given(method("GET"))
        .and(path("/domains"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.mail_tm_server)
        .await;

    let response = app.post_email().await;

    assert_eq!(response.status().as_u16(), 503);
    let body: Value = response.json().await.unwrap();
    let stack = body["error"]["stack"].as_str().unwrap();
    assert!(stack.contains("caused by: Mail provider responded with status 500"));
}
