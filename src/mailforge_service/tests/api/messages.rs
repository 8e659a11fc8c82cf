use serde_json::{Value, json};
use wiremock::matchers::{bearer_token, body_string, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TOKEN, TestApp, message_json};

#[tokio::test]
async fn list_messages_requires_a_token() {
    let app = TestApp::new().await;

    for query in [&[][..], &[("token", "")][..], &[("page", "2")][..]] {
        let response = app.get_messages(query).await;

        assert_eq!(response.status().as_u16(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["message"], "Authentication token is required");
    }
}

#[tokio::test]
async fn list_messages_forwards_token_and_page() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("page", "2"))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hydra:member": [message_json("64a1")],
            "hydra:totalItems": 31
        })))
        .expect(1)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.get_messages(&[("token", TOKEN), ("page", "2")]).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["hydra:totalItems"], 31);
    assert_eq!(body["data"]["hydra:member"][0]["subject"], "Welcome");
}

#[tokio::test]
async fn list_messages_defaults_to_first_page() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hydra:member": [],
            "hydra:totalItems": 0
        })))
        .expect(1)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.get_messages(&[("token", TOKEN)]).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn list_messages_rejects_invalid_pages() {
    let app = TestApp::new().await;

    for page in ["0", "abc", "-3"] {
        let response = app.get_messages(&[("token", TOKEN), ("page", page)]).await;

        assert_eq!(response.status().as_u16(), 400, "page {page}");
    }
}

#[tokio::test]
async fn expired_token_returns_401() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.mail_tm_server)
        .await;

    let response = app.get_messages(&[("token", "expired")]).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn read_message_marks_it_as_seen() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/messages/64a1"))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(message_json("64a1")))
        .expect(1)
        .mount(&app.mail_tm_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/messages/64a1"))
        .and(body_string(r#"{"seen":true}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "seen": true })))
        .expect(1)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.get_message("64a1", &[("token", TOKEN)]).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["id"], "64a1");
    assert_eq!(body["data"]["text"], "Hello there, welcome aboard.");
}

#[tokio::test]
async fn read_unknown_message_returns_404() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(path("/messages/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.mail_tm_server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.get_message("missing", &[("token", TOKEN)]).await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["message"], "Resource not found");
}

#[tokio::test]
async fn delete_message_returns_204() {
    let app = TestApp::new().await;
    Mock::given(method("DELETE"))
        .and(path("/messages/64a1"))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.mail_tm_server)
        .await;

    let response = app.delete_message("64a1", &[("token", TOKEN)]).await;

    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn delete_message_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.delete_message("64a1", &[]).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn encoded_traversal_in_message_id_stays_a_message_id() {
    let app = TestApp::new().await;
    Mock::given(method("DELETE"))
        .and(path("/accounts/me"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&app.mail_tm_server)
        .await;

    let response = app
        .delete_message("..%2Faccounts%2Fme", &[("token", TOKEN)])
        .await;

    assert_eq!(response.status().as_u16(), 404);
    let requests = app.mail_tm_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/messages/..%2Faccounts%2Fme");
}
