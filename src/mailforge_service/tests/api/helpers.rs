use std::time::Duration;

use mailforge_adapters::{
    DisifyClient, FakeProfileGenerator, MailTmClient,
    config::{AcquisitionSetting, constants::test},
};
use mailforge_service::EmailService;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const TOKEN: &str = "eyJ0eXAiOiJKV1QiLCJhbGciOiJSUzI1NiJ9";
pub const MAX_ATTEMPTS: u32 = 3;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub mail_tm_server: MockServer,
    pub disify_server: MockServer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(false).await
    }

    pub async fn with_error_details() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(expose_error_details: bool) -> Self {
        let mail_tm_server = MockServer::start().await;
        let disify_server = MockServer::start().await;

        let upstream_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(test::CLIENT_TIMEOUT_IN_MILLIS))
            .build()
            .unwrap();

        let service = EmailService::new(
            MailTmClient::new(mail_tm_server.uri(), upstream_client.clone()),
            DisifyClient::new(format!("{}/api/email", disify_server.uri()), upstream_client),
            FakeProfileGenerator::new(),
            AcquisitionSetting {
                max_attempts: MAX_ATTEMPTS,
                ..AcquisitionSetting::default()
            },
            expose_error_details,
        );

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            mail_tm_server,
            disify_server,
        }
    }

    pub async fn get_root(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_swagger_json(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/swagger.json", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_email(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/email", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_messages(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/messages", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_message(&self, id: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/messages/{id}", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_message(&self, id: &str, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/api/messages/{id}", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_account(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/account", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_me(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/api/account/me", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_account(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/api/account", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// `GET /domains` on the fake Mail.tm answers with the given domains.
    pub async fn mount_domains(&self, names: &[&str]) {
        let members: Vec<Value> = names
            .iter()
            .map(|name| {
                json!({
                    "id": format!("dom-{name}"),
                    "domain": name,
                    "isActive": true,
                    "isPrivate": false,
                    "createdAt": "2024-01-01T00:00:00+00:00",
                    "updatedAt": "2024-01-01T00:00:00+00:00"
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/domains"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hydra:member": members,
                "hydra:totalItems": names.len()
            })))
            .mount(&self.mail_tm_server)
            .await;
    }

    /// Account creation and token issuance both succeed.
    pub async fn mount_signup(&self, expected_accounts: u64) {
        Mock::given(method("POST"))
            .and(path("/accounts"))
            .respond_with(EchoAccount)
            .expect(expected_accounts)
            .mount(&self.mail_tm_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "acc-1",
                "token": TOKEN
            })))
            .mount(&self.mail_tm_server)
            .await;
    }

    /// Disify reports every address as deliverable or not.
    pub async fn mount_disify(&self, deliverable: bool) {
        Mock::given(method("POST"))
            .and(path("/api/email"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "format": true,
                "dns": true,
                "deliverable": deliverable,
                "spam": false,
                "disposable": true
            })))
            .mount(&self.disify_server)
            .await;
    }
}

pub fn account_json(address: &str) -> Value {
    json!({
        "id": "acc-1",
        "address": address,
        "quota": 40000000,
        "used": 0,
        "isDisabled": false,
        "isDeleted": false,
        "createdAt": "2024-05-01T10:00:00+00:00",
        "updatedAt": "2024-05-01T10:00:00+00:00"
    })
}

pub fn message_json(id: &str) -> Value {
    json!({
        "id": id,
        "accountId": "acc-1",
        "msgid": "<abc@mail>",
        "from": { "address": "noreply@example.com", "name": "Example" },
        "to": [{ "address": "x7k2p9q1zz@mailto.plus", "name": "" }],
        "subject": "Welcome",
        "intro": "Hello there",
        "text": "Hello there, welcome aboard.",
        "html": ["<p>Hello there</p>"],
        "seen": false,
        "createdAt": "2024-05-01T10:00:00+00:00",
        "updatedAt": "2024-05-01T10:00:00+00:00"
    })
}

/// Answers `POST /accounts` with an account for the requested address.
struct EchoAccount;

impl Respond for EchoAccount {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = serde_json::from_slice(&request.body).unwrap_or_default();
        let address = body["address"].as_str().unwrap_or_default();

        ResponseTemplate::new(201).set_body_json(account_json(address))
    }
}
