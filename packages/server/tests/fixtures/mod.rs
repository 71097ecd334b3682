//! Test fixtures: an in-process server bound to an ephemeral port.

#![allow(dead_code)]

use clap::Parser;
use daily_memo_server::{ServerConfig, ui::serve};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::oneshot};

pub const AUTH_CODE: &str = "5508";
pub const PASSWORD: &str = "password123";

pub struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a server with place search disabled.
    pub async fn start() -> Self {
        Self::start_with_args(&[]).await
    }

    /// Start a server whose place search talks to `kakao_base_url`.
    pub async fn start_with_kakao(kakao_base_url: &str) -> Self {
        Self::start_with_args(&[
            "--kakao-rest-api-key",
            "test-key",
            "--kakao-base-url",
            kakao_base_url,
        ])
        .await
    }

    async fn start_with_args(extra: &[&str]) -> Self {
        let mut args = vec![
            "daily-memo-server",
            "--jwt-secret",
            "integration-test-secret",
            "--signup-auth-code",
            AUTH_CODE,
        ];
        args.extend_from_slice(extra);
        let config = ServerConfig::try_parse_from(args).expect("Failed to parse config");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            if let Err(e) = serve(listener, &config, shutdown).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/v0.1{}", self.base_url, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sign up `account_id` and return the auth response body.
    pub async fn sign_up(&self, account_id: &str) -> Value {
        let response = self
            .client
            .post(self.url("/auth/signup"))
            .json(&json!({
                "account_id": account_id,
                "password": PASSWORD,
                "auth_code": AUTH_CODE,
                "nickname": account_id,
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 200, "sign up {account_id}");
        response.json().await.expect("Failed to parse JSON")
    }

    /// Sign up and return the access token.
    pub async fn token(&self, account_id: &str) -> String {
        self.sign_up(account_id).await["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    pub async fn create_memo(&self, token: &str, body: Value) -> Value {
        let response = self
            .client
            .post(self.url("/memo"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 201);
        response.json().await.expect("Failed to parse JSON")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
