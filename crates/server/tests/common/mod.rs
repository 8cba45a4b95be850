//! # Common Test Utilities
//!
//! A full application harness that spawns the real server on a random port
//! against a temporary SQLite database, plus helpers for creating users and
//! session tokens.

// Allow unused code because this is a test utility module, and not all
// functions are used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use reqwest::Client;
use serde_json::{json, Value};
use std::{net::SocketAddr, path::PathBuf};
use tempfile::NamedTempFile;
use tokio::{net::TcpListener, task::JoinHandle};
use wordtrail_server::{
    config::AppConfig,
    router,
    state::{build_app_state, AppState},
};

/// The signing secret every test server runs with.
pub const TEST_SECRET: &str = "test-session-secret";

/// A harness for end-to-end testing of the Axum server.
///
/// Spawns the server on a random available port with a temporary SQLite
/// database (schema applied and sample data seeded, exactly as production
/// startup does) and shuts it down when dropped.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub db_path: PathBuf,
    pub app_state: AppState,
    _db_file: NamedTempFile,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let db_file = NamedTempFile::new()?;
        let db_path = db_file.path().to_path_buf();

        let config = AppConfig {
            port: 0,
            db_url: db_path.to_str().unwrap().to_string(),
            session_secret: TEST_SECRET.to_string(),
        };

        let app_state = build_app_state(config).await?;
        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            db_path,
            app_state: app_state_for_harness,
            _db_file: db_file,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Registers a user over HTTP and returns the new user id.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<i64> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.address))
            .json(&json!({ "username": username, "email": email, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(
            response.status().is_success(),
            "registration failed: {}",
            response.status()
        );
        let body: Value = response.json().await?;
        body["user_id"]
            .as_i64()
            .ok_or_else(|| anyhow::anyhow!("user_id missing from register response"))
    }

    /// Logs a user in over HTTP and returns the session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.address))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        anyhow::ensure!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );
        let body: Value = response.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("token missing from login response"))
    }

    /// Registers and logs in a fresh user, returning `(user_id, token)`.
    pub async fn register_and_login(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(i64, String)> {
        let user_id = self.register(username, email, password).await?;
        let token = self.login(username, password).await?;
        Ok((user_id, token))
    }

    /// Opens a direct connection to the test database for row-level asserts.
    pub async fn db_conn(&self) -> Result<turso::Connection> {
        let db = turso::Builder::new_local(self.db_path.to_str().unwrap())
            .build()
            .await?;
        Ok(db.connect()?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Signs a token for the given identity with a custom expiry, using the test
/// server's secret. `expires_in_secs` may be negative to mint an already
/// expired token.
pub fn generate_token_with_expiry(user_id: i64, username: &str, expires_in_secs: i64) -> String {
    let user = wordtrail_access::User {
        id: user_id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role: "user".to_string(),
        created_at: chrono::Utc::now(),
    };
    let exp = (chrono::Utc::now().timestamp() + expires_in_secs) as usize;
    wordtrail_access::token::issue_with_expiry(&user, TEST_SECRET, exp)
        .expect("token signing should not fail in tests")
}
