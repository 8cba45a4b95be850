//! Typed wrapper over the server's JSON API.
//!
//! Every method deserializes the success body into the shared wire types
//! from the `wordtrail` crate, and turns non-2xx responses into a
//! [`ClientError`] carrying the server's `message` field.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use wordtrail::types::{AnswerRecord, ProgressSummary, QuizQuestionView, QuizScore, Topic, Vocabulary};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Not authenticated: {0}")]
    Unauthorized(String),
    #[error("Server rejected the request ({status}): {message}")]
    Api { status: StatusCode, message: String },
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed session file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The public profile returned alongside a freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterOutcome {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// A thin HTTP client bound to one server and, after login, one token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches the bearer token used for the gated endpoints.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Lifts a non-success response into a `ClientError`, reading the
    /// server's `{"success": false, "message": ...}` body when present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized(message));
        }
        Err(ClientError::Api { status, message })
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Logs in and remembers the issued token for subsequent calls.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, ClientError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        let outcome: LoginOutcome = response.json().await?;
        debug!(user_id = outcome.user.id, "Logged in");
        self.token = Some(outcome.token.clone());
        Ok(outcome)
    }

    pub async fn topics(&self) -> Result<Vec<Topic>, ClientError> {
        let response = self.http.get(self.url("/topics")).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn vocabularies(&self, topic_id: i64) -> Result<Vec<Vocabulary>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/topics/{topic_id}/vocabularies")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn quiz(&self, topic_id: i64) -> Result<Vec<QuizQuestionView>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/topics/{topic_id}/quiz")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn submit_quiz(&self, answers: &[AnswerRecord]) -> Result<QuizScore, ClientError> {
        let response = self
            .authorized(self.http.post(self.url("/quiz/submit")))
            .json(&serde_json::json!({ "results": answers }))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn progress(&self) -> Result<ProgressSummary, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/progress")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}
