use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::mock_data;
use crate::models::{LoginRequest, Report, TokenResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Authentication state of a [`BackendConnector`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Unauthenticated,
    Authenticated(String),
}

/// Builds the HTTP client shared by all connectors.
///
/// Per-request timeouts are set by the connector; the client only bounds the
/// connect phase.
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    Client::builder()
        .connect_timeout(config.auth_timeout)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to create backend client: {}", e)))
}

/// Client for the upstream reports backend with automatic mock fallback.
///
/// One connector is created per incoming request. The session token lives
/// only inside this instance.
pub struct BackendConnector {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    auth_timeout: Duration,
    fetch_timeout: Duration,
    session: SessionState,
}

impl BackendConnector {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            base_url: config.backend_base_url.clone(),
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
            auth_timeout: config.auth_timeout,
            fetch_timeout: config.fetch_timeout,
            session: SessionState::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, SessionState::Authenticated(_))
    }

    /// Logs in against `POST /api/token`.
    ///
    /// Returns `true` and stores the token on success. On failure the
    /// previous session state is left untouched.
    pub async fn authenticate(&mut self) -> bool {
        match self.request_token().await {
            Ok(token) => {
                self.session = SessionState::Authenticated(token);
                tracing::info!("Backend login successful, token acquired");
                true
            }
            Err(e) => {
                tracing::warn!("Backend login failed: {}", e);
                false
            }
        }
    }

    async fn request_token(&self) -> Result<String, AppError> {
        let url = format!("{}/api/token", self.base_url);
        let payload = LoginRequest {
            username: &self.username,
            password: &self.password,
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.auth_timeout)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("POST {} failed", url))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::Unauthorized(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .context("Failed to parse token response")?;

        body.token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("token response missing 'token'".to_string()))
    }

    /// Returns the current report collection.
    ///
    /// Tries the live backend first on every call; any failure (login,
    /// transport, timeout, non-200, unparseable body) yields the mock
    /// dataset instead. Never fails.
    pub async fn fetch_reports(&mut self) -> Vec<Report> {
        match self.fetch_live_reports().await {
            Ok(reports) => {
                tracing::info!("Serving {} live reports from backend", reports.len());
                reports
            }
            Err(e) => {
                match e.root() {
                    AppError::Unauthorized(_) => {
                        tracing::warn!("Backend refused access ({}), serving mock data", e)
                    }
                    _ => tracing::warn!("Live fetch failed ({}), serving mock data", e),
                }
                mock_data::mock_reports()
            }
        }
    }

    async fn fetch_live_reports(&mut self) -> Result<Vec<Report>, AppError> {
        let token = self.ensure_session().await?;
        let url = format!("{}/api/reports", self.base_url);

        let result = self.request_reports(&url, &token).await;
        if result.is_err() {
            // The token may be what the backend rejected; log in again next time
            self.session = SessionState::Unauthenticated;
        }
        result
    }

    async fn ensure_session(&mut self) -> Result<String, AppError> {
        if let SessionState::Authenticated(token) = &self.session {
            return Ok(token.clone());
        }
        if !self.authenticate().await {
            return Err(AppError::Unauthorized(
                "Could not log in to backend".to_string(),
            ));
        }
        match &self.session {
            SessionState::Authenticated(token) => Ok(token.clone()),
            SessionState::Unauthenticated => Err(AppError::InternalError(
                "session missing after login".to_string(),
            )),
        }
    }

    async fn request_reports(&self, url: &str, token: &str) -> Result<Vec<Report>, AppError> {
        tracing::debug!("Fetching reports: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.fetch_timeout)
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Unauthorized(format!(
                "reports endpoint returned {}",
                status
            )));
        }
        if status != StatusCode::OK {
            return Err(AppError::ExternalApiError(format!(
                "reports endpoint returned {}",
                status
            )));
        }

        response
            .json::<Vec<Report>>()
            .await
            .context("Failed to parse reports response")
    }
}
