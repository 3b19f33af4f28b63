//! The HTTP client: bearer-token request core plus one-line resource helpers.
//!
//! Every resource helper is a fixed verb/path mapping over [`ApiClient::request`].
//! List operations take key-value filters serialized as a query string. No
//! retries and no hidden navigation: failures come back as [`ApiError`] values.

use std::time::Duration;

use reqwest::blocking::multipart::Form;
use reqwest::blocking::Response;
use reqwest::{Method, StatusCode};

use super::config::ApiConfig;
use super::error::ApiError;
use super::types::{ApiMessage, NewNote, TokenResponse};

pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            token: None,
        })
    }

    /// Resume a stored session without logging in again.
    pub fn with_token(config: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let mut api = Self::new(config)?;
        api.token = token;
        Ok(api)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    // ── Auth ──

    /// `POST /auth/login` with HTTP Basic credentials. On success the token
    /// is kept on the client and returned for the caller to persist.
    pub fn login(&mut self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let resp = self
            .client
            .post(&url)
            .basic_auth(username, Some(password))
            .send()?;

        if !resp.status().is_success() {
            // The server gives no structured detail on a bad login.
            return Err(ApiError::LoginFailed);
        }

        let body: TokenResponse = resp
            .json()
            .map_err(|e| ApiError::Decode(format!("login response: {e}")))?;
        self.token = Some(body.token.clone());
        Ok(body.token)
    }

    /// `POST /auth/register`. A rejection surfaces the server's message verbatim.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        avatar: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "avatar": avatar,
        });
        let resp = self.client.post(&url).json(&body).send()?;

        if resp.status().is_success() {
            return Ok(());
        }
        let message = resp
            .json::<ApiMessage>()
            .map(|m| m.message)
            .unwrap_or_else(|_| "unknown error".into());
        Err(ApiError::RegistrationRejected(message))
    }

    // ── Request core ──

    /// Send an authenticated request with an optional JSON body and return
    /// the raw response. The JSON content type is set only when a body is
    /// present. A 401 becomes `ApiError::Unauthorized`.
    pub fn request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let mut req = self.client.request(method, self.url(endpoint));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        self.check(endpoint, req.send()?)
    }

    /// GET with a query-string filter.
    pub fn request_with_query(
        &self,
        endpoint: &str,
        filter: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        let mut req = self.client.get(self.url(endpoint)).query(filter);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        self.check(endpoint, req.send()?)
    }

    /// Send multipart form data (file uploads). The content type is left to
    /// the HTTP layer so the multipart boundary is set correctly.
    pub fn request_form(
        &self,
        endpoint: &str,
        method: Method,
        form: Form,
    ) -> Result<Response, ApiError> {
        let mut req = self.client.request(method, self.url(endpoint)).multipart(form);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        self.check(endpoint, req.send()?)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn check(&self, endpoint: &str, resp: Response) -> Result<Response, ApiError> {
        match resp.status() {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            status if status.is_client_error() || status.is_server_error() => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            }),
            _ => Ok(resp),
        }
    }

    // ── Trades ──

    pub fn get_trades(&self, filter: &[(&str, &str)]) -> Result<Response, ApiError> {
        self.request_with_query("/trades/", filter)
    }

    pub fn get_trade(&self, id: i64) -> Result<Response, ApiError> {
        self.request(&format!("/trades/{id}"), Method::GET, None)
    }

    /// Trades are created as form data because they can carry a screenshot.
    pub fn create_trade(&self, form: Form) -> Result<Response, ApiError> {
        self.request_form("/trades/", Method::POST, form)
    }

    pub fn update_trade(&self, id: i64, form: Form) -> Result<Response, ApiError> {
        self.request_form(&format!("/trades/{id}"), Method::PUT, form)
    }

    pub fn delete_trade(&self, id: i64) -> Result<Response, ApiError> {
        self.request(&format!("/trades/{id}"), Method::DELETE, None)
    }

    // ── Notes ──

    pub fn get_notes(&self, filter: &[(&str, &str)]) -> Result<Response, ApiError> {
        self.request_with_query("/notes/", filter)
    }

    pub fn get_note(&self, id: i64) -> Result<Response, ApiError> {
        self.request(&format!("/notes/{id}"), Method::GET, None)
    }

    pub fn create_note(&self, note: &NewNote) -> Result<Response, ApiError> {
        let body = serde_json::to_value(note)
            .map_err(|e| ApiError::Decode(format!("note body: {e}")))?;
        self.request("/notes/", Method::POST, Some(&body))
    }

    pub fn update_note(&self, id: i64, note: &NewNote) -> Result<Response, ApiError> {
        let body = serde_json::to_value(note)
            .map_err(|e| ApiError::Decode(format!("note body: {e}")))?;
        self.request(&format!("/notes/{id}"), Method::PUT, Some(&body))
    }

    pub fn delete_note(&self, id: i64) -> Result<Response, ApiError> {
        self.request(&format!("/notes/{id}"), Method::DELETE, None)
    }

    // ── Playbooks ──

    pub fn get_playbooks(&self) -> Result<Response, ApiError> {
        self.request("/playbooks/", Method::GET, None)
    }

    pub fn get_playbook(&self, id: &str) -> Result<Response, ApiError> {
        self.request(&format!("/playbooks/{id}"), Method::GET, None)
    }

    pub fn create_playbook(&self, playbook: &serde_json::Value) -> Result<Response, ApiError> {
        self.request("/playbooks/", Method::POST, Some(playbook))
    }

    pub fn update_playbook(
        &self,
        id: &str,
        playbook: &serde_json::Value,
    ) -> Result<Response, ApiError> {
        self.request(&format!("/playbooks/{id}"), Method::PUT, Some(playbook))
    }

    pub fn delete_playbook(&self, id: &str) -> Result<Response, ApiError> {
        self.request(&format!("/playbooks/{id}"), Method::DELETE, None)
    }

    // ── User & events ──

    pub fn get_user(&self) -> Result<Response, ApiError> {
        self.request("/auth/user", Method::GET, None)
    }

    pub fn upload_avatar(&self, avatar: &str) -> Result<Response, ApiError> {
        let body = serde_json::json!({ "avatar": avatar });
        self.request("/auth/avatar", Method::POST, Some(&body))
    }

    pub fn get_events(&self) -> Result<Response, ApiError> {
        self.request("/events", Method::GET, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        let config = ApiConfig::default();
        let mut api = ApiClient::new(&config).unwrap();
        assert!(api.token().is_none());

        api.set_token(Some("abc123".into()));
        assert_eq!(api.token(), Some("abc123"));

        let resumed = ApiClient::with_token(&config, Some("abc123".into())).unwrap();
        assert_eq!(resumed.token(), Some("abc123"));
    }

    #[test]
    fn urls_join_without_double_slash() {
        let config = ApiConfig::from_toml(r#"base_url = "http://localhost:5000/""#).unwrap();
        let api = ApiClient::new(&config).unwrap();
        assert_eq!(api.url("/trades/"), "http://localhost:5000/trades/");
    }
}
