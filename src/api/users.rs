//! Client for the server's users and config REST endpoints.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ConsoleResult};
use crate::models::{NewUser, PasswordPolicy, ServerError, UserProfile, INVALID_RESPONSE_MESSAGE};
use crate::traits::{CreateUserResult, Headers, HttpClient, Response, UserCreator};

const API_PREFIX: &str = "/api/v4";

/// Error body the server sends with every non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status_code: Option<u16>,
}

/// Users API over an injectable [`HttpClient`].
pub struct UsersApi<C = ReqwestHttpClient> {
    base_url: String,
    http: C,
    auth_token: Option<String>,
}

impl UsersApi<ReqwestHttpClient> {
    /// Client backed by reqwest.
    pub fn connect(base_url: &str) -> Self {
        Self::new(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> UsersApi<C> {
    /// `base_url` is the server root, e.g. `https://chat.example.com`.
    pub fn new(base_url: &str, http: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            auth_token: None,
        }
    }

    /// Set the bearer token sent with every request.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_route(&self) -> String {
        format!("{}{}/users", self.base_url, API_PREFIX)
    }

    /// Create-user URL. Each invite parameter is appended only when non-empty.
    pub fn create_user_url(&self, token: &str, invite_id: &str, redirect: &str) -> String {
        let query: Vec<String> = [("t", token), ("iid", invite_id), ("r", redirect)]
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if query.is_empty() {
            self.users_route()
        } else {
            format!("{}?{}", self.users_route(), query.join("&"))
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("X-Requested-With".to_string(), "XMLHttpRequest".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(ref token) = self.auth_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Decode a 2xx body, or turn the server's error body into [`ApiError::Status`].
    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.is_success() {
            return Ok(response.json()?);
        }

        match response.json::<ErrorBody>() {
            Ok(body) => Err(ApiError::Status {
                status: body.status_code.unwrap_or(response.status),
                message: body.message,
                id: body.id,
            }),
            Err(_) => Err(ApiError::Status {
                status: response.status,
                message: INVALID_RESPONSE_MESSAGE.to_string(),
                id: None,
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url, &self.headers()).await?;
        Self::decode(response)
    }

    /// POST /api/v4/users
    pub async fn create_user_checked(
        &self,
        user: &NewUser,
        token: &str,
        invite_id: &str,
        redirect: &str,
    ) -> Result<UserProfile, ApiError> {
        let url = self.create_user_url(token, invite_id, redirect);
        let body = serde_json::to_string(user)?;
        debug!(%url, username = %user.username, "POST create user");
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::decode(response)
    }

    /// GET /api/v4/config/client?format=old
    pub async fn get_client_config(&self) -> Result<HashMap<String, String>, ApiError> {
        let url = format!("{}{}/config/client?format=old", self.base_url, API_PREFIX);
        self.get_json(&url).await
    }

    /// Password policy from the client config.
    pub async fn fetch_password_policy(&self) -> ConsoleResult<PasswordPolicy> {
        let config = self.get_client_config().await?;
        Ok(PasswordPolicy::from_client_config(&config)?)
    }

    /// GET /api/v4/users/me
    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        let url = format!("{}/me", self.users_route());
        self.get_json(&url).await
    }
}

/// Flatten an [`ApiError`] into the shape the dialog routes on.
///
/// Anything that is not a server-reported status becomes
/// [`INVALID_RESPONSE_MESSAGE`].
pub fn to_server_error(err: ApiError, url: &str) -> ServerError {
    match err {
        ApiError::Status {
            status,
            message,
            id,
        } => {
            let mut server_error = ServerError::new(message).with_status(status).with_url(url);
            server_error.server_error_id = id;
            server_error
        }
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::InvalidUrl(_) => {
            ServerError::invalid_response(url)
        }
    }
}

#[async_trait]
impl<C: HttpClient> UserCreator for UsersApi<C> {
    async fn create_user(
        &self,
        user: &NewUser,
        token: &str,
        invite_id: &str,
        redirect: &str,
    ) -> CreateUserResult {
        self.create_user_checked(user, token, invite_id, redirect)
            .await
            .map_err(|err| {
                debug!(error = %err, "create user request failed");
                to_server_error(err, &self.create_user_url(token, invite_id, redirect))
            })
    }
}
