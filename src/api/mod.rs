//! REST client for the external users API.
//!
//! `UserApi` is the seam the store depends on; `HttpUserApi` is the
//! `reqwest`-backed implementation used by the binary.
//!
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::model::{NewUser, User};

const USERS_PATH: &str = "/users";
const ERROR_BODY_LIMIT: usize = 200;

/// Operations the store needs from the users backend.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;
    /// `POST /users`, returning the created user with its assigned id.
    async fn create_user(&self, input: &NewUser) -> ApiResult<User>;
}

/// `UserApi` over HTTP with a fixed base URL.
#[derive(Clone, Debug)]
pub struct HttpUserApi {
    http: Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                url,
                status,
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let bytes = match response.bytes().await {
            Ok(b) => b,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { url, source })
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let url = self.url(USERS_PATH);
        tracing::debug!(%url, "GET users");
        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };
        Self::read_json(url, response).await
    }

    async fn create_user(&self, input: &NewUser) -> ApiResult<User> {
        let url = self.url(USERS_PATH);
        tracing::debug!(%url, email = %input.email, "POST user");
        let response = match self.http.post(&url).json(input).send().await {
            Ok(r) => r,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };
        Self::read_json(url, response).await
    }
}
