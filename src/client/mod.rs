//! Typed HTTP stores mirroring the admin and customer screens.
//!
//! Each store holds the last-fetched list in memory and patches it locally
//! after a successful call instead of refetching. State is per-instance;
//! another client's concurrent edit is invisible until the next `refresh`.
//! All field rules run before a request is issued, so invalid input never
//! reaches the wire.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod deliveries;
pub mod feedback;
pub mod orders;
pub mod suppliers;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0} is already taken")]
    DuplicateName(String),

    #[error("api error: {message} (status {status})")]
    Api { status: StatusCode, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Client-side mirror of the server's response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListData<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::parse(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .map(|envelope| envelope.message)
                .unwrap_or_else(|_| "request failed".to_string());
            return Err(ClientError::Api { status, message });
        }

        let envelope = response.json::<Envelope<T>>().await?;
        match envelope.data {
            Some(data) => Ok(data),
            None => Err(ClientError::Api {
                status,
                message: envelope.message,
            }),
        }
    }
}
