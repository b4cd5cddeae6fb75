use std::rc::Rc;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{LeaderboardError, LeaderboardResult};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> LeaderboardResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The body as JSON, or as a JSON string when it is not JSON.
    pub fn json_value(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|_| serde_json::Value::String(self.body.clone()))
    }
}

/// The HTTP collaborator. Everything the client sends goes through `send`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> LeaderboardResult<ApiResponse>;

    async fn get(&self, path: &str) -> LeaderboardResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Get, path, None)).await
    }

    async fn post(&self, path: &str, body: Option<serde_json::Value>) -> LeaderboardResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Post, path, body)).await
    }

    async fn put(&self, path: &str, body: Option<serde_json::Value>) -> LeaderboardResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Put, path, body)).await
    }

    async fn delete(&self, path: &str) -> LeaderboardResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Delete, path, None)).await
    }

    async fn patch(&self, path: &str, body: Option<serde_json::Value>) -> LeaderboardResult<ApiResponse> {
        self.send(ApiRequest::new(HttpMethod::Patch, path, body)).await
    }
}

impl<T: Transport> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> LeaderboardResult<ApiResponse> {
        T::send(self, request).await
    }
}

impl<T: Transport> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> LeaderboardResult<ApiResponse> {
        T::send(self, request).await
    }
}

/// `reqwest` backed transport rooted at the API base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URLs (pagination cursors) are used as given.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> LeaderboardResult<ApiResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        };
        let url = self.url(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self.client.request(method, &url);
        if let Some(body) = request.body.filter(|_| request.method.carries_body()) {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LeaderboardError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LeaderboardError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_onto_the_base_url() {
        let transport = HttpTransport::new("https://api.example.org/");
        assert_eq!(
            transport.url("/leaderboard/github/?order_by=prs"),
            "https://api.example.org/leaderboard/github/?order_by=prs"
        );
        assert_eq!(transport.url("members/"), "https://api.example.org/members/");
        assert_eq!(
            transport.url("https://other.example.org/leaderboard/attendance/?page=2"),
            "https://other.example.org/leaderboard/attendance/?page=2"
        );
    }

    #[test]
    fn methods_parse_case_insensitively() {
        assert_eq!("patch".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert!(!HttpMethod::Get.carries_body());
        assert!(HttpMethod::Put.carries_body());
    }

    #[test]
    fn non_json_bodies_are_kept_as_text() {
        let response = ApiResponse {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(response.json_value(), serde_json::json!("Bad Gateway"));
        assert!(!response.is_success());
    }
}
