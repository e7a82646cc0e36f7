// resort-client/src/client/http.rs
// HTTP client - network transport

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::{ClientError, ClientResult};

/// HTTP transport used by the gateways
///
/// `path` is relative to the API root (`"rooms/3"`, `"/auth/me"`); query
/// strings are passed as part of the path.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// Replace the bearer token sent with every request
    async fn set_token(&self, token: Option<String>);
    async fn token(&self) -> Option<String>;
}

/// Network HTTP client (reqwest)
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "HTTP request");
        let mut req = self.client.request(method, url);
        if let Some(token) = self.token.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "HTTP request failed");
            return Err(ClientError::from_status(status, text));
        }
        let body = response.bytes().await?;
        decode_body(&body)
    }
}

/// Decode a 2xx body; malformed JSON is an invalid response, not a transport error
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await;
        self.send(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await.json(body);
        self.send(req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).await.json(body);
        self.send(req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).await.json(body);
        self.send(req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path).await;
        self.send(req).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_url_joining() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:5000/api/"))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/rooms/3"), "http://localhost:5000/api/rooms/3");
        assert_eq!(client.url("resorts"), "http://localhost:5000/api/resorts");
    }

    #[tokio::test]
    async fn test_token_from_config() {
        let config = ClientConfig::default().with_token("abc");
        let client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.token().await.as_deref(), Some("abc"));

        client.set_token(None).await;
        assert!(client.token().await.is_none());
    }

    #[test]
    fn test_malformed_success_body_is_invalid_response() {
        let ok: ClientResult<Vec<i64>> = decode_body(br#"[1,2]"#);
        assert_eq!(ok.unwrap(), vec![1, 2]);

        let err = decode_body::<Vec<i64>>(b"<html>gateway</html>").unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidResponse(m) if m.starts_with("JSON parse error")
        ));
    }
}
