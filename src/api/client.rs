//! HTTP Client
//!
//! Builds JSON requests against the configured base URL and turns responses
//! into typed results. One attempt per call: no retry, no timeout.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built request, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and returns the raw status and body.
///
/// Futures are not `Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport backed by `reqwest` (the Fetch API on wasm32)
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Stateless request helper. Credentials are passed per call.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            base_url: base_url.into(),
            transport: Arc::new(transport),
        }
    }

    pub fn with_reqwest(base_url: impl Into<String>) -> Self {
        Self::new(base_url, ReqwestTransport::default())
    }

    /// Send one request. `Ok(None)` means the server answered 204.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<Option<String>, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        log::debug!("{} {}", method.as_str(), path);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if !(200..300).contains(&response.status) {
            let err = ApiError::from_response(response.status, &response.body);
            log::warn!("{} {} -> {}: {}", method.as_str(), path, response.status, err);
            return Err(err);
        }
        if response.status == 204 {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    /// Request expecting a JSON body back
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let body = encode(body)?;
        let raw = self
            .send(method, path, body, token)
            .await?
            .ok_or_else(|| ApiError::Decode("empty response".to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Request whose response body is ignored
    pub async fn fetch_empty(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<(), ApiError> {
        self.send(method, path, None, token).await.map(|_| ())
    }
}

fn encode(body: Option<&impl Serialize>) -> Result<Option<String>, ApiError> {
    body.map(serde_json::to_string)
        .transpose()
        .map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use futures::executor::block_on;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pong {
        ok: bool,
    }

    fn client(mock: &MockTransport) -> ApiClient {
        ApiClient::new("http://api.test", mock.clone())
    }

    #[test]
    fn test_builds_url_and_json_header() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"ok":true}"#);

        let pong: Pong = block_on(client(&mock).fetch_json(Method::Get, "/ping", None::<&()>, None)).unwrap();
        assert_eq!(pong, Pong { ok: true });

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://api.test/ping");
        assert_eq!(sent[0].header("content-type"), Some("application/json"));
        assert_eq!(sent[0].header("authorization"), None);
        assert_eq!(sent[0].body, None);
    }

    #[test]
    fn test_attaches_bearer_token() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"ok":true}"#);

        let _: Pong = block_on(client(&mock).fetch_json(
            Method::Post,
            "/ping",
            Some(&serde_json::json!({"a": 1})),
            Some("secret"),
        ))
        .unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer secret"));
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_no_content_yields_nothing() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        assert_eq!(block_on(client(&mock).send(Method::Delete, "/x", None, Some("t"))), Ok(None));
    }

    #[test]
    fn test_error_status_surfaces_detail() {
        let mock = MockTransport::new();
        mock.respond(403, r#"{"detail":"Forbidden"}"#);
        let err = block_on(client(&mock).fetch_empty(Method::Get, "/x", Some("t"))).unwrap_err();
        assert_eq!(err.to_string(), "Forbidden");
    }

    #[test]
    fn test_network_failure_propagates_without_retry() {
        let mock = MockTransport::new();
        mock.fail("connection refused");
        let err = block_on(client(&mock).fetch_empty(Method::Get, "/x", None)).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(mock.requests().len(), 1);
    }

    #[test]
    fn test_bad_success_body_is_decode_error() {
        let mock = MockTransport::new();
        mock.respond(200, "not json");
        let result: Result<Pong, _> = block_on(client(&mock).fetch_json(Method::Get, "/x", None::<&()>, None));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
