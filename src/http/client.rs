//! Authenticated request executor with built-in retry.

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::request::RequestSpec;
use super::retry::RetryPolicy;
use crate::config::ClientConfig;
use crate::error::{ApiError, classify};

/// Executor for logical API calls.
///
/// Owns the shared connection pool, the credentials and the retry policy.
/// Cloning is cheap and clones share the pool; no other state is retained
/// between calls.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Builds the executor from validated configuration. The bearer token is
    /// installed as a sensitive default header so every request carries it.
    pub fn new(config: &ClientConfig, retry: RetryPolicy) -> Result<Self, ApiError> {
        let mut auth_value = HeaderValue::from_str(&config.bearer_header())
            .map_err(|e| ApiError::config(format!("API token is not a valid header value: {e}")))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .user_agent(concat!("netbird-rs/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            retry,
        })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Executes one logical call and deserializes the success body.
    #[tracing::instrument(skip(self, spec), fields(method = %spec.method, path = %spec.path))]
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T, ApiError> {
        let body = self.dispatch(&spec).await?;
        serde_json::from_slice(&body).map_err(|e| {
            ApiError::decode(format!(
                "failed to deserialize response for {} {}: {}",
                spec.method, spec.path, e
            ))
        })
    }

    /// Executes one logical call, discarding the success body. Used for
    /// delete-style endpoints that return no content.
    #[tracing::instrument(skip(self, spec), fields(method = %spec.method, path = %spec.path))]
    pub async fn execute_no_content(&self, spec: RequestSpec) -> Result<(), ApiError> {
        self.dispatch(&spec).await.map(|_| ())
    }

    /// GET convenience wrapper.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut spec = RequestSpec::get(path);
        for (key, value) in query {
            spec = spec.query(*key, *value);
        }
        self.execute(spec).await
    }

    /// POST convenience wrapper.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(RequestSpec::post(path, encode_body(body)?)).await
    }

    /// PUT convenience wrapper.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(RequestSpec::put(path, encode_body(body)?)).await
    }

    /// DELETE convenience wrapper.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_no_content(RequestSpec::delete(path)).await
    }

    /// Attempt loop. Returns the raw body of the first successful attempt or
    /// the last classified error annotated with the attempts made. Attempts
    /// are strictly sequential; the only suspension points are the send and
    /// the backoff sleep.
    async fn dispatch(&self, spec: &RequestSpec) -> Result<Vec<u8>, ApiError> {
        let mut attempt = 1u32;
        loop {
            match self.send_once(spec).await {
                Ok(body) => return Ok(body),
                Err(err) => match self.retry.delay_before_retry(&err, attempt) {
                    Some(delay) => {
                        warn!(
                            "{} {}: attempt {}/{} failed ({}), retrying in {}ms...",
                            spec.method,
                            spec.path,
                            attempt,
                            self.retry.max_attempts,
                            err,
                            delay.as_millis()
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    None => {
                        debug!(
                            "{} {}: giving up after {} attempt(s): {}",
                            spec.method, spec.path, attempt, err
                        );
                        return Err(err.with_attempts(attempt));
                    }
                },
            }
        }
    }

    /// A single HTTP attempt: build, send, classify.
    async fn send_once(&self, spec: &RequestSpec) -> Result<Vec<u8>, ApiError> {
        let url = self.url(&spec.path);
        debug!("{} {}", spec.method, url);

        let mut request = self.client.request(spec.method.clone(), &url);
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        let retry_after = parse_retry_after(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response body: {e}")))?;

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(classify(status.as_u16(), retry_after, &body))
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// `Retry-After` in its delay-seconds form; HTTP-date values are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::decode(format!("failed to serialize request body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn test_client(server: &mockito::ServerGuard, retry: RetryPolicy) -> HttpClient {
        let config = ClientConfig::builder(server.host_with_port(), "test-token")
            .use_ssl(false)
            .build()
            .unwrap();
        HttpClient::new(&config, retry).unwrap()
    }

    fn fast_retry(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
            jitter_pct: 0,
        }
    }

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Widget {
        name: String,
    }

    #[tokio::test]
    async fn test_success_carries_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/widgets/w1")
            .match_header("Authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "w1"}"#)
            .create_async()
            .await;

        let client = test_client(&server, RetryPolicy::no_retry());
        let widget: Widget = client.get("widgets/w1", &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(widget.name, "w1");
    }

    #[tokio::test]
    async fn test_not_found_is_terminal_on_first_attempt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/users/42")
            .with_status(404)
            .with_body(r#"{"message": "user not found"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(3));
        let err = client.get::<Widget>("users/42", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.attempts, 1);
        assert_eq!(err.message, "user not found");
    }

    #[tokio::test]
    async fn test_validation_never_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/groups")
            .with_status(422)
            .with_body(r#"{"message": "name required"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(3));
        let err = client
            .post::<_, Widget>("groups", &serde_json::json!({}))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.attempts, 1);
    }

    #[tokio::test]
    async fn test_server_error_retried_to_exhaustion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/peers")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(3));
        let err = client.get::<Vec<Widget>>("peers", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.status, Some(503));
        assert_eq!(err.attempts, 3);
    }

    #[tokio::test]
    async fn test_transient_failure_then_success() {
        let mut server = mockito::Server::new_async().await;
        let failing = server
            .mock("GET", "/api/peers")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;
        let succeeding = server
            .mock("GET", "/api/peers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "peer-a"}]"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(3));
        let peers: Vec<Widget> = client.get("peers", &[]).await.unwrap();

        failing.assert_async().await;
        succeeding.assert_async().await;
        assert_eq!(peers.len(), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_surfaces_retry_after() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/peers")
            .with_status(429)
            .with_header("Retry-After", "7")
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, RetryPolicy::no_retry());
        let err = client.get::<Vec<Widget>>("peers", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind, ErrorKind::RateLimit);
        assert_eq!(err.retry_after, Some(Duration::from_secs(7)));
    }

    #[tokio::test]
    async fn test_connection_failure_classified_as_network() {
        // Bind to a port nothing listens on.
        let config = ClientConfig::builder("127.0.0.1:1", "token")
            .use_ssl(false)
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let client = HttpClient::new(&config, RetryPolicy::no_retry()).unwrap();

        let err = client.get::<Widget>("peers", &[]).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert!(err.kind.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/widgets/w1")
            .with_status(200)
            .with_body("not json")
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(3));
        let err = client.get::<Widget>("widgets/w1", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind, ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_delete_tolerates_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/peers/p1")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server, RetryPolicy::no_retry());
        client.delete("peers/p1").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_independent_calls_have_independent_retry_state() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/peers")
            .with_status(500)
            .expect(4)
            .create_async()
            .await;

        let client = test_client(&server, fast_retry(2));
        let first = client.get::<Vec<Widget>>("peers", &[]).await.unwrap_err();
        let second = client.get::<Vec<Widget>>("peers", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(first.attempts, 2);
        assert_eq!(second.attempts, 2);
    }
}
