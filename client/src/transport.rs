use crate::api::{
    BATCH_PUSH_PATH, BatchPushBody, BatchPushResponse, HISTORY_PATH, HistoryResponse, PUSH_PATH,
    PushBody, PushResponse,
};
use crate::common::TransportError;
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Request/response channel to the push backend.
///
/// Each method performs exactly one exchange and never retries. An `Err`
/// means the exchange itself failed; a backend that answered with
/// `success: false` is an `Ok` response.
///
/// # Examples
///
/// ```no_run
/// use client::api::{BatchPushBody, BatchPushResponse, HistoryResponse, PushBody, PushResponse};
/// use client::common::TransportError;
/// use client::transport::PushTransport;
/// use async_trait::async_trait;
///
/// struct AlwaysOk;
///
/// #[async_trait]
/// impl PushTransport for AlwaysOk {
///     async fn push(&self, _body: PushBody) -> Result<PushResponse, TransportError> {
///         Ok(PushResponse { success: true, data: None, message: None })
///     }
///
///     async fn push_batch(&self, _body: BatchPushBody) -> Result<BatchPushResponse, TransportError> {
///         Ok(BatchPushResponse { success: true, message: None, results: Some(vec![]) })
///     }
///
///     async fn history(&self) -> Result<HistoryResponse, TransportError> {
///         Ok(HistoryResponse { success: true, data: serde_json::Value::Null })
///     }
/// }
/// ```
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// `POST /api/push`
    async fn push(&self, body: PushBody) -> Result<PushResponse, TransportError>;

    /// `POST /api/push/batch`
    async fn push_batch(&self, body: BatchPushBody) -> Result<BatchPushResponse, TransportError>;

    /// `GET /api/push/history`
    async fn history(&self) -> Result<HistoryResponse, TransportError>;

    /// Where requests for `path` are sent, used to label errors.
    fn endpoint_url(&self, path: &str) -> String {
        path.to_string()
    }
}

#[async_trait]
impl<T: PushTransport + ?Sized> PushTransport for std::sync::Arc<T> {
    async fn push(&self, body: PushBody) -> Result<PushResponse, TransportError> {
        (**self).push(body).await
    }

    async fn push_batch(&self, body: BatchPushBody) -> Result<BatchPushResponse, TransportError> {
        (**self).push_batch(body).await
    }

    async fn history(&self) -> Result<HistoryResponse, TransportError> {
        (**self).history().await
    }

    fn endpoint_url(&self, path: &str) -> String {
        (**self).endpoint_url(path)
    }
}

/// [`PushTransport`] over HTTP with JSON bodies.
///
/// The HTTP status is not used to decide success: the body is parsed as JSON
/// whatever the status, and only a body that fails to parse is a transport
/// error.
#[derive(Debug, Clone)]
pub struct HttpPushTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpPushTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TransportError::ClientCreation {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, TransportError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&url, self.config.request_timeout_secs(), e))?;

        self.read_json(&url, response).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&url, self.config.request_timeout_secs(), e))?;

        self.read_json(&url, response).await
    }

    async fn read_json<R: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<R, TransportError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(url, self.config.request_timeout_secs(), e))?;

        serde_json::from_str(&text).map_err(|e| {
            TransportError::invalid_response(url, format!("HTTP {status}, unparseable body: {e}"))
        })
    }
}

#[async_trait]
impl PushTransport for HttpPushTransport {
    async fn push(&self, body: PushBody) -> Result<PushResponse, TransportError> {
        self.post_json(PUSH_PATH, &body).await
    }

    async fn push_batch(&self, body: BatchPushBody) -> Result<BatchPushResponse, TransportError> {
        self.post_json(BATCH_PUSH_PATH, &body).await
    }

    async fn history(&self) -> Result<HistoryResponse, TransportError> {
        self.get_json(HISTORY_PATH).await
    }

    fn endpoint_url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}
