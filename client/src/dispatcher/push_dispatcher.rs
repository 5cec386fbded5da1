use super::submission::Submission;
use crate::api::{BATCH_PUSH_PATH, BatchPushBody, PushBody};
use crate::common::{DispatchError, TransportError};
use crate::config::ClientConfig;
use crate::model::{
    BatchItemOutcome, BatchOutcome, HistorySnapshot, NO_DATA_PLACEHOLDER, PushOutcome,
    PushRequest, UNKNOWN_ERROR,
};
use crate::transport::{HttpPushTransport, PushTransport};
use crate::validation::{PushValidator, Validator, filter_batch};

/// Issues push exchanges and turns their responses into outcomes.
///
/// Every call performs at most one exchange and never retries. Failures of
/// any kind (rejected input, unreachable backend, backend-reported failure)
/// end in a failed outcome rather than an error.
///
/// # Examples
///
/// ```no_run
/// use client::{ClientConfig, Dispatcher, Submission};
/// use client::presentation::render_push;
///
/// let dispatcher = Dispatcher::from_config(ClientConfig::from_env()?)?;
/// let push_button = Submission::new();
///
/// let outcome = dispatcher
///     .submit_single(&push_button, "https://hooks.example.com/a", "deploy finished")
///     .await?;
/// println!("{}", render_push(&outcome).text);
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
    validator: PushValidator,
}

impl Dispatcher<HttpPushTransport> {
    /// Creates a dispatcher talking HTTP to the configured backend.
    pub fn from_config(config: ClientConfig) -> Result<Self, TransportError> {
        let validator = PushValidator::new(config.max_content_length());
        let transport = HttpPushTransport::new(config)?;
        Ok(Self::with_validator(transport, validator))
    }
}

impl<T: PushTransport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_validator(transport, PushValidator::default())
    }

    pub fn with_validator(transport: T, validator: PushValidator) -> Self {
        Self {
            transport,
            validator,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one push and maps the response.
    pub async fn dispatch_single(&self, request: PushRequest) -> PushOutcome {
        match self.transport.push(PushBody::from(request)).await {
            Err(error) => {
                log::error!("Push exchange failed: {error}");
                PushOutcome::transport_failed(&error)
            }
            Ok(response) if response.success => {
                let message = response
                    .data_text()
                    .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_string());
                PushOutcome::success(message)
            }
            Ok(response) => {
                let reason = response.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                log::warn!("Push rejected by backend: {reason}");
                PushOutcome::application_failed(reason)
            }
        }
    }

    /// Sends an ordered batch in one exchange and maps the per-item results.
    ///
    /// An empty `requests` list is answered with a "no valid items" failure
    /// without contacting the backend.
    pub async fn dispatch_batch(&self, requests: Vec<PushRequest>) -> BatchOutcome {
        if requests.is_empty() {
            log::warn!("No valid items for batch push; nothing sent");
            return BatchOutcome::no_valid_items();
        }

        let body: BatchPushBody = requests.into_iter().collect();
        match self.transport.push_batch(body).await {
            Err(error) => {
                log::error!("Batch push exchange failed: {error}");
                BatchOutcome::transport_failed(&error)
            }
            Ok(response) if response.success => match response.results {
                Some(results) => {
                    let items: Vec<BatchItemOutcome> =
                        results.into_iter().map(BatchItemOutcome::from).collect();
                    let outcome = BatchOutcome::completed(items);
                    log::info!(
                        "Batch push completed: {} successful, {} failed",
                        outcome.success_count(),
                        outcome.failure_count()
                    );
                    outcome
                }
                None => {
                    let error = TransportError::invalid_response(
                        &self.transport.endpoint_url(BATCH_PUSH_PATH),
                        "successful batch response without results",
                    );
                    log::error!("{error}");
                    BatchOutcome::transport_failed(&error)
                }
            },
            Ok(response) => {
                let reason = response.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                log::warn!("Batch push rejected by backend: {reason}");
                BatchOutcome::application_failed(reason)
            }
        }
    }

    /// Validates and sends a single push on behalf of a trigger.
    ///
    /// Rejected input leaves `submission` untouched and yields a failed
    /// outcome without any exchange.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AlreadySubmitting`] if `submission` is still in flight.
    pub async fn submit_single(
        &self,
        submission: &Submission,
        destination: &str,
        content: &str,
    ) -> Result<PushOutcome, DispatchError> {
        if submission.is_submitting() {
            return Err(DispatchError::AlreadySubmitting);
        }

        let request = match self.validator.validate(&(destination, content)) {
            Ok(request) => request,
            Err(error) => {
                log::debug!("Single push rejected by validation: {error}");
                return Ok(PushOutcome::validation_failed(&error));
            }
        };

        let in_flight = submission.begin("push")?;
        log::info!(
            "Submission {} started: push to {}",
            in_flight.id(),
            request.destination()
        );

        let outcome = self.dispatch_single(request).await;
        in_flight.resolve(outcome.succeeded());
        Ok(outcome)
    }

    /// Filters the entries and sends the survivors as one batch.
    ///
    /// When nothing survives filtering the submission stays idle and a
    /// "no valid items" failure is returned.
    ///
    /// # Errors
    ///
    /// [`DispatchError::AlreadySubmitting`] if `submission` is still in flight.
    pub async fn submit_batch<I, D, C>(
        &self,
        submission: &Submission,
        entries: I,
    ) -> Result<BatchOutcome, DispatchError>
    where
        I: IntoIterator<Item = (D, C)>,
        D: AsRef<str>,
        C: AsRef<str>,
    {
        if submission.is_submitting() {
            return Err(DispatchError::AlreadySubmitting);
        }

        let requests = filter_batch(entries);
        if requests.is_empty() {
            log::debug!("Batch push rejected: no valid items");
            return Ok(BatchOutcome::no_valid_items());
        }

        let in_flight = submission.begin("batch push")?;
        log::info!(
            "Submission {} started: batch push of {} items",
            in_flight.id(),
            requests.len()
        );

        let outcome = self.dispatch_batch(requests).await;
        in_flight.resolve(outcome.succeeded());
        Ok(outcome)
    }

    /// Reads the push history once.
    ///
    /// Failures are logged and reported as `None`; they never affect
    /// dispatching.
    pub async fn load_history(&self) -> Option<HistorySnapshot> {
        match self.transport.history().await {
            Ok(response) if response.success => {
                log::info!("Push history loaded: {}", response.data);
                Some(HistorySnapshot {
                    data: response.data,
                    fetched_at: chrono::Utc::now(),
                })
            }
            Ok(_) => {
                log::debug!("Push history unavailable: backend reported failure");
                None
            }
            Err(error) => {
                log::warn!("Failed to load push history: {error}");
                None
            }
        }
    }
}
