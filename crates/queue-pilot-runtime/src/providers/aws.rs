//! AWS SQS provider implementation.
//!
//! This module integrates with Amazon SQS through the official SDK. Queue
//! creation, sends, receives, and depth queries map one-to-one onto the
//! corresponding SQS API calls.
//!
//! ## Authentication
//!
//! Credentials come from either explicit access keys in [`AwsSqsConfig`] or
//! the ambient AWS credential chain (environment variables, profiles,
//! instance metadata). A custom `endpoint_url` points the client at
//! SQS-compatible local services.
//!
//! ## Status Handling
//!
//! Send and receive report backend rejections in-band through the reply
//! status code. Transport failures and authentication failures are raised as
//! [`ServiceError`] instead. Control-plane calls treat every failure as fatal.

use crate::client::QueueService;
use crate::error::{ConfigurationError, ServiceError};
use crate::message::{QueueHandle, QueueName, ReceivedPayload, ReceiveReply, SendReceipt};
use crate::provider::{AwsSqsConfig, ProviderType};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::config::Credentials;
use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};
use aws_sdk_sqs::types::QueueAttributeName;
use aws_sdk_sqs::Client;
use std::fmt;
use tracing::debug;

#[cfg(test)]
#[path = "aws_tests.rs"]
mod tests;

const PROVIDER: &str = "aws-sqs";

// ============================================================================
// Failure Classification
// ============================================================================

/// Extract the HTTP status and a readable description from an SDK failure.
fn failure_parts<E>(err: &SdkError<E>) -> (Option<u16>, String)
where
    E: std::error::Error + 'static,
{
    let status = err.raw_response().map(|response| response.status().as_u16());
    (status, DisplayErrorContext(err).to_string())
}

/// Classify a data-plane failure into an in-band status or a fatal error.
///
/// Backend rejections keep their HTTP status and flow back through the call
/// reply. Authentication failures and failures without a response abort the
/// operation instead.
fn reply_status(status: Option<u16>, message: String) -> Result<u16, ServiceError> {
    match status {
        Some(401) | Some(403) => Err(ServiceError::AuthenticationFailed { message }),
        Some(code) => Ok(code),
        None => Err(ServiceError::ConnectionFailed { message }),
    }
}

/// Classify a control-plane failure. Every outcome is fatal.
fn fatal_error(status: Option<u16>, message: String) -> ServiceError {
    match status {
        Some(401) | Some(403) => ServiceError::AuthenticationFailed { message },
        Some(code) => ServiceError::ProviderError {
            provider: PROVIDER.to_string(),
            code: code.to_string(),
            message,
        },
        None => ServiceError::ConnectionFailed { message },
    }
}

// ============================================================================
// SQS Queue Service
// ============================================================================

/// AWS SQS queue service implementation.
pub struct SqsQueueService {
    client: Client,
    config: AwsSqsConfig,
}

impl SqsQueueService {
    /// Connect to AWS SQS with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the region is empty or only one half
    /// of a static credential pair is present.
    pub async fn connect(config: AwsSqsConfig) -> Result<Self, ServiceError> {
        if config.region.is_empty() {
            return Err(ServiceError::ConfigurationError(
                ConfigurationError::Invalid {
                    message: "region cannot be empty".to_string(),
                },
            ));
        }

        let credentials = match (&config.access_key_id, &config.secret_access_key) {
            (Some(access_key), Some(secret_key)) => Some(Credentials::new(
                access_key.clone(),
                secret_key.clone(),
                None,
                None,
                "queue-pilot-config",
            )),
            (Some(_), None) => {
                return Err(ServiceError::ConfigurationError(
                    ConfigurationError::Missing {
                        key: "secret_access_key".to_string(),
                    },
                ))
            }
            (None, Some(_)) => {
                return Err(ServiceError::ConfigurationError(
                    ConfigurationError::Missing {
                        key: "access_key_id".to_string(),
                    },
                ))
            }
            (None, None) => None,
        };

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some(credentials) = credentials {
            loader = loader.credentials_provider(credentials);
        }

        let sdk_config = loader.load().await;
        let client = Client::new(&sdk_config);
        debug!(region = %config.region, "SQS client ready");

        Ok(Self { client, config })
    }
}

impl fmt::Debug for SqsQueueService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Credentials stay out of debug output.
        f.debug_struct("SqsQueueService")
            .field("region", &self.config.region)
            .field("endpoint_url", &self.config.endpoint_url)
            .finish()
    }
}

#[async_trait]
impl QueueService for SqsQueueService {
    async fn create_queue(
        &self,
        name: &QueueName,
        visibility_timeout_seconds: u32,
    ) -> Result<QueueHandle, ServiceError> {
        let result = self
            .client
            .create_queue()
            .queue_name(name.as_str())
            .attributes(
                QueueAttributeName::VisibilityTimeout,
                visibility_timeout_seconds.to_string(),
            )
            .send()
            .await;

        match result {
            Ok(output) => {
                let url = output.queue_url().map(str::to_string).ok_or_else(|| {
                    ServiceError::ProviderError {
                        provider: PROVIDER.to_string(),
                        code: "MissingQueueUrl".to_string(),
                        message: format!("CreateQueue for {name} returned no queue URL"),
                    }
                })?;
                debug!(queue = %name, url = %url, "SQS queue ready");
                Ok(QueueHandle::new(url, visibility_timeout_seconds))
            }
            Err(err) => {
                let (status, message) = failure_parts(&err);
                Err(fatal_error(status, message))
            }
        }
    }

    async fn send(
        &self,
        queue: &QueueHandle,
        body: String,
    ) -> Result<SendReceipt, ServiceError> {
        let result = self
            .client
            .send_message()
            .queue_url(queue.url())
            .message_body(body)
            .send()
            .await;

        match result {
            Ok(_) => Ok(SendReceipt { status_code: 200 }),
            Err(err) => {
                let (status, message) = failure_parts(&err);
                let status_code = reply_status(status, message)?;
                Ok(SendReceipt { status_code })
            }
        }
    }

    async fn receive(&self, queue: &QueueHandle) -> Result<ReceiveReply, ServiceError> {
        let result = self
            .client
            .receive_message()
            .queue_url(queue.url())
            .max_number_of_messages(1)
            .send()
            .await;

        match result {
            Ok(output) => {
                let message = output.messages().first().map(|received| ReceivedPayload {
                    id: received.message_id().unwrap_or_default().to_string(),
                    body: received.body().unwrap_or_default().to_string(),
                });
                Ok(ReceiveReply {
                    status_code: 200,
                    message,
                })
            }
            Err(err) => {
                let (status, message) = failure_parts(&err);
                let status_code = reply_status(status, message)?;
                Ok(ReceiveReply {
                    status_code,
                    message: None,
                })
            }
        }
    }

    async fn approximate_message_count(
        &self,
        queue: &QueueHandle,
    ) -> Result<u64, ServiceError> {
        let result = self
            .client
            .get_queue_attributes()
            .queue_url(queue.url())
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessages)
            .send()
            .await;

        match result {
            Ok(output) => {
                // Queues that never reported depth count as empty.
                let depth = output
                    .attributes()
                    .and_then(|attributes| {
                        attributes.get(&QueueAttributeName::ApproximateNumberOfMessages)
                    })
                    .map(|value| value.parse::<u64>())
                    .transpose()
                    .map_err(|err| ServiceError::ProviderError {
                        provider: PROVIDER.to_string(),
                        code: "InvalidAttribute".to_string(),
                        message: format!(
                            "ApproximateNumberOfMessages is not a number: {err}"
                        ),
                    })?
                    .unwrap_or(0);
                Ok(depth)
            }
            Err(err) => {
                let (status, message) = failure_parts(&err);
                Err(fatal_error(status, message))
            }
        }
    }

    fn provider_type(&self) -> ProviderType {
        ProviderType::AwsSqs
    }
}
