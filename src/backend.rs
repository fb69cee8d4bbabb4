use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::requests::{CreateQueueRequest, CreateTopicRequest, SubscribeRequest};
use crate::responses::{CreateQueueResult, CreateTopicResult, SubscribeResult};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_sqs::config::{Credentials, Region};
use tracing::{debug, error};

/// The three remote operations provisioning needs.
#[async_trait]
pub trait MessagingBackend: Send + Sync {
    async fn create_queue(
        &self,
        request: &CreateQueueRequest,
    ) -> Result<CreateQueueResult, ProvisionError>;

    async fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> Result<CreateTopicResult, ProvisionError>;

    async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResult, ProvisionError>;
}

/// SQS and SNS clients sharing one SDK configuration.
#[derive(Debug, Clone)]
pub struct AwsBackend {
    sqs: aws_sdk_sqs::Client,
    sns: aws_sdk_sns::Client,
}

impl AwsBackend {
    pub async fn connect(config: &ProvisionConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(config.endpoint_url.clone());
        if let Some(credentials) = &config.credentials {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                None,
                None,
                "goaws-provision",
            ));
        }

        let shared_config = loader.load().await;
        debug!(region = %config.region, endpoint_url = %config.endpoint_url, "loaded sdk config");
        Self::from_sdk_config(&shared_config)
    }

    pub fn from_sdk_config(shared_config: &SdkConfig) -> Self {
        Self {
            sqs: aws_sdk_sqs::Client::new(shared_config),
            sns: aws_sdk_sns::Client::new(shared_config),
        }
    }
}

#[async_trait]
impl MessagingBackend for AwsBackend {
    async fn create_queue(
        &self,
        request: &CreateQueueRequest,
    ) -> Result<CreateQueueResult, ProvisionError> {
        let output = self
            .sqs
            .create_queue()
            .queue_name(&request.name)
            .send()
            .await
            .map_err(|e| {
                error!(
                    queue = %request.name,
                    error = %aws_sdk_sqs::error::DisplayErrorContext(&e),
                    "CreateQueue failed"
                );
                ProvisionError::CreateQueue {
                    name: request.name.clone(),
                    source: e.into(),
                }
            })?;
        CreateQueueResult::try_from(output)
    }

    async fn create_topic(
        &self,
        request: &CreateTopicRequest,
    ) -> Result<CreateTopicResult, ProvisionError> {
        let output = self
            .sns
            .create_topic()
            .name(&request.name)
            .send()
            .await
            .map_err(|e| {
                error!(
                    topic = %request.name,
                    error = %aws_sdk_sns::error::DisplayErrorContext(&e),
                    "CreateTopic failed"
                );
                ProvisionError::CreateTopic {
                    name: request.name.clone(),
                    source: e.into(),
                }
            })?;
        CreateTopicResult::try_from(output)
    }

    async fn subscribe(&self, request: &SubscribeRequest) -> Result<SubscribeResult, ProvisionError> {
        let output = self
            .sns
            .subscribe()
            .topic_arn(&request.topic_arn)
            .protocol(&request.protocol)
            .endpoint(&request.endpoint)
            .send()
            .await
            .map_err(|e| {
                error!(
                    topic_arn = %request.topic_arn,
                    endpoint = %request.endpoint,
                    error = %aws_sdk_sns::error::DisplayErrorContext(&e),
                    "Subscribe failed"
                );
                ProvisionError::Subscribe {
                    topic_arn: request.topic_arn.clone(),
                    endpoint: request.endpoint.clone(),
                    source: e.into(),
                }
            })?;
        SubscribeResult::try_from(output)
    }
}
