use crate::error::ProvisionError;
use aws_sdk_sns::operation::create_topic::CreateTopicOutput;
use aws_sdk_sns::operation::subscribe::SubscribeOutput;
use aws_sdk_sqs::operation::create_queue::CreateQueueOutput;
use serde::Serialize;

// CreateQueue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateQueueResult {
    pub queue_url: String,
}

impl TryFrom<CreateQueueOutput> for CreateQueueResult {
    type Error = ProvisionError;

    fn try_from(output: CreateQueueOutput) -> Result<Self, Self::Error> {
        let queue_url = output.queue_url().ok_or(ProvisionError::MissingField {
            operation: "CreateQueue",
            field: "QueueUrl",
        })?;
        Ok(Self {
            queue_url: queue_url.to_string(),
        })
    }
}

// CreateTopic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicResult {
    pub topic_arn: String,
}

impl TryFrom<CreateTopicOutput> for CreateTopicResult {
    type Error = ProvisionError;

    fn try_from(output: CreateTopicOutput) -> Result<Self, Self::Error> {
        let topic_arn = output.topic_arn().ok_or(ProvisionError::MissingField {
            operation: "CreateTopic",
            field: "TopicArn",
        })?;
        Ok(Self {
            topic_arn: topic_arn.to_string(),
        })
    }
}

// Subscribe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeResult {
    pub subscription_arn: String,
}

impl TryFrom<SubscribeOutput> for SubscribeResult {
    type Error = ProvisionError;

    fn try_from(output: SubscribeOutput) -> Result<Self, Self::Error> {
        let subscription_arn = output.subscription_arn().ok_or(ProvisionError::MissingField {
            operation: "Subscribe",
            field: "SubscriptionArn",
        })?;
        Ok(Self {
            subscription_arn: subscription_arn.to_string(),
        })
    }
}
