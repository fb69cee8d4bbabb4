use serde::{Deserialize, Serialize};

/// Protocol SNS uses to deliver into an SQS queue.
pub const SQS_PROTOCOL: &str = "sqs";

// Field names follow the service wire format so a request decodes straight
// out of an SQS JSON body or an SNS form body.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQueueRequest {
    #[serde(rename = "QueueName")]
    pub name: String,
}

impl CreateQueueRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTopicRequest {
    pub name: String,
}

impl CreateTopicRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscribeRequest {
    pub topic_arn: String,
    pub protocol: String,
    pub endpoint: String,
}

impl SubscribeRequest {
    /// Subscription delivering `topic_arn` into the queue at `endpoint`.
    pub fn sqs(topic_arn: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            protocol: SQS_PROTOCOL.to_string(),
            endpoint: endpoint.into(),
        }
    }
}
