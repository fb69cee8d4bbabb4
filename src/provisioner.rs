//! The fixture sequence the functional tests rely on: two queues, one topic,
//! and a subscription delivering the topic into the first queue.

use crate::backend::MessagingBackend;
use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::requests::{CreateQueueRequest, CreateTopicRequest, SubscribeRequest};
use crate::responses::{CreateQueueResult, CreateTopicResult, SubscribeResult};
use std::io::Write;
use tracing::info;

pub const FUNCTIONAL_TEST_QUEUE: &str = "functional_test_queue";
pub const SIMPLE_TEST_QUEUE: &str = "simple_test_queue";
/// Same literal as the first queue.
pub const FUNCTIONAL_TEST_TOPIC: &str = FUNCTIONAL_TEST_QUEUE;

const QUEUES: [&str; 2] = [FUNCTIONAL_TEST_QUEUE, SIMPLE_TEST_QUEUE];

/// What a successful run created, queues in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub queues: Vec<CreateQueueResult>,
    pub topic: CreateTopicResult,
    pub subscription_endpoint: String,
    pub subscription: SubscribeResult,
}

/// Runs the four calls in order, writing progress lines to `out`.
///
/// Stops at the first failing call and returns its error; calls after it are
/// never issued and earlier resources are left in place.
pub async fn run<B, W>(
    backend: &B,
    config: &ProvisionConfig,
    out: &mut W,
) -> Result<ProvisionReport, ProvisionError>
where
    B: MessagingBackend + ?Sized,
    W: Write,
{
    config.validate()?;

    writeln!(out, "Creating sqs queues")?;
    let mut queues = Vec::with_capacity(QUEUES.len());
    for name in QUEUES {
        let created = backend.create_queue(&CreateQueueRequest::new(name)).await?;
        info!(queue = name, queue_url = %created.queue_url, "created sqs queue");
        writeln!(out, "Created sqs queue {} at {}", name, created.queue_url)?;
        queues.push(created);
    }

    writeln!(out, "Creating sns topics...")?;
    let topic = backend
        .create_topic(&CreateTopicRequest::new(FUNCTIONAL_TEST_TOPIC))
        .await?;
    info!(topic = FUNCTIONAL_TEST_TOPIC, topic_arn = %topic.topic_arn, "created sns topic");
    writeln!(out, "Created sns topic {}", topic.topic_arn)?;

    writeln!(out, "Creating sns subscriptions...")?;
    let subscription_endpoint = config.subscription_endpoint(FUNCTIONAL_TEST_QUEUE);
    let subscription = backend
        .subscribe(&SubscribeRequest::sqs(
            topic.topic_arn.clone(),
            subscription_endpoint.clone(),
        ))
        .await?;
    info!(
        topic_arn = %topic.topic_arn,
        endpoint = %subscription_endpoint,
        subscription_arn = %subscription.subscription_arn,
        "subscribed queue to topic"
    );
    writeln!(
        out,
        "Subscribed {} to {} as {}",
        subscription_endpoint, topic.topic_arn, subscription.subscription_arn
    )?;

    writeln!(out, "Completed SNS/SQS setup.")?;
    Ok(ProvisionReport {
        queues,
        topic,
        subscription_endpoint,
        subscription,
    })
}
