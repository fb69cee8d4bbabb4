use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of one provisioning step. Nothing is rolled back, so resources
/// created before the failing step stay in the service.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to create sqs queue {name}")]
    CreateQueue {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to create sns topic {name}")]
    CreateTopic {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to subscribe {endpoint} to sns topic {topic_arn}")]
    Subscribe {
        topic_arn: String,
        endpoint: String,
        #[source]
        source: BoxError,
    },

    #[error("{operation} response did not include {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },

    #[error("failed to write provisioning output")]
    Output(#[from] std::io::Error),
}
