//! Creates the SNS topic, SQS queues and subscription the functional tests
//! expect to find on a goaws endpoint.

pub mod backend;
pub mod config;
pub mod error;
pub mod provisioner;
pub mod requests;
pub mod responses;

pub use backend::{AwsBackend, MessagingBackend};
pub use config::{ProvisionConfig, StaticCredentials};
pub use error::ProvisionError;
pub use provisioner::{ProvisionReport, run};
