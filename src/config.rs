//! Connection settings for the messaging endpoint.

use crate::error::ProvisionError;
use std::fmt;
use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ENDPOINT_URL: &str = "http://goaws:4100";

/// Fixed credentials for signing requests. goaws ignores signatures but the
/// SDK will not send a request it cannot sign.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StaticCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub region: String,
    /// Used verbatim, both as the SDK endpoint and as the prefix of the
    /// subscription endpoint.
    pub endpoint_url: String,
    /// `None` leaves credential resolution to the SDK default chain.
    pub credentials: Option<StaticCredentials>,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, DEFAULT_ENDPOINT_URL)
    }
}

impl ProvisionConfig {
    pub fn new(region: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint_url: endpoint_url.into(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: StaticCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn validate(&self) -> Result<(), ProvisionError> {
        if self.region.trim().is_empty() {
            return Err(ProvisionError::InvalidConfig("region must not be empty".to_string()));
        }
        if self.endpoint_url.trim().is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "endpoint url must not be empty".to_string(),
            ));
        }

        let url = Url::parse(&self.endpoint_url).map_err(|e| {
            ProvisionError::InvalidConfig(format!(
                "endpoint url {:?} is not a valid url: {}",
                self.endpoint_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ProvisionError::InvalidConfig(format!(
                "endpoint url {:?} must be an http(s) url with a host",
                self.endpoint_url
            )));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.access_key_id.is_empty() || credentials.secret_access_key.is_empty() {
                return Err(ProvisionError::InvalidConfig(
                    "static credentials need both an access key id and a secret access key"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Address goaws exposes for `queue_name`, as handed to SNS when
    /// subscribing. Plain concatenation: a trailing slash on the endpoint is
    /// kept.
    pub fn subscription_endpoint(&self, queue_name: &str) -> String {
        format!("{}/queue/{}", self.endpoint_url, queue_name)
    }
}
