use std::{fmt, time::Duration};

use crate::error::{Error, Result};

/// Everything needed to construct a [`crate::SpacesClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Like `https://sgp1.digitaloceanspaces.com`.
    pub endpoint: String,
    /// Signing region, like `sgp1`.
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    /// Upper bound for a single operation, sdk retries included.
    pub operation_timeout: Option<Duration>,
}

impl Config {
    pub fn new(
        endpoint: impl Into<String>,
        region: impl Into<String>,
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: region.into(),
            bucket: bucket.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            operation_timeout: None,
        }
    }

    #[must_use]
    pub fn with_operation_timeout(self, timeout: Duration) -> Self {
        Self {
            operation_timeout: Some(timeout),
            ..self
        }
    }

    /// Checks that all required fields are populated. The region is allowed to be
    /// empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("endpoint", &self.endpoint),
            ("bucket", &self.bucket),
            ("access_key", &self.access_key),
            ("secret_key", &self.secret_key),
        ];
        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(Error::Configuration { field }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[redacted]")
            .field("operation_timeout", &self.operation_timeout)
            .finish()
    }
}
