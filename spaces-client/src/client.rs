use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use tracing::{debug, info, instrument};

use crate::{
    error::{Error, Result},
    Config,
};

const CREDENTIALS_PROVIDER_NAME: &str = "orb-spaces-client";

/// Client bound to a single bucket of an s3-compatible object store.
///
/// Cloning is cheap, clones share the underlying sdk handle.
#[derive(Debug, Clone)]
pub struct SpacesClient {
    pub(crate) client: aws_sdk_s3::Client,
    pub(crate) bucket: String,
    endpoint: String,
}

impl SpacesClient {
    /// Validates `config` and builds the sdk handle.
    ///
    /// Requests always go to the configured endpoint using path-style addressing,
    /// signed with static credentials. No network requests are made here.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "creating spaces client"
        );

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );
        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint)
            .force_path_style(true);
        if let Some(timeout) = config.operation_timeout {
            builder = builder.timeout_config(
                TimeoutConfig::builder().operation_timeout(timeout).build(),
            );
        }

        Ok(Self {
            client: aws_sdk_s3::Client::from_conf(builder.build()),
            bucket: config.bucket,
            endpoint: config.endpoint,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The underlying sdk client, for anything not covered here.
    pub fn sdk_client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// Removes `key` from the bucket. Deleting a missing key is not an error.
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| Error::delete(key, err))?;
        debug!("deleted object");

        Ok(())
    }

    /// Public url of `key`, always using https.
    pub fn public_url(&self, key: &str) -> String {
        let host = self
            .endpoint
            .strip_prefix("https://")
            .unwrap_or(&self.endpoint);
        let host = host.strip_prefix("http://").unwrap_or(host);

        format!("https://{host}/{}/{key}", self.bucket)
    }
}
