//! Helpers for tests.

use std::time::Duration;

use color_eyre::{eyre::Context as _, Result};
use orb_spaces_client::{Config, SpacesClient};
use testcontainers::{runners::AsyncRunner as _, ContainerAsync, ImageExt as _};
use testcontainers_modules::localstack::LocalStack;
use tokio::net::ToSocketAddrs;

const LOCALSTACK_PORT: u16 = 4566;
const REGION: &str = "us-east-1";

/// An s3 server in a container, torn down on drop.
///
/// Adapted from
/// <https://github.com/testcontainers/testcontainers-rs-modules-community/blob/0b83d15d052f274e84fffaba4f49b5530c550169/examples/localstack.rs>
#[derive(Debug)]
pub struct TestCtx {
    endpoint: String,
    _localstack: ContainerAsync<LocalStack>,
}

impl TestCtx {
    pub async fn new() -> Result<Self> {
        let container = LocalStack::default()
            .with_env_var("SERVICES", "s3")
            .start()
            .await?;

        let host_port = container.get_host_port_ipv4(LOCALSTACK_PORT).await?;
        let host_ip = container.get_host().await?;

        let addr = format!("{host_ip}:{host_port}");
        let endpoint = format!("http://{addr}");

        // avoids race condition where the tcp connection might be
        // refused
        wait_for_tcp(Duration::from_millis(1000), addr)
            .await
            .wrap_err("timed out waiting for tcp")?;

        Ok(Self {
            endpoint,
            _localstack: container,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self, bucket: &str) -> Config {
        Config::new(&self.endpoint, REGION, bucket, "test", "test")
            .with_operation_timeout(Duration::from_secs(10))
    }

    /// Creates `bucket` and returns a client bound to it.
    pub async fn mk_bucket(&self, bucket: &str) -> Result<SpacesClient> {
        let client = SpacesClient::new(self.config(bucket))?;
        client
            .sdk_client()
            .create_bucket()
            .bucket(bucket)
            .send()
            .await
            .wrap_err_with(|| format!("failed to create bucket {bucket}"))?;

        Ok(client)
    }
}

async fn wait_for_tcp(timeout: Duration, addr: impl ToSocketAddrs) -> Result<()> {
    tokio::time::timeout(timeout, async {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tokio::net::TcpStream::connect(&addr).await.is_ok() {
                break;
            }
        }
    })
    .await
    .wrap_err("timed out")
}
