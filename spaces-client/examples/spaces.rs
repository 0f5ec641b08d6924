use std::time::Duration;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use color_eyre::{eyre::Context as _, Result};
use futures::TryStreamExt as _;
use orb_spaces_client::{Config, SpacesClient};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    run(args).await
}

#[derive(Debug, Parser)]
struct Args {
    /// Like https://sgp1.digitaloceanspaces.com
    #[clap(long, env = "SPACES_ENDPOINT")]
    endpoint: String,
    #[clap(long, env = "SPACES_REGION")]
    region: String,
    #[clap(long, env = "SPACES_BUCKET")]
    bucket: String,
    #[clap(long, env = "SPACES_ACCESS_KEY")]
    access_key: String,
    #[clap(long, env = "SPACES_SECRET_KEY", hide_env_values = true)]
    secret_key: String,
    /// Per-request timeout, in seconds
    #[clap(long)]
    timeout: Option<u64>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List keys under a prefix
    Ls {
        #[clap(default_value = "")]
        prefix: String,
    },
    /// Upload a local file
    Put {
        path: Utf8PathBuf,
        key: String,
        #[clap(long)]
        content_type: Option<String>,
    },
    /// Download an object to a local file
    Get { key: String, path: Utf8PathBuf },
    /// Delete an object
    Rm { key: String },
    /// Check whether an object exists
    Exists { key: String },
    /// Print the public url of an object
    Url { key: String },
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::new(
        args.endpoint,
        args.region,
        args.bucket,
        args.access_key,
        args.secret_key,
    );
    if let Some(secs) = args.timeout {
        config = config.with_operation_timeout(Duration::from_secs(secs));
    }
    let client = SpacesClient::new(config).wrap_err("failed to initialize client")?;

    match args.command {
        Command::Ls { prefix } => {
            let mut keys = client.list_stream(&prefix);
            while let Some(key) = keys.try_next().await? {
                println!("{key}");
            }
        }
        Command::Put {
            path,
            key,
            content_type,
        } => {
            client
                .upload_file(&key, &path, content_type.as_deref())
                .await?;
            info!("uploaded {path} to {}", client.public_url(&key));
        }
        Command::Get { key, path } => {
            let written = client.download_to_file(&key, &path).await?;
            info!("wrote {written} bytes to {path}");
        }
        Command::Rm { key } => client.delete(&key).await?,
        Command::Exists { key } => println!("{}", client.exists(&key).await?),
        Command::Url { key } => println!("{}", client.public_url(&key)),
    }

    Ok(())
}
