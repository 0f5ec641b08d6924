//! A thin client for s3-compatible object stores such as DigitalOcean Spaces.
//!
//! Start with [`SpacesClient::new`]. Every operation is a single request against
//! the configured bucket, except [`SpacesClient::list`] which follows pagination.
//! Retries, signing and transport are left to the aws sdk.

mod client;
mod config;
mod download;
mod error;
mod exists;
mod list_prefix;
mod upload;

pub use crate::client::SpacesClient;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::upload::should_be_inline;

pub use aws_sdk_s3::primitives::ByteStream;
