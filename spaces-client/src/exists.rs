use aws_sdk_s3::{
    error::{ProvideErrorMetadata as _, SdkError},
    operation::head_object::HeadObjectError,
};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    SpacesClient,
};

/// Error codes that some s3-compatible providers send instead of a modeled
/// `NotFound`.
const MISSING_OBJECT_CODES: [&str; 2] = ["NotFound", "NoSuchKey"];

impl SpacesClient {
    /// Checks whether `key` exists, without fetching its body.
    ///
    /// A missing object is `Ok(false)`; every other failure is [`Error::Exists`].
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let result = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;
        match result {
            Ok(_) => Ok(true),
            Err(err) if is_missing_object(&err) => {
                debug!("object does not exist");
                Ok(false)
            }
            Err(err) => Err(Error::exists(key, err)),
        }
    }
}

fn is_missing_object<R>(err: &SdkError<HeadObjectError, R>) -> bool {
    let Some(service_err) = err.as_service_error() else {
        return false;
    };

    service_err.is_not_found()
        || service_err
            .code()
            .is_some_and(|code| MISSING_OBJECT_CODES.contains(&code))
}
