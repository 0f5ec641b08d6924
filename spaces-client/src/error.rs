pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by [`crate::SpacesClient`].
///
/// Every variant except [`Error::Configuration`] wraps the error produced by the
/// underlying s3 sdk, which is reachable through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{field}` is required")]
    Configuration { field: &'static str },

    #[error("failed to upload object `{key}`")]
    Upload { key: String, source: BoxError },

    #[error("failed to get object `{key}`")]
    Download { key: String, source: BoxError },

    #[error("failed to delete object `{key}`")]
    Delete { key: String, source: BoxError },

    #[error("failed to head object `{key}`")]
    Exists { key: String, source: BoxError },

    #[error("failed to list objects with prefix `{prefix}`")]
    List { prefix: String, source: BoxError },
}

impl Error {
    pub(crate) fn upload(key: &str, source: impl Into<BoxError>) -> Self {
        Self::Upload {
            key: key.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn download(key: &str, source: impl Into<BoxError>) -> Self {
        Self::Download {
            key: key.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn delete(key: &str, source: impl Into<BoxError>) -> Self {
        Self::Delete {
            key: key.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn exists(key: &str, source: impl Into<BoxError>) -> Self {
        Self::Exists {
            key: key.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn list(prefix: &str, source: impl Into<BoxError>) -> Self {
        Self::List {
            prefix: prefix.to_owned(),
            source: source.into(),
        }
    }
}
