use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl};
use bytes::Bytes;
use camino::Utf8Path;
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    SpacesClient,
};

const INLINE_DISPOSITION: &str = "inline";

/// Whether browsers should render `content_type` in place instead of downloading
/// it. True for images, video, audio and pdf, case-insensitive.
pub fn should_be_inline(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    ["image/", "video/", "audio/"]
        .iter()
        .any(|prefix| content_type.starts_with(prefix))
        || content_type == "application/pdf"
}

impl SpacesClient {
    /// Uploads `content` to `key` as a publicly readable object, replacing any
    /// existing object.
    ///
    /// See [`Self::upload_stream`] for how `content_type` is applied.
    pub async fn upload(
        &self,
        key: &str,
        content: impl Into<Bytes>,
        content_type: Option<&str>,
    ) -> Result<()> {
        self.upload_stream(key, ByteStream::from(content.into()), content_type)
            .await
    }

    /// Streams the file at `path` to `key`. The file is not read into memory.
    pub async fn upload_file(
        &self,
        key: &str,
        path: &Utf8Path,
        content_type: Option<&str>,
    ) -> Result<()> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|err| Error::upload(key, err))?;
        self.upload_stream(key, body, content_type).await
    }

    /// Uploads `body` to `key` as a publicly readable object.
    ///
    /// If `content_type` is given and non-empty it is stored as the object's
    /// content type, and media types that browsers can display (see
    /// [`should_be_inline`]) also get an inline content disposition.
    #[instrument(skip(self, body), fields(bucket = %self.bucket))]
    pub async fn upload_stream(
        &self,
        key: &str,
        body: ByteStream,
        content_type: Option<&str>,
    ) -> Result<()> {
        let content_type = content_type.filter(|ct| !ct.is_empty());
        let disposition = content_type
            .filter(|ct| should_be_inline(ct))
            .map(|_| INLINE_DISPOSITION);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .acl(ObjectCannedAcl::PublicRead)
            .set_content_type(content_type.map(str::to_owned))
            .set_content_disposition(disposition.map(str::to_owned))
            .send()
            .await
            .map_err(|err| Error::upload(key, err))?;
        debug!(inline = disposition.is_some(), "uploaded object");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_be_inline() {
        let cases = [
            ("image/png", true),
            ("image/jpeg", true),
            ("IMAGE/PNG", true),
            ("video/mp4", true),
            ("Audio/MPEG", true),
            ("audio/mpeg", true),
            ("application/pdf", true),
            ("APPLICATION/PDF", true),
            ("text/plain", false),
            ("application/octet-stream", false),
            ("application/json", false),
            ("application/pdf; charset=binary", false),
            ("image", false),
            ("", false),
        ];
        for (content_type, expected) in cases {
            assert_eq!(
                should_be_inline(content_type),
                expected,
                "content type {content_type:?}"
            );
        }
    }
}
