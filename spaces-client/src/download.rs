use std::io;

use bytes::Bytes;
use camino::{Utf8Path, Utf8PathBuf};
use tokio::io::{AsyncRead, AsyncWriteExt as _};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    SpacesClient,
};

impl SpacesClient {
    /// Fetches the full contents of `key` into memory.
    ///
    /// Missing objects are reported as [`Error::Download`] like any other failure.
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn download(&self, key: &str) -> Result<Bytes> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| Error::download(key, err))?;
        // `collect` consumes the body, so the connection is released on both paths.
        let contents = resp
            .body
            .collect()
            .await
            .map_err(|err| Error::download(key, err))?
            .into_bytes();
        debug!(len = contents.len(), "downloaded object");

        Ok(contents)
    }

    /// Streams `key` into the file at `out_path`, replacing it.
    ///
    /// The body is written to a temporary file next to `out_path`, which is only
    /// moved into place once the whole object arrived. On failure `out_path` is
    /// left as it was. Returns the number of bytes written.
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn download_to_file(&self, key: &str, out_path: &Utf8Path) -> Result<u64> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| Error::download(key, err))?;

        let written = persist_body(resp.body.into_async_read(), out_path)
            .await
            .map_err(|err| Error::download(key, err))?;
        debug!(written, %out_path, "downloaded object to file");

        Ok(written)
    }
}

async fn persist_body(
    mut body: impl AsyncRead + Unpin,
    out_path: &Utf8Path,
) -> io::Result<u64> {
    let parent_dir = match out_path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
        _ => Utf8PathBuf::from("."),
    };
    let (tmp_file, tmp_file_path) = tokio::task::spawn_blocking(move || {
        tempfile::NamedTempFile::new_in(parent_dir).map(|f| f.into_parts())
    })
    .await
    .map_err(io::Error::other)??;

    // `tmp_file_path` removes the file when dropped on any early return.
    let mut tmp_file = tokio::fs::File::from_std(tmp_file);
    let written = tokio::io::copy(&mut body, &mut tmp_file).await?;
    tmp_file.flush().await?;
    tmp_file.sync_all().await?;
    drop(tmp_file);

    let out_path = out_path.to_owned();
    tokio::task::spawn_blocking(move || tmp_file_path.persist(out_path))
        .await
        .map_err(io::Error::other)??;

    Ok(written)
}
