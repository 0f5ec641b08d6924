use std::future::Future;

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use futures::{TryStream, TryStreamExt as _};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    SpacesClient,
};

impl SpacesClient {
    /// Lists all keys under `prefix`, in the order the store returns them. An empty
    /// prefix lists the whole bucket.
    ///
    /// If any page fails, the whole listing fails.
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let keys: Vec<String> = self.list_stream(prefix).try_collect().await?;
        debug!(count = keys.len(), "listed objects");

        Ok(keys)
    }

    /// Like [`Self::list`], but yields keys as pages arrive.
    pub fn list_stream(
        &self,
        prefix: &str,
    ) -> impl TryStream<Ok = String, Error = Error> + Send + Unpin + 'static {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let prefix_filter = (!prefix.is_empty()).then(|| prefix.to_owned());
        let prefix = prefix.to_owned();

        paginate_keys(move |continuation_token| {
            client
                .list_objects_v2()
                .bucket(&bucket)
                .set_prefix(prefix_filter.clone())
                .set_continuation_token(continuation_token)
                .send()
        })
        .map_err(move |err| Error::list(&prefix, err))
    }
}

/// Drives the continuation token protocol of `ListObjectsV2`.
///
/// `fetch_page` is called with `None` first, then with the token from the
/// previous page until a page is not truncated. Entries without a key are
/// skipped.
fn paginate_keys<F, Fut, E>(
    mut fetch_page: F,
) -> impl TryStream<Ok = String, Error = E> + Unpin
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListObjectsV2Output, E>>,
{
    // Pin it here just to make people's lives easier elsewhere
    Box::pin(async_stream::try_stream! {
        let mut continuation_token = None;
        let mut pages = 0usize;
        loop {
            let page = fetch_page(continuation_token.take()).await?;
            pages += 1;
            for key in page.contents().iter().filter_map(|obj| obj.key()) {
                yield key.to_owned();
            }
            if !page.is_truncated().unwrap_or(false) {
                debug!(pages, "finished listing");
                break;
            }
            continuation_token = page.next_continuation_token().map(str::to_owned);
        }
    })
}
