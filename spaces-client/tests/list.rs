mod common;

use color_eyre::Result;
use futures::TryStreamExt as _;

use common::TestCtx;

// No docker in macos on github
#[cfg_attr(target_os = "macos", test_with::no_env(GITHUB_ACTIONS))]
#[tokio::test]
async fn test_list() -> Result<()> {
    let ctx = TestCtx::new().await?;
    let client = ctx.mk_bucket("listing").await?;

    // Assert
    assert!(client.list("").await?.is_empty(), "new bucket is empty");

    // Act
    for key in ["a/1", "a/2", "b/1"] {
        client.upload(key, key.as_bytes().to_vec(), None).await?;
    }

    // Assert
    let mut all = client.list("").await?;
    all.sort();
    assert_eq!(all, ["a/1", "a/2", "b/1"]);

    let mut under_a = client.list("a/").await?;
    under_a.sort();
    assert_eq!(under_a, ["a/1", "a/2"]);

    assert!(client.list("c/").await?.is_empty(), "no keys under c/");

    Ok(())
}

#[cfg_attr(target_os = "macos", test_with::no_env(GITHUB_ACTIONS))]
#[tokio::test]
async fn test_list_stream_matches_list() -> Result<()> {
    let ctx = TestCtx::new().await?;
    let client = ctx.mk_bucket("streaming").await?;
    for i in 0..5 {
        client.upload(&format!("k{i}"), vec![i], None).await?;
    }

    let streamed: Vec<String> = client.list_stream("k").try_collect().await?;

    assert_eq!(streamed, client.list("k").await?);
    assert_eq!(streamed.len(), 5);

    Ok(())
}
