//! Posts contract suite.

use std::time::Duration;

use contrail::test_data::{DEFAULT_POST_ID, DEFAULT_USER_ID, INVALID_ID, POSTS_LIST_MAX_MS};
use contrail::{AssertionFailure, CaseResult, Post, Resource, TestCase, harness};
use pretty_assertions::assert_eq;

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_all_posts() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /posts - should return all posts"),
            |ctx| async move {
                let response = ctx.send(&Resource::Posts.list()).await?;
                ctx.response_spec().verify(&response)?;
                response
                    .expect_status(200)?
                    .expect_faster_than(Duration::from_millis(POSTS_LIST_MAX_MS))?
                    .expect_non_empty_collection()?;
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_single_post() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /posts/1 - should return single post with expected fields"),
            |ctx| async move {
                let response = ctx.send(&Resource::Posts.fetch(DEFAULT_POST_ID)).await?;
                ctx.response_spec().verify(&response)?;
                response.expect_status(200)?;

                let post: Post = response.json()?;
                assert_eq!(post.id, Some(DEFAULT_POST_ID));
                assert!(!post.title.is_empty());
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_posts_by_user_id() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /posts?userId=1 - should return posts for userId=1"),
            |ctx| async move {
                let request = Resource::Posts
                    .list_owned_by(DEFAULT_USER_ID)
                    .ok_or_else(|| AssertionFailure::new("posts cannot be filtered by owner"))?;
                let response = ctx.send(&request).await?;
                ctx.response_spec().verify(&response)?;
                response
                    .expect_status(200)?
                    .expect_every_item("userId", DEFAULT_USER_ID)?;
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_invalid_post() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /posts/99999 - invalid post should return empty object"),
            |ctx| async move {
                ctx.send(&Resource::Posts.fetch(INVALID_ID))
                    .await?
                    .expect_missing_resource()?;
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn validate_content_type() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /posts/1 - validate Content-Type header and charset"),
            |ctx| async move {
                let response = ctx.send(&Resource::Posts.fetch(DEFAULT_POST_ID)).await?;
                response.expect_status(200)?;
                ctx.response_spec()
                    .verify_with_charset(&response, ctx.configuration().charset())?;
                Ok(())
            },
        )
        .await
}
