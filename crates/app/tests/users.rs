//! Users contract suite.

use contrail::test_data::{
    DEFAULT_USER_ID, INVALID_ID, KNOWN_USERNAME, UPDATED_USER_EMAIL, UPDATED_USER_NAME,
    UPDATED_USER_PHONE, UPDATED_USER_WEBSITE, USER_EMAIL, USER_NAME, USER_PHONE, USER_WEBSITE,
};
use contrail::{AssertionFailure, CaseResult, Resource, StatusExpectation, TestCase, User, harness};
use pretty_assertions::assert_eq;

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_all_users() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /users - should return all users"),
            |ctx| async move {
                ctx.send(&Resource::Users.list())
                    .await?
                    .expect_status(200)?
                    .expect_non_empty_collection()?;
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_single_user() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /users/1 - should return single user with expected fields"),
            |ctx| async move {
                let response = ctx.send(&Resource::Users.fetch(DEFAULT_USER_ID)).await?;
                response.expect_status(200)?;

                let user: User = response.json()?;
                assert_eq!(user.id, Some(DEFAULT_USER_ID));
                assert!(!user.username.is_empty());
                assert!(!user.email.is_empty());
                assert!(!user.phone.is_empty());
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_user_by_username() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /users - should contain user with username"),
            |ctx| async move {
                let response = ctx.send(&Resource::Users.list()).await?;
                response.expect_status(200)?;

                let users: Vec<User> = response.json()?;
                if users.iter().any(|u| u.username == KNOWN_USERNAME) {
                    Ok(())
                } else {
                    Err(AssertionFailure::new(format!(
                        "Expected a user named {KNOWN_USERNAME} among {} users",
                        users.len()
                    ))
                    .into())
                }
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn get_invalid_user() -> CaseResult {
    harness()?
        .run(
            TestCase::new("GET /users/99999 - invalid user should return empty object or 404"),
            |ctx| async move {
                ctx.send(&Resource::Users.fetch(INVALID_ID))
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
            TestCase::new("GET /users/1 - validate Content-Type header and charset"),
            |ctx| async move {
                let response = ctx.send(&Resource::Users.fetch(DEFAULT_USER_ID)).await?;
                response.expect_status(200)?;
                ctx.response_spec()
                    .verify_with_charset(&response, ctx.configuration().charset())?;
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn create_user() -> CaseResult {
    harness()?
        .run(
            TestCase::new("POST /users - should create a new user with status 201"),
            |ctx| async move {
                let payload = User::new(USER_NAME, USER_EMAIL, USER_PHONE, USER_WEBSITE);
                let response = ctx.send(&Resource::Users.create(&payload)?).await?;
                response.expect_status(201)?;

                let created: User = response.json()?;
                assert!(created.id.is_some());
                assert_eq!(created.username, USER_NAME);
                assert_eq!(created.email, USER_EMAIL);
                assert_eq!(created.phone, USER_PHONE);
                assert_eq!(created.website, USER_WEBSITE);
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn update_user() -> CaseResult {
    harness()?
        .run(
            TestCase::new("PUT /users/1 - should update an existing user with status 200"),
            |ctx| async move {
                let payload = User::new(
                    UPDATED_USER_NAME,
                    UPDATED_USER_EMAIL,
                    UPDATED_USER_PHONE,
                    UPDATED_USER_WEBSITE,
                )
                .with_id(DEFAULT_USER_ID);
                let response = ctx
                    .send(&Resource::Users.replace(DEFAULT_USER_ID, &payload)?)
                    .await?;
                response.expect_status(200)?;

                let updated: User = response.json()?;
                assert_eq!(updated, payload);
                Ok(())
            },
        )
        .await
}

#[tokio::test]
#[ignore = "needs BASE_URL pointing at a live API"]
async fn delete_user() -> CaseResult {
    harness()?
        .run(
            TestCase::new("DELETE /users/1 - should delete user and return status 200 or 204"),
            |ctx| async move {
                ctx.send(&Resource::Users.remove(DEFAULT_USER_ID))
                    .await?
                    .expect_status_in(&StatusExpectation::deleted())?;
                Ok(())
            },
        )
        .await
}
