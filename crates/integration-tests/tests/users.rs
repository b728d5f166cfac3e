//! Integration tests for the user DAO.
//!
//! Run with a live database: see the crate docs in `src/lib.rs`.

#![allow(clippy::unwrap_used)]

use minishop_core::UserId;
use minishop_integration_tests::{TestContext, unique_email};
use minishop_store::db::UserDao;
use minishop_store::models::NewUser;

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn create_then_get_by_email_returns_matching_record() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let email = unique_email("lookup");
    let created = dao
        .create(&NewUser::new(email.clone(), "Alice Johnson").unwrap(), &mut session)
        .await
        .unwrap();

    assert!(created.id.as_i64() > 0);
    assert_eq!(created.email, email);
    assert!(!created.is_hidden);

    let found = dao.get_by_email(&email, &mut session).await.unwrap();
    let found = found.expect("user should be found by its exact email");
    assert_eq!(found.id, created.id);
    assert_eq!(found.full_name, "Alice Johnson");

    // Dropped session: everything above rolls back.
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn get_by_email_on_missing_user_returns_none() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let never_inserted = unique_email("never-inserted");
    let result = dao.get_by_email(&never_inserted, &mut session).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn hide_then_unhide_restores_the_flag() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let email = unique_email("hide");
    let user = dao
        .create(&NewUser::new(email.clone(), "Bob Smith").unwrap(), &mut session)
        .await
        .unwrap();
    assert!(!user.is_hidden);

    assert!(dao.hide(user.id, &mut session).await.unwrap());
    let hidden = dao.get_by_email(&email, &mut session).await.unwrap().unwrap();
    assert!(hidden.is_hidden);

    assert!(dao.unhide(user.id, &mut session).await.unwrap());
    let restored = dao.get_by_email(&email, &mut session).await.unwrap().unwrap();
    assert!(!restored.is_hidden);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn hide_is_idempotent() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let user = dao
        .create(
            &NewUser::new(unique_email("idempotent"), "Carol Danvers").unwrap(),
            &mut session,
        )
        .await
        .unwrap();

    // Hiding twice succeeds both times, no error on the repeat.
    assert!(dao.hide(user.id, &mut session).await.unwrap());
    assert!(dao.hide(user.id, &mut session).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn hide_and_unhide_missing_user_return_false() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let ghost = UserId::new(i64::MAX);
    assert!(!dao.hide(ghost, &mut session).await.unwrap());
    assert!(!dao.unhide(ghost, &mut session).await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn duplicate_email_fails_and_leaves_first_row_intact() {
    let ctx = TestContext::connect().await.unwrap();
    let dao = UserDao::new();
    let email = unique_email("duplicate");

    // The first user must survive the failed second insert, so it gets
    // its own committed session.
    let mut session = ctx.db.session().await.unwrap();
    let first = dao
        .create(&NewUser::new(email.clone(), "First User").unwrap(), &mut session)
        .await
        .unwrap();
    session.commit().await.unwrap();

    let mut session = ctx.db.session().await.unwrap();
    let err = dao
        .create(&NewUser::new(email.clone(), "Second User").unwrap(), &mut session)
        .await
        .expect_err("second insert with the same email must fail");
    assert!(err.is_unique_violation());
    drop(session);

    let mut session = ctx.db.session().await.unwrap();
    let survivor = dao.get_by_email(&email, &mut session).await.unwrap().unwrap();
    assert_eq!(survivor.id, first.id);
    assert_eq!(survivor.full_name, "First User");
    drop(session);

    // Cleanup: the first row was committed.
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(first.id.as_i64())
        .execute(ctx.db.pool())
        .await
        .unwrap();
}
