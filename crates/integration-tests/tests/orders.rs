//! Integration tests for the order DAO and the no-cascade policy.

#![allow(clippy::unwrap_used)]

use minishop_core::{Price, ProductId, Quantity, UserId};
use minishop_integration_tests::{TestContext, unique_email};
use minishop_store::db::{OrderDao, ProductDao, UserDao};
use minishop_store::models::{NewOrder, NewProduct, NewUser};

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn order_survives_hiding_its_product() {
    let ctx = TestContext::connect().await.unwrap();
    let users = UserDao::new();
    let products = ProductDao::new();
    let orders = OrderDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let user = users
        .create(
            &NewUser::new(unique_email("no-cascade"), "Order Keeper").unwrap(),
            &mut session,
        )
        .await
        .unwrap();
    let product = products
        .create(
            &NewProduct::new("Discontinued Widget", Price::try_from(250_i64).unwrap()).unwrap(),
            &mut session,
        )
        .await
        .unwrap();
    let order = orders
        .create(&NewOrder::new(user.id, product.id), &mut session)
        .await
        .unwrap();

    assert!(products.hide(product.id, &mut session).await.unwrap());

    // The order is still retrievable and still points at the product.
    let remaining = orders.get_by_user(user.id, &mut session).await.unwrap();
    assert_eq!(remaining.len(), 1);
    let remaining = remaining.first().unwrap();
    assert_eq!(remaining.id, order.id);
    assert_eq!(remaining.product_id, product.id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn order_hide_unhide_roundtrip() {
    let ctx = TestContext::connect().await.unwrap();
    let users = UserDao::new();
    let products = ProductDao::new();
    let orders = OrderDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let user = users
        .create(
            &NewUser::new(unique_email("order-flag"), "Flag Flipper").unwrap(),
            &mut session,
        )
        .await
        .unwrap();
    let product = products
        .create(
            &NewProduct::new("Widget", Price::try_from(100_i64).unwrap()).unwrap(),
            &mut session,
        )
        .await
        .unwrap();
    let order = orders
        .create(&NewOrder::new(user.id, product.id), &mut session)
        .await
        .unwrap();
    assert!(!order.is_hidden);

    assert!(orders.hide(order.id, &mut session).await.unwrap());
    assert!(orders.unhide(order.id, &mut session).await.unwrap());

    let fetched = orders.get_by_user(user.id, &mut session).await.unwrap();
    assert!(!fetched.first().unwrap().is_hidden);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn order_with_dangling_references_fails_with_fk_violation() {
    let ctx = TestContext::connect().await.unwrap();
    let orders = OrderDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let bogus = NewOrder::new(UserId::new(i64::MAX), ProductId::new(i64::MAX));
    let err = orders
        .create(&bogus, &mut session)
        .await
        .expect_err("insert referencing missing rows must fail");
    assert!(err.is_foreign_key_violation());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL database"]
async fn default_quantity_is_one() {
    let ctx = TestContext::connect().await.unwrap();
    let users = UserDao::new();
    let products = ProductDao::new();
    let orders = OrderDao::new();
    let mut session = ctx.db.session().await.unwrap();

    let user = users
        .create(
            &NewUser::new(unique_email("default-qty"), "Single Unit").unwrap(),
            &mut session,
        )
        .await
        .unwrap();
    let product = products
        .create(
            &NewProduct::new("Widget", Price::try_from(100_i64).unwrap()).unwrap(),
            &mut session,
        )
        .await
        .unwrap();

    let order = orders
        .create(&NewOrder::new(user.id, product.id), &mut session)
        .await
        .unwrap();
    assert_eq!(order.quantity, Quantity::ONE);
}
