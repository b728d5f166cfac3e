//! Minishop demo driver.
//!
//! Runs a fixed demonstration sequence against the configured database:
//! create the schema if absent, create sample users, products, and
//! orders, query them back, exercise hide/unhide, commit once, and exit.
//! No flags, no interactive input; the exit code is non-zero only if an
//! operation fails.
//!
//! ```bash
//! cp .env.template .env   # fill in POSTGRES_* first
//! cargo run -p minishop-store
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use minishop_core::{Email, Price, Quantity};
use minishop_store::config::DatabaseConfig;
use minishop_store::db::{Db, OrderDao, ProductDao, UserDao};
use minishop_store::models::{NewOrder, NewProduct, NewUser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minishop_store=info,sqlx=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let db = Db::connect(&config).await?;

    // Create the schema if absent
    db.migrate().await?;
    tracing::info!("Schema is up to date");

    let users = UserDao::new();
    let products = ProductDao::new();
    let orders = OrderDao::new();

    let mut session = db.session().await?;

    // Users: create and look up by email
    let alice = users
        .create(
            &NewUser::new(Email::parse("alice@example.com")?, "Alice Johnson")?,
            &mut session,
        )
        .await?;
    let bob = users
        .create(
            &NewUser::new(Email::parse("bob@example.com")?, "Bob Smith")?,
            &mut session,
        )
        .await?;
    tracing::info!(id = %alice.id, email = %alice.email, "Created user");
    tracing::info!(id = %bob.id, email = %bob.email, "Created user");

    let found = users
        .get_by_email(&Email::parse("alice@example.com")?, &mut session)
        .await?;
    tracing::info!(found = found.is_some(), "Lookup alice@example.com");

    let missing = users
        .get_by_email(&Email::parse("nonexistent@example.com")?, &mut session)
        .await?;
    tracing::info!(found = missing.is_some(), "Lookup nonexistent@example.com");

    // Products: create a few and list them
    let laptop = products
        .create(
            &NewProduct::new("Laptop", Price::try_from(50_000_i64)?)?,
            &mut session,
        )
        .await?;
    let mouse = products
        .create(
            &NewProduct::new("Mouse", Price::try_from(1_500_i64)?)?,
            &mut session,
        )
        .await?;
    let keyboard = products
        .create(
            &NewProduct::new("Keyboard", Price::try_from(3_000_i64)?)?,
            &mut session,
        )
        .await?;

    let all_products = products.get_all(&mut session).await?;
    tracing::info!(count = all_products.len(), "Products in catalogue");
    for product in &all_products {
        tracing::info!(id = %product.id, name = %product.name, price = %product.price, "Product");
    }

    // Orders: create and fetch per user
    let order1 = orders
        .create(&NewOrder::new(alice.id, laptop.id), &mut session)
        .await?;
    let order2 = orders
        .create(
            &NewOrder::new(alice.id, mouse.id).with_quantity(Quantity::new(2)?),
            &mut session,
        )
        .await?;
    let order3 = orders
        .create(&NewOrder::new(bob.id, keyboard.id), &mut session)
        .await?;
    tracing::info!(id = %order1.id, id2 = %order2.id, id3 = %order3.id, "Created orders");

    let alice_orders = orders.get_by_user(alice.id, &mut session).await?;
    tracing::info!(count = alice_orders.len(), user = %alice.full_name, "Orders for user");
    for order in &alice_orders {
        tracing::info!(id = %order.id, product = %order.product_id, qty = %order.quantity, "Order");
    }

    // Soft delete: hide and restore
    let hidden = users.hide(bob.id, &mut session).await?;
    tracing::info!(hidden, user = %bob.full_name, "Hid user");

    let bob_hidden = users
        .get_by_email(&Email::parse("bob@example.com")?, &mut session)
        .await?;
    tracing::info!(
        is_hidden = bob_hidden.as_ref().is_some_and(|u| u.is_hidden),
        "User after hide"
    );

    let restored = users.unhide(bob.id, &mut session).await?;
    tracing::info!(restored, user = %bob.full_name, "Restored user");

    let product_hidden = products.hide(mouse.id, &mut session).await?;
    tracing::info!(hidden = product_hidden, product = %mouse.name, "Hid product");

    let order_hidden = orders.hide(order1.id, &mut session).await?;
    let order_restored = orders.unhide(order1.id, &mut session).await?;
    tracing::info!(hidden = order_hidden, restored = order_restored, "Order hide/unhide");

    // No cascade: orders survive hiding the product they reference
    let alice_orders_after = orders.get_by_user(alice.id, &mut session).await?;
    tracing::info!(
        count = alice_orders_after.len(),
        "Orders for user after hiding a product"
    );

    // One commit for the whole batch: all-or-nothing durability
    session.commit().await?;
    tracing::info!("All operations committed");

    db.close().await;
    Ok(())
}
