//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, SESSION_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_redirect, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Sign up and log in a fresh user on the given server
async fn login_fresh_user(server: &TestServer) -> Credentials {
    let creds = Credentials::unique();
    let response = server.post_form("/signup", &creds).await.unwrap();
    assert_redirect(response, "/login").await.unwrap();

    let response = server.post_form("/login", &creds).await.unwrap();
    assert_redirect(response, "/dashboard").await.unwrap();

    creds
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_redirects_to_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    let response = server.post_form("/signup", &creds).await.unwrap();
    assert_redirect(response, "/login").await.unwrap();
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();

    server.post_form("/signup", &creds).await.unwrap();

    let response = server.post_form("/signup", &creds).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = response.text().await.unwrap();
    assert!(body.contains("already taken"));
}

#[tokio::test]
async fn test_signup_empty_username_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials {
        username: String::new(),
        password: "TestPass123!".to_string(),
    };

    let response = server.post_form("/signup", &creds).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_sets_session_and_dashboard_loads() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    // The cookie from login lets the dashboard through
    let response = server.get("/dashboard").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let creds = Credentials::unique();
    server.post_form("/signup", &creds).await.unwrap();

    let bad = creds.with_password("not-the-password");
    let response = server.post_form("/login", &bad).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(
        response.headers().get("set-cookie").is_none(),
        "failed login must not set a cookie"
    );

    // Still gated
    let response = server.get("/dashboard").await.unwrap();
    assert_redirect(response, "/login").await.unwrap();
}

#[tokio::test]
async fn test_unauthenticated_requests_redirect_to_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/", "/dashboard", "/items"] {
        let response = server.get(path).await.unwrap();
        assert_redirect(response, "/login").await.unwrap();
    }

    let response = server
        .post_json("/items", &CreateItem::new("milk"))
        .await
        .unwrap();
    assert_redirect(response, "/login").await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server.get("/logout").await.unwrap();
    assert_redirect(response, "/login").await.unwrap();

    let response = server.get("/dashboard").await.unwrap();
    assert_redirect(response, "/login").await.unwrap();
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server
        .post_json("/items", &CreateItem::new("milk"))
        .await
        .unwrap();
    let created: Item = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, "milk");
    assert!(created.is_active);

    let response = server.get("/items").await.unwrap();
    let items: Vec<Item> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, created.id);
}

#[tokio::test]
async fn test_create_item_empty_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server.post_json("/items", &CreateItem::new("")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_delete_item() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server
        .post_json("/items", &CreateItem::new("bread"))
        .await
        .unwrap();
    let created: Item = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.delete(&format!("/items/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Gone now
    let response = server.delete(&format!("/items/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_all_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    for name in ["milk", "eggs", "bread"] {
        server.post_json("/items", &CreateItem::new(name)).await.unwrap();
    }

    let response = server.delete("/items").await.unwrap();
    let deleted: Deleted = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted.deleted, 3);

    let response = server.get("/items").await.unwrap();
    let items: Vec<Item> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_items_are_scoped_to_user() {
    if !check_test_env() {
        return;
    }

    // Two servers = two cookie jars against the same database
    let alice = TestServer::start().await.expect("Failed to start server");
    let bob = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&alice).await;
    login_fresh_user(&bob).await;

    let response = alice
        .post_json("/items", &CreateItem::new("milk"))
        .await
        .unwrap();
    let created: Item = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Bob sees nothing and cannot delete Alice's item
    let response = bob.get("/items").await.unwrap();
    let items: Vec<Item> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items.is_empty());

    let response = bob.delete(&format!("/items/{}", created.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[tokio::test]
async fn test_checkout_creates_cart_and_deactivates_items() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let mut ids = Vec::new();
    for name in ["milk", "eggs"] {
        let response = server.post_json("/items", &CreateItem::new(name)).await.unwrap();
        let item: Item = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(item.id);
    }

    let response = server
        .post_json("/items/deactivate", &Checkout { ids, amount: 750 })
        .await
        .unwrap();
    let receipt: CheckoutReceipt = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(receipt.cart_id > 0);
    assert!(!receipt.message.is_empty());

    // Both items are inactive now
    let response = server.get("/items").await.unwrap();
    let items: Vec<Item> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| !i.is_active));

    // And the dashboard shows the cart
    let response = server.get("/dashboard").await.unwrap();
    let html = response.text().await.unwrap();
    assert!(html.contains(&format!("Cart #{}", receipt.cart_id)));
}

#[tokio::test]
async fn test_checkout_empty_ids_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server
        .post_json(
            "/items/deactivate",
            &Checkout {
                ids: vec![],
                amount: 100,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_checkout_malformed_body_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    // Non-integer amount
    let response = server
        .post_raw_json("/items/deactivate", r#"{"ids": [1], "amount": "ten"}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Non-integer id in the list
    let response = server
        .post_raw_json("/items/deactivate", r#"{"ids": [1, "two"], "amount": 10}"#)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_checkout_unknown_item_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server
        .post_json(
            "/items/deactivate",
            &Checkout {
                ids: vec![i64::MAX],
                amount: 100,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_checkout_same_items_twice_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    let response = server.post_json("/items", &CreateItem::new("milk")).await.unwrap();
    let item: Item = assert_json(response, StatusCode::CREATED).await.unwrap();

    let checkout = Checkout {
        ids: vec![item.id],
        amount: 100,
    };
    let response = server.post_json("/items/deactivate", &checkout).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_json("/items/deactivate", &checkout).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_dashboard_shows_latest_three_carts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    login_fresh_user(&server).await;

    // Four checkouts of one item each
    let mut cart_ids = Vec::new();
    for (name, amount) in [("a", 100), ("b", 200), ("c", 300), ("d", 400)] {
        let response = server.post_json("/items", &CreateItem::new(name)).await.unwrap();
        let item: Item = assert_json(response, StatusCode::CREATED).await.unwrap();

        let response = server
            .post_json(
                "/items/deactivate",
                &Checkout {
                    ids: vec![item.id],
                    amount,
                },
            )
            .await
            .unwrap();
        let receipt: CheckoutReceipt = assert_json(response, StatusCode::OK).await.unwrap();
        cart_ids.push(receipt.cart_id);
    }

    let response = server.get("/dashboard").await.unwrap();
    let html = response.text().await.unwrap();

    // Latest three carts are shown; the oldest dropped off. The trailing
    // space keeps "Cart #12" from matching "Cart #123".
    assert!(html.contains(&format!("Cart #{} ", cart_ids[3])));
    assert!(html.contains(&format!("Cart #{} ", cart_ids[2])));
    assert!(html.contains(&format!("Cart #{} ", cart_ids[1])));
    assert!(!html.contains(&format!("Cart #{} ", cart_ids[0])));
}
