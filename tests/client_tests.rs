mod common;

use std::sync::Arc;

use stockroom::client::storage::{MemoryStore, TokenStore};
use stockroom::client::{ApiClient, ClientError};
use stockroom::models::ProductPayload;

fn payload(name: &str) -> ProductPayload {
    ProductPayload {
        name: Some(name.to_string()),
        description: None,
        price: Some(49.90),
        category: Some("Geral".to_string()),
        stock: Some(3.0),
        active: None,
    }
}

#[tokio::test]
async fn login_persists_token_and_user() {
    let app = common::spawn_app().await;
    let store = Arc::new(MemoryStore::default());
    let client = ApiClient::new(format!("http://{}", app.addr), store.clone());

    assert!(!client.is_authenticated());

    let user = client
        .login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .expect("login should succeed");
    assert_eq!(user.email, common::ADMIN_EMAIL);
    assert_eq!(user.role, "admin");

    assert!(client.is_authenticated());
    assert!(store.get("auth_token").is_some());
    assert_eq!(client.user().unwrap().email, common::ADMIN_EMAIL);
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let app = common::spawn_app().await;
    let client = ApiClient::new(format!("http://{}", app.addr), MemoryStore::default());

    let err = client
        .login(common::ADMIN_EMAIL, "wrong")
        .await
        .expect_err("login must fail");
    match err {
        ClientError::Api { status, error } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(error, "Credenciais inválidas");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn unauthorized_response_clears_session() {
    let app = common::spawn_app().await;
    let store = Arc::new(MemoryStore::default());
    let client = ApiClient::new(format!("http://{}", app.addr), store.clone());

    client
        .login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .unwrap();

    // Simulate a token gone bad in storage.
    store.set("auth_token", "no-longer-valid");

    let err = client.products(1, 10, "true").await.expect_err("must be rejected");
    assert!(matches!(err, ClientError::SessionExpired));

    // Credentials were cleared immediately; the UI lands back at login.
    assert!(store.get("auth_token").is_none());
    assert!(store.get("user_data").is_none());
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn crud_through_client() {
    let app = common::spawn_app().await;
    let client = ApiClient::new(format!("http://{}", app.addr), MemoryStore::default());

    client
        .login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .unwrap();

    let created = client.create_product(&payload("Caneca")).await.unwrap();
    assert_eq!(created.name, "Caneca");
    assert_eq!(created.stock, 3);
    assert!(created.active);

    let page = client.products(1, 10, "true").await.unwrap();
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.products[0].id, created.id);

    let mut update = payload("Caneca grande");
    update.price = Some(59.90);
    let updated = client.update_product(created.id, &update).await.unwrap();
    assert_eq!(updated.name, "Caneca grande");
    assert_eq!(updated.price, 59.90);

    client.delete_product(created.id).await.unwrap();
    let err = client.product(created.id).await.expect_err("deleted");
    match err {
        ClientError::Api { status, error } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(error, "Produto não encontrado");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn validation_errors_reach_the_client_itemized() {
    let app = common::spawn_app().await;
    let client = ApiClient::new(format!("http://{}", app.addr), MemoryStore::default());

    client
        .login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
        .await
        .unwrap();

    let mut bad = payload("Caneca");
    bad.name = None;
    bad.price = Some(-1.0);
    let err = client.create_product(&bad).await.expect_err("invalid payload");
    match err {
        ClientError::Rejected { error, details } => {
            assert_eq!(error, "Dados de entrada inválidos");
            assert!(details.contains(&"Nome é obrigatório".to_string()));
            assert!(details.contains(&"Preço deve ser maior ou igual a zero".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}
