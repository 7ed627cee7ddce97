#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};
use spendzen_connect::BackendApiClient;
use spendzen_core::config::{resolve_backend_url, AppMode};

/// Serves `router` on an ephemeral local port and returns a client for it.
pub async fn spawn_backend(router: Router) -> Arc<BackendApiClient> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let base_url = resolve_backend_url(AppMode::Development, &addr.to_string());
    Arc::new(BackendApiClient::new(&base_url, None).unwrap())
}

pub fn user_json(id: &str, clerk_id: &str, first_name: &str) -> Value {
    json!({
        "_id": id,
        "clerkId": clerk_id,
        "firstName": first_name,
        "lastName": "Lovelace",
        "fullName": format!("{first_name} Lovelace"),
        "imageUrl": "https://img.example/avatar.png",
        "email": "ada@example.com"
    })
}

pub fn goal_json(id: &str, name: &str, current: f64, target: f64) -> Value {
    json!({
        "_id": id,
        "userId": "65f0",
        "goalName": name,
        "currentAmount": current,
        "goalAmount": target,
        "status": "active",
        "selectedCategories": ["Travel"],
        "createdAt": "2025-09-10T12:00:00.000Z",
        "updatedAt": "2025-09-10T12:00:00.000Z"
    })
}
