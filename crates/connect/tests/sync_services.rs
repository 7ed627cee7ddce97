mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use spendzen_connect::{
    AuthHandoff, GoalSyncService, NextScreen, RequestContext, RequestScope, UserSyncService,
};
use spendzen_core::errors::Error;
use spendzen_core::goals::NewGoal;
use spendzen_core::onboarding::OnboardingDraft;
use spendzen_core::stores::AppStores;
use spendzen_core::users::{IdentityUser, UserData};

use common::{goal_json, spawn_backend, user_json};

fn identity() -> IdentityUser {
    IdentityUser {
        id: "user_2abc".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        full_name: Some("Ada Lovelace".to_string()),
        image_url: None,
        primary_email: Some("ada@example.com".to_string()),
    }
}

fn existing_user() -> UserData {
    serde_json::from_value(user_json("old", "user_old", "Grace")).unwrap()
}

fn new_goal(name: &str) -> NewGoal {
    NewGoal {
        goal_name: name.to_string(),
        goal_amount: 200.0,
        selected_categories: vec![],
        user_id: "65f0".to_string(),
    }
}

#[tokio::test]
async fn save_user_overwrites_user_store() {
    let router = Router::new().route(
        "/user/save",
        post(|| async { Json(json!({ "user": user_json("65f0", "user_2abc", "Ada") })) }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    stores.user.set_user(existing_user());
    let service = UserSyncService::new(api, stores.user.clone());

    let user = service
        .save_user(&identity(), &RequestContext::detached())
        .await
        .unwrap();

    assert_eq!(user.id, "65f0");
    assert_eq!(stores.user.user(), Some(user));
}

#[tokio::test]
async fn failed_save_user_leaves_store_unmodified() {
    let router = Router::new().route(
        "/user/save",
        post(|| async { (StatusCode::BAD_REQUEST, "clerkId is required") }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    stores.user.set_user(existing_user());
    let service = UserSyncService::new(api, stores.user.clone());

    let err = service
        .save_user(&identity(), &RequestContext::detached())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("clerkId is required"));
    assert_eq!(stores.user.user(), Some(existing_user()));
}

#[tokio::test]
async fn goal_upserts_by_id_across_saves() {
    let router = Router::new().route(
        "/goal/save",
        post(|Json(body): Json<Value>| async move {
            let name = body["goalName"].as_str().unwrap_or_default().to_string();
            // "Bike" is a separate goal; every other name edits goal "a".
            let id = if name == "Bike" { "b" } else { "a" };
            Json(json!({ "goal": goal_json(id, &name, 0.0, 200.0) }))
        }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    let service = GoalSyncService::new(api, stores.goals.clone(), stores.user.clone());
    let ctx = RequestContext::detached();

    service.save_goal(&new_goal("Trip"), &ctx).await.unwrap();
    service.save_goal(&new_goal("X"), &ctx).await.unwrap();
    let goals = stores.goals.goals();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].goal_name, "X");

    service.save_goal(&new_goal("Bike"), &ctx).await.unwrap();
    let goals = stores.goals.goals();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[1].id.as_deref(), Some("b"));
}

#[tokio::test]
async fn invalid_goal_is_rejected_before_any_request() {
    // No routes: any request would come back 404.
    let api = spawn_backend(Router::new()).await;
    let stores = AppStores::new();
    let service = GoalSyncService::new(api, stores.goals.clone(), stores.user.clone());

    let mut goal = new_goal("Trip");
    goal.goal_amount = 0.0;
    let err = service
        .save_goal(&goal, &RequestContext::detached())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(stores.goals.goals().is_empty());
}

#[tokio::test]
async fn onboarding_submits_for_the_stored_user() {
    let router = Router::new().route(
        "/goal/save",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["userId"], "65f0");
            assert_eq!(body["goalAmount"], 1500.0);
            Json(json!({ "goal": goal_json("g1", "Trip to Japan", 0.0, 1500.0) }))
        }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    let service = GoalSyncService::new(api, stores.goals.clone(), stores.user.clone());

    let mut draft = OnboardingDraft::new();
    draft.goal_name = "Trip to Japan".to_string();
    draft.goal_amount = "$1,500".to_string();
    draft.toggle_category("Travel").unwrap();

    // Without a user nothing is sent.
    let err = service
        .submit_onboarding(&draft, &RequestContext::detached())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    stores
        .user
        .set_user(serde_json::from_value(user_json("65f0", "user_2abc", "Ada")).unwrap());
    let goal = service
        .submit_onboarding(&draft, &RequestContext::detached())
        .await
        .unwrap();
    assert_eq!(goal.id.as_deref(), Some("g1"));
    assert_eq!(stores.goals.primary_goal(), Some(goal));
}

#[tokio::test]
async fn cancelled_scope_aborts_request_and_skips_store_write() {
    let router = Router::new().route(
        "/user/get",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({ "user": user_json("65f0", "user_2abc", "Ada") }))
        }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    let service = UserSyncService::new(api, stores.user.clone());

    let scope = RequestScope::new();
    let ctx = scope.context();
    let (result, ()) = tokio::join!(service.fetch_user("user_2abc", &ctx), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        scope.cancel();
    });

    assert!(matches!(result, Err(Error::Cancelled(_))));
    assert!(stores.user.user().is_none());
}

#[tokio::test]
async fn superseded_fetch_does_not_overwrite_newer_user() {
    let router = Router::new().route(
        "/user/get",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let clerk_id = params.get("clerkId").cloned().unwrap_or_default();
            if clerk_id == "slow" {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(json!({ "user": user_json("65f0", "slow", "Older") }))
            } else {
                Json(json!({ "user": user_json("65f0", "fast", "Newer") }))
            }
        }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    let service = UserSyncService::new(api, stores.user.clone());
    let ctx = RequestContext::detached();

    // The slow request is issued first and completes last.
    let (slow, fast) = tokio::join!(
        service.fetch_user("slow", &ctx),
        service.fetch_user("fast", &ctx)
    );

    assert_eq!(slow.unwrap().first_name, "Older");
    assert_eq!(fast.unwrap().first_name, "Newer");
    assert_eq!(stores.user.user().unwrap().first_name, "Newer");
}

async fn handoff_for(status: Value) -> (AuthHandoff, AppStores) {
    let router = Router::new().route("/user/status", get(move || async move { Json(status) }));
    let api: Arc<dyn spendzen_connect::BackendApi> = spawn_backend(router).await;
    let stores = AppStores::new();
    let users = UserSyncService::new(api, stores.user.clone());
    (AuthHandoff::new(users, stores.clone()), stores)
}

#[tokio::test]
async fn sign_in_routes_by_user_status() {
    let ctx = RequestContext::detached();

    let (handoff, stores) = handoff_for(json!({ "userExists": false, "hasGoal": false })).await;
    assert_eq!(
        handoff.complete_sign_in("user_2abc", &ctx).await.unwrap(),
        NextScreen::Register
    );
    assert!(stores.user.user().is_none());

    let (handoff, stores) = handoff_for(json!({
        "userExists": true,
        "hasGoal": false,
        "user": user_json("65f0", "user_2abc", "Ada")
    }))
    .await;
    assert_eq!(
        handoff.complete_sign_in("user_2abc", &ctx).await.unwrap(),
        NextScreen::Onboarding
    );
    assert_eq!(stores.user.user_id().as_deref(), Some("65f0"));

    let (handoff, _stores) = handoff_for(json!({
        "userExists": true,
        "hasGoal": true,
        "user": user_json("65f0", "user_2abc", "Ada")
    }))
    .await;
    assert_eq!(
        handoff.complete_sign_in("user_2abc", &ctx).await.unwrap(),
        NextScreen::Home
    );
}

#[tokio::test]
async fn sign_up_saves_user_then_sign_out_resets() {
    let router = Router::new().route(
        "/user/save",
        post(|| async { Json(json!({ "user": user_json("65f0", "user_2abc", "Ada") })) }),
    );
    let api = spawn_backend(router).await;
    let stores = AppStores::new();
    let handoff = AuthHandoff::new(UserSyncService::new(api, stores.user.clone()), stores.clone());

    let next = handoff
        .complete_sign_up(&identity(), &RequestContext::detached())
        .await
        .unwrap();
    assert_eq!(next, NextScreen::Onboarding);
    assert!(stores.user.user().is_some());

    stores.savings.set_total_savings(12.0);
    assert_eq!(handoff.sign_out(), NextScreen::Welcome);
    assert!(stores.user.user().is_none());
    assert_eq!(stores.savings.total_savings(), 0.0);
}
