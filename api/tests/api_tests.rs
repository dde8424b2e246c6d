mod common;

use chrono::Utc;
use common::TestApp;
use common::TEST_SECRET;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use reqwest::StatusCode;
use serde_json::json;

#[derive(serde::Serialize)]
struct TestClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

fn sign_claims(claims: &TestClaims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to sign test token")
}

// Registration

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "username": "alice",
            "email_address": "alice@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["email"], "alice@example.com");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "username": "alice",
            "email_address": "other@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "username": "alice",
            "email_address": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_rejects_unknown_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "username": "alice",
            "email_address": "alice@example.com",
            "password": "pass_word!",
            "is_admin": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// Login

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;

    let response = app
        .post("/auth/token")
        .form(&[("username", "alice"), ("password", "pass_word!")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().expect("Missing access_token");
    assert!(!token.is_empty());
    // Compact three-segment form
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_wrong_password_is_generic() {
    let app = TestApp::spawn().await;
    app.register_user("bob", "bob@example.com", "Correct_Password!")
        .await;

    let response = app
        .post("/auth/token")
        .form(&[("username", "bob"), ("password", "Wrong_Password!")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let message = body["data"]["message"].as_str().unwrap();
    // No hint about which field was wrong
    assert_eq!(message, "Incorrect username or password");
}

#[tokio::test]
async fn test_login_unknown_user_indistinguishable_from_wrong_password() {
    let app = TestApp::spawn().await;
    app.register_user("bob", "bob@example.com", "Correct_Password!")
        .await;

    let wrong_password = app
        .post("/auth/token")
        .form(&[("username", "bob"), ("password", "nope")])
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_user = app
        .post("/auth/token")
        .form(&[("username", "nobody"), ("password", "nope")])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json().await.expect("Failed to parse");
    let second: serde_json::Value = unknown_user.json().await.expect("Failed to parse");
    assert_eq!(first, second);
}

// Bearer gate

#[tokio::test]
async fn test_protected_route_without_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/profile/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );
}

#[tokio::test]
async fn test_protected_route_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/profile/me", "not-even-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"].as_str().unwrap(),
        "Could not validate credentials"
    );
}

#[tokio::test]
async fn test_protected_route_with_non_bearer_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/profile/me")
        .header("Authorization", "Basic YWxpY2U6cGFzcw==")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;

    // Issued 31 minutes ago with the standard 30 minute TTL
    let now = Utc::now().timestamp();
    let token = sign_claims(&TestClaims {
        sub: "alice".to_string(),
        iat: now - 31 * 60,
        exp: now - 60,
    });

    let response = app
        .get_authenticated("/profile/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"]["message"].as_str().unwrap(),
        "Could not validate credentials"
    );
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    // Flip a character inside the signature segment
    let (prefix, signature) = token.rsplit_once('.').unwrap();
    let mut altered = signature.to_string();
    let original = altered.remove(0);
    let replacement = if original == 'A' { 'B' } else { 'A' };
    altered.insert(0, replacement);
    let tampered = format!("{}.{}", prefix, altered);

    let response = app
        .get_authenticated("/profile/me", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_subject_rejected() {
    let app = TestApp::spawn().await;

    // Validly signed, but "carol" was never registered
    let issued = app
        .token_issuer
        .issue("carol")
        .expect("Failed to issue token");

    let response = app
        .get_authenticated("/profile/me", &issued.token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // Same generic rejection as any other bearer failure
    assert_eq!(
        body["data"]["message"].as_str().unwrap(),
        "Could not validate credentials"
    );
}

// Profile

#[tokio::test]
async fn test_get_profile_serves_defaults() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .get_authenticated("/profile/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["goals"]["daily_steps"], 10000);
    assert_eq!(body["data"]["goals"]["weekly_workouts"], 5);
    assert_eq!(body["data"]["goals"]["daily_calories"], 2000);
    assert_eq!(body["data"]["notifications"]["email"], true);
    assert_eq!(body["data"]["notifications"]["diet"], true);
}

#[tokio::test]
async fn test_update_profile_goals() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .put_authenticated("/profile/me", &token)
        .json(&json!({
            "goals": {
                "daily_steps": 12000,
                "weekly_workouts": 4,
                "daily_calories": 1900
            }
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let fetched = app
        .get_authenticated("/profile/me", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = fetched.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["goals"]["daily_steps"], 12000);
    // Untouched settings still render defaults
    assert_eq!(body["data"]["notifications"]["push"], true);
}

#[tokio::test]
async fn test_update_profile_rejects_unknown_fields() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .put_authenticated("/profile/me", &token)
        .json(&json!({ "role": "admin" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// Finance

#[tokio::test]
async fn test_record_and_list_transactions() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let created = app
        .post_authenticated("/finance/transactions", &token)
        .json(&json!({
            "kind": "income",
            "category": "salary",
            "amount": 2000.0,
            "description": "June paycheck"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(created.status(), StatusCode::CREATED);

    app.post_authenticated("/finance/transactions", &token)
        .json(&json!({
            "kind": "expense",
            "category": "groceries",
            "amount": 120.5
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/finance/transactions", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let transactions = body["data"].as_array().expect("Expected array");
    assert_eq!(transactions.len(), 2);
    // Newest first
    assert_eq!(transactions[0]["kind"], "expense");
    assert_eq!(transactions[1]["kind"], "income");
}

#[tokio::test]
async fn test_transaction_summary() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    for (kind, category, amount) in [
        ("income", "salary", 2000.0),
        ("expense", "rent", 800.0),
        ("expense", "groceries", 200.0),
    ] {
        app.post_authenticated("/finance/transactions", &token)
            .json(&json!({ "kind": kind, "category": category, "amount": amount }))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let response = app
        .get_authenticated("/finance/transactions/summary", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["income"], 2000.0);
    assert_eq!(body["data"]["expenses"], 1000.0);
    assert_eq!(body["data"]["balance"], 1000.0);
}

#[tokio::test]
async fn test_transactions_are_scoped_per_user() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    app.register_user("bob", "bob@example.com", "pass_word!")
        .await;
    let alice_token = app.obtain_token("alice", "pass_word!").await;
    let bob_token = app.obtain_token("bob", "pass_word!").await;

    app.post_authenticated("/finance/transactions", &alice_token)
        .json(&json!({ "kind": "income", "category": "salary", "amount": 500.0 }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/finance/transactions", &bob_token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_record_transaction_invalid_kind() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .post_authenticated("/finance/transactions", &token)
        .json(&json!({ "kind": "transfer", "category": "misc", "amount": 10.0 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_monthly_summary_buckets() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    app.post_authenticated("/finance/transactions", &token)
        .json(&json!({ "kind": "income", "category": "salary", "amount": 1500.0 }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/finance/transactions/monthly", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let months = body["data"].as_object().expect("Expected object");
    // Exactly one bucket: the current month
    assert_eq!(months.len(), 1);
    let totals = months.values().next().unwrap();
    assert_eq!(totals["income"], 1500.0);
    assert_eq!(totals["expenses"], 0.0);
}

// Activities

#[tokio::test]
async fn test_log_activity() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .post_authenticated("/activities", &token)
        .json(&json!({
            "activity_type": "running",
            "steps": 4200,
            "calories": 320.0,
            "duration_minutes": 30
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["activity_type"], "running");
    assert_eq!(body["data"]["steps"], 4200);
}

#[tokio::test]
async fn test_activity_stats() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let daily = app
        .get_authenticated("/activities/daily", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(daily.status(), StatusCode::OK);
    let body: serde_json::Value = daily.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["steps"], 8432);

    let weekly = app
        .get_authenticated("/activities/weekly", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(weekly.status(), StatusCode::OK);
    let body: serde_json::Value = weekly.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["steps"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["dates"][0], "Mon");
}

// Catalogs

#[tokio::test]
async fn test_workout_genres_and_playlist() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let genres = app
        .get_authenticated("/workout/music/genres", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(genres.status(), StatusCode::OK);
    let body: serde_json::Value = genres.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let playlist = app
        .get_authenticated("/workout/music/Yoga", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(playlist.status(), StatusCode::OK);
    let body: serde_json::Value = playlist.json().await.expect("Failed to parse response");
    assert_eq!(body["data"][0]["title"], "Peaceful Flow");

    let missing = app
        .get_authenticated("/workout/music/Polka", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_learning_modules() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let modules = app
        .get_authenticated("/learning/modules", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(modules.status(), StatusCode::OK);
    let body: serde_json::Value = modules.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let module = app
        .get_authenticated("/learning/modules/1", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(module.status(), StatusCode::OK);
    let body: serde_json::Value = module.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Financial Freedom Basics");
    assert_eq!(body["data"]["lessons"].as_array().unwrap().len(), 4);

    let missing = app
        .get_authenticated("/learning/modules/99", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_complete_lesson() {
    let app = TestApp::spawn().await;
    app.register_user("alice", "alice@example.com", "pass_word!")
        .await;
    let token = app.obtain_token("alice", "pass_word!").await;

    let response = app
        .post_authenticated("/learning/modules/2/lessons/3/complete", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Lesson completed successfully");

    let missing_lesson = app
        .post_authenticated("/learning/modules/2/lessons/9/complete", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(missing_lesson.status(), StatusCode::NOT_FOUND);
}

// Public surface

#[tokio::test]
async fn test_welcome_and_daily_quote_are_public() {
    let app = TestApp::spawn().await;

    let welcome = app.get("/").send().await.expect("Failed to execute request");
    assert_eq!(welcome.status(), StatusCode::OK);
    let body: serde_json::Value = welcome.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Welcome to Success Path API");

    let quote = app
        .get("/quotes/daily")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(quote.status(), StatusCode::OK);
    let body: serde_json::Value = quote.json().await.expect("Failed to parse response");
    assert!(body["data"]["quote"].as_str().unwrap().contains("courage"));
}
