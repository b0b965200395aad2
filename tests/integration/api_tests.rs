//! API integration tests
//!
//! These run against a live server with a clean database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

fn unique(name: &str) -> String {
    format!("{} {}", name, chrono::Utc::now().timestamp_millis())
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_pings_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_create_category_derives_slug() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/categories", BASE_URL))
        .json(&json!({ "name": "Пешие туры" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["slug"], "peshie-tury");
    assert_eq!(body["tagSort"], 0);
    assert_eq!(body["isActive"], true);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_slug_is_rejected() {
    let client = Client::new();
    let payload = json!({ "name": "Дубликат", "slug": "dup-check-slug" });

    let first = client
        .post(format!("{}/api/categories", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/api/categories", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 400);

    let body: Value = second.json().await.expect("Failed to parse response");
    let message = body["error"].as_str().expect("No error message");
    assert!(message.contains("already exists"));
}

#[tokio::test]
#[ignore]
async fn test_slug_update_to_taken_value_is_rejected() {
    let client = Client::new();
    let stamp = chrono::Utc::now().timestamp_millis();
    let taken = format!("taken-slug-{}", stamp);

    let first = client
        .post(format!("{}/api/tags", BASE_URL))
        .json(&json!({ "name": unique("Первый"), "slug": taken }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second: Value = client
        .post(format!("{}/api/tags", BASE_URL))
        .json(&json!({
            "name": unique("Второй"),
            "slug": format!("free-slug-{}", stamp)
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = second["_id"].as_str().expect("No _id");

    // Renaming onto an occupied slug is a conflict, not a server error
    let response = client
        .put(format!("{}/api/tags/{}", BASE_URL, id))
        .json(&json!({ "slug": taken }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let message = body["error"].as_str().expect("No error message");
    assert!(message.contains("already exists"));
}

#[tokio::test]
#[ignore]
async fn test_malformed_id_answers_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/excursions/not-a-hex-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_id_answers_404() {
    let client = Client::new();

    // Well-formed ObjectId that matches nothing
    let response = client
        .get(format!(
            "{}/api/excursions/ffffffffffffffffffffffff",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_composite_excursion_create() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/excursions", BASE_URL))
        .json(&json!({
            "card": {
                "title": unique("Тур по Кремлю"),
                "description": "Обзорная экскурсия"
            },
            "commercial": {
                "schedule": [
                    { "date": "2026-09-01", "time": "10:00" },
                    { "date": "2026-09-02", "time": "10:00" }
                ]
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    // The composite create answers 200, not 201
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    let slug = body["commercialSlug"].as_str().expect("No commercialSlug");
    assert!(slug.starts_with("tur-po-kremlyu"));

    // "<base>-<6 random chars>"
    let suffix = slug.rsplit('-').next().expect("No suffix");
    assert_eq!(suffix.len(), 6);

    // The linked schedule is reachable through the times endpoint
    let id = body["_id"].as_str().expect("No _id");
    let times: Value = client
        .get(format!("{}/api/excursions/{}/times", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(times, json!(["10:00"]));
}

#[tokio::test]
#[ignore]
async fn test_tag_update_returns_success_body() {
    let client = Client::new();

    let created: Value = client
        .post(format!("{}/api/tags", BASE_URL))
        .json(&json!({ "name": unique("С детьми") }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["_id"].as_str().expect("No _id");

    let response = client
        .put(format!("{}/api/tags/{}", BASE_URL, id))
        .json(&json!({ "isActive": false }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "success": true }));

    let tag: Value = client
        .get(format!("{}/api/tags/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(tag["isActive"], false);
}

#[tokio::test]
#[ignore]
async fn test_booking_intake_starts_as_new() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/bookings", BASE_URL))
        .json(&json!({
            "fullName": "Иван Петров",
            "phone": "+7 900 000-00-00",
            "ticketType": "adult",
            "ticketCount": 2
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");
    assert_eq!(body["ticketCount"], 2);
}

#[tokio::test]
#[ignore]
async fn test_group_capacity_is_enforced() {
    let client = Client::new();

    let group: Value = client
        .post(format!("{}/api/groups", BASE_URL))
        .json(&json!({
            "date": "2026-09-01",
            "time": "10:00",
            "totalSeats": 1
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = group["_id"].as_str().expect("No _id");

    let tourist = json!({ "name": "Анна", "phone": "+7 901 000-00-00" });

    let first = client
        .post(format!("{}/api/groups/{}/tourists", BASE_URL, id))
        .json(&tourist)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/api/groups/{}/tourists", BASE_URL, id))
        .json(&tourist)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 400);

    // Removing the tourist frees the seat again
    let first_body: Value = first.json().await.expect("Failed to parse response");
    let tourist_id = first_body["_id"].as_str().expect("No _id");
    let removed = client
        .delete(format!("{}/api/tourists/{}", BASE_URL, tourist_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(removed.status().is_success());

    let third = client
        .post(format!("{}/api/groups/{}/tourists", BASE_URL, id))
        .json(&tourist)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(third.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_group_delete_cascades_tourists() {
    let client = Client::new();

    let group: Value = client
        .post(format!("{}/api/groups", BASE_URL))
        .json(&json!({
            "date": "2026-09-02",
            "time": "12:00",
            "totalSeats": 10
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = group["_id"].as_str().expect("No _id");

    client
        .post(format!("{}/api/groups/{}/tourists", BASE_URL, id))
        .json(&json!({ "name": "Мария", "phone": "+7 902 000-00-00" }))
        .send()
        .await
        .expect("Failed to send request");

    let deleted = client
        .delete(format!("{}/api/groups/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(deleted.status().is_success());

    let tourists = client
        .get(format!("{}/api/groups/{}/tourists", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(tourists.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_group_answers_404() {
    let client = Client::new();

    let response = client
        .delete(format!(
            "{}/api/groups/ffffffffffffffffffffffff",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_filters_endpoint_shape() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/filters", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let blocks = body.as_array().expect("Not an array");
    for block in blocks {
        assert!(block["id"].is_string());
        assert!(block["title"].is_string());
        for option in block["options"].as_array().expect("No options") {
            assert_eq!(option["count"], 0);
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_admin_boundary_redirects_anonymous() {
    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client");

    let response = client
        .get(format!("{}/admin/session", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers()["location"],
        "/admin/login",
        "anonymous admin requests land on the login page"
    );
}

#[tokio::test]
#[ignore]
async fn test_admin_login_and_session() {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client");

    let login = client
        .post(format!("{}/admin/login", BASE_URL))
        .json(&json!({ "login": "admin", "password": "admin" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(login.status().is_success());

    let session: Value = client
        .get(format!("{}/admin/session", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(session["login"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_admin_login_bad_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin/login", BASE_URL))
        .json(&json!({ "login": "admin", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_contact_form_lands_in_booking_inbox() {
    let client = Client::new();

    let response = client
        .post(format!("{}/api/contact", BASE_URL))
        .json(&json!({
            "name": "Ольга",
            "phone": "+7 903 000-00-00",
            "message": "Есть ли экскурсии в декабре?"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");
    assert_eq!(body["comment"], "Есть ли экскурсии в декабре?");
}
