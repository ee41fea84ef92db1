//! tests/pages/home.rs
//! The home page lists every employee, and an empty state when there are none.

#[path = "../helpers.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn home_lists_each_employee_exactly_once() {
    let app = common::spawn_app().await;
    common::seed_employee(&app, 1, "Alice").await;
    common::seed_employee(&app, 2, "Bob").await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert_eq!(body.matches("Alice").count(), 1);
    assert_eq!(body.matches("Bob").count(), 1);
}

#[tokio::test]
async fn home_links_to_each_employee_detail_page() {
    let app = common::spawn_app().await;
    common::seed_employee(&app, 7, "Grace").await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: String = resp.text().await.unwrap();
    assert!(body.contains(r#"href="/employee/7/""#));
}

#[tokio::test]
async fn home_renders_empty_state_without_employees() {
    let app = common::spawn_app().await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("No employees yet"));
    assert!(!body.contains("<li>"));
}
