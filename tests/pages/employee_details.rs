//! tests/pages/employee_details.rs
//! The detail page renders an existing employee and 404s on an unknown id.

#[path = "../helpers.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn detail_page_shows_existing_employee() {
    let app = common::spawn_app().await;
    common::seed_employee(&app, 1, "Alice").await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/employee/1/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("Alice"));
    assert!(body.contains("Engineer"));
    assert!(body.contains("someone@example.com"));
}

#[tokio::test]
async fn detail_page_returns_404_for_unknown_id() {
    let app = common::spawn_app().await;
    common::seed_employee(&app, 1, "Alice").await;

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/employee/2/", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("Employee not found"));
    assert!(!body.contains("Alice"));
}

#[tokio::test]
async fn detail_page_accepts_both_slash_forms() {
    let app = common::spawn_app().await;
    common::seed_employee(&app, 7, "Grace").await;

    for url in [
        format!("{}/employee/7", app.address),
        format!("{}/employee/7/", app.address),
    ] {
        let resp: reqwest::Response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::OK, "unexpected status for {url}");
        assert!(resp.text().await.unwrap().contains("Grace"));
    }
}
