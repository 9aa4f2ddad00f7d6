use crate::helpers::{self, provider_reply};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn preview_shows_a_placeholder_before_anything_is_generated() {
    let app = helpers::spawn_app().await;
    app.enter().await;

    let response = app.preview().await;

    assert_eq!(200, response.status().as_u16());
    let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"));
    let html = response.text().await.unwrap();
    assert!(html.contains("Preview will appear here"));
}

#[tokio::test]
async fn preview_renders_the_generated_newsletter() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    let _guard = app
        .mount_generation_reply(&helpers::sample_content(), Duration::ZERO)
        .await;
    app.generate().await;

    let html = app.preview().await.text().await.unwrap();

    assert!(html.contains("This week in SaaS Marketing"));
    assert!(html.contains("Three ideas to try before Friday"));
    assert!(html.contains("<h3>Hello builders</h3>"));
    assert!(html.contains("<strong>matters</strong>"));
    assert!(html.contains("<li>One</li>"));
    assert!(html.contains(">Acme<"));
}

#[tokio::test]
async fn preview_strips_markup_outside_the_allowed_set() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;

    let content = json!({
        "subject": "<b>Bold</b> claims",
        "preheader": "Read on",
        "body": "<p onclick=\"steal()\">Hi <a href=\"https://evil.test\">there</a></p><script>alert(1)</script><img src=x>"
    });
    Mock::given(matchers::path(app.generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_reply(&content.to_string())))
        .mount(&app.provider_server)
        .await;
    assert_eq!(200, app.generate().await.status().as_u16());

    let html = app.preview().await.text().await.unwrap();

    assert!(html.contains("<p>Hi there</p>"));
    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; claims"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("alert(1)"));
    assert!(!html.contains("onclick"));
    assert!(!html.contains("evil.test"));
    assert!(!html.contains("<img"));
}

#[tokio::test]
async fn preview_shows_progress_while_generating() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    let _guard = app
        .mount_generation_reply(&helpers::sample_content(), Duration::from_millis(500))
        .await;

    let pending = tokio::spawn({
        let client = app.api_client.clone();
        let url = format!("{}/v1/wizard/generate", app.address);
        async move { client.post(url).send().await.unwrap().status().as_u16() }
    });
    while app.provider_requests().await == 0 {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let html = app.preview().await.text().await.unwrap();
    assert!(html.contains("Crafting Content..."));

    assert_eq!(200, pending.await.unwrap());
    let html = app.preview().await.text().await.unwrap();
    assert!(!html.contains("Crafting Content..."));
    assert!(html.contains("This week in SaaS Marketing"));
}
