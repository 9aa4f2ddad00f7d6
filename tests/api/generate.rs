use crate::helpers::{self, provider_reply, sample_content};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers;
use wiremock::{Mock, ResponseTemplate};

const GENERIC_FAILURE: &str = "Failed to generate content. Please check your API key and try again.";

#[tokio::test]
async fn generate_returns_the_generated_content() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    let _guard = app
        .mount_generation_reply(&sample_content(), Duration::ZERO)
        .await;

    let response = app.generate().await;

    assert_eq!(200, response.status().as_u16());
    let state: Value = response.json().await.unwrap();
    assert_eq!(state["generation"]["status"], "succeeded");
    assert_eq!(state["generation"]["content"], sample_content());
    assert!(state["generation"]["error"].is_null());
}

#[tokio::test]
async fn generate_sends_the_configuration_in_a_single_request() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    app.set_field("exampleTopic", "AI in Healthcare").await;
    app.set_field("tone", "Inspirational").await;

    Mock::given(matchers::path(app.generate_path()))
        .and(matchers::method("POST"))
        .and(matchers::header_exists("x-goog-api-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(provider_reply(&sample_content().to_string())),
        )
        .expect(1)
        .mount(&app.provider_server)
        .await;

    app.generate().await;

    let requests = app.provider_server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Company Name: Acme"));
    assert!(prompt.contains("Target Audience: Freelance Developers"));
    assert!(prompt.contains("Primary Topic/Niche: SaaS Marketing"));
    assert!(prompt.contains("Brand Tone: Inspirational"));
    assert!(prompt.contains("Specific Topic for this Sample: AI in Healthcare"));
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}

#[tokio::test]
async fn provider_failure_is_reported_with_the_generic_message() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    let _guard = app.mount_generation_failure(500).await;

    let response = app.generate().await;

    assert_eq!(502, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], GENERIC_FAILURE);

    let state = app.wizard_state().await;
    assert_eq!(state["generation"]["status"], "failed");
    assert_eq!(state["generation"]["error"], GENERIC_FAILURE);
    assert!(state["generation"]["content"].is_null());
}

#[tokio::test]
async fn malformed_model_output_is_reported_with_the_generic_message() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;

    Mock::given(matchers::path(app.generate_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(provider_reply("Subject: Hello\n\nHere is your newsletter")),
        )
        .expect(1)
        .mount(&app.provider_server)
        .await;

    let response = app.generate().await;

    assert_eq!(502, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], GENERIC_FAILURE);
}

#[tokio::test]
async fn missing_credential_fails_without_calling_the_provider() {
    let app = helpers::spawn_app_without_credential().await;
    app.enter().await;
    app.complete_wizard().await;

    let response = app.generate().await;

    assert_eq!(502, response.status().as_u16());
    assert_eq!(app.provider_requests().await, 0);
    let state = app.wizard_state().await;
    assert_eq!(state["generation"]["error"], GENERIC_FAILURE);

    // The wizard stays usable after the failure
    assert_eq!(200, app.previous_step().await.status().as_u16());
}

#[tokio::test]
async fn a_failed_regeneration_keeps_the_previous_content() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;

    {
        let _guard = app
            .mount_generation_reply(&sample_content(), Duration::ZERO)
            .await;
        assert_eq!(200, app.generate().await.status().as_u16());
    }

    let _guard = app.mount_generation_failure(503).await;
    assert_eq!(502, app.generate().await.status().as_u16());

    let state = app.wizard_state().await;
    assert_eq!(state["generation"]["status"], "failed");
    assert_eq!(state["generation"]["error"], GENERIC_FAILURE);
    assert_eq!(state["generation"]["content"], sample_content());
}

#[tokio::test]
async fn a_second_trigger_while_generating_is_rejected() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;
    let _guard = app
        .mount_generation_reply(&sample_content(), Duration::from_millis(500))
        .await;

    let first = tokio::spawn({
        let client = app.api_client.clone();
        let url = format!("{}/v1/wizard/generate", app.address);
        async move { client.post(url).send().await.unwrap().status().as_u16() }
    });

    // Give the first request time to reach the provider
    while app.provider_requests().await == 0 {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let state = app.wizard_state().await;
    assert_eq!(state["generation"]["status"], "loading");

    let second = app.generate().await;
    assert_eq!(409, second.status().as_u16());

    // Navigation keeps working meanwhile
    assert_eq!(200, app.previous_step().await.status().as_u16());

    assert_eq!(200, first.await.unwrap());
    assert_eq!(app.provider_requests().await, 1);

    let state = app.wizard_state().await;
    assert_eq!(state["generation"]["status"], "succeeded");
    assert_eq!(state["step"], 3);
}

#[tokio::test]
async fn an_oversized_body_is_refused() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.complete_wizard().await;

    let content = serde_json::json!({
        "subject": "S",
        "preheader": "P",
        "body": format!("<p>{}</p>", "a".repeat(100_000)),
    });
    let _guard = app.mount_generation_reply(&content, Duration::ZERO).await;

    let response = app.generate().await;

    assert_eq!(502, response.status().as_u16());
    let state = app.wizard_state().await;
    assert!(state["generation"]["content"].is_null());
}
