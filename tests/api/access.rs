use crate::helpers;

#[tokio::test]
async fn wizard_is_locked_before_the_access_form_is_submitted() {
    let app = helpers::spawn_app().await;

    for response in [
        app.get_wizard().await,
        app.set_field("companyName", "Acme").await,
        app.next_step().await,
        app.generate().await,
        app.preview().await,
    ] {
        assert_eq!(
            401,
            response.status().as_u16(),
            "The API did not reject a visitor who has not submitted the access form."
        );
    }
    assert_eq!(app.provider_requests().await, 0);
}

#[tokio::test]
async fn valid_lead_unlocks_the_wizard() {
    let app = helpers::spawn_app().await;

    app.enter().await;

    let response = app.get_wizard().await;
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn company_is_optional_in_the_access_form() {
    let app = helpers::spawn_app().await;

    let payload = serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@company.com"
    });
    let response = app.request_access(&payload).await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn access_form_returns_400_for_invalid_leads() {
    let app = helpers::spawn_app().await;

    let test_cases = [
        (
            serde_json::json!({ "name": "", "email": "jane@company.com" }),
            "empty name",
        ),
        (
            serde_json::json!({ "name": "   ", "email": "jane@company.com" }),
            "whitespace name",
        ),
        (
            serde_json::json!({ "name": "Jane Doe", "email": "" }),
            "empty email",
        ),
        (
            serde_json::json!({ "name": "Jane Doe", "email": "not-an-email" }),
            "invalid email",
        ),
        (serde_json::json!({ "email": "jane@company.com" }), "missing name"),
        (serde_json::json!({ "name": "Jane Doe" }), "missing email"),
    ];

    for (payload, description) in test_cases {
        let response = app.request_access(&payload).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {description}."
        );
    }

    // None of the rejected attempts may have unlocked the wizard
    assert_eq!(401, app.get_wizard().await.status().as_u16());
}

#[tokio::test]
async fn validation_errors_are_reported_as_json() {
    let app = helpers::spawn_app().await;

    let payload = serde_json::json!({ "name": "Jane Doe", "email": "not-an-email" });
    let response = app.request_access(&payload).await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("Invalid email"));
}

#[tokio::test]
async fn submitting_the_form_again_keeps_the_wizard_in_progress() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.set_field("companyName", "Acme").await;
    app.next_step().await;

    app.enter().await;

    let state = app.wizard_state().await;
    assert_eq!(state["config"]["companyName"], "Acme");
    assert_eq!(state["step"], 2);
}

#[tokio::test]
async fn each_visitor_gets_their_own_wizard() {
    let app = helpers::spawn_app().await;
    app.enter().await;
    app.set_field("companyName", "Acme").await;

    let other_visitor = helpers::TestApp {
        api_client: helpers::new_api_client(),
        ..app
    };
    other_visitor.enter().await;

    let state = other_visitor.wizard_state().await;
    assert_eq!(state["config"]["companyName"], "");
}
