//! tests/api/register.rs

use crate::helpers::{
    error_message, spawn_app, InMemoryStore, RecordingEmailClient, TestAppBuilder,
};

#[tokio::test]
async fn register_returns_a_200_and_persists_the_registrant() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app.post_registrant("Ada", "ada@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Form submitted successfully!");

    let saved = test_app.store.registrants();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name, "Ada");
    assert_eq!(saved[0].email, "ada@example.com");
}

#[tokio::test]
async fn register_sends_one_confirmation_email_with_the_rendered_template() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    test_app.post_registrant("Ada", "ada@example.com").await;

    // Assert
    let sent = test_app.email_client.take_sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "ada@example.com");
    assert_eq!(sent[0].subject, test_app.configuration.email.subject);
    assert!(sent[0].html_content.contains("Hi Ada,"));
    assert!(!sent[0].html_content.contains("{name}"));
}

#[tokio::test]
async fn registering_the_same_email_twice_returns_a_400() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_registrant("Ada", "ada@example.com").await;

    // Act
    let response = test_app
        .post_registrant("Ada Lovelace", "ada@example.com")
        .await;

    // Assert
    assert_eq!(400, response.status().as_u16());
    assert_eq!(
        error_message(response).await,
        "User with this email is already registered."
    );
    assert_eq!(test_app.store.registrants().len(), 1);
    assert_eq!(test_app.email_client.sent_count(), 1);
}

#[tokio::test]
async fn duplicate_requests_never_insert_again() {
    // Arrange
    let test_app = spawn_app().await;
    test_app.post_registrant("Ada", "ada@example.com").await;

    for _ in 0..3 {
        // Act
        let response = test_app.post_registrant("Ada", "ada@example.com").await;

        // Assert
        assert_eq!(400, response.status().as_u16());
    }
    assert_eq!(test_app.store.registrants().len(), 1);
    assert_eq!(test_app.email_client.sent_count(), 1);
}

#[tokio::test]
async fn register_returns_a_400_when_data_is_missing() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        (r#"{"name":"Ada"}"#, "Missing required field `email`.", "missing the email"),
        (
            r#"{"email":"ada@example.com"}"#,
            "Missing required field `name`.",
            "missing the name",
        ),
        (r#"{}"#, "Missing required field `name`.", "missing both name and email"),
        (
            r#"{"name":null,"email":"ada@example.com"}"#,
            "Missing required field `name`.",
            "null name",
        ),
    ];

    for (invalid_body, expected_error, description) in test_cases {
        // Act
        let response = test_app.post_register(invalid_body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customized error message on test failure
            "The API did not fail with 400 Bad Request when payload was {}.",
            description
        );
        assert_eq!(error_message(response).await, expected_error, "{}", description);
    }
    assert!(test_app.store.registrants().is_empty());
    assert_eq!(test_app.email_client.sent_count(), 0);
}

#[tokio::test]
async fn register_returns_a_400_when_fields_are_present_but_invalid() {
    // Arrange
    let test_app = spawn_app().await;
    let test_cases = vec![
        (r#"{"name":"","email":"ada@example.com"}"#, "empty name"),
        (r#"{"name":"Ada","email":"   "}"#, "blank email"),
        (r#"{"name":42,"email":"ada@example.com"}"#, "numeric name"),
        (r#"{"name":"Ada","email":["ada@example.com"]}"#, "email as array"),
        (r#""Ada <ada@example.com>""#, "string payload"),
        (r#"{"name":"Ada","#, "truncated json"),
    ];

    for (invalid_body, description) in test_cases {
        // Act
        let response = test_app.post_register(invalid_body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        // every rejection carries a JSON error body
        assert!(!error_message(response).await.is_empty(), "{}", description);
    }
    assert!(test_app.store.registrants().is_empty());
}

#[tokio::test]
async fn register_still_succeeds_if_the_confirmation_email_fails() {
    // Arrange
    let test_app = TestAppBuilder::new()
        .email_client(RecordingEmailClient::failing())
        .spawn()
        .await;

    // Act
    let response = test_app.post_registrant("Ada", "ada@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(test_app.store.registrants().len(), 1);
    assert_eq!(test_app.email_client.sent_count(), 1);
}

#[tokio::test]
async fn register_still_succeeds_if_the_template_is_missing() {
    // Arrange
    let missing = std::env::temp_dir().join(format!("{}.html", uuid::Uuid::new_v4()));
    let test_app = TestAppBuilder::new().template_path(missing).spawn().await;

    // Act
    let response = test_app.post_registrant("Ada", "ada@example.com").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(test_app.store.registrants().len(), 1);
    assert_eq!(test_app.email_client.sent_count(), 0);
}

#[tokio::test]
async fn register_fails_if_the_store_is_unavailable() {
    // Arrange
    let test_app = TestAppBuilder::new()
        .store(InMemoryStore::unavailable())
        .spawn()
        .await;

    // Act
    let response = test_app.post_registrant("Ada", "ada@example.com").await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);
    let message = error_message(response).await;
    assert_eq!(message, "Failed to look up registrant by email.");
    assert!(!message.contains("10.0.0.3"));
    assert_eq!(test_app.email_client.sent_count(), 0);
}

#[tokio::test]
async fn register_keeps_name_and_email_verbatim() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let response = test_app
        .post_registrant(" Zoë <Admin> ", "Zoe@Example.com")
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let saved = test_app.store.registrants();
    assert_eq!(saved[0].name, " Zoë <Admin> ");
    assert_eq!(saved[0].email, "Zoe@Example.com");
}
