use serde_json::json;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::ResponseTemplate;

use crate::helpers::assert_is_redirect_to;
use crate::helpers::spawn_app;

#[tokio::test]
async fn page_serves_the_contact_form() {
    let app = spawn_app().await;

    let body = app.get_page().await;

    assert!(body.contains(r#"action="/contact""#));
    // fragment anchors render verbatim
    assert!(body.contains(r##"href="#contact""##));
    assert!(body.contains(r##"href="#projects""##));
    assert!(body.contains(r#"name="name""#));
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains(r#"name="message""#));
    // no stale toasts or inline errors on a fresh page (the stylesheet
    // mentions the class names; check for rendered elements)
    assert!(!body.contains(r#"<p class="field-error""#));
    assert!(!body.contains(r#"<p class="toast"#));
}

#[tokio::test]
async fn invalid_drafts_are_rejected_with_inline_errors_and_no_relay_call() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;

    for (body, expected, absent, msg) in [
        (
            json!({"name": "", "email": "", "message": ""}),
            vec!["Name is required", "Email is required", "Message is required"],
            vec!["Email is invalid"],
            "empty draft",
        ),
        (
            json!({"name": "Ann", "email": "abco", "message": "hi"}),
            vec!["Email is invalid"],
            vec!["Name is required", "Email is required", "Message is required"],
            "malformed email",
        ),
        (
            json!({"name": "Ann", "email": "", "message": "hi"}),
            vec!["Email is required"],
            vec!["Email is invalid", "Name is required"],
            "empty email",
        ),
        (
            json!({"name": "   ", "email": "a@b.co", "message": "hi"}),
            vec!["Name is required"],
            vec!["Email is required", "Message is required"],
            "whitespace-only name",
        ),
    ] {
        let resp = app.post_contact(&body).await;
        assert_eq!(resp.status().as_u16(), 400, "{msg}");

        let page = resp.text().await.unwrap();
        for text in expected {
            assert!(page.contains(text), "{msg}: missing {text:?}");
        }
        for text in absent {
            assert!(!page.contains(text), "{msg}: unexpected {text:?}");
        }
    }
}

#[tokio::test]
async fn rejected_submit_preserves_the_entered_values() {
    let app = spawn_app().await;

    let resp = app
        .post_contact(&json!({"name": "Ann", "email": "abco", "message": "hi"}))
        .await;

    let page = resp.text().await.unwrap();
    assert!(page.contains(r#"value="Ann""#));
    assert!(page.contains(r#"value="abco""#));
    assert!(page.contains(">hi</textarea>"));
}

#[tokio::test]
async fn valid_draft_is_forwarded_to_the_relay_exactly_once() {
    let app = spawn_app().await;

    // the relay must receive the configured identifiers plus the draft fields
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_dev",
            "template_id": "template_dev",
            "template_params": {
                "name": "Ann",
                "email": "a@b.co",
                "message": "hi",
            },
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let resp = app
        .post_contact(&json!({"name": "Ann", "email": "a@b.co", "message": "hi"}))
        .await;

    assert_is_redirect_to(&resp, "/#contact");
}

#[tokio::test]
async fn successful_send_shows_a_toast_once_and_resets_the_form() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let resp = app
        .post_contact(&json!({"name": "Ann", "email": "a@b.co", "message": "hi"}))
        .await;
    assert_is_redirect_to(&resp, "/#contact");

    // following the redirect renders the toast and a fresh, empty form
    let page = app.get_page().await;
    assert!(page.contains("Message sent successfully"));
    assert!(page.contains(r#"value="""#));
    assert!(!page.contains(r#"value="Ann""#));

    // the notification is transient: gone on the next render
    let page = app.get_page().await;
    assert!(!page.contains("Message sent successfully"));
}

#[tokio::test]
async fn relay_failure_shows_a_failure_toast_once() {
    let app = spawn_app().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let resp = app
        .post_contact(&json!({"name": "Ann", "email": "a@b.co", "message": "hi"}))
        .await;
    assert_is_redirect_to(&resp, "/#contact");

    let page = app.get_page().await;
    assert!(page.contains("Failed to send message. Please try again"));

    let page = app.get_page().await;
    assert!(!page.contains("Failed to send message. Please try again"));
}

#[tokio::test]
async fn relay_timeout_is_reported_as_a_failure() {
    let app = spawn_app().await;

    // spawn_app configures a 500ms relay timeout; stall well past it
    let slow = ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3));
    Mock::given(method("POST"))
        .respond_with(slow)
        .expect(1)
        .mount(&app.relay_server)
        .await;

    let resp = app
        .post_contact(&json!({"name": "Ann", "email": "a@b.co", "message": "hi"}))
        .await;
    assert_is_redirect_to(&resp, "/#contact");

    let page = app.get_page().await;
    assert!(page.contains("Failed to send message. Please try again"));
}
