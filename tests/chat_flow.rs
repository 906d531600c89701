//! End-to-end controller flow: gate, message exchange, failure recovery.

use std::time::Duration;

use charla_tui::actions::Action;
use charla_tui::app::{App, FALLBACK_REPLY};
use charla_tui::state::{MessageRole, View};
use charla_tui::webhook::WebhookClient;

const PHONE: &str = "5491112345678";

fn app_for(url: &str) -> App {
    App::new(
        WebhookClient::new(format!("{url}/webhook")),
        tokio::runtime::Handle::current(),
    )
}

fn type_line(app: &mut App, text: &str) {
    for c in text.chars() {
        app.dispatch(Action::Char(c));
    }
}

fn pass_gate(app: &mut App) {
    type_line(app, PHONE);
    app.dispatch(Action::Submit);
    assert_eq!(app.state.view, View::Chat);
}

/// Drain replies until the in-flight request settles.
async fn wait_for_reply(app: &mut App) {
    for _ in 0..200 {
        app.poll_replies();
        if !app.state.loading {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("webhook reply never arrived");
}

fn transcript(app: &App) -> Vec<(MessageRole, String)> {
    app.state
        .chat
        .messages
        .iter()
        .map(|m| (m.role, m.content.clone()))
        .collect()
}

#[tokio::test]
async fn gate_rejects_bad_phones_and_stays_put() {
    let mut app = app_for("http://127.0.0.1:9");

    for candidate in ["123", "1234567890", "+12345678901", "12345abc9012", "1234567890123456"] {
        app.dispatch(Action::ClearInput);
        type_line(&mut app, candidate);
        app.dispatch(Action::Submit);

        assert_eq!(app.state.view, View::Gate, "gate passed for {candidate:?}");
        assert!(app.state.session.is_none());
        assert!(app.state.gate.error.is_some());
    }
    // The transcript never saw anything while gated.
    assert!(app.state.chat.messages.is_empty());
}

#[tokio::test]
async fn gate_accepts_valid_phone_exactly_once() {
    let mut app = app_for("http://127.0.0.1:9");

    pass_gate(&mut app);
    assert!(app.state.gate.error.is_none());
    assert_eq!(app.state.session.as_ref().unwrap().user_phone(), PHONE);
    // The chat opens with the system welcome and a cleared input.
    assert_eq!(app.state.chat.messages[0].role, MessageRole::System);
    assert!(app.state.input_buffer.is_empty());

    // The transition is terminal: submitting again does not re-run the gate.
    app.dispatch(Action::Submit);
    assert_eq!(app.state.view, View::Chat);
    assert_eq!(app.state.chat.messages.len(), 1);
}

#[tokio::test]
async fn round_trip_appends_user_then_bot() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "message": "hello",
            "user_phone": PHONE,
            "origin": "web",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"X"}"#)
        .create_async()
        .await;

    let mut app = app_for(&server.url());
    pass_gate(&mut app);

    type_line(&mut app, "hello");
    app.dispatch(Action::Submit);

    // The user's turn is on screen before the reply lands.
    let before = transcript(&app);
    assert_eq!(before.last().unwrap(), &(MessageRole::User, "hello".to_string()));
    assert!(app.state.input_buffer.is_empty());

    wait_for_reply(&mut app).await;

    let after = transcript(&app);
    let tail = &after[after.len() - 2..];
    assert_eq!(tail[0], (MessageRole::User, "hello".to_string()));
    assert_eq!(tail[1], (MessageRole::Bot, "X".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn webhook_failure_falls_back_to_apology() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/webhook")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let mut app = app_for(&server.url());
    pass_gate(&mut app);

    type_line(&mut app, "hello");
    app.dispatch(Action::Submit);
    wait_for_reply(&mut app).await;

    let after = transcript(&app);
    let tail = &after[after.len() - 2..];
    assert_eq!(tail[0], (MessageRole::User, "hello".to_string()));
    assert_eq!(tail[1], (MessageRole::Bot, FALLBACK_REPLY.to_string()));
    // Still interactive: the widget accepts further input.
    type_line(&mut app, "again");
    assert_eq!(app.state.input_buffer, "again");
}

#[tokio::test]
async fn unreachable_webhook_falls_back_to_apology() {
    let mut app = app_for("http://127.0.0.1:9");
    pass_gate(&mut app);

    type_line(&mut app, "hello");
    app.dispatch(Action::Submit);
    wait_for_reply(&mut app).await;

    let last = app.state.chat.messages.last().unwrap();
    assert_eq!(last.role, MessageRole::Bot);
    assert_eq!(last.content, FALLBACK_REPLY);
}

#[tokio::test]
async fn blank_input_is_a_silent_no_op() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .expect(0)
        .create_async()
        .await;

    let mut app = app_for(&server.url());
    pass_gate(&mut app);
    let len_before = app.state.chat.messages.len();

    type_line(&mut app, "   ");
    app.dispatch(Action::Submit);

    assert_eq!(app.state.chat.messages.len(), len_before);
    assert!(!app.state.loading);
    mock.assert_async().await;
}

#[tokio::test]
async fn one_request_in_flight_at_a_time() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response":"first"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut app = app_for(&server.url());
    pass_gate(&mut app);

    type_line(&mut app, "one");
    app.dispatch(Action::Submit);
    assert!(app.state.loading);

    // A second submit while the first is pending is a no-op and the draft
    // stays in the input bar.
    type_line(&mut app, "two");
    app.dispatch(Action::Submit);
    assert_eq!(app.state.input_buffer, "two");
    assert_eq!(
        app.state.chat.messages.last().unwrap().content,
        "one",
        "second send must not append while one is in flight"
    );

    wait_for_reply(&mut app).await;
    mock.assert_async().await;

    // Once settled, the draft can be sent normally.
    app.dispatch(Action::Submit);
    assert_eq!(
        transcript(&app).iter().filter(|(r, _)| *r == MessageRole::User).count(),
        2
    );
}

#[tokio::test]
async fn reply_without_response_field_renders_placeholder() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/webhook")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let mut app = app_for(&server.url());
    pass_gate(&mut app);

    type_line(&mut app, "hello");
    app.dispatch(Action::Submit);
    wait_for_reply(&mut app).await;

    let last = app.state.chat.messages.last().unwrap();
    assert_eq!(last.role, MessageRole::Bot);
    assert_eq!(last.content, charla_tui::app::EMPTY_REPLY);
}
