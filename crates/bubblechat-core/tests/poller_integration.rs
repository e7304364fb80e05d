//! Poller and sender integration tests
//!
//! These tests run the real HTTP client against wiremock servers that stand in
//! for the chat server's `/messages` and `/send` endpoints.

use std::time::Duration;

use bubblechat_core::{ChatClient, ChatError, ChatMessage, ClientConfig, MessageSender, Poller};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        server_url: server.uri(),
        poll_interval: Duration::from_millis(20),
        request_timeout: Duration::from_millis(500),
    }
}

fn client_for(server: &MockServer) -> ChatClient {
    ChatClient::new(config_for(server)).expect("valid config")
}

fn list(items: &[(&str, &str)]) -> serde_json::Value {
    json!(items
        .iter()
        .map(|(s, m)| json!({"sender": s, "message": m}))
        .collect::<Vec<_>>())
}

/// Serve `body` for the next `times` GET /messages requests
async fn serve_messages(server: &MockServer, body: serde_json::Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(times)
        .mount(server)
        .await;
}

// ============================================================================
// poll_once
// ============================================================================

#[tokio::test]
async fn test_first_poll_emits_single_message() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "hi")]), 1).await;

    let mut poller = Poller::new(client_for(&server));
    let new = poller.poll_once().await;

    assert_eq!(new, vec![ChatMessage::new("A", "hi")]);
    assert_eq!(poller.cache().len(), 1);
}

#[tokio::test]
async fn test_unchanged_list_emits_nothing() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "one"), ("B", "two")]), 2).await;

    let mut poller = Poller::new(client_for(&server));
    assert_eq!(poller.poll_once().await.len(), 2);

    let second = poller.poll_once().await;
    assert!(second.is_empty());
    assert_eq!(poller.cache().len(), 2);
}

#[tokio::test]
async fn test_growing_list_emits_only_suffix() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "one")]), 1).await;
    serve_messages(&server, list(&[("A", "one"), ("B", "two"), ("A", "three")]), 1).await;

    let mut poller = Poller::new(client_for(&server));
    poller.poll_once().await;
    let new = poller.poll_once().await;

    assert_eq!(
        new,
        vec![ChatMessage::new("B", "two"), ChatMessage::new("A", "three")]
    );
    assert_eq!(poller.cache().len(), 3);
}

#[tokio::test]
async fn test_non_200_is_no_update() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "one")]), 1).await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_json(list(&[("X", "bogus"), ("Y", "bogus")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    serve_messages(&server, list(&[("A", "one"), ("B", "two")]), 1).await;

    let mut poller = Poller::new(client_for(&server));
    assert_eq!(poller.poll_once().await.len(), 1);

    // 500 carries a longer list but must be ignored entirely
    assert!(poller.poll_once().await.is_empty());
    assert_eq!(poller.cache().messages(), &[ChatMessage::new("A", "one")]);

    assert_eq!(poller.poll_once().await, vec![ChatMessage::new("B", "two")]);
}

#[tokio::test]
async fn test_fetch_reports_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_messages().await;
    assert!(matches!(result, Err(ChatError::UnexpectedStatus(404))));
}

#[tokio::test]
async fn test_malformed_json_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    serve_messages(&server, list(&[("A", "hi")]), 1).await;

    let mut poller = Poller::new(client_for(&server));
    assert!(poller.poll_once().await.is_empty());
    assert!(poller.cache().is_empty());

    // Next poll proceeds normally
    assert_eq!(poller.poll_once().await.len(), 1);
}

#[tokio::test]
async fn test_null_sender_does_not_block_later_messages() {
    let server = MockServer::start().await;
    serve_messages(
        &server,
        json!([
            {"sender": null, "message": "legacy"},
            {"sender": "A", "message": "hi"}
        ]),
        1,
    )
    .await;
    serve_messages(
        &server,
        json!([
            {"sender": null, "message": "legacy"},
            {"sender": "A", "message": "hi"},
            {"sender": "B", "message": "after"}
        ]),
        1,
    )
    .await;

    let mut poller = Poller::new(client_for(&server));

    assert_eq!(
        poller.poll_once().await,
        vec![ChatMessage::new("Unknown", "legacy"), ChatMessage::new("A", "hi")]
    );
    assert_eq!(poller.cache().len(), 2);

    assert_eq!(poller.poll_once().await, vec![ChatMessage::new("B", "after")]);
    assert_eq!(poller.cache().len(), 3);
}

#[tokio::test]
async fn test_timeout_is_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list(&[("A", "late")]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout = Duration::from_millis(100);
    let mut poller = Poller::new(ChatClient::new(config).unwrap());

    assert!(poller.poll_once().await.is_empty());
    assert!(poller.cache().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_swallowed() {
    // Nothing listens on the discard port
    let client = ChatClient::new(ClientConfig {
        server_url: "http://127.0.0.1:9".to_string(),
        poll_interval: Duration::from_millis(20),
        request_timeout: Duration::from_millis(300),
    })
    .unwrap();

    let mut poller = Poller::new(client);
    assert!(poller.poll_once().await.is_empty());
    assert!(poller.cache().is_empty());
}

// ============================================================================
// Background loop
// ============================================================================

#[tokio::test]
async fn test_spawned_poller_delivers_in_order() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "1")]), 1).await;
    serve_messages(&server, list(&[("A", "1"), ("B", "2"), ("C", "3")]), 1000).await;

    let (handle, mut rx) = Poller::new(client_for(&server)).spawn();

    let mut received = Vec::new();
    while received.len() < 3 {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("message within timeout")
            .expect("channel open");
        received.push(msg);
    }

    assert_eq!(
        received,
        vec![
            ChatMessage::new("A", "1"),
            ChatMessage::new("B", "2"),
            ChatMessage::new("C", "3"),
        ]
    );

    // Later polls return the same list, so nothing more arrives
    let extra = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
    assert!(extra.is_err(), "no duplicate deliveries expected");

    handle.stop().await;
}

#[tokio::test]
async fn test_stop_interrupts_long_sleep() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "hi")]), 1000).await;

    let mut config = config_for(&server);
    config.poll_interval = Duration::from_secs(3600);
    let (handle, mut rx) = Poller::new(ChatClient::new(config).unwrap()).spawn();

    // Wait for the first poll so the loop is parked in its sleep
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("first poll")
        .expect("channel open");

    tokio::time::timeout(Duration::from_secs(2), handle.stop())
        .await
        .expect("stop should not wait out the poll interval");
}

#[tokio::test]
async fn test_stop_returns_after_loop_exits() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[("A", "hi")]), 1000).await;

    let (handle, mut rx) = Poller::new(client_for(&server)).spawn();
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("first poll")
        .expect("channel open");

    handle.stop().await;

    // The loop owned the only sender, so the channel is already closed
    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::mpsc::error::TryRecvError::Disconnected)
    ));
}

#[tokio::test]
async fn test_dropping_receiver_ends_loop() {
    let server = MockServer::start().await;
    serve_messages(&server, list(&[]), 1000).await;

    let (handle, rx) = Poller::new(client_for(&server)).spawn();
    drop(rx);

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !handle.is_finished() {
        assert!(tokio::time::Instant::now() < deadline, "poller did not exit");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

// ============================================================================
// Sender
// ============================================================================

#[tokio::test]
async fn test_submit_posts_trimmed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(body_json(json!({"sender": "alice", "message": "hello"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let sender = MessageSender::new(client_for(&server), "alice");
    let task = sender.submit("  hello  ").expect("non-empty message");
    task.await.unwrap();
}

#[tokio::test]
async fn test_blank_submit_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sender = MessageSender::new(client_for(&server), "alice");
    assert!(matches!(sender.submit("   "), Err(ChatError::EmptyMessage)));
}

#[tokio::test]
async fn test_send_failure_stays_in_background() {
    let client = ChatClient::new(ClientConfig {
        server_url: "http://127.0.0.1:9".to_string(),
        poll_interval: Duration::from_millis(20),
        request_timeout: Duration::from_millis(300),
    })
    .unwrap();

    let sender = MessageSender::new(client, "alice");
    let task = sender.submit("into the void").expect("dispatch succeeds");

    // The task logs the error and finishes without panicking
    task.await.expect("send task should not panic");
}

#[tokio::test]
async fn test_send_error_status_is_reported_by_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.send_message(&ChatMessage::new("a", "b")).await;
    assert!(matches!(result, Err(ChatError::UnexpectedStatus(503))));

    // Through the sender the same failure is swallowed
    let task = MessageSender::new(client, "a").submit("b").unwrap();
    task.await.expect("send task should not panic");
}
