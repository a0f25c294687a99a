//! End-to-end tests of the public surface against a mock server.

use std::time::Duration;

use mockito::{Matcher, Server};
use netbird::models::{GroupCreate, TokenCreate, UserRole, UserStatus};
use netbird::{Client, ClientConfig, ErrorKind, RetryPolicy};

fn client_for(server: &mockito::ServerGuard) -> Client {
    let config = ClientConfig::builder(server.host_with_port(), "test-token")
        .use_ssl(false)
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn fast_client_for(server: &mockito::ServerGuard, max_attempts: u32) -> Client {
    let config = ClientConfig::builder(server.host_with_port(), "test-token")
        .use_ssl(false)
        .build()
        .unwrap();
    let retry = RetryPolicy {
        max_attempts,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(2),
        jitter_pct: 0,
    };
    Client::with_retry_policy(config, retry).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_get_current_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users/current")
        .match_header("Authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "user-1",
                "email": "admin@example.com",
                "name": "Admin",
                "role": "admin",
                "status": "active",
                "is_current": true
            }"#,
        )
        .create_async()
        .await;

    let user = client_for(&server).users().get_current().await.unwrap();

    mock.assert_async().await;
    assert_eq!(user.id, "user-1");
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.is_current, Some(true));
}

#[tokio::test]
async fn test_list_peers_bare_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/peers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[
                {"id": "p1", "name": "web-01", "ip": "10.0.0.1", "connected": true},
                {"id": "p2", "name": "web-02", "ip": "10.0.0.2", "connected": false}
            ]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let peers = client_for(&server).peers().list().collect_all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(peers.len(), 2);
    assert_eq!(peers[0].name, "web-01");
    assert!(!peers[1].connected);
}

#[tokio::test]
async fn test_audit_events_paginated_envelope() {
    let mut server = Server::new_async().await;
    let p1 = server
        .mock("GET", "/api/events/audit")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("page_size".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data": [
                {"timestamp": "2024-01-01T00:00:00Z", "activity": "Peer added"},
                {"timestamp": "2024-01-01T00:01:00Z", "activity": "Group created"}
            ], "meta": {"has_more": true}}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let p2 = server
        .mock("GET", "/api/events/audit")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data": [
                {"timestamp": "2024-01-01T00:02:00Z", "activity": "User invited"}
            ], "meta": {"has_more": false}}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let mut iter = client_for(&server).events().audit().with_page_size(2);
    let mut activities = Vec::new();
    while let Some(event) = iter.try_next().await.unwrap() {
        activities.push(event.activity);
    }

    p1.assert_async().await;
    p2.assert_async().await;
    assert_eq!(activities, vec!["Peer added", "Group created", "User invited"]);
    assert!(iter.try_next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_group_posts_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/groups")
        .match_header("content-type", Matcher::Regex("application/json".into()))
        .match_body(Matcher::JsonString(
            r#"{"name": "Developers", "peers": ["peer-1", "peer-2"]}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"id": "group-9", "name": "Developers", "peers_count": 2}"#)
        .create_async()
        .await;

    let group = client_for(&server)
        .groups()
        .create(&GroupCreate {
            name: "Developers".to_string(),
            peers: Some(vec!["peer-1".to_string(), "peer-2".to_string()]),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(group.id, "group-9");
    assert_eq!(group.peers_count, 2);
}

#[tokio::test]
async fn test_token_create_returns_plain_value_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/user-1/tokens")
        .with_status(200)
        .with_body(
            r#"{"plain_token": "nbp_secret",
                "personal_access_token": {"id": "t1", "name": "ci", "expiration_date": null}}"#,
        )
        .create_async()
        .await;

    let created = client_for(&server)
        .tokens()
        .create(
            "user-1",
            &TokenCreate {
                name: "ci".to_string(),
                expires_in: 30,
            },
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.plain_token, "nbp_secret");
    assert_eq!(created.personal_access_token.id, "t1");
}

#[tokio::test]
async fn test_delete_peer_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/peers/peer-1")
        .with_status(200)
        .create_async()
        .await;

    client_for(&server).peers().delete("peer-1").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authentication_error_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/groups/g1")
        .with_status(401)
        .with_body(r#"{"message": "token expired"}"#)
        .expect(1)
        .create_async()
        .await;

    let err = fast_client_for(&server, 3)
        .groups()
        .get("g1")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(err.status, Some(401));
    assert_eq!(err.attempts, 1);
    assert_eq!(err.message, "token expired");
}

#[test_log::test(tokio::test)]
async fn test_server_errors_retried_then_surface_attempts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/routes/r1")
        .with_status(502)
        .with_body(r#"{"message": "bad gateway"}"#)
        .expect(3)
        .create_async()
        .await;

    let err = fast_client_for(&server, 3)
        .routes()
        .get("r1")
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.attempts, 3);
    assert!(err.to_string().contains("after 3 attempts"));
}

#[tokio::test]
async fn test_recovers_after_transient_error() {
    let mut server = Server::new_async().await;
    let failing = server
        .mock("GET", "/api/dns/settings")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let succeeding = server
        .mock("GET", "/api/dns/settings")
        .with_status(200)
        .with_body(r#"{"disabled_management_groups": ["g1"]}"#)
        .expect(1)
        .create_async()
        .await;

    let settings = fast_client_for(&server, 3)
        .dns()
        .get_settings()
        .await
        .unwrap();

    failing.assert_async().await;
    succeeding.assert_async().await;
    assert_eq!(settings.disabled_management_groups, vec!["g1"]);
}

#[tokio::test]
async fn test_accounts_list_single_entry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/accounts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"[{"id": "acc-1", "domain": "example.com", "settings": null}]"#)
        .expect(1)
        .create_async()
        .await;

    let accounts = client_for(&server)
        .accounts()
        .list()
        .collect_all()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "acc-1");
}

#[tokio::test]
async fn test_nested_network_resource_paths() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/networks/net-1/resources/res-1")
        .with_status(200)
        .with_body(r#"{"id": "res-1", "name": "db", "address": "10.0.0.5", "enabled": true}"#)
        .create_async()
        .await;

    let resource = client_for(&server)
        .networks()
        .get_resource("net-1", "res-1")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resource.address, "10.0.0.5");
    assert!(resource.enabled);
}
