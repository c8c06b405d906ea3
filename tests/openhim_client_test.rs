//! Integration tests for the OpenHIM client and startup registration
//!
//! Each test runs against a local mockito server standing in for the core API.

use mediators::adapters::openhim::OpenHimClient;
use mediators::catalog;
use mediators::config::{secret_string, OpenHimConfig};
use mediators::core::registration::initialize;
use mediators::domain::{MediatorError, OpenHimError};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};

const USERNAME: &str = "admin";

fn client_for(server: &ServerGuard) -> OpenHimClient {
    let config = OpenHimConfig {
        api_url: server.url(),
        username: USERNAME.to_string(),
        password: secret_string("openhim-password".to_string()),
        trust_self_signed: true,
        timeout_seconds: Some(5),
    };
    OpenHimClient::new(&config).unwrap()
}

async fn mock_authenticate(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/authenticate/admin")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"salt":"5ab3c1d2e4f6","ts":"2024-03-01T10:00:00.000Z"}"#)
        .expect_at_least(1)
        .create_async()
        .await
}

#[tokio::test]
async fn test_authenticate_returns_challenge() {
    let mut server = Server::new_async().await;
    let auth = mock_authenticate(&mut server).await;

    let challenge = client_for(&server).authenticate().await.unwrap();

    assert_eq!(challenge.salt, "5ab3c1d2e4f6");
    assert_eq!(challenge.ts.as_deref(), Some("2024-03-01T10:00:00.000Z"));
    auth.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_unknown_user() {
    let mut server = Server::new_async().await;
    let _auth = server
        .mock("GET", "/authenticate/admin")
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server).authenticate().await.unwrap_err();

    assert!(matches!(
        err,
        MediatorError::OpenHim(OpenHimError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn test_get_token_builds_headers() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;

    let headers = client_for(&server).get_token().await.unwrap();

    assert_eq!(headers.username, USERNAME);
    assert_eq!(headers.salt, "5ab3c1d2e4f6");
    assert_eq!(headers.token.len(), 128);
    assert!(headers.token.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(headers.ts.ends_with('Z'));
}

#[tokio::test]
async fn test_register_mediator_sends_auth_headers() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediator = catalog::mediators().unwrap().remove(0);

    let register = server
        .mock("POST", "/mediators")
        .match_header("auth-username", USERNAME)
        .match_header("auth-salt", "5ab3c1d2e4f6")
        .match_header("auth-token", Matcher::Regex("^[0-9a-f]{128}$".to_string()))
        .match_header("auth-ts", Matcher::Any)
        .match_body(Matcher::PartialJson(json!({ "urn": mediator.urn })))
        .with_status(201)
        .create_async()
        .await;

    client_for(&server)
        .register_mediator(&mediator)
        .await
        .unwrap();

    register.assert_async().await;
}

#[tokio::test]
async fn test_register_mediator_requires_created() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediator = catalog::mediators().unwrap().remove(0);

    let _register = server
        .mock("POST", "/mediators")
        .with_status(200)
        .with_body("already registered")
        .create_async()
        .await;

    let err = client_for(&server)
        .register_mediator(&mediator)
        .await
        .unwrap_err();

    match err {
        MediatorError::OpenHim(OpenHimError::RegistrationFailed { urn, status, body }) => {
            assert_eq!(urn, mediator.urn);
            assert_eq!(status, 200);
            assert_eq!(body, "already registered");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_install_channel_posts_default_channel() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediator = catalog::mediators().unwrap().remove(0);
    let channel = mediator.default_channel().unwrap().clone();

    let install = server
        .mock("POST", "/channels")
        .match_header("auth-username", USERNAME)
        .match_body(Matcher::PartialJson(json!({
            "name": channel.name,
            "urlPattern": channel.url_pattern,
        })))
        .with_status(201)
        .with_body("Channel created")
        .create_async()
        .await;

    let response = client_for(&server).install_channel(&mediator).await.unwrap();

    assert_eq!(response, "Channel created");
    install.assert_async().await;
}

#[tokio::test]
async fn test_install_channel_failure_status() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediator = catalog::mediators().unwrap().remove(0);

    let _install = server
        .mock("POST", "/channels")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client_for(&server)
        .install_channel(&mediator)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MediatorError::OpenHim(OpenHimError::ChannelInstallFailed { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_create_client_uses_fresh_salt_each_time() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;

    // Echo the request body so the submitted credentials can be inspected
    let clients = server
        .mock("POST", "/clients")
        .match_body(Matcher::PartialJson(json!({
            "clientID": "emr-a",
            "name": "emr-a",
            "roles": ["*"],
            "passwordAlgorithm": "sha512",
        })))
        .with_status(201)
        .with_body_from_request(|request| request.body().cloned().unwrap_or_default())
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let first: Value =
        serde_json::from_str(&client.create_client("emr-a", "secret").await.unwrap()).unwrap();
    let second: Value =
        serde_json::from_str(&client.create_client("emr-a", "secret").await.unwrap()).unwrap();

    assert_eq!(first["passwordSalt"].as_str().unwrap().len(), 32);
    assert_eq!(first["passwordHash"].as_str().unwrap().len(), 128);
    assert_ne!(first["passwordSalt"], second["passwordSalt"]);
    assert_ne!(first["passwordHash"], second["passwordHash"]);
    clients.assert_async().await;
}

#[tokio::test]
async fn test_create_client_returns_body_on_rejection() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;

    let _clients = server
        .mock("POST", "/clients")
        .with_status(409)
        .with_body("duplicate clientID")
        .create_async()
        .await;

    let response = client_for(&server)
        .create_client("emr-a", "secret")
        .await
        .unwrap();

    assert_eq!(response, "duplicate clientID");
}

#[tokio::test]
async fn test_initialize_registers_whole_catalog() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediators = catalog::mediators().unwrap();

    let register = server
        .mock("POST", "/mediators")
        .with_status(201)
        .expect(mediators.len())
        .create_async()
        .await;
    let install = server
        .mock("POST", "/channels")
        .with_status(201)
        .with_body("Channel created")
        .expect(mediators.len())
        .create_async()
        .await;

    let report = initialize(&client_for(&server), &mediators).await;

    assert!(report.authenticated());
    assert!(report.is_complete());
    assert_eq!(report.outcomes.len(), 5);
    register.assert_async().await;
    install.assert_async().await;
}

#[tokio::test]
async fn test_initialize_isolates_failing_mediator() {
    let mut server = Server::new_async().await;
    let _auth = mock_authenticate(&mut server).await;
    let mediators = catalog::mediators().unwrap();
    let failing = "urn:mediator:mpi-mediator";

    let mut mocks = Vec::new();
    for mediator in &mediators {
        let status = if mediator.urn == failing { 400 } else { 201 };
        mocks.push(
            server
                .mock("POST", "/mediators")
                .match_body(Matcher::PartialJson(json!({ "urn": mediator.urn })))
                .with_status(status)
                .create_async()
                .await,
        );
    }
    let _install = server
        .mock("POST", "/channels")
        .with_status(201)
        .create_async()
        .await;

    let report = initialize(&client_for(&server), &mediators).await;

    assert!(report.authenticated());
    assert_eq!(report.failures(), 1);
    assert!(!report.is_complete());

    let outcome = report.outcomes.iter().find(|o| o.urn == failing).unwrap();
    assert!(outcome.registration.is_err());
    assert!(outcome.channel.is_ok());
    assert!(report
        .outcomes
        .iter()
        .filter(|o| o.urn != failing)
        .all(|o| o.is_success()));
}

#[tokio::test]
async fn test_initialize_continues_after_authentication_failure() {
    let mut server = Server::new_async().await;
    let _auth = server
        .mock("GET", "/authenticate/admin")
        .with_status(404)
        .expect_at_least(1)
        .create_async()
        .await;
    let mediators = catalog::mediators().unwrap();

    let report = initialize(&client_for(&server), &mediators).await;

    assert!(!report.authenticated());
    assert_eq!(report.outcomes.len(), mediators.len());
    assert_eq!(report.failures(), mediators.len());
}
