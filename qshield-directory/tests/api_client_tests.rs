use base64::{engine::general_purpose::STANDARD, Engine};
use qshield_crypto::custody;
use qshield_crypto::{generate_keypair, CryptoError, PUBLIC_KEY_SIZE};
use qshield_directory::api_client::DirectoryApiClient;
use qshield_directory::config::DirectoryConfig;
use qshield_directory::error::DirectoryError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(server: &MockServer) -> DirectoryApiClient {
    let config = DirectoryConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    };
    DirectoryApiClient::new(config)
}

// --- Public key ---

#[tokio::test]
async fn fetch_public_key_success() {
    let server = MockServer::start().await;
    let kp = generate_keypair();
    let encoded = STANDARD.encode(kp.public.as_bytes());

    Mock::given(method("GET"))
        .and(path("/qshield/public-key"))
        .and(header("api_key", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_key": encoded
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let key = client.fetch_public_key("key-123").await.unwrap();
    assert_eq!(key.as_bytes(), kp.public.as_bytes());
}

#[tokio::test]
async fn fetch_public_key_invalid_length() {
    let server = MockServer::start().await;
    let short = STANDARD.encode([1u8; 16]); // 16 bytes, not 1568

    Mock::given(method("GET"))
        .and(path("/qshield/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_key": short
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.fetch_public_key("key-123").await;
    assert!(matches!(
        result.unwrap_err(),
        DirectoryError::Crypto(CryptoError::InvalidKey {
            expected: PUBLIC_KEY_SIZE,
            actual: 16
        })
    ));
}

#[tokio::test]
async fn fetch_public_key_invalid_base64() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qshield/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "public_key": "not base64!"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.fetch_public_key("key-123").await;
    let err = result.unwrap_err();
    assert!(matches!(err, DirectoryError::Api(_)));
    assert!(err.to_string().contains("invalid public key encoding"));
}

#[tokio::test]
async fn fetch_public_key_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qshield/public-key"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Internal server error"})),
        )
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.fetch_public_key("key-123").await;
    assert!(matches!(result.unwrap_err(), DirectoryError::Api(_)));
}

#[tokio::test]
async fn fetch_public_key_unparseable_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qshield/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.fetch_public_key("key-123").await;
    assert!(matches!(
        result.unwrap_err(),
        DirectoryError::UpstreamUnavailable(_)
    ));
}

// --- Private-key envelope ---

#[tokio::test]
async fn fetch_private_key_envelope_success() {
    let server = MockServer::start().await;
    let kp = generate_keypair();
    let wire = custody::encrypt_private_key(&kp.secret, "p@ss").to_string();

    Mock::given(method("GET"))
        .and(path("/qshield/epk"))
        .and(header("api_key", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "encrypted_private_key": wire
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let envelope = client.fetch_private_key_envelope("key-123").await.unwrap();
    assert_eq!(envelope.to_string(), wire);

    let recovered = custody::decrypt_private_key(&envelope, "p@ss").unwrap();
    assert_eq!(recovered.as_bytes(), kp.secret.as_bytes());
}

#[tokio::test]
async fn fetch_private_key_envelope_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/qshield/epk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "encrypted_private_key": "only one field"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.fetch_private_key_envelope("key-123").await;
    assert!(matches!(
        result.unwrap_err(),
        DirectoryError::Crypto(CryptoError::MalformedEnvelope(_))
    ));
}

// --- Account creation ---

#[tokio::test]
async fn store_account_sends_wire_formats() {
    let server = MockServer::start().await;
    let kp = generate_keypair();
    let envelope = custody::encrypt_private_key(&kp.secret, "p@ss");

    // Exact-body matcher: the public key travels as base64, the envelope
    // in its dotted wire format
    let expected_body = serde_json::json!({
        "public_key": STANDARD.encode(kp.public.as_bytes()),
        "secret_phrase": "correct horse",
        "encrypted_private_key": envelope.to_string(),
    });

    Mock::given(method("POST"))
        .and(path("/qshield/create"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "api_key": "key-new",
            "message": "Account created successfully"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let receipt = client
        .store_account(&kp.public, &envelope, "correct horse")
        .await
        .unwrap();
    assert_eq!(receipt.api_key, "key-new");
    assert_eq!(receipt.message, "Account created successfully");
}

#[tokio::test]
async fn store_account_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qshield/create"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "Database write failed"})),
        )
        .mount(&server)
        .await;

    let kp = generate_keypair();
    let envelope = custody::encrypt_private_key(&kp.secret, "p@ss");

    let client = setup(&server).await;
    let result = client.store_account(&kp.public, &envelope, "phrase").await;
    assert!(matches!(result.unwrap_err(), DirectoryError::Api(_)));
}

// --- Account deletion ---

#[tokio::test]
async fn delete_account_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qshield/delete"))
        .and(body_json(serde_json::json!({
            "api_key": "key-123",
            "secret_phrase": "correct horse",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Account deleted"
        })))
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let message = client
        .delete_account("key-123", "correct horse")
        .await
        .unwrap();
    assert_eq!(message, "Account deleted");
}

#[tokio::test]
async fn delete_account_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/qshield/delete"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"error": "Invalid secret phrase"})),
        )
        .mount(&server)
        .await;

    let client = setup(&server).await;
    let result = client.delete_account("key-123", "wrong phrase").await;
    assert!(matches!(result.unwrap_err(), DirectoryError::Api(_)));
}
