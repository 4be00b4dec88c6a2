//! Protocol Tests
//!
//! Tests verify:
//! - Method to operation resolution under both verb mappings
//! - Key derivation from paths
//! - Error to response mapping
//! - JSON envelope shape

use axum::http::{Method, StatusCode};
use webkv::protocol::{
    key_from_path, resolve_operation, Command, Envelope, Operation, Response, Status,
};
use webkv::{StoreError, VerbMapping};

// =============================================================================
// Verb Resolution Tests
// =============================================================================

#[test]
fn test_post_creates_mapping() {
    let mapping = VerbMapping::PostCreates;

    assert_eq!(resolve_operation(&Method::POST, mapping).unwrap(), Operation::Create);
    assert_eq!(resolve_operation(&Method::PUT, mapping).unwrap(), Operation::Update);
    assert_eq!(resolve_operation(&Method::GET, mapping).unwrap(), Operation::Read);
    assert_eq!(resolve_operation(&Method::DELETE, mapping).unwrap(), Operation::Delete);
}

#[test]
fn test_put_creates_mapping() {
    let mapping = VerbMapping::PutCreates;

    assert_eq!(resolve_operation(&Method::PUT, mapping).unwrap(), Operation::Create);
    assert_eq!(resolve_operation(&Method::POST, mapping).unwrap(), Operation::Update);
    assert_eq!(resolve_operation(&Method::GET, mapping).unwrap(), Operation::Read);
    assert_eq!(resolve_operation(&Method::DELETE, mapping).unwrap(), Operation::Delete);
}

#[test]
fn test_unsupported_methods() {
    for method in [Method::PATCH, Method::HEAD, Method::OPTIONS, Method::TRACE] {
        let result = resolve_operation(&method, VerbMapping::default());
        assert!(matches!(result, Err(StoreError::BadMethod)), "{} should be rejected", method);
    }
}

#[test]
fn test_operation_properties() {
    assert!(Operation::Create.is_mutating());
    assert!(Operation::Update.is_mutating());
    assert!(Operation::Delete.is_mutating());
    assert!(!Operation::Read.is_mutating());

    assert!(Operation::Create.takes_body());
    assert!(Operation::Update.takes_body());
    assert!(!Operation::Read.takes_body());
    assert!(!Operation::Delete.takes_body());
}

#[test]
fn test_command_accessors() {
    let command = Command::Update {
        key: "a/b".into(),
        value: "v".into(),
    };
    assert_eq!(command.operation(), Operation::Update);
    assert_eq!(command.key(), "a/b");
}

#[test]
fn test_verb_mapping_parse() {
    assert_eq!("post-creates".parse::<VerbMapping>().unwrap(), VerbMapping::PostCreates);
    assert_eq!("PUT-CREATES".parse::<VerbMapping>().unwrap(), VerbMapping::PutCreates);
    assert!(matches!("rest".parse::<VerbMapping>(), Err(StoreError::Config(_))));
    assert_eq!(VerbMapping::PutCreates.to_string(), "put-creates");
}

// =============================================================================
// Key Derivation Tests
// =============================================================================

#[test]
fn test_key_from_path() {
    assert_eq!(key_from_path("/foo"), "foo");
    assert_eq!(key_from_path("/foo/bar"), "foo/bar");
    assert_eq!(key_from_path("/"), "");
    assert_eq!(key_from_path("//double"), "/double");
    assert_eq!(key_from_path("/trailing/"), "trailing/");
    assert_eq!(key_from_path("/with%20space"), "with space");
    assert_eq!(key_from_path("/a%2Fb"), "a/b");
    assert_eq!(key_from_path("/%2Fleading"), "/leading");
    assert_eq!(key_from_path("/caf%C3%A9"), "café");
    assert_eq!(key_from_path("/bad%FF"), "bad\u{FFFD}");
    assert_eq!(key_from_path("/100%"), "100%");
}

// =============================================================================
// Response Tests
// =============================================================================

#[test]
fn test_error_statuses() {
    assert_eq!(Response::from(StoreError::Conflict).status, Status::BadRequest);
    assert_eq!(Response::from(StoreError::BadMethod).status, Status::BadRequest);
    assert_eq!(Response::from(StoreError::NotFound).status, Status::NotFound);
    assert_eq!(
        Response::from(StoreError::Body("connection reset".into())).status,
        Status::InternalError
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(Response::from(StoreError::Conflict).message, "already exists");
    assert_eq!(Response::from(StoreError::NotFound).message, "not found");
    assert_eq!(
        Response::from(StoreError::BadMethod).message,
        "Only PUT, GET, DELETE and POST methods are supported."
    );
}

#[test]
fn test_status_codes() {
    assert_eq!(Status::Ok.code(), StatusCode::OK);
    assert_eq!(Status::BadRequest.code(), StatusCode::BAD_REQUEST);
    assert_eq!(Status::NotFound.code(), StatusCode::NOT_FOUND);
    assert_eq!(Status::InternalError.code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_success_only_for_ok() {
    assert!(Response::ok("v").envelope().success);
    assert!(!Response::failure(Status::BadRequest, "x").envelope().success);
    assert!(!Response::failure(Status::NotFound, "x").envelope().success);
}

#[test]
fn test_envelope_serializes_success_as_string() {
    let json = serde_json::to_string(&Response::ok("hello").envelope()).unwrap();
    assert_eq!(json, r#"{"success":"true","message":"hello"}"#);

    let json = serde_json::to_string(&Response::from(StoreError::NotFound).envelope()).unwrap();
    assert_eq!(json, r#"{"success":"false","message":"not found"}"#);
}

#[test]
fn test_envelope_deserialize() {
    let envelope: Envelope =
        serde_json::from_str(r#"{"success":"false","message":"already exists"}"#).unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message, "already exists");

    assert!(serde_json::from_str::<Envelope>(r#"{"success":true,"message":""}"#).is_err());
}
