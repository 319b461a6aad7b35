use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_backend_shape_and_drops_password() {
    let body = r#"{
        "id": 7,
        "is_admin": true,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "password": "$argon2id$v=19$...",
        "created_at": "2024-05-01T09:30:00"
    }"#;
    let user = parse_user_body(body).unwrap().unwrap();
    assert_eq!(user.id, Some(7));
    assert!(user.admin());
    assert_eq!(user.display_name(), "Ada Lovelace");
    assert_eq!(user.created_at.as_deref(), Some("2024-05-01T09:30:00"));

    let reencoded = serde_json::to_string(&user).unwrap();
    assert!(!reencoded.contains("password"));
}

#[test]
fn user_tolerates_null_columns() {
    let body = r#"{"id": null, "is_admin": null, "first_name": "A", "last_name": "B", "email": "a@b.com", "created_at": null}"#;
    let user = parse_user_body(body).unwrap().unwrap();
    assert_eq!(user.id, None);
    assert!(!user.admin());
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User { email: "x@y.z".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "x@y.z");
}

#[test]
fn user_body_falsy_values_mean_no_user() {
    for body in ["", "   ", "null", "false", "\"\""] {
        assert_eq!(parse_user_body(body), Ok(None), "body {body:?}");
    }
}

#[test]
fn user_body_rejects_non_objects() {
    assert!(matches!(parse_user_body("[1, 2]"), Err(ApiError::Decode(_))));
    assert!(matches!(parse_user_body("{not json"), Err(ApiError::Decode(_))));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_snake_case() {
    let req = RegisterRequest {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        password: "p".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"first_name":"A","last_name":"B","email":"a@b.com","password":"p"}"#
    );
}

// =============================================================
// Token bodies
// =============================================================

#[test]
fn token_body_accepts_object() {
    assert_eq!(parse_token_body(r#"{"token":"xyz","expires":null}"#), Ok("xyz".to_owned()));
}

#[test]
fn token_body_accepts_json_string_and_bare_text() {
    assert_eq!(parse_token_body(r#""xyz""#), Ok("xyz".to_owned()));
    assert_eq!(parse_token_body("eyJhbGciOi.payload.sig\n"), Ok("eyJhbGciOi.payload.sig".to_owned()));
}

#[test]
fn token_body_missing_or_empty_token_errors() {
    assert_eq!(parse_token_body(""), Err(ApiError::MissingToken));
    assert_eq!(parse_token_body(r#"{"ok":true}"#), Err(ApiError::MissingToken));
    assert_eq!(parse_token_body(r#"{"token":""}"#), Err(ApiError::MissingToken));
}

#[test]
fn token_body_wrong_type_is_decode_error() {
    assert!(matches!(parse_token_body(r#"{"token":42}"#), Err(ApiError::Decode(_))));
    assert!(matches!(parse_token_body("42"), Err(ApiError::Decode(_))));
}
