use futures::executor::block_on;

use super::*;
use crate::net::api::ApiClient;
use crate::net::test_support::RecordingTransport;
use crate::util::token_store::MemoryTokenStore;

fn login_form(email: &str, password: &str) -> AuthForm {
    AuthForm { email: email.to_owned(), password: password.to_owned(), ..AuthForm::default() }
}

fn register_form() -> AuthForm {
    AuthForm {
        mode: FormMode::Register,
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        email: "a@b.com".to_owned(),
        password: "p".to_owned(),
    }
}

// =============================================================
// FormMode
// =============================================================

#[test]
fn form_mode_default_is_login() {
    assert_eq!(FormMode::default(), FormMode::Login);
}

#[test]
fn form_mode_toggles_both_ways() {
    assert_eq!(FormMode::Login.toggled(), FormMode::Register);
    assert_eq!(FormMode::Register.toggled(), FormMode::Login);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn login_request_trims_email_keeps_password() {
    let req = login_form("  a@b.com ", " secret ").login_request().unwrap();
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, " secret ");
}

#[test]
fn login_request_requires_both_fields() {
    assert_eq!(
        login_form("", "p").login_request(),
        Err(FormError::Invalid(LOGIN_REQUIRED_MESSAGE))
    );
    assert_eq!(
        login_form("a@b.com", "   ").login_request(),
        Err(FormError::Invalid(LOGIN_REQUIRED_MESSAGE))
    );
}

#[test]
fn register_request_requires_every_field() {
    let mut form = register_form();
    form.last_name = " ".to_owned();
    assert_eq!(form.register_request(), Err(FormError::Invalid(REGISTER_REQUIRED_MESSAGE)));

    let mut form = register_form();
    form.password.clear();
    assert_eq!(form.register_request(), Err(FormError::Invalid(REGISTER_REQUIRED_MESSAGE)));
}

#[test]
fn validate_checks_only_the_active_mode() {
    let form = login_form("a@b.com", "p");
    assert_eq!(form.validate(), Ok(()));

    let form = AuthForm { mode: FormMode::Register, ..form };
    assert_eq!(form.validate(), Err(FormError::Invalid(REGISTER_REQUIRED_MESSAGE)));
}

#[test]
fn fields_survive_mode_toggle() {
    let mut form = register_form();
    form.mode = form.mode.toggled();
    assert_eq!(form.first_name, "A");
    assert_eq!(form.login_request().unwrap().email, "a@b.com");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_with_empty_email_never_calls_api() {
    let transport = RecordingTransport::new();
    let session = Session::new(MemoryTokenStore::with_token("keep"), ApiClient::new("http://api.test", &transport));

    let result = block_on(login_form("", "p").submit(&session));
    assert_eq!(result, Err(FormError::Invalid(LOGIN_REQUIRED_MESSAGE)));
    assert!(transport.requests().is_empty());
    assert_eq!(session.store().get(), "keep");
}

#[test]
fn submit_login_stores_token() {
    let transport = RecordingTransport::new();
    transport
        .respond(200, r#"{"token":"xyz"}"#)
        .respond(200, r#"{"id":1,"first_name":"A","last_name":"B","email":"a@b.com"}"#);
    let session = Session::new(MemoryTokenStore::new(), ApiClient::new("http://api.test", &transport));

    let user = block_on(login_form("a@b.com", "p").submit(&session)).unwrap();
    assert_eq!(session.store().get(), "xyz");
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn submit_register_sends_snake_case_body() {
    let transport = RecordingTransport::new();
    transport
        .respond(200, r#"{"token":"t"}"#)
        .respond(200, r#"{"id":2,"first_name":"A","last_name":"B","email":"a@b.com"}"#);
    let session = Session::new(MemoryTokenStore::new(), ApiClient::new("http://api.test", &transport));

    let user = block_on(register_form().submit(&session)).unwrap();
    assert_eq!(user.id, Some(2));
    assert_eq!(session.store().get(), "t");

    let sent = transport.requests();
    assert_eq!(sent[0].url, "http://api.test/register");
    assert_eq!(
        sent[0].body.as_deref(),
        Some(r#"{"first_name":"A","last_name":"B","email":"a@b.com","password":"p"}"#)
    );
}

#[test]
fn submit_surfaces_api_error_message() {
    let transport = RecordingTransport::new();
    transport.respond(401, "");
    let session = Session::new(MemoryTokenStore::new(), ApiClient::new("http://api.test", &transport));

    let err = block_on(login_form("a@b.com", "bad").submit(&session)).unwrap_err();
    assert_eq!(err, FormError::Api(ApiError::Unauthorized));
    assert_eq!(err.user_message(), "Invalid email or password.");
}

#[test]
fn submit_register_without_resolved_user_stays_logged_out() {
    let transport = RecordingTransport::new();
    transport.respond(200, r#"{"token":"t"}"#).respond(200, "null");
    let session = Session::new(MemoryTokenStore::new(), ApiClient::new("http://api.test", &transport));

    let err = block_on(register_form().submit(&session)).unwrap_err();
    assert_eq!(err, FormError::Api(ApiError::NoUser));
    assert_eq!(session.store().get(), "");
}
