mod common;

use mockito::Matcher;
use pc_client::prelude::*;

fn fixed_code(_method: TwoFactorMethod) -> Result<String, AppError> {
    Ok("1234".to_string())
}

#[tokio::test]
async fn quick_login_remembered_device_skips_challenge() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body(common::login_page_body())
        .create_async()
        .await;

    let identify = server
        .mock("POST", "/api/login/identifyUser")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("username".into(), "user@example.com".into()),
            Matcher::UrlEncoded("csrf".into(), common::TEST_CSRF.into()),
            Matcher::UrlEncoded("apiClient".into(), "WEB".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_REMEMBERED"))
        .create_async()
        .await;

    // password step must carry the token rotated by identifyUser
    let password = server
        .mock("POST", "/api/credential/authenticatePassword")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("passwd".into(), "hunter2".into()),
            Matcher::UrlEncoded("csrf".into(), common::ROTATED_CSRF.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("SESSION_AUTHENTICATED"))
        .create_async()
        .await;

    let challenge = server
        .mock("POST", "/api/credential/challengeSms")
        .expect(0)
        .create_async()
        .await;

    let session = client
        .quick_login(&FnPrompt(fixed_code))
        .await
        .expect("login");

    identify.assert_async().await;
    password.assert_async().await;
    challenge.assert_async().await;

    assert!(session.is_authenticated());
    assert_eq!(session.csrf, common::ROTATED_CSRF);
    assert_eq!(session.username, "user@example.com");
}

#[tokio::test]
async fn quick_login_follows_sms_challenge_path() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body(common::login_page_body())
        .create_async()
        .await;

    server
        .mock("POST", "/api/login/identifyUser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_IDENTIFIED"))
        .create_async()
        .await;

    let challenge = server
        .mock("POST", "/api/credential/challengeSms")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("challengeReason".into(), "DEVICE_AUTH".into()),
            Matcher::UrlEncoded("challengeMethod".into(), "OP".into()),
            Matcher::UrlEncoded("csrf".into(), common::ROTATED_CSRF.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_IDENTIFIED"))
        .create_async()
        .await;

    let submit = server
        .mock("POST", "/api/credential/authenticateSms")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("code".into(), "1234".into()),
            Matcher::UrlEncoded("csrf".into(), common::ROTATED_CSRF.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("DEVICE_AUTHORIZED"))
        .create_async()
        .await;

    let password = server
        .mock("POST", "/api/credential/authenticatePassword")
        .match_body(Matcher::UrlEncoded("passwd".into(), "hunter2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("SESSION_AUTHENTICATED"))
        .create_async()
        .await;

    let session = client
        .quick_login_with(TwoFactorMethod::Sms, &FnPrompt(fixed_code))
        .await
        .expect("login");

    challenge.assert_async().await;
    submit.assert_async().await;
    password.assert_async().await;
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn quick_login_follows_email_challenge_path() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body(common::login_page_body())
        .create_async()
        .await;

    server
        .mock("POST", "/api/login/identifyUser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_IDENTIFIED"))
        .create_async()
        .await;

    let challenge = server
        .mock("POST", "/api/credential/challengeEmail")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_IDENTIFIED"))
        .create_async()
        .await;

    let submit = server
        .mock("POST", "/api/credential/authenticateEmail")
        .match_body(Matcher::UrlEncoded("code".into(), "1234".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("DEVICE_AUTHORIZED"))
        .create_async()
        .await;

    let password = server
        .mock("POST", "/api/credential/authenticatePassword")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("SESSION_AUTHENTICATED"))
        .create_async()
        .await;

    let sms_challenge = server
        .mock("POST", "/api/credential/challengeSms")
        .expect(0)
        .create_async()
        .await;

    client
        .quick_login_with(TwoFactorMethod::Email, &FnPrompt(fixed_code))
        .await
        .expect("login");

    challenge.assert_async().await;
    submit.assert_async().await;
    password.assert_async().await;
    sms_challenge.assert_async().await;
}

#[tokio::test]
async fn quick_login_none_surfaces_two_factor_required() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body(common::login_page_body())
        .create_async()
        .await;

    server
        .mock("POST", "/api/login/identifyUser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_IDENTIFIED"))
        .create_async()
        .await;

    let challenge = server
        .mock("POST", "/api/credential/challengeSms")
        .expect(0)
        .create_async()
        .await;

    let err = client
        .quick_login_with(TwoFactorMethod::None, &FnPrompt(fixed_code))
        .await
        .err()
        .expect("should be Err");

    match err {
        AppError::TwoFactorRequired => (),
        other => panic!("Unexpected error: {other:?}"),
    }
    challenge.assert_async().await;
}

#[tokio::test]
async fn login_fails_when_csrf_missing_from_page() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body("<html>no token here</html>")
        .create_async()
        .await;

    let err = client
        .quick_login(&FnPrompt(fixed_code))
        .await
        .err()
        .expect("should be Err");

    match err {
        AppError::MissingField(field) => assert_eq!(field, "csrf"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rejected_password_maps_to_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    let client = common::create_test_client(&server.url());

    server
        .mock("GET", "/page/login/goHome")
        .with_status(200)
        .with_body(common::login_page_body())
        .create_async()
        .await;

    server
        .mock("POST", "/api/login/identifyUser")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::auth_envelope("USER_REMEMBERED"))
        .create_async()
        .await;

    server
        .mock("POST", "/api/credential/authenticatePassword")
        .with_status(401)
        .create_async()
        .await;

    let err = client
        .quick_login(&FnPrompt(fixed_code))
        .await
        .err()
        .expect("should be Err");

    match err {
        AppError::Unauthorized => (),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn logout_discards_session() {
    let mut server = mockito::Server::new_async().await;
    let client = common::logged_in_client(&server.url()).await;

    assert!(client.session().await.is_some());
    client.logout().await;
    assert!(client.session().await.is_none());
}
