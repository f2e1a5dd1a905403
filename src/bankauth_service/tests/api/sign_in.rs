use bankauth_core::{Auth, AuthErrorKind, Identified};
use secrecy::ExposeSecret;

use crate::helpers::{TestApp, customer, email, password, teller};

#[tokio::test]
async fn customer_sign_in_validate_sign_out_scenario() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    let token = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();
    assert!(!token.as_ref().expose_secret().is_empty());

    let wrong = app
        .service
        .validate_password(email("a@b.com"), password("wrong"))
        .await;
    assert_eq!(wrong.unwrap_err().kind(), AuthErrorKind::AuthenticationFailed);
    assert!(app.service.is_active(&email("a@b.com")).await);

    app.service.sign_out(&token).await.unwrap();
    assert!(!app.service.is_active(&email("a@b.com")).await);
}

#[tokio::test]
async fn second_sign_in_is_already_active() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    app.service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();
    let second = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await;

    assert_eq!(second.unwrap_err().kind(), AuthErrorKind::AlreadyActive);
}

#[tokio::test]
async fn sign_in_after_sign_out_issues_new_token() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    let first = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();
    app.service.sign_out(&first).await.unwrap();
    let second = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn unknown_email_and_wrong_password_look_the_same() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    let unknown = app
        .service
        .sign_in(email("unknown@x.com"), password("anything"))
        .await
        .unwrap_err();
    let wrong = app
        .service
        .sign_in(email("a@b.com"), password("wrongpass"))
        .await
        .unwrap_err();

    assert_eq!(unknown.kind(), AuthErrorKind::AuthenticationFailed);
    assert_eq!(wrong.kind(), AuthErrorKind::AuthenticationFailed);
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn email_lookup_ignores_case() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    assert!(
        app.service
            .sign_in(email("A@B.COM"), password("hunter22"))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn teller_authenticates_through_bound_capability() {
    let app = TestApp::new();
    let grace = teller("grace@bank.com");
    app.service
        .register(grace.clone(), password("hunter22"))
        .await
        .unwrap();

    let auth = app.service.capability().bind(&grace);
    let token = auth.sign_in(password("hunter22")).await.unwrap();
    assert!(app.service.is_active(grace.email()).await);

    assert!(auth.validate_password(&password("hunter22")).await.is_ok());
    auth.sign_out(&token).await.unwrap();
    assert_eq!(
        auth.sign_out(&token).await.unwrap_err().kind(),
        AuthErrorKind::NotFound
    );
}

#[tokio::test]
async fn customer_and_teller_sessions_are_independent() {
    let app = TestApp::with_customer("c@bank.com", "hunter22").await;
    app.service
        .register(teller("t@bank.com"), password("hunter33"))
        .await
        .unwrap();
    let ada = customer("c@bank.com");

    let customer_token = app.service.capability().bind(&ada).sign_in(password("hunter22")).await.unwrap();
    let teller_token = app
        .service
        .sign_in(email("t@bank.com"), password("hunter33"))
        .await
        .unwrap();

    app.service.sign_out(&teller_token).await.unwrap();
    assert!(app.service.is_active(&email("c@bank.com")).await);
    assert!(app.service.verify_session(&customer_token).await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sign_ins_open_exactly_one_session() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = app.service.clone();
            tokio::spawn(async move {
                service
                    .sign_in(email("a@b.com"), password("hunter22"))
                    .await
            })
        })
        .collect();

    let mut tokens = 0;
    let mut already_active = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => tokens += 1,
            Err(e) if e.kind() == AuthErrorKind::AlreadyActive => already_active += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(tokens, 1);
    assert_eq!(already_active, 7);
}
