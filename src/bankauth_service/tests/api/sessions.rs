use std::sync::Arc;

use bankauth_adapters::{AuthSettings, Bank, ManualClock};
use bankauth_core::AuthErrorKind;
use bankauth_service::AuthService;
use chrono::Duration;

use crate::helpers::{TestApp, address, email, password};

#[tokio::test]
async fn verify_session_resolves_owner() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;
    let token = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();

    let session = app.service.verify_session(&token).await.unwrap();

    assert_eq!(session.email(), &email("a@b.com"));
}

#[tokio::test]
async fn expired_session_is_inactive_and_can_be_replaced() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;
    let stale = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();

    app.clock.advance(Duration::minutes(31));

    assert!(!app.service.is_active(&email("a@b.com")).await);
    assert_eq!(
        app.service.verify_session(&stale).await.unwrap_err().kind(),
        AuthErrorKind::NotFound
    );

    let fresh = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();
    assert_ne!(stale, fresh);
    assert!(app.service.verify_session(&fresh).await.is_ok());
}

#[tokio::test]
async fn sign_out_twice_is_not_found() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;
    let token = app
        .service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();

    app.service.sign_out(&token).await.unwrap();

    assert_eq!(
        app.service.sign_out(&token).await.unwrap_err().kind(),
        AuthErrorKind::NotFound
    );
}

#[tokio::test]
async fn sweep_drops_only_expired_sessions() {
    let app = TestApp::with_customer("a@b.com", "hunter22").await;
    app.service
        .register(crate::helpers::teller("t@bank.com"), password("hunter22"))
        .await
        .unwrap();

    app.service
        .sign_in(email("a@b.com"), password("hunter22"))
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(20));
    app.service
        .sign_in(email("t@bank.com"), password("hunter22"))
        .await
        .unwrap();
    app.clock.advance(Duration::minutes(15));

    assert_eq!(app.service.sweep_expired().await, 1);
    assert_eq!(app.service.sweep_expired().await, 0);
    assert!(!app.service.is_active(&email("a@b.com")).await);
    assert!(app.service.is_active(&email("t@bank.com")).await);
}

#[tokio::test]
async fn service_refuses_unbounded_session_lifetime() {
    let mut settings = AuthSettings::for_tests();
    settings.session.ttl_secs = u64::MAX;

    let result = AuthService::in_memory_with_clock(
        Bank::new(7, "Test Savings & Loan", address()),
        &settings,
        Arc::new(ManualClock::default()),
    );

    assert_eq!(result.err().map(|e| e.kind()), Some(AuthErrorKind::InvalidInput));
}
