// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::{format_err, Result};
use mockall::{predicate, Sequence};
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use image_feed_core_client::domain::auth::models::OAuthToken;
use image_feed_core_client::domain::auth::services::impls::AuthDomainService;
use image_feed_core_client::domain::auth::services::AuthDomainService as AuthDomainServiceTrait;
use image_feed_core_client::dtos::{AccessToken, AuthError, AuthorizationCode, RequestError};
use image_feed_core_client::test::{mock_data, MockAuthDomainServiceDependencies};

fn oauth_token(access_token: &str) -> OAuthToken {
    OAuthToken {
        access_token: AccessToken::from(access_token),
        token_type: "bearer".to_string(),
        scope: "public read_user write_likes".to_string(),
        created_at: None,
        username: Some("jdoe".to_string()),
    }
}

#[test]
fn test_authorization_url() -> Result<()> {
    let service = AuthDomainService::from(MockAuthDomainServiceDependencies::default().into_deps());

    let url = service.authorization_url()?;

    assert_eq!(url.host_str(), Some("unsplash.com"));
    assert_eq!(url.path(), "/oauth/authorize");
    assert_eq!(
        url.query(),
        Some(
            "client_id=access-key&redirect_uri=urn%3Aietf%3Awg%3Aoauth%3A2.0%3Aoob\
             &response_type=code&scope=public+read_user+write_likes"
        )
    );

    Ok(())
}

#[tokio::test]
async fn test_exchange_code_stores_token() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .with(predicate::eq(AuthorizationCode::from("code")))
        .return_once(|_| Box::pin(async { Ok(oauth_token("access-token")) }));

    deps.auth_token_provider
        .expect_store_token()
        .once()
        .with(predicate::eq(mock_data::access_token()))
        .return_once(|_| Ok(()));

    let service = AuthDomainService::from(deps.into_deps());

    assert_eq!(
        service
            .exchange_code(&AuthorizationCode::from("code"))
            .await?,
        mock_data::access_token()
    );

    Ok(())
}

#[tokio::test]
async fn test_exchange_code_reports_storage_failure() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .return_once(|_| Box::pin(async { Ok(oauth_token("access-token")) }));
    deps.auth_token_provider
        .expect_store_token()
        .once()
        .return_once(|_| Err(format_err!("disk full")));

    let service = AuthDomainService::from(deps.into_deps());

    assert_eq!(
        service.exchange_code(&AuthorizationCode::from("code")).await,
        Err(AuthError::Storage {
            msg: "disk full".to_string()
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_exchange_code_forwards_request_errors() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .return_once(|_| Box::pin(async { Err(RequestError::HttpStatus { status: 401 }) }));
    deps.auth_token_provider.expect_store_token().never();

    let service = AuthDomainService::from(deps.into_deps());

    assert_eq!(
        service.exchange_code(&AuthorizationCode::from("code")).await,
        Err(AuthError::Request(RequestError::HttpStatus { status: 401 }))
    );

    Ok(())
}

#[tokio::test]
async fn test_rejects_same_code_while_in_flight() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();
    let (tx, rx) = oneshot::channel::<()>();
    let (started_tx, started_rx) = oneshot::channel::<()>();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .return_once(|_| {
            Box::pin(async move {
                _ = started_tx.send(());
                _ = rx.await;
                Ok(oauth_token("access-token"))
            })
        });
    deps.auth_token_provider
        .expect_store_token()
        .once()
        .return_once(|_| Ok(()));

    let service = Arc::new(AuthDomainService::from(deps.into_deps()));

    let first_exchange = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .exchange_code(&AuthorizationCode::from("code"))
                .await
        }
    });
    started_rx.await?;

    assert_eq!(
        service.exchange_code(&AuthorizationCode::from("code")).await,
        Err(AuthError::RequestAlreadyInFlight)
    );

    _ = tx.send(());
    assert_eq!(first_exchange.await?, Ok(mock_data::access_token()));

    Ok(())
}

#[tokio::test]
async fn test_new_code_cancels_pending_exchange() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();
    let (_tx, rx) = oneshot::channel::<()>();
    let (started_tx, started_rx) = oneshot::channel::<()>();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .with(predicate::eq(AuthorizationCode::from("first")))
        .return_once(|_| {
            Box::pin(async move {
                _ = started_tx.send(());
                _ = rx.await;
                Ok(oauth_token("stale-token"))
            })
        });
    deps.oauth_service
        .expect_request_access_token()
        .once()
        .with(predicate::eq(AuthorizationCode::from("second")))
        .return_once(|_| Box::pin(async { Ok(oauth_token("access-token")) }));
    deps.auth_token_provider
        .expect_store_token()
        .once()
        .with(predicate::eq(mock_data::access_token()))
        .return_once(|_| Ok(()));

    let service = Arc::new(AuthDomainService::from(deps.into_deps()));

    let first_exchange = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .exchange_code(&AuthorizationCode::from("first"))
                .await
        }
    });
    started_rx.await?;

    assert_eq!(
        service
            .exchange_code(&AuthorizationCode::from("second"))
            .await,
        Ok(mock_data::access_token())
    );
    assert_eq!(first_exchange.await?, Err(AuthError::Cancelled));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_exchange_still_completes() -> Result<()> {
    let mut deps = MockAuthDomainServiceDependencies::default();
    let mut seq = Sequence::new();
    let (tx, rx) = oneshot::channel::<()>();
    let (stored_tx, stored_rx) = oneshot::channel::<()>();

    deps.oauth_service
        .expect_request_access_token()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(AuthorizationCode::from("code")))
        .return_once(|_| {
            Box::pin(async move {
                _ = rx.await;
                Ok(oauth_token("access-token"))
            })
        });
    deps.auth_token_provider
        .expect_store_token()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(mock_data::access_token()))
        .return_once(|_| {
            _ = stored_tx.send(());
            Ok(())
        });
    deps.oauth_service
        .expect_request_access_token()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(AuthorizationCode::from("code")))
        .return_once(|_| Box::pin(async { Ok(oauth_token("access-token")) }));
    deps.auth_token_provider
        .expect_store_token()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| Ok(()));

    let service = AuthDomainService::from(deps.into_deps());

    assert!(tokio::time::timeout(
        Duration::from_millis(20),
        service.exchange_code(&AuthorizationCode::from("code"))
    )
    .await
    .is_err());

    _ = tx.send(());
    stored_rx.await?;

    assert_eq!(
        service.exchange_code(&AuthorizationCode::from("code")).await,
        Ok(mock_data::access_token())
    );

    Ok(())
}
