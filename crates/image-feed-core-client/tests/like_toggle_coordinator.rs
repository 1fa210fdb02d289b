// image-feed-core-client/image-feed-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use image_feed_core_client::domain::feed::services::impls::LikeToggleCoordinator;
use image_feed_core_client::domain::feed::services::LikeToggleCoordinator as LikeToggleCoordinatorTrait;
use image_feed_core_client::dtos::{PhotoId, RequestError};
use image_feed_core_client::test::{mock_data, MockLikeToggleCoordinatorDependencies};

fn authenticated_deps() -> MockLikeToggleCoordinatorDependencies {
    let mut deps = MockLikeToggleCoordinatorDependencies::default();
    deps.auth_token_provider
        .expect_current_token()
        .returning(|| Some(mock_data::access_token()));
    deps
}

#[tokio::test]
async fn test_likes_photo_that_is_not_liked() -> Result<()> {
    let mut deps = authenticated_deps();

    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .with(
            predicate::eq(mock_data::access_token()),
            predicate::eq(PhotoId::from("a")),
            predicate::eq(true),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let coordinator = LikeToggleCoordinator::from(deps.into_deps());
    coordinator.toggle(&PhotoId::from("a"), false).await?;

    Ok(())
}

#[tokio::test]
async fn test_unlikes_photo_that_is_liked() -> Result<()> {
    let mut deps = authenticated_deps();

    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .with(
            predicate::always(),
            predicate::eq(PhotoId::from("a")),
            predicate::eq(false),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let coordinator = LikeToggleCoordinator::from(deps.into_deps());
    coordinator.toggle(&PhotoId::from("a"), true).await?;

    Ok(())
}

#[tokio::test]
async fn test_returns_server_errors_without_retrying() -> Result<()> {
    let mut deps = authenticated_deps();

    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .return_once(|_, _, _| {
            Box::pin(async { Err(RequestError::HttpStatus { status: 403 }) })
        });

    let coordinator = LikeToggleCoordinator::from(deps.into_deps());

    assert_eq!(
        coordinator.toggle(&PhotoId::from("a"), false).await,
        Err(RequestError::HttpStatus { status: 403 })
    );
    assert!(!coordinator.is_toggling(&PhotoId::from("a")));

    Ok(())
}

#[tokio::test]
async fn test_requires_token() -> Result<()> {
    let mut deps = MockLikeToggleCoordinatorDependencies::default();

    deps.auth_token_provider
        .expect_current_token()
        .once()
        .return_once(|| None);

    let coordinator = LikeToggleCoordinator::from(deps.into_deps());

    assert_eq!(
        coordinator.toggle(&PhotoId::from("a"), false).await,
        Err(RequestError::AuthRequired)
    );
    assert!(!coordinator.is_toggling(&PhotoId::from("a")));

    Ok(())
}

#[tokio::test]
async fn test_rejects_second_toggle_for_same_photo() -> Result<()> {
    let mut deps = authenticated_deps();
    let (tx, rx) = oneshot::channel::<()>();

    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .with(
            predicate::always(),
            predicate::eq(PhotoId::from("a")),
            predicate::always(),
        )
        .return_once(|_, _, _| {
            Box::pin(async move {
                _ = rx.await;
                Ok(())
            })
        });
    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .with(
            predicate::always(),
            predicate::eq(PhotoId::from("b")),
            predicate::always(),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let coordinator = Arc::new(LikeToggleCoordinator::from(deps.into_deps()));

    let first_toggle = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.toggle(&PhotoId::from("a"), false).await }
    });

    while !coordinator.is_toggling(&PhotoId::from("a")) {
        tokio::task::yield_now().await;
    }

    assert_eq!(
        coordinator.toggle(&PhotoId::from("a"), false).await,
        Err(RequestError::RequestAlreadyInFlight)
    );

    // Other photos are not affected.
    coordinator.toggle(&PhotoId::from("b"), false).await?;

    _ = tx.send(());
    first_toggle.await??;

    assert!(!coordinator.is_toggling(&PhotoId::from("a")));

    Ok(())
}

#[tokio::test]
async fn test_releases_photo_when_toggle_is_dropped() -> Result<()> {
    let mut deps = authenticated_deps();
    let (_tx, rx) = oneshot::channel::<()>();

    deps.photos_service
        .expect_set_photo_liked()
        .once()
        .return_once(|_, _, _| {
            Box::pin(async move {
                _ = rx.await;
                Ok(())
            })
        });

    let coordinator = Arc::new(LikeToggleCoordinator::from(deps.into_deps()));

    let toggle = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.toggle(&PhotoId::from("a"), false).await }
    });

    while !coordinator.is_toggling(&PhotoId::from("a")) {
        tokio::task::yield_now().await;
    }

    toggle.abort();
    assert!(toggle.await.is_err());
    assert!(!coordinator.is_toggling(&PhotoId::from("a")));

    Ok(())
}
