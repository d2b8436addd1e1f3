// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use quell_core::{CancellationToken, QuellError, StreamItem};
use quell_exec::{SubscribeExt, SubscribeOutcome};
use quell_stream::ThrottleByExt;
use quell_test_utils::{person_alice, person_bob, person_charlie, test_channel, Person};

#[tokio::test]
async fn test_subscribe_delivers_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter([1, 2, 3, 4, 5].map(StreamItem::Value));
    let mut seen = Vec::new();

    // Act
    let outcome = upstream
        .subscribe(|value| seen.push(value), None, None::<fn(QuellError)>)
        .await?;

    // Assert
    assert_eq!(outcome, SubscribeOutcome::Completed);
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    Ok(())
}

#[tokio::test]
async fn test_subscribe_returns_error_without_callback() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![
        StreamItem::Value(1),
        StreamItem::Error(QuellError::stream_error("boom")),
        StreamItem::Value(2),
    ]);
    let mut seen = Vec::new();

    // Act
    let result = upstream
        .subscribe(|value| seen.push(value), None, None::<fn(QuellError)>)
        .await;

    // Assert: the error is terminal; the value after it is never delivered
    assert!(result.is_err());
    assert_eq!(seen, vec![1]);

    Ok(())
}

#[tokio::test]
async fn test_subscribe_routes_error_to_callback() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![
        StreamItem::Value(1),
        StreamItem::Error(QuellError::stream_error("boom")),
        StreamItem::Value(2),
    ]);
    let mut seen = Vec::new();
    let mut errors = Vec::new();

    // Act
    let outcome = upstream
        .subscribe(
            |value| seen.push(value),
            None,
            Some(|err: QuellError| errors.push(err.to_string())),
        )
        .await?;

    // Assert: still terminal, but reported through the callback
    assert_eq!(outcome, SubscribeOutcome::Errored);
    assert_eq!(seen, vec![1]);
    assert_eq!(errors, vec!["Stream processing error: boom".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_subscribe_stops_on_cancellation() -> anyhow::Result<()> {
    // Arrange: an upstream that never ends
    let (tx, stream) = test_channel::<Person>();
    let token = CancellationToken::new();
    let canceller = token.clone();

    tx.send(person_alice())?;
    tx.send(person_bob())?;

    let mut seen = Vec::new();

    // Act: cancel as soon as the first value has been observed
    let outcome = stream
        .subscribe(
            |person: Person| {
                seen.push(person);
                canceller.cancel();
            },
            Some(token),
            None::<fn(QuellError)>,
        )
        .await?;

    // Assert: hard stop, bob was never delivered
    assert_eq!(outcome, SubscribeOutcome::Cancelled);
    assert_eq!(seen, vec![person_alice()]);

    Ok(())
}

#[tokio::test]
async fn test_subscribe_on_pre_cancelled_token_delivers_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter([1, 2, 3].map(StreamItem::Value));
    let token = CancellationToken::new();
    token.cancel();

    let mut seen: Vec<i32> = Vec::new();

    // Act
    let outcome = upstream
        .subscribe(|value| seen.push(value), Some(token), None::<fn(QuellError)>)
        .await?;

    // Assert
    assert_eq!(outcome, SubscribeOutcome::Cancelled);
    assert!(seen.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_subscribe_composes_with_throttle_by() -> anyhow::Result<()> {
    // Arrange: instantly-closing windows let every value through
    let (tx, stream) = test_channel::<Person>();
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    tx.send(person_charlie())?;
    drop(tx);

    let throttled = stream.throttle_by(|_: &Person| stream::empty::<StreamItem<()>>());

    let mut seen = Vec::new();

    // Act
    let outcome = throttled
        .subscribe(
            |person: Person| seen.push(person),
            None,
            None::<fn(QuellError)>,
        )
        .await?;

    // Assert
    assert_eq!(outcome, SubscribeOutcome::Completed);
    assert_eq!(seen, vec![person_alice(), person_bob(), person_charlie()]);

    Ok(())
}
