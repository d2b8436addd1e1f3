// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{self, StreamExt};
use quell_core::StreamItem;
use quell_stream::{ThrottleByExt, ThrottleConfig};
use quell_test_utils::helpers::expect_stream_end;
use quell_test_utils::{
    assert_no_element_emitted, person_alice, person_bob, person_charlie, test_channel,
    unwrap_stream, window_channel, Person,
};
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_trailing_emits_latest_value_at_window_close() -> anyhow::Result<()> {
    // Arrange: the trailing emission chains a second window, so provide two
    let (window_tx1, window1) = window_channel();
    let (_window_tx2, window2) = window_channel();
    let mut windows = vec![window1, window2].into_iter();

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream.throttle_by_with_config(
        move |_: &Person| windows.next().expect("no more windows"),
        ThrottleConfig::trailing(),
    );

    // Act & Assert: nothing is forwarded on arrival
    tx.send(person_alice())?;
    assert_no_element_emitted(&mut throttled, 10).await;

    // The latest value overwrites the buffered one
    tx.send(person_bob())?;
    assert_no_element_emitted(&mut throttled, 10).await;

    // Window closes on its first value: only the latest survives
    window_tx1.send(())?;
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_bob());

    Ok(())
}

#[tokio::test]
async fn test_trailing_chains_windows_while_values_keep_arriving() -> anyhow::Result<()> {
    // Arrange: one controllable window per expected open
    let (window_tx1, window1) = window_channel();
    let (window_tx2, window2) = window_channel();
    let (window_tx3, window3) = window_channel();
    let mut windows = vec![window1, window2, window3].into_iter();

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream.throttle_by_with_config(
        move |_: &Person| windows.next().expect("no more windows"),
        ThrottleConfig::trailing(),
    );

    // Act & Assert
    tx.send(person_alice())?;
    window_tx1.send(())?;
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_alice());

    // The trailing emission opened the next window from alice; bob is
    // suppressed inside it and forwarded at its close.
    tx.send(person_bob())?;
    assert_no_element_emitted(&mut throttled, 10).await;
    window_tx2.send(())?;
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_bob());

    // Third window closes with nothing buffered: no emission, chain stops
    window_tx3.send(())?;
    assert_no_element_emitted(&mut throttled, 10).await;

    // The stage is idle again; a fresh value starts over (windows exhausted
    // would panic the selector, so end here)
    drop(tx);
    expect_stream_end(&mut throttled, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_leading_and_trailing_burst_scenario() -> anyhow::Result<()> {
    // Arrange: a, b, c arrive at 0ms, 100ms, 200ms; every window lasts 250ms
    pause();

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream.throttle_by_with_config(
        |_: &Person| {
            stream::once(sleep(Duration::from_millis(250)))
                .map(StreamItem::Value)
                .boxed()
        },
        ThrottleConfig::leading_and_trailing(),
    );

    // Act & Assert: a is forwarded immediately (leading)
    tx.send(person_alice())?;
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_alice());

    // b and c arrive inside a's window; c is the latest when it closes
    assert_no_element_emitted(&mut throttled, 100).await;
    tx.send(person_bob())?;
    assert_no_element_emitted(&mut throttled, 100).await;
    tx.send(person_charlie())?;

    // Window closes at 250ms: exactly one trailing forward, the latest value
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_charlie());

    // The chained window (opened from c) closes with nothing pending
    assert_no_element_emitted(&mut throttled, 300).await;

    drop(tx);
    expect_stream_end(&mut throttled, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_leading_and_trailing_single_value_is_not_duplicated() -> anyhow::Result<()> {
    // Arrange
    let (window_tx, window) = window_channel();
    let mut windows = vec![window].into_iter();

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream.throttle_by_with_config(
        move |_: &Person| windows.next().expect("no more windows"),
        ThrottleConfig::leading_and_trailing(),
    );

    // Act & Assert: the leading emission cleared the buffer, so the window
    // close must not forward anything
    tx.send(person_alice())?;
    assert_eq!(unwrap_stream(&mut throttled, 1000).await?, person_alice());

    window_tx.send(())?;
    assert_no_element_emitted(&mut throttled, 10).await;

    drop(tx);
    expect_stream_end(&mut throttled, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_neither_flag_never_forwards_anything() -> anyhow::Result<()> {
    // Arrange: both flags off; accepted, but nothing is ever forwarded
    let config = ThrottleConfig {
        leading: false,
        trailing: false,
    };

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream
        .throttle_by_with_config(|_: &Person| stream::empty::<StreamItem<()>>(), config);

    // Act: even with instantly-closing windows every value is swallowed
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    tx.send(person_charlie())?;
    assert_no_element_emitted(&mut throttled, 50).await;

    // Assert: completion is not deferred either
    drop(tx);
    expect_stream_end(&mut throttled, 1000).await;

    Ok(())
}

#[tokio::test]
async fn test_neither_flag_completes_while_window_still_open() -> anyhow::Result<()> {
    // Arrange: a window that never closes
    let config = ThrottleConfig {
        leading: false,
        trailing: false,
    };

    let (tx, stream) = test_channel::<Person>();
    let mut throttled = stream
        .throttle_by_with_config(|_: &Person| stream::pending::<StreamItem<()>>(), config);

    tx.send(person_alice())?;
    assert_no_element_emitted(&mut throttled, 10).await;

    // Act & Assert: upstream completion ends the stream immediately; no
    // trailing emission can ever be owed
    drop(tx);
    expect_stream_end(&mut throttled, 1000).await;

    Ok(())
}
