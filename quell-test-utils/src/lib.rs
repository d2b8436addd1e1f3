// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the quell throttling library.
//!
//! This crate provides helper channels, assertion utilities and small data
//! fixtures for testing stream operators. It is meant for development and
//! testing only, not for production code.
//!
//! # Key pieces
//!
//! - [`test_channel`] / [`test_channel_with_errors`] - imperative senders
//!   paired with `StreamItem` streams
//! - [`window_channel`] - a channel-controlled window stream for driving
//!   `throttle_by` deterministically
//! - [`DropGuardStream`] - observes when a stream is released (dropped)
//! - [`ErrorInjectingStream`] - injects an in-band error at a position
//! - [`helpers`] - await-with-timeout assertion helpers
//! - [`person`] - the `Person` fixture family

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod drop_guard;
pub mod error_injection;
pub mod helpers;
pub mod person;

use quell_core::StreamItem;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use drop_guard::DropGuardStream;
pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, unwrap_stream};
pub use person::{person_alice, person_bob, person_charlie, Person};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// Lets tests send plain values while the stream side receives
/// `StreamItem<T>`.
///
/// # Example
///
/// ```rust
/// use quell_test_utils::{test_channel, person_alice};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(person_alice()).unwrap();
///
/// let item = stream.next().await.unwrap();
/// assert_eq!(item.unwrap(), person_alice());
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts raw `StreamItem<T>` items.
///
/// Allows tests to send both values and in-band errors through the stream.
///
/// # Example
///
/// ```rust
/// use quell_test_utils::test_channel_with_errors;
/// use quell_core::{QuellError, StreamItem};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(QuellError::stream_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}

/// Creates a channel-controlled window stream for `throttle_by` tests.
///
/// The returned stream stays open until the sender either sends `()` (the
/// window closes on its first value) or is dropped (the window closes by
/// ending). Both paths must behave identically for the operator under test.
pub fn window_channel() -> (
    mpsc::UnboundedSender<()>,
    impl Stream<Item = StreamItem<()>> + Send,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}
