// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in streams.
//!
//! Provides a stream wrapper that injects a `StreamItem::Error` at a chosen
//! position, for testing error propagation behavior in stream operators.

use futures::Stream;
use quell_core::{QuellError, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a specified position.
///
/// Wraps the inner stream's values in `StreamItem::Value` and emits a
/// `StreamItem::Error` once, at position `inject_error_at` (0-indexed).
///
/// # Examples
///
/// ```rust
/// use quell_test_utils::ErrorInjectingStream;
/// use quell_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let base_stream = stream::iter(vec![1, 2, 3]);
/// let mut error_stream = ErrorInjectingStream::new(base_stream, 1);
///
/// // First item is a value
/// assert!(matches!(error_stream.next().await.unwrap(), StreamItem::Value(1)));
///
/// // Second item is the injected error
/// assert!(error_stream.next().await.unwrap().is_error());
///
/// // Then values continue
/// assert!(matches!(error_stream.next().await.unwrap(), StreamItem::Value(2)));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    /// Creates a new error-injecting stream wrapper.
    ///
    /// # Arguments
    ///
    /// * `inner` - The base stream to wrap
    /// * `inject_error_at` - The position (0-indexed) at which to inject an error
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // Check if we should inject an error at this position
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Poll::Ready(Some(StreamItem::Error(QuellError::stream_error(
                    "Injected test error",
                ))));
            }
        }

        // Otherwise, poll the inner stream and wrap in StreamItem::Value
        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
