// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing subscription for `StreamItem` streams.
//!
//! `subscribe` plays the role of the downstream consumer: values go to the
//! `on_value` callback, an in-band error either goes to the `on_error`
//! callback or is returned, and the terminal outcome
//! ([`SubscribeOutcome::Completed`] or [`SubscribeOutcome::Cancelled`]) is
//! reported exactly once through the return value. No callback is ever
//! invoked after the terminal outcome, and callbacks run on the driving
//! task, never concurrently.

use async_trait::async_trait;
use futures::stream::Stream;
use quell_core::{CancellationToken, QuellError, Result, StreamItem};

use crate::subscribe::implementation::subscribe_impl;

mod implementation;

/// How a subscription ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// The stream completed normally; every value was delivered.
    Completed,
    /// The stream terminated with an in-band error that was handed to the
    /// `on_error` callback.
    Errored,
    /// The cancellation token fired; the stream was dropped mid-flight.
    /// Cancellation is a hard stop, not a completion.
    Cancelled,
}

/// Extension trait providing subscription for streams of `StreamItem<T>`.
#[async_trait]
pub trait SubscribeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Consumes the stream, delivering each value to `on_value` in order.
    ///
    /// # Behavior
    ///
    /// - Values are delivered sequentially on the driving task.
    /// - An in-band `StreamItem::Error` is terminal: it is handed to
    ///   `on_error` when one is installed (the call then returns
    ///   `Ok(Errored)`), or returned as `Err` otherwise. Either way no
    ///   further callback is invoked.
    /// - When `cancellation_token` fires, the stream is dropped and the call
    ///   returns `Ok(Cancelled)` without invoking any further callback.
    /// - When the stream ends, the call returns `Ok(Completed)`.
    ///
    /// # Arguments
    ///
    /// * `on_value` - Callback invoked per value
    /// * `cancellation_token` - Optional hard-stop handle; `None` means the
    ///   subscription runs until the stream's own terminal signal
    /// * `on_error` - Optional handler for the terminal in-band error
    ///
    /// # Errors
    ///
    /// Returns the stream's in-band error when no `on_error` callback is
    /// installed.
    ///
    /// # Example
    ///
    /// ```
    /// use quell_exec::{SubscribeExt, SubscribeOutcome};
    /// use quell_core::{QuellError, StreamItem};
    /// use futures::stream;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> quell_core::Result<()> {
    /// let mut seen = Vec::new();
    ///
    /// let outcome = stream::iter([1, 2, 3].map(StreamItem::Value))
    ///     .subscribe(
    ///         |value| seen.push(value),
    ///         None,
    ///         None::<fn(QuellError)>,
    ///     )
    ///     .await?;
    ///
    /// assert_eq!(outcome, SubscribeOutcome::Completed);
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    async fn subscribe<FV, FE>(
        self,
        on_value: FV,
        cancellation_token: Option<CancellationToken>,
        on_error: Option<FE>,
    ) -> Result<SubscribeOutcome>
    where
        FV: FnMut(T) + Send,
        FE: FnMut(QuellError) + Send,
        T: Send;
}

#[async_trait]
impl<S, T> SubscribeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Unpin + Send,
    T: Send,
{
    async fn subscribe<FV, FE>(
        self,
        on_value: FV,
        cancellation_token: Option<CancellationToken>,
        on_error: Option<FE>,
    ) -> Result<SubscribeOutcome>
    where
        FV: FnMut(T) + Send,
        FE: FnMut(QuellError) + Send,
        T: Send,
    {
        subscribe_impl(self, on_value, on_error, cancellation_token).await
    }
}
