// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observing stream release in tests.
//!
//! Rust streams are cancelled by dropping them. `DropGuardStream` wraps a
//! stream and trips a shared flag when it is dropped, letting tests assert
//! that an operator actually released a subscription (for example the active
//! window of `throttle_by`) at the expected moment.

use futures::Stream;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Shared handle reporting whether the guarded stream has been dropped.
#[derive(Clone, Debug, Default)]
pub struct DropFlag {
    dropped: Arc<AtomicBool>,
}

impl DropFlag {
    /// Creates a flag that is initially not tripped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the guarded stream has been dropped.
    pub fn is_dropped(&self) -> bool {
        self.dropped.load(Ordering::Acquire)
    }
}

/// A stream wrapper that trips a [`DropFlag`] on drop.
///
/// Forwards all items of the inner stream unchanged.
pub struct DropGuardStream<S> {
    inner: S,
    flag: DropFlag,
}

impl<S> DropGuardStream<S> {
    /// Wraps `inner`, returning the wrapper and the flag observing it.
    pub fn new(inner: S) -> (Self, DropFlag) {
        let flag = DropFlag::new();
        (
            Self {
                inner,
                flag: flag.clone(),
            },
            flag,
        )
    }
}

impl<S> Drop for DropGuardStream<S> {
    fn drop(&mut self) {
        self.flag.dropped.store(true, Ordering::Release);
    }
}

impl<S> Stream for DropGuardStream<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
