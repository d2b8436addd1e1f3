// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};

use futures::Stream;
use pin_project::pin_project;
use quell_core::StreamItem;

use super::config::ThrottleConfig;

/// Extension trait providing the `throttle_by` operator for streams.
///
/// This trait allows any stream of `StreamItem<T>` to be rate-limited by
/// per-value window streams produced by a selector function.
pub trait ThrottleByExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Throttles the stream with the default policy (`leading` only).
    ///
    /// Equivalent to
    /// [`throttle_by_with_config`](Self::throttle_by_with_config) with
    /// [`ThrottleConfig::default()`].
    ///
    /// # Arguments
    ///
    /// * `selector` - Called once per opened window with the value that opens
    ///   it; returns the window stream. The window closes on that stream's
    ///   first value or on its end, whichever comes first.
    fn throttle_by<F, W, U>(self, selector: F) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T) -> W,
        W: Stream<Item = StreamItem<U>>;

    /// Throttles the stream with an explicit [`ThrottleConfig`].
    ///
    /// Exactly one window is open at a time. While a window is open, upstream
    /// values are suppressed and only the most recent one is buffered
    /// (overwritten, never queued). With `leading`, the value opening a
    /// window is forwarded immediately; with `trailing`, the buffered value
    /// is forwarded when the window closes and the next window opens from it.
    ///
    /// The selector is never called concurrently with itself and never
    /// memoized. A window stream that is already finished when it is first
    /// polled counts as closed; the next upstream value finds the stage idle.
    ///
    /// Errors from upstream or from a window stream are forwarded downstream
    /// verbatim and end the throttled stream.
    fn throttle_by_with_config<F, W, U>(
        self,
        selector: F,
        config: ThrottleConfig,
    ) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T) -> W,
        W: Stream<Item = StreamItem<U>>;
}

impl<S, T> ThrottleByExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn throttle_by<F, W, U>(self, selector: F) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T) -> W,
        W: Stream<Item = StreamItem<U>>,
    {
        self.throttle_by_with_config(selector, ThrottleConfig::default())
    }

    fn throttle_by_with_config<F, W, U>(
        self,
        selector: F,
        config: ThrottleConfig,
    ) -> impl Stream<Item = StreamItem<T>>
    where
        F: FnMut(&T) -> W,
        W: Stream<Item = StreamItem<U>>,
    {
        Box::pin(ThrottleByStream {
            stream: self,
            selector,
            config,
            window: None,
            pending: None,
            upstream_done: false,
            errored: false,
        })
    }
}

#[pin_project]
struct ThrottleByStream<S, F, W, T> {
    #[pin]
    stream: S,
    selector: F,
    config: ThrottleConfig,
    /// The active window, if any. At most one is ever live; dropping it is
    /// what releases the window subscription.
    #[pin]
    window: Option<W>,
    /// Latest upstream value not yet forwarded. Overwritten, never queued.
    pending: Option<T>,
    /// One-way latch: upstream has ended.
    upstream_done: bool,
    /// One-way latch: an error was forwarded; the stream is over.
    errored: bool,
}

impl<S, F, W, T, U> Stream for ThrottleByStream<S, F, W, T>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(&T) -> W,
    W: Stream<Item = StreamItem<U>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.errored {
            return Poll::Ready(None);
        }

        loop {
            // 1. Poll the active window. Its first value and its end both
            //    mean "window closed"; an error ends the whole stream.
            let mut window_closed = false;
            if let Some(window) = this.window.as_mut().as_pin_mut() {
                match window.poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(_))) | Poll::Ready(None) => {
                        window_closed = true;
                    }
                    Poll::Ready(Some(StreamItem::Error(err))) => {
                        this.window.set(None);
                        *this.pending = None;
                        *this.errored = true;
                        return Poll::Ready(Some(StreamItem::Error(err)));
                    }
                    Poll::Pending => {
                        // Window still open
                    }
                }
            }

            if window_closed {
                this.window.set(None);
                if this.config.trailing {
                    if let Some(value) = this.pending.take() {
                        // Chain the next window from the trailing value,
                        // unless upstream already ended.
                        if !*this.upstream_done {
                            let next_window = (this.selector)(&value);
                            this.window.set(Some(next_window));
                        }
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                }
                if *this.upstream_done {
                    return Poll::Ready(None);
                }
                continue;
            }

            // 2. Upstream already ended: complete now unless a trailing
            //    emission is still owed by the open window.
            if *this.upstream_done {
                if this.config.trailing && this.pending.is_some() && this.window.is_some() {
                    // Deferred completion; the window poll above registered
                    // the waker.
                    return Poll::Pending;
                }
                this.window.set(None);
                return Poll::Ready(None);
            }

            // 3. Poll the source stream.
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.window.is_some() {
                        // Windowing: the latest value replaces any buffered one
                        *this.pending = Some(value);
                        continue;
                    }
                    if this.config.leading {
                        *this.pending = None;
                        let window = (this.selector)(&value);
                        this.window.set(Some(window));
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                    // Open the window silently; the value stays buffered for
                    // a possible trailing emission.
                    let window = (this.selector)(&value);
                    this.window.set(Some(window));
                    *this.pending = Some(value);
                    continue;
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    this.window.set(None);
                    *this.pending = None;
                    *this.errored = true;
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    *this.upstream_done = true;
                    continue;
                }
                Poll::Pending => {
                    // Both the window (if any) and upstream registered wakers
                    return Poll::Pending;
                }
            }
        }
    }
}
