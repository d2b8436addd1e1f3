// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Selector-driven throttling for streams of [`StreamItem`](quell_core::StreamItem).
//!
//! This crate provides one operator, [`throttle_by`](ThrottleByExt::throttle_by):
//! a rate limiter whose silencing window is not a fixed duration but a stream
//! produced per forwarded value by a caller-supplied selector. The window
//! closes when that stream yields its first value or ends, and the
//! [`ThrottleConfig`] flags `leading` / `trailing` decide what is emitted at
//! window-open and window-close.
//!
//! The operator itself has no notion of time. A timer-backed window is just
//! one possible selector; a window can equally be bounded by a network event,
//! an acknowledgement channel, or anything else that can be expressed as a
//! stream.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod throttle_by;

pub use throttle_by::{ThrottleByExt, ThrottleConfig};

pub mod prelude;
