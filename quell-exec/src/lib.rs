// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscription boundary for quell streams.
//!
//! [`SubscribeExt::subscribe`] is the push edge of the library: it consumes a
//! `StreamItem` stream and drives it to its terminal outcome, delivering
//! values to a callback in arrival order, on the driving task, never
//! concurrently, and never after the terminal outcome has been delivered.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod logging;
pub mod subscribe;

pub use subscribe::{SubscribeExt, SubscribeOutcome};
