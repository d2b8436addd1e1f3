// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the `throttle_by` operator for streams.
//!
//! `throttle_by` rate-limits a stream using a *window selector*: a function
//! invoked once per forwarded value that returns a stream. While that window
//! stream has not yet yielded its first value or ended, upstream values are
//! suppressed; only the most recent suppressed value is buffered. The
//! [`ThrottleConfig`] flags decide what gets emitted:
//!
//! - `leading` - emit the value that opens a window, immediately
//! - `trailing` - when a window closes, emit the latest value buffered during
//!   it, and open the next window from that value
//!
//! A window closing on its first value and a window closing by ending are
//! handled identically. An error item from a window stream is not treated as
//! a close; it is forwarded downstream verbatim and ends the throttled
//! stream, same as an upstream error. A malfunctioning selector fails loudly
//! rather than being swallowed.
//!
//! Completion defers to a pending trailing emission: if upstream ends while a
//! window is open and a trailing value is buffered, that value is delivered
//! when the window closes, strictly before the end of the stream. In every
//! other situation upstream completion ends the throttled stream at once.
//!
//! # Example
//!
//! ```
//! use futures::executor::block_on;
//! use futures::stream::{self, StreamExt};
//! use quell_core::StreamItem;
//! use quell_stream::ThrottleByExt;
//!
//! let upstream = stream::iter([1, 2, 3].map(StreamItem::Value));
//!
//! // A window that never closes: everything after the first value is dropped.
//! let throttled = upstream.throttle_by(|_| stream::pending::<StreamItem<()>>());
//!
//! let values: Vec<_> = block_on(
//!     throttled
//!         .filter_map(|item| async move { item.ok() })
//!         .collect(),
//! );
//! assert_eq!(values, vec![1]);
//! ```

mod config;
mod implementation;

pub use config::ThrottleConfig;
pub use implementation::ThrottleByExt;
