// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for the quell reactive throttling library.
//!
//! This crate defines the vocabulary shared by every quell crate:
//!
//! - [`StreamItem<T>`] - the stream element, either a value or an in-band
//!   error that terminates the sequence
//! - [`QuellError`] - the root error type
//! - [`CancellationToken`] - a runtime-agnostic token used to tear down
//!   subscriptions from the outside

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod cancellation_token;
pub mod error;
pub mod stream_item;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{QuellError, Result};
pub use self::stream_item::StreamItem;
