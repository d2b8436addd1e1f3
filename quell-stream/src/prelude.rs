// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```ignore
//! use quell_stream::prelude::*;
//!
//! let throttled = stream.throttle_by_with_config(selector, ThrottleConfig::leading_and_trailing());
//! ```

pub use crate::throttle_by::{ThrottleByExt, ThrottleConfig};
