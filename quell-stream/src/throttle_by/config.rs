// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Emission policy for [`throttle_by`](crate::ThrottleByExt::throttle_by).
///
/// The two flags are independent:
///
/// - `leading` - forward the value that opens a window, immediately
/// - `trailing` - when a window closes, forward the most recent value that
///   arrived during it (and chain a new window from that value)
///
/// The default is `leading` only, matching the usual throttle behavior of
/// "first value of each burst wins".
///
/// Setting both flags to `false` is accepted but almost certainly not what
/// you want: every value opens a window and nothing is ever forwarded. The
/// resulting stream still completes when upstream does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Forward the value that opens a window.
    pub leading: bool,
    /// Forward the latest suppressed value when a window closes.
    pub trailing: bool,
}

impl ThrottleConfig {
    /// Leading-only policy: the first value of each burst is forwarded.
    pub const fn leading() -> Self {
        Self {
            leading: true,
            trailing: false,
        }
    }

    /// Trailing-only policy: the latest value of each window is forwarded
    /// when the window closes; nothing is forwarded on arrival.
    pub const fn trailing() -> Self {
        Self {
            leading: false,
            trailing: true,
        }
    }

    /// Both policies: forward at window-open, and at window-close if further
    /// values arrived in between.
    pub const fn leading_and_trailing() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self::leading()
    }
}
