// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the quell library.
//!
//! All failures surface as a [`QuellError`]. Operators never invent errors of
//! their own; they forward whatever arrives in-band (see
//! [`StreamItem::Error`](crate::StreamItem::Error)), so the variants here
//! cover stream plumbing and user callbacks.
//!
//! # Examples
//!
//! ```
//! use quell_core::{QuellError, Result};
//!
//! fn process_data() -> Result<()> {
//!     Err(QuellError::stream_error("stream not ready"))
//! }
//! ```

/// Root error type for all quell operations.
#[derive(Debug, thiserror::Error)]
pub enum QuellError {
    /// Stream processing encountered an error.
    ///
    /// General-purpose variant for stream operations that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code.
    ///
    /// Wraps errors produced by user-provided functions and callbacks so they
    /// can travel through the in-band error channel.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QuellError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    ///
    /// # Examples
    ///
    /// ```
    /// use quell_core::QuellError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("custom error: {msg}")]
    /// struct CustomError {
    ///     msg: String,
    /// }
    ///
    /// let err = QuellError::user_error(CustomError { msg: "broken".to_string() });
    /// assert!(matches!(err, QuellError::UserError(_)));
    /// ```
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

impl Clone for QuellError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // For UserError, we can't clone the boxed error, so convert to string
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}

/// Convenience alias for `Result<T, QuellError>`.
pub type Result<T> = core::result::Result<T, QuellError>;
