// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use quell_core::{QuellError, StreamItem};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Asserts that the stream emits nothing within `timeout_ms` milliseconds.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Awaits the next item from the stream, unwrapping the `StreamItem`.
///
/// Returns the in-band error if one arrives, and a stream error if the
/// stream ends or `timeout_ms` elapses first.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> Result<T, QuellError>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    tokio::select! {
        item = stream.next() => match item {
            Some(StreamItem::Value(v)) => Ok(v),
            Some(StreamItem::Error(e)) => Err(e),
            None => Err(QuellError::stream_error("stream ended")),
        },
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            Err(QuellError::stream_error("timed out waiting for next item"))
        }
    }
}

/// Awaits the stream's end, panicking if a value arrives first or the
/// timeout elapses.
pub async fn expect_stream_end<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => {
            assert!(item.is_none(), "expected end of stream, got an item");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("timed out waiting for end of stream");
        }
    }
}

/// Receives from a tokio unbounded channel with a timeout.
pub async fn recv_timeout<T>(rx: &mut mpsc::UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    tokio::select! {
        item = rx.recv() => item,
        _ = sleep(Duration::from_millis(timeout_ms)) => None,
    }
}

/// Asserts that nothing is received from the channel within the timeout.
pub async fn assert_no_recv<T>(rx: &mut mpsc::UnboundedReceiver<T>, timeout_ms: u64) {
    tokio::select! {
        _item = rx.recv() => {
            panic!("Unexpected item received, expected nothing.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
