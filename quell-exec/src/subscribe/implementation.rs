// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::{self, Either};
use futures::pin_mut;
use futures::stream::{Stream, StreamExt};
use quell_core::{CancellationToken, QuellError, Result, StreamItem};

use super::SubscribeOutcome;

// Shared implementation logic
pub(crate) async fn subscribe_impl<S, T, FV, FE>(
    mut stream: S,
    mut on_value: FV,
    mut on_error: Option<FE>,
    cancellation_token: Option<CancellationToken>,
) -> Result<SubscribeOutcome>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
    FV: FnMut(T),
    FE: FnMut(QuellError),
{
    let token = cancellation_token.unwrap_or_default();

    loop {
        // Race the next item against cancellation, so a stream stuck in
        // Pending still observes the hard stop.
        let item = {
            let cancelled = token.cancelled();
            let next = stream.next();
            pin_mut!(cancelled);
            pin_mut!(next);
            match future::select(cancelled, next).await {
                Either::Left(((), _)) => return Ok(SubscribeOutcome::Cancelled),
                Either::Right((item, _)) => item,
            }
        };

        match item {
            Some(StreamItem::Value(value)) => {
                if token.is_cancelled() {
                    return Ok(SubscribeOutcome::Cancelled);
                }
                on_value(value);
            }
            Some(StreamItem::Error(err)) => {
                // Terminal signal; nothing is delivered after it
                return match on_error.as_mut() {
                    Some(callback) => {
                        callback(err);
                        Ok(SubscribeOutcome::Errored)
                    }
                    None => {
                        crate::error!("subscription terminated by stream error: {err}");
                        Err(err)
                    }
                };
            }
            None => return Ok(SubscribeOutcome::Completed),
        }
    }
}
