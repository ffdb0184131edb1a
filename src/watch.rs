//! Change watcher - classifies a live stream of field values.

use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::classifier::{Classifier, StrengthResult};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchError {
    #[error("Result receiver was dropped")]
    ResultsClosed,
}

/// Why the watcher stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchSummary {
    /// Values taken off the input channel, superseded ones included.
    pub received: usize,
    /// Results sent on the output channel.
    pub published: usize,
    pub stop: StopReason,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WatchOptions {
    pub classifier: Classifier,
    /// Quiet period after a value arrives. Newer values received meanwhile
    /// replace it and only the latest is classified. Zero disables it.
    pub debounce: Duration,
}

/// Classifies one value and sends the result.
pub async fn classify_password_tx(raw: SecretString, tx: mpsc::Sender<StrengthResult>) {
    let result = Classifier::default().classify_secret(&raw);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password classification: {}", _e);
    }
}

/// Classifies every value received on `values` and publishes the result on
/// `results` until `token` is cancelled or the input channel closes.
///
/// Once cancelled, no further result is sent.
///
/// # Errors
///
/// Returns [`WatchError::ResultsClosed`] if the result receiver is dropped.
pub async fn watch_password_changes(
    mut values: mpsc::Receiver<SecretString>,
    results: mpsc::Sender<StrengthResult>,
    token: CancellationToken,
    options: WatchOptions,
) -> Result<WatchSummary, WatchError> {
    let mut received = 0;
    let mut published = 0;

    #[cfg(feature = "tracing")]
    tracing::info!("password watcher started");

    let stop = loop {
        let next = tokio::select! {
            biased;
            _ = token.cancelled() => break StopReason::Cancelled,
            next = values.recv() => next,
        };
        let Some(mut latest) = next else {
            break StopReason::InputClosed;
        };
        received += 1;

        if !options.debounce.is_zero() {
            tokio::select! {
                biased;
                _ = token.cancelled() => break StopReason::Cancelled,
                _ = tokio::time::sleep(options.debounce) => {}
            }
            while let Ok(newer) = values.try_recv() {
                latest = newer;
                received += 1;
            }
        }

        let result = options.classifier.classify_secret(&latest);
        drop(latest);

        tokio::select! {
            biased;
            _ = token.cancelled() => break StopReason::Cancelled,
            sent = results.send(result) => {
                if sent.is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::error!(received, published, "password watcher lost its result receiver");
                    return Err(WatchError::ResultsClosed);
                }
            }
        }
        published += 1;
    };

    #[cfg(feature = "tracing")]
    tracing::info!(received, published, ?stop, "password watcher stopped");

    Ok(WatchSummary {
        received,
        published,
        stop,
    })
}
