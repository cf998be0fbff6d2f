//! Lookup worker thread
//!
//! Runs suggestion lookups on a background thread so the UI never blocks on
//! the network. Requests arrive over an unbounded tokio channel, each one is
//! executed as its own task, and outcomes are sent back over a std channel
//! that the UI thread polls.
//!
//! Lookups are neither cancelled nor ordered: a slow response for an older
//! query can arrive after a newer one.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::{LookupRequest, LookupResponse, SuggestionSource};

/// Spawn the lookup worker thread
///
/// The worker exits once every request sender has been dropped.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || worker_loop(source, request_rx, response_tx))
}

fn worker_loop<S: SuggestionSource>(
    source: S,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            return;
        }
    };

    let source = Arc::new(source);

    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            log::debug!("Lookup {} for {:?}", request.request_id, request.query);

            let source = Arc::clone(&source);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let result = source.fetch(&request.query).await;
                let response = LookupResponse {
                    request_id: request.request_id,
                    result,
                };
                if response_tx.send(response).is_err() {
                    log::debug!("UI gone, dropping lookup {}", request.request_id);
                }
            });
        }
    });

    log::debug!("Lookup worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
