//! Background status polling with cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::service::TranscriptionControl;

use super::sync::PanelSync;

/// Handle for a running status poll loop.
pub struct PollHandle {
    stop_flag: Arc<AtomicBool>,
}

/// Spawn the status poll: one immediate refresh, then one refresh per
/// interval until the handle is stopped.
pub fn spawn_status_poll<C: TranscriptionControl + 'static>(
    sync: Arc<PanelSync<C>>,
    interval: Duration,
) -> PollHandle {
    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop = stop_flag.clone();
    tokio::spawn(async move {
        sync.refresh_status().await;
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; the refresh above covers it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if stop.load(Ordering::SeqCst) {
                break;
            }
            sync.refresh_status().await;
        }
        debug!("[panel] status poll stopped");
    });
    PollHandle { stop_flag }
}

/// Signal the poll loop to exit at its next tick.
pub fn stop_status_poll(handle: PollHandle) {
    handle.stop_flag.store(true, Ordering::SeqCst);
}
