//! Catalog event draining for the launcher panel.

use capy_apps::AppEvent;
use tokio::sync::broadcast::{self, Receiver};

/// Drain all pending catalog events.
/// Returns the app count of the latest refresh, if there was one.
/// Handles RecvError::Lagged by continuing to drain.
pub fn drain_refresh(rx: &mut Receiver<AppEvent>) -> Option<usize> {
    let mut latest = None;

    loop {
        match rx.try_recv() {
            Ok(AppEvent::Refresh { count }) => latest = Some(count),
            Err(broadcast::error::TryRecvError::Empty) => break,
            Err(broadcast::error::TryRecvError::Lagged(_)) => continue, // Skip old, keep draining
            Err(broadcast::error::TryRecvError::Closed) => break,
        }
    }

    latest
}
