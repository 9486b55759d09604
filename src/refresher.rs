use crate::worker::RefreshRequest;
use log::debug;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Periodic score refresh on a fixed cadence. 60s by default — ESPN rate
/// limits aggressive pollers.
pub struct PeriodicRefresher {
    requests: mpsc::Sender<RefreshRequest>,
    period: Duration,
}

impl PeriodicRefresher {
    pub fn new(requests: mpsc::Sender<RefreshRequest>, period: Duration) -> Self {
        Self { requests, period }
    }

    pub async fn run(self) {
        let mut ticks = interval(self.period);
        // Skip the immediate first tick so the startup refresh isn't doubled.
        ticks.tick().await;

        loop {
            ticks.tick().await;
            match self.requests.try_send(RefreshRequest::Scheduled) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    debug!("scheduled refresh skipped: previous cycle still in flight");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => break,
            }
        }
    }
}
