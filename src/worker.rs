use crate::session::{ScoreSession, ScoreboardSource};
use log::debug;
use tokio::sync::mpsc;

/// Why a refresh was requested. Only affects logging; both run the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRequest {
    Scheduled,
    Manual,
}

/// Drains refresh requests and runs cycles strictly one at a time. Together
/// with the capacity-1 request channel this is the single-flight guard: a
/// tick arriving mid-cycle fails to queue and is skipped, so overlapping
/// cycles can never interleave writes to the session state.
pub struct SessionWorker<S> {
    session: ScoreSession<S>,
    requests: mpsc::Receiver<RefreshRequest>,
}

impl<S: ScoreboardSource> SessionWorker<S> {
    pub fn new(session: ScoreSession<S>, requests: mpsc::Receiver<RefreshRequest>) -> Self {
        Self { session, requests }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            debug!("refresh cycle start ({request:?})");
            let state = self.session.refresh().await;
            match &state.last_error {
                Some(e) => debug!("refresh cycle failed: {e}"),
                None => debug!("refresh cycle done: {} live games", state.games.len()),
            }
        }
    }
}
