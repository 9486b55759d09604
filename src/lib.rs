//! Live football scores session.
//!
//! Polls the ESPN college football and NFL scoreboards on a fixed interval,
//! reconciles team names against the college top-25 poll, and publishes a
//! normalized snapshot of the games currently in progress.
//!
//! ```no_run
//! use gameday::{FootballApi, DEFAULT_POLL_INTERVAL};
//!
//! # async fn demo() {
//! let handle = gameday::start(FootballApi::new(), DEFAULT_POLL_INTERVAL);
//! let mut snapshots = handle.subscribe();
//! while snapshots.changed().await.is_ok() {
//!     let state = snapshots.borrow().clone();
//!     if state.is_live_day {
//!         for game in &state.games {
//!             println!("{} {} - {} {}", game.away.name, game.away.score,
//!                 game.home.score, game.home.name);
//!         }
//!     }
//! }
//! # }
//! ```

pub mod rankings;
pub mod refresher;
pub mod session;
pub mod worker;

pub use espn_api::client::{ApiError, ApiResult, FootballApi};
pub use espn_api::{DriveDirection, FieldSituation, Game, GameState, League, RankEntry, TeamSide};
pub use rankings::RankingIndex;
pub use refresher::PeriodicRefresher;
pub use session::{ScoreSession, ScoreboardSource, SessionState};
pub use worker::{RefreshRequest, SessionWorker};

use std::time::Duration;
use tokio::sync::{mpsc, watch};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to a running scores session — the entire consumer contract:
/// the published snapshot plus a manually-triggerable refresh.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    requests: mpsc::Sender<RefreshRequest>,
    snapshots: watch::Receiver<SessionState>,
}

impl SessionHandle {
    /// Trigger an immediate refresh. Dropped silently when one is already
    /// queued or in flight.
    pub fn refresh_now(&self) {
        if self.requests.try_send(RefreshRequest::Manual).is_err() {
            log::debug!("manual refresh skipped: one already in flight");
        }
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.snapshots.clone()
    }
}

/// Spawn the session worker and the periodic refresher on the current tokio
/// runtime. A startup refresh is issued immediately; thereafter the refresher
/// queues one every `poll_interval`.
pub fn start<S>(source: S, poll_interval: Duration) -> SessionHandle
where
    S: ScoreboardSource + Send + 'static,
{
    // Capacity 1: a full channel means a refresh is queued or running, and
    // further requests are skipped rather than piled up.
    let (request_tx, request_rx) = mpsc::channel(1);
    let (session, snapshots) = session::ScoreSession::new(source);

    tokio::spawn(SessionWorker::new(session, request_rx).run());
    tokio::spawn(PeriodicRefresher::new(request_tx.clone(), poll_interval).run());

    let _ = request_tx.try_send(RefreshRequest::Manual);

    SessionHandle {
        requests: request_tx,
        snapshots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espn_api::client::ApiResult;

    struct EmptySource;

    impl ScoreboardSource for EmptySource {
        async fn fetch_rankings(&self) -> ApiResult<Vec<RankEntry>> {
            Ok(Vec::new())
        }

        async fn fetch_scoreboard(&self, _league: League) -> ApiResult<Vec<Game>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn start_issues_a_startup_refresh() {
        let handle = start(EmptySource, Duration::from_secs(60));
        let mut snapshots = handle.subscribe();

        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                {
                    let snap = snapshots.borrow();
                    if !snap.is_loading && snap.last_updated.is_some() {
                        break;
                    }
                }
                snapshots.changed().await.expect("worker should stay alive");
            }
        })
        .await
        .expect("startup refresh should complete");

        let snap = handle.snapshot();
        assert!(snap.games.is_empty());
        assert!(!snap.is_live_day);
        assert!(snap.last_error.is_none());
    }

    #[tokio::test]
    async fn refresh_now_never_blocks() {
        let handle = start(EmptySource, Duration::from_secs(60));
        // Second and third calls land while the channel may be full; they
        // are skipped, not queued, and must not panic or block.
        handle.refresh_now();
        handle.refresh_now();
        handle.refresh_now();
    }
}
