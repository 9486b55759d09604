use crate::rankings::RankingIndex;
use chrono::{DateTime, Utc};
use espn_api::client::{ApiResult, FootballApi};
use espn_api::{Game, League, RankEntry};
use log::{error, warn};
use std::future::Future;
use tokio::sync::watch;

/// Seam between the session and the feed transport, so tests can drive a
/// full refresh cycle without the network.
pub trait ScoreboardSource {
    fn fetch_rankings(&self) -> impl Future<Output = ApiResult<Vec<RankEntry>>> + Send;
    fn fetch_scoreboard(&self, league: League)
    -> impl Future<Output = ApiResult<Vec<Game>>> + Send;
}

impl ScoreboardSource for FootballApi {
    async fn fetch_rankings(&self) -> ApiResult<Vec<RankEntry>> {
        FootballApi::fetch_rankings(self).await
    }

    async fn fetch_scoreboard(&self, league: League) -> ApiResult<Vec<Game>> {
        FootballApi::fetch_scoreboard(self, league).await
    }
}

/// The published view of the session. Replaced wholesale on every refresh;
/// consumers receive read-only snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// In-progress games only, college events first, then NFL.
    pub games: Vec<Game>,
    /// Always `games.len() > 0` after a completed refresh.
    pub is_live_day: bool,
    pub is_loading: bool,
    pub last_error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Owns the session state and the cached ranking index, and runs refresh
/// cycles. State mutates only inside `refresh`; everything observable goes
/// out through the watch channel as one complete snapshot.
pub struct ScoreSession<S> {
    source: S,
    rankings: RankingIndex,
    state: SessionState,
    publisher: watch::Sender<SessionState>,
}

impl<S: ScoreboardSource> ScoreSession<S> {
    pub fn new(source: S) -> (Self, watch::Receiver<SessionState>) {
        let (publisher, snapshots) = watch::channel(SessionState::default());
        (
            Self {
                source,
                rankings: RankingIndex::default(),
                state: SessionState::default(),
                publisher,
            },
            snapshots,
        )
    }

    pub fn ranking_index(&self) -> &RankingIndex {
        &self.rankings
    }

    /// One complete refresh cycle: rankings (cached after the first success),
    /// both scoreboards fanned out together, filter to live, annotate ranks,
    /// publish. A scoreboard failure aborts the cycle and clears the list —
    /// there is no partial-result mode.
    pub async fn refresh(&mut self) -> SessionState {
        self.state.is_loading = true;
        self.state.last_error = None;
        self.publish();

        // Rankings are best-effort enrichment: retried each cycle until the
        // first non-empty index, then cached for the process lifetime. A
        // failure here never fails the cycle — teams just stay unranked.
        if self.rankings.is_empty() {
            match self.source.fetch_rankings().await {
                Ok(entries) => self.rankings = RankingIndex::build(&entries),
                Err(e) => warn!("rankings fetch failed, teams stay unranked: {e}"),
            }
        }

        let (college, nfl) = tokio::join!(
            self.source.fetch_scoreboard(League::CollegeFootball),
            self.source.fetch_scoreboard(League::Nfl),
        );

        match (college, nfl) {
            (Ok(college), Ok(nfl)) => {
                let mut games: Vec<Game> = college
                    .into_iter()
                    .chain(nfl)
                    .filter(Game::is_live)
                    .collect();
                for game in &mut games {
                    game.home.rank = self.rankings.resolve(&game.home.name);
                    game.away.rank = self.rankings.resolve(&game.away.name);
                }
                self.state.is_live_day = !games.is_empty();
                self.state.games = games;
                self.state.last_updated = Some(Utc::now());
            }
            (Err(e), _) | (_, Err(e)) => {
                error!("scoreboard refresh failed: {e}");
                self.state.games.clear();
                self.state.is_live_day = false;
                self.state.last_error = Some(e.to_string());
            }
        }

        self.state.is_loading = false;
        self.publish();
        self.state.clone()
    }

    // Published fields are replaced as one unit so observers never see a
    // torn snapshot.
    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }
}
