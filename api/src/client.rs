use crate::espn::{EspnCompetitor, EspnEvent, EspnSituation, RankingsResponse, ScoreboardResponse};
use crate::{DriveDirection, FieldSituation, Game, GameState, League, RankEntry, TeamSide};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_FOOTBALL: &str = "https://site.api.espn.com/apis/site/v2/sports/football";
const POLL_SIZE: usize = 25;
const PLACEHOLDER_LOGO: &str = "🏈";

/// Football scoreboard + rankings client backed by ESPN's public endpoints.
#[derive(Debug, Clone)]
pub struct FootballApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for FootballApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("gameday/0.1 (live scores session)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_FOOTBALL.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl FootballApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host — used by HTTP-level tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the current college top-25 poll (the first poll ESPN returns).
    /// Entries missing a rank or a team name are skipped.
    pub async fn fetch_rankings(&self) -> ApiResult<Vec<RankEntry>> {
        let url = format!("{}/college-football/rankings", self.base_url);
        let raw: RankingsResponse = self.get(&url).await?;
        let ranks = raw
            .rankings
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|poll| poll.ranks)
            .unwrap_or_default();
        Ok(ranks
            .into_iter()
            .filter_map(|entry| {
                let rank = entry.current.filter(|r| (1..=POLL_SIZE as u8).contains(r))?;
                let team_name = entry.team.and_then(|t| t.display_name)?;
                Some(RankEntry { team_name, rank })
            })
            .take(POLL_SIZE)
            .collect())
    }

    /// Fetch one league's scoreboard. Returns every event ESPN reports for
    /// the day; callers filter by state.
    pub async fn fetch_scoreboard(&self, league: League) -> ApiResult<Vec<Game>> {
        let url = format!("{}/{}/scoreboard", self.base_url, league.slug());
        let raw: ScoreboardResponse = self.get(&url).await?;
        Ok(raw
            .events
            .unwrap_or_default()
            .iter()
            .filter_map(map_event_to_game)
            .collect())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

/// Map a scoreboard event to a Game. Events missing their competition or
/// either the home or away competitor are malformed and excluded rather than
/// crashing the refresh.
fn map_event_to_game(event: &EspnEvent) -> Option<Game> {
    let competition = event.competitions.as_deref().unwrap_or_default().first()?;
    let competitors = competition.competitors.as_deref().unwrap_or_default();

    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))?;
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))?;

    let situation = competition.situation.as_ref();
    let possession = situation.and_then(|s| s.possession.as_deref());

    let status = event.status.as_ref();
    let state = status
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.state.as_deref())
        .map(parse_state)
        .unwrap_or_default();
    let is_halftime = status
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.name.as_deref())
        == Some("STATUS_HALFTIME");

    let home_side = map_team_side(home, possession);
    let away_side = map_team_side(away, possession);
    let field_situation =
        situation.and_then(|s| map_situation(s, home_side.has_possession));

    Some(Game {
        id: event.id.clone().unwrap_or_default(),
        home: home_side,
        away: away_side,
        clock_display: status
            .and_then(|s| s.display_clock.clone())
            .unwrap_or_else(|| "0:00".to_owned()),
        period: status.and_then(|s| s.period).unwrap_or(1),
        is_halftime,
        state,
        field_situation,
    })
}

fn map_team_side(c: &EspnCompetitor, possession: Option<&str>) -> TeamSide {
    TeamSide {
        name: c
            .team
            .as_ref()
            .and_then(|t| t.display_name.clone())
            .unwrap_or_else(|| "Unknown".to_owned()),
        score: c.score.as_deref().and_then(|s| s.parse().ok()).unwrap_or(0),
        logo: c
            .team
            .as_ref()
            .and_then(|t| t.logo.clone())
            .unwrap_or_else(|| PLACEHOLDER_LOGO.to_owned()),
        rank: None, // annotated later against the rankings index
        has_possession: possession.is_some() && possession == c.id.as_deref(),
    }
}

/// Down-and-distance only exists while a down is active. When the feed omits
/// an explicit direction, the side with the ball decides it: home drives
/// toward the left end zone, away toward the right.
fn map_situation(s: &EspnSituation, home_has_possession: bool) -> Option<FieldSituation> {
    let down = s.down.filter(|d| *d >= 1)?;
    let direction = match s.direction.as_deref() {
        Some("left") => DriveDirection::Left,
        Some("right") => DriveDirection::Right,
        _ if home_has_possession => DriveDirection::Left,
        _ => DriveDirection::Right,
    };
    Some(FieldSituation {
        ball_position: s.location.clone().unwrap_or_default(),
        line_to_gain: s.line_to_gain.unwrap_or(0),
        down,
        yards_to_go: s.distance.unwrap_or(0),
        direction,
    })
}

fn parse_state(s: &str) -> GameState {
    match s {
        "in" => GameState::InProgress,
        "post" => GameState::Final,
        _ => GameState::Scheduled,
    }
}
