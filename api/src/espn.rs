/// ESPN API raw wire types — serde shapes for deserializing ESPN responses.
/// These map to our clean domain types via the mapping fns in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
    pub period: Option<u8>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub state: Option<String>, // "pre" | "in" | "post"
    pub name: Option<String>,  // "STATUS_SCHEDULED", "STATUS_HALFTIME", "STATUS_FINAL"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub situation: Option<EspnSituation>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    pub id: Option<String>,
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<String>, // ESPN sends scores as strings
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub logo: Option<String>,
}

/// Down-and-distance sub-object. Only carried while a drive is underway;
/// ESPN clears `down` between possessions.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnSituation {
    pub possession: Option<String>, // competitor id of the side with the ball
    pub location: Option<String>,   // "OSU 35"
    #[serde(rename = "lineToGain")]
    pub line_to_gain: Option<u8>,
    pub down: Option<u8>,
    pub distance: Option<u8>,
    pub direction: Option<String>, // "left" | "right"
}

// ---------------------------------------------------------------------------
// Rankings  (college poll)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RankingsResponse {
    pub rankings: Option<Vec<EspnPoll>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnPoll {
    pub name: Option<String>, // "AP Top 25"
    pub ranks: Option<Vec<EspnPollEntry>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnPollEntry {
    pub current: Option<u8>,
    pub team: Option<EspnRankedTeam>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRankedTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}
