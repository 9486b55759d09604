pub mod client;
pub mod espn;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// The two scoreboard feeds this client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    CollegeFootball,
    Nfl,
}

impl League {
    pub fn slug(self) -> &'static str {
        match self {
            League::CollegeFootball => "college-football",
            League::Nfl => "nfl",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Scheduled,
    InProgress,
    Final,
}

/// Point-in-time snapshot of one game. Rebuilt wholesale on every refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub id: String,
    pub home: TeamSide,
    pub away: TeamSide,
    pub clock_display: String,
    pub period: u8,
    pub is_halftime: bool,
    pub state: GameState,
    pub field_situation: Option<FieldSituation>,
}

impl Game {
    /// Halftime counts as live — the feed keeps `state == "in"` through the break.
    pub fn is_live(&self) -> bool {
        self.state == GameState::InProgress
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamSide {
    pub name: String, // "Ohio State Buckeyes"
    pub score: u32,
    pub logo: String,     // URL, or a placeholder glyph when the feed has none
    pub rank: Option<u8>, // 1–25, annotated from the rankings poll
    pub has_possession: bool,
}

/// Down-and-distance picture, present only while a down is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSituation {
    pub ball_position: String, // "OSU 35"
    pub line_to_gain: u8,
    pub down: u8,
    pub yards_to_go: u8,
    pub direction: DriveDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriveDirection {
    Left,
    #[default]
    Right,
}

/// One ranked team from the college poll.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub team_name: String,
    pub rank: u8,
}
