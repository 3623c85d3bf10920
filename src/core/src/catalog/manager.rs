use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the five fixed team playstyles a manager is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaystyleKey {
    PossessionGame,
    LongBallCounter,
    QuickCounter,
    LongBall,
    OutWide,
}

impl PlaystyleKey {
    pub const ALL: [PlaystyleKey; 5] = [
        PlaystyleKey::PossessionGame,
        PlaystyleKey::LongBallCounter,
        PlaystyleKey::QuickCounter,
        PlaystyleKey::LongBall,
        PlaystyleKey::OutWide,
    ];

    /// Wire form used by the dataset and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaystyleKey::PossessionGame => "possessionGame",
            PlaystyleKey::LongBallCounter => "longBallCounter",
            PlaystyleKey::QuickCounter => "quickCounter",
            PlaystyleKey::LongBall => "longBall",
            PlaystyleKey::OutWide => "outWide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaystyleKey::PossessionGame => "Possession Game",
            PlaystyleKey::LongBallCounter => "Long Ball Counter",
            PlaystyleKey::QuickCounter => "Quick Counter",
            PlaystyleKey::LongBall => "Long Ball",
            PlaystyleKey::OutWide => "Out Wide",
        }
    }

    pub fn from_str(value: &str) -> Option<PlaystyleKey> {
        PlaystyleKey::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// Proficiency scores for all five playstyles. Every manager record carries
/// the full set, so this is a closed struct rather than an open map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaystyleProficiency {
    pub possession_game: u8,
    pub long_ball_counter: u8,
    pub quick_counter: u8,
    pub long_ball: u8,
    pub out_wide: u8,
}

impl PlaystyleProficiency {
    pub fn get(&self, key: PlaystyleKey) -> u8 {
        match key {
            PlaystyleKey::PossessionGame => self.possession_game,
            PlaystyleKey::LongBallCounter => self.long_ball_counter,
            PlaystyleKey::QuickCounter => self.quick_counter,
            PlaystyleKey::LongBall => self.long_ball,
            PlaystyleKey::OutWide => self.out_wide,
        }
    }
}

/// A named stat bonus the manager grants. Stat names are free-form text and
/// are not related to the playstyle enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterEffect {
    pub stat: String,
    pub value: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpRole {
    pub playing_style: String,
    pub positions: Vec<String>,
}

/// Optional secondary tactic. Either fully present or fully absent on a
/// manager, never partial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpPlay {
    pub name: String,
    pub center_piece: LinkUpRole,
    pub key_man: LinkUpRole,
}

/// A manager record as loaded from the dataset. Immutable after load.
#[derive(Debug, Clone)]
pub struct Manager {
    pub name: String,
    pub photo: String,
    /// `None` is a valid state: unknown release, ordered before every
    /// dated record.
    pub release_date: Option<NaiveDate>,
    pub proficiency: PlaystyleProficiency,
    pub booster_effects: Vec<BoosterEffect>,
    pub link_up_play: Option<LinkUpPlay>,
}
