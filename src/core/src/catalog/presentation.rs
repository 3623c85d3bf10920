use crate::catalog::manager::{BoosterEffect, LinkUpPlay, Manager, PlaystyleKey};
use chrono::NaiveDate;
use serde::Serialize;

/// Display class for a proficiency value. Thresholds are fixed styling
/// boundaries, unrelated to the filter threshold semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyTier {
    High,
    Medium,
    Low,
}

impl ProficiencyTier {
    pub fn classify(value: u8) -> ProficiencyTier {
        if value >= 80 {
            ProficiencyTier::High
        } else if value >= 70 {
            ProficiencyTier::Medium
        } else {
            ProficiencyTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaystyleView {
    pub key: PlaystyleKey,
    pub label: &'static str,
    pub value: u8,
    pub tier: ProficiencyTier,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpRoleView {
    pub playing_style: String,
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpView {
    pub name: String,
    pub center_piece: LinkUpRoleView,
    pub key_man: LinkUpRoleView,
}

/// Display-ready projection of one manager record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerCard {
    pub name: String,
    pub photo: String,
    pub release_date: String,
    pub boosters: Vec<BoosterEffect>,
    pub playstyles: Vec<PlaystyleView>,
    /// `None` renders as the explicit "No Link-Up Play" marker.
    pub link_up: Option<LinkUpView>,
}

/// Maps a record to its card. Total: well-formed records always produce a
/// complete card.
pub fn present(manager: &Manager) -> ManagerCard {
    ManagerCard {
        name: manager.name.clone(),
        photo: manager.photo.clone(),
        release_date: format_release_date(manager.release_date),
        boosters: manager.booster_effects.clone(),
        playstyles: PlaystyleKey::ALL
            .into_iter()
            .map(|key| {
                let value = manager.proficiency.get(key);

                PlaystyleView {
                    key,
                    label: key.label(),
                    value,
                    tier: ProficiencyTier::classify(value),
                }
            })
            .collect(),
        link_up: manager.link_up_play.as_ref().map(link_up_view),
    }
}

/// en-US short form, e.g. "Jan 5, 2024". Absent dates display as "Unknown".
pub fn format_release_date(release_date: Option<NaiveDate>) -> String {
    match release_date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Unknown".to_string(),
    }
}

fn link_up_view(link_up: &LinkUpPlay) -> LinkUpView {
    LinkUpView {
        name: link_up.name.clone(),
        center_piece: LinkUpRoleView {
            playing_style: link_up.center_piece.playing_style.clone(),
            positions: link_up.center_piece.positions.clone(),
        },
        key_man: LinkUpRoleView {
            playing_style: link_up.key_man.playing_style.clone(),
            positions: link_up.key_man.positions.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::manager::{LinkUpRole, PlaystyleProficiency};

    fn manager(release_date: Option<NaiveDate>) -> Manager {
        Manager {
            name: "C. Ancelotti".to_string(),
            photo: "img/ancelotti.png".to_string(),
            release_date,
            proficiency: PlaystyleProficiency {
                possession_game: 85,
                long_ball_counter: 79,
                quick_counter: 70,
                long_ball: 69,
                out_wide: 64,
            },
            booster_effects: vec![BoosterEffect {
                stat: "Passing".to_string(),
                value: 2.0,
            }],
            link_up_play: None,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ProficiencyTier::classify(100), ProficiencyTier::High);
        assert_eq!(ProficiencyTier::classify(80), ProficiencyTier::High);
        assert_eq!(ProficiencyTier::classify(79), ProficiencyTier::Medium);
        assert_eq!(ProficiencyTier::classify(70), ProficiencyTier::Medium);
        assert_eq!(ProficiencyTier::classify(69), ProficiencyTier::Low);
        assert_eq!(ProficiencyTier::classify(0), ProficiencyTier::Low);
    }

    #[test]
    fn test_format_release_date() {
        assert_eq!(
            format_release_date(NaiveDate::from_ymd_opt(2024, 1, 5)),
            "Jan 5, 2024"
        );
        assert_eq!(
            format_release_date(NaiveDate::from_ymd_opt(2020, 12, 25)),
            "Dec 25, 2020"
        );
        assert_eq!(format_release_date(None), "Unknown");
    }

    #[test]
    fn test_card_covers_all_playstyles_in_fixed_order() {
        let card = present(&manager(NaiveDate::from_ymd_opt(2024, 1, 5)));

        let keys: Vec<PlaystyleKey> = card.playstyles.iter().map(|p| p.key).collect();
        assert_eq!(keys, PlaystyleKey::ALL.to_vec());

        assert_eq!(card.playstyles[0].label, "Possession Game");
        assert_eq!(card.playstyles[0].value, 85);
        assert_eq!(card.playstyles[0].tier, ProficiencyTier::High);
        assert_eq!(card.playstyles[1].tier, ProficiencyTier::Medium);
        assert_eq!(card.playstyles[3].tier, ProficiencyTier::Low);
    }

    #[test]
    fn test_card_without_link_up_has_none_marker() {
        let card = present(&manager(None));

        assert_eq!(card.release_date, "Unknown");
        assert!(card.link_up.is_none());
    }

    #[test]
    fn test_card_link_up_carries_both_roles() {
        let mut record = manager(None);
        record.link_up_play = Some(LinkUpPlay {
            name: "Tiki-Taka".to_string(),
            center_piece: LinkUpRole {
                playing_style: "Creative Playmaker".to_string(),
                positions: vec!["AMF".to_string(), "CMF".to_string()],
            },
            key_man: LinkUpRole {
                playing_style: "Goal Poacher".to_string(),
                positions: vec!["CF".to_string()],
            },
        });

        let link_up = present(&record).link_up.expect("link-up view missing");

        assert_eq!(link_up.name, "Tiki-Taka");
        assert_eq!(link_up.center_piece.playing_style, "Creative Playmaker");
        assert_eq!(link_up.center_piece.positions, vec!["AMF", "CMF"]);
        assert_eq!(link_up.key_man.positions, vec!["CF"]);
    }
}
