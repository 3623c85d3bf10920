use chrono::NaiveDate;
use core::{BoosterEffect, LinkUpPlay, LinkUpRole, Manager, PlaystyleProficiency};
use log::info;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;

const STATIC_MANAGERS_JSON: &str = include_str!("../data/managers.json");

/// Environment override: points at an external managers JSON file to load
/// instead of the embedded dataset.
const DATA_PATH_ENV: &str = "MANAGERS_DATA";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerEntity {
    pub name: String,
    pub photo: String,
    pub release_date: Option<String>,
    pub team_playstyle_proficiency: PlaystyleProficiencyEntity,
    pub booster_effects: Vec<BoosterEffectEntity>,
    pub link_up_play: Option<LinkUpPlayEntity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaystyleProficiencyEntity {
    pub possession_game: u8,
    pub long_ball_counter: u8,
    pub quick_counter: u8,
    pub long_ball: u8,
    pub out_wide: u8,
}

#[derive(Deserialize)]
pub struct BoosterEffectEntity {
    pub stat: String,
    pub value: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpPlayEntity {
    pub name: String,
    pub center_piece: LinkUpRoleEntity,
    pub key_man: LinkUpRoleEntity,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkUpRoleEntity {
    pub playing_style: String,
    pub positions: Vec<String>,
}

#[derive(Debug)]
pub enum LoadError {
    Io(String, std::io::Error),
    Parse(serde_json::Error),
    InvalidDate { manager: String, value: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, err) => write!(f, "cannot read dataset '{}': {}", path, err),
            LoadError::Parse(err) => write!(f, "managers dataset is not valid JSON: {}", err),
            LoadError::InvalidDate { manager, value } => {
                write!(f, "manager '{}' has invalid release date '{}'", manager, value)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(_, err) => Some(err),
            LoadError::Parse(err) => Some(err),
            LoadError::InvalidDate { .. } => None,
        }
    }
}

pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads the manager dataset: the embedded JSON by default, or the file
    /// named by `MANAGERS_DATA` when set.
    pub fn load() -> Result<Vec<Manager>, LoadError> {
        let managers = match env::var(DATA_PATH_ENV) {
            Ok(path) => {
                info!("loading managers dataset from {}", path);

                let raw = fs::read_to_string(&path).map_err(|err| LoadError::Io(path, err))?;
                Self::parse(&raw)?
            }
            Err(_) => Self::parse(STATIC_MANAGERS_JSON)?,
        };

        info!("managers dataset: {} records", managers.len());

        Ok(managers)
    }

    pub fn parse(raw: &str) -> Result<Vec<Manager>, LoadError> {
        let entities: Vec<ManagerEntity> =
            serde_json::from_str(raw).map_err(LoadError::Parse)?;

        entities.into_iter().map(ManagerEntity::into_manager).collect()
    }
}

impl ManagerEntity {
    fn into_manager(self) -> Result<Manager, LoadError> {
        let release_date = match self.release_date {
            Some(value) => {
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                    LoadError::InvalidDate {
                        manager: self.name.clone(),
                        value,
                    }
                })?;

                Some(date)
            }
            None => None,
        };

        Ok(Manager {
            name: self.name,
            photo: self.photo,
            release_date,
            proficiency: PlaystyleProficiency {
                possession_game: self.team_playstyle_proficiency.possession_game,
                long_ball_counter: self.team_playstyle_proficiency.long_ball_counter,
                quick_counter: self.team_playstyle_proficiency.quick_counter,
                long_ball: self.team_playstyle_proficiency.long_ball,
                out_wide: self.team_playstyle_proficiency.out_wide,
            },
            booster_effects: self
                .booster_effects
                .into_iter()
                .map(|effect| BoosterEffect {
                    stat: effect.stat,
                    value: effect.value,
                })
                .collect(),
            link_up_play: self.link_up_play.map(|link_up| LinkUpPlay {
                name: link_up.name,
                center_piece: LinkUpRole {
                    playing_style: link_up.center_piece.playing_style,
                    positions: link_up.center_piece.positions,
                },
                key_man: LinkUpRole {
                    playing_style: link_up.key_man.playing_style,
                    positions: link_up.key_man.positions,
                },
            }),
        })
    }
}
