//! Game configuration and rule constants
//!
//! The constants mirror the board game's fixed limits. `GameConfig` is the
//! optional TOML file that can pin the dice seed and pre-populate the map.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{ConquestError, Result};

/// Longest territory name kept, in characters
pub const NAME_MAX_LEN: usize = 29;

/// Longest faction label kept, in characters
pub const FACTION_MAX_LEN: usize = 9;

/// A game needs at least this many territories
pub const MIN_TERRITORIES: usize = 2;

/// Every territory holds at least this many troops
pub const MIN_TROOPS: u32 = 1;

/// Faces on each battle die
pub const DIE_FACES: u8 = 6;

/// One pre-defined territory in a scenario file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritorySpec {
    pub name: String,
    pub faction: String,
    pub troops: i64,
}

/// Contents of the optional `--config` file
///
/// ```toml
/// seed = 42
///
/// [[territories]]
/// name = "Brasil"
/// faction = "Verde"
/// troops = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed dice seed; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Starting map; interactive setup runs when empty
    #[serde(default)]
    pub territories: Vec<TerritorySpec>,
}

impl GameConfig {
    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConquestError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::parse(&contents)
    }

    /// Parse config from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        if !config.territories.is_empty() && config.territories.len() < MIN_TERRITORIES {
            return Err(ConquestError::Config(format!(
                "scenario lists {} territories, at least {} required",
                config.territories.len(),
                MIN_TERRITORIES
            )));
        }
        Ok(config)
    }

    pub fn has_scenario(&self) -> bool {
        !self.territories.is_empty()
    }
}
