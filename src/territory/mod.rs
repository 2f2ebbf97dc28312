//! Territories and the registry that owns them
//!
//! A territory is a named region held by a faction with a garrison of at
//! least one troop. The registry is the fixed-size map of all territories.

pub mod label;
pub mod registry;

pub use label::Label;
pub use registry::{FactionTally, Registry, ScenarioSource, TerritorySource};

use crate::core::config::{TerritorySpec, MIN_TROOPS};
use crate::core::error::{ConquestError, Result};

/// A named region with a controlling faction and a troop count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    name: Label,
    faction: Label,
    troops: u32,
}

impl Territory {
    /// Create a territory, rejecting garrisons below one troop
    pub fn new(name: Label, faction: Label, troops: i64) -> Result<Self> {
        let troops = validate_troops(troops)?;
        Ok(Self {
            name,
            faction,
            troops,
        })
    }

    /// Build from a scenario file entry
    pub fn from_spec(spec: &TerritorySpec) -> Result<Self> {
        Self::new(
            Label::name(&spec.name)?,
            Label::faction(&spec.faction)?,
            spec.troops,
        )
    }

    pub fn name(&self) -> &Label {
        &self.name
    }

    pub fn faction(&self) -> &Label {
        &self.faction
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    /// Whether this territory has a troop to spare for an attack
    pub fn can_attack(&self) -> bool {
        self.troops > MIN_TROOPS
    }

    pub fn is_allied_with(&self, other: &Territory) -> bool {
        self.faction == other.faction
    }

    pub(crate) fn set_troops(&mut self, troops: u32) {
        self.troops = troops.max(MIN_TROOPS);
    }

    pub(crate) fn set_faction(&mut self, faction: Label) {
        self.faction = faction;
    }
}

/// Check a raw troop count from input against the one-troop floor
pub fn validate_troops(troops: i64) -> Result<u32> {
    u32::try_from(troops)
        .ok()
        .filter(|&t| t >= MIN_TROOPS)
        .ok_or(ConquestError::InvalidTroops(troops))
}
