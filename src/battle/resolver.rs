//! Attack resolution
//!
//! The resolver mutates both territories in place and returns a report with
//! the dice and the branch taken. It performs no validation of its own.

use crate::battle::dice::Dice;
use crate::core::config::MIN_TROOPS;
use crate::territory::{Label, Territory};

/// Which side won the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Defender held (tie or higher roll); attacker lost one troop
    Repelled,
    /// Attacker rolled higher and moved `troops_moved` into the territory
    Conquered { troops_moved: u32 },
}

/// A territory as it stood before the dice were rolled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub name: Label,
    pub faction: Label,
    pub troops: u32,
}

impl Combatant {
    fn snapshot(territory: &Territory) -> Self {
        Self {
            name: territory.name().clone(),
            faction: territory.faction().clone(),
            troops: territory.troops(),
        }
    }
}

/// Everything a caller needs to narrate one attack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub attacker: Combatant,
    pub defender: Combatant,
    pub attack_roll: u8,
    pub defend_roll: u8,
    pub outcome: BattleOutcome,
}

impl BattleReport {
    pub fn attacker_won(&self) -> bool {
        matches!(self.outcome, BattleOutcome::Conquered { .. })
    }
}

/// Roll one die per side and resolve the attack
///
/// Preconditions (checked by the caller): distinct territories, different
/// factions, attacker holding more than one troop.
pub fn resolve_attack<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> BattleReport {
    let attack_roll = dice.roll();
    let defend_roll = dice.roll();
    apply_rolls(attacker, defender, attack_roll, defend_roll)
}

/// Apply a known pair of rolls to the two territories
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defend_roll: u8,
) -> BattleReport {
    let attacker_before = Combatant::snapshot(attacker);
    let defender_before = Combatant::snapshot(defender);

    let outcome = if attack_roll > defend_roll {
        let sent = troops_to_send(attacker.troops());
        attacker.set_troops(attacker.troops() - sent);
        defender.set_faction(attacker.faction().clone());
        // Previous garrison is discarded, not added
        defender.set_troops(sent);
        BattleOutcome::Conquered { troops_moved: sent }
    } else {
        attacker.set_troops(attacker.troops().saturating_sub(1).max(MIN_TROOPS));
        BattleOutcome::Repelled
    };

    tracing::debug!(
        attacker = %attacker_before.name,
        defender = %defender_before.name,
        attack_roll,
        defend_roll,
        ?outcome,
        "Battle resolved"
    );

    BattleReport {
        attacker: attacker_before,
        defender: defender_before,
        attack_roll,
        defend_roll,
        outcome,
    }
}

/// Troops that advance into a conquered territory
///
/// Half the attacking garrison, but always at least one and never so many
/// that the attacker is left empty.
pub fn troops_to_send(attacker_troops: u32) -> u32 {
    let mut sent = attacker_troops / 2;
    if sent < 1 {
        sent = 1;
    }
    if sent >= attacker_troops {
        sent = attacker_troops.saturating_sub(1);
    }
    sent
}
