//! Command execution - validates attack orders and runs the resolver

use crate::battle::{resolve_attack, BattleReport, Dice};
use crate::command::AttackOrder;
use crate::core::error::{AttackRejection, Result};
use crate::territory::Registry;

/// Executes validated commands against the registry
pub struct CommandExecutor;

impl CommandExecutor {
    /// Validate `order` and, if accepted, resolve the attack
    ///
    /// A rejected order leaves the registry untouched.
    pub fn attack<D: Dice + ?Sized>(
        registry: &mut Registry,
        order: AttackOrder,
        dice: &mut D,
    ) -> Result<BattleReport> {
        let (attacker_slot, defender_slot) = validate_attack(registry, order)?;
        let (attacker, defender) = registry
            .pair_mut(attacker_slot, defender_slot)
            .ok_or(AttackRejection::OutOfRange)?;
        Ok(resolve_attack(attacker, defender, dice))
    }
}

/// Check an attack order, returning the 0-based slots of both territories
///
/// Checks run in the order the player is told about them: range, self
/// attack, same faction, then attacker strength.
pub fn validate_attack(
    registry: &Registry,
    order: AttackOrder,
) -> std::result::Result<(usize, usize), AttackRejection> {
    let attacker_slot = to_slot(order.attacker, registry.len())?;
    let defender_slot = to_slot(order.defender, registry.len())?;

    if attacker_slot == defender_slot {
        return Err(AttackRejection::SelfAttack);
    }

    let attacker = registry
        .get(attacker_slot)
        .ok_or(AttackRejection::OutOfRange)?;
    let defender = registry
        .get(defender_slot)
        .ok_or(AttackRejection::OutOfRange)?;

    if attacker.is_allied_with(defender) {
        return Err(AttackRejection::SameFaction);
    }
    if !attacker.can_attack() {
        return Err(AttackRejection::InsufficientTroops);
    }

    Ok((attacker_slot, defender_slot))
}

/// Translate a 1-based map index into a slot
fn to_slot(index: i64, len: usize) -> std::result::Result<usize, AttackRejection> {
    usize::try_from(index)
        .ok()
        .filter(|&i| (1..=len).contains(&i))
        .map(|i| i - 1)
        .ok_or(AttackRejection::OutOfRange)
}
