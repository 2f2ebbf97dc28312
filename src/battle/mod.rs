//! Battle system - one dice roll per attack
//!
//! Each side rolls a single die. The attacker must roll strictly higher to
//! conquer; ties go to the defender. The resolver trusts its caller to have
//! validated the pair (see [`crate::command::validate_attack`]).

pub mod dice;
pub mod resolver;

pub use dice::{Dice, RandomDice, ScriptedDice};
pub use resolver::{apply_rolls, resolve_attack, troops_to_send, BattleOutcome, BattleReport, Combatant};
