//! Player commands
//!
//! Menu input -> MenuChoice -> AttackOrder -> validate_attack -> resolver

pub mod executor;

pub use executor::{validate_attack, CommandExecutor};

/// Options on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    Quit,
}

impl MenuChoice {
    pub fn from_input(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Attack),
            0 => Some(Self::Quit),
            _ => None,
        }
    }
}

/// An attack as typed by the player, using 1-based map indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOrder {
    pub attacker: i64,
    pub defender: i64,
}

impl AttackOrder {
    pub fn new(attacker: i64, defender: i64) -> Self {
        Self { attacker, defender }
    }
}
