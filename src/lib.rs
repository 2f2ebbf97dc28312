//! Conquest - text-based territorial conquest game
//!
//! Territories held by factions attack each other with a single die per side.
//! The attacker conquers only on a strictly higher roll, moving half its
//! garrison into the captured territory.

pub mod battle;
pub mod command;
pub mod core;
pub mod session;
pub mod territory;
pub mod ui;
