pub mod config;
pub mod error;

pub use error::{AttackRejection, ConquestError, Result};
