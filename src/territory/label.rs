//! Bounded text labels for territory names and factions

use std::fmt;

use crate::core::config::{FACTION_MAX_LEN, NAME_MAX_LEN};
use crate::core::error::{ConquestError, Result};

/// Non-empty text no longer than its limit
///
/// Input is trimmed, then truncated to the limit in characters so the map
/// table stays aligned however long the player typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Build a label for `field`, keeping at most `max_len` characters
    pub fn bounded(text: &str, max_len: usize, field: &'static str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ConquestError::EmptyLabel { field });
        }
        let kept: String = trimmed.chars().take(max_len).collect();
        // Truncation can leave trailing spaces from the middle of the input
        Ok(Self(kept.trim_end().to_string()))
    }

    pub fn name(text: &str) -> Result<Self> {
        Self::bounded(text, NAME_MAX_LEN, "nome")
    }

    pub fn faction(text: &str) -> Result<Self> {
        Self::bounded(text, FACTION_MAX_LEN, "cor")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
