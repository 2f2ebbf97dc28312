//! Game setup - map size and territory entry

use std::io::{BufRead, Write};

use crate::core::config::{GameConfig, MIN_TERRITORIES};
use crate::core::error::{ConquestError, Result};
use crate::territory::{validate_troops, Label, Registry, Territory, TerritorySource};
use crate::ui::Prompter;

const COUNT_PROMPT: &str = "Quantos territorios deseja criar? (minimo 2): ";

/// Check the requested map size against the minimum
pub fn validate_territory_count(count: i64) -> Result<usize> {
    usize::try_from(count)
        .ok()
        .filter(|&c| c >= MIN_TERRITORIES)
        .ok_or(ConquestError::TooFewTerritories {
            count,
            min: MIN_TERRITORIES,
        })
}

/// Ask for the map size until a valid one is given
pub fn read_territory_count<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<usize> {
    loop {
        let count = prompter.read_integer(COUNT_PROMPT)?;
        match validate_territory_count(count) {
            Ok(count) => return Ok(count),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

/// Territory entry from the terminal, re-prompting each invalid field
pub struct ConsoleSource<'p, R, W> {
    prompter: &'p mut Prompter<R, W>,
}

impl<'p, R: BufRead, W: Write> ConsoleSource<'p, R, W> {
    pub fn new(prompter: &'p mut Prompter<R, W>) -> Self {
        Self { prompter }
    }

    fn read_label(&mut self, message: &str, build: fn(&str) -> Result<Label>) -> Result<Label> {
        loop {
            let line = self.prompter.read_line(message)?;
            match build(&line) {
                Ok(label) => return Ok(label),
                Err(e @ ConquestError::EmptyLabel { .. }) => self.prompter.say(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_troops(&mut self) -> Result<i64> {
        loop {
            let troops = self
                .prompter
                .read_integer("Quantidade de tropas (minimo 1): ")?;
            match validate_troops(troops) {
                Ok(_) => return Ok(troops),
                Err(e) => self.prompter.say(&e.to_string())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> TerritorySource for ConsoleSource<'_, R, W> {
    fn territory(&mut self, slot: usize) -> Result<Territory> {
        self.prompter.say(&format!("\nTerritorio {}", slot + 1))?;
        let name = self.read_label("Nome: ", Label::name)?;
        let faction = self.read_label("Cor do exercito: ", Label::faction)?;
        let troops = self.read_troops()?;
        Territory::new(name, faction, troops)
    }
}

/// Build the starting map from the scenario file, or interactively
pub fn setup_registry<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &GameConfig,
) -> Result<Registry> {
    if config.has_scenario() {
        tracing::info!(
            territories = config.territories.len(),
            "Loading map from scenario"
        );
        return Registry::from_scenario(&config.territories);
    }

    let count = read_territory_count(prompter)?;
    let mut registry = Registry::create(count)?;
    registry.populate(&mut ConsoleSource::new(prompter))?;
    debug_assert!(registry.is_populated());
    tracing::info!(territories = registry.capacity(), "Map ready");
    Ok(registry)
}
