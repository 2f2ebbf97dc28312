//! Fixed-size territory registry
//!
//! Storage is reserved once for the whole map, then each slot is filled in
//! order from a [`TerritorySource`]. Slots never move or disappear afterwards.

use crate::core::config::TerritorySpec;
use crate::core::error::{ConquestError, Result};
use crate::territory::{Label, Territory};

/// Supplies the territory for each registry slot during setup
///
/// Implementations own any retry behaviour; the registry only accepts
/// territories that [`Territory::new`] already validated.
pub trait TerritorySource {
    fn territory(&mut self, slot: usize) -> Result<Territory>;
}

/// Territories taken from a scenario file, in file order
pub struct ScenarioSource<'a> {
    specs: &'a [TerritorySpec],
}

impl<'a> ScenarioSource<'a> {
    pub fn new(specs: &'a [TerritorySpec]) -> Self {
        Self { specs }
    }
}

impl TerritorySource for ScenarioSource<'_> {
    fn territory(&mut self, slot: usize) -> Result<Territory> {
        let spec = self.specs.get(slot).ok_or_else(|| {
            ConquestError::Config(format!("scenario has no territory for slot {}", slot + 1))
        })?;
        Territory::from_spec(spec)
    }
}

/// Territory count and troop total held by one faction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionTally {
    pub faction: Label,
    pub territories: usize,
    pub troops: u64,
}

/// The ordered map of every territory in the game
#[derive(Debug, Clone, Default)]
pub struct Registry {
    territories: Vec<Territory>,
    slots: usize,
}

impl Registry {
    /// Reserve storage for exactly `count` territories
    ///
    /// Fails with [`ConquestError::Allocation`] when the memory cannot be
    /// obtained. The minimum map size is the caller's rule, not checked here.
    pub fn create(count: usize) -> Result<Self> {
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| ConquestError::Allocation { count })?;
        tracing::debug!(count, "Reserved territory registry");
        Ok(Self {
            territories,
            slots: count,
        })
    }

    /// Fill every empty slot from `source`, in slot order
    pub fn populate(&mut self, source: &mut impl TerritorySource) -> Result<()> {
        while self.territories.len() < self.slots {
            let slot = self.territories.len();
            let territory = source.territory(slot)?;
            tracing::info!(
                slot = slot + 1,
                name = %territory.name(),
                faction = %territory.faction(),
                troops = territory.troops(),
                "Registered territory"
            );
            self.territories.push(territory);
        }
        Ok(())
    }

    /// Create and populate a registry from a scenario list
    pub fn from_scenario(specs: &[TerritorySpec]) -> Result<Self> {
        let mut registry = Self::create(specs.len())?;
        registry.populate(&mut ScenarioSource::new(specs))?;
        Ok(registry)
    }

    /// Wrap already-built territories
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        let slots = territories.len();
        Self { territories, slots }
    }

    /// Number of slots the map was created with
    pub fn capacity(&self) -> usize {
        self.slots
    }

    /// Number of populated territories
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn is_populated(&self) -> bool {
        self.territories.len() == self.slots
    }

    pub fn get(&self, slot: usize) -> Option<&Territory> {
        self.territories.get(slot)
    }

    /// Mutable access to two distinct slots at once
    ///
    /// Returns `None` if the slots are equal or either is out of range.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if a == b || a >= len || b >= len {
            return None;
        }
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Per-faction totals, in the order factions first appear on the map
    pub fn faction_summary(&self) -> Vec<FactionTally> {
        let mut tallies: Vec<FactionTally> = Vec::new();
        for territory in &self.territories {
            match tallies.iter_mut().find(|t| &t.faction == territory.faction()) {
                Some(tally) => {
                    tally.territories += 1;
                    tally.troops += u64::from(territory.troops());
                }
                None => tallies.push(FactionTally {
                    faction: territory.faction().clone(),
                    territories: 1,
                    troops: u64::from(territory.troops()),
                }),
            }
        }
        tallies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn territory(name: &str, faction: &str, troops: i64) -> Territory {
        Territory::new(
            Label::name(name).unwrap(),
            Label::faction(faction).unwrap(),
            troops,
        )
        .unwrap()
    }

    struct FixedSource(Vec<Territory>);

    impl TerritorySource for FixedSource {
        fn territory(&mut self, slot: usize) -> Result<Territory> {
            Ok(self.0[slot].clone())
        }
    }

    #[test]
    fn test_create_two_slots() {
        let registry = Registry::create(2).unwrap();
        assert_eq!(registry.capacity(), 2);
        assert!(registry.is_empty());
        assert!(!registry.is_populated());
    }

    #[test]
    fn test_create_impossible_size_is_allocation_error() {
        let result = Registry::create(usize::MAX);
        assert!(matches!(result, Err(ConquestError::Allocation { .. })));
    }

    #[test]
    fn test_populate_fills_in_order() {
        let mut registry = Registry::create(3).unwrap();
        let mut source = FixedSource(vec![
            territory("A", "Red", 1),
            territory("B", "Blue", 2),
            territory("C", "Red", 3),
        ]);
        registry.populate(&mut source).unwrap();

        assert!(registry.is_populated());
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(1).unwrap().name().as_str(), "B");
        assert!(registry.get(3).is_none());
    }

    #[test]
    fn test_pair_mut_rejects_same_and_out_of_range() {
        let mut registry = Registry::from_territories(vec![
            territory("A", "Red", 1),
            territory("B", "Blue", 2),
        ]);
        assert!(registry.pair_mut(0, 0).is_none());
        assert!(registry.pair_mut(0, 2).is_none());
        assert!(registry.pair_mut(5, 1).is_none());
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut registry = Registry::from_territories(vec![
            territory("A", "Red", 1),
            territory("B", "Blue", 2),
            territory("C", "Green", 3),
        ]);

        let (first, second) = registry.pair_mut(2, 0).unwrap();
        assert_eq!(first.name().as_str(), "C");
        assert_eq!(second.name().as_str(), "A");

        let (first, second) = registry.pair_mut(0, 1).unwrap();
        assert_eq!(first.name().as_str(), "A");
        assert_eq!(second.name().as_str(), "B");
    }

    #[test]
    fn test_from_scenario() {
        let specs = vec![
            TerritorySpec {
                name: "Brasil".into(),
                faction: "Verde".into(),
                troops: 4,
            },
            TerritorySpec {
                name: "Chile".into(),
                faction: "Azul".into(),
                troops: 2,
            },
        ];
        let registry = Registry::from_scenario(&specs).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).unwrap().troops(), 4);
    }

    #[test]
    fn test_from_scenario_rejects_zero_troops() {
        let specs = vec![
            TerritorySpec {
                name: "Brasil".into(),
                faction: "Verde".into(),
                troops: 0,
            },
            TerritorySpec {
                name: "Chile".into(),
                faction: "Azul".into(),
                troops: 2,
            },
        ];
        assert!(matches!(
            Registry::from_scenario(&specs),
            Err(ConquestError::InvalidTroops(0))
        ));
    }

    #[test]
    fn test_faction_summary_first_seen_order() {
        let registry = Registry::from_territories(vec![
            territory("A", "Red", 3),
            territory("B", "Blue", 2),
            territory("C", "Red", 4),
        ]);
        let summary = registry.faction_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].faction.as_str(), "Red");
        assert_eq!(summary[0].territories, 2);
        assert_eq!(summary[0].troops, 7);
        assert_eq!(summary[1].faction.as_str(), "Blue");
        assert_eq!(summary[1].troops, 2);
    }
}
