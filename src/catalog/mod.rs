//! Enclosure Catalog
//!
//! Static reference data for the planner: the animal trait table and the
//! enclosure inventory. A `Catalog` is validated once at construction and is
//! read-only afterwards, so it can be shared freely between threads.
//!
//! ## Architecture
//! - `biome.rs` - Biome tags and tag sets
//! - `species.rs` - AnimalTrait records, special rules, trait table
//! - `enclosure.rs` - Enclosure and occupant records
//! - `builtin.rs` - The compiled-in zoo dataset

pub mod biome;
pub mod species;
pub mod enclosure;
pub mod builtin;

pub use biome::{Biome, BiomeSet};
pub use species::{AnimalTrait, SpecialRule, TraitTable};
pub use enclosure::{Enclosure, Occupant};

use crate::error::CatalogError;
use rustc_hash::FxHashSet;

/// Validated enclosure inventory plus trait table
#[derive(Debug, Clone)]
pub struct Catalog {
    traits: TraitTable,
    enclosures: Vec<Enclosure>,
}

impl Catalog {
    /// Build a catalog, checking referential integrity.
    ///
    /// Occupant species given by alias are rewritten to their canonical name
    /// so later comparisons are plain string equality. Enclosures already
    /// over capacity are accepted but logged.
    pub fn new(traits: Vec<AnimalTrait>, enclosures: Vec<Enclosure>) -> Result<Self, CatalogError> {
        let traits = TraitTable::new(traits)?;
        let mut seen_ids = FxHashSet::default();
        let mut checked = Vec::with_capacity(enclosures.len());

        for mut enclosure in enclosures {
            if !seen_ids.insert(enclosure.id) {
                return Err(CatalogError::DuplicateEnclosureId { id: enclosure.id });
            }
            if enclosure.capacity == 0 {
                return Err(CatalogError::ZeroCapacity { id: enclosure.id });
            }
            if enclosure.biomes.is_empty() {
                return Err(CatalogError::EmptyEnclosureBiomes { id: enclosure.id });
            }

            let mut occupied: u64 = 0;
            for occupant in enclosure.occupants.iter_mut() {
                if occupant.count == 0 {
                    return Err(CatalogError::ZeroCount {
                        id: enclosure.id,
                        species: occupant.species.clone(),
                    });
                }
                let animal = traits.get(&occupant.species).ok_or_else(|| {
                    CatalogError::UnknownOccupantSpecies {
                        id: enclosure.id,
                        species: occupant.species.clone(),
                    }
                })?;
                occupied += u64::from(occupant.count) * u64::from(animal.size);
                occupant.species = animal.species.clone();
            }

            if occupied > u64::from(enclosure.capacity) {
                tracing::warn!(
                    "Enclosure {} holds {} space units but has capacity {}",
                    enclosure.id, occupied, enclosure.capacity
                );
            }

            checked.push(enclosure);
        }

        Ok(Self {
            traits,
            enclosures: checked,
        })
    }

    /// The compiled-in zoo
    pub fn builtin() -> Result<Self, CatalogError> {
        builtin::zoo()
    }

    pub fn traits(&self) -> &TraitTable {
        &self.traits
    }

    /// Look up a species by canonical name or alias
    pub fn species(&self, name: &str) -> Option<&AnimalTrait> {
        self.traits.get(name)
    }

    /// Enclosures in catalog order
    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn enclosure(&self, id: u32) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lion() -> AnimalTrait {
        AnimalTrait::new("LION", 3, BiomeSet::of(&[Biome::Savanna]), true).with_alias("LEAO")
    }

    #[test]
    fn test_alias_occupants_are_canonicalized() {
        let catalog = Catalog::new(
            vec![lion()],
            vec![Enclosure::new(5, BiomeSet::of(&[Biome::Savanna]), 9).with_occupant("LEAO", 1)],
        )
        .unwrap();

        let e = catalog.enclosure(5).unwrap();
        assert_eq!(e.occupants[0].species, "LION");
    }

    #[test]
    fn test_unknown_occupant_rejected() {
        let err = Catalog::new(
            vec![lion()],
            vec![Enclosure::new(1, BiomeSet::of(&[Biome::Savanna]), 9).with_occupant("UNICORN", 1)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownOccupantSpecies { id: 1, .. }));
    }

    #[test]
    fn test_over_capacity_enclosure_is_accepted() {
        // Two lions need 6 units in a capacity-2 enclosure
        let catalog = Catalog::new(
            vec![lion()],
            vec![Enclosure::new(1, BiomeSet::of(&[Biome::Savanna]), 2).with_occupant("LION", 2)],
        )
        .unwrap();
        assert_eq!(catalog.enclosures().len(), 1);

        let planner = crate::planner::Planner::new(catalog, crate::config::PlannerConfig::default());
        assert_eq!(
            planner.analyze("LION", 1),
            Err(crate::error::PlacementError::NoViableEnclosure)
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(
            vec![lion()],
            vec![
                Enclosure::new(1, BiomeSet::of(&[Biome::Savanna]), 9),
                Enclosure::new(1, BiomeSet::of(&[Biome::River]), 4),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateEnclosureId { id: 1 }));
    }

    #[test]
    fn test_zero_capacity_and_count_rejected() {
        let err = Catalog::new(vec![lion()], vec![Enclosure::new(1, BiomeSet::of(&[Biome::Savanna]), 0)])
            .unwrap_err();
        assert!(matches!(err, CatalogError::ZeroCapacity { id: 1 }));

        let err = Catalog::new(
            vec![lion()],
            vec![Enclosure::new(2, BiomeSet::of(&[Biome::Savanna]), 9).with_occupant("LION", 0)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::ZeroCount { id: 2, .. }));
    }

    #[test]
    fn test_empty_biomes_rejected() {
        let err = Catalog::new(vec![lion()], vec![Enclosure::new(3, BiomeSet::empty(), 5)]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyEnclosureBiomes { id: 3 }));
    }
}
