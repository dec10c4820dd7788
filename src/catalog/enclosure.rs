//! Enclosure Inventory
//!
//! An enclosure is a numbered space with one or more biome tags, a total
//! capacity in space units and the animals currently living in it.

use super::biome::BiomeSet;
use serde::Serialize;
use smallvec::SmallVec;

/// One group of animals of a single species
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub species: String,
    pub count: u32,
}

impl Occupant {
    pub fn new(species: &str, count: u32) -> Self {
        Self {
            species: species.to_string(),
            count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Enclosure {
    pub id: u32,
    pub biomes: BiomeSet,
    pub capacity: u32,
    pub occupants: SmallVec<[Occupant; 2]>,
}

impl Enclosure {
    pub fn new(id: u32, biomes: BiomeSet, capacity: u32) -> Self {
        Self {
            id,
            biomes,
            capacity,
            occupants: SmallVec::new(),
        }
    }

    pub fn with_occupant(mut self, species: &str, count: u32) -> Self {
        self.occupants.push(Occupant::new(species, count));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Current head count of `species` (0 if absent)
    pub fn count_of(&self, species: &str) -> u32 {
        self.occupants
            .iter()
            .find(|o| o.species == species)
            .map_or(0, |o| o.count)
    }

    /// True if any occupant belongs to a species other than `species`
    pub fn has_other_species(&self, species: &str) -> bool {
        self.occupants.iter().any(|o| o.species != species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::biome::Biome;

    #[test]
    fn test_occupant_queries() {
        let e = Enclosure::new(1, BiomeSet::of(&[Biome::Savanna]), 10).with_occupant("MONKEY", 3);
        assert!(!e.is_empty());
        assert_eq!(e.count_of("MONKEY"), 3);
        assert_eq!(e.count_of("LION"), 0);
        assert!(e.has_other_species("LION"));
        assert!(!e.has_other_species("MONKEY"));
    }

    #[test]
    fn test_empty_enclosure_has_no_other_species() {
        let e = Enclosure::new(2, BiomeSet::of(&[Biome::Forest]), 5);
        assert!(e.is_empty());
        assert!(!e.has_other_species("MONKEY"));
    }
}
