//! Animal Traits
//!
//! Per-species reference data: body size in space units, compatible biomes,
//! diet, and the species-specific placement rules that the feasibility gates
//! consult.

use super::biome::BiomeSet;
use crate::error::CatalogError;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

/// Species-specific placement capability attached to a trait record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRule {
    /// The species may only found an empty enclosure as a group of at least
    /// `n` individuals. A smaller group may still join an occupied enclosure.
    RequiresGroupOf(u32),

    /// The species may only share an enclosure that carries every listed
    /// biome tag; otherwise it must be the enclosure's first occupant.
    RequiresDualBiome(BiomeSet),
}

/// Immutable trait record for one species
#[derive(Debug, Clone, Serialize)]
pub struct AnimalTrait {
    /// Canonical species key (e.g. "MONKEY")
    pub species: String,

    /// Alternate lookup names (e.g. "MACACO")
    pub aliases: SmallVec<[String; 2]>,

    /// Space units occupied per individual
    pub size: u32,

    /// Biomes the species can live in
    pub compatible_biomes: BiomeSet,

    pub is_carnivore: bool,

    pub rules: SmallVec<[SpecialRule; 2]>,
}

impl AnimalTrait {
    pub fn new(species: &str, size: u32, compatible_biomes: BiomeSet, is_carnivore: bool) -> Self {
        Self {
            species: species.to_string(),
            aliases: SmallVec::new(),
            size,
            compatible_biomes,
            is_carnivore,
            rules: SmallVec::new(),
        }
    }

    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    pub fn with_rule(mut self, rule: SpecialRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Minimum founding group size, if the species is gregarious
    pub fn group_minimum(&self) -> Option<u32> {
        self.rules.iter().find_map(|r| match r {
            SpecialRule::RequiresGroupOf(n) => Some(*n),
            _ => None,
        })
    }

    /// Biome tags required for shared housing, if any
    pub fn dual_biome_requirement(&self) -> Option<BiomeSet> {
        self.rules.iter().find_map(|r| match r {
            SpecialRule::RequiresDualBiome(tags) => Some(*tags),
            _ => None,
        })
    }
}

/// Trait table keyed by canonical species name and aliases
#[derive(Debug, Clone, Default)]
pub struct TraitTable {
    traits: Vec<AnimalTrait>,
    index: FxHashMap<String, usize>,
}

impl TraitTable {
    /// Build the table, rejecting zero sizes, empty biome sets and names
    /// (canonical or alias) that are declared twice.
    pub fn new(traits: Vec<AnimalTrait>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (i, t) in traits.iter().enumerate() {
            if t.size == 0 {
                return Err(CatalogError::ZeroSize { species: t.species.clone() });
            }
            if t.compatible_biomes.is_empty() {
                return Err(CatalogError::EmptySpeciesBiomes { species: t.species.clone() });
            }
            for name in std::iter::once(&t.species).chain(t.aliases.iter()) {
                if index.insert(name.clone(), i).is_some() {
                    return Err(CatalogError::DuplicateSpecies { species: name.clone() });
                }
            }
        }

        Ok(Self { traits, index })
    }

    /// Look up a species by canonical name or alias (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&AnimalTrait> {
        self.index.get(name).map(|&i| &self.traits[i])
    }

    /// All traits in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &AnimalTrait> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
