//! Biome Tags
//!
//! Habitat tags shared by enclosures and species. An enclosure may carry
//! several tags at once (the "savanna and river" enclosure), so both sides
//! are modelled as a small bitset and compatibility is a set operation.

use serde::Serialize;
use std::fmt;

/// Habitat tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Savanna,
    Forest,
    River,
}

impl Biome {
    /// Parse a single tag from its English or Portuguese name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "savanna" | "savana" => Some(Biome::Savanna),
            "forest" | "floresta" => Some(Biome::Forest),
            "river" | "rio" => Some(Biome::River),
            _ => None,
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Biome::Savanna => "savanna",
            Biome::Forest => "forest",
            Biome::River => "river",
        }
    }

    /// Get all tags
    pub fn all() -> &'static [Biome] {
        &[Biome::Savanna, Biome::Forest, Biome::River]
    }

    fn bit(self) -> u8 {
        match self {
            Biome::Savanna => 1 << 0,
            Biome::Forest => 1 << 1,
            Biome::River => 1 << 2,
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Set of biome tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BiomeSet(u8);

impl BiomeSet {
    pub const fn empty() -> Self {
        BiomeSet(0)
    }

    /// Build a set from a list of tags
    pub fn of(biomes: &[Biome]) -> Self {
        biomes.iter().fold(Self::empty(), |set, b| set.with(*b))
    }

    /// Parse a compound description such as `"savana e rio"` or
    /// `"savanna and river"`. Returns `None` if any token is unknown or the
    /// result would be empty.
    pub fn parse(description: &str) -> Option<Self> {
        let mut set = Self::empty();
        for token in description
            .split(|c: char| c == ',' || c == '+' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            match token.to_lowercase().as_str() {
                "e" | "and" => continue,
                other => set = set.with(Biome::from_name(other)?),
            }
        }
        (!set.is_empty()).then_some(set)
    }

    pub fn with(self, biome: Biome) -> Self {
        BiomeSet(self.0 | biome.bit())
    }

    pub fn contains(&self, biome: Biome) -> bool {
        self.0 & biome.bit() != 0
    }

    /// True if every tag in `other` is also in `self`
    pub fn contains_all(&self, other: &BiomeSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(&self, other: &BiomeSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Tags in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Biome> + '_ {
        Biome::all().iter().copied().filter(move |b| self.contains(*b))
    }
}

impl fmt::Display for BiomeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|b| b.display_name()).collect();
        f.write_str(&names.join(" and "))
    }
}

impl Serialize for BiomeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
