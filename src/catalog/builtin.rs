//! Built-in zoo dataset
//!
//! Five enclosures and six species. Species carry their Portuguese names as
//! aliases so queries such as "MACACO" resolve to the same records.

use super::biome::BiomeSet;
use super::enclosure::Enclosure;
use super::species::{AnimalTrait, SpecialRule};
use super::Catalog;
use crate::error::CatalogError;

fn biomes(description: &str) -> Result<BiomeSet, CatalogError> {
    BiomeSet::parse(description).ok_or_else(|| CatalogError::UnknownBiome {
        description: description.to_string(),
    })
}

/// Trait table for the built-in species
pub fn species() -> Result<Vec<AnimalTrait>, CatalogError> {
    let savanna = biomes("savana")?;
    let savanna_river = biomes("savana e rio")?;

    Ok(vec![
        AnimalTrait::new("LION", 3, savanna, true).with_alias("LEAO"),
        AnimalTrait::new("LEOPARD", 2, savanna, true).with_alias("LEOPARDO"),
        AnimalTrait::new("CROCODILE", 3, biomes("rio")?, true).with_alias("CROCODILO"),
        AnimalTrait::new("MONKEY", 1, biomes("savana e floresta")?, false)
            .with_alias("MACACO")
            .with_rule(SpecialRule::RequiresGroupOf(2)),
        AnimalTrait::new("GAZELLE", 2, savanna, false).with_alias("GAZELA"),
        AnimalTrait::new("HIPPO", 4, savanna_river, false)
            .with_alias("HIPOPOTAMO")
            .with_rule(SpecialRule::RequiresDualBiome(savanna_river)),
    ])
}

/// Enclosure inventory, in catalog order
pub fn enclosures() -> Result<Vec<Enclosure>, CatalogError> {
    Ok(vec![
        Enclosure::new(1, biomes("savana")?, 10).with_occupant("MONKEY", 3),
        Enclosure::new(2, biomes("floresta")?, 5),
        Enclosure::new(3, biomes("savana e rio")?, 7).with_occupant("GAZELLE", 1),
        Enclosure::new(4, biomes("rio")?, 8),
        Enclosure::new(5, biomes("savana")?, 9).with_occupant("LION", 1),
    ])
}

/// The built-in catalog
pub fn zoo() -> Result<Catalog, CatalogError> {
    Catalog::new(species()?, enclosures()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::biome::Biome;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = zoo().unwrap();
        assert_eq!(catalog.traits().len(), 6);
        assert_eq!(catalog.enclosures().len(), 5);
    }

    #[test]
    fn test_builtin_order_and_contents() {
        let catalog = zoo().unwrap();
        let ids: Vec<u32> = catalog.enclosures().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let dual = catalog.enclosure(3).unwrap();
        assert!(dual.biomes.contains(Biome::Savanna));
        assert!(dual.biomes.contains(Biome::River));
        assert_eq!(dual.count_of("GAZELLE"), 1);
    }

    #[test]
    fn test_builtin_biomes() {
        let catalog = zoo().unwrap();
        let monkey = catalog.species("MONKEY").unwrap();
        assert!(monkey.compatible_biomes.contains(Biome::Forest));
        assert!(monkey.compatible_biomes.contains(Biome::Savanna));
        assert_eq!(catalog.enclosure(2).unwrap().biomes.to_string(), "forest");
        assert_eq!(
            catalog.species("HIPPO").unwrap().dual_biome_requirement(),
            Some(catalog.enclosure(3).unwrap().biomes)
        );
        assert_eq!(
            biomes("savana e lava"),
            Err(CatalogError::UnknownBiome { description: "savana e lava".into() })
        );
    }

    #[test]
    fn test_builtin_portuguese_aliases() {
        let catalog = zoo().unwrap();
        for (alias, canonical) in [
            ("LEAO", "LION"),
            ("LEOPARDO", "LEOPARD"),
            ("CROCODILO", "CROCODILE"),
            ("MACACO", "MONKEY"),
            ("GAZELA", "GAZELLE"),
            ("HIPOPOTAMO", "HIPPO"),
        ] {
            assert_eq!(catalog.species(alias).unwrap().species, canonical);
        }
    }
}
