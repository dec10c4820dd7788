//! Property tests for the planner
//!
//! Run with: cargo test --test planner_properties

use proptest::prelude::*;
use zoo_enclosure_planner::planner::space;
use zoo_enclosure_planner::{Catalog, PlacementError, Planner};

const SPECIES: &[&str] = &["LION", "LEOPARD", "CROCODILE", "MONKEY", "GAZELLE", "HIPPO"];

fn species_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SPECIES)
}

proptest! {
    #[test]
    fn required_space_is_monotonic_in_quantity(
        species in species_strategy(),
        quantity in 1u32..10_000,
        extra in 0u32..10_000,
    ) {
        let catalog = Catalog::builtin().unwrap();
        let animal = catalog.species(species).unwrap();
        for enclosure in catalog.enclosures() {
            let smaller = space::required_space(enclosure, catalog.traits(), animal, quantity, 1);
            let larger = space::required_space(enclosure, catalog.traits(), animal, quantity + extra, 1);
            prop_assert!(smaller <= larger);
        }
    }

    #[test]
    fn analyze_is_idempotent(species in species_strategy(), quantity in -3i64..20) {
        let planner = Planner::builtin().unwrap();
        let first = planner.analyze(species, quantity);
        let second = planner.analyze(species, quantity);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_species_always_invalid(name in "[a-z]{1,12}", quantity in any::<i64>()) {
        // Lowercase names never match the uppercase catalog keys
        let planner = Planner::builtin().unwrap();
        prop_assert_eq!(
            planner.analyze(&name, quantity),
            Err(PlacementError::InvalidSpecies { species: name.clone() })
        );
    }

    #[test]
    fn non_positive_quantity_always_invalid(species in species_strategy(), quantity in i64::MIN..=0) {
        let planner = Planner::builtin().unwrap();
        prop_assert_eq!(planner.analyze(species, quantity), Err(PlacementError::InvalidQuantity));
    }

    #[test]
    fn free_space_never_exceeds_capacity(species in species_strategy(), quantity in 1i64..12) {
        let planner = Planner::builtin().unwrap();
        if let Ok(analysis) = planner.analyze(species, quantity) {
            prop_assert!(!analysis.placements.is_empty());
            for p in &analysis.placements {
                prop_assert!(p.free_space <= p.capacity);
            }
        }
    }
}
