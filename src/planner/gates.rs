//! Feasibility Gates
//!
//! Five independent predicates over an immutable `GateInput`. An enclosure
//! is viable only if every gate passes. Gates are always evaluated in
//! `Gate::ORDER` so the first failure reported for an enclosure is stable.
//!
//! 1. Capacity - required space fits the enclosure
//! 2. Biome - enclosure and species share at least one biome tag
//! 3. Carnivore exclusivity - carnivores only join their own species
//! 4. Group minimum - gregarious species cannot found an enclosure alone
//! 5. Dual biome - some species only share the multi-biome enclosure
//!
//! Gate 3 restricts carnivores only. A non-carnivore may still be placed
//! next to an existing carnivore.

use super::space;
use crate::catalog::{AnimalTrait, Enclosure, TraitTable};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Capacity,
    Biome,
    CarnivoreExclusivity,
    GroupMinimum,
    DualBiome,
}

impl Gate {
    pub const ORDER: [Gate; 5] = [
        Gate::Capacity,
        Gate::Biome,
        Gate::CarnivoreExclusivity,
        Gate::GroupMinimum,
        Gate::DualBiome,
    ];

    pub fn check(&self, input: &GateInput<'_>) -> bool {
        match self {
            Gate::Capacity => capacity_gate(input),
            Gate::Biome => biome_gate(input),
            Gate::CarnivoreExclusivity => carnivore_gate(input),
            Gate::GroupMinimum => group_minimum_gate(input),
            Gate::DualBiome => dual_biome_gate(input),
        }
    }

    /// Short reason shown in diagnostics
    pub fn display_text(&self) -> &'static str {
        match self {
            Gate::Capacity => "not enough free space",
            Gate::Biome => "no compatible biome",
            Gate::CarnivoreExclusivity => "carnivores cannot share with another species",
            Gate::GroupMinimum => "species cannot found an enclosure alone",
            Gate::DualBiome => "species needs the multi-biome enclosure or an empty one",
        }
    }
}

/// Snapshot of one hypothetical placement
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub enclosure: &'a Enclosure,
    pub animal: &'a AnimalTrait,
    pub quantity: u32,
    /// Output of the space accountant for this placement
    pub required_space: u32,
}

impl<'a> GateInput<'a> {
    pub fn new(
        enclosure: &'a Enclosure,
        traits: &TraitTable,
        animal: &'a AnimalTrait,
        quantity: u32,
        mixed_species_overhead: u32,
    ) -> Self {
        let required_space =
            space::required_space(enclosure, traits, animal, quantity, mixed_species_overhead);
        Self {
            enclosure,
            animal,
            quantity,
            required_space,
        }
    }
}

pub fn capacity_gate(input: &GateInput<'_>) -> bool {
    input.required_space <= input.enclosure.capacity
}

pub fn biome_gate(input: &GateInput<'_>) -> bool {
    input.enclosure.biomes.intersects(&input.animal.compatible_biomes)
}

pub fn carnivore_gate(input: &GateInput<'_>) -> bool {
    !input.animal.is_carnivore || !input.enclosure.has_other_species(&input.animal.species)
}

pub fn group_minimum_gate(input: &GateInput<'_>) -> bool {
    let Some(minimum) = input.animal.group_minimum() else {
        return true;
    };
    let existing = input.enclosure.count_of(&input.animal.species);
    existing.saturating_add(input.quantity) >= minimum || !input.enclosure.is_empty()
}

pub fn dual_biome_gate(input: &GateInput<'_>) -> bool {
    let Some(tags) = input.animal.dual_biome_requirement() else {
        return true;
    };
    input.enclosure.biomes.contains_all(&tags) || input.enclosure.is_empty()
}

/// Outcome for one enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Viable { required_space: u32, free_space: u32 },
    Rejected { gate: Gate },
}

impl Verdict {
    pub fn is_viable(&self) -> bool {
        matches!(self, Verdict::Viable { .. })
    }
}

/// Run every gate in order and report the first failure
pub fn evaluate(input: &GateInput<'_>) -> Verdict {
    if let Some(gate) = Gate::ORDER.iter().find(|g| !g.check(input)) {
        tracing::debug!(
            "Enclosure {} rejected for {} x{}: {}",
            input.enclosure.id,
            input.animal.species,
            input.quantity,
            gate.display_text()
        );
        return Verdict::Rejected { gate: *gate };
    }

    match space::free_space(input.enclosure, input.required_space) {
        Some(free_space) => Verdict::Viable {
            required_space: input.required_space,
            free_space,
        },
        // Unreachable once the capacity gate has passed
        None => Verdict::Rejected { gate: Gate::Capacity },
    }
}

/// Conjunction of all gates
pub fn is_viable(input: &GateInput<'_>) -> bool {
    Gate::ORDER.iter().all(|g| g.check(input))
}
