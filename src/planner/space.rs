//! Space Accountant
//!
//! Space arithmetic for a hypothetical placement:
//!
//! ```text
//! required = Σ(count × size) of current occupants
//!          + overhead            (if any occupant is another species)
//!          + quantity × size     (the newcomers)
//! free     = capacity − required
//! ```
//!
//! All sums saturate, so absurd quantities fail the capacity gate instead of
//! wrapping.

use crate::catalog::{AnimalTrait, Enclosure, TraitTable};

/// Space taken by the enclosure's current occupants
pub fn occupied_space(enclosure: &Enclosure, traits: &TraitTable) -> u32 {
    enclosure
        .occupants
        .iter()
        .map(|o| traits.get(&o.species).map_or(0, |t| o.count.saturating_mul(t.size)))
        .fold(0, u32::saturating_add)
}

/// Space the enclosure would need after adding `quantity` of `animal`
pub fn required_space(
    enclosure: &Enclosure,
    traits: &TraitTable,
    animal: &AnimalTrait,
    quantity: u32,
    mixed_species_overhead: u32,
) -> u32 {
    let mut required = occupied_space(enclosure, traits);

    if enclosure.has_other_species(&animal.species) {
        required = required.saturating_add(mixed_species_overhead);
    }

    required.saturating_add(quantity.saturating_mul(animal.size))
}

/// Remaining space, or `None` if `required` exceeds capacity
pub fn free_space(enclosure: &Enclosure, required: u32) -> Option<u32> {
    enclosure.capacity.checked_sub(required)
}
