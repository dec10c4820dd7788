//! Query Validator
//!
//! Gates every query before any enclosure is examined. The species is
//! checked first, then the quantity. Quantities can arrive as typed
//! integers, raw strings (CLI) or JSON values (HTTP); all three collapse to
//! the same `InvalidQuantity` outcome when they are not a positive integer.
//! A positive integer is never invalid, however large.

use crate::catalog::{AnimalTrait, TraitTable};
use crate::error::{PlacementError, PlacementResult};
use serde_json::Value;

/// A query that passed validation
#[derive(Debug, Clone, Copy)]
pub struct ValidQuery<'a> {
    pub animal: &'a AnimalTrait,
    pub quantity: u32,
}

/// Validate a typed query
pub fn validate<'a>(traits: &'a TraitTable, species: &str, quantity: i64) -> PlacementResult<ValidQuery<'a>> {
    let animal = validate_species(traits, species)?;
    let quantity = validate_quantity(quantity)?;
    Ok(ValidQuery { animal, quantity })
}

pub fn validate_species<'a>(traits: &'a TraitTable, species: &str) -> PlacementResult<&'a AnimalTrait> {
    traits.get(species).ok_or_else(|| PlacementError::InvalidSpecies {
        species: species.to_string(),
    })
}

/// Accept any positive integer. Values past `u32::MAX` saturate; no
/// enclosure can hold them, so they end at the capacity gate.
pub fn validate_quantity(quantity: i64) -> PlacementResult<u32> {
    if quantity <= 0 {
        return Err(PlacementError::InvalidQuantity);
    }
    Ok(u32::try_from(quantity).unwrap_or(u32::MAX))
}

/// Parse a quantity typed by a user.
///
/// Integral decimals such as "3.0" are accepted; "3.5", "abc" and "" are not.
pub fn parse_quantity(raw: &str) -> PlacementResult<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return validate_quantity(n);
    }
    match raw.parse::<f64>() {
        Ok(f) => quantity_from_f64(f),
        Err(_) => Err(PlacementError::InvalidQuantity),
    }
}

/// Extract a quantity from a JSON value. Only JSON numbers qualify; numeric
/// strings, booleans and null are rejected.
pub fn quantity_from_json(value: &Value) -> PlacementResult<u32> {
    let Value::Number(n) = value else {
        return Err(PlacementError::InvalidQuantity);
    };

    if let Some(i) = n.as_i64() {
        validate_quantity(i)
    } else if n.is_u64() {
        // Larger than i64::MAX
        Ok(u32::MAX)
    } else {
        n.as_f64().map_or(Err(PlacementError::InvalidQuantity), quantity_from_f64)
    }
}

fn quantity_from_f64(f: f64) -> PlacementResult<u32> {
    if !f.is_finite() || f.fract() != 0.0 || f < 1.0 {
        return Err(PlacementError::InvalidQuantity);
    }
    // `as` saturates above u32::MAX
    Ok(f as u32)
}
