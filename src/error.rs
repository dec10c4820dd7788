//! Error types for the planner.
//!
//! `PlacementError` covers the three query outcomes a caller can receive.
//! `CatalogError` is raised only when a catalog is assembled from bad data.

use thiserror::Error;

/// Terminal query outcomes. None of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Requested species is not in the trait table
    #[error("invalid animal: {species}")]
    InvalidSpecies { species: String },

    /// Quantity is zero, negative, non-integral or non-numeric
    #[error("invalid quantity")]
    InvalidQuantity,

    /// Every enclosure failed at least one gate
    #[error("no viable enclosure")]
    NoViableEnclosure,
}

/// Errors raised while building a `Catalog`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("species {species} is declared more than once")]
    DuplicateSpecies { species: String },

    #[error("species {species} has size 0")]
    ZeroSize { species: String },

    #[error("species {species} has no compatible biome")]
    EmptySpeciesBiomes { species: String },

    #[error("unknown biome in {description:?}")]
    UnknownBiome { description: String },

    #[error("enclosure id {id} is used more than once")]
    DuplicateEnclosureId { id: u32 },

    #[error("enclosure {id} has capacity 0")]
    ZeroCapacity { id: u32 },

    #[error("enclosure {id} has no biome")]
    EmptyEnclosureBiomes { id: u32 },

    #[error("enclosure {id} lists {species} with count 0")]
    ZeroCount { id: u32, species: String },

    #[error("enclosure {id} holds unknown species {species}")]
    UnknownOccupantSpecies { id: u32, species: String },
}

/// Result type for planner queries
pub type PlacementResult<T> = Result<T, PlacementError>;
