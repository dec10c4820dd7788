//! Zoo Enclosure Planner
//!
//! Rule engine that decides which enclosures can house a requested species
//! and quantity of animals, and how much space each would have left.
//!
//! - `catalog/`: Enclosure inventory, animal traits, built-in zoo
//! - `planner/`: Validation, space accounting, feasibility gates, aggregation
//! - `config`: Locale and space overhead settings
//! - `error`: Placement and catalog error types
//!
//! ```no_run
//! use zoo_enclosure_planner::Planner;
//!
//! let planner = Planner::builtin()?;
//! let analysis = planner.analyze("MONKEY", 3)?;
//! for placement in &analysis.placements {
//!     println!("{} has {} units left", placement.enclosure_id, placement.free_space);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use catalog::{AnimalTrait, Biome, BiomeSet, Catalog, Enclosure, Occupant, SpecialRule};
pub use config::{Locale, PlannerConfig};
pub use error::{CatalogError, PlacementError, PlacementResult};
pub use planner::{Analysis, AnalysisResponse, Gate, Placement, Planner, Verdict};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
