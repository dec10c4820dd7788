//! Placement Planner
//!
//! Decides which enclosures can take a requested species and quantity.
//!
//! ## Pipeline
//! - `validator.rs` - species/quantity checks, run before anything else
//! - `space.rs` - occupied, required and free space arithmetic
//! - `gates.rs` - the five feasibility predicates and their ordering
//! - `analyzer.rs` - `Planner`: runs the gates over the catalog
//! - `report.rs` - localized output lines and error messages

pub mod validator;
pub mod space;
pub mod gates;
pub mod analyzer;
pub mod report;

pub use analyzer::{Analysis, EnclosureVerdict, Placement, Planner};
pub use gates::{Gate, GateInput, Verdict};
pub use report::{AnalysisResponse, error_message, format_placement};
pub use validator::{parse_quantity, quantity_from_json, validate, ValidQuery};
