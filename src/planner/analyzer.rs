//! Result Aggregator
//!
//! `Planner` owns a validated catalog and a config. `analyze` validates the
//! query, runs the gates over every enclosure in catalog order and keeps the
//! viable ones. An empty result is reported as `NoViableEnclosure`, never as
//! an empty list.
//!
//! The planner holds no mutable state, so one instance can serve many
//! threads. `analyze_batch` uses that to fan queries out over rayon.

use super::gates::{self, GateInput, Verdict};
use super::report::AnalysisResponse;
use super::validator::{self, ValidQuery};
use crate::catalog::{Catalog, Enclosure};
use crate::config::PlannerConfig;
use crate::error::{CatalogError, PlacementError, PlacementResult};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

/// One viable enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub enclosure_id: u32,
    pub free_space: u32,
    pub capacity: u32,
}

/// Successful analysis: at least one placement, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Canonical species name (aliases resolved)
    pub species: String,
    pub quantity: u32,
    pub placements: Vec<Placement>,
}

impl Analysis {
    pub fn enclosure_ids(&self) -> Vec<u32> {
        self.placements.iter().map(|p| p.enclosure_id).collect()
    }
}

/// Verdict for one enclosure, used by `explain`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnclosureVerdict {
    pub enclosure_id: u32,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Placement engine over a fixed catalog
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(catalog: Catalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Planner over the built-in zoo with default config
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::builtin()?, PlannerConfig::default()))
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Enclosures that can take `quantity` animals of `species`
    pub fn analyze(&self, species: &str, quantity: i64) -> PlacementResult<Analysis> {
        let query = validator::validate(self.catalog.traits(), species, quantity)?;
        self.analyze_valid(query)
    }

    /// Same as `analyze`, with the quantity as typed by a user
    pub fn analyze_raw(&self, species: &str, raw_quantity: &str) -> PlacementResult<Analysis> {
        let animal = validator::validate_species(self.catalog.traits(), species)?;
        let quantity = validator::parse_quantity(raw_quantity)?;
        self.analyze_valid(ValidQuery { animal, quantity })
    }

    /// Same as `analyze`, with the quantity as a JSON value
    pub fn analyze_json(&self, species: &str, quantity: &Value) -> PlacementResult<Analysis> {
        let animal = validator::validate_species(self.catalog.traits(), species)?;
        let quantity = validator::quantity_from_json(quantity)?;
        self.analyze_valid(ValidQuery { animal, quantity })
    }

    /// Analyze many queries in parallel; results keep input order
    pub fn analyze_batch(&self, queries: &[(String, i64)]) -> Vec<PlacementResult<Analysis>> {
        queries
            .par_iter()
            .map(|(species, quantity)| self.analyze(species, *quantity))
            .collect()
    }

    /// Per-enclosure verdicts, including rejections and the gate responsible
    pub fn explain(&self, species: &str, quantity: i64) -> PlacementResult<Vec<EnclosureVerdict>> {
        let query = validator::validate(self.catalog.traits(), species, quantity)?;
        Ok(self.verdicts(&query))
    }

    /// Same as `explain`, with the quantity as typed by a user
    pub fn explain_raw(&self, species: &str, raw_quantity: &str) -> PlacementResult<Vec<EnclosureVerdict>> {
        let animal = validator::validate_species(self.catalog.traits(), species)?;
        let quantity = validator::parse_quantity(raw_quantity)?;
        Ok(self.verdicts(&ValidQuery { animal, quantity }))
    }

    /// Same as `explain`, with the quantity as a JSON value
    pub fn explain_json(&self, species: &str, quantity: &Value) -> PlacementResult<Vec<EnclosureVerdict>> {
        let animal = validator::validate_species(self.catalog.traits(), species)?;
        let quantity = validator::quantity_from_json(quantity)?;
        Ok(self.verdicts(&ValidQuery { animal, quantity }))
    }

    /// Analyze and render in the configured locale
    pub fn respond(&self, species: &str, quantity: i64) -> AnalysisResponse {
        AnalysisResponse::from_result(&self.analyze(species, quantity), self.config.locale)
    }

    fn gate_input<'a>(
        &'a self,
        enclosure: &'a Enclosure,
        query: &ValidQuery<'a>,
    ) -> GateInput<'a> {
        GateInput::new(
            enclosure,
            self.catalog.traits(),
            query.animal,
            query.quantity,
            self.config.mixed_species_overhead,
        )
    }

    fn verdicts(&self, query: &ValidQuery<'_>) -> Vec<EnclosureVerdict> {
        self.catalog
            .enclosures()
            .iter()
            .map(|enclosure| EnclosureVerdict {
                enclosure_id: enclosure.id,
                verdict: gates::evaluate(&self.gate_input(enclosure, query)),
            })
            .collect()
    }

    fn analyze_valid(&self, query: ValidQuery<'_>) -> PlacementResult<Analysis> {
        let placements: Vec<Placement> = self
            .catalog
            .enclosures()
            .iter()
            .filter_map(|enclosure| match gates::evaluate(&self.gate_input(enclosure, &query)) {
                Verdict::Viable { free_space, .. } => Some(Placement {
                    enclosure_id: enclosure.id,
                    free_space,
                    capacity: enclosure.capacity,
                }),
                Verdict::Rejected { .. } => None,
            })
            .collect();

        tracing::info!(
            "{} x{}: {} of {} enclosures viable",
            query.animal.species,
            query.quantity,
            placements.len(),
            self.catalog.enclosures().len()
        );

        if placements.is_empty() {
            return Err(PlacementError::NoViableEnclosure);
        }

        Ok(Analysis {
            species: query.animal.species.clone(),
            quantity: query.quantity,
            placements,
        })
    }
}
