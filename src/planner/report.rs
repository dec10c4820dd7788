//! Report formatting
//!
//! Turns an analysis result into the caller-facing shape:
//! `{ "viable": [..lines..] }` or `{ "error": message }`, in English or in
//! Portuguese.

use super::analyzer::{Analysis, Placement};
use crate::config::Locale;
use crate::error::{PlacementError, PlacementResult};
use serde::Serialize;

/// One human-readable line per viable enclosure
pub fn format_placement(placement: &Placement, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "Enclosure {} (free space: {} total: {})",
            placement.enclosure_id, placement.free_space, placement.capacity
        ),
        Locale::Pt => format!(
            "Recinto {} (espaço livre: {} total: {})",
            placement.enclosure_id, placement.free_space, placement.capacity
        ),
    }
}

/// Fixed caller-facing message for each error
pub fn error_message(error: &PlacementError, locale: Locale) -> &'static str {
    match (error, locale) {
        (PlacementError::InvalidSpecies { .. }, Locale::En) => "Invalid animal",
        (PlacementError::InvalidSpecies { .. }, Locale::Pt) => "Animal inválido",
        (PlacementError::InvalidQuantity, Locale::En) => "Invalid quantity",
        (PlacementError::InvalidQuantity, Locale::Pt) => "Quantidade inválida",
        (PlacementError::NoViableEnclosure, Locale::En) => "No viable enclosure",
        (PlacementError::NoViableEnclosure, Locale::Pt) => "Não há recinto viável",
    }
}

/// Success payload XOR error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Viable { viable: Vec<String> },
    Error { error: String },
}

impl AnalysisResponse {
    pub fn from_result(result: &PlacementResult<Analysis>, locale: Locale) -> Self {
        match result {
            Ok(analysis) => AnalysisResponse::Viable {
                viable: analysis
                    .placements
                    .iter()
                    .map(|p| format_placement(p, locale))
                    .collect(),
            },
            Err(e) => AnalysisResponse::Error {
                error: error_message(e, locale).to_string(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResponse::Error { .. })
    }
}
