//! Planner configuration
//!
//! Output language and the mixed-species space overhead. Binaries build this
//! from environment variables; library callers use the builder setters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Extra space units required when a species joins a different species
pub const DEFAULT_MIXED_SPECIES_OVERHEAD: u32 = 1;

/// Language for report lines and error messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            "pt" | "pt-br" | "pt-pt" | "portuguese" => Ok(Locale::Pt),
            other => Err(format!("unknown locale '{}' (expected 'en' or 'pt')", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub locale: Locale,
    pub mixed_species_overhead: u32,
}

impl PlannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_mixed_species_overhead(mut self, overhead: u32) -> Self {
        self.mixed_species_overhead = overhead;
        self
    }

    /// Read `ZOO_LOCALE` from the environment, falling back to defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("ZOO_LOCALE") {
            config.locale = raw.parse().map_err(anyhow::Error::msg)?;
        }
        Ok(config)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            mixed_species_overhead: DEFAULT_MIXED_SPECIES_OVERHEAD,
        }
    }
}
