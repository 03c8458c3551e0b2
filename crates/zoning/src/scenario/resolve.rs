//! The one place where catalog ids become records.
//!
//! An unknown ruleset or preset id falls back to the configured default id,
//! then to the catalog's first entry. Only a catalog with no entries at all
//! is an error. Everything downstream works on resolved records.

use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::config::{DEFAULT_PRESET_ID, DEFAULT_RULESET_ID};
use crate::error::CatalogError;
use crate::evaluate::ScenarioInput;
use crate::types::{PresetForm, Ruleset};

use super::state::ScenarioConfig;

#[derive(Debug, Clone, Copy)]
pub struct ResolvedScenario<'a> {
    pub config: &'a ScenarioConfig,
    pub ruleset: &'a Ruleset,
    pub preset: &'a PresetForm,
    /// True when the configured ruleset id was not in the catalog.
    pub ruleset_substituted: bool,
    /// True when the configured preset id was not in the catalog.
    pub preset_substituted: bool,
}

impl<'a> ResolvedScenario<'a> {
    pub fn input(&self) -> ScenarioInput<'a> {
        ScenarioInput {
            lot: &self.config.lot,
            ruleset: self.ruleset,
            preset: self.preset,
            provided_parking_spaces: self.config.parking.provided_spaces,
            show_parking_geometry: self.config.parking.show_geometry,
            apply_coverage_debit: self.config.parking.apply_coverage_debit,
        }
    }
}

pub fn resolve<'a>(
    catalog: &'a Catalog,
    config: &'a ScenarioConfig,
) -> Result<ResolvedScenario<'a>, CatalogError> {
    let (ruleset, ruleset_substituted) = match catalog.ruleset(&config.ruleset_id) {
        Ok(r) => (r, false),
        Err(e) => {
            warn!("{e}; falling back to '{DEFAULT_RULESET_ID}'");
            let fallback = catalog
                .ruleset(DEFAULT_RULESET_ID)
                .or_else(|_| catalog.first_ruleset())?;
            (fallback, true)
        }
    };

    let (preset, preset_substituted) = match catalog.preset_form(&config.preset_id) {
        Ok(p) => (p, false),
        Err(e) => {
            warn!("{e}; falling back to '{DEFAULT_PRESET_ID}'");
            let fallback = catalog
                .preset_form(DEFAULT_PRESET_ID)
                .or_else(|_| catalog.first_preset_form())?;
            (fallback, true)
        }
    };

    Ok(ResolvedScenario {
        config,
        ruleset,
        preset,
        ruleset_substituted,
        preset_substituted,
    })
}
