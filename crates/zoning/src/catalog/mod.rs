//! Fixed, ordered catalogs of lot presets, rulesets, and preset forms.
//!
//! Every entry is keyed by a stable string id. Lookups return a `Result`;
//! substituting a default for an unknown id is the scenario layer's job
//! (see [`crate::scenario::resolve`]), never the evaluator's.

mod builtin;


use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogKind};
use crate::types::{Lot, PresetForm, Ruleset};

/// A named starting lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotPreset {
    pub id: String,
    pub name: String,
    pub lot: Lot,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    lot_presets: Vec<LotPreset>,
    rulesets: Vec<Ruleset>,
    preset_forms: Vec<PresetForm>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(
        lot_presets: Vec<LotPreset>,
        rulesets: Vec<Ruleset>,
        preset_forms: Vec<PresetForm>,
    ) -> Self {
        Self {
            lot_presets,
            rulesets,
            preset_forms,
        }
    }

    /// Parse a catalog from JSON (the same shape `serde_json` writes). A
    /// catalog without rulesets or preset forms cannot resolve any scenario
    /// and is rejected.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.first_ruleset()?;
        catalog.first_preset_form()?;
        Ok(catalog)
    }

    /// The sample catalog shipped with the engine.
    pub fn builtin() -> Self {
        Self::new(
            builtin::lot_presets(),
            builtin::rulesets(),
            builtin::preset_forms(),
        )
    }

    pub fn lot_presets(&self) -> &[LotPreset] {
        &self.lot_presets
    }

    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    pub fn preset_forms(&self) -> &[PresetForm] {
        &self.preset_forms
    }

    pub fn lot_preset(&self, id: &str) -> Result<&LotPreset, CatalogError> {
        find(&self.lot_presets, id, CatalogKind::LotPreset, |p| &p.id)
    }

    pub fn ruleset(&self, id: &str) -> Result<&Ruleset, CatalogError> {
        find(&self.rulesets, id, CatalogKind::Ruleset, |r| &r.id)
    }

    pub fn preset_form(&self, id: &str) -> Result<&PresetForm, CatalogError> {
        find(&self.preset_forms, id, CatalogKind::PresetForm, |p| &p.id)
    }

    pub fn first_ruleset(&self) -> Result<&Ruleset, CatalogError> {
        self.rulesets
            .first()
            .ok_or(CatalogError::Empty(CatalogKind::Ruleset))
    }

    pub fn first_preset_form(&self) -> Result<&PresetForm, CatalogError> {
        self.preset_forms
            .first()
            .ok_or(CatalogError::Empty(CatalogKind::PresetForm))
    }

    /// The lot preset whose lot is field-for-field equal to `lot`, if any.
    /// An edited lot that no longer matches any preset is "custom".
    pub fn matching_lot_preset(&self, lot: &Lot) -> Option<&LotPreset> {
        self.lot_presets.iter().find(|p| p.lot == *lot)
    }
}

fn find<'a, T>(
    entries: &'a [T],
    id: &str,
    kind: CatalogKind,
    key: impl Fn(&T) -> &String,
) -> Result<&'a T, CatalogError> {
    entries
        .iter()
        .find(|entry| key(entry) == id)
        .ok_or_else(|| CatalogError::NotFound {
            kind,
            id: id.to_string(),
        })
}
