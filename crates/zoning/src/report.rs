//! Plain-text key stats for an evaluated scenario.
//!
//! Rows mirror what a printed scenario sheet shows: height, FAR, coverage and
//! parking against their limits, then the headline and the violation list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluate::BindingKind;
use crate::geometry::to_fixed;
use crate::scenario::ScenarioResult;

pub const NO_VIOLATIONS: &str = "No violations detected.";
pub const NO_SOURCES: &str = "No sources attached to this ruleset.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    pub key: String,
    pub value: String,
}

impl StatRow {
    fn new(key: &str, value: String) -> Self {
        Self {
            key: key.to_string(),
            value,
        }
    }
}

/// Height, FAR, Coverage and Parking rows.
pub fn key_stats(result: &ScenarioResult) -> Vec<StatRow> {
    let m = &result.evaluation.metrics;
    let r = &result.ruleset;
    vec![
        StatRow::new(
            "Height",
            format!(
                "{} ft (max {} ft)",
                to_fixed(m.height_ft, 0),
                to_fixed(r.max_height_ft, 0)
            ),
        ),
        StatRow::new(
            "FAR",
            format!(
                "{} (max {})",
                to_fixed(m.far_used, 2),
                to_fixed(r.max_far, 2)
            ),
        ),
        StatRow::new(
            "Coverage",
            format!(
                "{}% (max {}%)",
                to_fixed(m.effective_coverage_used * 100.0, 1),
                to_fixed(r.max_lot_coverage_pct * 100.0, 0)
            ),
        ),
        StatRow::new(
            "Parking",
            format!(
                "{} units • {} required • {} shown",
                result.preset.units,
                m.required_parking_spaces,
                result.evaluation.parking_layout.stalls.len()
            ),
        ),
    ]
}

/// Everything needed to print one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub title: String,
    pub lot: String,
    pub stats: Vec<StatRow>,
    /// "Violation" or "Binding constraint".
    pub headline_title: String,
    pub headline: String,
    pub violations: Vec<String>,
    pub sources: Vec<String>,
}

pub fn scenario_report(result: &ScenarioResult) -> ScenarioReport {
    let lot = &result.config.lot;
    let lot_label = format!(
        "{} ft x {} ft ({})",
        to_fixed(lot.width_ft, 1),
        to_fixed(lot.depth_ft, 1),
        result.lot_preset_id.as_deref().unwrap_or("custom")
    );
    let headline_title = match result.evaluation.binding.kind {
        BindingKind::Violation => "Violation",
        BindingKind::Binding => "Binding constraint",
    };

    ScenarioReport {
        title: format!(
            "Scenario {:?}: {} ({}) under {}",
            result.slot,
            result.preset.name,
            result.preset.kind.label(),
            result.ruleset.name
        ),
        lot: lot_label,
        stats: key_stats(result),
        headline_title: headline_title.to_string(),
        headline: result.evaluation.binding.label.clone(),
        violations: result
            .evaluation
            .violations
            .iter()
            .map(|v| v.message.clone())
            .collect(),
        sources: result
            .ruleset
            .sources
            .iter()
            .map(|s| format!("{} (updated {}) {}", s.title, s.last_updated, s.url))
            .collect(),
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  Lot: {}", self.lot)?;
        let width = self.stats.iter().map(|r| r.key.len()).max().unwrap_or(0);
        for row in &self.stats {
            writeln!(f, "  {:<width$}  {}", row.key, row.value)?;
        }
        writeln!(f, "  {}: {}", self.headline_title, self.headline)?;
        if self.violations.is_empty() {
            writeln!(f, "  {NO_VIOLATIONS}")?;
        } else {
            for v in &self.violations {
                writeln!(f, "  - {v}")?;
            }
        }
        if self.sources.is_empty() {
            write!(f, "  {NO_SOURCES}")
        } else {
            write!(f, "  Sources: {}", self.sources.join("; "))
        }
    }
}
