//! The one-line headline for an evaluation.
//!
//! A non-compliant scenario reports its most relevant violation. A compliant
//! one reports whichever limit it uses the largest share of.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::geometry::{safe_div, to_fixed, Rect};
use crate::metrics::BuildingMetrics;
use crate::types::Ruleset;

use super::violations::{Violation, ViolationCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    Violation,
    Binding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingInfo {
    pub kind: BindingKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A limit the compliant building is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    EnvelopeWidth,
    EnvelopeDepth,
    Height,
    Far,
    Coverage,
}

impl Constraint {
    fn tight_label(self, ratio: f64) -> String {
        let pct = to_fixed(ratio * 100.0, 0);
        match self {
            Constraint::EnvelopeWidth => format!("Envelope width is tight ({pct}% used)."),
            Constraint::EnvelopeDepth => format!("Envelope depth is tight ({pct}% used)."),
            Constraint::Height => format!("Height is tight ({pct}% used)."),
            Constraint::Far => format!("FAR is tight ({pct}% used)."),
            Constraint::Coverage => format!("Lot coverage is tight ({pct}% used)."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Utilization {
    pub constraint: Constraint,
    /// Share of the limit in use; 0 when the limit itself is not positive.
    pub ratio: f64,
}

/// Utilization of each limit, in tie-break order (width, depth, height, FAR,
/// coverage).
pub fn utilizations(
    envelope: &Envelope,
    footprint: &Rect,
    metrics: &BuildingMetrics,
    ruleset: &Ruleset,
) -> [Utilization; 5] {
    [
        Utilization {
            constraint: Constraint::EnvelopeWidth,
            ratio: safe_div(footprint.width(), envelope.width_ft()),
        },
        Utilization {
            constraint: Constraint::EnvelopeDepth,
            ratio: safe_div(footprint.depth(), envelope.depth_ft()),
        },
        Utilization {
            constraint: Constraint::Height,
            ratio: safe_div(metrics.height_ft, ruleset.max_height_ft),
        },
        Utilization {
            constraint: Constraint::Far,
            ratio: safe_div(metrics.far_used, ruleset.max_far),
        },
        Utilization {
            constraint: Constraint::Coverage,
            ratio: safe_div(metrics.effective_coverage_used, ruleset.max_lot_coverage_pct),
        },
    ]
}

/// Highest violation by [`ViolationCode::BY_PRIORITY`].
pub fn headline_violation(violations: &[Violation]) -> Option<&Violation> {
    ViolationCode::BY_PRIORITY
        .iter()
        .find_map(|code| violations.iter().find(|v| v.code == *code))
        .or_else(|| violations.first())
}

pub fn compute_binding(
    envelope: &Envelope,
    footprint: &Rect,
    metrics: &BuildingMetrics,
    ruleset: &Ruleset,
    violations: &[Violation],
) -> BindingInfo {
    if let Some(top) = headline_violation(violations) {
        return BindingInfo {
            kind: BindingKind::Violation,
            label: top.message.clone(),
            detail: None,
        };
    }

    let mut candidates = utilizations(envelope, footprint, metrics, ruleset);
    // Stable: on an exact tie the earlier constraint wins.
    candidates.sort_by(|a, b| b.ratio.partial_cmp(&a.ratio).unwrap_or(Ordering::Equal));
    let best = candidates[0];

    BindingInfo {
        kind: BindingKind::Binding,
        label: best.constraint.tight_label(best.ratio),
        detail: None,
    }
}
