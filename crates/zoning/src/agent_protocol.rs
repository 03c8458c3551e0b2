//! Agent text protocol types for the `--agent` headless mode.
//!
//! External programs (scripts, LLM agents, test harnesses) drive a zoning
//! session over newline-delimited JSON: one `AgentCommand` per stdin line,
//! one `AgentResponse` per stdout line. The I/O loop and command dispatch
//! live in `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::report::ScenarioReport;
use crate::scenario::{ScenarioChange, ScenarioConfig, ScenarioResult, ScenarioSlot, ScenarioState};

// ---------------------------------------------------------------------------
// Commands (stdin → session)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent over stdin.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// List lot presets, rulesets and preset forms.
    #[serde(rename = "catalog")]
    Catalog,

    /// Return the current session state.
    #[serde(rename = "state")]
    State,

    /// Return the current evaluations of both scenarios.
    #[serde(rename = "evaluate")]
    Evaluate,

    /// Apply one edit to scenario `which`, then return both evaluations.
    #[serde(rename = "edit")]
    Edit {
        which: ScenarioSlot,
        edit: ScenarioChange,
    },

    /// Evaluate a free-standing configuration without touching the session.
    #[serde(rename = "evaluate_config")]
    EvaluateConfig {
        scenario: ScenarioConfig,
        #[serde(default)]
        which: Option<ScenarioSlot>,
    },

    /// Key-stats report for scenario A (and B in compare mode).
    #[serde(rename = "report")]
    Report,

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (session → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "catalog")]
    Catalog { catalog: Catalog },

    #[serde(rename = "state")]
    State { state: ScenarioState },

    /// Both scenarios as currently evaluated. `b` is present even in single
    /// mode; the mode only decides what a viewer shows.
    #[serde(rename = "evaluations")]
    Evaluations {
        a: Option<ScenarioResult>,
        b: Option<ScenarioResult>,
    },

    /// Result of `evaluate_config`.
    #[serde(rename = "evaluation")]
    Evaluation { result: ScenarioResult },

    #[serde(rename = "report")]
    Report { reports: Vec<ScenarioReport> },

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

pub fn error_response(message: impl Into<String>) -> AgentResponse {
    make_response(ResponsePayload::Error {
        message: message.into(),
    })
}
