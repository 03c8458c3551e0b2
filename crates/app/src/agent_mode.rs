//! Headless `--agent` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`zoning::agent_protocol`] for the full schema.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use zoning::agent_protocol::{
    error_response, make_response, AgentCommand, AgentResponse, ResponsePayload,
    PROTOCOL_VERSION,
};
use zoning::report::scenario_report;
use zoning::scenario::{evaluate_config, LastEditOutcome, ScenarioMode};
use zoning::{
    Catalog, ParkingGeometry, ScenarioEdit, ScenarioEvaluations, ScenarioSlot, ScenarioState,
};

pub fn run_agent_mode(app: &mut App) {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &make_response(ResponsePayload::Ready));
    info!("lotfit agent mode v{PROTOCOL_VERSION} ready, waiting for commands on stdin");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                write_response(&mut stdout, &error_response(format!("Parse error: {e}")));
                continue;
            }
        };

        let response = process_command(cmd, app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    info!("lotfit agent mode shutting down");
}

fn write_response(out: &mut impl Write, response: &AgentResponse) {
    let line = serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to serialize response: {e}");
        format!(
            r#"{{"protocol_version":{PROTOCOL_VERSION},"type":"error","message":"internal serialization error"}}"#
        )
    });
    if writeln!(out, "{line}").and_then(|_| out.flush()).is_err() {
        error!("stdout closed");
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn evaluations_payload(app: &App) -> ResponsePayload {
    let evaluations = app.world().resource::<ScenarioEvaluations>();
    ResponsePayload::Evaluations {
        a: evaluations.a.clone(),
        b: evaluations.b.clone(),
    }
}

pub fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Catalog => make_response(ResponsePayload::Catalog {
            catalog: app.world().resource::<Catalog>().clone(),
        }),

        AgentCommand::State => make_response(ResponsePayload::State {
            state: app.world().resource::<ScenarioState>().clone(),
        }),

        AgentCommand::Evaluate => make_response(evaluations_payload(app)),

        AgentCommand::Edit { which, edit } => {
            let world = app.world_mut();
            world.resource_mut::<LastEditOutcome>().0 = None;
            world.send_event(ScenarioEdit::new(which, edit));

            // One update applies the edit and re-evaluates.
            app.update();

            match &app.world().resource::<LastEditOutcome>().0 {
                Some(Err(message)) => error_response(message.clone()),
                _ => make_response(evaluations_payload(app)),
            }
        }

        AgentCommand::EvaluateConfig { scenario, which } => {
            if let Err(e) = scenario.validate() {
                return error_response(e.to_string());
            }
            let world = app.world();
            match evaluate_config(
                world.resource::<Catalog>(),
                world.resource::<ParkingGeometry>(),
                which.unwrap_or(ScenarioSlot::A),
                &scenario,
            ) {
                Some(result) => make_response(ResponsePayload::Evaluation { result }),
                None => error_response("Catalog cannot resolve this scenario"),
            }
        }

        AgentCommand::Report => {
            let world = app.world();
            let evaluations = world.resource::<ScenarioEvaluations>();
            let mut reports = Vec::new();
            reports.extend(evaluations.a.as_ref().map(scenario_report));
            if world.resource::<ScenarioState>().mode == ScenarioMode::Compare {
                reports.extend(evaluations.b.as_ref().map(scenario_report));
            }
            make_response(ResponsePayload::Report { reports })
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}
