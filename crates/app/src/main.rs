//! `lotfit`: headless front end for the zoning engine.
//!
//! Without `--agent` it evaluates the session once and prints the key-stats
//! report for scenario A (and B with `--compare`). With `--agent` it serves
//! the JSON-lines protocol on stdin/stdout. Logs always go to stderr.

mod agent_mode;
mod cli;

use std::process::ExitCode;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use zoning::report::scenario_report;
use zoning::scenario::ScenarioMode;
use zoning::{Catalog, ScenarioEvaluations, ScenarioSlot, ScenarioState, ZoningPlugin};

use cli::{read_file, CliArgs, CliError};

const DEFAULT_LOG_FILTER: &str = "zoning=info,lotfit=info";

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin {
        filter: args
            .log
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        level: Level::INFO,
        ..default()
    });

    if let Err(e) = setup_session(&mut app, &args) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    if args.agent {
        agent_mode::run_agent_mode(&mut app);
    } else {
        print_summary(&app);
    }
    ExitCode::SUCCESS
}

/// Insert the catalog and starting state, add [`ZoningPlugin`] and run the
/// first update so both scenarios are evaluated.
pub fn setup_session(app: &mut App, args: &CliArgs) -> Result<(), CliError> {
    let catalog = match &args.catalog {
        Some(path) => {
            let catalog = Catalog::from_json_str(&read_file(path)?)?;
            info!("Loaded catalog from {}", path.display());
            catalog
        }
        None => Catalog::builtin(),
    };

    let mut state = match &args.state {
        Some(path) => {
            let state: ScenarioState = serde_json::from_str(&read_file(path)?)
                .map_err(|e| CliError::StateParse(e.to_string()))?;
            state.scenario_a.validate()?;
            state.scenario_b.validate()?;
            info!("Loaded session state from {}", path.display());
            state
        }
        None => ScenarioState::initial(&catalog),
    };
    state.normalize(&catalog);
    if args.compare {
        state.mode = ScenarioMode::Compare;
    }

    app.insert_resource(catalog);
    app.insert_resource(state);
    app.add_plugins(ZoningPlugin);
    app.update();
    Ok(())
}

fn print_summary(app: &App) {
    let world = app.world();
    let mode = world.resource::<ScenarioState>().mode;
    let evaluations = world.resource::<ScenarioEvaluations>();

    let slots: &[ScenarioSlot] = match mode {
        ScenarioMode::Single => &[ScenarioSlot::A],
        ScenarioMode::Compare => &[ScenarioSlot::A, ScenarioSlot::B],
    };
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match evaluations.get(*slot) {
            Some(result) => println!("{}", scenario_report(result)),
            None => println!("Scenario {slot:?}: not evaluated (catalog cannot resolve it)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use zoning::evaluate::ViolationCode;

    fn session(args: &CliArgs) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        setup_session(&mut app, args).unwrap();
        app
    }

    #[test]
    fn test_default_session_evaluates_scenario_a() {
        let app = session(&CliArgs::default());
        let evaluations = app.world().resource::<ScenarioEvaluations>();
        let a = evaluations.get(ScenarioSlot::A).unwrap();
        assert!(a.evaluation.is_compliant());
        assert_eq!(
            app.world().resource::<ScenarioState>().mode,
            ScenarioMode::Single
        );
    }

    #[test]
    fn test_compare_flag_sets_mode() {
        let app = session(&CliArgs {
            compare: true,
            ..Default::default()
        });
        assert_eq!(
            app.world().resource::<ScenarioState>().mode,
            ScenarioMode::Compare
        );
    }

    #[test]
    fn test_state_file_is_loaded_and_normalized() {
        let mut state = ScenarioState::default();
        state.scenario_a.preset_id = "six_flat".into();
        state.scenario_b.ruleset_id = "missing".into();
        let path = std::env::temp_dir().join(format!("lotfit_state_{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

        let app = session(&CliArgs {
            state: Some(path.clone()),
            ..Default::default()
        });
        let _ = std::fs::remove_file(&path);

        let world = app.world();
        assert_eq!(
            world.resource::<ScenarioState>().scenario_b.ruleset_id,
            "sample_current"
        );
        let a = world
            .resource::<ScenarioEvaluations>()
            .get(ScenarioSlot::A)
            .unwrap();
        assert!(a.evaluation.has_violation(ViolationCode::Far));
    }

    #[test]
    fn test_bad_catalog_file_is_reported() {
        let path = std::env::temp_dir().join(format!("lotfit_catalog_{}.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();
        let mut app = App::new();
        let err = setup_session(
            &mut app,
            &CliArgs {
                catalog: Some(path.clone()),
                ..Default::default()
            },
        )
        .unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, CliError::Catalog(_)));
    }
}
