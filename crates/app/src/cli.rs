// ---------------------------------------------------------------------------
// Command-line options and startup errors
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;

use zoning::{CatalogError, ScenarioError};

/// Headless lot-fit evaluator
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "lotfit")]
#[command(about = "Evaluate a lot, a zoning ruleset and a housing form", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Read JSON commands from stdin, one per line
    #[arg(long)]
    pub agent: bool,

    /// Print scenario B next to scenario A
    #[arg(long)]
    pub compare: bool,

    /// Replace the built-in catalog with a JSON file
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Start from a saved session state
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Log filter (RUST_LOG still takes precedence)
    #[arg(long, env = "LOTFIT_LOG", value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Debug)]
pub enum CliError {
    Io { path: PathBuf, source: std::io::Error },
    Catalog(CatalogError),
    /// The state file is not valid JSON for a session state.
    StateParse(String),
    State(ScenarioError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io { path, source } => {
                write!(f, "Cannot read {}: {source}", path.display())
            }
            CliError::Catalog(e) => write!(f, "{e}"),
            CliError::StateParse(msg) => write!(f, "Invalid state JSON: {msg}"),
            CliError::State(e) => write!(f, "Invalid state: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io { source, .. } => Some(source),
            CliError::Catalog(e) => Some(e),
            CliError::State(e) => Some(e),
            CliError::StateParse(_) => None,
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}

impl From<ScenarioError> for CliError {
    fn from(e: ScenarioError) -> Self {
        CliError::State(e)
    }
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("lotfit").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_summary_mode() {
        let args = parse(&[]).unwrap();
        assert!(!args.agent);
        assert!(!args.compare);
        assert!(args.catalog.is_none());
        assert!(args.state.is_none());
    }

    #[test]
    fn test_flags_and_paths() {
        let args = parse(&["--compare", "--catalog", "c.json", "--agent"]).unwrap();
        assert!(args.agent);
        assert!(args.compare);
        assert_eq!(args.catalog, Some(PathBuf::from("c.json")));
        assert!(args.state.is_none());
    }

    #[test]
    fn test_equals_form_is_accepted() {
        let args = parse(&["--state=saved.json", "--log=zoning=debug"]).unwrap();
        assert_eq!(args.state, Some(PathBuf::from("saved.json")));
        assert_eq!(args.log.as_deref(), Some("zoning=debug"));
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let err = parse(&["--state"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_argument_is_an_error() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_reported_as_display_help() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/nonexistent/lotfit/catalog.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
