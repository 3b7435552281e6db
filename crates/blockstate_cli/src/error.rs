use blockstate::state::StateError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem read failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input or output JSON failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Block-state decode failure.
	#[error(transparent)]
	State(#[from] StateError),
	/// Accessor invoked without an argument it needs.
	#[error("{accessor} requires --{argument}")]
	MissingArgument {
		/// Accessor name as given on the command line.
		accessor: &'static str,
		/// Missing flag name.
		argument: &'static str,
	},
}
