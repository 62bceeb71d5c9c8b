use std::sync::Arc;

use magics_registry::{Interpreter, InterpreterError, MagicError, MagicRegistry, MagicsConfig, Value};

use crate::Invocation;
use crate::parse::ParseError;

/// Errors from [`MagicHost::execute`].
#[derive(Debug, thiserror::Error)]
pub enum HostError {
	/// The source looked like a magic but was malformed.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// Dispatch failed or the magic returned an error.
	#[error(transparent)]
	Magic(#[from] MagicError),
	/// Plain code was forwarded to the interpreter and failed there.
	#[error(transparent)]
	Interpreter(#[from] InterpreterError),
}

impl HostError {
	/// Returns true if the source named a magic that is not registered.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Magic(err) if err.is_not_found())
	}
}

/// Front-end that routes host source text to magics or the interpreter.
#[derive(Debug)]
pub struct MagicHost {
	config: MagicsConfig,
	registry: Arc<MagicRegistry>,
}

impl MagicHost {
	/// Creates a host with a fresh registry built from `config`.
	pub fn new(config: MagicsConfig) -> Self {
		Self {
			registry: Arc::new(MagicRegistry::from_config(&config)),
			config,
		}
	}

	/// Creates a host around an existing, possibly shared, registry.
	pub fn with_registry(config: MagicsConfig, registry: Arc<MagicRegistry>) -> Self {
		Self { config, registry }
	}

	/// Returns the registry extensions register into.
	pub fn registry(&self) -> &Arc<MagicRegistry> {
		&self.registry
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &MagicsConfig {
		&self.config
	}

	/// Recognizes a magic invocation using the configured marker.
	pub fn parse(&self, source: &str) -> Result<Option<Invocation>, ParseError> {
		Invocation::parse(source, self.config.marker)
	}

	/// Runs `source` as a magic if it is one, otherwise as interpreter code.
	pub fn execute(&self, source: &str, interp: &mut dyn Interpreter) -> Result<Option<Value>, HostError> {
		match self.parse(source)? {
			Some(invocation) => {
				tracing::debug!(invocation = %invocation.describe(), "running magic");
				Ok(invocation.run(&self.registry, interp)?)
			}
			None => {
				tracing::trace!(len = source.len(), "forwarding source to interpreter");
				Ok(interp.interpret(source)?)
			}
		}
	}
}

impl Default for MagicHost {
	fn default() -> Self {
		Self::new(MagicsConfig::default())
	}
}

#[cfg(test)]
mod tests {
	use magics_registry::test_support::{RecordingInterpreter, UnsupportedInterpreter};
	use magics_registry::{CellMagic, DuplicatePolicy, LineMagic};
	use pretty_assertions::assert_eq;

	use super::*;

	fn host_with_magics(config: MagicsConfig) -> MagicHost {
		let host = MagicHost::new(config);
		host.registry()
			.add_line_magic("echo", LineMagic::new(|line, _| Ok(Some(Value::from(line)))));
		host.registry().add_cell_magic(
			"sql",
			CellMagic::new(|line, cell, _| Ok(Some(Value::from(format!("{line}|{}", cell.unwrap_or_default()))))),
		);
		host
	}

	fn text(value: Option<Value>) -> Option<String> {
		value.map(|v| v.as_str().expect("string value").to_owned())
	}

	#[test]
	fn executes_line_magic() {
		let host = host_with_magics(MagicsConfig::default());
		let out = host.execute("%echo  hello world ", &mut UnsupportedInterpreter).unwrap();
		assert_eq!(text(out).as_deref(), Some("hello world"));
	}

	#[test]
	fn executes_cell_magic_with_exact_body() {
		let host = host_with_magics(MagicsConfig::default());
		let out = host
			.execute("%%sql -t\nSELECT *\n\n  FROM users\n", &mut UnsupportedInterpreter)
			.unwrap();
		assert_eq!(text(out).as_deref(), Some("-t|SELECT *\n\n  FROM users\n"));
	}

	#[test]
	fn forwards_plain_code_to_interpreter() {
		let host = host_with_magics(MagicsConfig::default());
		let mut interp = RecordingInterpreter::default();

		let out = host.execute("1 + 1", &mut interp).unwrap();

		assert_eq!(text(out).as_deref(), Some("1 + 1"));
		assert_eq!(interp.interpreted, vec!["1 + 1".to_owned()]);
	}

	#[test]
	fn interpreter_failure_on_plain_code_is_reported() {
		let host = MagicHost::default();
		let err = host.execute("x", &mut UnsupportedInterpreter).unwrap_err();
		assert!(matches!(err, HostError::Interpreter(InterpreterError::Unsupported("interpret"))));
	}

	#[test]
	fn unknown_magic_is_not_found() {
		let host = host_with_magics(MagicsConfig::default());

		let err = host.execute("%sql x", &mut UnsupportedInterpreter).unwrap_err();
		assert!(err.is_not_found());
		assert_eq!(err.to_string(), "unknown line magic function: sql");

		let err = host.execute("%%echo x\nbody", &mut UnsupportedInterpreter).unwrap_err();
		assert_eq!(err.to_string(), "unknown cell magic function: echo");
	}

	#[test]
	fn malformed_magic_is_a_parse_error() {
		let host = host_with_magics(MagicsConfig::default());
		let err = host.execute("% echo", &mut UnsupportedInterpreter).unwrap_err();
		assert!(matches!(err, HostError::Parse(ParseError::MissingName { .. })));
		assert!(!err.is_not_found());
	}

	#[test]
	fn configured_marker_is_used() {
		let config = MagicsConfig {
			marker: '!',
			..MagicsConfig::default()
		};
		let host = host_with_magics(config);
		let mut interp = RecordingInterpreter::default();

		let out = host.execute("!echo hi", &mut interp).unwrap();
		assert_eq!(text(out).as_deref(), Some("hi"));

		host.execute("%echo hi", &mut interp).unwrap();
		assert_eq!(interp.interpreted, vec!["%echo hi".to_owned()]);
	}

	#[test]
	fn shared_registry_is_visible_to_host() {
		let registry = Arc::new(MagicRegistry::with_policy(DuplicatePolicy::FirstWins));
		let host = MagicHost::with_registry(MagicsConfig::default(), Arc::clone(&registry));

		registry.add_line_magic("late", LineMagic::new(|_, _| Ok(Some(Value::from("late")))));

		let out = host.execute("%late", &mut UnsupportedInterpreter).unwrap();
		assert_eq!(text(out).as_deref(), Some("late"));
		assert_eq!(host.registry().policy(), DuplicatePolicy::FirstWins);
	}
}
