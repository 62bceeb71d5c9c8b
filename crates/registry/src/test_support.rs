//! Interpreter stand-ins for tests.

use rustc_hash::FxHashMap as HashMap;

use crate::error::InterpreterError;
use crate::interpreter::Interpreter;
use crate::value::{MimeBundle, Value};

/// Interpreter that rejects every operation.
///
/// Useful when a test must prove that a magic performs no side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedInterpreter;

impl Interpreter for UnsupportedInterpreter {
	fn display(&mut self, _value: Value) -> Result<(), InterpreterError> {
		Err(InterpreterError::Unsupported("display"))
	}

	fn display_mime(&mut self, _bundle: &MimeBundle) -> Result<(), InterpreterError> {
		Err(InterpreterError::Unsupported("display_mime"))
	}

	fn set_variable(&mut self, _name: &str, _value: Value) -> Result<(), InterpreterError> {
		Err(InterpreterError::Unsupported("set_variable"))
	}

	fn get_variable(&mut self, _name: &str) -> Result<Option<Value>, InterpreterError> {
		Err(InterpreterError::Unsupported("get_variable"))
	}

	fn interpret(&mut self, _code: &str) -> Result<Option<Value>, InterpreterError> {
		Err(InterpreterError::Unsupported("interpret"))
	}
}

/// Interpreter that records every side effect.
///
/// `interpret` records the code and echoes it back as a string value.
#[derive(Debug, Default)]
pub struct RecordingInterpreter {
	/// Values passed to `display`, in order.
	pub displayed: Vec<Value>,
	/// Bundles passed to `display_mime`, in order.
	pub displayed_mime: Vec<MimeBundle>,
	/// Current variable bindings.
	pub variables: HashMap<String, Value>,
	/// Code passed to `interpret`, in order.
	pub interpreted: Vec<String>,
}

impl Interpreter for RecordingInterpreter {
	fn display(&mut self, value: Value) -> Result<(), InterpreterError> {
		self.displayed.push(value);
		Ok(())
	}

	fn display_mime(&mut self, bundle: &MimeBundle) -> Result<(), InterpreterError> {
		self.displayed_mime.push(bundle.clone());
		Ok(())
	}

	fn set_variable(&mut self, name: &str, value: Value) -> Result<(), InterpreterError> {
		self.variables.insert(name.to_owned(), value);
		Ok(())
	}

	fn get_variable(&mut self, name: &str) -> Result<Option<Value>, InterpreterError> {
		Ok(self.variables.get(name).cloned())
	}

	fn interpret(&mut self, code: &str) -> Result<Option<Value>, InterpreterError> {
		self.interpreted.push(code.to_owned());
		Ok(Some(Value::from(code)))
	}
}
