use crate::error::InterpreterError;
use crate::value::{MimeBundle, Value};

/// Host interpreter operations available to magics.
///
/// The kernel implements this trait and hands a mutable reference to every
/// magic it dispatches. Magics use it for side effects only; the registry
/// never calls it.
pub trait Interpreter {
	/// Displays a value using the host's default rendering.
	fn display(&mut self, value: Value) -> Result<(), InterpreterError>;

	/// Displays pre-rendered output, keyed by MIME type.
	fn display_mime(&mut self, bundle: &MimeBundle) -> Result<(), InterpreterError>;

	/// Binds `name` to `value` in the interpreter's namespace.
	fn set_variable(&mut self, name: &str, value: Value) -> Result<(), InterpreterError>;

	/// Reads a variable, returning `None` if it is unset.
	fn get_variable(&mut self, name: &str) -> Result<Option<Value>, InterpreterError>;

	/// Runs interpreter-native code and returns the value it produced, if any.
	fn interpret(&mut self, code: &str) -> Result<Option<Value>, InterpreterError>;
}
