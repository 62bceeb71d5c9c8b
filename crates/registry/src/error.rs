use thiserror::Error;

use crate::magic::MagicKind;
use crate::value::Value;

/// Result of a magic invocation.
///
/// `Ok(None)` means the magic ran and produced nothing to display.
pub type MagicResult = Result<Option<Value>, MagicError>;

/// Errors surfaced by magic dispatch.
///
/// Only [`MagicError::NotFound`] is produced by the dispatcher itself. The
/// remaining variants are for magic implementations; the dispatcher returns
/// them to the caller untouched.
#[derive(Error, Debug)]
pub enum MagicError {
	/// No magic of the requested kind is registered under this name.
	#[error("unknown {kind} magic function: {name}")]
	NotFound {
		/// Table that was searched.
		kind: MagicKind,
		/// Requested name.
		name: String,
	},
	/// An interpreter capability call failed inside a magic.
	#[error(transparent)]
	Interpreter(#[from] InterpreterError),
	/// The invocation line could not be understood by the magic.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// General magic failure with message.
	#[error("{0}")]
	Failed(String),
	/// Catch-all for errors from other libraries.
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl MagicError {
	/// Returns true if this is a dispatch miss rather than a magic failure.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Errors reported by an [`Interpreter`](crate::Interpreter) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
	/// The host does not provide this capability.
	#[error("unsupported operation: {0}")]
	Unsupported(&'static str),
	/// The host attempted the operation and it failed.
	#[error("{0}")]
	Failed(String),
}
