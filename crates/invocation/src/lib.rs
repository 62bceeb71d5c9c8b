//! Canonical magic invocation types.
//!
//! Host kernels recognize magics by a marker at the start of a cell: a single
//! marker (`%name args`) is a line magic, a doubled marker on the first line
//! (`%%name args` followed by a body) is a cell magic. [`Invocation::parse`]
//! turns source text into an [`Invocation`]; [`MagicHost`] wires parsing,
//! dispatch and plain-code fallback together.

mod host;
mod parse;

use magics_registry::{Interpreter, MagicRegistry, MagicResult};

pub use host::{HostError, MagicHost};
pub use parse::ParseError;

/// A magic call recognized in host source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Invocation {
	/// Call a line magic.
	Line {
		/// Magic name (looked up via `find_line_magic`).
		name: String,
		/// Remainder of the invocation line, trimmed.
		line: String,
	},
	/// Call a cell magic.
	Cell {
		/// Magic name (looked up via `find_cell_magic`).
		name: String,
		/// Remainder of the first line, trimmed.
		line: String,
		/// Everything after the first line, unmodified.
		cell: String,
	},
}

impl Invocation {
	/// Creates a line magic invocation.
	pub fn line(name: impl Into<String>, line: impl Into<String>) -> Self {
		Self::Line {
			name: name.into(),
			line: line.into(),
		}
	}

	/// Creates a cell magic invocation.
	pub fn cell(name: impl Into<String>, line: impl Into<String>, cell: impl Into<String>) -> Self {
		Self::Cell {
			name: name.into(),
			line: line.into(),
			cell: cell.into(),
		}
	}

	/// Returns the magic name.
	pub fn name(&self) -> &str {
		match self {
			Self::Line { name, .. } | Self::Cell { name, .. } => name,
		}
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		match self {
			Self::Line { name, line } if line.is_empty() => format!("line:{name}"),
			Self::Line { name, line } => format!("line:{name} {line}"),
			Self::Cell { name, line, cell } if line.is_empty() => format!("cell:{name} ({} bytes)", cell.len()),
			Self::Cell { name, line, cell } => format!("cell:{name} {line} ({} bytes)", cell.len()),
		}
	}

	/// Dispatches this invocation through `registry`.
	pub fn run(&self, registry: &MagicRegistry, interp: &mut dyn Interpreter) -> MagicResult {
		match self {
			Self::Line { name, line } => registry.call_line_magic(name, line, interp),
			Self::Cell { name, line, cell } => registry.call_cell_magic(name, line, cell, interp),
		}
	}
}

#[cfg(test)]
mod tests;
