//! Name-based invocation of registered magics.

use crate::error::{MagicError, MagicResult};
use crate::interpreter::Interpreter;
use crate::magic::MagicKind;
use crate::registry::MagicRegistry;

impl MagicRegistry {
	/// Finds and calls a registered magic as line magic.
	///
	/// The invocation line is passed with surrounding whitespace trimmed.
	/// Errors returned by the magic are passed through unchanged.
	pub fn call_line_magic(&self, name: &str, line: &str, interp: &mut dyn Interpreter) -> MagicResult {
		let Some(magic) = self.find_line_magic(name) else {
			return Err(not_found(MagicKind::Line, name));
		};

		tracing::trace!(name, "calling line magic");
		magic.call(line.trim(), interp)
	}

	/// Finds and calls a registered magic as cell magic.
	///
	/// The invocation line is passed with surrounding whitespace trimmed; the
	/// cell is passed exactly as given, including leading and trailing blank
	/// lines.
	pub fn call_cell_magic(&self, name: &str, line: &str, cell: &str, interp: &mut dyn Interpreter) -> MagicResult {
		let Some(magic) = self.find_cell_magic(name) else {
			return Err(not_found(MagicKind::Cell, name));
		};

		tracing::trace!(name, cell_len = cell.len(), "calling cell magic");
		magic.call(line.trim(), Some(cell), interp)
	}
}

fn not_found(kind: MagicKind, name: &str) -> MagicError {
	tracing::debug!(%kind, name, "magic not found");
	MagicError::NotFound {
		kind,
		name: name.to_owned(),
	}
}
