//! Magic handler handles.
//!
//! Magics are stored as cheaply clonable handles around shared closures.
//! A [`LineMagic`] is either a direct line function or an adapter that calls
//! a [`CellMagic`] with no cell body; the adapter is produced by
//! [`MagicRegistry::add_line_cell_magic`](crate::MagicRegistry::add_line_cell_magic).

use std::fmt;
use std::sync::Arc;

use crate::error::MagicResult;
use crate::interpreter::Interpreter;

/// Function signature for line magic handlers.
pub type LineMagicFn = dyn Fn(&str, &mut dyn Interpreter) -> MagicResult + Send + Sync;

/// Function signature for cell magic handlers.
///
/// The cell is `None` when a line-and-cell magic is invoked as a line magic.
pub type CellMagicFn = dyn Fn(&str, Option<&str>, &mut dyn Interpreter) -> MagicResult + Send + Sync;

/// Which of the two magic tables a name is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagicKind {
	/// Invoked from a line starting with a single marker.
	Line,
	/// Invoked from a cell whose first line starts with two markers.
	Cell,
}

impl MagicKind {
	/// Returns the lowercase label used in messages and logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Line => "line",
			Self::Cell => "cell",
		}
	}
}

impl fmt::Display for MagicKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A magic callable as a line magic.
#[derive(Clone)]
pub struct LineMagic(LineRepr);

#[derive(Clone)]
enum LineRepr {
	Direct(Arc<LineMagicFn>),
	CellAsLine(CellMagic),
}

impl LineMagic {
	/// Wraps a line handler.
	///
	/// The handler receives the invocation line with whitespace trimmed.
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&str, &mut dyn Interpreter) -> MagicResult + Send + Sync + 'static,
	{
		Self(LineRepr::Direct(Arc::new(handler)))
	}

	/// Adapts a cell magic so it can be called as a line magic.
	///
	/// The adapter holds the given handle, not a name; replacing the cell
	/// magic in a registry later does not change what the adapter calls.
	pub fn from_cell(cell: CellMagic) -> Self {
		Self(LineRepr::CellAsLine(cell))
	}

	/// Invokes the handler.
	pub fn call(&self, line: &str, interp: &mut dyn Interpreter) -> MagicResult {
		match &self.0 {
			LineRepr::Direct(handler) => handler(line, interp),
			LineRepr::CellAsLine(cell) => cell.call(line, None, interp),
		}
	}

	/// Returns the wrapped cell magic if this is a cell-as-line adapter.
	pub fn as_cell_magic(&self) -> Option<&CellMagic> {
		match &self.0 {
			LineRepr::Direct(_) => None,
			LineRepr::CellAsLine(cell) => Some(cell),
		}
	}

	/// Returns true if both handles call the same underlying handler.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		match (&a.0, &b.0) {
			(LineRepr::Direct(a), LineRepr::Direct(b)) => Arc::ptr_eq(a, b),
			(LineRepr::CellAsLine(a), LineRepr::CellAsLine(b)) => CellMagic::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl fmt::Debug for LineMagic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			LineRepr::Direct(_) => f.write_str("LineMagic(<fn>)"),
			LineRepr::CellAsLine(_) => f.write_str("LineMagic(<cell>)"),
		}
	}
}

/// A magic callable as a cell magic.
#[derive(Clone)]
pub struct CellMagic(Arc<CellMagicFn>);

impl CellMagic {
	/// Wraps a cell handler.
	///
	/// The handler receives the invocation line with whitespace trimmed and
	/// the cell body exactly as supplied.
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&str, Option<&str>, &mut dyn Interpreter) -> MagicResult + Send + Sync + 'static,
	{
		Self(Arc::new(handler))
	}

	/// Invokes the handler.
	pub fn call(&self, line: &str, cell: Option<&str>, interp: &mut dyn Interpreter) -> MagicResult {
		(self.0)(line, cell, interp)
	}

	/// Returns true if both handles share the same handler.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}
}

impl fmt::Debug for CellMagic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("CellMagic(<fn>)")
	}
}
