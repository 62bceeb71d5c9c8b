//! Opaque values exchanged between magics and the host interpreter.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Pre-rendered display output keyed by MIME type.
///
/// Insertion order is the host's preference order, richest first.
pub type MimeBundle = IndexMap<String, String>;

/// Type-erased value produced by a magic or stored in the interpreter.
///
/// Cloning is cheap; clones share the same allocation.
#[derive(Clone)]
pub struct Value(Arc<dyn Any + Send + Sync>);

impl Value {
	/// Wraps any shareable value.
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self(Arc::new(value))
	}

	/// Returns the inner value if it has type `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.0.downcast_ref::<T>()
	}

	/// Returns true if the inner value has type `T`.
	pub fn is<T: Any>(&self) -> bool {
		self.0.is::<T>()
	}

	/// Returns the inner value as a string slice if it holds a `String`.
	pub fn as_str(&self) -> Option<&str> {
		self.downcast_ref::<String>().map(String::as_str)
	}

	/// Returns true if both values share the same allocation.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.0, &b.0)
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.as_str() {
			Some(s) => f.debug_tuple("Value").field(&s).finish(),
			None => f.write_str("Value(<opaque>)"),
		}
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::new(value.to_owned())
	}
}
