//! Registration and dispatch of named line and cell magics.
//!
//! A host kernel owns one [`MagicRegistry`]. Extensions register magics into
//! it by name; the kernel then dispatches `%name line` invocations through
//! [`MagicRegistry::call_line_magic`] and `%%name line` cells through
//! [`MagicRegistry::call_cell_magic`], handing each magic an [`Interpreter`]
//! for side effects.
//!
//! # Example
//!
//! ```
//! use magics_registry::{CellMagic, LineMagic, MagicRegistry, Value};
//! # use magics_registry::{Interpreter, InterpreterError, MimeBundle};
//! # struct Host;
//! # impl Interpreter for Host {
//! # 	fn display(&mut self, _: Value) -> Result<(), InterpreterError> { Ok(()) }
//! # 	fn display_mime(&mut self, _: &MimeBundle) -> Result<(), InterpreterError> { Ok(()) }
//! # 	fn set_variable(&mut self, _: &str, _: Value) -> Result<(), InterpreterError> { Ok(()) }
//! # 	fn get_variable(&mut self, _: &str) -> Result<Option<Value>, InterpreterError> { Ok(None) }
//! # 	fn interpret(&mut self, _: &str) -> Result<Option<Value>, InterpreterError> { Ok(None) }
//! # }
//!
//! let registry = MagicRegistry::new();
//! registry.add_line_magic("echo", LineMagic::new(|line, _interp| Ok(Some(Value::from(line)))));
//! registry.add_cell_magic("sql", CellMagic::new(|line, cell, _interp| {
//! 	Ok(Some(Value::from(format!("{line}/{}", cell.unwrap_or_default()))))
//! }));
//!
//! let out = registry.call_line_magic("echo", "  hi  ", &mut Host).unwrap();
//! assert_eq!(out.unwrap().as_str(), Some("hi"));
//! ```

pub mod config;
mod dispatch;
mod error;
mod interpreter;
mod magic;
mod registry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod value;

pub use config::{ConfigError, MagicsConfig};
pub use error::{InterpreterError, MagicError, MagicResult};
pub use interpreter::Interpreter;
pub use magic::{CellMagic, CellMagicFn, LineMagic, LineMagicFn, MagicKind};
pub use registry::{DuplicatePolicy, InsertAction, MagicRegistry};
pub use value::{MimeBundle, Value};
