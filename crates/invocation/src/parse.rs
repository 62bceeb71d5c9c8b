use crate::Invocation;

/// Errors recognizing a magic invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	/// The marker is not directly followed by a name.
	#[error("missing magic name after {prefix:?}")]
	MissingName {
		/// The marker or doubled marker that was found.
		prefix: String,
	},
	/// A line magic was followed by further non-blank lines.
	#[error("line magic {name:?} cannot be followed by more input; use a cell magic")]
	TrailingInput {
		/// Name of the line magic.
		name: String,
	},
}

impl Invocation {
	/// Recognizes a magic invocation at the start of `source`.
	///
	/// Returns `Ok(None)` when `source` does not start with `marker`, meaning
	/// it is plain interpreter code. The cell body of a cell magic is
	/// everything after the first newline, byte for byte.
	pub fn parse(source: &str, marker: char) -> Result<Option<Self>, ParseError> {
		let Some(rest) = source.strip_prefix(marker) else {
			return Ok(None);
		};

		if let Some(rest) = rest.strip_prefix(marker) {
			let (first, cell) = rest.split_once('\n').unwrap_or((rest, ""));
			let (name, line) = split_name(first).ok_or_else(|| ParseError::MissingName {
				prefix: format!("{marker}{marker}"),
			})?;
			return Ok(Some(Self::cell(name, line, cell)));
		}

		let (first, tail) = rest.split_once('\n').unwrap_or((rest, ""));
		let (name, line) = split_name(first).ok_or_else(|| ParseError::MissingName {
			prefix: marker.to_string(),
		})?;
		if !tail.trim().is_empty() {
			return Err(ParseError::TrailingInput { name: name.to_owned() });
		}
		Ok(Some(Self::line(name, line)))
	}
}

/// Splits `name rest` where the name starts immediately after the marker.
fn split_name(first: &str) -> Option<(&str, &str)> {
	if first.starts_with(char::is_whitespace) {
		return None;
	}
	let end = first.find(char::is_whitespace).unwrap_or(first.len());
	let (name, line) = first.split_at(end);
	if name.is_empty() {
		return None;
	}
	Some((name, line.trim()))
}
