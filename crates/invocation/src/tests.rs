use magics_registry::test_support::UnsupportedInterpreter;
use magics_registry::{CellMagic, MagicRegistry, Value};
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case::plain_code("x = 1")]
#[case::empty("")]
#[case::indented_marker("  %time")]
#[case::other_marker("!ls")]
fn non_magic_source_is_not_an_invocation(#[case] source: &str) {
	assert_eq!(Invocation::parse(source, '%').unwrap(), None);
}

#[rstest]
#[case::bare("%time", "time", "")]
#[case::args("%time sleep 1", "time", "sleep 1")]
#[case::padded("%time   sleep 1  ", "time", "sleep 1")]
#[case::tab_separated("%env\tPATH", "env", "PATH")]
#[case::trailing_newline("%pwd\n", "pwd", "")]
#[case::trailing_blank_lines("%pwd\n  \n", "pwd", "")]
fn parses_line_magic(#[case] source: &str, #[case] name: &str, #[case] line: &str) {
	assert_eq!(Invocation::parse(source, '%').unwrap(), Some(Invocation::line(name, line)));
}

#[test]
fn parses_cell_magic_with_body_unchanged() {
	let source = "%%sql -t \n\n\tSELECT *\nFROM users\nLIMIT 100\n\n";
	let invocation = Invocation::parse(source, '%').unwrap().expect("cell magic");

	assert_eq!(
		invocation,
		Invocation::cell("sql", "-t", "\n\tSELECT *\nFROM users\nLIMIT 100\n\n")
	);
}

#[test]
fn cell_magic_without_body_has_empty_cell() {
	let invocation = Invocation::parse("%%bash", '%').unwrap();
	assert_eq!(invocation, Some(Invocation::cell("bash", "", "")));
}

#[test]
fn cell_magic_first_line_crlf_is_trimmed_from_line_only() {
	let invocation = Invocation::parse("%%bash -x\r\necho hi\r\n", '%').unwrap();
	assert_eq!(invocation, Some(Invocation::cell("bash", "-x", "echo hi\r\n")));
}

#[rstest]
#[case::line_marker_only("%", "%")]
#[case::line_space("% time", "%")]
#[case::cell_marker_only("%%", "%%")]
#[case::cell_newline("%%\nbody", "%%")]
#[case::cell_space("%% sql", "%%")]
fn missing_name_is_rejected(#[case] source: &str, #[case] prefix: &str) {
	assert_eq!(
		Invocation::parse(source, '%'),
		Err(ParseError::MissingName {
			prefix: prefix.to_owned()
		})
	);
}

#[test]
fn line_magic_with_more_lines_is_rejected() {
	let err = Invocation::parse("%time x\ny = 2", '%').unwrap_err();
	assert_eq!(err, ParseError::TrailingInput { name: "time".to_owned() });
}

#[test]
fn custom_marker() {
	assert_eq!(Invocation::parse("!cd /tmp", '!').unwrap(), Some(Invocation::line("cd", "/tmp")));
	assert_eq!(
		Invocation::parse("!!script\nbody", '!').unwrap(),
		Some(Invocation::cell("script", "", "body"))
	);
	assert_eq!(Invocation::parse("%cd /tmp", '!').unwrap(), None);
}

#[test]
fn describe_is_compact() {
	assert_eq!(Invocation::line("time", "").describe(), "line:time");
	assert_eq!(Invocation::line("time", "sleep 1").describe(), "line:time sleep 1");
	assert_eq!(Invocation::cell("sql", "", "abc").describe(), "cell:sql (3 bytes)");
	assert_eq!(Invocation::cell("sql", "-t", "").describe(), "cell:sql -t (0 bytes)");
	assert_eq!(Invocation::cell("sql", "-t", "").name(), "sql");
}

#[test]
fn run_dispatches_by_kind() {
	let registry = MagicRegistry::new();
	registry.add_line_cell_magic(
		"t",
		CellMagic::new(|line, cell, _| Ok(Some(Value::from(format!("{line}/{}", cell.unwrap_or("(null)")))))),
	);

	let line = Invocation::line("t", "a")
		.run(&registry, &mut UnsupportedInterpreter)
		.unwrap()
		.unwrap();
	assert_eq!(line.as_str(), Some("a/(null)"));

	let cell = Invocation::parse("%%t a\nb", '%')
		.unwrap()
		.unwrap()
		.run(&registry, &mut UnsupportedInterpreter)
		.unwrap()
		.unwrap();
	assert_eq!(cell.as_str(), Some("a/b"));

	let err = Invocation::cell("missing", "", "")
		.run(&registry, &mut UnsupportedInterpreter)
		.unwrap_err();
	assert!(err.is_not_found());
}
