use std::fmt;

use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;
use serde::Deserialize;

use crate::config::MagicsConfig;
use crate::magic::{CellMagic, LineMagic, MagicKind};

/// How a registration resolves against an existing entry with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
	/// The new magic replaces the existing one.
	#[default]
	LastWins,
	/// The existing magic is kept and the new one is dropped.
	FirstWins,
}

/// Result of a single registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Name was new; magic inserted.
	InsertedNew,
	/// Name existed; kept the existing magic (policy chose existing).
	KeptExisting,
	/// Name existed; replaced with the new magic (policy chose new).
	ReplacedExisting,
}

#[derive(Clone, Default)]
struct MagicTables {
	line: HashMap<Box<str>, LineMagic>,
	cell: HashMap<Box<str>, CellMagic>,
}

/// Name-keyed tables of line and cell magics.
///
/// Line and cell names are separate namespaces. Both tables live in one
/// immutable snapshot; lookups load the current snapshot without locking and
/// registrations publish a modified copy, so a magic may register or call
/// other magics while it is running.
pub struct MagicRegistry {
	tables: ArcSwap<MagicTables>,
	policy: DuplicatePolicy,
}

impl MagicRegistry {
	/// Creates an empty registry with last-write-wins registration.
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates an empty registry with a custom duplicate policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			tables: ArcSwap::from_pointee(MagicTables::default()),
			policy,
		}
	}

	/// Creates an empty registry configured from `config`.
	pub fn from_config(config: &MagicsConfig) -> Self {
		Self::with_policy(config.duplicate_policy)
	}

	/// Returns the duplicate policy applied to registrations.
	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Adds a magic that can be called (only) as line magic.
	pub fn add_line_magic(&self, name: &str, magic: LineMagic) -> InsertAction {
		let policy = self.policy;
		let action = self.update(|tables| insert(&mut tables.line, name, magic.clone(), policy));
		tracing::debug!(kind = %MagicKind::Line, name, ?action, "registered magic");
		action
	}

	/// Adds a magic that can be called (only) as cell magic.
	pub fn add_cell_magic(&self, name: &str, magic: CellMagic) -> InsertAction {
		let policy = self.policy;
		let action = self.update(|tables| insert(&mut tables.cell, name, magic.clone(), policy));
		tracing::debug!(kind = %MagicKind::Cell, name, ?action, "registered magic");
		action
	}

	/// Adds a magic that can be called as line magic or as cell magic.
	///
	/// The cell table receives `magic`; the line table receives an adapter
	/// that calls it with no cell body. Both tables change in one step.
	/// The returned action describes the cell table.
	pub fn add_line_cell_magic(&self, name: &str, magic: CellMagic) -> InsertAction {
		let policy = self.policy;
		let action = self.update(|tables| {
			insert(&mut tables.line, name, LineMagic::from_cell(magic.clone()), policy);
			insert(&mut tables.cell, name, magic.clone(), policy)
		});
		tracing::debug!(kind = "line+cell", name, ?action, "registered magic");
		action
	}

	/// Finds by name a magic that can be called as line magic.
	pub fn find_line_magic(&self, name: &str) -> Option<LineMagic> {
		self.tables.load().line.get(name).cloned()
	}

	/// Finds by name a magic that can be called as cell magic.
	pub fn find_cell_magic(&self, name: &str) -> Option<CellMagic> {
		self.tables.load().cell.get(name).cloned()
	}

	/// Returns the registered line magic names, sorted.
	pub fn line_magic_names(&self) -> Vec<String> {
		sorted_names(self.tables.load().line.keys())
	}

	/// Returns the registered cell magic names, sorted.
	pub fn cell_magic_names(&self) -> Vec<String> {
		sorted_names(self.tables.load().cell.keys())
	}

	/// Removes every registered magic.
	#[cfg(any(test, feature = "test-support"))]
	pub fn reset(&self) {
		self.tables.store(Default::default());
	}

	fn update(&self, mut apply: impl FnMut(&mut MagicTables) -> InsertAction) -> InsertAction {
		let mut action = InsertAction::InsertedNew;
		self.tables.rcu(|current| {
			let mut next = MagicTables::clone(current);
			action = apply(&mut next);
			next
		});
		action
	}
}

impl Default for MagicRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for MagicRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let tables = self.tables.load();
		f.debug_struct("MagicRegistry")
			.field("policy", &self.policy)
			.field("line", &tables.line.len())
			.field("cell", &tables.cell.len())
			.finish()
	}
}

fn insert<V>(table: &mut HashMap<Box<str>, V>, name: &str, magic: V, policy: DuplicatePolicy) -> InsertAction {
	match table.get_mut(name) {
		None => {
			table.insert(name.into(), magic);
			InsertAction::InsertedNew
		}
		Some(existing) => match policy {
			DuplicatePolicy::LastWins => {
				*existing = magic;
				InsertAction::ReplacedExisting
			}
			DuplicatePolicy::FirstWins => InsertAction::KeptExisting,
		},
	}
}

fn sorted_names<'a>(keys: impl Iterator<Item = &'a Box<str>>) -> Vec<String> {
	let mut names: Vec<String> = keys.map(|k| k.to_string()).collect();
	names.sort_unstable();
	names
}
