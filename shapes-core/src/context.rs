// Copyright 2023 Parity Technologies (UK) Ltd.
// This file is part of substrate-shapes.
//
// substrate-shapes is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// substrate-shapes is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with substrate-shapes.  If not, see <http://www.gnu.org/licenses/>.


/*!
Where the on-chain fingerprint of an item comes from. The block processing pipeline owns
the real metadata and implements [`ChainContext`] over it; [`StaticChainContext`] is a
table driven implementation loaded from JSON, for tools and tests.
*/

use crate::{entry::EncodedEntry, error::ContextError};
use serde::{Deserialize, Serialize};
use shapes_common::{BlockNumber, Fingerprint, ItemKey, ItemKind, SpecVersion};
use std::{
	collections::{BTreeMap, HashMap},
	fs::File,
	io::{BufReader, Read},
	path::Path,
	sync::Arc,
};

/// Answers "what is the fingerprint of this item at this height".
pub trait ChainContext {
	/// `None` if the item does not exist in the runtime at `block`.
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint>;
}

impl<T: ChainContext + ?Sized> ChainContext for &T {
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint> {
		(**self).fingerprint(key, block)
	}
}

impl<T: ChainContext + ?Sized> ChainContext for Box<T> {
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint> {
		(**self).fingerprint(key, block)
	}
}

impl<T: ChainContext + ?Sized> ChainContext for Arc<T> {
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint> {
		(**self).fingerprint(key, block)
	}
}

/// A chain context together with the entry currently being processed.
pub struct EntryContext<'a, C: ?Sized> {
	context: &'a C,
	entry: EncodedEntry<'a>,
}

impl<'a, C: ChainContext + ?Sized> EntryContext<'a, C> {
	pub fn new(context: &'a C, entry: EncodedEntry<'a>) -> Self {
		EntryContext { context, entry }
	}

	pub fn context(&self) -> &'a C {
		self.context
	}

	pub fn current_entry(&self) -> &EncodedEntry<'a> {
		&self.entry
	}

	/// Fingerprint of the current entry's item at the current entry's block.
	pub fn current_fingerprint(&self) -> Option<Fingerprint> {
		self.context.fingerprint(self.entry.key(), self.entry.block())
	}
}

impl<'a, C: ChainContext + ?Sized> ChainContext for EntryContext<'a, C> {
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint> {
		self.context.fingerprint(key, block)
	}
}

/// Runtime upgrades of a chain: the block each spec version was enacted at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecVersionChanges {
	changes: BTreeMap<BlockNumber, SpecVersion>,
}

impl SpecVersionChanges {
	pub fn new(changes: BTreeMap<BlockNumber, SpecVersion>) -> Self {
		SpecVersionChanges { changes }
	}

	pub fn insert(&mut self, block: BlockNumber, version: SpecVersion) {
		self.changes.insert(block, version);
	}

	/// The spec version in force at `block`; `None` before the first known upgrade.
	pub fn version_at_block(&self, block: BlockNumber) -> Option<SpecVersion> {
		self.changes.range(..=block).next_back().map(|(_, version)| *version)
	}

	pub fn version_changed_at(&self, block: BlockNumber) -> bool {
		self.changes.contains_key(&block)
	}

	pub fn iter(&self) -> impl Iterator<Item = (BlockNumber, SpecVersion)> + '_ {
		self.changes.iter().map(|(b, v)| (*b, *v))
	}
}

/// A [`ChainContext`] backed by fixed tables.
///
/// Fingerprint tables are deltas: the table of a spec version only lists items whose
/// fingerprint appeared, changed or (as `None`) disappeared in that upgrade. A lookup
/// uses the latest table at or below the current spec version that mentions the item.
#[derive(Debug, Clone, Default)]
pub struct StaticChainContext {
	upgrades: SpecVersionChanges,
	fingerprints: BTreeMap<SpecVersion, HashMap<ItemKey, Option<Fingerprint>>>,
}

#[derive(Deserialize)]
struct ContextFile {
	upgrades: SpecVersionChanges,
	#[serde(default)]
	versions: BTreeMap<SpecVersion, VersionTable>,
}

#[derive(Deserialize)]
struct VersionTable {
	#[serde(default)]
	calls: BTreeMap<String, Option<String>>,
	#[serde(default)]
	storage: BTreeMap<String, Option<String>>,
}

impl StaticChainContext {
	pub fn new(upgrades: SpecVersionChanges) -> Self {
		StaticChainContext { upgrades, fingerprints: BTreeMap::new() }
	}

	/// Record that `key` has `fingerprint` as of `version`, or was removed (`None`).
	pub fn set_fingerprint(
		&mut self,
		version: SpecVersion,
		key: ItemKey,
		fingerprint: Option<Fingerprint>,
	) -> &mut Self {
		self.fingerprints.entry(version).or_default().insert(key, fingerprint);
		self
	}

	pub fn upgrades(&self) -> &SpecVersionChanges {
		&self.upgrades
	}

	pub fn spec_version_at(&self, block: BlockNumber) -> Option<SpecVersion> {
		self.upgrades.version_at_block(block)
	}

	/// Fingerprint of `key` under spec version `version`.
	pub fn fingerprint_at_version(&self, key: &ItemKey, version: SpecVersion) -> Option<Fingerprint> {
		self.fingerprints.range(..=version).rev().find_map(|(_, table)| table.get(key)).copied().flatten()
	}

	pub fn from_json_str(json: &str) -> Result<Self, ContextError> {
		Self::from_file_contents(serde_json::from_str(json)?)
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContextError> {
		Self::from_file_contents(serde_json::from_reader(reader)?)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContextError> {
		let path = path.as_ref();
		log::debug!("loading chain context from {}", path.display());
		let file = File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}

	fn from_file_contents(contents: ContextFile) -> Result<Self, ContextError> {
		let mut context = StaticChainContext::new(contents.upgrades);
		for (version, table) in contents.versions {
			let entries = table
				.calls
				.into_iter()
				.map(|e| (ItemKind::Call, e))
				.chain(table.storage.into_iter().map(|e| (ItemKind::Storage, e)));
			for (kind, (path, fingerprint)) in entries {
				let key = ItemKey::parse(kind, &path)?;
				let fingerprint = fingerprint
					.map(|hex| hex.parse::<Fingerprint>())
					.transpose()
					.map_err(|source| ContextError::Fingerprint { item: path, source })?;
				context.set_fingerprint(version, key, fingerprint);
			}
		}
		log::debug!(
			"chain context has {} upgrades and {} fingerprint tables",
			context.upgrades.changes.len(),
			context.fingerprints.len()
		);
		Ok(context)
	}
}

impl ChainContext for StaticChainContext {
	fn fingerprint(&self, key: &ItemKey, block: BlockNumber) -> Option<Fingerprint> {
		let version = self.spec_version_at(block)?;
		self.fingerprint_at_version(key, version)
	}
}
