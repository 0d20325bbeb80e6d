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


use crate::{error::StorageKeyError, registry::ShapeRegistry};
use shapes_common::{ItemKey, ItemKind};
use sp_core::twox_128;
use std::collections::HashMap;

/// Finds the storage item a raw storage key belongs to. Keys take the form
/// `twox_128(pallet) ++ twox_128(item) ++ rest`, where `rest` is the hashed map key (if any).
#[derive(Debug, Clone, Default)]
pub struct StorageKeyIndex {
	/// Items grouped by the twox_128 hash of their pallet (storage prefix).
	items_by_hashed_prefix: HashMap<[u8; 16], HashMap<[u8; 16], ItemKey>>,
}

impl StorageKeyIndex {
	/// Index the given storage items. Call keys are ignored.
	pub fn new<'a>(keys: impl IntoIterator<Item = &'a ItemKey>) -> Self {
		let mut items_by_hashed_prefix: HashMap<[u8; 16], HashMap<_, _>> = HashMap::new();
		for key in keys.into_iter().filter(|k| k.kind() == ItemKind::Storage) {
			items_by_hashed_prefix
				.entry(twox_128(key.pallet().as_bytes()))
				.or_default()
				.insert(twox_128(key.name().as_bytes()), key.clone());
		}
		StorageKeyIndex { items_by_hashed_prefix }
	}

	/// Index every storage item that has shapes in `registry`.
	pub fn from_registry<V>(registry: &ShapeRegistry<V>) -> Self {
		Self::new(registry.items())
	}

	/// Identify the item a storage key belongs to, returning it along with the bytes
	/// following the 32 byte prefix.
	pub fn identify<'k>(&self, storage_key: &'k [u8]) -> Result<(&ItemKey, &'k [u8]), StorageKeyError> {
		if storage_key.len() < 32 {
			return Err(StorageKeyError::NotEnoughBytes(storage_key.len()));
		}
		let prefix_hash = &storage_key[..16];
		let name_hash = &storage_key[16..32];

		let items = self.items_by_hashed_prefix.get(prefix_hash).ok_or(StorageKeyError::PrefixNotFound)?;
		let key = items.get(name_hash).ok_or(StorageKeyError::NameNotFound)?;
		Ok((key, &storage_key[32..]))
	}

	pub fn len(&self) -> usize {
		self.items_by_hashed_prefix.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.items_by_hashed_prefix.is_empty()
	}
}

/// The 32 byte prefix every storage key of `key` starts with.
pub fn storage_prefix(key: &ItemKey) -> [u8; 32] {
	let mut prefix = [0u8; 32];
	prefix[..16].copy_from_slice(&twox_128(key.pallet().as_bytes()));
	prefix[16..].copy_from_slice(&twox_128(key.name().as_bytes()));
	prefix
}

#[cfg(test)]
mod tests {
	use super::*;

	const PROPOSALS: ItemKey = ItemKey::storage("Treasury", "Proposals");
	const APPROVALS: ItemKey = ItemKey::storage("Treasury", "Approvals");

	fn index() -> StorageKeyIndex {
		StorageKeyIndex::new(&[PROPOSALS, APPROVALS, ItemKey::call("Treasury", "propose_spend")])
	}

	#[test]
	fn known_prefix_is_identified() {
		// System.Account, a well known prefix, checks the hashing itself.
		assert_eq!(
			hex::encode(storage_prefix(&ItemKey::storage("System", "Account"))),
			"26aa394eea5630e07c48ae0c9558cef7b99d880ec681799c0cf30e8886371da9"
		);

		let index = index();
		let mut key = storage_prefix(&PROPOSALS).to_vec();
		key.extend_from_slice(&[1, 2, 3]);
		let (item, rest) = index.identify(&key).unwrap();
		assert_eq!(item, &PROPOSALS);
		assert_eq!(rest, &[1, 2, 3]);
		assert_eq!(index.len(), 2);
	}

	#[test]
	fn unknown_keys_are_reported() {
		let index = index();
		assert_eq!(index.identify(&[0; 12]), Err(StorageKeyError::NotEnoughBytes(12)));
		assert_eq!(index.identify(&[0; 32]), Err(StorageKeyError::PrefixNotFound));

		let mut key = storage_prefix(&PROPOSALS);
		key[16..].copy_from_slice(&twox_128(b"ProposalCount"));
		assert_eq!(index.identify(&key), Err(StorageKeyError::NameNotFound));
	}
}
