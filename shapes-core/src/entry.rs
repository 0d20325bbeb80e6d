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


use crate::{error::StorageKeyError, storage::StorageKeyIndex};
use shapes_common::{BlockNumber, ItemKey};
use std::borrow::Cow;

/// Raw bytes claiming to be an instance of some item at some block: the arguments
/// of a call, or the value of a storage entry.
///
/// Storage entries of maps also carry the map key: the bytes of the storage key after
/// the `twox_128(pallet) ++ twox_128(item)` prefix, hashers included. It is empty for
/// calls and plain storage values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry<'b> {
	key: ItemKey,
	block: BlockNumber,
	bytes: Cow<'b, [u8]>,
	map_key: Cow<'b, [u8]>,
}

impl<'b> EncodedEntry<'b> {
	pub fn new(key: ItemKey, block: BlockNumber, bytes: impl Into<Cow<'b, [u8]>>) -> Self {
		EncodedEntry { key, block, bytes: bytes.into(), map_key: Cow::Borrowed(&[]) }
	}

	/// Build an entry from a raw storage key and value. The item is identified from the
	/// key's `twox_128(pallet) ++ twox_128(item)` prefix, and the rest of the key is kept
	/// as the map key.
	pub fn from_storage(
		index: &StorageKeyIndex,
		block: BlockNumber,
		storage_key: &'b [u8],
		value: impl Into<Cow<'b, [u8]>>,
	) -> Result<Self, StorageKeyError> {
		let (key, map_key) = index.identify(storage_key)?;
		Ok(EncodedEntry::new(key.clone(), block, value).with_map_key(map_key))
	}

	pub fn with_map_key(mut self, map_key: impl Into<Cow<'b, [u8]>>) -> Self {
		self.map_key = map_key.into();
		self
	}

	pub fn key(&self) -> &ItemKey {
		&self.key
	}

	pub fn block(&self) -> BlockNumber {
		self.block
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Hashed map key of a storage entry; empty if the entry has none.
	pub fn map_key(&self) -> &[u8] {
		&self.map_key
	}

	pub fn into_owned(self) -> EncodedEntry<'static> {
		EncodedEntry {
			key: self.key,
			block: self.block,
			bytes: Cow::Owned(self.bytes.into_owned()),
			map_key: Cow::Owned(self.map_key.into_owned()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::storage_prefix;

	const PREIMAGE_FOR: ItemKey = ItemKey::storage("Preimage", "PreimageFor");

	#[test]
	fn storage_entries_keep_their_map_key() {
		let index = StorageKeyIndex::new(&[PREIMAGE_FOR]);
		let mut storage_key = storage_prefix(&PREIMAGE_FOR).to_vec();
		// Identity hasher over a (hash, len) pair.
		storage_key.extend_from_slice(&[0x42; 32]);
		storage_key.extend_from_slice(&128u32.to_le_bytes());

		let entry = EncodedEntry::from_storage(&index, 7, &storage_key, vec![1u8, 2, 3]).unwrap();
		assert_eq!(entry.key(), &PREIMAGE_FOR);
		assert_eq!(entry.bytes(), &[1, 2, 3]);
		assert_eq!(entry.map_key(), &storage_key[32..]);
		assert_eq!(entry.map_key().len(), 36);

		let owned = entry.clone().into_owned();
		assert_eq!(owned, entry);
		assert_eq!(owned.map_key(), &storage_key[32..]);
	}

	#[test]
	fn calls_and_plain_values_have_no_map_key() {
		let entry = EncodedEntry::new(ItemKey::call("Balances", "transfer_keep_alive"), 1, vec![0u8]);
		assert!(entry.map_key().is_empty());

		let index = StorageKeyIndex::new(&[PREIMAGE_FOR]);
		let storage_key = storage_prefix(&PREIMAGE_FOR);
		let entry = EncodedEntry::from_storage(&index, 1, &storage_key, vec![0u8]).unwrap();
		assert!(entry.map_key().is_empty());
	}
}
