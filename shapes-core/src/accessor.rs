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

//! Classify an [`EncodedEntry`] against the shapes known for its item, and decode it
//! only under the shape the chain actually used at that height.

use crate::{
	context::ChainContext,
	entry::EncodedEntry,
	error::DecodeError,
	registry::{validate_shapes, ShapeDescriptor},
};
use shapes_common::{Fingerprint, ItemKey};

/// Bound to exactly one entry of one item. Cheap to build; build one per entry.
pub struct VersionedAccessor<'a, V> {
	key: ItemKey,
	shapes: &'a [ShapeDescriptor<V>],
	entry: &'a EncodedEntry<'a>,
	fingerprint: Option<Fingerprint>,
}

impl<'a, V> VersionedAccessor<'a, V> {
	/// Bind `shapes`, the known shapes of `key`, to `entry`. The on-chain fingerprint
	/// of the item at the entry's block is looked up once, here.
	///
	/// A table that repeats a fingerprint or a tag is refused with [`DecodeError::InvalidShapes`].
	pub fn new<C: ChainContext + ?Sized>(
		key: ItemKey,
		shapes: &'a [ShapeDescriptor<V>],
		context: &C,
		entry: &'a EncodedEntry<'a>,
	) -> Result<Self, DecodeError> {
		if entry.key() != &key {
			return Err(DecodeError::WrongItem { expected: key, got: entry.key().clone() });
		}
		if shapes.is_empty() {
			return Err(DecodeError::UnknownItem(key));
		}
		validate_shapes(&key, shapes)?;
		let fingerprint = context.fingerprint(&key, entry.block());
		log::trace!("{} at block {} has fingerprint {:?}", key, entry.block(), fingerprint);
		Ok(VersionedAccessor { key, shapes, entry, fingerprint })
	}

	pub fn key(&self) -> &ItemKey {
		&self.key
	}

	pub fn entry(&self) -> &'a EncodedEntry<'a> {
		self.entry
	}

	/// The fingerprint the chain reports for this item at the entry's block. `None` if
	/// the item does not exist in the runtime there.
	pub fn current_fingerprint(&self) -> Option<Fingerprint> {
		self.fingerprint
	}

	/// Tags of every known shape, oldest first.
	pub fn tags(&self) -> impl Iterator<Item = &'static str> + 'a {
		self.shapes.iter().map(|s| s.tag())
	}

	/// Is the entry encoded with the shape tagged `tag`? Unknown tags never match.
	pub fn matches(&self, tag: &str) -> bool {
		self.shape(tag).map_or(false, |shape| self.fingerprint == Some(shape.fingerprint()))
	}

	/// Decode the entry as the shape tagged `tag`. Asking for a shape the entry does not
	/// have is a bug in the caller and fails with [`DecodeError::ShapeMismatch`].
	pub fn decode(&self, tag: &str) -> Result<V, DecodeError> {
		match self.shape(tag) {
			Some(shape) if self.fingerprint == Some(shape.fingerprint()) => {
				MatchedShape { shape, entry: self.entry }.decode()
			}
			_ => {
				log::debug!(
					"{} at block {} requested as {} but has fingerprint {:?}",
					self.key,
					self.entry.block(),
					tag,
					self.fingerprint
				);
				Err(DecodeError::ShapeMismatch {
					item: self.key.clone(),
					tag: tag.to_owned(),
					block: self.entry.block(),
					actual: self.fingerprint,
				})
			}
		}
	}

	/// Find the one shape the entry is encoded with.
	pub fn resolve(&self) -> Result<MatchedShape<'a, V>, DecodeError> {
		let shape = self.fingerprint.and_then(|fp| self.shapes.iter().find(|s| s.fingerprint() == fp));
		match shape {
			Some(shape) => {
				log::trace!("{} at block {} resolved to {}", self.key, self.entry.block(), shape.tag());
				Ok(MatchedShape { shape, entry: self.entry })
			}
			None => {
				log::debug!("{} at block {}: no shape matches {:?}", self.key, self.entry.block(), self.fingerprint);
				Err(DecodeError::NoMatchingShape {
					item: self.key.clone(),
					block: self.entry.block(),
					fingerprint: self.fingerprint,
				})
			}
		}
	}

	fn shape(&self, tag: &str) -> Option<&'a ShapeDescriptor<V>> {
		self.shapes.iter().find(|s| s.tag() == tag)
	}
}

/// An entry together with the shape it was classified as. The only way to get one is
/// through a successful classification, so [`MatchedShape::decode`] never runs the wrong decoder.
pub struct MatchedShape<'a, V> {
	shape: &'a ShapeDescriptor<V>,
	entry: &'a EncodedEntry<'a>,
}

impl<'a, V> MatchedShape<'a, V> {
	pub(crate) fn new(shape: &'a ShapeDescriptor<V>, entry: &'a EncodedEntry<'a>) -> Self {
		MatchedShape { shape, entry }
	}

	pub fn tag(&self) -> &'static str {
		self.shape.tag()
	}

	pub fn fingerprint(&self) -> Fingerprint {
		self.shape.fingerprint()
	}

	pub fn item(&self) -> &'a ItemKey {
		self.entry.key()
	}

	/// Decode the entry. All of its bytes have to be consumed.
	pub fn decode(&self) -> Result<V, DecodeError> {
		let item = self.entry.key();
		let mut cursor = self.entry.bytes();
		let value = self.shape.decode(&mut cursor).map_err(|source| {
			log::debug!("failed to decode {} as {}: {}", item, self.shape.tag(), source);
			DecodeError::Codec { item: item.clone(), tag: self.shape.tag(), source }
		})?;
		if !cursor.is_empty() {
			return Err(DecodeError::ExcessBytes { item: item.clone(), tag: self.shape.tag(), remaining: cursor.len() });
		}
		Ok(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RegistryError;
	use codec::{Decode, Encode};
	use shapes_common::BlockNumber;

	const ITEM: ItemKey = ItemKey::storage("Treasury", "ProposalCount");
	const FP_OLD: Fingerprint = Fingerprint::new([0xaa; 32]);
	const FP_NEW: Fingerprint = Fingerprint::new([0xbb; 32]);

	const SHAPES: &[ShapeDescriptor<u64>] = &[
		ShapeDescriptor::new("V1", FP_OLD, |bytes: &mut &[u8]| u32::decode(bytes).map(u64::from)),
		ShapeDescriptor::new("V2", FP_NEW, |bytes: &mut &[u8]| u64::decode(bytes)),
	];

	struct Fixed(Option<Fingerprint>);

	impl ChainContext for Fixed {
		fn fingerprint(&self, _: &ItemKey, _: BlockNumber) -> Option<Fingerprint> {
			self.0
		}
	}

	#[test]
	fn predicates_are_mutually_exclusive() {
		let entry = EncodedEntry::new(ITEM, 10, 7u32.encode());
		let accessor = VersionedAccessor::new(ITEM, SHAPES, &Fixed(Some(FP_OLD)), &entry).unwrap();
		assert!(accessor.matches("V1"));
		assert!(!accessor.matches("V2"));
		assert!(!accessor.matches("V3"));
		assert_eq!(accessor.decode("V1").unwrap(), 7);
		assert!(matches!(accessor.decode("V2"), Err(DecodeError::ShapeMismatch { actual: Some(FP_OLD), .. })));
		assert_eq!(accessor.tags().collect::<Vec<_>>(), vec!["V1", "V2"]);
	}

	#[test]
	fn resolve_picks_shape_by_fingerprint() {
		let entry = EncodedEntry::new(ITEM, 10, 7u64.encode());
		let accessor = VersionedAccessor::new(ITEM, SHAPES, &Fixed(Some(FP_NEW)), &entry).unwrap();
		let matched = accessor.resolve().unwrap();
		assert_eq!(matched.tag(), "V2");
		assert_eq!(matched.decode().unwrap(), 7);
	}

	#[test]
	fn missing_item_matches_nothing() {
		let entry = EncodedEntry::new(ITEM, 10, 7u32.encode());
		let accessor = VersionedAccessor::new(ITEM, SHAPES, &Fixed(None), &entry).unwrap();
		assert_eq!(accessor.current_fingerprint(), None);
		assert!(!accessor.matches("V1") && !accessor.matches("V2"));
		assert!(matches!(accessor.resolve(), Err(DecodeError::NoMatchingShape { fingerprint: None, .. })));
	}

	#[test]
	fn wrong_item_is_rejected() {
		let entry = EncodedEntry::new(ItemKey::storage("Treasury", "Proposals"), 10, vec![0u8]);
		let err = VersionedAccessor::new(ITEM, SHAPES, &Fixed(Some(FP_OLD)), &entry).err().unwrap();
		assert!(err.is_programmer_error());
		assert!(matches!(err, DecodeError::WrongItem { .. }));
	}

	#[test]
	fn empty_shape_list_is_unknown_item() {
		let entry = EncodedEntry::new(ITEM, 10, vec![0u8]);
		let err = VersionedAccessor::<u64>::new(ITEM, &[], &Fixed(Some(FP_OLD)), &entry).err().unwrap();
		assert!(err.is_unsupported_upgrade());
	}

	#[test]
	fn table_with_repeated_fingerprint_is_refused() {
		const CLASHING: &[ShapeDescriptor<u64>] = &[
			ShapeDescriptor::new("V1", FP_OLD, |bytes: &mut &[u8]| u32::decode(bytes).map(u64::from)),
			ShapeDescriptor::new("V2", FP_OLD, |bytes: &mut &[u8]| u64::decode(bytes)),
		];
		let entry = EncodedEntry::new(ITEM, 10, 7u32.encode());
		let err = VersionedAccessor::new(ITEM, CLASHING, &Fixed(Some(FP_OLD)), &entry).err().unwrap();
		assert!(err.is_programmer_error());
		assert!(matches!(
			err,
			DecodeError::InvalidShapes(RegistryError::DuplicateFingerprint { existing: "V1", duplicate: "V2", .. })
		));
	}

	#[test]
	fn decoding_must_use_every_byte() {
		let entry = EncodedEntry::new(ITEM, 10, 7u64.encode());
		let accessor = VersionedAccessor::new(ITEM, SHAPES, &Fixed(Some(FP_OLD)), &entry).unwrap();
		assert!(matches!(accessor.decode("V1"), Err(DecodeError::ExcessBytes { tag: "V1", remaining: 4, .. })));

		let short = EncodedEntry::new(ITEM, 10, vec![1u8, 2]);
		let accessor = VersionedAccessor::new(ITEM, SHAPES, &Fixed(Some(FP_OLD)), &short).unwrap();
		assert!(matches!(accessor.decode("V1"), Err(DecodeError::Codec { tag: "V1", .. })));
	}
}
