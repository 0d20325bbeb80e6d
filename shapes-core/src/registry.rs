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

//! The registry of known shapes: for every [`ItemKey`], the historical encodings it has had,
//! each identified by the [`Fingerprint`] of its type description and paired with a decoder.

use crate::{
	accessor::{MatchedShape, VersionedAccessor},
	context::ChainContext,
	entry::EncodedEntry,
	error::{DecodeError, RegistryError},
	value::Value,
	VersionedItem,
};
use shapes_common::{BlockNumber, Fingerprint, ItemKey};
use std::{collections::HashMap, fmt};

/// Decode the bytes of one shape. The cursor is moved past whatever was consumed.
pub type DecodeFn<V> = for<'a, 'b> fn(&'a mut &'b [u8]) -> Result<V, codec::Error>;

/// One historical encoding of an item.
pub struct ShapeDescriptor<V> {
	tag: &'static str,
	fingerprint: Fingerprint,
	decode: DecodeFn<V>,
}

impl<V> ShapeDescriptor<V> {
	/// Describe a shape. `tag` is a human readable label like `"V1020"`; only the
	/// fingerprint takes part in matching.
	pub const fn new(tag: &'static str, fingerprint: Fingerprint, decode: DecodeFn<V>) -> Self {
		ShapeDescriptor { tag, fingerprint, decode }
	}

	pub fn tag(&self) -> &'static str {
		self.tag
	}

	pub fn fingerprint(&self) -> Fingerprint {
		self.fingerprint
	}

	/// Run the decoder over `bytes`, advancing the cursor.
	pub fn decode(&self, bytes: &mut &[u8]) -> Result<V, codec::Error> {
		(self.decode)(bytes)
	}
}

// Derives would needlessly require `V: Clone` / `V: Debug`.
impl<V> Clone for ShapeDescriptor<V> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<V> Copy for ShapeDescriptor<V> {}

impl<V> fmt::Debug for ShapeDescriptor<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ShapeDescriptor").field("tag", &self.tag).field("fingerprint", &self.fingerprint).finish()
	}
}

/// Check that no fingerprint or tag occurs twice in a list of shapes for `item`.
///
/// Item tables are short, so this compares pairwise and does not allocate.
pub fn validate_shapes<V>(item: &ItemKey, shapes: &[ShapeDescriptor<V>]) -> Result<(), RegistryError> {
	for (idx, shape) in shapes.iter().enumerate() {
		let earlier = &shapes[..idx];
		if let Some(existing) = earlier.iter().find(|s| s.fingerprint == shape.fingerprint) {
			return Err(RegistryError::DuplicateFingerprint {
				item: item.clone(),
				fingerprint: shape.fingerprint,
				existing: existing.tag,
				duplicate: shape.tag,
			});
		}
		if earlier.iter().any(|s| s.tag == shape.tag) {
			return Err(RegistryError::DuplicateTag { item: item.clone(), tag: shape.tag });
		}
	}
	Ok(())
}

/// The shapes of a single item, in registration (chronological) order, indexed by fingerprint.
struct ItemShapes<V> {
	item: ItemKey,
	shapes: Vec<ShapeDescriptor<V>>,
	by_fingerprint: HashMap<Fingerprint, usize>,
}

impl<V> ItemShapes<V> {
	fn new(item: ItemKey) -> Self {
		ItemShapes { item, shapes: Vec::new(), by_fingerprint: HashMap::new() }
	}

	fn push(&mut self, shape: ShapeDescriptor<V>) -> Result<(), RegistryError> {
		if let Some(&idx) = self.by_fingerprint.get(&shape.fingerprint) {
			return Err(RegistryError::DuplicateFingerprint {
				item: self.item.clone(),
				fingerprint: shape.fingerprint,
				existing: self.shapes[idx].tag,
				duplicate: shape.tag,
			});
		}
		if self.shapes.iter().any(|s| s.tag == shape.tag) {
			return Err(RegistryError::DuplicateTag { item: self.item.clone(), tag: shape.tag });
		}
		self.by_fingerprint.insert(shape.fingerprint, self.shapes.len());
		self.shapes.push(shape);
		Ok(())
	}
}

/// Collects shapes at startup. Call [`ShapeRegistryBuilder::build`] once everything is in.
pub struct ShapeRegistryBuilder<V> {
	items: HashMap<ItemKey, ItemShapes<V>>,
}

impl<V> Default for ShapeRegistryBuilder<V> {
	fn default() -> Self {
		ShapeRegistryBuilder { items: HashMap::new() }
	}
}

impl<V> ShapeRegistryBuilder<V> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register one shape for `item`. Fails if the fingerprint or the tag is already
	/// registered for that item.
	pub fn register_shape(&mut self, item: ItemKey, shape: ShapeDescriptor<V>) -> Result<&mut Self, RegistryError> {
		log::trace!("registering shape {} ({}) for {}", shape.tag, shape.fingerprint, item);
		self.items.entry(item.clone()).or_insert_with(|| ItemShapes::new(item)).push(shape)?;
		Ok(self)
	}

	/// Register a list of shapes for `item`, oldest first.
	pub fn register_shapes(
		&mut self,
		item: ItemKey,
		shapes: &[ShapeDescriptor<V>],
	) -> Result<&mut Self, RegistryError> {
		for shape in shapes {
			self.register_shape(item.clone(), *shape)?;
		}
		Ok(self)
	}

	pub fn build(self) -> ShapeRegistry<V> {
		log::debug!("shape registry built with {} items", self.items.len());
		ShapeRegistry { items: self.items }
	}
}

impl ShapeRegistryBuilder<Value> {
	/// Register the dynamic shapes of a typed item table.
	pub fn register_item<T: VersionedItem>(&mut self) -> Result<&mut Self, RegistryError> {
		self.register_shapes(T::KEY, T::VALUE_SHAPES)
	}
}

/// Every known shape of every known item. Immutable once built, so it can be shared
/// between threads (eg behind an `Arc`) without any locking.
pub struct ShapeRegistry<V> {
	items: HashMap<ItemKey, ItemShapes<V>>,
}

impl<V> ShapeRegistry<V> {
	pub fn builder() -> ShapeRegistryBuilder<V> {
		ShapeRegistryBuilder::new()
	}

	/// The shape of `item` with the given fingerprint, if one is registered.
	pub fn find_shape(&self, item: &ItemKey, fingerprint: &Fingerprint) -> Option<&ShapeDescriptor<V>> {
		let shapes = self.items.get(item)?;
		shapes.by_fingerprint.get(fingerprint).map(|&idx| &shapes.shapes[idx])
	}

	/// All shapes of `item`, oldest first. Empty if the item is unknown.
	pub fn shapes(&self, item: &ItemKey) -> &[ShapeDescriptor<V>] {
		self.items.get(item).map(|s| &*s.shapes).unwrap_or(&[])
	}

	pub fn contains(&self, item: &ItemKey) -> bool {
		self.items.contains_key(item)
	}

	/// Every item with at least one registered shape, in no particular order.
	pub fn items(&self) -> impl Iterator<Item = &ItemKey> {
		self.items.keys()
	}

	/// Number of registered items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The fingerprint `item` has on chain at `block`. This is not our state; it comes from the context.
	pub fn lookup_fingerprint<C: ChainContext + ?Sized>(
		&self,
		context: &C,
		item: &ItemKey,
		block: BlockNumber,
	) -> Option<Fingerprint> {
		context.fingerprint(item, block)
	}

	/// An accessor over all shapes registered for the entry's item.
	pub fn accessor<'a, C: ChainContext + ?Sized>(
		&'a self,
		context: &C,
		entry: &'a EncodedEntry<'a>,
	) -> Result<VersionedAccessor<'a, V>, DecodeError> {
		VersionedAccessor::new(entry.key().clone(), self.shapes(entry.key()), context, entry)
	}

	/// Find the one shape the entry is encoded with, using the fingerprint index.
	pub fn resolve<'a, C: ChainContext + ?Sized>(
		&'a self,
		context: &C,
		entry: &'a EncodedEntry<'a>,
	) -> Result<MatchedShape<'a, V>, DecodeError> {
		let item = entry.key();
		if !self.contains(item) {
			return Err(DecodeError::UnknownItem(item.clone()));
		}
		let fingerprint = context.fingerprint(item, entry.block());
		match fingerprint.as_ref().and_then(|fp| self.find_shape(item, fp)) {
			Some(shape) => {
				log::trace!("{} at block {} resolved to {}", item, entry.block(), shape.tag());
				Ok(MatchedShape::new(shape, entry))
			}
			None => {
				log::debug!("{} at block {}: no shape matches {:?}", item, entry.block(), fingerprint);
				Err(DecodeError::NoMatchingShape { item: item.clone(), block: entry.block(), fingerprint })
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use codec::Decode;

	const ITEM: ItemKey = ItemKey::call("Treasury", "approve_proposal");
	const FP_A: Fingerprint = Fingerprint::new([1; 32]);
	const FP_B: Fingerprint = Fingerprint::new([2; 32]);

	fn decode_u32(bytes: &mut &[u8]) -> Result<u32, codec::Error> {
		u32::decode(bytes)
	}

	fn decode_u8_as_u32(bytes: &mut &[u8]) -> Result<u32, codec::Error> {
		u8::decode(bytes).map(u32::from)
	}

	#[test]
	fn find_shape_returns_registered_descriptor() {
		let mut builder = ShapeRegistry::builder();
		builder.register_shape(ITEM, ShapeDescriptor::new("V1", FP_A, decode_u8_as_u32)).unwrap();
		builder.register_shape(ITEM, ShapeDescriptor::new("V2", FP_B, decode_u32)).unwrap();
		let registry = builder.build();

		assert_eq!(registry.len(), 1);
		assert_eq!(registry.find_shape(&ITEM, &FP_A).map(|s| s.tag()), Some("V1"));
		assert_eq!(registry.find_shape(&ITEM, &FP_B).map(|s| s.tag()), Some("V2"));
		assert!(registry.find_shape(&ITEM, &Fingerprint::new([3; 32])).is_none());
		assert!(registry.find_shape(&ItemKey::call("Treasury", "reject_proposal"), &FP_A).is_none());

		let tags: Vec<_> = registry.shapes(&ITEM).iter().map(|s| s.tag()).collect();
		assert_eq!(tags, vec!["V1", "V2"]);
	}

	#[test]
	fn duplicate_fingerprint_is_rejected() {
		let mut builder = ShapeRegistry::builder();
		builder.register_shape(ITEM, ShapeDescriptor::new("V1", FP_A, decode_u32)).unwrap();
		let err = builder.register_shape(ITEM, ShapeDescriptor::new("V2", FP_A, decode_u32)).err();
		assert_eq!(
			err,
			Some(RegistryError::DuplicateFingerprint { item: ITEM, fingerprint: FP_A, existing: "V1", duplicate: "V2" })
		);
	}

	#[test]
	fn duplicate_tag_is_rejected() {
		let mut builder = ShapeRegistry::builder();
		builder.register_shape(ITEM, ShapeDescriptor::new("V1", FP_A, decode_u32)).unwrap();
		let err = builder.register_shape(ITEM, ShapeDescriptor::new("V1", FP_B, decode_u32)).err();
		assert_eq!(err, Some(RegistryError::DuplicateTag { item: ITEM, tag: "V1" }));
	}

	#[test]
	fn same_fingerprint_on_different_items_is_fine() {
		let other = ItemKey::call("Treasury", "reject_proposal");
		let mut builder = ShapeRegistry::builder();
		builder
			.register_shape(ITEM, ShapeDescriptor::new("V1", FP_A, decode_u32))
			.and_then(|b| b.register_shape(other.clone(), ShapeDescriptor::new("V1", FP_A, decode_u32)))
			.unwrap();
		let registry = builder.build();
		assert!(registry.contains(&ITEM));
		assert!(registry.contains(&other));
	}

	#[test]
	fn validate_shapes_spots_duplicates() {
		let ok = [ShapeDescriptor::new("V1", FP_A, decode_u32), ShapeDescriptor::new("V2", FP_B, decode_u32)];
		assert!(validate_shapes(&ITEM, &ok).is_ok());
		let dup = [ShapeDescriptor::new("V1", FP_A, decode_u32), ShapeDescriptor::new("V2", FP_A, decode_u32)];
		assert!(matches!(validate_shapes(&ITEM, &dup), Err(RegistryError::DuplicateFingerprint { .. })));
	}
}
