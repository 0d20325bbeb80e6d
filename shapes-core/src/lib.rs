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
Versioned decoding of Substrate calls and storage entries.

Every runtime upgrade may change how a call's arguments or a storage value are encoded.
This crate keeps, per item, the list of encodings ("shapes") it has had over time, each
identified by the [`Fingerprint`] of its type description, and picks the decoder for an
entry by comparing that fingerprint with the one the chain reports at the entry's block.
Nothing is ever decoded with a guessed shape: an entry whose fingerprint is unknown fails
with [`DecodeError::NoMatchingShape`].

```rust
use shapes_core::{value::Value, EncodedEntry, ShapeRegistry, StaticChainContext, VersionedItem};

shapes_core::versioned_item! {
	/// `Treasury.approve_proposal`.
	pub enum ApproveProposal for call("Treasury", "approve_proposal") {
		V1020 = "d31c3c178e65331a6ccd6f8dca07268f945f39b38e51421afd1c9e1f5bc0f6c8" => u32,
	}
}

let context = StaticChainContext::from_json_str(r#"{
	"upgrades": { "0": 1020 },
	"versions": { "1020": { "calls": {
		"Treasury.approve_proposal": "d31c3c178e65331a6ccd6f8dca07268f945f39b38e51421afd1c9e1f5bc0f6c8"
	} } }
}"#).unwrap();

let entry = EncodedEntry::new(ApproveProposal::KEY, 5, vec![7u8, 0, 0, 0]);

// Typed:
assert_eq!(ApproveProposal::decode(&context, &entry).unwrap(), ApproveProposal::V1020(7));

// Dynamic:
let mut registry = ShapeRegistry::<Value>::builder();
registry.register_item::<ApproveProposal>().unwrap();
let registry = registry.build();
let accessor = registry.accessor(&context, &entry).unwrap();
assert!(accessor.matches("V1020"));
assert_eq!(accessor.decode("V1020").unwrap(), Value::u32(7));
```
*/

#![forbid(unsafe_code)]

mod accessor;
mod context;
mod entry;
mod error;
mod registry;
mod storage;

pub mod value;

pub use accessor::{MatchedShape, VersionedAccessor};
pub use context::{ChainContext, EntryContext, SpecVersionChanges, StaticChainContext};
pub use entry::EncodedEntry;
pub use error::{ContextError, DecodeError, RegistryError, StorageKeyError};
pub use registry::{validate_shapes, DecodeFn, ShapeDescriptor, ShapeRegistry, ShapeRegistryBuilder};
pub use shapes_common::{BlockNumber, Fingerprint, FingerprintError, ItemKey, ItemKind, ParseItemKeyError, SpecVersion};
pub use storage::{storage_prefix, StorageKeyIndex};

/// A re-export of the SCALE codec, so that [`versioned_item!`] expansions don't require
/// the calling crate to depend on it under a particular name.
pub use codec;

use value::Value;

/// An item whose every known shape decodes into one variant of `Self`.
///
/// Implement it with [`versioned_item!`] rather than by hand.
pub trait VersionedItem: Sized + 'static {
	const KEY: ItemKey;
	/// Typed decoders, oldest first.
	const SHAPES: &'static [ShapeDescriptor<Self>];
	/// The same shapes, decoding into a dynamic [`Value`].
	const VALUE_SHAPES: &'static [ShapeDescriptor<Value>];

	fn accessor<'a, C: ChainContext + ?Sized>(
		context: &C,
		entry: &'a EncodedEntry<'a>,
	) -> Result<VersionedAccessor<'a, Self>, DecodeError> {
		VersionedAccessor::new(Self::KEY, Self::SHAPES, context, entry)
	}

	/// Tag of the shape `entry` is encoded with.
	fn resolve_tag<C: ChainContext + ?Sized>(
		context: &C,
		entry: &EncodedEntry<'_>,
	) -> Result<&'static str, DecodeError> {
		Ok(Self::accessor(context, entry)?.resolve()?.tag())
	}

	/// Classify and decode `entry` in one go.
	fn decode<C: ChainContext + ?Sized>(context: &C, entry: &EncodedEntry<'_>) -> Result<Self, DecodeError> {
		Self::accessor(context, entry)?.resolve()?.decode()
	}

	fn decode_current<C: ChainContext + ?Sized>(context: &EntryContext<'_, C>) -> Result<Self, DecodeError> {
		Self::decode(context.context(), context.current_entry())
	}
}

/// Declare the shapes of one item as an enum with a variant per shape, implementing
/// [`VersionedItem`] and [`value::IntoValue`] for it.
///
/// Each line reads `Tag = "fingerprint" => Type`, where `Type` implements
/// `codec::Decode`, `value::IntoValue`, `Debug`, `Clone` and `PartialEq`. Lines go oldest first.
#[macro_export]
macro_rules! versioned_item {
	(
		$(#[$attr:meta])*
		$vis:vis enum $name:ident for $kind:ident($pallet:literal, $item:literal) {
			$( $tag:ident = $fingerprint:literal => $ty:ty ),+ $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, PartialEq)]
		$vis enum $name {
			$( $tag($ty), )+
		}

		impl $crate::VersionedItem for $name {
			const KEY: $crate::ItemKey = $crate::ItemKey::$kind($pallet, $item);
			const SHAPES: &'static [$crate::ShapeDescriptor<Self>] = &[
				$(
					$crate::ShapeDescriptor::new(
						stringify!($tag),
						$crate::Fingerprint::from_static_hex($fingerprint),
						|bytes: &mut &[u8]| <$ty as $crate::codec::Decode>::decode(bytes).map($name::$tag),
					),
				)+
			];
			const VALUE_SHAPES: &'static [$crate::ShapeDescriptor<$crate::value::Value>] = &[
				$(
					$crate::ShapeDescriptor::new(
						stringify!($tag),
						$crate::Fingerprint::from_static_hex($fingerprint),
						|bytes: &mut &[u8]| {
							<$ty as $crate::codec::Decode>::decode(bytes).map($crate::value::IntoValue::into_value)
						},
					),
				)+
			];
		}

		impl $name {
			/// Tag of the shape this value was decoded with.
			pub fn tag(&self) -> &'static str {
				match self {
					$( $name::$tag(_) => stringify!($tag), )+
				}
			}
		}

		impl $crate::value::IntoValue for $name {
			fn into_value(self) -> $crate::value::Value {
				match self {
					$( $name::$tag(v) => $crate::value::IntoValue::into_value(v), )+
				}
			}
		}
	};
}
