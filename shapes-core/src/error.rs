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

use shapes_common::{BlockNumber, Fingerprint, FingerprintError, ItemKey, ParseItemKeyError};

/// Errors raised while assembling a [`crate::ShapeRegistry`]. These are configuration
/// mistakes in the item tables and should abort startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	#[error("fingerprint {fingerprint} of {item} is registered by both {existing} and {duplicate}")]
	DuplicateFingerprint { item: ItemKey, fingerprint: Fingerprint, existing: &'static str, duplicate: &'static str },
	#[error("version tag {tag} is registered twice for {item}")]
	DuplicateTag { item: ItemKey, tag: &'static str },
}

/// An enum of the possible errors that can be returned from classifying or decoding an entry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecodeError {
	#[error("no shapes are registered for {0}")]
	UnknownItem(ItemKey),
	#[error("accessor for {expected} was handed an entry for {got}")]
	WrongItem { expected: ItemKey, got: ItemKey },
	#[error(
		"{item} at block {block} does not have shape {tag} (on-chain fingerprint: {})",
		display_fingerprint(.actual)
	)]
	ShapeMismatch { item: ItemKey, tag: String, block: BlockNumber, actual: Option<Fingerprint> },
	#[error("no registered shape of {item} matches fingerprint {} at block {block}", display_fingerprint(.fingerprint))]
	NoMatchingShape { item: ItemKey, block: BlockNumber, fingerprint: Option<Fingerprint> },
	#[error("failed to decode {item} as {tag}: {source}")]
	Codec {
		item: ItemKey,
		tag: &'static str,
		#[source]
		source: codec::Error,
	},
	#[error("decoding {item} as {tag} left {remaining} bytes unconsumed")]
	ExcessBytes { item: ItemKey, tag: &'static str, remaining: usize },
	#[error("unusable shape table: {0}")]
	InvalidShapes(#[from] RegistryError),
}

impl DecodeError {
	/// The chain moved to an encoding nobody registered a shape for; a new decoder
	/// has to be shipped. Whether to skip or halt is up to the caller.
	pub fn is_unsupported_upgrade(&self) -> bool {
		matches!(self, DecodeError::NoMatchingShape { .. } | DecodeError::UnknownItem(_))
	}

	/// The caller asked for a shape (or an item) that doesn't apply to the entry it
	/// holds, or handed over a broken shape table. This is a bug in the calling code
	/// rather than a property of the chain data.
	pub fn is_programmer_error(&self) -> bool {
		matches!(
			self,
			DecodeError::ShapeMismatch { .. } | DecodeError::WrongItem { .. } | DecodeError::InvalidShapes(_)
		)
	}
}

fn display_fingerprint(fingerprint: &Option<Fingerprint>) -> String {
	match fingerprint {
		Some(fp) => fp.to_string(),
		None => "<item not in runtime>".to_string(),
	}
}

/// Errors loading a [`crate::StaticChainContext`].
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
	#[error("could not read chain context: {0}")]
	Io(#[from] std::io::Error),
	#[error("chain context is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("bad item in chain context: {0}")]
	ItemKey(#[from] ParseItemKeyError),
	#[error("bad fingerprint for {item} in chain context: {source}")]
	Fingerprint {
		item: String,
		#[source]
		source: FingerprintError,
	},
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageKeyError {
	#[error("Not enough bytes in the storage key to decode the prefix and name; got {0} bytes but expected 32")]
	NotEnoughBytes(usize),
	#[error("Couldn't find a storage item corresponding to the prefix hash provided in the key")]
	PrefixNotFound,
	#[error("Couldn't find a storage item corresponding to the name hash provided in the key")]
	NameNotFound,
}
