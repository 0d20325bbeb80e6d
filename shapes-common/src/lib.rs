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

//! Common types shared by the shape registry, the item tables and the tooling built on them.

#![forbid(unsafe_code)]
#![deny(unused)]

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{borrow::Cow, fmt, str::FromStr};

/// Spec Version type defined in the runtime of a chain.
pub type SpecVersion = u32;

/// Height of a block.
pub type BlockNumber = u32;

/// Whether an item is a dispatchable call or a storage entry. The two live in
/// separate namespaces, so `Treasury.Proposals` (storage) and a hypothetical
/// `Treasury.Proposals` call never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
	#[display(fmt = "call")]
	Call,
	#[display(fmt = "storage")]
	Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseItemKeyError {
	#[error("expected an item in the form 'Pallet.item', got '{0}'")]
	MissingSeparator(String),
	#[error("empty pallet or item name in '{0}'")]
	EmptyName(String),
}

/// Identifies a call or a storage entry of some pallet, eg `Balances.transfer_keep_alive`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
	kind: ItemKind,
	pallet: Cow<'static, str>,
	name: Cow<'static, str>,
}

impl ItemKey {
	/// Key of the call `name` in `pallet`.
	pub const fn call(pallet: &'static str, name: &'static str) -> Self {
		ItemKey { kind: ItemKind::Call, pallet: Cow::Borrowed(pallet), name: Cow::Borrowed(name) }
	}

	/// Key of the storage entry `name` under the storage prefix `pallet`.
	pub const fn storage(pallet: &'static str, name: &'static str) -> Self {
		ItemKey { kind: ItemKind::Storage, pallet: Cow::Borrowed(pallet), name: Cow::Borrowed(name) }
	}

	pub fn new(kind: ItemKind, pallet: impl Into<Cow<'static, str>>, name: impl Into<Cow<'static, str>>) -> Self {
		ItemKey { kind, pallet: pallet.into(), name: name.into() }
	}

	/// Parse a `Pallet.item` path into a key of the given kind.
	pub fn parse(kind: ItemKind, path: &str) -> Result<Self, ParseItemKeyError> {
		let (pallet, name) = path.split_once('.').ok_or_else(|| ParseItemKeyError::MissingSeparator(path.into()))?;
		if pallet.is_empty() || name.is_empty() {
			return Err(ParseItemKeyError::EmptyName(path.into()));
		}
		Ok(ItemKey::new(kind, pallet.to_owned(), name.to_owned()))
	}

	pub fn kind(&self) -> ItemKind {
		self.kind
	}

	pub fn pallet(&self) -> &str {
		&self.pallet
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for ItemKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.pallet, self.name)
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FingerprintError {
	#[error("fingerprint is not valid hex: {0}")]
	Hex(#[from] hex::FromHexError),
	#[error("fingerprint should be 32 bytes long, got {0}")]
	InvalidLength(usize),
}

/// Content hash of the type description of an item at some point in its metadata history.
/// Two items with equal fingerprints share the exact same wire encoding.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
	pub const fn new(bytes: [u8; 32]) -> Self {
		Fingerprint(bytes)
	}

	/// Build a fingerprint from 64 hex characters at compile time. Panics (and so fails
	/// the build when used in a `const`) if the literal is malformed.
	pub const fn from_static_hex(hex: &'static str) -> Self {
		let bytes = hex.as_bytes();
		assert!(bytes.len() == 64, "fingerprint literal must be 64 hex characters");
		let mut out = [0u8; 32];
		let mut i = 0;
		while i < 32 {
			out[i] = (hex_nibble(bytes[2 * i]) << 4) | hex_nibble(bytes[2 * i + 1]);
			i += 1;
		}
		Fingerprint(out)
	}

	pub fn as_bytes(&self) -> &[u8; 32] {
		&self.0
	}
}

const fn hex_nibble(c: u8) -> u8 {
	match c {
		b'0'..=b'9' => c - b'0',
		b'a'..=b'f' => c - b'a' + 10,
		b'A'..=b'F' => c - b'A' + 10,
		_ => panic!("invalid hex character in fingerprint literal"),
	}
}

impl FromStr for Fingerprint {
	type Err = FingerprintError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
		let len = bytes.len();
		let arr: [u8; 32] = bytes.try_into().map_err(|_| FingerprintError::InvalidLength(len))?;
		Ok(Fingerprint(arr))
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&hex::encode(self.0))
	}
}

impl fmt::Debug for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Fingerprint({})", self)
	}
}

impl Serialize for Fingerprint {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Fingerprint {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = Cow::<'de, str>::deserialize(deserializer)?;
		s.parse().map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TRANSFER_V1020: &str = "5a96e49eaf0745110a2342c53e5619233745028a575c67865c4ad4921e77634b";

	#[test]
	fn static_hex_matches_runtime_parsing() {
		let from_const = Fingerprint::from_static_hex(TRANSFER_V1020);
		let parsed: Fingerprint = TRANSFER_V1020.parse().unwrap();
		let prefixed: Fingerprint = format!("0x{}", TRANSFER_V1020).parse().unwrap();
		assert_eq!(from_const, parsed);
		assert_eq!(parsed, prefixed);
		assert_eq!(from_const.to_string(), TRANSFER_V1020);
	}

	#[test]
	fn fingerprint_rejects_wrong_length() {
		assert_eq!("abcd".parse::<Fingerprint>(), Err(FingerprintError::InvalidLength(2)));
		assert!(matches!("zz".parse::<Fingerprint>(), Err(FingerprintError::Hex(_))));
	}

	#[test]
	fn fingerprint_serde_uses_hex_strings() {
		let fp = Fingerprint::from_static_hex(TRANSFER_V1020);
		let json = serde_json::to_string(&fp).unwrap();
		assert_eq!(json, format!("\"{}\"", TRANSFER_V1020));
		let back: Fingerprint = serde_json::from_str(&json).unwrap();
		assert_eq!(back, fp);
	}

	#[test]
	fn item_keys() {
		let key = ItemKey::parse(ItemKind::Call, "Balances.transfer_keep_alive").unwrap();
		assert_eq!(key, ItemKey::call("Balances", "transfer_keep_alive"));
		assert_ne!(key, ItemKey::storage("Balances", "transfer_keep_alive"));
		assert_eq!(key.to_string(), "Balances.transfer_keep_alive");
		assert_eq!(key.kind().to_string(), "call");

		assert_eq!(
			ItemKey::parse(ItemKind::Storage, "Account"),
			Err(ParseItemKeyError::MissingSeparator("Account".into()))
		);
		assert_eq!(ItemKey::parse(ItemKind::Storage, ".Account"), Err(ParseItemKeyError::EmptyName(".Account".into())));
	}
}
