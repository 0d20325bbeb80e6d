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
Shapes of the Kusama calls and storage items we decode, keyed by the fingerprint each
had on chain, along with the typed layouts they decode into.

Items are grouped in [`calls`] and [`storage`]; the layouts live in modules named after the
runtime version that introduced them. A shape whose fingerprint reappears in a later runtime
is not listed twice: matching is by fingerprint alone.
*/

#![forbid(unsafe_code)]

pub mod calls;
pub mod primitives;
pub mod storage;

pub mod v1020;
pub mod v1050;
pub mod v2028;
pub mod v9160;
pub mod v9320;

use shapes_core::{value::Value, RegistryError, ShapeRegistry, StorageKeyIndex, VersionedItem};

/// A registry holding every shape in this crate, decoding into dynamic values.
pub fn registry() -> Result<ShapeRegistry<Value>, RegistryError> {
	let mut builder = ShapeRegistry::<Value>::builder();
	builder
		.register_item::<calls::BalancesTransferKeepAlive>()?
		.register_item::<calls::PreimageNotePreimage>()?
		.register_item::<calls::PreimageRequestPreimage>()?
		.register_item::<calls::ReferendaCancel>()?
		.register_item::<calls::ReferendaKill>()?
		.register_item::<calls::ReferendaPlaceDecisionDeposit>()?
		.register_item::<calls::ReferendaRefundDecisionDeposit>()?
		.register_item::<calls::ReferendaRefundSubmissionDeposit>()?
		.register_item::<calls::ReferendaSubmit>()?
		.register_item::<calls::TreasuryApproveProposal>()?
		.register_item::<calls::TreasuryRejectProposal>()?
		.register_item::<calls::TreasuryProposeSpend>()?
		.register_item::<storage::BalancesAccount>()?
		.register_item::<storage::PreimagePreimageFor>()?
		.register_item::<storage::PreimageStatusFor>()?
		.register_item::<storage::ReferendaReferendumInfoFor>()?
		.register_item::<storage::ReferendaTrackQueue>()?
		.register_item::<storage::TreasuryApprovals>()?
		.register_item::<storage::TreasuryProposals>()?;
	let registry = builder.build();
	log::debug!("kusama registry holds {} items", registry.len());
	Ok(registry)
}

/// Identifies which of our storage items a raw storage key belongs to.
pub fn storage_index() -> StorageKeyIndex {
	StorageKeyIndex::new(&[
		storage::BalancesAccount::KEY,
		storage::PreimagePreimageFor::KEY,
		storage::PreimageStatusFor::KEY,
		storage::ReferendaReferendumInfoFor::KEY,
		storage::ReferendaTrackQueue::KEY,
		storage::TreasuryApprovals::KEY,
		storage::TreasuryProposals::KEY,
	])
}

#[cfg(test)]
mod tests {
	use super::*;
	use shapes_core::{ItemKey, ItemKind};

	#[test]
	fn registry_builds() {
		let _ = pretty_env_logger::try_init();
		let registry = registry().expect("shape tables are consistent");
		assert_eq!(registry.len(), 19);
		let storage_items = registry.items().filter(|k| k.kind() == ItemKind::Storage).count();
		assert_eq!(storage_items, 7);
		assert_eq!(storage_index().len(), storage_items);
		assert_eq!(StorageKeyIndex::from_registry(&registry).len(), storage_items);
	}

	#[test]
	fn shapes_are_listed_oldest_first() {
		let registry = registry().unwrap();
		let tags: Vec<_> = registry
			.shapes(&ItemKey::call("Treasury", "propose_spend"))
			.iter()
			.map(|shape| shape.tag())
			.collect();
		assert_eq!(tags, vec!["V1020", "V1050", "V2028", "V9111"]);
	}

	#[test]
	fn typed_and_dynamic_tables_agree() {
		fn check<T: VersionedItem>() {
			let typed: Vec<_> = T::SHAPES.iter().map(|s| (s.tag(), s.fingerprint())).collect();
			let dynamic: Vec<_> = T::VALUE_SHAPES.iter().map(|s| (s.tag(), s.fingerprint())).collect();
			assert_eq!(typed, dynamic, "{}", T::KEY);
		}
		check::<calls::BalancesTransferKeepAlive>();
		check::<calls::ReferendaSubmit>();
		check::<storage::PreimageStatusFor>();
		check::<storage::ReferendaReferendumInfoFor>();
	}

	#[test]
	fn storage_keys_are_identified() {
		let index = storage_index();
		let mut key = shapes_core::storage_prefix(&storage::ReferendaReferendumInfoFor::KEY).to_vec();
		// Any hashed map key may follow the prefix.
		key.extend_from_slice(&hex::decode("d9e1b2a3c4b5d6e72a000000").unwrap());
		let (item, rest) = index.identify(&key).unwrap();
		assert_eq!(item, &storage::ReferendaReferendumInfoFor::KEY);
		assert_eq!(rest.len(), 12);
	}
}
