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


//! Shapes of the storage values we know how to decode.

use crate::{
	primitives::{Balance, Bytes},
	v1020, v1050, v9160, v9320,
};
use shapes_core::versioned_item;

versioned_item! {
	pub enum BalancesAccount for storage("Balances", "Account") {
		V1050 = "0b3b4bf0dd7388459eba461bc7c3226bf58608c941710a714e02f33ec0f91e78" => v1050::AccountData,
	}
}

versioned_item! {
	/// Keyed by hash up to 9320, by `(hash, len)` from then on. The value is the preimage itself either way.
	pub enum PreimagePreimageFor for storage("Preimage", "PreimageFor") {
		V9160 = "2c57d2b4da44b4d6783b1eb7d03f42f23490455080a2c71c813169067dfe1a54" => Bytes,
		V9320 = "55fa1a08a9fac4bcf15d53fce590e3fb5af7fbc408ac4b8e1ed28f5f8a242534" => Bytes,
	}
}

versioned_item! {
	pub enum PreimageStatusFor for storage("Preimage", "StatusFor") {
		V9160 = "df89c798bcb34b24310c6affc3156d4e8562cfc149636b7239c64508bca6c7ba" => v9160::RequestStatus,
		V9320 = "16647d6a818ed8802ff108ffe98014d8de07d069008bb466b26b7367e684d574" => v9320::RequestStatus,
	}
}

versioned_item! {
	pub enum ReferendaReferendumInfoFor for storage("Referenda", "ReferendumInfoFor") {
		V9320 = "33899ab47ab8fe6857d9da2d98b7b7168468bb2627a189bdae062d9c5ad90e3a" => v9320::ReferendumInfo,
	}
}

versioned_item! {
	/// Referenda of a track waiting for a decision period, with their current support.
	pub enum ReferendaTrackQueue for storage("Referenda", "TrackQueue") {
		V9320 = "d59fac77bd4348bf0179a7e6c5ac239a8b8781c07a1524886ec03b3194de72e3"
			=> Vec<(v9320::ReferendumIndex, Balance)>,
	}
}

versioned_item! {
	pub enum TreasuryApprovals for storage("Treasury", "Approvals") {
		V1020 = "a9f6979e68cec9d5834e7d077129aa05e8b477f326cb009049d2178afbea14f0" => Vec<u32>,
	}
}

versioned_item! {
	pub enum TreasuryProposals for storage("Treasury", "Proposals") {
		V1020 = "7641e66c93ee52b69acfed5b20da999d04ba6a21fac610732405be939e87d4b7" => v1020::TreasuryProposal,
	}
}
