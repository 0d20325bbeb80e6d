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


//! Shapes of the call arguments we know how to decode.

use crate::{
	primitives::{Balance, Bytes},
	v1020, v1050, v2028, v9160, v9320,
};
use shapes_core::versioned_item;

versioned_item! {
	pub enum BalancesTransferKeepAlive for call("Balances", "transfer_keep_alive") {
		V1020 = "5a96e49eaf0745110a2342c53e5619233745028a575c67865c4ad4921e77634b" => v1020::TransferKeepAliveArgs,
		V1050 = "cf5bb376709277883598390b3462e93b0f3c383df391c0649728c965e8da82fd" => v1050::TransferKeepAliveArgs,
		V2028 = "c3f0f475940fc4bef49b298f76ba345680f20fc48d5899b4678314a07e2ce090" => v2028::TransferKeepAliveArgs,
		V9111 = "fc85bea9d0d171982f66e8a55667d58dc9a1612bcafe84309942bf47e23e3094" => v2028::TransferKeepAliveArgs,
	}
}

impl BalancesTransferKeepAlive {
	/// The amount transferred, whatever the shape.
	pub fn value(&self) -> Balance {
		match self {
			BalancesTransferKeepAlive::V1020(args) => args.value,
			BalancesTransferKeepAlive::V1050(args) => args.value,
			BalancesTransferKeepAlive::V2028(args) | BalancesTransferKeepAlive::V9111(args) => args.value,
		}
	}
}

versioned_item! {
	pub enum PreimageNotePreimage for call("Preimage", "note_preimage") {
		V9160 = "fb6f9f7fd683160ab20dcde42ca8f757bc13845dc544f497e534fcf19c270a46" => v9160::NotePreimageArgs,
	}
}

impl PreimageNotePreimage {
	pub fn bytes(&self) -> &Bytes {
		match self {
			PreimageNotePreimage::V9160(args) => &args.bytes,
		}
	}
}

versioned_item! {
	pub enum PreimageRequestPreimage for call("Preimage", "request_preimage") {
		V9160 = "19b8576fc9fe9553b0b5ad154324ccae0d0d43fdccbdffddf2bb6066a9b37b5c" => v9160::RequestPreimageArgs,
	}
}

versioned_item! {
	pub enum ReferendaCancel for call("Referenda", "cancel") {
		V9320 = "25a99cc820e15400356f62165725d9d84847d859e62ca1e5fd6eb340dc5c217e" => v9320::ReferendumIndexArgs,
	}
}

versioned_item! {
	pub enum ReferendaKill for call("Referenda", "kill") {
		V9320 = "25a99cc820e15400356f62165725d9d84847d859e62ca1e5fd6eb340dc5c217e" => v9320::ReferendumIndexArgs,
	}
}

versioned_item! {
	pub enum ReferendaPlaceDecisionDeposit for call("Referenda", "place_decision_deposit") {
		V9320 = "25a99cc820e15400356f62165725d9d84847d859e62ca1e5fd6eb340dc5c217e" => v9320::ReferendumIndexArgs,
	}
}

versioned_item! {
	pub enum ReferendaRefundDecisionDeposit for call("Referenda", "refund_decision_deposit") {
		V9320 = "25a99cc820e15400356f62165725d9d84847d859e62ca1e5fd6eb340dc5c217e" => v9320::ReferendumIndexArgs,
	}
}

versioned_item! {
	pub enum ReferendaRefundSubmissionDeposit for call("Referenda", "refund_submission_deposit") {
		V9350 = "25a99cc820e15400356f62165725d9d84847d859e62ca1e5fd6eb340dc5c217e" => v9320::ReferendumIndexArgs,
	}
}

versioned_item! {
	pub enum ReferendaSubmit for call("Referenda", "submit") {
		V9320 = "6973d34a693667744def0a5715cbdd4f9e5f021d58a5384675436ddb19fbb30d" => v9320::SubmitArgs,
	}
}

versioned_item! {
	pub enum TreasuryApproveProposal for call("Treasury", "approve_proposal") {
		V1020 = "d31c3c178e65331a6ccd6f8dca07268f945f39b38e51421afd1c9e1f5bc0f6c8" => v1020::ProposalIdArgs,
	}
}

versioned_item! {
	pub enum TreasuryRejectProposal for call("Treasury", "reject_proposal") {
		V1020 = "d31c3c178e65331a6ccd6f8dca07268f945f39b38e51421afd1c9e1f5bc0f6c8" => v1020::ProposalIdArgs,
	}
}

versioned_item! {
	pub enum TreasuryProposeSpend for call("Treasury", "propose_spend") {
		V1020 = "716689a9bf600e2a2fed633501a80e9ae7082f3d19352663230c0a56fa8652c3" => v1020::ProposeSpendArgs,
		V1050 = "98e9af32f46010396e58ac70ce7c017f7e95d81b05c03d5e5aeb94ce27732909" => v1050::ProposeSpendArgs,
		V2028 = "c9f0fb5ad91e84a77c5f948f4140d239e238788ae3191c594dc1e6592472d5a7" => v2028::ProposeSpendArgs,
		V9111 = "ffef9f31e8ae5085e7c0a55a685daef52218f0bf7083015ac904dafceedf09ee" => v2028::ProposeSpendArgs,
	}
}
