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


//! Layouts as of Kusama runtime 1050: accounts are addressed by their id directly.

use crate::primitives::{AccountId, Balance};
use codec::{Decode, Encode};
use shapes_core::impl_into_value;

/// `Balances.transfer_keep_alive` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TransferKeepAliveArgs {
	pub dest: AccountId,
	#[codec(compact)]
	pub value: Balance,
}
impl_into_value!(struct TransferKeepAliveArgs { dest, value });

/// `Treasury.propose_spend` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ProposeSpendArgs {
	#[codec(compact)]
	pub value: Balance,
	pub beneficiary: AccountId,
}
impl_into_value!(struct ProposeSpendArgs { value, beneficiary });

/// Value of `Balances.Account`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct AccountData {
	pub free: Balance,
	pub reserved: Balance,
	pub misc_frozen: Balance,
	pub fee_frozen: Balance,
}
impl_into_value!(struct AccountData { free, reserved, misc_frozen, fee_frozen });
