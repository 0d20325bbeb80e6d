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


//! Layouts as of Kusama runtime 1020, when accounts were still addressed through the indices pallet.

use crate::primitives::{AccountId, Balance};
use codec::{Decode, Encode, EncodeLike, Error, Input, Output};
use shapes_core::impl_into_value;

/// `pallet_indices::address::Address`: an account id, or a (variable width) account index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
	Id(AccountId),
	Index(u32),
}
impl_into_value!(enum Address { Id(id), Index(index) });

fn need_more_than<T: PartialOrd>(a: T, b: T) -> Result<T, Error> {
	if b > a {
		Ok(b)
	} else {
		Err("Invalid range".into())
	}
}

impl Decode for Address {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		Ok(match input.read_byte()? {
			x @ 0x00..=0xef => Address::Index(u32::from(x)),
			0xfc => Address::Index(need_more_than(0xef, u16::decode(input)?)?.into()),
			0xfd => Address::Index(need_more_than(0xffff, u32::decode(input)?)?),
			// 64 bit indices never fit our 32 bit index type.
			0xfe => return Err("Account index does not fit in 32 bits".into()),
			0xff => Address::Id(Decode::decode(input)?),
			_ => return Err("Invalid address variant".into()),
		})
	}
}

impl Encode for Address {
	fn encode_to<T: Output + ?Sized>(&self, dest: &mut T) {
		match *self {
			Address::Id(ref id) => {
				dest.push_byte(0xff);
				id.encode_to(dest);
			}
			Address::Index(x) if x > 0xffff => {
				dest.push_byte(0xfd);
				x.encode_to(dest);
			}
			Address::Index(x) if x >= 0xf0 => {
				dest.push_byte(0xfc);
				(x as u16).encode_to(dest);
			}
			Address::Index(x) => dest.push_byte(x as u8),
		}
	}
}

impl EncodeLike for Address {}

/// `Balances.transfer_keep_alive` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TransferKeepAliveArgs {
	pub dest: Address,
	#[codec(compact)]
	pub value: Balance,
}
impl_into_value!(struct TransferKeepAliveArgs { dest, value });

/// `Treasury.propose_spend` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ProposeSpendArgs {
	#[codec(compact)]
	pub value: Balance,
	pub beneficiary: Address,
}
impl_into_value!(struct ProposeSpendArgs { value, beneficiary });

/// Arguments of `Treasury.approve_proposal` and `Treasury.reject_proposal`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ProposalIdArgs {
	#[codec(compact)]
	pub proposal_id: u32,
}
impl_into_value!(struct ProposalIdArgs { proposal_id });

/// Value of `Treasury.Proposals`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct TreasuryProposal {
	pub proposer: AccountId,
	pub value: Balance,
	pub beneficiary: AccountId,
	pub bond: Balance,
}
impl_into_value!(struct TreasuryProposal { proposer, value, beneficiary, bond });

#[cfg(test)]
mod tests {
	use super::*;

	fn roundtrips(address: Address, encoded: &[u8]) {
		assert_eq!(address.encode(), encoded);
		assert_eq!(Address::decode(&mut &*encoded).unwrap(), address);
	}

	#[test]
	fn address_index_widths() {
		roundtrips(Address::Index(0x01), &[0x01]);
		roundtrips(Address::Index(0xef), &[0xef]);
		roundtrips(Address::Index(0xf0), &[0xfc, 0xf0, 0x00]);
		roundtrips(Address::Index(0x1_0000), &[0xfd, 0x00, 0x00, 0x01, 0x00]);

		let mut id = vec![0xff];
		id.extend_from_slice(&[3; 32]);
		roundtrips(Address::Id([3; 32]), &id);
	}

	#[test]
	fn non_canonical_addresses_are_rejected() {
		// Small indices must use the one byte form.
		assert!(Address::decode(&mut &[0xfc, 0x05, 0x00][..]).is_err());
		assert!(Address::decode(&mut &[0xfd, 0xff, 0xff, 0x00, 0x00][..]).is_err());
		assert!(Address::decode(&mut &[0xfe, 0, 0, 0, 0, 1, 0, 0, 0][..]).is_err());
		assert!(Address::decode(&mut &[0xf3][..]).is_err());
	}

	#[test]
	fn transfer_keep_alive_layout() {
		let args = TransferKeepAliveArgs { dest: Address::Index(5), value: 1000 };
		// Compact 1000 is 0xa10f.
		assert_eq!(args.encode(), vec![0x05, 0xa1, 0x0f]);
	}
}
