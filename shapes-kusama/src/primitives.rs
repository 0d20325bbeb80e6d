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


//! Types shared by the layouts of several runtime versions.

use codec::{Decode, Encode};
use shapes_core::{
	impl_into_value,
	value::{IntoValue, Value},
};

pub type AccountId = [u8; 32];
pub type Hash = [u8; 32];
pub type Balance = u128;
pub type BlockNumber = u32;

/// An opaque byte string. Unlike a plain `Vec<u8>`, it turns into [`Value::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Encode, Decode)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
	fn from(bytes: Vec<u8>) -> Self {
		Bytes(bytes)
	}
}

impl IntoValue for Bytes {
	fn into_value(self) -> Value {
		Value::Bytes(self.0)
	}
}

/// `sp_runtime::MultiAddress`, with `()` as the account index type.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum MultiAddress {
	Id(AccountId),
	Index(()),
	Raw(Bytes),
	Address32([u8; 32]),
	Address20([u8; 20]),
}
impl_into_value!(enum MultiAddress { Id(id), Index(index), Raw(bytes), Address32(address), Address20(address) });

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn multi_address_encoding() {
		let id = MultiAddress::Id([7; 32]);
		let encoded = id.encode();
		assert_eq!(encoded[0], 0);
		assert_eq!(encoded.len(), 33);
		assert_eq!(MultiAddress::Index(()).encode(), vec![1]);
		assert_eq!(
			MultiAddress::decode(&mut &[2, 8, 0xab, 0xcd][..]).unwrap(),
			MultiAddress::Raw(vec![0xab, 0xcd].into())
		);
	}

	#[test]
	fn bytes_become_byte_values() {
		assert_eq!(Bytes(vec![1, 2]).into_value(), Value::bytes(vec![1, 2]));
	}
}
