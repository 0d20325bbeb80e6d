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


//! Layouts of the preimage pallet as introduced in Kusama runtime 9160.

use crate::primitives::{AccountId, Balance, Bytes, Hash};
use codec::{Decode, Encode};
use shapes_core::impl_into_value;

/// `Preimage.note_preimage` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct NotePreimageArgs {
	pub bytes: Bytes,
}
impl_into_value!(struct NotePreimageArgs { bytes });

/// `Preimage.request_preimage` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct RequestPreimageArgs {
	pub hash: Hash,
}
impl_into_value!(struct RequestPreimageArgs { hash });

/// Value of `Preimage.StatusFor`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum RequestStatus {
	/// Noted but not requested, along with whoever paid the deposit for it, if anyone.
	Unrequested(Option<(AccountId, Balance)>),
	/// Requested this many times.
	Requested(u32),
}
impl_into_value!(enum RequestStatus { Unrequested(deposit), Requested(count) });
