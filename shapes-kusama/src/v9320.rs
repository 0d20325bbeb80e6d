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


//! Layouts of the OpenGov pallets (referenda, preimage rework) as of Kusama runtime 9320.

use crate::primitives::{AccountId, Balance, BlockNumber, Bytes, Hash};
use codec::{Decode, Encode};
use shapes_core::impl_into_value;

pub type ReferendumIndex = u32;
pub type TrackId = u16;

/// Arguments of the referenda calls that only name a referendum.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ReferendumIndexArgs {
	pub index: ReferendumIndex,
}
impl_into_value!(struct ReferendumIndexArgs { index });

/// `Referenda.submit` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SubmitArgs {
	pub proposal_origin: OriginCaller,
	pub proposal: Bounded,
	pub enactment_moment: DispatchTime,
}
impl_into_value!(struct SubmitArgs { proposal_origin, proposal, enactment_moment });

/// Value of `Preimage.StatusFor`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum RequestStatus {
	Unrequested { deposit: (AccountId, Balance), len: u32 },
	Requested { deposit: Option<(AccountId, Balance)>, count: u32, len: Option<u32> },
}
impl_into_value!(enum RequestStatus { Unrequested { deposit, len }, Requested { deposit, count, len } });

/// A call, either inlined or referenced by its preimage hash.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Bounded {
	Legacy { hash: Hash },
	Inline(Bytes),
	Lookup { hash: Hash, len: u32 },
}
impl_into_value!(enum Bounded { Legacy { hash }, Inline(bytes), Lookup { hash, len } });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum DispatchTime {
	At(BlockNumber),
	After(BlockNumber),
}
impl_into_value!(enum DispatchTime { At(block), After(blocks) });

/// Value of `Referenda.ReferendumInfoFor`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum ReferendumInfo {
	Ongoing(Box<ReferendumStatus>),
	Approved(BlockNumber, Deposit, Option<Deposit>),
	Rejected(BlockNumber, Deposit, Option<Deposit>),
	Cancelled(BlockNumber, Deposit, Option<Deposit>),
	TimedOut(BlockNumber, Deposit, Option<Deposit>),
	Killed(BlockNumber),
}
impl_into_value!(enum ReferendumInfo {
	Ongoing(status),
	Approved(since, submission_deposit, decision_deposit),
	Rejected(since, submission_deposit, decision_deposit),
	Cancelled(since, submission_deposit, decision_deposit),
	TimedOut(since, submission_deposit, decision_deposit),
	Killed(since),
});

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ReferendumStatus {
	pub track: TrackId,
	pub origin: OriginCaller,
	pub proposal: Bounded,
	pub enactment: DispatchTime,
	pub submitted: BlockNumber,
	pub submission_deposit: Deposit,
	pub decision_deposit: Option<Deposit>,
	pub deciding: Option<DecidingStatus>,
	pub tally: Tally,
	pub in_queue: bool,
	pub alarm: Option<(BlockNumber, (BlockNumber, u32))>,
}
impl_into_value!(struct ReferendumStatus {
	track,
	origin,
	proposal,
	enactment,
	submitted,
	submission_deposit,
	decision_deposit,
	deciding,
	tally,
	in_queue,
	alarm,
});

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct Deposit {
	pub who: AccountId,
	pub amount: Balance,
}
impl_into_value!(struct Deposit { who, amount });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub struct DecidingStatus {
	pub since: BlockNumber,
	pub confirming: Option<BlockNumber>,
}
impl_into_value!(struct DecidingStatus { since, confirming });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Encode, Decode)]
pub struct Tally {
	pub ayes: Balance,
	pub nays: Balance,
	pub support: Balance,
}
impl_into_value!(struct Tally { ayes, nays, support });

/// The origins a referendum can be submitted with. Pallet indices are those of the Kusama runtime.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum OriginCaller {
	#[codec(index = 0)]
	System(RawOrigin),
	#[codec(index = 13)]
	Council(CollectiveOrigin),
	#[codec(index = 14)]
	TechnicalCommittee(CollectiveOrigin),
	#[codec(index = 43)]
	Origins(Origin),
	#[codec(index = 50)]
	ParachainsOrigin(ParachainsOrigin),
	#[codec(index = 99)]
	XcmPallet(XcmOrigin),
}
impl_into_value!(enum OriginCaller {
	System(origin),
	Council(origin),
	TechnicalCommittee(origin),
	Origins(origin),
	ParachainsOrigin(origin),
	XcmPallet(origin),
});

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum RawOrigin {
	Root,
	Signed(AccountId),
	None,
}
impl_into_value!(enum RawOrigin { Root, Signed(who), None });

/// Origin of a collective (council or technical committee).
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum CollectiveOrigin {
	Members(u32, u32),
	Member(AccountId),
	Phantom,
}
impl_into_value!(enum CollectiveOrigin { Members(ayes, total), Member(who), Phantom });

/// The custom OpenGov origins of the Kusama runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum Origin {
	StakingAdmin,
	Treasurer,
	FellowshipAdmin,
	GeneralAdmin,
	AuctionAdmin,
	LeaseAdmin,
	ReferendumCanceller,
	ReferendumKiller,
	SmallTipper,
	BigTipper,
	SmallSpender,
	MediumSpender,
	BigSpender,
	WhitelistedCaller,
	FellowshipInitiates,
	Fellows,
	FellowshipExperts,
	FellowshipMasters,
	Fellowship1Dan,
	Fellowship2Dan,
	Fellowship3Dan,
	Fellowship4Dan,
	Fellowship5Dan,
	Fellowship6Dan,
	Fellowship7Dan,
	Fellowship8Dan,
	Fellowship9Dan,
}
impl_into_value!(enum Origin {
	StakingAdmin,
	Treasurer,
	FellowshipAdmin,
	GeneralAdmin,
	AuctionAdmin,
	LeaseAdmin,
	ReferendumCanceller,
	ReferendumKiller,
	SmallTipper,
	BigTipper,
	SmallSpender,
	MediumSpender,
	BigSpender,
	WhitelistedCaller,
	FellowshipInitiates,
	Fellows,
	FellowshipExperts,
	FellowshipMasters,
	Fellowship1Dan,
	Fellowship2Dan,
	Fellowship3Dan,
	Fellowship4Dan,
	Fellowship5Dan,
	Fellowship6Dan,
	Fellowship7Dan,
	Fellowship8Dan,
	Fellowship9Dan,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum ParachainsOrigin {
	Parachain(u32),
}
impl_into_value!(enum ParachainsOrigin { Parachain(id) });

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum XcmOrigin {
	Xcm(MultiLocation),
	Response(MultiLocation),
}
impl_into_value!(enum XcmOrigin { Xcm(location), Response(location) });

/// XCM v1 `MultiLocation`.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MultiLocation {
	pub parents: u8,
	pub interior: Junctions,
}
impl_into_value!(struct MultiLocation { parents, interior });

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Junctions {
	Here,
	X1(Junction),
	X2(Junction, Junction),
	X3(Junction, Junction, Junction),
	X4(Junction, Junction, Junction, Junction),
	X5(Junction, Junction, Junction, Junction, Junction),
	X6(Junction, Junction, Junction, Junction, Junction, Junction),
	X7(Junction, Junction, Junction, Junction, Junction, Junction, Junction),
	X8(Junction, Junction, Junction, Junction, Junction, Junction, Junction, Junction),
}
impl_into_value!(enum Junctions {
	Here,
	X1(a),
	X2(a, b),
	X3(a, b, c),
	X4(a, b, c, d),
	X5(a, b, c, d, e),
	X6(a, b, c, d, e, f),
	X7(a, b, c, d, e, f, g),
	X8(a, b, c, d, e, f, g, h),
});

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum Junction {
	Parachain(#[codec(compact)] u32),
	AccountId32 { network: NetworkId, id: AccountId },
	AccountIndex64 {
		network: NetworkId,
		#[codec(compact)]
		index: u64,
	},
	AccountKey20 { network: NetworkId, key: [u8; 20] },
	PalletInstance(u8),
	GeneralIndex(#[codec(compact)] u128),
	GeneralKey(Bytes),
	OnlyChild,
	Plurality { id: BodyId, part: BodyPart },
}
impl_into_value!(enum Junction {
	Parachain(id),
	AccountId32 { network, id },
	AccountIndex64 { network, index },
	AccountKey20 { network, key },
	PalletInstance(index),
	GeneralIndex(index),
	GeneralKey(key),
	OnlyChild,
	Plurality { id, part },
});

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum NetworkId {
	Any,
	Named(Bytes),
	Polkadot,
	Kusama,
}
impl_into_value!(enum NetworkId { Any, Named(name), Polkadot, Kusama });

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum BodyId {
	Unit,
	Named(Bytes),
	Index(#[codec(compact)] u32),
	Executive,
	Technical,
	Legislative,
	Judicial,
}
impl_into_value!(enum BodyId { Unit, Named(name), Index(index), Executive, Technical, Legislative, Judicial });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode)]
pub enum BodyPart {
	Voice,
	Members {
		#[codec(compact)]
		count: u32,
	},
	Fraction {
		#[codec(compact)]
		nom: u32,
		#[codec(compact)]
		denom: u32,
	},
	AtLeastProportion {
		#[codec(compact)]
		nom: u32,
		#[codec(compact)]
		denom: u32,
	},
	MoreThanProportion {
		#[codec(compact)]
		nom: u32,
		#[codec(compact)]
		denom: u32,
	},
}
impl_into_value!(enum BodyPart {
	Voice,
	Members { count },
	Fraction { nom, denom },
	AtLeastProportion { nom, denom },
	MoreThanProportion { nom, denom },
});

#[cfg(test)]
mod tests {
	use super::*;
	use shapes_core::value::{IntoValue, Value};

	fn deposit(byte: u8, amount: Balance) -> Deposit {
		Deposit { who: [byte; 32], amount }
	}

	#[test]
	fn origin_caller_uses_runtime_pallet_indices() {
		assert_eq!(OriginCaller::System(RawOrigin::Root).encode(), vec![0, 0]);
		assert_eq!(OriginCaller::Origins(Origin::WhitelistedCaller).encode(), vec![43, 13]);
		assert_eq!(OriginCaller::Origins(Origin::Fellowship9Dan).encode(), vec![43, 26]);
		assert_eq!(
			OriginCaller::ParachainsOrigin(ParachainsOrigin::Parachain(1000)).encode(),
			vec![50, 0, 0xe8, 0x03, 0, 0]
		);
		assert!(OriginCaller::decode(&mut &[3u8, 0][..]).is_err());
	}

	#[test]
	fn xcm_origin_decodes() {
		let location = MultiLocation {
			parents: 1,
			interior: Junctions::X2(
				Junction::Parachain(1000),
				Junction::Plurality { id: BodyId::Index(7), part: BodyPart::Fraction { nom: 1, denom: 2 } },
			),
		};
		let origin = OriginCaller::XcmPallet(XcmOrigin::Xcm(location));
		let encoded = origin.encode();
		// Compact 1000 takes two bytes.
		assert_eq!(&encoded[..6], &[99, 0, 1, 2, 0, 0xa1]);
		assert_eq!(OriginCaller::decode(&mut &*encoded).unwrap(), origin);
	}

	#[test]
	fn ongoing_referendum_value() {
		let info = ReferendumInfo::Ongoing(Box::new(ReferendumStatus {
			track: 0,
			origin: OriginCaller::System(RawOrigin::Root),
			proposal: Bounded::Lookup { hash: [9; 32], len: 42 },
			enactment: DispatchTime::After(10),
			submitted: 15_000_000,
			submission_deposit: deposit(1, 100),
			decision_deposit: None,
			deciding: Some(DecidingStatus { since: 15_000_100, confirming: None }),
			tally: Tally { ayes: 5, nays: 3, support: 2 },
			in_queue: false,
			alarm: Some((15_000_200, (15_000_200, 0))),
		}));
		let decoded = ReferendumInfo::decode(&mut &*info.encode()).unwrap();
		assert_eq!(decoded, info);

		let value = decoded.into_value();
		let status = match &value {
			Value::Variant(v) if v.name == "Ongoing" => match &v.values {
				shapes_core::value::Composite::Unnamed(values) => &values[0],
				other => panic!("unexpected fields {:?}", other),
			},
			other => panic!("unexpected value {:?}", other),
		};
		assert_eq!(status.field("track"), Some(&Value::u16(0)));
		assert_eq!(status.field("tally").and_then(|t| t.field("ayes")).and_then(Value::as_u128), Some(5));
		assert_eq!(
			status.field("proposal"),
			Some(&Value::named_variant("Lookup", vec![("hash", Value::bytes(vec![9; 32])), ("len", Value::u32(42))]))
		);
	}

	#[test]
	fn finished_referendum_value() {
		let info = ReferendumInfo::Approved(20, deposit(2, 7), Some(deposit(3, 8)));
		assert_eq!(
			info.into_value(),
			Value::unnamed_variant(
				"Approved",
				vec![
					Value::u32(20),
					Value::named_composite(vec![("who", Value::bytes(vec![2; 32])), ("amount", Value::u128(7))]),
					Value::unnamed_variant(
						"Some",
						vec![Value::named_composite(vec![
							("who", Value::bytes(vec![3; 32])),
							("amount", Value::u128(8)),
						])]
					),
				]
			)
		);
	}

	#[test]
	fn request_status_layout() {
		let status = RequestStatus::Requested { deposit: None, count: 2, len: Some(64) };
		assert_eq!(status.encode(), vec![1, 0, 2, 0, 0, 0, 1, 64, 0, 0, 0]);
		assert_eq!(RequestStatus::decode(&mut &*status.encode()).unwrap(), status);
	}
}
