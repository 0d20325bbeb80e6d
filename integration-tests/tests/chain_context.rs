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


use crate::*;
use shapes_core::{ChainContext, Fingerprint, ItemKey, StaticChainContext};
use std::io::Cursor;

#[test]
fn fixture_spec_versions() {
	let context = kusama_context();
	assert_eq!(context.spec_version_at(0), Some(1020));
	assert_eq!(context.spec_version_at(BLOCK_V1050), Some(1050));
	assert_eq!(context.spec_version_at(1_375_085), Some(1020));
	assert_eq!(context.spec_version_at(1_375_086), Some(1050));
	assert_eq!(context.spec_version_at(BLOCK_V9370), Some(9370));
	assert_eq!(context.upgrades().iter().count(), 8);
}

#[test]
fn unchanged_items_carry_over_upgrades() {
	let context = kusama_context();
	let approvals = ItemKey::storage("Treasury", "Approvals");
	let expected: Fingerprint = "a9f6979e68cec9d5834e7d077129aa05e8b477f326cb009049d2178afbea14f0".parse().unwrap();
	for block in [BLOCK_V1020, BLOCK_V2028, BLOCK_V9320, BLOCK_V9370] {
		assert_eq!(context.fingerprint(&approvals, block), Some(expected));
	}
	// Not in the runtime yet.
	assert_eq!(context.fingerprint(&ItemKey::call("Referenda", "submit"), BLOCK_V9160), None);
}

#[test]
fn context_loads_from_reader_and_file() {
	let from_reader = StaticChainContext::from_reader(Cursor::new(KUSAMA_CONTEXT)).unwrap();
	let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/kusama_context.json");
	let from_file = StaticChainContext::from_file(path).unwrap();

	let item = ItemKey::call("Balances", "transfer_keep_alive");
	for block in [BLOCK_V1020, BLOCK_V1050, BLOCK_V9111] {
		assert_eq!(from_reader.fingerprint(&item, block), from_file.fingerprint(&item, block));
	}
}
