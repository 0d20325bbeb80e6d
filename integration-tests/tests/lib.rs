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


mod chain_context;

use shapes_core::{value::Value, BlockNumber, ShapeRegistry, StaticChainContext};

static KUSAMA_CONTEXT: &str = include_str!("data/kusama_context.json");

// A block under each runtime of the fixture.
pub const BLOCK_V1020: BlockNumber = 1_000;
pub const BLOCK_V1050: BlockNumber = 2_000_000;
pub const BLOCK_V2028: BlockNumber = 5_000_000;
pub const BLOCK_V9111: BlockNumber = 10_000_000;
pub const BLOCK_V9160: BlockNumber = 12_000_000;
pub const BLOCK_V9320: BlockNumber = 15_500_000;
pub const BLOCK_V9350: BlockNumber = 15_800_000;
pub const BLOCK_V9370: BlockNumber = 16_100_000;

pub fn kusama_context() -> StaticChainContext {
	StaticChainContext::from_json_str(KUSAMA_CONTEXT).expect("valid chain context fixture")
}

pub fn kusama_registry() -> ShapeRegistry<Value> {
	shapes_kusama::registry().expect("consistent shape tables")
}
