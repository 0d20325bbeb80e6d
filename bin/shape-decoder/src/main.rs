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


use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use shapes_core::{
	value::Value, BlockNumber, EncodedEntry, Fingerprint, ItemKey, ItemKind, ShapeRegistry, StaticChainContext,
};
use std::path::PathBuf;

/// Decode Kusama call arguments and storage values by the shape the chain used at a given block.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Decode SCALE encoded call arguments.
	Call {
		/// The call, in the form Pallet.call_name
		item: String,
		/// Encoded arguments in the form 0x1a2b3c
		bytes: String,
		#[command(flatten)]
		at: At,
	},
	/// Decode a storage value, identifying the item from its storage key.
	Storage {
		/// Full storage key in the form 0x1a2b3c, map key included
		key: String,
		/// Encoded value in the form 0x1a2b3c
		value: String,
		#[command(flatten)]
		at: At,
	},
	/// List every known item and its shapes.
	Shapes,
}

/// Where and how to look at the entry.
#[derive(Debug, Args)]
struct At {
	/// JSON file with the chain's runtime upgrades and item fingerprints.
	#[arg(long)]
	context: PathBuf,
	/// Block the entry was read at.
	#[arg(long)]
	block: BlockNumber,
	/// Decode as this shape instead of the one the chain used. Fails if they differ.
	#[arg(long)]
	tag: Option<String>,
}

#[derive(Serialize)]
struct Decoded<'a> {
	item: String,
	kind: ItemKind,
	block: BlockNumber,
	#[serde(skip_serializing_if = "Option::is_none")]
	map_key: Option<String>,
	tag: &'a str,
	value: Value,
}

#[derive(Serialize)]
struct ItemShapes {
	item: String,
	kind: ItemKind,
	shapes: Vec<Shape>,
}

#[derive(Serialize)]
struct Shape {
	tag: &'static str,
	fingerprint: Fingerprint,
}

fn main() -> Result<(), anyhow::Error> {
	let opts = Opts::parse();
	pretty_env_logger::init();

	let registry = shapes_kusama::registry()?;

	match opts.command {
		Command::Shapes => print_shapes(&registry),
		Command::Call { item, bytes, at } => {
			let item = ItemKey::parse(ItemKind::Call, &item)?;
			let bytes = hex_bytes(&bytes).context("Cannot decode call arguments")?;
			print_decoded(&registry, &EncodedEntry::new(item, at.block, bytes), &at)
		}
		Command::Storage { key, value, at } => {
			let key = hex_bytes(&key).context("Cannot decode storage key")?;
			let value = hex_bytes(&value).context("Cannot decode storage value")?;
			let index = shapes_kusama::storage_index();
			let entry = EncodedEntry::from_storage(&index, at.block, &key, value)?;
			print_decoded(&registry, &entry, &at)
		}
	}
}

fn print_decoded(registry: &ShapeRegistry<Value>, entry: &EncodedEntry<'_>, at: &At) -> Result<(), anyhow::Error> {
	let context = StaticChainContext::from_file(&at.context)
		.with_context(|| format!("Cannot load chain context from {}", at.context.display()))?;

	let (tag, value) = match &at.tag {
		Some(tag) => {
			let accessor = registry.accessor(&context, entry)?;
			let value = accessor.decode(tag)?;
			(tag.clone(), value)
		}
		None => {
			let matched = registry.resolve(&context, entry)?;
			(matched.tag().to_owned(), matched.decode()?)
		}
	};

	let map_key = (!entry.map_key().is_empty()).then(|| format!("0x{}", hex::encode(entry.map_key())));
	let decoded = Decoded {
		item: entry.key().to_string(),
		kind: entry.key().kind(),
		block: entry.block(),
		map_key,
		tag: &tag,
		value,
	};
	println!("{}", serde_json::to_string_pretty(&decoded)?);
	Ok(())
}

fn hex_bytes(s: &str) -> Result<Vec<u8>, anyhow::Error> {
	let hex_str = match s.strip_prefix("0x") {
		Some(hex_str) => hex_str,
		None => anyhow::bail!("Hex strings should start with 0x"),
	};
	Ok(hex::decode(hex_str)?)
}

fn print_shapes(registry: &ShapeRegistry<Value>) -> Result<(), anyhow::Error> {
	let mut items: Vec<_> = registry.items().collect();
	items.sort();
	let listing: Vec<_> = items
		.into_iter()
		.map(|item| ItemShapes {
			item: item.to_string(),
			kind: item.kind(),
			shapes: registry
				.shapes(item)
				.iter()
				.map(|shape| Shape { tag: shape.tag(), fingerprint: shape.fingerprint() })
				.collect(),
		})
		.collect();
	log::debug!("listing {} items", listing.len());
	println!("{}", serde_json::to_string_pretty(&listing)?);
	Ok(())
}
