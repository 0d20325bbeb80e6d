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

use super::{Composite, Primitive, Value, Variant};
use serde::{
	ser::{SerializeMap, SerializeSeq},
	Serialize,
};

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Value::Composite(val) => val.serialize(serializer),
			Value::Variant(val) => val.serialize(serializer),
			// Hex keeps long byte strings (hashes, preimages) readable in JSON output.
			Value::Bytes(val) => serializer.collect_str(&format_args!("0x{}", hex::encode(val))),
			Value::Primitive(val) => val.serialize(serializer),
		}
	}
}

impl Serialize for Composite {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Composite::Named(vals) => {
				let mut map = serializer.serialize_map(Some(vals.len()))?;
				for (key, val) in vals {
					map.serialize_entry(key, val)?;
				}
				map.end()
			}
			Composite::Unnamed(vals) => {
				let mut seq = serializer.serialize_seq(Some(vals.len()))?;
				for val in vals {
					seq.serialize_element(val)?;
				}
				seq.end()
			}
		}
	}
}

impl Serialize for Primitive {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		// Delegate to the serialization strategy used by the primitive types.
		match self {
			Primitive::Bool(v) => v.serialize(serializer),
			Primitive::U8(v) => v.serialize(serializer),
			Primitive::U16(v) => v.serialize(serializer),
			Primitive::U32(v) => v.serialize(serializer),
			Primitive::U64(v) => v.serialize(serializer),
			Primitive::U128(v) => v.serialize(serializer),
		}
	}
}

impl Serialize for Variant {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		// Variant names are only known at runtime, so serde's enum model doesn't fit;
		// we write a map with the name and the values instead.
		let mut map = serializer.serialize_map(Some(2))?;
		map.serialize_entry("name", &self.name)?;
		map.serialize_entry("values", &self.values)?;
		map.end()
	}
}

#[cfg(test)]
mod test {

	use super::*;
	use serde_json::json;

	fn assert_value(value: Value, expected: serde_json::Value) {
		let val = serde_json::to_value(&value).expect("can serialize to serde_json::Value");
		assert_eq!(val, expected);
	}

	#[test]
	fn serialize_primitives() {
		assert_value(Value::u8(1), json!(1));
		assert_value(Value::u16(1), json!(1));
		assert_value(Value::u32(1), json!(1));
		assert_value(Value::u64(1), json!(1));
		assert_value(Value::bool(true), json!(true));
		assert_value(Value::bool(false), json!(false));
	}

	#[test]
	fn serialize_bytes_as_hex() {
		assert_value(Value::bytes(vec![0x5a, 0x96, 0xe4]), json!("0x5a96e4"));
		assert_value(Value::bytes(Vec::new()), json!("0x"));
	}

	#[test]
	fn serialize_composites() {
		assert_value(
			Value::named_composite(vec![("a", Value::bool(true)), ("b", Value::u32(7))]),
			json!({ "a": true, "b": 7 }),
		);
		assert_value(Value::unnamed_composite(vec![Value::bool(true), Value::u32(7)]), json!([true, 7]));
	}

	#[test]
	fn serialize_variants() {
		assert_value(
			Value::named_variant("Lookup", vec![("hash", Value::bytes(vec![1, 2])), ("len", Value::u32(2))]),
			json!({ "name": "Lookup", "values": { "hash": "0x0102", "len": 2 } }),
		);
		assert_value(Value::unit_variant("Root"), json!({ "name": "Root", "values": [] }));
	}
}
