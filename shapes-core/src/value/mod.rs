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

/*!
This module exposes the [`Value`] type and related subtypes, which are the dynamic representation
of whatever a shape decoded (much like `serde_json::Value` is a runtime representation of JSON
data). Typed layouts convert into it through [`IntoValue`].
*/

mod into_value;
mod serialize;

pub use into_value::IntoValue;

use std::fmt::{self, Debug};

/// [`Value`] holds a representation of some value that has been decoded.
///
/// Records, tuples and sequences are all [`Composite`]s; enums are [`Variant`]s. Byte
/// sequences are kept apart from other sequences so that they stay compact and print as hex.
#[derive(Clone, PartialEq, Eq, derive_more::From)]
pub enum Value {
	/// A named or unnamed struct-like, array-like or tuple-like set of values.
	Composite(Composite),
	/// An enum variant.
	Variant(Variant),
	/// A sequence of raw bytes.
	Bytes(Vec<u8>),
	/// Any of the primitive values we can have.
	Primitive(Primitive),
}

impl Value {
	/// A struct-like value with named fields.
	pub fn named_composite<S: Into<String>>(fields: impl IntoIterator<Item = (S, Value)>) -> Value {
		Value::Composite(Composite::Named(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()))
	}

	/// A tuple-like (or sequence) value.
	pub fn unnamed_composite(values: impl IntoIterator<Item = Value>) -> Value {
		Value::Composite(Composite::Unnamed(values.into_iter().collect()))
	}

	pub fn variant(name: impl Into<String>, values: Composite) -> Value {
		Value::Variant(Variant { name: name.into(), values })
	}

	pub fn named_variant<S: Into<String>>(
		name: impl Into<String>,
		fields: impl IntoIterator<Item = (S, Value)>,
	) -> Value {
		Value::variant(name, Composite::Named(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()))
	}

	pub fn unnamed_variant(name: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Value {
		Value::variant(name, Composite::Unnamed(values.into_iter().collect()))
	}

	/// A variant without any fields, eg `None`.
	pub fn unit_variant(name: impl Into<String>) -> Value {
		Value::variant(name, Composite::Unnamed(Vec::new()))
	}

	pub fn bytes(bytes: impl Into<Vec<u8>>) -> Value {
		Value::Bytes(bytes.into())
	}

	pub fn bool(val: bool) -> Value {
		Value::Primitive(Primitive::Bool(val))
	}

	pub fn u8(val: u8) -> Value {
		Value::Primitive(Primitive::U8(val))
	}

	pub fn u16(val: u16) -> Value {
		Value::Primitive(Primitive::U16(val))
	}

	pub fn u32(val: u32) -> Value {
		Value::Primitive(Primitive::U32(val))
	}

	pub fn u64(val: u64) -> Value {
		Value::Primitive(Primitive::U64(val))
	}

	pub fn u128(val: u128) -> Value {
		Value::Primitive(Primitive::U128(val))
	}

	/// Look up a named field of a record, or of a variant's named fields.
	pub fn field(&self, name: &str) -> Option<&Value> {
		match self {
			Value::Composite(composite) => composite.field(name),
			Value::Variant(variant) => variant.values.field(name),
			_ => None,
		}
	}

	/// The numeric value of any unsigned primitive.
	pub fn as_u128(&self) -> Option<u128> {
		match self {
			Value::Primitive(p) => p.as_u128(),
			_ => None,
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Composite(val) => Debug::fmt(val, f),
			Self::Variant(val) => Debug::fmt(val, f),
			Self::Bytes(val) => write!(f, "0x{}", hex::encode(val)),
			Self::Primitive(val) => Debug::fmt(val, f),
		}
	}
}

/// A named or unnamed struct-like, array-like or tuple-like set of values.
/// This is used to represent a range of composite values on their own, or
/// as values for a specific [`Variant`].
#[derive(Clone, PartialEq, Eq)]
pub enum Composite {
	/// Eg `{ foo: 2, bar: false }`
	Named(Vec<(String, Value)>),
	/// Eg `(2, false)`
	Unnamed(Vec<Value>),
}

impl Composite {
	/// Return the number of values stored in this composite type.
	pub fn len(&self) -> usize {
		match self {
			Composite::Named(values) => values.len(),
			Composite::Unnamed(values) => values.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		match self {
			Composite::Named(values) => values.iter().find(|(k, _)| k == name).map(|(_, v)| v),
			Composite::Unnamed(_) => None,
		}
	}
}

impl Debug for Composite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Composite::Named(fields) => {
				let mut struc = f.debug_struct("");
				for (name, val) in fields {
					struc.field(name, val);
				}
				struc.finish()
			}
			Composite::Unnamed(fields) => {
				let mut struc = f.debug_tuple("");
				for val in fields {
					struc.field(val);
				}
				struc.finish()
			}
		}
	}
}

/// This represents the value of a specific variant from an enum, and contains
/// the name of the variant, and the named/unnamed values associated with it.
#[derive(Clone, PartialEq, Eq)]
pub struct Variant {
	/// The name of the variant.
	pub name: String,
	/// Values for each of the named or unnamed fields associated with this variant.
	pub values: Composite,
}

impl Debug for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.values {
			Composite::Named(fields) => {
				let mut struc = f.debug_struct(&self.name);
				for (name, val) in fields {
					struc.field(name, val);
				}
				struc.finish()
			}
			Composite::Unnamed(fields) => {
				let mut tuple = f.debug_tuple(&self.name);
				for val in fields {
					tuple.field(val);
				}
				tuple.finish()
			}
		}
	}
}

/// A "primitive" value. Chain data only ever needs unsigned integers and booleans here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
	Bool(bool),
	U8(u8),
	U16(u16),
	U32(u32),
	U64(u64),
	U128(u128),
}

impl Primitive {
	pub fn as_u128(&self) -> Option<u128> {
		match *self {
			Primitive::Bool(_) => None,
			Primitive::U8(v) => Some(v.into()),
			Primitive::U16(v) => Some(v.into()),
			Primitive::U32(v) => Some(v.into()),
			Primitive::U64(v) => Some(v.into()),
			Primitive::U128(v) => Some(v),
		}
	}
}
