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

use super::{Composite, Value};

/// Convert a typed, decoded value into its dynamic [`Value`] representation.
///
/// Implemented here for the building blocks SCALE layouts are made of; structs and enums
/// get an implementation from [`crate::impl_into_value!`].
pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

macro_rules! primitive_into_value {
	($($ty:ident),*) => {
		$(
			impl IntoValue for $ty {
				fn into_value(self) -> Value {
					Value::$ty(self)
				}
			}
		)*
	};
}

primitive_into_value!(bool, u8, u16, u32, u64, u128);

impl IntoValue for () {
	fn into_value(self) -> Value {
		Value::unnamed_composite(Vec::new())
	}
}

// Fixed size byte arrays are hashes, account ids and keys; treat them as bytes.
impl<const N: usize> IntoValue for [u8; N] {
	fn into_value(self) -> Value {
		Value::Bytes(self.to_vec())
	}
}

impl<T: IntoValue> IntoValue for Vec<T> {
	fn into_value(self) -> Value {
		Value::unnamed_composite(self.into_iter().map(IntoValue::into_value))
	}
}

impl<T: IntoValue> IntoValue for Box<T> {
	fn into_value(self) -> Value {
		(*self).into_value()
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(val) => Value::unnamed_variant("Some", vec![val.into_value()]),
			None => Value::unit_variant("None"),
		}
	}
}

macro_rules! tuple_into_value {
	($($name:ident),+) => {
		impl<$($name: IntoValue),+> IntoValue for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_value(self) -> Value {
				let ($($name,)+) = self;
				Value::Composite(Composite::Unnamed(vec![$($name.into_value()),+]))
			}
		}
	};
}

tuple_into_value!(A);
tuple_into_value!(A, B);
tuple_into_value!(A, B, C);
tuple_into_value!(A, B, C, D);

/// Implement [`IntoValue`] for a struct or an enum by listing its fields.
///
/// ```rust
/// use shapes_core::{impl_into_value, value::{IntoValue, Value}};
///
/// struct Deposit { who: [u8; 2], amount: u128 }
/// impl_into_value!(struct Deposit { who, amount });
///
/// enum DispatchTime { At(u32), After(u32), Never }
/// impl_into_value!(enum DispatchTime { At(when), After(delay), Never });
///
/// let deposit = Deposit { who: [1, 2], amount: 10 }.into_value();
/// assert_eq!(deposit, Value::named_composite(vec![("who", Value::bytes(vec![1, 2])), ("amount", Value::u128(10))]));
///
/// let at = DispatchTime::At(5).into_value();
/// assert_eq!(at, Value::unnamed_variant("At", vec![Value::u32(5)]));
/// ```
#[macro_export]
macro_rules! impl_into_value {
	(struct $ty:ident { $($field:ident),* $(,)? }) => {
		impl $crate::value::IntoValue for $ty {
			fn into_value(self) -> $crate::value::Value {
				$crate::value::Value::named_composite(::std::vec![
					$((stringify!($field), $crate::value::IntoValue::into_value(self.$field))),*
				])
			}
		}
	};
	(struct $ty:ident ( $($field:tt),* $(,)? )) => {
		impl $crate::value::IntoValue for $ty {
			fn into_value(self) -> $crate::value::Value {
				$crate::value::Value::unnamed_composite(::std::vec![
					$($crate::value::IntoValue::into_value(self.$field)),*
				])
			}
		}
	};
	(enum $ty:ident { $( $variant:ident $( ( $($tfield:ident),* ) )? $( { $($nfield:ident),* } )? ),* $(,)? }) => {
		impl $crate::value::IntoValue for $ty {
			fn into_value(self) -> $crate::value::Value {
				match self {
					$(
						$ty::$variant $( ( $($tfield),* ) )? $( { $($nfield),* } )? => $crate::value::Value::variant(
							stringify!($variant),
							$crate::impl_into_value!(@fields $( ( $($tfield),* ) )? $( { $($nfield),* } )?),
						),
					)*
				}
			}
		}
	};
	(@fields) => {
		$crate::value::Composite::Unnamed(::std::vec::Vec::new())
	};
	(@fields ( $($field:ident),* )) => {
		$crate::value::Composite::Unnamed(::std::vec![$($crate::value::IntoValue::into_value($field)),*])
	};
	(@fields { $($field:ident),* }) => {
		$crate::value::Composite::Named(::std::vec![
			$((::std::string::String::from(stringify!($field)), $crate::value::IntoValue::into_value($field))),*
		])
	};
}
