// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The column types a table can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// STRING: UTF-8 text, bounded by the column's max length
	Utf8,
	/// BINARY: raw bytes, bounded by the column's max length
	Blob,
	/// ULONG: 8-byte unsigned integer
	Uint8,
	/// LONG: 8-byte signed integer
	Int8,
	/// DOUBLE: 8-byte IEEE-754 floating point
	Float8,
	/// DECIMAL: fixed precision and scale
	Decimal,
	/// DATE: calendar date without time of day
	Date,
	/// TIME: signed number of seconds, rendered as HH:mm:ss
	Time,
	/// DATETIME: calendar date with second precision
	DateTime,
}

impl Type {
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Utf8 => 0x01,
			Type::Blob => 0x02,
			Type::Uint8 => 0x03,
			Type::Int8 => 0x04,
			Type::Float8 => 0x05,
			Type::Decimal => 0x06,
			Type::Date => 0x07,
			Type::Time => 0x08,
			Type::DateTime => 0x09,
		}
	}

	pub fn from_u8(value: u8) -> Option<Type> {
		match value {
			0x01 => Some(Type::Utf8),
			0x02 => Some(Type::Blob),
			0x03 => Some(Type::Uint8),
			0x04 => Some(Type::Int8),
			0x05 => Some(Type::Float8),
			0x06 => Some(Type::Decimal),
			0x07 => Some(Type::Date),
			0x08 => Some(Type::Time),
			0x09 => Some(Type::DateTime),
			_ => None,
		}
	}

	/// Whether values of this type carry a declared maximum byte length.
	pub fn is_variable_length(&self) -> bool {
		matches!(self, Type::Utf8 | Type::Blob)
	}

	/// Whether the type may be declared auto-increment.
	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Uint8 | Type::Int8)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Utf8 => f.write_str("STRING"),
			Type::Blob => f.write_str("BINARY"),
			Type::Uint8 => f.write_str("ULONG"),
			Type::Int8 => f.write_str("LONG"),
			Type::Float8 => f.write_str("DOUBLE"),
			Type::Decimal => f.write_str("DECIMAL"),
			Type::Date => f.write_str("DATE"),
			Type::Time => f.write_str("TIME"),
			Type::DateTime => f.write_str("DATETIME"),
		}
	}
}
