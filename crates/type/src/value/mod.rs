// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod decimal;
mod row_id;
mod temporal;
mod r#type;

pub use decimal::Decimal;
pub use row_id::RowId;
pub use temporal::{Date, DateTime, Time};
pub use r#type::Type;

use crate::{
	Result,
	error::diagnostic::{
		domain::{integer_out_of_range, negative_unsigned},
		parse::invalid_number,
	},
	return_error,
};

/// A typed, non-null column value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Utf8(String),
	Blob(Vec<u8>),
	Uint8(u64),
	Int8(i64),
	Float8(f64),
	Decimal(Decimal),
	Date(Date),
	Time(Time),
	DateTime(DateTime),
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
			Value::Uint8(_) => Type::Uint8,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::Decimal(_) => Type::Decimal,
			Value::Date(_) => Type::Date,
			Value::Time(_) => Type::Time,
			Value::DateTime(_) => Type::DateTime,
		}
	}

	/// Parses a text field into a value of the given type, accepting every
	/// spelling the type understands.
	pub fn parse(text: &str, ty: Type) -> Result<Value> {
		match ty {
			Type::Utf8 => Ok(Value::Utf8(text.to_string())),
			Type::Blob => Ok(Value::Blob(text.as_bytes().to_vec())),
			Type::Uint8 => parse_unsigned(text).map(Value::Uint8),
			Type::Int8 => parse_signed(text).map(Value::Int8),
			Type::Float8 => text
				.trim()
				.parse::<f64>()
				.map(Value::Float8)
				.map_err(|_| crate::error!(invalid_number(text, Type::Float8))),
			Type::Decimal => Decimal::parse(text).map(Value::Decimal),
			Type::Date => Date::parse(text).map(Value::Date),
			Type::Time => Time::parse(text).map(Value::Time),
			Type::DateTime => DateTime::parse(text).map(Value::DateTime),
		}
	}
}

fn parse_unsigned(text: &str) -> Result<u64> {
	let trimmed = text.trim();
	if let Ok(value) = trimmed.parse::<u64>() {
		return Ok(value);
	}
	match trimmed.parse::<i128>() {
		Ok(value) if value < 0 => return_error!(negative_unsigned(text)),
		Ok(_) => return_error!(integer_out_of_range(text, Type::Uint8)),
		Err(_) => return_error!(invalid_number(text, Type::Uint8)),
	}
}

fn parse_signed(text: &str) -> Result<i64> {
	let trimmed = text.trim();
	if let Ok(value) = trimmed.parse::<i64>() {
		return Ok(value);
	}
	match trimmed.parse::<i128>() {
		Ok(_) => return_error!(integer_out_of_range(text, Type::Int8)),
		Err(_) => return_error!(invalid_number(text, Type::Int8)),
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Utf8(value) => f.write_str(value),
			Value::Blob(value) => {
				f.write_str("0x")?;
				for byte in value {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::Time(value) => Display::fmt(value, f),
			Value::DateTime(value) => Display::fmt(value, f),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::Uint8(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float8(value)
	}
}

impl From<Decimal> for Value {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl From<Date> for Value {
	fn from(value: Date) -> Self {
		Value::Date(value)
	}
}

impl From<Time> for Value {
	fn from(value: Time) -> Self {
		Value::Time(value)
	}
}

impl From<DateTime> for Value {
	fn from(value: DateTime) -> Self {
		Value::DateTime(value)
	}
}
