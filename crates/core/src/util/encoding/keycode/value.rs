// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{
	Date, DateTime, Result, Time, Type, Value,
	error::diagnostic::{
		contract::{null_for_non_nullable, type_mismatch},
		domain::value_exceeds_max_length,
		key::corrupt_value,
		parse::invalid_utf8,
	},
	return_error,
};

use super::{complement, decimal};
use crate::catalog::{ColumnSchema, SortDirection};

const SIGN_BIT: u64 = 1 << 63;

/// Encodes a column value. A null value yields `None` for nullable columns
/// and fails for non-nullable ones.
///
/// STRING and BINARY values are not padded here, see [`encode_key`].
pub fn encode(value: Option<&Value>, column: &ColumnSchema, direction: SortDirection) -> Result<Option<Vec<u8>>> {
	let Some(value) = value else {
		if column.nullable {
			return Ok(None);
		}
		return_error!(null_for_non_nullable(&column.name, column.ty));
	};

	let mut bytes = encode_ascending(value, column)?;
	if direction == SortDirection::Desc {
		complement(&mut bytes);
	}
	Ok(Some(bytes))
}

/// Decodes bytes produced by [`encode`] with the same direction.
pub fn decode(bytes: &[u8], column: &ColumnSchema, direction: SortDirection) -> Result<Value> {
	match direction {
		SortDirection::Asc => decode_ascending(bytes, column),
		SortDirection::Desc => {
			let mut ascending = bytes.to_vec();
			complement(&mut ascending);
			decode_ascending(&ascending, column)
		}
	}
}

/// Encodes a non-null value into its fixed-width index key form.
pub fn encode_key(value: &Value, column: &ColumnSchema, direction: SortDirection) -> Result<Vec<u8>> {
	let mut bytes = encode_ascending(value, column)?;
	bytes.resize(key_width(column), 0x00);
	if direction == SortDirection::Desc {
		complement(&mut bytes);
	}
	Ok(bytes)
}

/// Decodes the fixed-width index key form. Trailing `0x00` padding of
/// STRING and BINARY values is stripped.
pub fn decode_key(bytes: &[u8], column: &ColumnSchema, direction: SortDirection) -> Result<Value> {
	let width = key_width(column);
	if bytes.len() != width {
		return_error!(corrupt_value(&column.name, format!("expected {} key bytes, got {}", width, bytes.len())));
	}

	let mut ascending = bytes.to_vec();
	if direction == SortDirection::Desc {
		complement(&mut ascending);
	}
	if column.ty.is_variable_length() {
		let end = ascending.iter().rposition(|b| *b != 0x00).map_or(0, |p| p + 1);
		ascending.truncate(end);
	}
	decode_ascending(&ascending, column)
}

/// Width of a column value inside an index key.
pub fn key_width(column: &ColumnSchema) -> usize {
	match column.ty {
		Type::Utf8 | Type::Blob => column.max_length as usize,
		Type::Uint8 | Type::Int8 | Type::Float8 | Type::Time => 8,
		Type::Decimal => decimal::decimal_width(column.precision, column.scale),
		Type::Date => 10,
		Type::DateTime => 19,
	}
}

fn encode_ascending(value: &Value, column: &ColumnSchema) -> Result<Vec<u8>> {
	if value.get_type() != column.ty {
		return_error!(type_mismatch(&column.name, column.ty, value.get_type()));
	}

	match value {
		Value::Utf8(text) => bounded(text.as_bytes(), column),
		Value::Blob(bytes) => bounded(bytes, column),
		Value::Uint8(value) => Ok(value.to_be_bytes().to_vec()),
		Value::Int8(value) => Ok(encode_i64(*value).to_vec()),
		Value::Float8(value) => Ok(encode_f64(*value).to_vec()),
		Value::Decimal(value) => decimal::encode(value, column),
		Value::Date(value) => Ok(value.to_string().into_bytes()),
		Value::Time(value) => Ok(encode_i64(value.to_seconds()).to_vec()),
		Value::DateTime(value) => Ok(value.to_string().into_bytes()),
	}
}

fn decode_ascending(bytes: &[u8], column: &ColumnSchema) -> Result<Value> {
	match column.ty {
		Type::Utf8 => String::from_utf8(bytes.to_vec())
			.map(Value::Utf8)
			.map_err(|_| keystone_type::error!(invalid_utf8(&column.name))),
		Type::Blob => Ok(Value::Blob(bytes.to_vec())),
		Type::Uint8 => Ok(Value::Uint8(u64::from_be_bytes(fixed(bytes, column)?))),
		Type::Int8 => Ok(Value::Int8(decode_i64(fixed(bytes, column)?))),
		Type::Float8 => Ok(Value::Float8(decode_f64(fixed(bytes, column)?))),
		Type::Decimal => decimal::decode(bytes, column),
		Type::Date => Date::parse(text(bytes, column)?)
			.map(Value::Date)
			.map_err(|err| keystone_type::error!(corrupt_value(&column.name, err.message.clone()))),
		Type::Time => Ok(Value::Time(Time::from_seconds(decode_i64(fixed(bytes, column)?)))),
		Type::DateTime => DateTime::parse(text(bytes, column)?)
			.map(Value::DateTime)
			.map_err(|err| keystone_type::error!(corrupt_value(&column.name, err.message.clone()))),
	}
}

fn bounded(bytes: &[u8], column: &ColumnSchema) -> Result<Vec<u8>> {
	if bytes.len() > column.max_length as usize {
		return_error!(value_exceeds_max_length(&column.name, column.ty, bytes.len(), column.max_length as usize));
	}
	Ok(bytes.to_vec())
}

fn fixed(bytes: &[u8], column: &ColumnSchema) -> Result<[u8; 8]> {
	bytes.try_into()
		.map_err(|_| keystone_type::error!(corrupt_value(&column.name, format!("expected 8 bytes, got {}", bytes.len()))))
}

fn text<'a>(bytes: &'a [u8], column: &ColumnSchema) -> Result<&'a str> {
	std::str::from_utf8(bytes).map_err(|_| keystone_type::error!(invalid_utf8(&column.name)))
}

fn encode_i64(value: i64) -> [u8; 8] {
	((value as u64) ^ SIGN_BIT).to_be_bytes()
}

fn decode_i64(bytes: [u8; 8]) -> i64 {
	(u64::from_be_bytes(bytes) ^ SIGN_BIT) as i64
}

fn encode_f64(value: f64) -> [u8; 8] {
	let bits = value.to_bits();
	let bits = if bits & SIGN_BIT == 0 {
		bits ^ SIGN_BIT
	} else {
		!bits
	};
	bits.to_be_bytes()
}

fn decode_f64(bytes: [u8; 8]) -> f64 {
	let bits = u64::from_be_bytes(bytes);
	let bits = if bits & SIGN_BIT != 0 {
		bits ^ SIGN_BIT
	} else {
		!bits
	};
	f64::from_bits(bits)
}
