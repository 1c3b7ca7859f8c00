// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;
use keystone_type::{
	Decimal, Result, Value,
	error::diagnostic::{domain::decimal_out_of_range, key::corrupt_value},
	return_error,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use super::complement;
use crate::catalog::ColumnSchema;

/// Bytes needed to hold `digits` decimal digits: four bytes per nine
/// digits plus a partial group for the remainder.
pub fn bytes_for_digits(digits: u32) -> usize {
	(4 * (digits / 9) + (digits % 9 + 1) / 2) as usize
}

/// Encoded width of a DECIMAL(precision, scale) value.
pub fn decimal_width(precision: u8, scale: u8) -> usize {
	let (integer, fraction) = slot_widths(precision, scale);
	integer + fraction
}

fn slot_widths(precision: u8, scale: u8) -> (usize, usize) {
	(bytes_for_digits(precision.saturating_sub(scale) as u32), bytes_for_digits(scale as u32))
}

fn power_of_ten(exponent: u32) -> BigUint {
	BigUint::from(10u32).pow(exponent)
}

fn write_right_aligned(target: &mut [u8], value: &BigUint) {
	if value.is_zero() {
		return;
	}
	let bytes = value.to_bytes_be();
	let bytes = &bytes[bytes.len().saturating_sub(target.len())..];
	let offset = target.len() - bytes.len();
	target[offset..].copy_from_slice(bytes);
}

/// Fractional digits beyond the column scale are truncated toward zero.
pub(crate) fn encode(value: &Decimal, column: &ColumnSchema) -> Result<Vec<u8>> {
	let (precision, scale) = (column.precision, column.scale);
	let (integer_width, fraction_width) = slot_widths(precision, scale);

	let (unscaled, _) = value.inner().with_scale(scale as i64).into_bigint_and_exponent();
	let negative = unscaled.sign() == Sign::Minus;
	let factor = power_of_ten(scale as u32);
	let integer = unscaled.magnitude() / &factor;
	let fraction = unscaled.magnitude() % &factor;

	if integer >= power_of_ten(precision.saturating_sub(scale) as u32) {
		return_error!(decimal_out_of_range(&column.name, &value.to_string(), precision, scale));
	}

	let mut buffer = vec![0u8; integer_width + fraction_width];
	write_right_aligned(&mut buffer[..integer_width], &integer);
	write_right_aligned(&mut buffer[integer_width..], &fraction);

	if let Some(first) = buffer.first_mut() {
		*first ^= 0x80;
	}
	if negative {
		complement(&mut buffer);
	}
	Ok(buffer)
}

pub(crate) fn decode(bytes: &[u8], column: &ColumnSchema) -> Result<Value> {
	let (precision, scale) = (column.precision, column.scale);
	let (integer_width, fraction_width) = slot_widths(precision, scale);

	if bytes.is_empty() || bytes.len() != integer_width + fraction_width {
		return_error!(corrupt_value(
			&column.name,
			format!("expected {} decimal bytes, got {}", integer_width + fraction_width, bytes.len())
		));
	}

	let mut buffer = bytes.to_vec();
	let negative = buffer[0] & 0x80 == 0;
	if negative {
		complement(&mut buffer);
	}
	buffer[0] ^= 0x80;

	let integer = BigUint::from_bytes_be(&buffer[..integer_width]);
	let fraction = BigUint::from_bytes_be(&buffer[integer_width..]);
	let magnitude = integer * power_of_ten(scale as u32) + fraction;
	let sign = if negative {
		Sign::Minus
	} else {
		Sign::Plus
	};

	let unscaled = BigInt::from_biguint(sign, magnitude);
	Ok(Value::Decimal(Decimal::new(BigDecimal::new(unscaled, scale as i64))))
}
