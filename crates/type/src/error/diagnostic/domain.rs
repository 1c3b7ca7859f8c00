// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::Type;

pub fn negative_unsigned(text: &str) -> Diagnostic {
	Diagnostic {
		code: "DOMAIN_001".to_string(),
		message: format!("'{}' is negative but the column is unsigned", text),
		label: Some("value out of range".to_string()),
		help: Some("ULONG columns only accept values from 0 to 18446744073709551615".to_string()),
		..Default::default()
	}
}

pub fn value_exceeds_max_length(column: &str, ty: Type, actual: usize, max: usize) -> Diagnostic {
	Diagnostic {
		code: "DOMAIN_002".to_string(),
		message: format!("{} value exceeds maximum length: {} bytes (max: {} bytes)", ty, actual, max),
		label: Some("value too long".to_string()),
		help: Some(format!(
			"column '{}' is constrained to {} bytes, shorten the value or widen the column",
			column, max
		)),
		..Default::default()
	}
	.with_column(column, ty)
}

pub fn decimal_out_of_range(column: &str, value: &str, precision: u8, scale: u8) -> Diagnostic {
	Diagnostic {
		code: "DOMAIN_003".to_string(),
		message: format!("decimal {} does not fit DECIMAL({}, {})", value, precision, scale),
		label: Some("value out of range".to_string()),
		notes: vec![format!("at most {} integer digits are allowed", precision.saturating_sub(scale))],
		..Default::default()
	}
	.with_column(column, Type::Decimal)
}

pub fn temporal_out_of_range(ty: Type, value: &str) -> Diagnostic {
	Diagnostic {
		code: "DOMAIN_004".to_string(),
		message: format!("{} value {} is outside the supported range", ty, value),
		label: Some("value out of range".to_string()),
		notes: vec!["years must lie between 0000 and 9999".to_string()],
		..Default::default()
	}
}

pub fn integer_out_of_range(text: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "DOMAIN_005".to_string(),
		message: format!("'{}' does not fit into {}", text, ty),
		label: Some("value out of range".to_string()),
		..Default::default()
	}
}
