// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::Type;

pub fn invalid_date(text: &str) -> Diagnostic {
	Diagnostic {
		code: "PARSE_001".to_string(),
		message: format!("'{}' is not a valid date", text),
		label: Some("invalid date".to_string()),
		help: Some("use yyyy-MM-dd (e.g., 2024-03-15)".to_string()),
		notes: vec!["also accepted: yyyy/MM/dd, yyyyMMdd".to_string()],
		..Default::default()
	}
}

pub fn invalid_time(text: &str) -> Diagnostic {
	Diagnostic {
		code: "PARSE_002".to_string(),
		message: format!("'{}' is not a valid time", text),
		label: Some("invalid time".to_string()),
		help: Some("use HH:mm:ss (e.g., 14:30:00)".to_string()),
		notes: vec!["also accepted: HHmmss, HH:mm".to_string()],
		..Default::default()
	}
}

pub fn invalid_datetime(text: &str) -> Diagnostic {
	Diagnostic {
		code: "PARSE_003".to_string(),
		message: format!("'{}' is not a valid datetime", text),
		label: Some("invalid datetime".to_string()),
		help: Some("use yyyy-MM-dd HH:mm:ss (e.g., 2024-03-15 14:30:00)".to_string()),
		notes: vec!["also accepted: yyyy/MM/dd HH:mm:ss, yyyyMMddHHmmss, yyyy-MM-ddTHH:mm:ss".to_string()],
		..Default::default()
	}
}

pub fn invalid_number(text: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "PARSE_004".to_string(),
		message: format!("'{}' is not a valid {}", text, ty),
		label: Some("invalid number".to_string()),
		..Default::default()
	}
}

pub fn invalid_utf8(column: &str) -> Diagnostic {
	Diagnostic {
		code: "PARSE_005".to_string(),
		message: format!("stored bytes of column '{}' are not valid UTF-8", column),
		label: Some("invalid utf-8".to_string()),
		..Default::default()
	}
	.with_column(column, Type::Utf8)
}
