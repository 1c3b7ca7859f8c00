// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn empty_key() -> Diagnostic {
	Diagnostic {
		code: "KEY_001".to_string(),
		message: "key is empty".to_string(),
		label: Some("corrupt key".to_string()),
		notes: vec!["a stored key always starts with a kind byte".to_string()],
		..Default::default()
	}
}

pub fn unknown_key_kind(kind: u8) -> Diagnostic {
	Diagnostic {
		code: "KEY_002".to_string(),
		message: format!("unknown key kind 0x{:02x}", kind),
		label: Some("corrupt key".to_string()),
		notes: vec!["this indicates store corruption or a version mismatch".to_string()],
		..Default::default()
	}
}

pub fn invalid_key_length(kind: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "KEY_003".to_string(),
		message: format!("{} key must be {} bytes, got {}", kind, expected, actual),
		label: Some("corrupt key".to_string()),
		..Default::default()
	}
}

pub fn index_key_too_short(actual: usize) -> Diagnostic {
	Diagnostic {
		code: "KEY_004".to_string(),
		message: format!("index key of {} bytes cannot hold its table id, index id and row id", actual),
		label: Some("corrupt key".to_string()),
		..Default::default()
	}
}

pub fn truncated_key(kind: &str, field: &str) -> Diagnostic {
	Diagnostic {
		code: "KEY_005".to_string(),
		message: format!("{} key ends before its {}", kind, field),
		label: Some("corrupt key".to_string()),
		..Default::default()
	}
}

pub fn corrupt_value(column: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "KEY_006".to_string(),
		message: format!("stored value of column '{}' is malformed: {}", column, reason.into()),
		label: Some("corrupt value".to_string()),
		..Default::default()
	}
}

pub fn unexpected_key_kind(expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "KEY_007".to_string(),
		message: format!("expected a {} key but found a {} key", expected, actual),
		label: Some("corrupt key".to_string()),
		notes: vec!["the key range holds a key of another shape".to_string()],
		..Default::default()
	}
}
