// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn serialize(what: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "STORE_001".to_string(),
		message: format!("failed to serialize {}: {}", what, reason.into()),
		..Default::default()
	}
}

pub fn deserialize(what: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "STORE_002".to_string(),
		message: format!("failed to deserialize {}: {}", what, reason.into()),
		notes: vec!["stored bytes may be corrupt or written by an incompatible version".to_string()],
		..Default::default()
	}
}

pub fn corrupt_counter(what: &str, length: usize) -> Diagnostic {
	Diagnostic {
		code: "STORE_003".to_string(),
		message: format!("{} counter must be 8 bytes, got {}", what, length),
		..Default::default()
	}
}
