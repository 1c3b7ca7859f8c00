// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn missing_column(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "COLUMN_001".to_string(),
		message: format!("row for table '{}' has no value for required column '{}'", table, column),
		label: Some("missing column".to_string()),
		help: Some(format!("provide '{}' or make it nullable or auto-increment", column)),
		..Default::default()
	}
}
