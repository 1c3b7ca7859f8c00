// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn table_not_found(table: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		message: format!("table '{}' not found", table),
		label: Some("unknown table".to_string()),
		..Default::default()
	}
}

pub fn table_already_exists(table: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		message: format!("table '{}' already exists", table),
		label: Some("duplicate table".to_string()),
		help: Some("choose a different name or drop the existing table first".to_string()),
		..Default::default()
	}
}

pub fn index_not_found(table: &str, index: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_003".to_string(),
		message: format!("index '{}' not found on table '{}'", index, table),
		label: Some("unknown index".to_string()),
		..Default::default()
	}
}

pub fn index_already_exists(table: &str, index: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_004".to_string(),
		message: format!("index '{}' already exists on table '{}'", index, table),
		label: Some("duplicate index".to_string()),
		..Default::default()
	}
}

pub fn row_not_found(table: &str, row: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_005".to_string(),
		message: format!("row {} not found in table '{}'", row, table),
		label: Some("unknown row".to_string()),
		..Default::default()
	}
}

pub fn column_already_exists(table: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_006".to_string(),
		message: format!("column '{}' already exists on table '{}'", column, table),
		label: Some("duplicate column".to_string()),
		..Default::default()
	}
}

pub fn column_in_use(table: &str, column: &str, index: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_007".to_string(),
		message: format!("column '{}' of table '{}' is used by index '{}'", column, table, index),
		label: Some("column in use".to_string()),
		help: Some(format!("drop index '{}' before removing the column", index)),
		..Default::default()
	}
}
