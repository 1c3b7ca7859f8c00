// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::Type;

pub fn null_argument(what: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_001".to_string(),
		message: format!("required argument '{}' is missing", what),
		label: Some("missing argument".to_string()),
		help: Some(format!("supply a value for '{}'", what)),
		..Default::default()
	}
}

pub fn null_for_non_nullable(column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_002".to_string(),
		message: format!("column '{}' is not nullable but no value was given", column),
		label: Some("null value".to_string()),
		help: Some("declare the column nullable or provide a value".to_string()),
		..Default::default()
	}
	.with_column(column, ty)
}

pub fn type_mismatch(column: &str, expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_003".to_string(),
		message: format!("column '{}' expects {} but got {}", column, expected, actual),
		label: Some("type mismatch".to_string()),
		help: Some(format!("convert the value to {} before writing it", expected)),
		..Default::default()
	}
	.with_column(column, expected)
}

pub fn invalid_column_schema(column: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_004".to_string(),
		message: format!("column '{}' has an invalid definition: {}", column, reason.into()),
		label: Some("invalid column".to_string()),
		..Default::default()
	}
}

pub fn unknown_column(column: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_005".to_string(),
		message: format!("column '{}' is not part of the table", column),
		label: Some("unknown column".to_string()),
		..Default::default()
	}
}

pub fn index_column_not_in_table(index: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_006".to_string(),
		message: format!("index '{}' references column '{}' which does not exist", index, column),
		label: Some("unknown index column".to_string()),
		help: Some("every indexed column must be declared on the table".to_string()),
		..Default::default()
	}
}

pub fn query_not_index_prefix(index: &str, column: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_007".to_string(),
		message: format!("column '{}' is not part of a leading prefix of index '{}'", column, index),
		label: Some("not an index prefix".to_string()),
		help: Some("supply values for the index columns in declared order, without gaps".to_string()),
		..Default::default()
	}
}

pub fn null_in_ordered_query(index: &str, query: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_008".to_string(),
		message: format!("{} scan on index '{}' was given a null value", query, index),
		label: Some("null in ordered scan".to_string()),
		help: Some("null values can only be looked up with an exact key scan".to_string()),
		notes: vec!["rows with null index values live in an unordered bucket".to_string()],
		..Default::default()
	}
}

pub fn unique_index_violation(index: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_009".to_string(),
		message: format!("unique index '{}' already contains this value", index),
		label: Some("unique index violation".to_string()),
		..Default::default()
	}
}

pub fn row_already_exists(row: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_010".to_string(),
		message: format!("row {} already exists", row),
		label: Some("duplicate row identity".to_string()),
		help: Some("insert requires a fresh row identity, use update for existing rows".to_string()),
		..Default::default()
	}
}

pub fn no_split_samples() -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_011".to_string(),
		message: "cannot combine an empty set of split samples".to_string(),
		help: Some("fall back to a default split policy when no samples exist".to_string()),
		..Default::default()
	}
}

pub fn zero_split_weight() -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_012".to_string(),
		message: "split samples carry a total weight of zero".to_string(),
		..Default::default()
	}
}

pub fn empty_index(index: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_013".to_string(),
		message: format!("index '{}' declares no columns", index),
		label: Some("empty index".to_string()),
		..Default::default()
	}
}

pub fn invalid_split_weight(length: usize) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_014".to_string(),
		message: format!("split weight must be at most 8 bytes, got {}", length),
		..Default::default()
	}
}

pub fn row_id_changed(old: &str, new: &str) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_015".to_string(),
		message: format!("update cannot change row identity from {} to {}", old, new),
		label: Some("row identity changed".to_string()),
		..Default::default()
	}
}

pub fn non_nullable_column_added(column: &str, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "CONTRACT_016".to_string(),
		message: format!("column '{}' cannot be added as non-nullable to an existing table", column),
		label: Some("non-nullable column added".to_string()),
		help: Some("existing rows have no value for the new column, declare it nullable".to_string()),
		..Default::default()
	}
	.with_column(column, ty)
}
