// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Physical order of an index copy. Every index row is stored once per
/// direction so that both orders can be read with forward scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	pub const ALL: [SortDirection; 2] = [SortDirection::Asc, SortDirection::Desc];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSchema {
	pub name: String,
	/// Column names in key composition order.
	pub columns: Vec<String>,
	pub unique: bool,
}

impl IndexSchema {
	pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			name: name.into(),
			columns: columns.into_iter().map(Into::into).collect(),
			unique: false,
		}
	}

	pub fn with_unique(mut self, unique: bool) -> Self {
		self.unique = unique;
		self
	}

	pub fn contains(&self, column: &str) -> bool {
		self.columns.iter().any(|c| c == column)
	}
}
