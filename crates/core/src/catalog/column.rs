// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{Result, Type, error::diagnostic::contract::invalid_column_schema, return_error};
use serde::{Deserialize, Serialize};

pub const MAX_DECIMAL_PRECISION: u8 = 65;
pub const MAX_DECIMAL_SCALE: u8 = 30;

/// Declared shape of a column. Immutable once attached to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
	pub name: String,
	pub ty: Type,
	pub nullable: bool,
	pub auto_increment: bool,
	/// Maximum byte length for STRING and BINARY columns.
	pub max_length: u32,
	/// Total digits for DECIMAL columns.
	pub precision: u8,
	/// Fractional digits for DECIMAL columns.
	pub scale: u8,
}

impl ColumnSchema {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
			nullable: false,
			auto_increment: false,
			max_length: 0,
			precision: 0,
			scale: 0,
		}
	}

	pub fn utf8(name: impl Into<String>, max_length: u32) -> Self {
		Self::new(name, Type::Utf8).with_max_length(max_length)
	}

	pub fn blob(name: impl Into<String>, max_length: u32) -> Self {
		Self::new(name, Type::Blob).with_max_length(max_length)
	}

	pub fn decimal(name: impl Into<String>, precision: u8, scale: u8) -> Self {
		let mut column = Self::new(name, Type::Decimal);
		column.precision = precision;
		column.scale = scale;
		column
	}

	pub fn with_nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}

	pub fn with_auto_increment(mut self, auto_increment: bool) -> Self {
		self.auto_increment = auto_increment;
		self
	}

	pub fn with_max_length(mut self, max_length: u32) -> Self {
		self.max_length = max_length;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.name.is_empty() {
			return_error!(invalid_column_schema(&self.name, "column name is empty"));
		}
		if self.ty.is_variable_length() && self.max_length == 0 {
			return_error!(invalid_column_schema(&self.name, format!("{} columns need a max length", self.ty)));
		}
		if self.ty == Type::Decimal {
			if self.precision == 0 || self.precision > MAX_DECIMAL_PRECISION {
				return_error!(invalid_column_schema(
					&self.name,
					format!("precision must be between 1 and {}", MAX_DECIMAL_PRECISION)
				));
			}
			if self.scale > MAX_DECIMAL_SCALE || self.scale > self.precision {
				return_error!(invalid_column_schema(
					&self.name,
					format!("scale must be at most {} and not exceed the precision", MAX_DECIMAL_SCALE)
				));
			}
		}
		if self.auto_increment && !self.ty.is_integer() {
			return_error!(invalid_column_schema(&self.name, "only LONG and ULONG columns can auto-increment"));
		}
		Ok(())
	}
}
