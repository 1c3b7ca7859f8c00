// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Type;

pub mod catalog;
pub mod column;
pub mod config;
pub mod contract;
pub mod domain;
pub mod key;
pub mod parse;
pub mod store;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<DiagnosticColumn>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub ty: Type,
}

impl Default for Diagnostic {
	fn default() -> Self {
		Self {
			code: String::new(),
			message: String::new(),
			column: None,
			label: None,
			help: None,
			notes: Vec::new(),
			cause: None,
		}
	}
}

impl Diagnostic {
	/// Attaches the column the diagnostic refers to.
	pub fn with_column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.column = Some(DiagnosticColumn {
			name: name.into(),
			ty,
		});
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}
