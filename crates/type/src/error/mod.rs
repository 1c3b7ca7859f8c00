// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{de, ser};

pub mod diagnostic;
mod r#macro;

use diagnostic::Diagnostic;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

/// Coarse classification of an error, derived from its diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The caller passed arguments that violate an operation's contract.
	ContractViolation,
	/// A value is outside the legal range of its declared type.
	Domain,
	/// Text could not be parsed into the requested type.
	Parse,
	/// A stored key is unrecognised or malformed.
	CorruptKey,
	/// A non-nullable column is absent on write.
	MissingColumn,
	/// A table or index lookup failed.
	Catalog,
	/// Stored metadata or row bytes could not be (de)serialized.
	Store,
	/// Configuration could not be applied.
	Config,
	Internal,
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> ErrorKind {
		let prefix = self.0.code.split('_').next().unwrap_or_default();
		match prefix {
			"CONTRACT" => ErrorKind::ContractViolation,
			"DOMAIN" => ErrorKind::Domain,
			"PARSE" => ErrorKind::Parse,
			"KEY" => ErrorKind::CorruptKey,
			"COLUMN" => ErrorKind::MissingColumn,
			"CATALOG" => ErrorKind::Catalog,
			"STORE" => ErrorKind::Store,
			"CONFIG" => ErrorKind::Config,
			_ => ErrorKind::Internal,
		}
	}
}

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(diagnostic)
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let diagnostic = &self.0;
		write!(f, "[{}] {}", diagnostic.code, diagnostic.message)?;

		if let Some(column) = &diagnostic.column {
			write!(f, "\n  column: {} ({})", column.name, column.ty)?;
		}
		if let Some(label) = &diagnostic.label {
			write!(f, "\n  label: {}", label)?;
		}
		if let Some(help) = &diagnostic.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &diagnostic.notes {
			write!(f, "\n  note: {}", note)?;
		}

		let mut cause = diagnostic.cause.as_deref();
		while let Some(inner) = cause {
			write!(f, "\n  caused by: [{}] {}", inner.code, inner.message)?;
			cause = inner.cause.as_deref();
		}
		Ok(())
	}
}

impl std::error::Error for Error {}

impl de::Error for Error {
	fn custom<T: Display>(msg: T) -> Self {
		Self(diagnostic::store::deserialize("value", msg.to_string()))
	}
}

impl ser::Error for Error {
	fn custom<T: Display>(msg: T) -> Self {
		Self(diagnostic::store::serialize("value", msg.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Type,
		error::diagnostic::{catalog, column, config, contract, key, parse},
	};

	#[test]
	fn test_kind_from_code() {
		assert_eq!(Error(contract::null_argument("schema")).kind(), ErrorKind::ContractViolation);
		assert_eq!(Error(parse::invalid_date("2024-13-01")).kind(), ErrorKind::Parse);
		assert_eq!(Error(key::unknown_key_kind(0xEE)).kind(), ErrorKind::CorruptKey);
		assert_eq!(Error(column::missing_column("users", "name")).kind(), ErrorKind::MissingColumn);
		assert_eq!(Error(catalog::table_not_found("users")).kind(), ErrorKind::Catalog);
		assert_eq!(Error(config::invalid_tracing_filter("=", "bad")).kind(), ErrorKind::Config);
	}

	#[test]
	fn test_display_renders_help_and_notes() {
		let err = Error(contract::type_mismatch("age", Type::Int8, Type::Utf8));
		let rendered = err.to_string();
		assert!(rendered.starts_with("[CONTRACT_003]"));
		assert!(rendered.contains("column: age (LONG)"));
		assert!(rendered.contains("help:"));
	}

	#[test]
	fn test_display_renders_cause_chain() {
		let mut outer = contract::null_argument("row");
		outer.cause = Some(Box::new(parse::invalid_time("25:00:00")));
		let rendered = Error(outer).to_string();
		assert!(rendered.contains("caused by: [PARSE_002]"));
	}
}
