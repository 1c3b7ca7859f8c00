// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{Display, Formatter},
	ops::Deref,
	str::FromStr,
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{Error, Type, error::diagnostic::parse::invalid_number, return_error};

/// Arbitrary precision decimal. Precision and scale are properties of the
/// column it is stored in, not of the value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(value: BigDecimal) -> Self {
		Self(value)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}

	/// Parses decimal text, ignoring surrounding whitespace and `_` digit
	/// separators.
	pub fn parse(text: &str) -> Result<Self, Error> {
		let needs_trimming = text.as_bytes().first().map_or(false, |b| b.is_ascii_whitespace())
			|| text.as_bytes().last().map_or(false, |b| b.is_ascii_whitespace());
		let has_underscores = text.as_bytes().contains(&b'_');

		let value = match (needs_trimming, has_underscores) {
			(false, false) => Cow::Borrowed(text),
			(true, false) => Cow::Borrowed(text.trim()),
			(false, true) => Cow::Owned(text.replace('_', "")),
			(true, true) => Cow::Owned(text.trim().replace('_', "")),
		};

		if value.is_empty() {
			return_error!(invalid_number(text, Type::Decimal));
		}

		let inner = BigDecimal::from_str(&value).map_err(|_| crate::error!(invalid_number(text, Type::Decimal)))?;
		Ok(Self(inner))
	}
}

impl Deref for Decimal {
	type Target = BigDecimal;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<BigDecimal> for Decimal {
	fn from(value: BigDecimal) -> Self {
		Self(value)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimal::from(value))
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
