// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a row. Assigned once at insert and never changed.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(pub Uuid);

impl RowId {
	pub const SIZE: usize = 16;

	pub fn generate() -> Self {
		Self(Uuid::new_v4())
	}

	/// The smallest identity, all zero bytes.
	pub const fn nil() -> Self {
		Self(Uuid::nil())
	}

	/// The largest identity, all 0xFF bytes.
	pub const fn max() -> Self {
		Self(Uuid::from_bytes([0xFF; 16]))
	}

	pub const fn from_bytes(bytes: [u8; 16]) -> Self {
		Self(Uuid::from_bytes(bytes))
	}

	pub fn as_bytes(&self) -> &[u8; 16] {
		self.0.as_bytes()
	}
}

impl Deref for RowId {
	type Target = Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Uuid> for RowId {
	fn from(value: Uuid) -> Self {
		Self(value)
	}
}

impl From<RowId> for Uuid {
	fn from(value: RowId) -> Self {
		value.0
	}
}

impl Display for RowId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
