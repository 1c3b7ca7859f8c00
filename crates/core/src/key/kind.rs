// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{Error, error::diagnostic::key::unknown_key_kind};

use crate::catalog::SortDirection;

/// First byte of every stored key. The numeric order of the variants is
/// the order in which the key families sort in the store.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
	Tables = 0x00,
	Columns = 0x01,
	Indices = 0x02,
	Schema = 0x03,
	AutoInc = 0x04,
	RowCount = 0x05,
	Data = 0x06,
	IndexAsc = 0x07,
	IndexDesc = 0x08,
	NullIndex = 0x09,
}

impl KeyKind {
	pub fn index(direction: SortDirection) -> Self {
		match direction {
			SortDirection::Asc => KeyKind::IndexAsc,
			SortDirection::Desc => KeyKind::IndexDesc,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			KeyKind::Tables => "tables",
			KeyKind::Columns => "columns",
			KeyKind::Indices => "indices",
			KeyKind::Schema => "schema",
			KeyKind::AutoInc => "auto increment",
			KeyKind::RowCount => "row count",
			KeyKind::Data => "data",
			KeyKind::IndexAsc => "ascending index",
			KeyKind::IndexDesc => "descending index",
			KeyKind::NullIndex => "null index",
		}
	}
}

impl From<KeyKind> for u8 {
	fn from(kind: KeyKind) -> Self {
		kind as u8
	}
}

impl TryFrom<u8> for KeyKind {
	type Error = Error;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0x00 => Ok(KeyKind::Tables),
			0x01 => Ok(KeyKind::Columns),
			0x02 => Ok(KeyKind::Indices),
			0x03 => Ok(KeyKind::Schema),
			0x04 => Ok(KeyKind::AutoInc),
			0x05 => Ok(KeyKind::RowCount),
			0x06 => Ok(KeyKind::Data),
			0x07 => Ok(KeyKind::IndexAsc),
			0x08 => Ok(KeyKind::IndexDesc),
			0x09 => Ok(KeyKind::NullIndex),
			_ => Err(keystone_type::error!(unknown_key_kind(value))),
		}
	}
}
