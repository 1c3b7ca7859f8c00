// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::RowId;

/// Reads fixed-width, big-endian fields from the front of a key.
#[derive(Debug, Clone)]
pub struct KeyDeserializer<'a> {
	input: &'a [u8],
}

impl<'a> KeyDeserializer<'a> {
	pub fn from_bytes(input: &'a [u8]) -> Self {
		Self {
			input,
		}
	}

	pub fn read_u8(&mut self) -> Option<u8> {
		let (first, rest) = self.input.split_first()?;
		self.input = rest;
		Some(*first)
	}

	pub fn read_u64(&mut self) -> Option<u64> {
		let bytes = self.read_bytes(8)?;
		Some(u64::from_be_bytes(bytes.try_into().ok()?))
	}

	pub fn read_bytes(&mut self, count: usize) -> Option<&'a [u8]> {
		if self.input.len() < count {
			return None;
		}
		let (head, rest) = self.input.split_at(count);
		self.input = rest;
		Some(head)
	}

	pub fn read_row_id(&mut self) -> Option<RowId> {
		let bytes = self.read_bytes(RowId::SIZE)?;
		Some(RowId::from_bytes(bytes.try_into().ok()?))
	}

	pub fn remaining(&self) -> usize {
		self.input.len()
	}

	pub fn is_empty(&self) -> bool {
		self.input.is_empty()
	}
}
