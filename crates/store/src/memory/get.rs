// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{
	EncodedKey,
	interface::{OrderedGet, StoredValues},
};
use keystone_type::Result;

use crate::memory::Memory;

impl OrderedGet for Memory {
	fn get(&self, key: &EncodedKey) -> Result<Option<StoredValues>> {
		Ok(self.memory.get(key).map(|entry| StoredValues {
			key: entry.key().clone(),
			values: entry.value().clone(),
		}))
	}
}
