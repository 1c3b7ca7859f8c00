// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::{EncodedKey, interface::OrderedContains};
use keystone_type::Result;

use crate::memory::Memory;

impl OrderedContains for Memory {
	fn contains(&self, key: &EncodedKey) -> Result<bool> {
		Ok(self.memory.contains_key(key))
	}
}
