// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_core::interface::{Delta, OrderedCommit, OrderedRemove, OrderedSet};
use keystone_type::Result;
use tracing::trace;

use crate::memory::Memory;

impl OrderedCommit for Memory {
	fn commit(&self, deltas: Vec<Delta>) -> Result<()> {
		let _guard = self.writer.lock();
		trace!(deltas = deltas.len(), "memory::commit");
		for delta in deltas {
			match delta {
				Delta::Set {
					key,
					values,
				} => {
					self.memory.insert(key, values);
				}
				Delta::Remove {
					key,
				} => {
					self.memory.remove(&key);
				}
			}
		}
		Ok(())
	}
}

impl OrderedSet for Memory {}

impl OrderedRemove for Memory {}
