// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

macro_rules! catalog_id {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub u64);

		impl Deref for $name {
			type Target = u64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<u64> for $name {
			fn eq(&self, other: &u64) -> bool {
				self.0 == *other
			}
		}

		impl From<$name> for u64 {
			fn from(id: $name) -> Self {
				id.0
			}
		}

		impl From<u64> for $name {
			fn from(id: u64) -> Self {
				Self(id)
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				Display::fmt(&self.0, f)
			}
		}
	};
}

catalog_id!(
	/// Id of a table, assigned from 1 upwards and never reused.
	TableId
);

catalog_id!(
	/// Id of an index, unique within its table.
	IndexId
);
