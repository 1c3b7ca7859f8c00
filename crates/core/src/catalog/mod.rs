// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod column;
mod id;
mod index;
mod table;

pub use column::{ColumnSchema, MAX_DECIMAL_PRECISION, MAX_DECIMAL_SCALE};
pub use id::{IndexId, TableId};
pub use index::{IndexSchema, SortDirection};
pub use table::{IndexDef, TableDef, TableSchema};
