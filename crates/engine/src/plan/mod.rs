// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pure planners translating row mutations and index lookups into key
//! writes and key ranges. They never touch the store.

mod mutation;
mod scan;

pub use mutation::{index_keys, plan_delete, plan_index_delete, plan_index_insert, plan_insert, plan_update};
pub use scan::{IndexQuery, QueryType, ScanFilter, ScanPlan, plan_index_scan, plan_table_scan};
