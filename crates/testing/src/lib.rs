// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod fixture;
pub mod trace;

pub use fixture::{memory_engine, people_schema, row_id};
pub use trace::{init_tracing, test_tracing};
