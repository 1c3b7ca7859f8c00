// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::EngineBuilder;
pub use config::EngineConfig;
pub use engine::Engine;
pub use keystone_split::SplitConfig;
pub use keystone_type::Result;
pub use plan::{IndexQuery, QueryType, ScanFilter, ScanPlan};

mod builder;
mod catalog;
mod config;
mod engine;
pub mod plan;
