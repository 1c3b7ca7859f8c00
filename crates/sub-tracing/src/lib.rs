// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Installs a global `tracing` subscriber: an env-filter plus one fmt
//! layer, rendered as text or as JSON lines.

pub use builder::TracingBuilder;
pub use factory::{TracingConfigurator, TracingFactory};
pub use tracing_subscriber::fmt::format::FmtSpan;

mod builder;
mod factory;
