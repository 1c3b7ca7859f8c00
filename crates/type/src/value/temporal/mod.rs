// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod date;
mod datetime;
mod parse;
mod time;

pub use date::Date;
pub use datetime::DateTime;
pub use time::Time;
