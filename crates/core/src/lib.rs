// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod catalog;
pub mod interface;
pub mod key;
pub mod row;
pub mod util;

pub use key::{EncodedKey, EncodedKeyRange};
pub use keystone_type::{Error, Result};
pub use row::Row;
