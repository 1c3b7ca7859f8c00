// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;

pub fn invalid_tracing_filter(directives: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("invalid tracing filter '{}': {}", directives, reason.into()),
		help: Some("use env-filter directives such as 'info' or 'keystone_engine=debug,warn'".to_string()),
		..Default::default()
	}
}
