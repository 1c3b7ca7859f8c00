// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::env;

use keystone_sub_tracing::TracingFactory;

/// Tracing setup for test binaries: plain text routed through the libtest
/// capture, filtered by `directives`.
pub fn test_tracing(directives: impl Into<String>) -> TracingFactory {
	let directives = directives.into();
	TracingFactory::with_configurator(move |builder| {
		builder.with_ansi(false).with_test_writer(true).with_filter(directives)
	})
}

/// Routes `tracing` output of a test binary through the libtest capture.
/// `RUST_LOG` overrides the default `warn` level. Safe to call from every
/// test; only the first call installs a subscriber.
pub fn init_tracing() {
	let directives = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
	if test_tracing(directives).init().is_err() {
		// an unparsable RUST_LOG should not fail the test run
		let _ = test_tracing("warn").init();
	}
}
