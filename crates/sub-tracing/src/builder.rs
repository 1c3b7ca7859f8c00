// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::{Result, error::diagnostic::config::invalid_tracing_filter, return_error};
use tracing_subscriber::{
	EnvFilter, Layer, Registry,
	fmt::{self, TestWriter, format::FmtSpan, writer::BoxMakeWriter},
	layer::SubscriberExt,
	util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info";

/// Builder for the process wide tracing subscriber
pub struct TracingBuilder {
	filter: Option<String>,
	json: bool,
	ansi: bool,
	target: bool,
	test_writer: bool,
	span_events: FmtSpan,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: None,
			json: false,
			ansi: true,
			target: true,
			test_writer: false,
			span_events: FmtSpan::NONE,
		}
	}

	/// Filter directives, e.g. `keystone_engine=debug,warn`. Without
	/// directives `RUST_LOG` is used, falling back to `info`.
	pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
		self.filter = Some(directives.into());
		self
	}

	/// Emit JSON lines instead of text.
	pub fn with_json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.target = target;
		self
	}

	/// Write through the libtest capture instead of stdout.
	pub fn with_test_writer(mut self, test_writer: bool) -> Self {
		self.test_writer = test_writer;
		self
	}

	/// Span lifecycle events to log, e.g. [`FmtSpan::CLOSE`] for span
	/// durations.
	pub fn with_span_events(mut self, events: FmtSpan) -> Self {
		self.span_events = events;
		self
	}

	pub(crate) fn env_filter(&self) -> Result<EnvFilter> {
		match &self.filter {
			Some(directives) => match EnvFilter::try_new(directives) {
				Ok(filter) => Ok(filter),
				Err(err) => return_error!(invalid_tracing_filter(directives, err.to_string())),
			},
			None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
		}
	}

	/// Installs the subscriber. Returns `false` when a global subscriber
	/// was already set, which leaves that subscriber in place.
	pub fn try_init(self) -> Result<bool> {
		let filter = self.env_filter()?;

		let writer = if self.test_writer {
			BoxMakeWriter::new(TestWriter::default())
		} else {
			BoxMakeWriter::new(std::io::stdout)
		};

		let layer = fmt::layer()
			.with_writer(writer)
			.with_ansi(self.ansi)
			.with_target(self.target)
			.with_span_events(self.span_events);
		let layer: Box<dyn Layer<Registry> + Send + Sync> = if self.json {
			layer.json().with_span_list(true).boxed()
		} else {
			layer.boxed()
		};

		Ok(tracing_subscriber::registry().with(layer).with(filter).try_init().is_ok())
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use keystone_type::ErrorKind;

	use super::*;

	#[test]
	fn test_explicit_filter_is_parsed() {
		let builder = TracingBuilder::new().with_filter("keystone_engine=debug,warn");
		assert!(builder.env_filter().is_ok());
	}

	#[test]
	fn test_invalid_filter() {
		let err = TracingBuilder::new().with_filter("keystone=notalevel").env_filter().unwrap_err();
		assert_eq!(err.code, "CONFIG_001");
		assert_eq!(err.kind(), ErrorKind::Config);
	}

	#[test]
	fn test_second_init_keeps_first_subscriber() {
		let first = TracingBuilder::new().with_ansi(false).with_test_writer(true).with_filter("warn").try_init().unwrap();
		let second = TracingBuilder::new().with_json(true).with_filter("warn").try_init().unwrap();
		assert!(first);
		assert!(!second);
	}
}
