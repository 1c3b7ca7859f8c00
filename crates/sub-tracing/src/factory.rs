// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use keystone_type::Result;

use crate::builder::TracingBuilder;

/// Configuration function applied to a fresh [`TracingBuilder`]
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Deferred tracing setup. Embedders hand one of these around and install it
/// once the process knows its log settings.
pub struct TracingFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingFactory {
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn builder(self) -> TracingBuilder {
		match self.configurator {
			Some(configurator) => configurator(TracingBuilder::new()),
			None => TracingBuilder::default(),
		}
	}

	/// See [`TracingBuilder::try_init`].
	pub fn init(self) -> Result<bool> {
		self.builder().try_init()
	}
}

impl Default for TracingFactory {
	fn default() -> Self {
		Self::new()
	}
}
