//! Capability registration performed once before the root is created.
//!
//! DESIGN
//! ======
//! Registration is an explicit ordered sequence producing a [`Capabilities`]
//! bundle that is passed into `ApplicationRoot::create`. Nothing here touches
//! ambient global state; components check the bundle they were handed.

#[cfg(test)]
#[path = "plugins_test.rs"]
mod plugins_test;

use std::fmt;

use crate::error::ConfigError;

/// Optional capability a component may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// REST transport used by the views to authenticate.
    Http,
    /// Shared form widgets in `components`.
    Widgets,
    /// Browser location and history integration.
    Router,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Http => "http",
            Self::Widgets => "widgets",
            Self::Router => "router",
        };
        f.write_str(name)
    }
}

/// Builder that accepts each capability exactly once.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    registered: Vec<Capability>,
}

impl PluginRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `capability`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateCapability`] if it was already registered.
    pub fn register(mut self, capability: Capability) -> Result<Self, ConfigError> {
        if self.registered.contains(&capability) {
            return Err(ConfigError::DuplicateCapability(capability));
        }
        log::debug!("plugin registered: {capability}");
        self.registered.push(capability);
        Ok(self)
    }

    #[must_use]
    pub fn finish(self) -> Capabilities {
        Capabilities { registered: self.registered }
    }
}

/// Frozen set of registered capabilities, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    registered: Vec<Capability>,
}

impl Capabilities {
    pub fn contains(&self, capability: Capability) -> bool {
        self.registered.contains(&capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.registered.iter().copied()
    }

    /// Check that every capability `component` depends on is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCapability`] for the first one absent.
    pub fn require_all(&self, needed: &[Capability], component: &'static str) -> Result<(), ConfigError> {
        match needed.iter().find(|c| !self.contains(**c)) {
            Some(&capability) => Err(ConfigError::MissingCapability { capability, required_by: component }),
            None => Ok(()),
        }
    }
}

/// Register the transport, widget, and router capabilities in startup order.
///
/// # Errors
///
/// Propagates registration errors; none occur for this fixed sequence.
pub fn standard() -> Result<Capabilities, ConfigError> {
    Ok(PluginRegistry::new()
        .register(Capability::Http)?
        .register(Capability::Widgets)?
        .register(Capability::Router)?
        .finish())
}
