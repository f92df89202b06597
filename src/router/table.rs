//! Static route table.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;

use super::guard::NavigationIntent;
use crate::error::ConfigError;
use crate::plugins::Capability;

pub const ENTRY_PATH: &str = "/";
pub const CHAT_PATH: &str = "/chat";

/// The views this application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    /// Unauthenticated sign-in view.
    Entry,
    /// Authenticated chat view.
    Interactive,
}

impl ViewId {
    /// Capabilities that must be registered before this view is constructed.
    pub fn required_capabilities(self) -> &'static [Capability] {
        match self {
            Self::Entry | Self::Interactive => &[Capability::Http, Capability::Widgets],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Entry => "entry view",
            Self::Interactive => "interactive view",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: ViewId,
}

impl Route {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self { path: path.into(), view }
    }
}

/// Ordered, immutable set of routes with unique paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate and freeze `entries`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPath`] if a path is not already in the
    ///   normalized form navigation intents take (leading `/`, no trailing
    ///   `/`, no query or fragment); such a route could never be matched.
    /// - [`ConfigError::DuplicatePath`] if two entries share a path.
    /// - [`ConfigError::MissingFallback`] if `/` is not bound to the entry view.
    pub fn build(entries: Vec<Route>) -> Result<Self, ConfigError> {
        for (i, route) in entries.iter().enumerate() {
            if NavigationIntent::new(&route.path).target_path != route.path {
                return Err(ConfigError::InvalidPath { path: route.path.clone() });
            }
            if entries[..i].iter().any(|r| r.path == route.path) {
                return Err(ConfigError::DuplicatePath { path: route.path.clone() });
            }
        }
        if !entries.iter().any(|r| r.path == ENTRY_PATH && r.view == ViewId::Entry) {
            return Err(ConfigError::MissingFallback);
        }
        Ok(Self { routes: entries })
    }

    /// Skip validation so tests can reach guard behavior on broken tables.
    #[cfg(test)]
    pub(crate) fn unchecked(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// `/` to the entry view, `/chat` to the interactive view.
    ///
    /// # Errors
    ///
    /// Never fails for the fixed entries; the `Result` keeps one build path.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::build(vec![Route::new(ENTRY_PATH, ViewId::Entry), Route::new(CHAT_PATH, ViewId::Interactive)])
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// First path bound to `view`.
    pub fn path_of(&self, view: ViewId) -> Option<&str> {
        self.routes.iter().find(|r| r.view == view).map(|r| r.path.as_str())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
