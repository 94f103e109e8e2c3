//! Optional external collaborators and their startup-resolved availability.
//!
//! Collaborators are consumed through narrow traits. Whether one is present is
//! decided once at startup and stored as a [`Capability`]; every use site
//! matches on it instead of assuming presence.

use std::fmt;
use std::sync::Arc;

/// Availability of an optional collaborator.
#[derive(Clone)]
pub enum Capability<T> {
    Available(T),
    Unavailable { reason: String },
}

impl<T> Capability<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Capability::Unavailable { reason: reason.into() }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Capability::Available(inner) => Some(inner),
            Capability::Unavailable { .. } => None,
        }
    }

    /// Why the collaborator is missing, if it is.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Capability::Available(_) => None,
            Capability::Unavailable { reason } => Some(reason),
        }
    }
}

impl<T> fmt::Debug for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available(_) => f.write_str("Available"),
            Capability::Unavailable { reason } => write!(f, "Unavailable({reason})"),
        }
    }
}

/// Statistical analytics back-end. The landing page only holds a handle per
/// session; the analysis pages drive it.
pub trait AnalyticsEngine: Send + Sync {
    /// Short engine name for display and logs.
    fn name(&self) -> &str;
}

pub type AnalyticsHandle = Arc<dyn AnalyticsEngine>;

/// Builds a fresh analytics handle with no arguments, once per session.
pub type AnalyticsFactory = Arc<dyn Fn() -> AnalyticsHandle + Send + Sync>;
