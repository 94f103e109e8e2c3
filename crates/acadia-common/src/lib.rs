//! acadia-common — Shared types, errors, and session state used across all Acadia crates.

pub mod error;
pub mod config;
pub mod collaborator;
pub mod session;

// Re-export commonly used types
pub use collaborator::{AnalyticsEngine, AnalyticsFactory, AnalyticsHandle, Capability};
pub use config::Config;
pub use error::{AcadiaError, Result};
pub use session::{SessionState, SessionStore, UploadedFile};
