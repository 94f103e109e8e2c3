//! acadia-web — Landing dashboard for the Academic Research Platform.
//! Provides:
//!   - Navigation hints and module buttons
//!   - Quick data upload with CSV / Excel / PDF previews
//!   - Recent analysis results of the session
//!   - JSON session and health endpoints

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod session;
pub mod state;
