//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod modules;
pub mod upload;
pub mod api;
