//! # civic-core
//!
//! Core types, ID generation, and formatting helpers for civic issue reports.
//!
//! This crate provides the foundational types shared across all civic crates:
//! - The `Issue` entity and the `IssueDraft` submitted by the form input source
//! - Priority, status and status-filter enums
//! - Time-derived issue ID generation
//! - Display helpers (`format_status`)
//! - The fixed sample issues used to seed an empty collection
//! - Render-sink view types returned as JSON by the `civic` binary
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod ids;
pub mod responses;
pub mod seed;

/// Key the issue collection is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "civicIssues";
