//! Backends module - file operations
//!
//! Provides:
//! - scan: candidate listing with walkdir
//! - truncate: cutting candidates at the marker

pub mod scan;
pub mod truncate;
