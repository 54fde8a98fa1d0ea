//! Core module - configuration, errors, the report model and rendering

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
