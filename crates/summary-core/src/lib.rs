//! Shared types for the chapter splitting and summarizing pipelines.

pub mod error;
pub mod manifest;
pub mod options;
