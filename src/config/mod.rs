//! Configuration management for the tenant-manifest tool

pub mod config;
pub mod output;
pub mod render;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use config::Config;
pub use output::{OutputConfig, OutputFormat};
pub use render::RenderConfig;
