// ghost-telemetry - core/mod.rs
//
// Core business logic layer: report model, tag filter, text rendering.
// Must NOT depend on: platform, app, or process/filesystem access.

pub mod export;
pub mod filter;
pub mod model;
