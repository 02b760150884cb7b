// ghost-telemetry - app/mod.rs
//
// Application layer: orchestration of the export pipeline.
// Dependencies: core and platform layers.

pub mod exporter;
