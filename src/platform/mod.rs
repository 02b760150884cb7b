// ghost-telemetry - platform/mod.rs
//
// Platform abstraction layer: external log command, report file output,
// config directory resolution.
// Dependencies: core (for rendering), standard library, directories crate.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
pub mod source;
