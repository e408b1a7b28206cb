// linesieve - platform/mod.rs
//
// Filesystem access layer.
// Dependencies: standard library, core (line splitting), util.
// Must NOT depend on: app.

pub mod fs;
