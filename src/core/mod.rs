// linesieve - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and tracing only.
// Must NOT depend on: platform, app, or touch the filesystem.

pub mod filter;
pub mod model;
pub mod report;
pub mod scan;
