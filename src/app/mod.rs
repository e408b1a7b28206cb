// linesieve - app/mod.rs
//
// Application layer: orchestration of a single invocation.
// Dependencies: core, platform, util.

pub mod pipeline;
