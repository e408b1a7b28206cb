// linesieve - lib.rs
//
// Library entry point, exposing every module for integration testing.
// The binary in `main.rs` is a thin CLI wrapper over `app::pipeline::run`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
