// linesieve - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "linesieve";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line usage message printed when the argument count is wrong.
pub const USAGE: &str = "Usage: linesieve input_filename.txt";

// =============================================================================
// Filtering and scanning
// =============================================================================

/// Literal, case-sensitive substring a line must contain to be kept.
pub const FILTER_SUBSTRING: &str = "TILE0 L1.5 th";

/// Literal substring that marks a line as part of a run.
pub const MARKER_SUBSTRING: &str = "Received";

/// Minimum number of consecutive marker lines for a run to be reported.
pub const MIN_RUN_LENGTH: usize = 3;

/// Label printed between the run length and its starting line.
///
/// The trailing space plus the separator space in the report header yields
/// two spaces before the line number.
pub const RUN_REPORT_LABEL: &str = "Consecutive 'Received' lines starting from line ";

// =============================================================================
// Output
// =============================================================================

/// Fixed relative path the filtered lines are written to.
pub const OUTPUT_FILE_NAME: &str = "filtered_output.txt";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is given.
///
/// Kept at "warn" so stderr stays quiet during normal runs.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Exit codes
// =============================================================================

/// Input file missing or any other I/O failure.
pub const EXIT_FAILURE: i32 = 1;

/// Wrong number of command-line arguments.
pub const EXIT_USAGE: i32 = 2;
