// linesieve - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use crate::util::constants;
use std::path::PathBuf;

// =============================================================================
// Scan configuration
// =============================================================================

/// Fixed parameters of one invocation.
///
/// The CLI always uses [`ScanConfig::default`]; other values exist so tests
/// can redirect the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Literal substring a line must contain to be kept.
    pub filter_substring: String,

    /// Literal substring that marks a line as part of a run.
    pub marker_substring: String,

    /// Minimum run length that gets reported.
    pub min_run_length: usize,

    /// Where the filtered lines are written.
    pub output_path: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            filter_substring: constants::FILTER_SUBSTRING.to_string(),
            marker_substring: constants::MARKER_SUBSTRING.to_string(),
            min_run_length: constants::MIN_RUN_LENGTH,
            output_path: PathBuf::from(constants::OUTPUT_FILE_NAME),
        }
    }
}

// =============================================================================
// Filtered sequence
// =============================================================================

/// Lines of the input that contain the filter substring, in original order.
///
/// Each line keeps whatever terminator it was read with, so concatenating
/// the lines reproduces the selected input bytes exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredSequence {
    lines: Vec<String>,
}

impl FilteredSequence {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve an index span produced by the scanner into a borrowed run.
    ///
    /// Returns `None` if the span does not fit inside the sequence.
    pub fn run(&self, span: RunSpan) -> Option<Run<'_>> {
        let end = span.start.checked_add(span.len)?;
        self.lines.get(span.start..end).map(|lines| Run {
            start: span.start,
            lines,
        })
    }
}

// =============================================================================
// Runs
// =============================================================================

/// Index-only description of a run inside a [`FilteredSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// 0-based index of the first line of the run.
    pub start: usize,

    /// Number of consecutive marker lines.
    pub len: usize,
}

impl RunSpan {
    /// 1-based starting line within the filtered sequence.
    pub fn start_line(&self) -> usize {
        self.start + 1
    }
}

/// A reportable run, borrowing its lines from the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    start: usize,
    lines: &'a [String],
}

impl<'a> Run<'a> {
    /// 0-based index of the first line.
    pub fn start(&self) -> usize {
        self.start
    }

    /// 1-based starting line within the filtered sequence.
    pub fn start_line(&self) -> usize {
        self.start + 1
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &'a [String] {
        self.lines
    }
}
