// linesieve - app/pipeline.rs
//
// One invocation end to end: read -> filter -> persist -> scan -> report.
//
// Fully sequential. The output file is written and closed before the scan
// starts. When the input is missing the output file is never opened, so
// any file left by an earlier run stays as it was.

use crate::core::filter::filter_lines;
use crate::core::model::ScanConfig;
use crate::core::report::write_runs;
use crate::core::scan::scan_runs;
use crate::platform::fs;
use crate::util::error::{LineSieveError, Result};
use std::io::Write;
use std::path::Path;

/// Counts from one completed invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Lines read from the input file.
    pub input_lines: usize,

    /// Lines kept by the filter (and written to the output file).
    pub filtered_lines: usize,

    /// Runs written to the report writer.
    pub runs_reported: usize,

    /// Length of the marker run still open at end-of-sequence (not reported).
    pub discarded_trailing: usize,
}

/// Run the filter and run scan on `input`, writing reports to `out`.
pub fn run<W: Write>(input: &Path, config: &ScanConfig, out: &mut W) -> Result<PipelineSummary> {
    tracing::info!(input = %input.display(), "Processing input");

    let lines = fs::read_lines(input)?;
    let input_lines = lines.len();

    let filtered = filter_lines(lines, &config.filter_substring);
    tracing::info!(
        input_lines,
        filtered_lines = filtered.len(),
        filter = %config.filter_substring,
        "Lines filtered"
    );

    fs::write_lines(&config.output_path, filtered.lines())?;

    let outcome = scan_runs(
        filtered.lines(),
        &config.marker_substring,
        config.min_run_length,
    );
    let runs_reported = write_runs(out, outcome.runs(&filtered))
        .map_err(|source| LineSieveError::Report { source })?;

    let summary = PipelineSummary {
        input_lines,
        filtered_lines: filtered.len(),
        runs_reported,
        discarded_trailing: outcome.discarded_trailing,
    };
    tracing::info!(
        runs = summary.runs_reported,
        trailing = summary.discarded_trailing,
        output = %config.output_path.display(),
        "Scan complete"
    );
    Ok(summary)
}
