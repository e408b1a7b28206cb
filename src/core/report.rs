// linesieve - core/report.rs
//
// Console rendering of reportable runs.
// Core layer: writes to any Write trait object.

use crate::core::model::Run;
use crate::util::constants;
use std::io::{self, Write};

/// Write one run report.
///
/// Format: `"<len> <label> <start line>"`, then each line of the run exactly
/// as stored (no terminator added), then one blank line.
pub fn write_run<W: Write>(out: &mut W, run: &Run<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        run.len(),
        constants::RUN_REPORT_LABEL,
        run.start_line()
    )?;
    for line in run.lines() {
        out.write_all(line.as_bytes())?;
    }
    writeln!(out)
}

/// Write every run in order. Returns the number of runs written.
pub fn write_runs<'a, W, I>(out: &mut W, runs: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Run<'a>>,
{
    let mut count = 0;
    for run in runs {
        write_run(out, &run)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}
