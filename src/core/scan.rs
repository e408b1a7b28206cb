// linesieve - core/scan.rs
//
// Run detection over a filtered sequence.
// Core layer: pure logic, no I/O.
//
// The scanner is a single-state machine, `Accumulating(count)`, folded over
// the lines. A run is only emitted on the transition out of it (a
// non-marker line), so a run still open at end-of-sequence is discarded.

use crate::core::model::{FilteredSequence, Run, RunSpan};

/// Scanner state: number of consecutive marker lines immediately preceding
/// the line about to be processed. Starts at zero via `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulating(usize);

impl Accumulating {
    pub fn count(self) -> usize {
        self.0
    }

    /// Process the line at `index`.
    ///
    /// A marker line increments the count. A non-marker line resets it to
    /// zero and, if the count reached `min_len`, yields the run that just
    /// ended.
    pub fn step(self, index: usize, is_marker: bool, min_len: usize) -> (Self, Option<RunSpan>) {
        if is_marker {
            return (Self(self.0 + 1), None);
        }
        // The `self.0` lines before `index` are all marker lines. A count
        // larger than `index` cannot come from a real sequence; drop it.
        let closed = if self.0 >= min_len {
            index
                .checked_sub(self.0)
                .map(|start| RunSpan { start, len: self.0 })
        } else {
            None
        };
        (Self(0), closed)
    }
}

/// Result of scanning one sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Reportable runs, in order of appearance.
    pub spans: Vec<RunSpan>,

    /// Length of the run still open at end-of-sequence. Never reported.
    pub discarded_trailing: usize,
}

impl ScanOutcome {
    /// Resolve the spans against the sequence they were scanned from.
    pub fn runs<'a>(&'a self, sequence: &'a FilteredSequence) -> impl Iterator<Item = Run<'a>> + 'a {
        self.spans.iter().filter_map(move |span| sequence.run(*span))
    }
}

/// Scan `lines` for runs of at least `min_len` consecutive lines containing
/// `marker`.
pub fn scan_runs<S: AsRef<str>>(lines: &[S], marker: &str, min_len: usize) -> ScanOutcome {
    let (state, spans) = lines.iter().enumerate().fold(
        (Accumulating::default(), Vec::new()),
        |(state, mut spans), (index, line)| {
            let (next, closed) = state.step(index, line.as_ref().contains(marker), min_len);
            spans.extend(closed);
            (next, spans)
        },
    );

    if state.count() > 0 {
        tracing::debug!(
            trailing = state.count(),
            "Run still open at end of sequence; not reported"
        );
    }

    ScanOutcome {
        spans,
        discarded_trailing: state.count(),
    }
}
