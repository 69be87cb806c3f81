//! Line parser — ordered extractors applied until the line stops changing.

pub mod extractors;

use crate::model::GenerationOptions;
use tracing::trace;

/// Tries to consume one token from the line; `Some` carries the shortened line.
pub type Extractor = fn(&str, &mut GenerationOptions) -> Option<String>;

/// Extractors in the order they run within one pass.
///
/// Package must precede class name: it plants the marker the class-name
/// extractor looks for.
pub const EXTRACTORS: &[(&str, Extractor)] = &[
    ("package", extractors::package),
    ("class_name", extractors::class_name),
    ("method", extractors::method),
    ("field", extractors::field),
    ("doc_flag", extractors::doc_flag),
    ("entry_point_flag", extractors::entry_point_flag),
];

/// Parse one class description line.
///
/// Every extractor takes at most one token per pass, so a line with several
/// methods or fields needs several passes. Parsing stops at the first pass
/// that leaves the line unchanged and whatever is left becomes the residue.
pub fn parse_line(line: &str) -> GenerationOptions {
    let mut options = GenerationOptions::default();
    let mut current = line.to_string();
    let mut passes = 0usize;

    loop {
        let next = run_pass(&current, &mut options);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }

    trace!(passes, residue = %current, "line reached fixpoint");
    options.residue = current;
    options
}

/// One pass: every extractor once, in order.
fn run_pass(line: &str, options: &mut GenerationOptions) -> String {
    let mut line = line.to_string();
    for (name, extract) in EXTRACTORS {
        if let Some(rest) = extract(&line, options) {
            trace!(extractor = *name, rest = %rest, "token consumed");
            line = rest;
        }
    }
    line
}
