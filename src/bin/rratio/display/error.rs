use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<radius_ratio::ClassifyError>() {
            classify_hints(e, &mut hints);
            return hints;
        }
        if let Some(e) = cause.downcast_ref::<radius_ratio::io::Error>() {
            io_hints(e, &mut hints);
            return hints;
        }
    }

    fallback_hints(err, &mut hints);
    hints
}

fn classify_hints(err: &radius_ratio::ClassifyError, hints: &mut Vec<String>) {
    use radius_ratio::ClassifyError;

    match err {
        ClassifyError::InvalidRadius { ion, .. } => {
            hints.push(format!("The {ion} radius must be a finite, positive length"));
            hints.push("Drop --strict to map a non-positive anion radius to r/R = 0".into());
        }
        ClassifyError::InvalidSweep(_) => {
            hints.push("Check --anion-min, --anion-max and --step".into());
            hints.push(format!(
                "A sweep is limited to {} points; increase --step for wide ranges",
                radius_ratio::MAX_SWEEP_POINTS
            ));
        }
        ClassifyError::InvalidConfig(_) => {
            hints.push("validity_limit and scale_ceiling must be positive numbers".into());
        }
        ClassifyError::ConfigParse(_) => {
            hints.push(
                "Config keys: degenerate (\"sentinel\" | \"reject\"), validity_limit, scale_ceiling"
                    .into(),
            );
            hints.push("Check for missing quotes or misspelled keys".into());
        }
    }
}

fn io_hints(err: &radius_ratio::io::Error, hints: &mut Vec<String>) {
    use radius_ratio::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Parse { line, .. } => {
            hints.push(format!("Inspect the batch file around line {line}"));
            hints.push("Each entry is a [[pair]] table with numeric cation and anion keys".into());
        }
        IoError::EmptyBatch => {
            hints.push("Add at least one [[pair]] table with cation and anion radii".into());
        }
        IoError::Classify { index, .. } => {
            hints.push(format!("Pair #{index} was rejected by the classifier"));
            hints.push("Drop --strict to classify non-positive anion radii as r/R = 0".into());
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => hints.push("Check that the file path is correct".into()),
        ErrorKind::PermissionDenied => {
            hints.push("Ensure you have read/write access to the file".into())
        }
        ErrorKind::InvalidData => hints.push("The input is not valid UTF-8 text".into()),
        _ => {}
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let text = err
        .chain()
        .map(|c| c.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("terminal") || text.contains("stdin") {
        hints.push("Provide input via -i/--input or pipe a batch file to stdin".into());
    } else if text.contains("no such file") || text.contains("not found") {
        hints.push("Check that the file path is correct".into());
    } else if text.contains("infer format") {
        hints.push("Use a .csv or .tsv extension, or pass --outfmt".into());
    }
}
