use anyhow::{Context, Result, bail};

use radius_ratio::io::{BatchReader, classify_batch, write_classifications};

use crate::cli::BatchArgs;
use crate::config::build_classify_config;
use crate::display::{Context as DisplayContext, Progress, print_batch_summary};
use crate::io::{create_output, open_input, resolve_output, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_batch(args: BatchArgs, ctx: DisplayContext) -> Result<()> {
    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\n\
             Usage: rratio batch -i <FILE> or pipe a batch file via stdin."
        );
    }

    let config = build_classify_config(&args.classifier)?;
    let output = resolve_output(&args.output, ctx)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading radius pairs");
    let input = open_input(args.input.as_deref())?;
    let entries = BatchReader::new(input)
        .read()
        .context("Failed to read batch file")?;
    progress.complete_step(
        "Reading radius pairs",
        &[format!("{} [[pair]] entries", entries.len())],
    );

    progress.step("Classifying");
    let rows = classify_batch(&entries, &config).context("Batch classification failed")?;
    let flagged = rows
        .iter()
        .filter(|r| !r.classification.within_validity)
        .count();
    progress.complete_step(
        "Classifying",
        &[format!(
            "{} pairs, {} beyond r/R = {:.2}",
            rows.len(),
            flagged,
            config.validity_limit
        )],
    );

    if ctx.interactive {
        print_batch_summary(&rows);
    }

    if let Some(spec) = output {
        progress.step("Writing output");
        let mut writer = create_output(spec.path.as_deref())?;
        write_classifications(&mut writer, spec.format, &rows)
            .context("Failed to write classifications")?;
        progress.complete_step(
            "Writing output",
            &[format!("Write {} → {}", spec.format, spec.target_name())],
        );
    }

    progress.finish("Batch complete");
    Ok(())
}
