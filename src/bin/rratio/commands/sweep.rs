use anyhow::{Context, Result};

use radius_ratio::io::write_sweep;
use radius_ratio::{sweep, transition_anion_radius};

use crate::cli::SweepArgs;
use crate::config::{build_classify_config, build_sweep_config};
use crate::display::{Context as DisplayContext, Progress, print_sweep_summary};
use crate::io::{create_output, resolve_output};

const TOTAL_STEPS: u8 = 2;

pub fn run_sweep(args: SweepArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_classify_config(&args.classifier)?;
    let sweep_config = build_sweep_config(args.cation, &args.range);
    let output = resolve_output(&args.output, ctx)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Sweeping anion radius");
    let points = sweep(&sweep_config, &config).context("Sweep failed")?;
    progress.complete_step(
        "Sweeping anion radius",
        &[
            format!(
                "R = {:.3} → {:.3} Å, step {} Å",
                sweep_config.anion_min, sweep_config.anion_max, sweep_config.step
            ),
            format!("{} points classified", points.len()),
            format!(
                "NC 3/4 transition at R = {:.3} Å",
                transition_anion_radius(sweep_config.cation_radius)
            ),
        ],
    );

    if ctx.interactive {
        print_sweep_summary(&sweep_config, &points);
    }

    if let Some(spec) = output {
        progress.step("Writing output");
        let mut writer = create_output(spec.path.as_deref())?;
        write_sweep(&mut writer, spec.format, &points).context("Failed to write sweep")?;
        progress.complete_step(
            "Writing output",
            &[format!("Write {} → {}", spec.format, spec.target_name())],
        );
    }

    progress.finish("Sweep complete");
    Ok(())
}
