use anyhow::{Context, Result};

use radius_ratio::io::write_thresholds;

use crate::cli::TableArgs;
use crate::display::{Context as DisplayContext, print_threshold_table};
use crate::io::{create_output, resolve_output};

pub fn run_table(args: TableArgs, ctx: DisplayContext) -> Result<()> {
    let output = resolve_output(&args.output, ctx)?;

    if ctx.interactive {
        print_threshold_table(None);
    }

    if let Some(spec) = output {
        let mut writer = create_output(spec.path.as_deref())?;
        write_thresholds(&mut writer, spec.format).context("Failed to write threshold table")?;
    }

    Ok(())
}
