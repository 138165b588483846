mod batch;
mod classify;
mod sweep;
mod table;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Classify(args) => classify::run_classify(args, ctx),
        Command::Sweep(args) => sweep::run_sweep(args, ctx),
        Command::Table(args) => table::run_table(args, ctx),
        Command::Batch(args) => batch::run_batch(args, ctx),
    }
}
