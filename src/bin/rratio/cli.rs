use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "rratio",
    about = "Pauling radius-ratio coordination predictor",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single cation/anion radius pair
    #[command(visible_alias = "c")]
    Classify(ClassifyArgs),

    /// Sweep the anion radius at a fixed cation radius
    #[command(visible_alias = "s")]
    Sweep(SweepArgs),

    /// Show the Pauling threshold table
    #[command(visible_alias = "t")]
    Table(TableArgs),

    /// Classify radius pairs from a TOML batch file
    #[command(visible_alias = "b")]
    Batch(BatchArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Classify(args) => args.output.quiet,
            Command::Sweep(args) => args.output.quiet,
            Command::Table(args) => args.output.quiet,
            Command::Batch(args) => args.output.quiet,
        }
    }
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (inferred from extension if not specified)
    #[arg(long = "outfmt", value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Suppress banner and tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Classifier options shared by classify, sweep and batch.
#[derive(Args)]
#[command(next_help_heading = "Classifier Options")]
pub struct ClassifierOptions {
    /// Reject non-positive radii instead of using the zero-ratio sentinel
    #[arg(long)]
    pub strict: bool,

    /// Ratio above which the rigid-sphere model is flagged as unphysical
    #[arg(long = "validity-limit", value_name = "RATIO")]
    pub validity_limit: Option<f64>,

    /// Soft ceiling used to normalize the scale position
    #[arg(long = "scale-ceiling", value_name = "RATIO")]
    pub scale_ceiling: Option<f64>,

    /// Classifier configuration (TOML file); flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Cation radius r (Å)
    #[arg(short = 'r', long, value_name = "Å", allow_hyphen_values = true)]
    pub cation: f64,

    /// Anion radius R (Å)
    #[arg(short = 'R', long, value_name = "Å", allow_hyphen_values = true)]
    pub anion: f64,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub classifier: ClassifierOptions,
}

#[derive(Args)]
pub struct SweepArgs {
    /// Fixed cation radius r (Å)
    #[arg(short = 'r', long, value_name = "Å", allow_hyphen_values = true)]
    pub cation: f64,

    #[command(flatten)]
    pub range: SweepRangeOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub classifier: ClassifierOptions,
}

#[derive(Args)]
#[command(next_help_heading = "Sweep Range")]
pub struct SweepRangeOptions {
    /// Smallest anion radius (Å)
    #[arg(
        long = "anion-min",
        value_name = "Å",
        default_value_t = radius_ratio::DEFAULT_ANION_MIN,
        allow_hyphen_values = true
    )]
    pub anion_min: f64,

    /// Largest anion radius (Å)
    #[arg(
        long = "anion-max",
        value_name = "Å",
        default_value_t = radius_ratio::DEFAULT_ANION_MAX,
        allow_hyphen_values = true
    )]
    pub anion_max: f64,

    /// Anion radius increment (Å)
    #[arg(
        long,
        value_name = "Å",
        default_value_t = radius_ratio::DEFAULT_SWEEP_STEP,
        allow_hyphen_values = true
    )]
    pub step: f64,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Batch file with [[pair]] tables (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub classifier: ClassifierOptions,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    #[value(alias = "tab")]
    Tsv,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_range_defaults_match_library() {
        let cli = Cli::try_parse_from(["rratio", "sweep", "-r", "1.0"]).unwrap();
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep command");
        };
        assert_eq!(args.range.anion_min, radius_ratio::DEFAULT_ANION_MIN);
        assert_eq!(args.range.anion_max, radius_ratio::DEFAULT_ANION_MAX);
        assert_eq!(args.range.step, radius_ratio::DEFAULT_SWEEP_STEP);
    }

    #[test]
    fn negative_sweep_bounds_reach_validation() {
        let cli = Cli::try_parse_from([
            "rratio",
            "sweep",
            "-r",
            "1.0",
            "--anion-max",
            "-1",
            "--step",
            "-0.01",
        ])
        .unwrap();
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep command");
        };
        assert_eq!(args.range.anion_max, -1.0);
        assert_eq!(args.range.step, -0.01);

        let sweep = crate::config::build_sweep_config(args.cation, &args.range);
        assert!(matches!(
            sweep.point_count(),
            Err(radius_ratio::ClassifyError::InvalidSweep(_))
        ));
    }
}
