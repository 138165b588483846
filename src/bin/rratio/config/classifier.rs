use std::fs;

use anyhow::{Context, Result};

use radius_ratio::{ClassifyConfig, DegeneratePolicy, SweepConfig};

use crate::cli::{ClassifierOptions, SweepRangeOptions};

pub fn build_classify_config(opts: &ClassifierOptions) -> Result<ClassifyConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            ClassifyConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => ClassifyConfig::default(),
    };

    if opts.strict {
        config.degenerate = DegeneratePolicy::Reject;
    }
    if let Some(limit) = opts.validity_limit {
        config.validity_limit = limit;
    }
    if let Some(ceiling) = opts.scale_ceiling {
        config.scale_ceiling = ceiling;
    }

    config.validate().context("Invalid classifier options")?;
    log::debug!("classifier configuration: {config:?}");
    Ok(config)
}

pub fn build_sweep_config(cation: f64, range: &SweepRangeOptions) -> SweepConfig {
    SweepConfig {
        cation_radius: cation,
        anion_min: range.anion_min,
        anion_max: range.anion_max,
        step: range.step,
    }
}
