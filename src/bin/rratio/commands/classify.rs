use anyhow::{Context, Result};

use radius_ratio::io::{ClassifiedPair, write_classifications};
use radius_ratio::{IonicRadii, classify_with, scale_position_with, transition_anion_radius};

use crate::cli::ClassifyArgs;
use crate::config::build_classify_config;
use crate::display::{
    ClassificationView, Context as DisplayContext, print_classification, print_threshold_table,
};
use crate::io::{create_output, resolve_output};

pub fn run_classify(args: ClassifyArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_classify_config(&args.classifier)?;
    let output = resolve_output(&args.output, ctx)?;

    let radii = IonicRadii::new(args.cation, args.anion);
    let classification = classify_with(radii, &config).context("Classification failed")?;
    let scale_position = scale_position_with(classification.ratio, config.scale_ceiling);

    if ctx.interactive {
        print_classification(&ClassificationView {
            radii,
            classification: &classification,
            scale_position,
            transition_anion_radius: transition_anion_radius(radii.cation_radius),
            config: &config,
        });
        print_threshold_table(Some(classification.geometry));
    }

    if let Some(spec) = output {
        let row = ClassifiedPair {
            label: "input".to_string(),
            radii,
            classification,
            scale_position,
        };
        let mut writer = create_output(spec.path.as_deref())?;
        write_classifications(&mut writer, spec.format, std::slice::from_ref(&row))
            .context("Failed to write classification")?;
    }

    Ok(())
}
