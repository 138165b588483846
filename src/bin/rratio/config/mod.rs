mod classifier;

pub use classifier::{build_classify_config, build_sweep_config};
