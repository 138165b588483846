use std::path::PathBuf;

use radius_ratio::io::Format;

#[derive(Debug, Clone)]
pub struct OutputSpec {
    /// Path to write to, or `None` for stdout.
    pub path: Option<PathBuf>,
    pub format: Format,
}

impl OutputSpec {
    pub fn target_name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| {
                p.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned()
            })
            .unwrap_or_else(|| "stdout".to_string())
    }
}
