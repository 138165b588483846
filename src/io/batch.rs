use std::io::BufRead;

use serde::Deserialize;

use super::error::Error;
use crate::classify::{ClassifyConfig, classify_with, scale_position_with};
use crate::model::classification::Classification;
use crate::model::radii::IonicRadii;

/// One `[[pair]]` table of a batch document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchEntry {
    #[serde(default)]
    pub label: Option<String>,
    pub cation: f64,
    pub anion: f64,
}

impl BatchEntry {
    pub fn radii(&self) -> IonicRadii {
        IonicRadii::new(self.cation, self.anion)
    }

    /// The explicit label, or `#<index>` (1-based) when none is given.
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BatchDocument {
    #[serde(default, rename = "pair")]
    pairs: Vec<BatchEntry>,
}

/// Reads radius pairs from a TOML document of the form
///
/// ```toml
/// [[pair]]
/// label = "NaCl"
/// cation = 1.02
/// anion = 1.81
/// ```
pub struct BatchReader<R> {
    reader: R,
}

impl<R: BufRead> BatchReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read(mut self) -> Result<Vec<BatchEntry>, Error> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;

        let document: BatchDocument =
            toml::from_str(&text).map_err(|e| Error::from_toml(e, &text))?;

        if document.pairs.is_empty() {
            return Err(Error::EmptyBatch);
        }
        log::debug!("read {} radius pairs", document.pairs.len());
        Ok(document.pairs)
    }
}

/// A batch entry together with its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPair {
    pub label: String,
    pub radii: IonicRadii,
    pub classification: Classification,
    pub scale_position: f64,
}

/// Classifies every entry, stopping at the first rejected pair.
pub fn classify_batch(
    entries: &[BatchEntry],
    config: &ClassifyConfig,
) -> Result<Vec<ClassifiedPair>, Error> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = entry.display_label(index);
            let classification =
                classify_with(entry.radii(), config).map_err(|source| Error::Classify {
                    index: index + 1,
                    label: label.clone(),
                    source,
                })?;
            Ok(ClassifiedPair {
                label,
                radii: entry.radii(),
                scale_position: scale_position_with(classification.ratio, config.scale_ceiling),
                classification,
            })
        })
        .collect()
}
