use std::path::Path;

use radius_ratio::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "csv" => Some(Format::Csv),
        "tsv" | "tab" | "txt" => Some(Format::Tsv),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_delimited_formats() {
        assert_eq!(output(Path::new("sweep.csv")), Some(Format::Csv));
        assert_eq!(output(Path::new("out/SWEEP.TSV")), Some(Format::Tsv));
        assert_eq!(output(Path::new("pairs.txt")), Some(Format::Tsv));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(output(Path::new("result.json")), None);
        assert_eq!(output(Path::new("result")), None);
    }
}
