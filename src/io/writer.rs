use std::borrow::Cow;
use std::io::Write;

use super::Format;
use super::batch::ClassifiedPair;
use super::error::Error;
use crate::classify::{SweepPoint, THRESHOLDS};

const CLASSIFICATION_HEADER: [&str; 8] = [
    "label",
    "cation_radius",
    "anion_radius",
    "ratio",
    "coordination_number",
    "geometry",
    "scale_position",
    "within_validity",
];

const SWEEP_HEADER: [&str; 4] = ["anion_radius", "ratio", "coordination_number", "geometry"];

const THRESHOLD_HEADER: [&str; 3] = ["coordination_number", "geometry", "lower_bound"];

pub fn write_classifications<W: Write>(
    writer: &mut W,
    format: Format,
    rows: &[ClassifiedPair],
) -> Result<(), Error> {
    write_record(writer, format, &CLASSIFICATION_HEADER)?;
    for row in rows {
        let c = &row.classification;
        write_record(
            writer,
            format,
            &[
                &row.label,
                &format!("{}", row.radii.cation_radius),
                &format!("{}", row.radii.anion_radius),
                &format!("{:.6}", c.ratio),
                &c.coordination_number().to_string(),
                c.geometry_name(),
                &format!("{:.6}", row.scale_position),
                if c.within_validity { "true" } else { "false" },
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_sweep<W: Write>(
    writer: &mut W,
    format: Format,
    points: &[SweepPoint],
) -> Result<(), Error> {
    write_record(writer, format, &SWEEP_HEADER)?;
    for point in points {
        let c = &point.classification;
        write_record(
            writer,
            format,
            &[
                &format!("{:.4}", point.anion_radius),
                &format!("{:.6}", c.ratio),
                &c.coordination_number().to_string(),
                c.geometry_name(),
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_thresholds<W: Write>(writer: &mut W, format: Format) -> Result<(), Error> {
    write_record(writer, format, &THRESHOLD_HEADER)?;
    for t in THRESHOLDS {
        write_record(
            writer,
            format,
            &[
                &t.coordination_number().to_string(),
                t.geometry.name(),
                &format!("{:.3}", t.lower_bound),
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn write_record<W: Write>(writer: &mut W, format: Format, fields: &[&str]) -> Result<(), Error> {
    let sep = format.delimiter();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, "{sep}")?;
        }
        write!(writer, "{}", escape(format, field))?;
    }
    writeln!(writer)?;
    Ok(())
}

fn escape(format: Format, field: &str) -> Cow<'_, str> {
    match format {
        Format::Csv => {
            if field.contains([',', '"', '\n', '\r']) {
                Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
            } else {
                Cow::Borrowed(field)
            }
        }
        Format::Tsv => {
            if field.contains(['\t', '\n', '\r']) {
                Cow::Owned(field.replace(['\t', '\n', '\r'], " "))
            } else {
                Cow::Borrowed(field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ClassifyConfig, SweepConfig, sweep};
    use crate::io::batch::{BatchEntry, classify_batch};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), Error>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn entry(label: Option<&str>, cation: f64, anion: f64) -> BatchEntry {
        BatchEntry {
            label: label.map(str::to_string),
            cation,
            anion,
        }
    }

    #[test]
    fn writes_classification_rows() {
        let entries = vec![entry(Some("NaCl"), 0.55, 1.0), entry(None, 1.3, 1.0)];
        let rows = classify_batch(&entries, &ClassifyConfig::default()).unwrap();
        let out = render(|w| write_classifications(w, Format::Csv, &rows));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "label,cation_radius,anion_radius,ratio,coordination_number,geometry,scale_position,within_validity"
        );
        assert_eq!(lines[1], "NaCl,0.55,1,0.550000,6,Octahedral,0.500000,true");
        assert_eq!(
            lines[2],
            "#2,1.3,1,1.300000,12,Cuboctahedral/close-packed,1.000000,false"
        );
    }

    #[test]
    fn csv_quotes_awkward_labels() {
        let entries = vec![entry(Some("Na, \"rock salt\""), 0.55, 1.0)];
        let rows = classify_batch(&entries, &ClassifyConfig::default()).unwrap();
        let out = render(|w| write_classifications(w, Format::Csv, &rows));
        assert!(out.lines().nth(1).unwrap().starts_with("\"Na, \"\"rock salt\"\"\","));
    }

    #[test]
    fn tsv_flattens_tabs_in_labels() {
        let entries = vec![entry(Some("a\tb"), 0.55, 1.0)];
        let rows = classify_batch(&entries, &ClassifyConfig::default()).unwrap();
        let out = render(|w| write_classifications(w, Format::Tsv, &rows));
        assert!(out.lines().nth(1).unwrap().starts_with("a b\t0.55\t"));
    }

    #[test]
    fn writes_one_sweep_row_per_point() {
        let points = sweep(&SweepConfig::new(1.0), &ClassifyConfig::default()).unwrap();
        let out = render(|w| write_sweep(w, Format::Tsv, &points));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), points.len() + 1);
        assert_eq!(lines[0], "anion_radius\tratio\tcoordination_number\tgeometry");
        assert_eq!(lines[1], "0.1000\t10.000000\t12\tCuboctahedral/close-packed");
    }

    #[test]
    fn writes_threshold_table() {
        let out = render(|w| write_thresholds(w, Format::Csv));
        assert_eq!(
            out,
            "coordination_number,geometry,lower_bound\n\
             3,Triangular,0.155\n\
             4,Tetrahedral,0.225\n\
             6,Octahedral,0.414\n\
             8,Cubic,0.732\n\
             12,Cuboctahedral/close-packed,1.000\n"
        );
    }
}
