use std::io::{self, Write};

use radius_ratio::io::ClassifiedPair;
use radius_ratio::{
    Classification, ClassifyConfig, Geometry, IonicRadii, SweepConfig, SweepPoint, THRESHOLDS,
    bands, markers,
};

use crate::util::convert::policy_display_name;
use crate::util::text::{gauge, truncate};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_BATCH_ROWS: usize = 15;

pub struct ClassificationView<'a> {
    pub radii: IonicRadii,
    pub classification: &'a Classification,
    pub scale_position: f64,
    pub transition_anion_radius: f64,
    pub config: &'a ClassifyConfig,
}

pub fn print_classification(view: &ClassificationView<'_>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let c = view.classification;

    let mut rows = vec![
        ("Cation r", format!("{:.3} Å", view.radii.cation_radius)),
        ("Anion R", format!("{:.3} Å", view.radii.anion_radius)),
        ("Ratio r/R", format!("{:.3}", c.ratio)),
        ("Coordination", format!("NC = {}", c.coordination_number())),
        ("Geometry", c.geometry_name().to_string()),
        (
            "Scale position",
            format!(
                "{}  {:>5.1}%",
                gauge(view.scale_position, 20),
                view.scale_position * 100.0
            ),
        ),
        (
            "2D/3D transition",
            format!("R = {:.3} Å", view.transition_anion_radius),
        ),
        (
            "Degenerate input",
            policy_display_name(view.config.degenerate).to_string(),
        ),
    ];

    if !view.radii.has_positive_anion() {
        rows.push(("Note", "anion radius ≤ 0, sentinel ratio".to_string()));
    }
    if !c.within_validity {
        rows.push((
            "Validity",
            format!("r/R > {:.2}: outside model", view.config.validity_limit),
        ));
    } else if c.cation_exceeds_anion() {
        rows.push(("Validity", "r/R > 1: cation larger than anion".to_string()));
    }

    print_kv_table(&mut out, "Radius-Ratio Classification", &rows);
}

pub fn print_threshold_table(highlight: Option<Geometry>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "{}┌─ Pauling Stability Thresholds ─┐", INDENT);
    let _ = writeln!(out, "{}┌──────┬────────────────────────────┬───────────────┐", INDENT);
    let _ = writeln!(out, "{}│   NC │ Geometry                   │ r/R band      │", INDENT);
    let _ = writeln!(out, "{}├──────┼────────────────────────────┼───────────────┤", INDENT);

    for band in bands() {
        let range = match band.upper {
            Some(upper) => format!("{:.3}–{:.3}", band.lower, upper),
            None => format!("≥ {:.3}", band.lower),
        };
        let marker = if highlight == Some(band.geometry) { "▶" } else { " " };
        let _ = writeln!(
            out,
            "{}│{}{:>4} │ {:<26} │ {:<13} │",
            INDENT,
            marker,
            band.geometry.coordination_number(),
            band.geometry.name(),
            range
        );
    }

    let _ = writeln!(out, "{}└──────┴────────────────────────────┴───────────────┘", INDENT);
    let _ = writeln!(out, "{}Bounds: {}", INDENT, truncate(&markers(), SAFE_TABLE_WIDTH));
}

pub fn print_sweep_summary(config: &SweepConfig, points: &[SweepPoint]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(
        out,
        "{}┌─ Sweep at r = {:.3} Å ({} points) ─┐",
        INDENT,
        config.cation_radius,
        points.len()
    );
    let _ = writeln!(out, "{}┌──────┬────────────────────────────┬─────────────────┐", INDENT);
    let _ = writeln!(out, "{}│   NC │ Geometry                   │ Anion R (Å)     │", INDENT);
    let _ = writeln!(out, "{}├──────┼────────────────────────────┼─────────────────┤", INDENT);

    for t in THRESHOLDS.iter().rev() {
        let mut hits = points
            .iter()
            .filter(|p| p.classification.geometry == t.geometry)
            .map(|p| p.anion_radius);
        let Some(first) = hits.next() else {
            continue;
        };
        let (lo, hi) = hits.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r)));
        let _ = writeln!(
            out,
            "{}│ {:>4} │ {:<26} │ {:>6.3} – {:<6.3} │",
            INDENT,
            t.coordination_number(),
            t.geometry.name(),
            lo,
            hi
        );
    }

    let _ = writeln!(out, "{}└──────┴────────────────────────────┴─────────────────┘", INDENT);
}

pub fn print_batch_summary(rows: &[ClassifiedPair]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let label_w = 12usize;
    let ratio_w = 7usize;
    let nc_w = 3usize;
    let sep_overhead = 10;
    let geom_w = SAFE_TABLE_WIDTH.saturating_sub(label_w + ratio_w + nc_w + sep_overhead);

    let line = |l: char, m: char, r: char| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(label_w + 2),
            "─".repeat(ratio_w + 2),
            "─".repeat(nc_w + 2),
            "─".repeat(geom_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ Batch Classification ({} pairs) ─┐", INDENT, rows.len());
    let _ = writeln!(out, "{}", line('┌', '┬', '┐'));
    let _ = writeln!(
        out,
        "{INDENT}│ {:<label_w$} │ {:>ratio_w$} │ {:>nc_w$} │ {:<geom_w$} │",
        "Label", "r/R", "NC", "Geometry"
    );
    let _ = writeln!(out, "{}", line('├', '┼', '┤'));

    for row in rows.iter().take(MAX_BATCH_ROWS) {
        let c = &row.classification;
        let flag = if c.within_validity { "" } else { " !" };
        let _ = writeln!(
            out,
            "{INDENT}│ {:<label_w$} │ {:>ratio_w$.3} │ {:>nc_w$} │ {:<geom_w$} │",
            truncate(&row.label, label_w),
            c.ratio,
            c.coordination_number(),
            truncate(&format!("{}{}", c.geometry_name(), flag), geom_w),
        );
    }

    if rows.len() > MAX_BATCH_ROWS {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<label_w$} │ {:>ratio_w$} │ {:>nc_w$} │ {:<geom_w$} │",
            "...",
            "...",
            "..",
            format!("({} more pairs)", rows.len() - MAX_BATCH_ROWS),
        );
    }

    let _ = writeln!(out, "{}", line('└', '┴', '┘'));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
