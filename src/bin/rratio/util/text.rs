/// Greedy word wrap; always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, ending in `…` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = s.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Horizontal gauge for a fraction in `[0, 1]`.
pub fn gauge(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("ratio out of range", 30), vec!["ratio out of range"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("invalid anion radius supplied", 14),
            vec!["invalid anion", "radius", "supplied"]
        );
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text() {
        assert_eq!(truncate("Octahedral", 10), "Octahedral");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Cuboctahedral/close-packed", 8), "Cubocta…");
        assert_eq!(truncate("abc", 1), "…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("r/R ≈ 0.550 Å", 6), "r/R ≈…");
    }

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0.5, 4), "██░░");
        assert_eq!(gauge(1.7, 3), "███");
        assert_eq!(gauge(-1.0, 2), "░░");
    }
}
