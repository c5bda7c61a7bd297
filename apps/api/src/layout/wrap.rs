//! Greedy headline word-wrap against an estimated line width.
//!
//! Widths are estimated as `character count × per-character width`, not measured
//! from glyph outlines. The estimate is coarse on purpose: it keeps the generated
//! layout reproducible across machines regardless of which fonts are installed.

/// Ratio of average glyph advance to font size used for width estimation.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Per-character width estimate for a font size, in pixels.
pub fn estimated_char_width(font_size: f64) -> f64 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Breaks `text` into lines, greedily, in a single pass.
///
/// A word joins the current line while the joined line's estimated width stays
/// within `max_line_width` and the line holds fewer than `max_words_per_line`
/// words; otherwise it starts a new line. Words are never split, so a single
/// word wider than the budget occupies a line of its own and overflows.
///
/// No word is dropped and there is no cap on the number of lines: a long
/// headline can wrap taller than the canvas.
pub fn wrap_words(
    text: &str,
    estimated_char_width: f64,
    max_line_width: f64,
    max_words_per_line: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        let candidate_chars = if current.is_empty() {
            word_chars
        } else {
            current_chars + 1 + word_chars
        };
        let candidate_width = candidate_chars as f64 * estimated_char_width;

        if candidate_width <= max_line_width && current.len() < max_words_per_line {
            current.push(word);
            current_chars = candidate_chars;
        } else {
            if !current.is_empty() {
                lines.push(current.join(" "));
                current.clear();
            }
            current.push(word);
            current_chars = word_chars;
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE_CHAR_WIDTH: f64 = 28.8;
    const MAX_WIDTH: f64 = 960.0;
    const MAX_WORDS: usize = 8;

    fn estimated_width(line: &str, char_width: f64) -> f64 {
        line.chars().count() as f64 * char_width
    }

    fn assert_wrap_invariants(text: &str, char_width: f64, max_width: f64, max_words: usize) {
        let lines = wrap_words(text, char_width, max_width, max_words);

        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original, "words lost or reordered for {text:?}");

        for line in &lines {
            let words = line.split(' ').count();
            assert!(words <= max_words, "line {line:?} exceeds word cap");
            if words > 1 {
                assert!(
                    estimated_width(line, char_width) <= max_width,
                    "multi-word line {line:?} exceeds width budget"
                );
            }
        }
    }

    #[test]
    fn test_estimated_char_width_for_title_font() {
        assert!((estimated_char_width(48.0) - TITLE_CHAR_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_empty_text_produces_no_lines() {
        assert!(wrap_words("", TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS).is_empty());
        assert!(wrap_words("   \t ", TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS).is_empty());
    }

    #[test]
    fn test_short_headline_fits_on_one_line() {
        let lines = wrap_words("  Schools reopen  today ", TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
        assert_eq!(lines, vec!["Schools reopen today"]);
    }

    #[test]
    fn test_reference_headline_split() {
        // "Road closed near Paonta Sahib due" is 33 chars → 950.4px; adding " to"
        // makes 36 chars → 1036.8px, past the 960px budget.
        let lines = wrap_words(
            "Road closed near Paonta Sahib due to landslide",
            estimated_char_width(48.0),
            MAX_WIDTH,
            MAX_WORDS,
        );
        assert_eq!(lines, vec!["Road closed near Paonta Sahib due", "to landslide"]);
    }

    #[test]
    fn test_width_boundary_is_inclusive() {
        // "abcd efgh" is 9 chars → exactly 90px.
        assert_eq!(wrap_words("abcd efgh", 10.0, 90.0, 8), vec!["abcd efgh"]);
        assert_eq!(wrap_words("abcd efgh", 10.0, 89.0, 8), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_word_cap_breaks_short_words() {
        let text = "a b c d e f g h i j";
        let lines = wrap_words(text, TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
        assert_eq!(lines, vec!["a b c d e f g h", "i j"]);
    }

    #[test]
    fn test_long_word_overflows_alone() {
        let long = "x".repeat(40); // 40 × 28.8 = 1152px
        let text = format!("Big {long} news");
        let lines = wrap_words(&text, TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
        assert_eq!(lines, vec!["Big".to_string(), long, "news".to_string()]);
    }

    #[test]
    fn test_leading_long_word_is_kept() {
        let long = "y".repeat(50);
        let lines = wrap_words(&long, TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
        assert_eq!(lines, vec![long]);
    }

    #[test]
    fn test_zero_word_cap_puts_each_word_on_its_own_line() {
        assert_eq!(wrap_words("one two", 10.0, 1000.0, 0), vec!["one", "two"]);
    }

    #[test]
    fn test_character_count_not_bytes() {
        // "पांवटा साहिब" is 12 scalars (34 bytes) → 120px.
        let lines = wrap_words("पांवटा साहिब", 10.0, 120.0, 8);
        assert_eq!(lines.len(), 1, "UTF-8 byte length must not drive the estimate");
    }

    #[test]
    fn test_unbounded_line_count() {
        let text = "landslide ".repeat(60);
        let lines = wrap_words(&text, TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
        assert!(lines.len() > 15, "long input should wrap past the canvas, got {}", lines.len());
    }

    #[test]
    fn test_wrap_invariants_hold_across_inputs() {
        let inputs = [
            "Road closed near Paonta Sahib due to landslide",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
            "Himachal Pradesh cabinet approves new tourism policy for Sirmaur district villages",
            "Supercalifragilisticexpialidocious-antidisestablishmentarianism happens",
            "पांवटा साहिब में यमुना नदी का जलस्तर बढ़ा, प्रशासन ने जारी किया अलर्ट",
            "one",
        ];
        for input in inputs {
            assert_wrap_invariants(input, TITLE_CHAR_WIDTH, MAX_WIDTH, MAX_WORDS);
            assert_wrap_invariants(input, 12.0, 200.0, 3);
        }
    }
}
