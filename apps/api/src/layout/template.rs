//! The social-media post document: a fixed square canvas with the brand label,
//! a Hindi date stamp, the wrapped headline, and an accent rule.

use chrono::{Datelike, NaiveDate};

use crate::layout::compose::{compose_lines, PositionedLine};
use crate::layout::wrap::{estimated_char_width, wrap_words};
use crate::news::clean_headline;

/// Hindi month names as written by the `hi-IN` long date format.
const HINDI_MONTHS: [&str; 12] = [
    "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर", "अक्तूबर",
    "नवंबर", "दिसंबर",
];

#[derive(Debug, Clone)]
pub struct Palette {
    pub background: String,
    pub title: String,
    /// Brand label and bottom rule.
    pub accent: String,
    pub date: String,
}

/// Canvas geometry, typography and branding of a generated post.
#[derive(Debug, Clone)]
pub struct PostTemplate {
    pub width: u32,
    pub height: u32,
    /// Horizontal inset of the brand label, date stamp, headline and rule.
    pub margin: u32,
    pub font_family: String,
    pub title_font_size: f64,
    pub line_height: f64,
    pub max_words_per_line: usize,
    pub brand_label: String,
    pub brand_font_size: f64,
    pub date_font_size: f64,
    /// Baseline of the brand label and date stamp.
    pub header_y: u32,
    /// Distance from the bottom edge to the accent rule.
    pub rule_offset: u32,
    pub rule_thickness: u32,
    pub palette: Palette,
}

impl Default for PostTemplate {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
            margin: 60,
            font_family: "'Noto Sans', sans-serif".to_string(),
            title_font_size: 48.0,
            line_height: 60.0,
            max_words_per_line: 8,
            brand_label: "Zafaroo News".to_string(),
            brand_font_size: 36.0,
            date_font_size: 24.0,
            header_y: 100,
            rule_offset: 120,
            rule_thickness: 4,
            palette: Palette {
                background: "#22201F".to_string(),
                title: "white".to_string(),
                accent: "#FFDE59".to_string(),
                date: "#cccccc".to_string(),
            },
        }
    }
}

impl PostTemplate {
    /// Pixel budget for a single headline line.
    pub fn max_line_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(2 * self.margin))
    }

    /// Cleans, wraps and vertically centres `headline` on the canvas.
    pub fn title_lines(&self, headline: &str) -> Vec<PositionedLine> {
        let cleaned = clean_headline(headline);
        let lines = wrap_words(
            &cleaned,
            estimated_char_width(self.title_font_size),
            self.max_line_width(),
            self.max_words_per_line,
        );
        compose_lines(
            &lines,
            f64::from(self.width) / 2.0,
            f64::from(self.height) / 2.0,
            self.line_height,
        )
    }

    /// Builds the SVG document for a post.
    pub fn render_svg(&self, headline: &str, date_stamp: &str) -> String {
        let title = self
            .title_lines(headline)
            .iter()
            .map(|line| {
                format!(
                    r#"<text x="{}" y="{}" class="title-text">{}</text>"#,
                    line.x,
                    line.y,
                    escape_xml(&line.text)
                )
            })
            .collect::<Vec<_>>()
            .join("\n  ");

        let p = &self.palette;
        let font = &self.font_family;
        format!(
            r##"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      .title-text {{ font-family: {font}; font-size: {title_size}px; font-weight: bold; fill: {title_fill}; text-anchor: middle; dominant-baseline: middle; }}
      .brand-text {{ font-family: {font}; font-size: {brand_size}px; font-weight: bold; fill: {accent}; text-anchor: start; dominant-baseline: middle; }}
      .date-text {{ font-family: {font}; font-size: {date_size}px; fill: {date_fill}; text-anchor: end; dominant-baseline: middle; }}
    </style>
  </defs>
  <rect width="100%" height="100%" fill="{background}"/>
  <text x="{margin}" y="{header_y}" class="brand-text">{brand}</text>
  <text x="{date_x}" y="{header_y}" class="date-text">{date}</text>
  {title}
  <rect x="{margin}" y="{rule_y}" width="{rule_width}" height="{rule_thickness}" fill="{accent}"/>
</svg>
"##,
            width = self.width,
            height = self.height,
            title_size = self.title_font_size,
            title_fill = p.title,
            brand_size = self.brand_font_size,
            accent = p.accent,
            date_size = self.date_font_size,
            date_fill = p.date,
            background = p.background,
            margin = self.margin,
            header_y = self.header_y,
            brand = escape_xml(&self.brand_label),
            date_x = self.width.saturating_sub(self.margin),
            date = escape_xml(date_stamp),
            rule_y = self.height.saturating_sub(self.rule_offset),
            rule_width = self.width.saturating_sub(2 * self.margin),
            rule_thickness = self.rule_thickness,
        )
    }
}

/// `hi-IN` long date, e.g. `19 अक्तूबर 2026`.
pub fn hindi_date_stamp(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        HINDI_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Escapes text for use as SVG character data or attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
