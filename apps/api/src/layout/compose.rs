//! Vertical placement of wrapped lines on the canvas.

/// A line of text anchored at `(x, y)`.
///
/// `x` is the horizontal centre of the line: the SVG uses `text-anchor: middle`,
/// so the renderer centres each line around it.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Stacks `lines` so the block is vertically centred on `center_y`.
///
/// Each line gets one `line_height` slot; `y` is the middle of its slot.
pub fn compose_lines(
    lines: &[String],
    center_x: f64,
    center_y: f64,
    line_height: f64,
) -> Vec<PositionedLine> {
    let total_height = lines.len() as f64 * line_height;
    let start_y = center_y - total_height / 2.0 + line_height / 2.0;

    lines
        .iter()
        .enumerate()
        .map(|(index, text)| PositionedLine {
            x: center_x,
            y: start_y + index as f64 * line_height,
            text: text.clone(),
        })
        .collect()
}
