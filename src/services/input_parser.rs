//! Free-text color list parsing.
//!
//! Each line holds a color and optionally a name, separated by `:`. Input is
//! usually pasted from stylesheets or design tokens, so trailing `;` / `,`
//! noise is tolerated and lines without a usable color are skipped.

use crate::models::{AxisState, ColorEntry};
use crate::services::ColorMath;

/// Only the first two `:`-separated fields of a line are looked at
const MAX_SEGMENTS: usize = 2;

/// Parse multi-line text into an axis.
///
/// A line yields an entry only when its last considered segment is a valid
/// color. Line order is kept and duplicates are not removed.
pub fn parse(text: &str, math: &dyn ColorMath) -> AxisState {
    let axis: AxisState = text
        .lines()
        .filter_map(|line| parse_line(line, math))
        .collect();

    tracing::debug!(entries = axis.len(), "Parsed color input");
    axis
}

/// Parse a single line into an entry
pub fn parse_line(line: &str, math: &dyn ColorMath) -> Option<ColorEntry> {
    let mut color: Option<&str> = None;
    let mut name: Option<&str> = None;
    let mut last_was_color = false;

    for segment in line.split(':').take(MAX_SEGMENTS) {
        let segment = clean_segment(segment);

        if math.is_valid(segment) {
            // A color pushed out by a later color becomes the label
            if let Some(previous) = color.replace(segment) {
                name.get_or_insert(previous);
            }
            last_was_color = true;
        } else {
            if !segment.is_empty() {
                name = Some(segment);
            }
            last_was_color = false;
        }
    }

    if !last_was_color {
        return None;
    }

    color.map(|color| ColorEntry {
        color: color.to_string(),
        name: name.map(str::to_string),
    })
}

/// Drop everything from the first `;`, one trailing `,`, then whitespace
fn clean_segment(segment: &str) -> &str {
    let segment = match segment.find(';') {
        Some(idx) => &segment[..idx],
        None => segment,
    };
    let segment = segment.strip_suffix(',').unwrap_or(segment);
    segment.trim()
}
