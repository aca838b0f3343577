//! Pairwise contrast grid between two axes.

use serde::Serialize;

use crate::models::{AxisState, ColorEntry};
use crate::services::ColorMath;

/// One comparison: a row color against a column color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    pub row_color: String,
    pub column_color: String,
    /// Full-precision contrast ratio
    pub ratio: f64,
}

impl GridCell {
    /// Ratio rounded to two decimals for display
    pub fn display_ratio(&self) -> String {
        format!("{:.2}", self.ratio)
    }

    pub fn meets(&self, threshold: f64) -> bool {
        meets_contrast(self.ratio, threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub entry: ColorEntry,
    pub cells: Vec<GridCell>,
}

/// Header (X entries) plus one row per Y entry
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Grid {
    pub header: Vec<ColorEntry>,
    pub rows: Vec<GridRow>,
}

impl Grid {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() || self.rows.is_empty()
    }
}

/// Pair every Y entry (rows) with every X entry (columns)
pub fn build_grid(x: &AxisState, y: &AxisState, math: &dyn ColorMath) -> Grid {
    let rows = y
        .iter()
        .map(|row| GridRow {
            entry: row.clone(),
            cells: x
                .iter()
                .map(|column| GridCell {
                    row_color: row.color.clone(),
                    column_color: column.color.clone(),
                    ratio: math.readability(&row.color, &column.color),
                })
                .collect(),
        })
        .collect();

    Grid {
        header: x.entries().to_vec(),
        rows,
    }
}

pub fn meets_contrast(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}
