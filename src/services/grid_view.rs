//! Render-ready view of a [`Grid`], shared by the HTML page and the JSON API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ColorEntry;
use crate::services::matrix::Grid;
use crate::services::ColorMath;

/// A header or row swatch
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SwatchView {
    /// Color as entered
    pub color: String,
    pub name: Option<String>,
    /// Name, or the color when unnamed
    pub label: String,
    /// Canonical `#rrggbb`
    pub hex: String,
    /// Most readable text color on this swatch
    pub label_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CellView {
    pub column_color: String,
    pub column_hex: String,
    /// Full-precision contrast ratio
    pub ratio: f64,
    /// Ratio with two decimals
    pub display_ratio: String,
    /// Whether the ratio reaches the threshold
    pub passes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RowView {
    pub swatch: SwatchView,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GridView {
    pub threshold: f64,
    pub header: Vec<SwatchView>,
    pub rows: Vec<RowView>,
}

impl GridView {
    pub fn build(grid: &Grid, math: &dyn ColorMath, threshold: f64, candidates: &[String]) -> Self {
        let swatch = |entry: &ColorEntry| {
            let hex = hex_or_literal(math, &entry.color);
            let label_color = math
                .most_readable(&hex, candidates)
                .unwrap_or("#000000")
                .to_string();
            SwatchView {
                color: entry.color.clone(),
                name: entry.name.clone(),
                label: entry.label().to_string(),
                hex,
                label_color,
            }
        };

        let rows = grid
            .rows
            .iter()
            .map(|row| RowView {
                swatch: swatch(&row.entry),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| CellView {
                        column_color: cell.column_color.clone(),
                        column_hex: hex_or_literal(math, &cell.column_color),
                        ratio: cell.ratio,
                        display_ratio: cell.display_ratio(),
                        passes: cell.meets(threshold),
                    })
                    .collect(),
            })
            .collect();

        Self {
            threshold,
            header: grid.header.iter().map(swatch).collect(),
            rows,
        }
    }

    /// Number of cells below the threshold
    pub fn failing(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .filter(|cell| !cell.passes)
            .count()
    }
}

fn hex_or_literal(math: &dyn ColorMath, color: &str) -> String {
    math.to_hex_string(color)
        .unwrap_or_else(|| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AxisState;
    use crate::services::{matrix, CssColorMath};

    fn candidates() -> Vec<String> {
        vec!["#ffffff".to_string(), "#000000".to_string()]
    }

    #[test]
    fn test_view_from_grid() {
        let x = AxisState::new(vec![
            ColorEntry::named("Black", "black"),
            ColorEntry::new("#767676"),
        ]);
        let y = AxisState::new(vec![ColorEntry::named("Paper", "#FFF")]);
        let grid = matrix::build_grid(&x, &y, &CssColorMath);

        let view = GridView::build(&grid, &CssColorMath, 4.5, &candidates());

        assert_eq!(view.header.len(), 2);
        assert_eq!(view.header[0].label, "Black");
        assert_eq!(view.header[0].hex, "#000000");
        assert_eq!(view.header[0].label_color, "#ffffff");
        assert_eq!(view.header[1].label, "#767676");

        let row = &view.rows[0];
        assert_eq!(row.swatch.hex, "#ffffff");
        assert_eq!(row.swatch.label_color, "#000000");
        assert_eq!(row.cells[0].display_ratio, "21.00");
        assert!(row.cells[0].passes);
        assert_eq!(row.cells[1].display_ratio, "4.54");
        assert!(row.cells[1].passes);
        assert_eq!(view.failing(), 0);
    }

    #[test]
    fn test_threshold_flags_cells() {
        let x = AxisState::new(vec![ColorEntry::new("#767676")]);
        let grid = matrix::build_grid(&x, &x, &CssColorMath);

        let view = GridView::build(&grid, &CssColorMath, 4.5, &candidates());
        assert!(!view.rows[0].cells[0].passes);
        assert_eq!(view.failing(), 1);
    }
}
