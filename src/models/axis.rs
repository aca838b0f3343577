use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A parsed color plus an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorEntry {
    /// Color literal as entered (any syntax the color library accepts)
    pub color: String,
    /// Display label, omitted when none was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ColorEntry {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            name: Some(name.into()),
        }
    }

    /// Name if present, otherwise the color literal
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.color)
    }
}

/// One axis of the grid: an ordered list of entries.
///
/// Order is input order and duplicates are kept. An axis is replaced
/// wholesale on every submission, so there are no mutating methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisState(Vec<ColorEntry>);

impl AxisState {
    pub fn new(entries: Vec<ColorEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.0.iter()
    }

    pub fn into_entries(self) -> Vec<ColorEntry> {
        self.0
    }
}

impl FromIterator<ColorEntry> for AxisState {
    fn from_iter<I: IntoIterator<Item = ColorEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AxisState {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Both axes of a grid. `y` equals `x` when no separate Y axis was given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub x: AxisState,
    pub y: AxisState,
}

impl GridState {
    pub fn new(x: AxisState, y: AxisState) -> Self {
        Self { x, y }
    }

    /// Grid whose Y axis is implied by X
    pub fn symmetric(x: AxisState) -> Self {
        Self { y: x.clone(), x }
    }

    pub fn is_symmetric(&self) -> bool {
        axes_equal(&self.x, &self.y)
    }
}

/// Structural equality: same entries, same order, same optional names
pub fn axes_equal(a: &AxisState, b: &AxisState) -> bool {
    a == b
}

/// Swap the two axes.
///
/// An empty Y axis carries nothing to swap in, so the pair comes back
/// unchanged in that case.
pub fn reverse(x: AxisState, y: AxisState) -> (AxisState, AxisState) {
    if y.is_empty() {
        return (x, y);
    }
    (y, x)
}
